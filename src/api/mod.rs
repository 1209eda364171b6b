mod rope_trait;
mod cell_sink;
mod rope_error;

pub use self::rope_trait::*;
pub use self::cell_sink::*;
pub use self::rope_error::*;
