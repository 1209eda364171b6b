mod node;
mod leaf;
mod branch;
mod concat;
mod slice;
mod fibonacci;
mod rebalance;
mod shared_rope;
mod rope_builder;
mod rope_iterator;
mod rope_extensions;
mod utf8_rope;

pub use self::node::*;
pub use self::leaf::*;
pub use self::branch::*;
pub use self::concat::*;
pub use self::fibonacci::*;
pub use self::rebalance::*;
pub use self::shared_rope::*;
pub use self::rope_builder::*;
pub use self::rope_iterator::*;
pub use self::utf8_rope::*;
