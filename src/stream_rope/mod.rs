//!
//! # Streaming ropes
//!
//! The types in this module read the content of a rope sequentially without copying the
//! whole rope into a single buffer first. A `RopeReader` pulls cells from a rope into a
//! buffer supplied by the caller, and works as a `std::io::Read` for byte ropes. An `IoSink`
//! goes the other way, letting a byte rope be written to any `std::io::Write`.
//!

mod rope_reader;
mod io_sink;
#[cfg(test)] mod tests;

pub use self::rope_reader::*;
pub use self::io_sink::*;
