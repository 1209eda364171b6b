//!
//! `shared_rope` is a persistent, immutable implementation of the rope data structure.
//!
//! Ropes are an extension of the string type that support efficient manipulation of
//! very large amounts of data. Every operation on a `SharedRope` returns a new rope that
//! shares as much structure as possible with the rope it was derived from: nothing that
//! has been built is ever modified, so ropes can be cloned cheaply and read from many
//! threads at once.
//!
//! `shared_rope` supplies:
//!
//!  * Ropes of any 'cell' type, so it works for bytes and UTF-16 code units as well as any
//!    other vector type that needs the same editing properties
//!  * Concatenation, slicing and prefix/postfix removal that reuse untouched subtrees
//!  * A Fibonacci-bounded rebalancer that restores logarithmic depth after many appends
//!  * A streaming reader that produces the content of a rope in order without materializing
//!    it, along with `std::io` adapters for byte ropes
//!
//! ## Examples
//!
//! Slicing a concatenated rope
//!
//! ```
//! use shared_rope::*;
//!
//! let rope = SharedRope::from("a").concat(&SharedRope::from("bc")).concat(&SharedRope::from("def"));
//!
//! assert!(rope.slice(2, 5).to_vec() == b"cde".to_vec());
//! assert!(rope.to_string_lossy() == "abcdef");
//! ```
//!
//! Reading a rope in chunks
//!
//! ```
//! use shared_rope::*;
//!
//! let rope        = SharedRope::from(vec![1, 2, 3]).concat(&SharedRope::from(vec![4, 5]));
//! let mut reader  = rope.reader();
//! let mut buf     = [0; 2];
//! let mut result  = vec![];
//!
//! while let ReadResult::Cells(count) = reader.read(&mut buf) {
//!     result.extend_from_slice(&buf[0..count]);
//! }
//!
//! assert!(result == vec![1, 2, 3, 4, 5]);
//! ```

pub mod api;
pub mod rope;
pub mod stream_rope;

pub use crate::api::*;
pub use crate::rope::*;
pub use crate::stream_rope::*;
