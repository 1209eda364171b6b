use std::ops::{Range};

///
/// Represents a read-only Rope data structure
///
pub trait Rope {
    /// A 'cell' or character in the rope. For a UTF-8 rope this could be `u8`, for example
    type Cell: Clone;

    ///
    /// Returns the number of cells in this rope
    ///
    fn len(&self) -> usize;

    ///
    /// Returns true if this rope contains no cells
    ///
    fn is_empty(&self) -> bool {
        self.len() == 0
    }

    ///
    /// Returns the length of the longest path from the root of this rope to one of its leaves
    ///
    fn depth(&self) -> usize;

    ///
    /// Reads the cell values for a range in this rope. Ranges that extend beyond the end of
    /// the rope are truncated.
    ///
    fn read_cells<'a>(&'a self, range: Range<usize>) -> Box<dyn 'a+Iterator<Item=&'a Self::Cell>>;
}
