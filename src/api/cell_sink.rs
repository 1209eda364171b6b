use std::convert::{Infallible};

///
/// A sequential destination for the cells of a rope
///
/// Ropes write their content to a sink one run at a time, in order. A sink that fails
/// stops the write: the error is returned to the caller unchanged.
///
pub trait CellSink<Cell> {
    /// The error produced when the sink can't accept any more cells
    type Error;

    ///
    /// Appends a run of cells to this sink
    ///
    fn write_cells(&mut self, cells: &[Cell]) -> Result<(), Self::Error>;
}

impl<Cell: Clone> CellSink<Cell> for Vec<Cell> {
    type Error = Infallible;

    #[inline]
    fn write_cells(&mut self, cells: &[Cell]) -> Result<(), Infallible> {
        self.extend_from_slice(cells);
        Ok(())
    }
}
