use crate::api::*;
use crate::rope::*;

use std::io;

///
/// A cell sink that writes bytes to a `std::io::Write`
///
pub struct IoSink<Writer> {
    /// Where the bytes are written to
    writer: Writer,

    /// The number of bytes written so far
    written: u64
}

impl<Writer: io::Write> IoSink<Writer> {
    ///
    /// Creates a sink that writes to the specified target
    ///
    pub fn new(writer: Writer) -> IoSink<Writer> {
        IoSink {
            writer:     writer,
            written:    0
        }
    }

    ///
    /// The number of bytes that have been written to this sink
    ///
    pub fn written(&self) -> u64 {
        self.written
    }

    ///
    /// Retrieves the writer from this sink
    ///
    pub fn into_inner(self) -> Writer {
        self.writer
    }
}

impl<Writer: io::Write> CellSink<u8> for IoSink<Writer> {
    type Error = io::Error;

    fn write_cells(&mut self, cells: &[u8]) -> io::Result<()> {
        self.writer.write_all(cells)?;
        self.written += cells.len() as u64;

        Ok(())
    }
}

impl SharedRope<u8> {
    ///
    /// Writes the bytes in this rope to a `std::io::Write`, returning the number of bytes written
    ///
    pub fn write_to_io<Writer: ?Sized+io::Write>(&self, writer: &mut Writer) -> io::Result<u64> {
        let mut sink = IoSink::new(writer);

        self.write_to(&mut sink)?;
        Ok(sink.written())
    }
}
