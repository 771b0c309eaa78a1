//! Byte destination for vCard output.

use std::io;

/// Append-only byte destination.
///
/// Writers borrow a sink for their lifetime and only ever append to it.
/// Opening, flushing and closing belong to the sink's owner.
pub trait Sink {
    /// Appends all of `bytes`.
    ///
    /// ## Errors
    /// Returns the underlying I/O error if the bytes could not be written.
    fn append(&mut self, bytes: &[u8]) -> io::Result<()>;
}

impl<W: io::Write + ?Sized> Sink for W {
    fn append(&mut self, bytes: &[u8]) -> io::Result<()> {
        self.write_all(bytes)
    }
}
