#![allow(clippy::expect_used, dead_code)]
//! Test helpers for integration tests.

use std::io;

pub use kunai_test::rfc::error::RfcError;
pub use kunai_test::rfc::rfc::vcard::{
    CardState, ContentLine, PreEscaped, SequencedWriter, Sink, VCardParameter, VCardVersion,
    VCardWrite, VCardWriter,
};

/// Runs `f` against a writer over an in-memory sink and returns the output.
#[must_use]
pub fn capture(f: impl FnOnce(&mut VCardWriter<'_, Vec<u8>>)) -> String {
    let mut out = Vec::new();
    f(&mut VCardWriter::new(&mut out));
    String::from_utf8(out).expect("output is UTF-8")
}

/// Splits output into physical lines without their terminators.
#[must_use]
pub fn physical_lines(output: &str) -> Vec<&str> {
    output.split_terminator("\r\n").collect()
}

/// Sink that refuses every write, like a closed pipe.
pub struct ClosedSink;

impl Sink for ClosedSink {
    fn append(&mut self, _bytes: &[u8]) -> io::Result<()> {
        Err(io::Error::new(io::ErrorKind::BrokenPipe, "closed"))
    }
}
