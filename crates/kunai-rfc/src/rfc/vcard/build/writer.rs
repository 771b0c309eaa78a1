//! Stateless vCard writer.

use kunai_core::constants::{BEGIN_VCARD, END_VCARD, VERSION_PROPERTY};

use super::fold;
use super::sink::Sink;
use crate::error::RfcResult;
use crate::rfc::vcard::core::{ContentLine, VCardVersion};

/// Operations shared by vCard writers.
pub trait VCardWrite {
    /// Writes `BEGIN:VCARD` followed by `VERSION:<version>`.
    ///
    /// ## Errors
    /// Returns an error if the version cannot be written as a line or the
    /// sink fails.
    fn start_vcard(&mut self, version: &VCardVersion) -> RfcResult<()>;

    /// Starts a card with [`VCardVersion::LATEST`].
    ///
    /// ## Errors
    /// See [`Self::start_vcard`].
    fn start_vcard_latest(&mut self) -> RfcResult<()> {
        self.start_vcard(&VCardVersion::LATEST)
    }

    /// Writes `END:VCARD`.
    ///
    /// ## Errors
    /// Returns an error if the sink fails.
    fn end_vcard(&mut self) -> RfcResult<()>;

    /// Assembles and writes one content line.
    ///
    /// ## Errors
    /// Returns an error if the assembled line is malformed or the sink fails.
    fn print_content_line(&mut self, line: &ContentLine) -> RfcResult<()>;
}

/// Writes vCard lines straight to a borrowed sink.
///
/// Holds no state besides the sink, so envelope operations may be issued in
/// any order. Wrap it in [`super::SequencedWriter`] to have the order checked.
pub struct VCardWriter<'s, S: Sink + ?Sized> {
    sink: &'s mut S,
}

impl<'s, S: Sink + ?Sized> VCardWriter<'s, S> {
    #[must_use]
    pub fn new(sink: &'s mut S) -> Self {
        Self { sink }
    }

    /// Writes a logical line, folding it as needed.
    ///
    /// ## Errors
    /// See [`fold::print_line`].
    pub fn print_line(&mut self, line: &str) -> RfcResult<()> {
        fold::print_line(&mut *self.sink, line)
    }

    /// Gives the sink back to the caller.
    #[must_use]
    pub fn into_inner(self) -> &'s mut S {
        self.sink
    }
}

impl<S: Sink + ?Sized> VCardWrite for VCardWriter<'_, S> {
    fn start_vcard(&mut self, version: &VCardVersion) -> RfcResult<()> {
        tracing::debug!(%version, "Starting vCard");

        self.print_line(BEGIN_VCARD)?;
        self.print_line(&format!("{VERSION_PROPERTY}:{version}"))
    }

    fn end_vcard(&mut self) -> RfcResult<()> {
        tracing::debug!("Ending vCard");

        self.print_line(END_VCARD)
    }

    fn print_content_line(&mut self, line: &ContentLine) -> RfcResult<()> {
        tracing::trace!(name = %line.name, params = line.params.len(), "Writing content line");

        self.print_line(&line.assemble())
    }
}
