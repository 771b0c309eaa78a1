//! Envelope sequencing on top of a stateless writer.

use std::fmt;

use super::writer::VCardWrite;
use crate::error::{RfcError, RfcResult};
use crate::rfc::vcard::core::{ContentLine, VCardVersion};

/// Where a [`SequencedWriter`] is within the current card.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum CardState {
    #[default]
    NotStarted,
    Started,
    Ended,
}

impl CardState {
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::NotStarted => "not started",
            Self::Started => "started",
            Self::Ended => "ended",
        }
    }
}

impl fmt::Display for CardState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Rejects envelope operations issued out of order.
///
/// `start_vcard` is allowed from `NotStarted` and `Ended`, so one stream may
/// hold several cards. `end_vcard` and content lines require `Started`.
/// A rejected call writes nothing. The state only advances when the wrapped
/// writer succeeds.
#[derive(Debug)]
pub struct SequencedWriter<W> {
    inner: W,
    state: CardState,
}

impl<W: VCardWrite> SequencedWriter<W> {
    #[must_use]
    pub fn new(inner: W) -> Self {
        Self {
            inner,
            state: CardState::NotStarted,
        }
    }

    #[must_use]
    pub const fn state(&self) -> CardState {
        self.state
    }

    /// Returns the wrapped writer.
    #[must_use]
    pub fn into_inner(self) -> W {
        self.inner
    }

    fn require(&self, operation: &'static str, allowed: &[CardState]) -> RfcResult<()> {
        if allowed.contains(&self.state) {
            return Ok(());
        }

        tracing::warn!(operation, state = %self.state, "vCard operation out of sequence");

        Err(RfcError::OutOfSequence {
            operation,
            state: self.state,
        })
    }
}

impl<W: VCardWrite> VCardWrite for SequencedWriter<W> {
    fn start_vcard(&mut self, version: &VCardVersion) -> RfcResult<()> {
        self.require("start_vcard", &[CardState::NotStarted, CardState::Ended])?;
        self.inner.start_vcard(version)?;
        self.state = CardState::Started;
        Ok(())
    }

    fn end_vcard(&mut self) -> RfcResult<()> {
        self.require("end_vcard", &[CardState::Started])?;
        self.inner.end_vcard()?;
        self.state = CardState::Ended;
        Ok(())
    }

    fn print_content_line(&mut self, line: &ContentLine) -> RfcResult<()> {
        self.require("print_content_line", &[CardState::Started])?;
        self.inner.print_content_line(line)
    }
}
