//! vCard line folding (RFC 6350 §3.2).

use std::iter::FusedIterator;

use kunai_core::constants::{FOLDING_BREAK, FOLDING_LENGTH, LINE_BREAK};

use super::sink::Sink;
use crate::error::{RfcError, RfcResult};

/// Splits a logical line into physical-line segments.
///
/// Every segment but the last holds exactly [`FOLDING_LENGTH`] characters.
/// The last holds the remaining 1 to 75, or nothing for an empty line.
#[must_use]
pub fn segments(line: &str) -> Segments<'_> {
    Segments { rest: Some(line) }
}

/// Iterator returned by [`segments`].
#[derive(Debug, Clone)]
pub struct Segments<'a> {
    rest: Option<&'a str>,
}

impl<'a> Iterator for Segments<'a> {
    type Item = &'a str;

    fn next(&mut self) -> Option<&'a str> {
        let rest = self.rest?;

        // Byte offset of the first character past the limit, if there is one.
        if let Some((split, _)) = rest.char_indices().nth(FOLDING_LENGTH) {
            let (head, tail) = rest.split_at(split);
            self.rest = Some(tail);
            Some(head)
        } else {
            self.rest = None;
            Some(rest)
        }
    }
}

impl FusedIterator for Segments<'_> {}

/// Folds a logical line into its physical lines, terminators included.
///
/// Does not validate the line; see [`print_line`].
#[must_use]
pub fn fold_line(line: &str) -> String {
    let folds = line.chars().count() / FOLDING_LENGTH;
    let mut folded = String::with_capacity(line.len() + folds * FOLDING_BREAK.len() + 2);

    for (i, segment) in segments(line).enumerate() {
        if i > 0 {
            folded.push_str(FOLDING_BREAK);
        }
        folded.push_str(segment);
    }
    folded.push_str(LINE_BREAK);

    folded
}

/// Writes a logical line to `sink`, folded at [`FOLDING_LENGTH`] characters.
///
/// Segments go to the sink as they are produced. Continuations end in
/// `CRLF SPACE`, the last segment in a bare `CRLF`.
///
/// ## Errors
/// - `RfcError::MalformedInput` if the line contains CR or LF or starts with a
///   space. Nothing is written in that case.
/// - `RfcError::SinkWrite` if the sink fails. Segments written before the
///   failure stay written.
pub fn print_line<S: Sink + ?Sized>(sink: &mut S, line: &str) -> RfcResult<()> {
    check_line(line)?;

    let mut segments = segments(line).peekable();
    while let Some(segment) = segments.next() {
        let folded = segments.peek().is_some();
        let terminator = if folded { FOLDING_BREAK } else { LINE_BREAK };

        sink.append(segment.as_bytes())?;
        sink.append(terminator.as_bytes())?;

        tracing::trace!(bytes = segment.len(), folded, "Wrote physical line");
    }

    Ok(())
}

fn check_line(line: &str) -> RfcResult<()> {
    let reason = if line.contains(['\r', '\n']) {
        "contains a line break"
    } else if line.starts_with(' ') {
        "starts with a space"
    } else {
        return Ok(());
    };

    tracing::warn!(reason, "Rejected logical line");

    Err(RfcError::MalformedInput {
        line: line.to_string(),
        reason,
    })
}
