//! vCard output (RFC 6350).
//!
//! This module writes vCard data to a byte sink one logical line at a time.
//! Nothing is buffered beyond the line being assembled.
//!
//! ## Overview
//!
//! A logical line is folded into physical lines of at most 75 characters.
//! Continuation lines start with a single space and every physical line ends
//! with CRLF. Content lines are assembled as
//! `[group.]NAME[;PARAM[=VALUE]]*:VALUE` before folding.
//!
//! ## Usage
//!
//! ```rust
//! use kunai_rfc::rfc::vcard::{ContentLine, PreEscaped, VCardParameter, VCardWrite, VCardWriter};
//!
//! let mut out = Vec::new();
//! let mut writer = VCardWriter::new(&mut out);
//!
//! writer.start_vcard_latest().unwrap();
//! writer
//!     .print_content_line(
//!         &ContentLine::new("TEL", PreEscaped::trusted("+1-555-0100"))
//!             .with_group("item1")
//!             .with_param(VCardParameter::new("TYPE", "cell")),
//!     )
//!     .unwrap();
//! writer.end_vcard().unwrap();
//!
//! assert_eq!(
//!     String::from_utf8(out).unwrap(),
//!     "BEGIN:VCARD\r\nVERSION:4.0\r\nitem1.TEL;TYPE=cell:+1-555-0100\r\nEND:VCARD\r\n"
//! );
//! ```
//!
//! ## Escaping
//!
//! The writer never escapes. Values travel as [`PreEscaped`], which is either
//! asserted by the caller or produced by [`PreEscaped::escape_text`].
//!
//! ## Submodules
//!
//! - [`core`] - Line descriptors (`ContentLine`, `VCardParameter`, `VCardVersion`, `PreEscaped`)
//! - [`build`] - Sink, folding, escaping and the writers

pub mod build;
pub mod core;


pub use self::build::{
    CardState, SequencedWriter, Sink, VCardWrite, VCardWriter, fold_line, print_line, segments,
};
pub use self::core::{ContentLine, PreEscaped, VCardParameter, VCardVersion};
