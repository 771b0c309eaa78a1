//! vCard serialization (RFC 6350).
//!
//! ## Features
//!
//! - Line folding at 75 characters, never splitting a character
//! - Content-line assembly in caller order
//! - `BEGIN`/`VERSION`/`END` envelope
//! - Opt-in envelope sequencing via [`SequencedWriter`]
//! - Text escaping per RFC 6350 and RFC 6868 caret encoding for parameters,
//!   for callers preparing values

mod escape;
mod fold;
mod sequenced;
mod sink;
mod writer;

pub use escape::{escape_component, escape_param_value, escape_text};
pub use fold::{Segments, fold_line, print_line, segments};
pub use sequenced::{CardState, SequencedWriter};
pub use sink::Sink;
pub use writer::{VCardWrite, VCardWriter};
