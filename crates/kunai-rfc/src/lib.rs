//! RFC 6350 vCard output: line folding, content-line assembly, and the
//! `BEGIN`/`VERSION`/`END` envelope.

pub mod error;
pub mod rfc;
