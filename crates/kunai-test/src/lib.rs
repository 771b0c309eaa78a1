//! kunai vCard writer - integration test support.
//!
//! Re-exports the workspace crates under one root so integration tests can
//! use `kunai_test::` paths.

pub use kunai_app as app;
pub use kunai_core as core;
pub use kunai_rfc as rfc;
