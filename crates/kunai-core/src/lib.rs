//! Shared constants, errors, and configuration for the kunai vCard writer.

pub mod config;
pub mod constants;
pub mod error;
