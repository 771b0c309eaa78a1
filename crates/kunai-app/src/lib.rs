//! Card documents and their rendering to vCard text.

pub mod card;
pub mod cli;
pub mod error;
pub mod render;
