//! Descriptors handed to the vCard writer.

mod escaped;
mod parameter;
mod property;
mod version;

pub use escaped::PreEscaped;
pub use parameter::VCardParameter;
pub use property::ContentLine;
pub use version::VCardVersion;
