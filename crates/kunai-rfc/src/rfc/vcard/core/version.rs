//! vCard version identifiers.

use std::fmt;

use kunai_core::constants::{VCARD_VERSION_3_0, VCARD_VERSION_4_0};

/// Value written to the `VERSION` property.
///
/// Any identifier is accepted; unknown ones are carried as [`Self::Other`].
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum VCardVersion {
    /// vCard 3.0 (RFC 2426).
    V3,
    /// vCard 4.0 (RFC 6350).
    #[default]
    V4,
    /// Any other identifier, written verbatim.
    Other(String),
}

impl VCardVersion {
    /// The latest version this writer knows about.
    pub const LATEST: Self = Self::V4;

    /// Returns the version string.
    #[must_use]
    pub fn as_str(&self) -> &str {
        match self {
            Self::V3 => VCARD_VERSION_3_0,
            Self::V4 => VCARD_VERSION_4_0,
            Self::Other(s) => s,
        }
    }
}

impl From<&str> for VCardVersion {
    fn from(s: &str) -> Self {
        match s {
            VCARD_VERSION_3_0 => Self::V3,
            VCARD_VERSION_4_0 => Self::V4,
            other => Self::Other(other.to_string()),
        }
    }
}

impl fmt::Display for VCardVersion {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
