//! Marker for values that are safe to place after the `:` of a content line.

use std::fmt;

use crate::rfc::vcard::build::{escape_component, escape_text};

/// A property value that has already been escaped per RFC 6350 §3.4.
///
/// The writer copies it verbatim. Construct it with [`Self::trusted`] when the
/// caller has escaped the value itself, or with one of the escaping
/// constructors.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct PreEscaped(String);

impl PreEscaped {
    /// Wraps a value the caller has already escaped.
    #[must_use]
    pub fn trusted(value: impl Into<String>) -> Self {
        Self(value.into())
    }

    /// Escapes a TEXT value.
    #[must_use]
    pub fn escape_text(value: &str) -> Self {
        Self(escape_text(value))
    }

    /// Escapes each item and joins them with `,` (e.g. `CATEGORIES`, `NICKNAME`).
    #[must_use]
    pub fn escape_list<I, T>(items: I) -> Self
    where
        I: IntoIterator<Item = T>,
        T: AsRef<str>,
    {
        let joined = items
            .into_iter()
            .map(|item| escape_component(item.as_ref()))
            .collect::<Vec<_>>()
            .join(",");
        Self(joined)
    }

    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for PreEscaped {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}
