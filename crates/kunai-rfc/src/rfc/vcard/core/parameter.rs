//! vCard parameter types (RFC 6350 §5).

use crate::rfc::vcard::build::escape_param_value;

/// A vCard parameter.
///
/// The key and value are written verbatim. A parameter without a value is
/// written as a bare flag (`;PREF`).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct VCardParameter {
    /// Parameter key, emitted as given.
    pub name: String,
    /// Already-encoded parameter value.
    pub value: Option<String>,
}

impl VCardParameter {
    /// Creates a parameter with an already-encoded value.
    #[must_use]
    pub fn new(name: impl Into<String>, value: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            value: Some(value.into()),
        }
    }

    /// Creates a flag-style parameter with no value.
    #[must_use]
    pub fn flag(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            value: None,
        }
    }

    /// Creates a parameter from a raw value.
    ///
    /// The value is caret-encoded (RFC 6868) and quoted when it contains
    /// `:`, `;` or `,`.
    #[must_use]
    pub fn encoded(name: impl Into<String>, raw_value: &str) -> Self {
        let (escaped, needs_quotes) = escape_param_value(raw_value);
        let value = if needs_quotes {
            format!("\"{escaped}\"")
        } else {
            escaped.into_owned()
        };

        Self::new(name, value)
    }

    /// Returns the value, if any.
    #[must_use]
    pub fn value(&self) -> Option<&str> {
        self.value.as_deref()
    }

    // --- Convenience constructors ---

    /// Creates a TYPE parameter.
    #[must_use]
    pub fn type_param(value: impl Into<String>) -> Self {
        Self::new("TYPE", value)
    }

    /// Creates a PREF parameter with priority (1-100).
    #[must_use]
    pub fn pref(priority: u8) -> Self {
        Self::new("PREF", priority.to_string())
    }

    /// Creates a LANGUAGE parameter.
    #[must_use]
    pub fn language(tag: impl Into<String>) -> Self {
        Self::new("LANGUAGE", tag)
    }
}
