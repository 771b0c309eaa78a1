//! JSON card documents.
//!
//! A document is either one card or an array of cards:
//!
//! ```json
//! {
//!   "version": "4.0",
//!   "properties": [
//!     { "name": "FN", "value": "Jane Doe" },
//!     { "group": "item1", "name": "TEL", "value": "+1-555-0100",
//!       "params": [{ "name": "TYPE", "value": "cell" }, { "name": "PREF" }] },
//!     { "name": "CATEGORIES", "value": ["friends", "work"] }
//!   ]
//! }
//! ```

use std::io::Read;

use kunai_rfc::rfc::vcard::{ContentLine, PreEscaped, VCardParameter, VCardVersion};
use serde::Deserialize;

use crate::error::AppResult;

/// One card.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct CardDocument {
    /// Written to `VERSION`; the configured default applies when absent.
    #[serde(default)]
    pub version: Option<String>,
    #[serde(default)]
    pub properties: Vec<PropertyInput>,
}

impl CardDocument {
    #[must_use]
    pub fn version_or(&self, default: &str) -> VCardVersion {
        VCardVersion::from(self.version.as_deref().unwrap_or(default))
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct PropertyInput {
    #[serde(default)]
    pub group: Option<String>,
    pub name: String,
    #[serde(default)]
    pub params: Vec<ParamInput>,
    pub value: ValueInput,
    /// Value is already escaped and is written as-is.
    #[serde(default)]
    pub raw: bool,
}

/// A parameter; no value makes it a flag.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct ParamInput {
    pub name: String,
    #[serde(default)]
    pub value: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(untagged)]
pub enum ValueInput {
    Text(String),
    List(Vec<String>),
}

#[derive(Deserialize)]
#[serde(untagged)]
enum Documents {
    One(CardDocument),
    Many(Vec<CardDocument>),
}

impl PropertyInput {
    /// Builds the content line, escaping the value unless it is raw.
    #[must_use]
    pub fn to_content_line(&self) -> ContentLine {
        let value = match (&self.value, self.raw) {
            (ValueInput::Text(text), true) => PreEscaped::trusted(text.as_str()),
            (ValueInput::Text(text), false) => PreEscaped::escape_text(text),
            (ValueInput::List(items), true) => PreEscaped::trusted(items.join(",")),
            (ValueInput::List(items), false) => PreEscaped::escape_list(items),
        };

        let params = self.params.iter().map(|param| match param.value {
            Some(ref value) => VCardParameter::encoded(param.name.as_str(), value),
            None => VCardParameter::flag(param.name.as_str()),
        });

        let line = ContentLine::new(self.name.as_str(), value).with_params(params);
        match self.group {
            Some(ref group) => line.with_group(group.as_str()),
            None => line,
        }
    }
}

/// Reads one card or an array of cards.
///
/// ## Errors
/// Returns `AppError::InvalidDocument` if the input is not a card document or
/// cannot be read.
pub fn read_documents(reader: impl Read) -> AppResult<Vec<CardDocument>> {
    let documents = match serde_json::from_reader(reader)? {
        Documents::One(card) => vec![card],
        Documents::Many(cards) => cards,
    };

    tracing::debug!(cards = documents.len(), "Read card documents");

    Ok(documents)
}
