use thiserror::Error;

use crate::rfc::vcard::build::CardState;

/// vCard writing errors
#[derive(Error, Debug)]
pub enum RfcError {
    /// The sink rejected a write. Bytes appended before the failure stay written.
    #[error("Sink write failed: {0}")]
    SinkWrite(#[from] std::io::Error),

    #[error("Malformed line {line:?}: {reason}")]
    MalformedInput { line: String, reason: &'static str },

    #[error("Cannot {operation} while the card is {state}")]
    OutOfSequence {
        operation: &'static str,
        state: CardState,
    },
}

pub type RfcResult<T> = std::result::Result<T, RfcError>;
