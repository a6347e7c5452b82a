use thiserror::Error;

use crate::rfc::vcard::parse::ParseError;

/// vCard parsing and settings errors
#[derive(Error, Debug)]
pub enum RfcError {
    #[error("Parse error: {0}")]
    ParseError(#[from] ParseError),

    #[error(transparent)]
    CoreError(#[from] vcardkit_core::error::CoreError),
}

pub type RfcResult<T> = std::result::Result<T, RfcError>;
