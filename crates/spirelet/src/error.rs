use thiserror::Error;

/// Errors produced while decoding a generator response.
///
/// A non-`ok` status is not a decode error; these cover `ok` responses whose
/// fields violate the wire format.
#[derive(Debug, Error)]
pub enum DecodeError {
    #[error("response is empty")]
    EmptyResponse,

    #[error("missing required field 't'")]
    MissingTrapField,

    #[error("trap string length {0} is not a multiple of 5")]
    BadTrapLength(usize),

    #[error("core tier '{0}' is not a number")]
    InvalidTier(String),

    #[error("core tier {0} is out of range (expected 1-7)")]
    TierOutOfRange(u32),

    #[error("unknown core modifier code '{0}'")]
    UnknownModifierCode(char),

    #[error("malformed core modifier segment '{0}' (expected CODE:magnitude)")]
    MalformedModifier(String),

    #[error("core modifier magnitude '{0}' is not a number")]
    InvalidMagnitude(String),
}

/// Errors produced by [`SpireClient`](crate::SpireClient) queries.
#[derive(Debug, Error)]
pub enum QueryError {
    #[error("request failed: {0}")]
    Transport(#[from] reqwest::Error),

    #[error(transparent)]
    Decode(#[from] DecodeError),
}
