//! Response decoding: raw generator text to a structured result.

use std::collections::HashMap;

use crate::core_spec::{CoreSpec, Modifier, ModifierCode, Tier};
use crate::error::DecodeError;
use crate::grid::SpireGrid;

/// Decoded generator response.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SpireResponse {
    /// Generation succeeded.
    Generated {
        spire: SpireGrid,
        core: Option<CoreSpec>,
    },
    /// The server refused the query; `message` is its verbatim text.
    Rejected { message: String },
}

impl SpireResponse {
    pub fn is_rejected(&self) -> bool {
        matches!(self, SpireResponse::Rejected { .. })
    }
}

/// Decode a raw generator response.
///
/// A non-`ok` status token is not a decode error: it becomes
/// [`SpireResponse::Rejected`] carrying the server's message. Decode errors
/// are reserved for `ok` responses whose fields violate the wire format.
pub fn decode_response(text: &str) -> Result<SpireResponse, DecodeError> {
    if text.is_empty() {
        return Err(DecodeError::EmptyResponse);
    }

    let (status, rest) = match text.split_once(' ') {
        Some((status, rest)) => (status, rest),
        None => (text, ""),
    };

    if status != "ok" {
        // The message is everything after the status token; a bare status
        // with no message falls back to the full text.
        let message = if rest.is_empty() { text } else { rest };
        return Ok(SpireResponse::Rejected {
            message: message.to_string(),
        });
    }

    let fields = scan_fields(rest);

    let traps = fields.get("t").copied().ok_or(DecodeError::MissingTrapField)?;
    let spire = SpireGrid::from_trap_string(traps)?;

    let core = match fields.get("core") {
        Some(value) => Some(decode_core(value)?),
        None => None,
    };

    Ok(SpireResponse::Generated { spire, core })
}

/// Space-delimited `key=value` tokenizer.
///
/// Tokens without `=` are skipped, not errors, and duplicate keys keep the
/// last value. The server's field set is open-ended; callers pick the keys
/// they know and ignore the rest.
fn scan_fields(text: &str) -> HashMap<&str, &str> {
    let mut fields = HashMap::new();
    for token in text.split(' ') {
        match token.split_once('=') {
            Some((key, value)) => {
                fields.insert(key, value);
            }
            None if token.is_empty() => {}
            None => {
                tracing::debug!(token, "Skipping response token without '='");
            }
        }
    }
    fields
}

/// Parse the `core` field: `<tier>[/<CODE>:<magnitude>]*`.
fn decode_core(value: &str) -> Result<CoreSpec, DecodeError> {
    let mut segments = value.split('/');

    // split always yields at least one segment
    let tier_text = segments.next().unwrap_or("");
    let index: u32 = tier_text
        .parse()
        .map_err(|_| DecodeError::InvalidTier(tier_text.to_string()))?;
    let tier = Tier::from_index(index).ok_or(DecodeError::TierOutOfRange(index))?;

    let mut core = CoreSpec::new(tier);
    for segment in segments {
        core.modifiers.push(decode_modifier(segment)?);
    }
    Ok(core)
}

/// Parse one fixed-width `X:nnn` modifier segment: code letter at offset 0,
/// colon at offset 1, magnitude from offset 2.
fn decode_modifier(segment: &str) -> Result<Modifier, DecodeError> {
    let mut chars = segment.chars();
    let letter = match (chars.next(), chars.next()) {
        (Some(letter), Some(':')) => letter,
        _ => return Err(DecodeError::MalformedModifier(segment.to_string())),
    };

    let code =
        ModifierCode::from_letter(letter).ok_or(DecodeError::UnknownModifierCode(letter))?;

    let magnitude_text = chars.as_str();
    let magnitude: u32 = magnitude_text
        .parse()
        .map_err(|_| DecodeError::InvalidMagnitude(magnitude_text.to_string()))?;

    Ok(Modifier { code, magnitude })
}
