//! Generation parameters submitted to the spire generator.

use serde::{Deserialize, Serialize};

use crate::core_spec::CoreSpec;

/// Per-element trap upgrade levels.
///
/// Each level is one character in the query's `upg` token: digits for 0-9,
/// lowercase letters from 10 up.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct UpgradeLevels {
    pub fire: u8,
    pub frost: u8,
    pub poison: u8,
    pub lightning: u8,
}

impl UpgradeLevels {
    pub fn new(fire: u8, frost: u8, poison: u8, lightning: u8) -> Self {
        Self {
            fire,
            frost,
            poison,
            lightning,
        }
    }

    /// The four upgrade characters concatenated, in positional order
    /// fire, frost, poison, lightning.
    pub fn wire_form(&self) -> String {
        [self.fire, self.frost, self.poison, self.lightning]
            .iter()
            .map(|&level| level_char(level))
            .collect()
    }
}

/// Single-character form of an upgrade level. Levels past 'z' clamp.
fn level_char(level: u8) -> char {
    match level {
        0..=9 => (b'0' + level) as char,
        10..=35 => (b'a' + level - 10) as char,
        _ => 'z',
    }
}

/// One spire generation request.
///
/// Constructed fresh per submission; encoding never mutates it.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct GenerationParameters {
    /// Number of floors to generate.
    pub floors: u32,
    /// Resource budget available to the generator.
    pub budget: u64,
    #[serde(default)]
    pub upgrades: UpgradeLevels,
    /// Core item to attach, if any.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub core: Option<CoreSpec>,
}

impl GenerationParameters {
    pub fn new(floors: u32, budget: u64) -> Self {
        Self {
            floors,
            budget,
            upgrades: UpgradeLevels::default(),
            core: None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core_spec::{ModifierCode, Tier};

    #[test]
    fn wire_form_is_positional() {
        let upgrades = UpgradeLevels::new(1, 2, 3, 4);
        assert_eq!(upgrades.wire_form(), "1234");
    }

    #[test]
    fn wire_form_uses_letters_past_nine() {
        let upgrades = UpgradeLevels::new(10, 0, 35, 9);
        assert_eq!(upgrades.wire_form(), "a0z9");
    }

    #[test]
    fn default_levels_are_zero() {
        assert_eq!(UpgradeLevels::default().wire_form(), "0000");
    }

    #[test]
    fn params_round_trip_through_json() {
        let params = GenerationParameters {
            floors: 7,
            budget: 2500,
            upgrades: UpgradeLevels::new(3, 1, 0, 2),
            core: Some(
                crate::CoreSpec::new(Tier::Epic).with_modifier(ModifierCode::Condenser, 15),
            ),
        };

        let json = serde_json::to_string(&params).unwrap();
        let back: GenerationParameters = serde_json::from_str(&json).unwrap();
        assert_eq!(back, params);
    }

    #[test]
    fn core_field_is_optional_in_json() {
        let params: GenerationParameters =
            serde_json::from_str(r#"{"floors":5,"budget":100,"upgrades":{"fire":0,"frost":0,"poison":0,"lightning":0}}"#)
                .unwrap();
        assert_eq!(params.core, None);
    }
}
