//! Core item descriptor: a rarity tier plus percentage modifiers.

use serde::{Deserialize, Serialize};

/// Rarity tier of a core, 1-based on the wire.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Tier {
    Common,
    Uncommon,
    Rare,
    Epic,
    Legendary,
    Magnificent,
    Ethereal,
}

impl Tier {
    /// Tiers in wire order (wire index 1 = Common).
    pub const ALL: [Tier; 7] = [
        Tier::Common,
        Tier::Uncommon,
        Tier::Rare,
        Tier::Epic,
        Tier::Legendary,
        Tier::Magnificent,
        Tier::Ethereal,
    ];

    /// Resolve a 1-based wire index. Out-of-range indices are rejected.
    pub fn from_index(index: u32) -> Option<Tier> {
        match index {
            1..=7 => Some(Self::ALL[index as usize - 1]),
            _ => None,
        }
    }

    /// 1-based wire index.
    pub fn index(&self) -> u32 {
        *self as u32 + 1
    }

    pub fn name(&self) -> &'static str {
        match self {
            Tier::Common => "common",
            Tier::Uncommon => "uncommon",
            Tier::Rare => "rare",
            Tier::Epic => "epic",
            Tier::Legendary => "legendary",
            Tier::Magnificent => "magnificent",
            Tier::Ethereal => "ethereal",
        }
    }
}

/// Core modifier codes, the fixed 6-letter set.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ModifierCode {
    Fire,
    Poison,
    Lightning,
    Strength,
    Condenser,
    Runestones,
}

impl ModifierCode {
    /// Codes in canonical order - the order the encoder emits them.
    pub const ALL: [ModifierCode; 6] = [
        ModifierCode::Fire,
        ModifierCode::Poison,
        ModifierCode::Lightning,
        ModifierCode::Strength,
        ModifierCode::Condenser,
        ModifierCode::Runestones,
    ];

    /// Single-letter wire form.
    pub fn letter(&self) -> char {
        match self {
            ModifierCode::Fire => 'F',
            ModifierCode::Poison => 'P',
            ModifierCode::Lightning => 'L',
            ModifierCode::Strength => 'S',
            ModifierCode::Condenser => 'C',
            ModifierCode::Runestones => 'R',
        }
    }

    /// Resolve a wire letter. Letters outside the fixed set are rejected.
    pub fn from_letter(letter: char) -> Option<ModifierCode> {
        match letter {
            'F' => Some(ModifierCode::Fire),
            'P' => Some(ModifierCode::Poison),
            'L' => Some(ModifierCode::Lightning),
            'S' => Some(ModifierCode::Strength),
            'C' => Some(ModifierCode::Condenser),
            'R' => Some(ModifierCode::Runestones),
            _ => None,
        }
    }

    /// Human-readable name shown next to the magnitude.
    pub fn name(&self) -> &'static str {
        match self {
            ModifierCode::Fire => "fire",
            ModifierCode::Poison => "poison",
            ModifierCode::Lightning => "lightning",
            ModifierCode::Strength => "strength",
            ModifierCode::Condenser => "condenser",
            ModifierCode::Runestones => "runestones",
        }
    }
}

/// A single (code, percentage) modifier entry.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Modifier {
    pub code: ModifierCode,
    /// Percentage magnitude; zero-valued modifiers are omitted on the wire.
    pub magnitude: u32,
}

/// Core item: a tier plus its modifiers.
///
/// Codes within one core are unique; an absent code means "not present".
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CoreSpec {
    pub tier: Tier,
    #[serde(default)]
    pub modifiers: Vec<Modifier>,
}

impl CoreSpec {
    pub fn new(tier: Tier) -> Self {
        Self {
            tier,
            modifiers: Vec::new(),
        }
    }

    /// Add a modifier entry.
    pub fn with_modifier(mut self, code: ModifierCode, magnitude: u32) -> Self {
        self.modifiers.push(Modifier { code, magnitude });
        self
    }

    /// Magnitude for a code, zero when the code is absent.
    pub fn magnitude_of(&self, code: ModifierCode) -> u32 {
        self.modifiers
            .iter()
            .find(|m| m.code == code)
            .map(|m| m.magnitude)
            .unwrap_or(0)
    }
}
