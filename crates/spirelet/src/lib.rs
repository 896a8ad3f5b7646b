//! spirelet: client library and wire codec for the spire generator service.

mod client;
mod core_spec;
mod error;
mod grid;
mod params;
mod version;

pub mod wire;

pub use client::{ClientConfig, SpireClient};
pub use core_spec::{CoreSpec, Modifier, ModifierCode, Tier};
pub use error::{DecodeError, QueryError};
pub use grid::{COLUMNS, SpireGrid};
pub use params::{GenerationParameters, UpgradeLevels};
pub use version::SPIRELET_VERSION;
pub use wire::{SpireResponse, decode_response, encode_query};
