//! Version information for spirelet.

/// Spirelet version from Cargo.toml
pub const SPIRELET_VERSION: &str = env!("CARGO_PKG_VERSION");

/// User-Agent value sent with every query.
pub fn user_agent() -> String {
    format!("spirelet/{}", SPIRELET_VERSION)
}
