//! Wire format for the spire generator service.
//!
//! Queries go out as a single line of space-separated `key=value` tokens;
//! responses come back as an `ok`/error status token followed by the same
//! token shape, with the optional `core` field nesting a `/`-delimited form.
//!
//! # Architecture
//!
//! - **encode**: [`encode_query`] builds the request line from parameters
//! - **decode**: [`decode_response`] parses the response into a [`SpireResponse`]

pub mod decode;
pub mod encode;

pub use decode::{SpireResponse, decode_response};
pub use encode::encode_query;
