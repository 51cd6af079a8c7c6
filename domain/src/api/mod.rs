//! Payloads exchanged with the answer server.
//!
//! The server owns these shapes; the front-end only reads them. Decoding is
//! deliberately lenient: unknown fields are ignored and `null` values fall
//! back to the field default.

mod answer;
mod config;
mod health;

pub use answer::AnswerResult;
pub use config::PublicConfig;
pub use health::HealthStatus;

use serde::{Deserialize, Deserializer};

/// Deserialize a field, treating an explicit `null` like an absent field
fn null_as_default<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Deserialize<'de> + Default,
{
    Ok(Option::<T>::deserialize(deserializer)?.unwrap_or_default())
}
