//! Response payload unwrapping.
//!
//! The API answers either with the entity itself or with the entity wrapped
//! as `{"success": true, "data": ...}`. Every successful body is decoded
//! through [`Payload`] so services only ever see the entity.

use serde::de::DeserializeOwned;
use serde::Deserialize;
use serde_json::Value;

#[derive(Debug, Deserialize)]
#[serde(untagged)]
pub enum Payload<T> {
    /// `{ "data": T, ... }`
    Wrapped { data: T },
    /// `T`
    Bare(T),
}

impl<T> Payload<T> {
    pub fn into_inner(self) -> T {
        match self {
            Payload::Wrapped { data } => data,
            Payload::Bare(data) => data,
        }
    }
}

/// Decode a parsed body into `T`, unwrapping a `data` envelope if present.
pub fn decode<T: DeserializeOwned>(body: Value) -> Result<T, serde_json::Error> {
    Payload::<T>::deserialize(&body)
        .map(Payload::into_inner)
        // Untagged errors say nothing useful; decode bare again for the real reason.
        .or_else(|_| serde_json::from_value::<T>(body))
}
