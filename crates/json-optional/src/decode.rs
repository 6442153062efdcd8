//! `Deserialize` for [`JsonOptional`] — null-vs-value routing.
//!
//! This impl only ever sees a key that is present in the payload: serde does
//! not run a field's deserializer for a missing key, it falls back to
//! `#[serde(default)]`, and [`JsonOptional`]'s `Default` is `Undefined`.
//! Absence detection therefore stays with the framework; this impl decides
//! null-vs-value and nothing else.

use serde::{Deserialize, Deserializer};

use crate::JsonOptional;

impl<'de, T> Deserialize<'de> for JsonOptional<T>
where
    T: Deserialize<'de>,
{
    /// A JSON `null` token becomes [`JsonOptional::Null`]; any other token is
    /// decoded by `T`'s deserializer and wrapped in
    /// [`JsonOptional::Defined`]. Inner decode errors propagate verbatim.
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        Option::<T>::deserialize(deserializer).map(JsonOptional::from_nullable)
    }
}
