//! `Serialize` for [`JsonOptional`] — value, null, or framework-side omission.
//!
//! A value's `Serialize` impl cannot remove its own field from the enclosing
//! object, so omitting an undefined key is the framework's job: pair every
//! struct field with `#[serde(skip_serializing_if =
//! "JsonOptional::is_undefined")]`. Without that hook an `Undefined` forced
//! through this impl falls back to `null`.

use serde::{Serialize, Serializer};

use crate::JsonOptional;

impl<T> Serialize for JsonOptional<T>
where
    T: Serialize,
{
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        match self {
            JsonOptional::Undefined | JsonOptional::Null => serializer.serialize_none(),
            JsonOptional::Defined(v) => serializer.serialize_some(v),
        }
    }
}
