//! Decoding a [`JsonOptional`] out of a parsed [`Value`] tree.

use json_optional::JsonOptional;
use serde::de::DeserializeOwned;
use serde_json::{Map, Value};

/// Decodes a single value cursor: a `Value::Null` produces
/// [`JsonOptional::Null`], anything else is handed to `T`'s deserializer and
/// wrapped in [`JsonOptional::Defined`].
///
/// This function never produces `Undefined`; a cursor is by definition a
/// value that exists. Key absence is [`get_field`]'s business.
///
/// # Errors
///
/// Inner decode errors propagate verbatim.
///
/// # Example
///
/// ```
/// use json_optional::JsonOptional;
/// use json_optional_value::from_value;
/// use serde_json::json;
///
/// let opt: JsonOptional<u32> = from_value(&json!(7)).unwrap();
/// assert_eq!(opt, JsonOptional::Defined(7));
///
/// let opt: JsonOptional<u32> = from_value(&json!(null)).unwrap();
/// assert!(opt.is_null());
/// ```
pub fn from_value<T>(value: &Value) -> Result<JsonOptional<T>, serde_json::Error>
where
    T: DeserializeOwned,
{
    if value.is_null() {
        return Ok(JsonOptional::Null);
    }
    T::deserialize(value).map(JsonOptional::Defined)
}

/// Decodes an object field with explicit absence handling: a missing key
/// produces [`JsonOptional::Undefined`], a present key defers to
/// [`from_value`].
///
/// # Errors
///
/// Inner decode errors propagate verbatim.
pub fn get_field<T>(object: &Map<String, Value>, key: &str) -> Result<JsonOptional<T>, serde_json::Error>
where
    T: DeserializeOwned,
{
    match object.get(key) {
        None => Ok(JsonOptional::Undefined),
        Some(value) => from_value(value),
    }
}
