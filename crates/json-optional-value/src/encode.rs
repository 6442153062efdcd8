//! Encoding a [`JsonOptional`] back into a [`Value`] tree.

use json_optional::JsonOptional;
use serde::Serialize;
use serde_json::{Map, Value};

/// Encodes a [`JsonOptional`] as an optional [`Value`]: `None` means "omit
/// the field entirely" (the key was undefined), `Some(Value::Null)` a literal
/// null, `Some(encoded)` a defined value.
///
/// # Errors
///
/// Inner encode errors propagate verbatim.
pub fn to_value<T>(optional: &JsonOptional<T>) -> Result<Option<Value>, serde_json::Error>
where
    T: Serialize,
{
    match optional {
        JsonOptional::Undefined => Ok(None),
        JsonOptional::Null => Ok(Some(Value::Null)),
        JsonOptional::Defined(v) => serde_json::to_value(v).map(Some),
    }
}

/// Writes a [`JsonOptional`] into an object map: an undefined key is removed
/// (or simply never inserted), a null or defined one is inserted. Together
/// with [`get_field`](crate::get_field) this gives field-level round trips:
/// undefined in, omitted out.
///
/// # Errors
///
/// Inner encode errors propagate verbatim; the map is untouched on error.
pub fn set_field<T>(
    object: &mut Map<String, Value>,
    key: &str,
    optional: &JsonOptional<T>,
) -> Result<(), serde_json::Error>
where
    T: Serialize,
{
    match to_value(optional)? {
        None => {
            object.remove(key);
        }
        Some(value) => {
            object.insert(key.to_owned(), value);
        }
    }
    Ok(())
}
