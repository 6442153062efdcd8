//! Optional type distinguishing undefined JSON keys from keys holding null.
//!
//! JSON object fields have three observable states, not two: a key can be
//! absent from the payload, present with a literal `null`, or present with a
//! value. Deserializing into `Option<T>` folds the first two together;
//! [`JsonOptional`] keeps them apart:
//!
//! | JSON | `JsonOptional<T>` |
//! |---|---|
//! | `{}` | [`JsonOptional::Undefined`] |
//! | `{"k": null}` | [`JsonOptional::Null`] |
//! | `{"k": v}` | [`JsonOptional::Defined(v)`](JsonOptional::Defined) |
//!
//! Unlike [`Option`], the presence-gated combinators (`if_present`, `filter`,
//! `map`, `and_then`, ...) pass the raw payload to their callback as an
//! `Option` whose `None` encodes the null state: a present-but-null field is
//! *present*, and callbacks get to see it.
//!
//! # Struct fields
//!
//! The `Deserialize` impl handles null-vs-value; serde's own field machinery
//! supplies the remaining state. Pair every `JsonOptional` field with
//! `#[serde(default)]` (absent key ⇒ `Undefined`) and
//! `#[serde(skip_serializing_if = "JsonOptional::is_undefined")]`
//! (`Undefined` ⇒ key omitted on encode):
//!
//! ```
//! use json_optional::JsonOptional;
//! use serde::{Deserialize, Serialize};
//!
//! #[derive(Serialize, Deserialize)]
//! struct UserPatch {
//!     #[serde(default, skip_serializing_if = "JsonOptional::is_undefined")]
//!     nickname: JsonOptional<String>,
//! }
//!
//! let patch: UserPatch = serde_json::from_str(r#"{"nickname": null}"#).unwrap();
//! assert!(patch.nickname.is_null()); // present, and explicitly null
//!
//! let patch: UserPatch = serde_json::from_str("{}").unwrap();
//! assert!(patch.nickname.is_undefined()); // not mentioned at all
//! ```

pub mod decode;
pub mod encode;
pub mod error;
pub mod optional;

pub use error::UndefinedError;
pub use optional::{Iter, JsonOptional};
