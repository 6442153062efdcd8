//! [`serde_json::Value`] tree adapter for [`json_optional::JsonOptional`].
//!
//! The serde trait impls on `JsonOptional` cover derived structs, where field
//! absence is serde's business. When working with an already-parsed
//! [`Value`](serde_json::Value) tree the adapter can observe key absence
//! directly, so this crate folds all three states into two function pairs:
//! [`get_field`]/[`set_field`] for object fields, [`from_value`]/[`to_value`]
//! for a lone value cursor.
//!
//! # Example
//!
//! ```
//! use json_optional::JsonOptional;
//! use json_optional_value::{get_field, set_field};
//! use serde_json::json;
//!
//! let doc = json!({"nickname": null, "age": 36});
//! let obj = doc.as_object().unwrap();
//!
//! let nickname: JsonOptional<String> = get_field(obj, "nickname").unwrap();
//! assert!(nickname.is_null());
//!
//! let age: JsonOptional<u32> = get_field(obj, "age").unwrap();
//! assert_eq!(age, JsonOptional::Defined(36));
//!
//! let email: JsonOptional<String> = get_field(obj, "email").unwrap();
//! assert!(email.is_undefined());
//!
//! let mut out = serde_json::Map::new();
//! set_field(&mut out, "nickname", &nickname).unwrap();
//! set_field(&mut out, "email", &email).unwrap();
//! assert_eq!(serde_json::Value::Object(out), json!({"nickname": null}));
//! ```

pub mod decode;
pub mod encode;

pub use decode::{from_value, get_field};
pub use encode::{set_field, to_value};
