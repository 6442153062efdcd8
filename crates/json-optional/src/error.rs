//! Error type for unchecked access to an undefined key.

use thiserror::Error;

/// Returned by [`JsonOptional::try_get`](crate::JsonOptional::try_get) when
/// the key is undefined; the panicking accessors carry the same message.
#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
#[error("no value present")]
pub struct UndefinedError;
