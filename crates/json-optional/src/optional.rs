//! [`JsonOptional`] — the three-state optional value.

use std::fmt;

use crate::error::UndefinedError;

const NO_VALUE: &str = "no value present";

/// An optional that distinguishes an absent JSON key from a key holding null.
///
/// Semantically close to [`Option`], with one extra state: a key that is
/// present in the payload but carries a literal JSON `null`. The three states
/// are mutually exclusive variants, so pattern matching is always available
/// alongside the combinator API.
///
/// Throughout this API the "raw payload" handed to callbacks and returned by
/// accessors is an `Option` in which `None` encodes the [`Null`] state. This
/// is deliberate and differs from [`Option`]'s combinators: a present-but-null
/// field counts as *present*, so `if_present`, `filter`, `map` and `and_then`
/// all run their callback for it, passing `None`.
///
/// # Example
///
/// ```
/// use json_optional::JsonOptional;
///
/// let name = JsonOptional::Defined("ada");
/// assert!(name.is_present());
/// assert_eq!(name.get(), Some(&"ada"));
///
/// let cleared: JsonOptional<&str> = JsonOptional::Null;
/// assert!(cleared.is_present()); // the key exists...
/// assert!(cleared.is_null());    // ...and holds null
/// assert_eq!(cleared.get(), None);
/// ```
///
/// [`Null`]: JsonOptional::Null
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum JsonOptional<T> {
    /// The key was absent from the source JSON object.
    Undefined,
    /// The key was present with a literal JSON `null`.
    Null,
    /// The key was present with a value.
    Defined(T),
}

use JsonOptional::{Defined, Null, Undefined};

impl<T> Default for JsonOptional<T> {
    /// Returns [`Undefined`](JsonOptional::Undefined).
    ///
    /// This is what makes `#[serde(default)]` the field-absence hook: serde
    /// never runs a deserializer for a missing key, it asks `Default`.
    fn default() -> Self {
        Undefined
    }
}

impl<T> JsonOptional<T> {
    /// Wraps a possibly-null value: `None` becomes [`Null`], `Some(v)`
    /// becomes [`Defined(v)`].
    ///
    /// Note the routing: a null source value is a *present* null, never
    /// [`Undefined`].
    ///
    /// # Example
    ///
    /// ```
    /// use json_optional::JsonOptional;
    ///
    /// assert_eq!(JsonOptional::from_nullable(Some(3)), JsonOptional::Defined(3));
    /// assert_eq!(JsonOptional::<i32>::from_nullable(None), JsonOptional::Null);
    /// ```
    ///
    /// [`Null`]: JsonOptional::Null
    /// [`Undefined`]: JsonOptional::Undefined
    /// [`Defined(v)`]: JsonOptional::Defined
    pub fn from_nullable(value: Option<T>) -> Self {
        match value {
            Some(v) => Defined(v),
            None => Null,
        }
    }

    /// Builds from the flattened double-`Option` form: outer `None` is
    /// [`Undefined`](JsonOptional::Undefined), `Some(None)` is
    /// [`Null`](JsonOptional::Null), `Some(Some(v))` is
    /// [`Defined(v)`](JsonOptional::Defined).
    pub fn from_nested(value: Option<Option<T>>) -> Self {
        match value {
            None => Undefined,
            Some(inner) => Self::from_nullable(inner),
        }
    }

    /// The inverse of [`from_nested`](Self::from_nested).
    pub fn into_nested(self) -> Option<Option<T>> {
        match self {
            Undefined => None,
            Null => Some(None),
            Defined(v) => Some(Some(v)),
        }
    }

    /// True iff the key exists, regardless of its value: [`Null`] and
    /// [`Defined`] both count.
    ///
    /// [`Null`]: JsonOptional::Null
    /// [`Defined`]: JsonOptional::Defined
    pub fn is_present(&self) -> bool {
        !matches!(self, Undefined)
    }

    /// True iff the key holds a literal null.
    pub fn is_null(&self) -> bool {
        matches!(self, Null)
    }

    /// True iff the key was absent from the payload.
    pub fn is_undefined(&self) -> bool {
        matches!(self, Undefined)
    }

    /// Synonym for [`is_undefined`](Self::is_undefined).
    pub fn is_empty(&self) -> bool {
        self.is_undefined()
    }

    /// Returns the raw payload: `None` for a null key, `Some(&v)` for a
    /// defined one.
    ///
    /// # Panics
    ///
    /// Panics if the key is undefined. Use [`try_get`](Self::try_get) for a
    /// non-panicking variant, or [`is_present`](Self::is_present) to check
    /// first.
    pub fn get(&self) -> Option<&T> {
        match self {
            Undefined => panic!("{}", NO_VALUE),
            Null => None,
            Defined(v) => Some(v),
        }
    }

    /// Non-panicking [`get`](Self::get).
    ///
    /// # Errors
    ///
    /// Returns [`UndefinedError`] if the key is undefined.
    pub fn try_get(&self) -> Result<Option<&T>, UndefinedError> {
        match self {
            Undefined => Err(UndefinedError),
            Null => Ok(None),
            Defined(v) => Ok(Some(v)),
        }
    }

    /// Converts from `&JsonOptional<T>` to `JsonOptional<&T>`, preserving the
    /// state.
    pub fn as_ref(&self) -> JsonOptional<&T> {
        match self {
            Undefined => Undefined,
            Null => Null,
            Defined(v) => Defined(v),
        }
    }

    /// Runs `action` with the raw payload iff the key is present; no-op for
    /// an undefined key.
    ///
    /// The action receives `None` when the key holds null. Unlike
    /// [`Option::map`]-style combinators, a null payload does not suppress
    /// the call.
    ///
    /// # Example
    ///
    /// ```
    /// use json_optional::JsonOptional;
    ///
    /// let mut seen = Vec::new();
    /// JsonOptional::Defined(1).if_present(|v| seen.push(v.copied()));
    /// JsonOptional::<i32>::Null.if_present(|v| seen.push(v.copied()));
    /// JsonOptional::<i32>::Undefined.if_present(|v| seen.push(v.copied()));
    /// assert_eq!(seen, [Some(1), None]); // Undefined never ran
    /// ```
    pub fn if_present<F>(&self, action: F)
    where
        F: FnOnce(Option<&T>),
    {
        match self {
            Undefined => {}
            Null => action(None),
            Defined(v) => action(Some(v)),
        }
    }

    /// As [`if_present`](Self::if_present), but runs the zero-argument
    /// `fallback` when the key is undefined.
    pub fn if_present_or_else<F, G>(&self, action: F, fallback: G)
    where
        F: FnOnce(Option<&T>),
        G: FnOnce(),
    {
        match self {
            Undefined => fallback(),
            Null => action(None),
            Defined(v) => action(Some(v)),
        }
    }

    /// Keeps the value if the predicate holds for the raw payload; an
    /// undefined key passes through untouched, a failing predicate yields
    /// [`Undefined`](JsonOptional::Undefined).
    ///
    /// The predicate sees `None` for a null key.
    pub fn filter<P>(self, predicate: P) -> Self
    where
        P: FnOnce(Option<&T>) -> bool,
    {
        match self {
            Undefined => Undefined,
            Null => {
                if predicate(None) {
                    Null
                } else {
                    Undefined
                }
            }
            Defined(v) => {
                if predicate(Some(&v)) {
                    Defined(v)
                } else {
                    Undefined
                }
            }
        }
    }

    /// Like [`filter`](Self::filter), except a failing predicate yields
    /// [`Null`](JsonOptional::Null) instead of erasing the key.
    pub fn filter_to_null<P>(self, predicate: P) -> Self
    where
        P: FnOnce(Option<&T>) -> bool,
    {
        match self {
            Undefined => Undefined,
            Null => {
                // The predicate still sees the null payload; the key stays null either way
                predicate(None);
                Null
            }
            Defined(v) => {
                if predicate(Some(&v)) {
                    Defined(v)
                } else {
                    Null
                }
            }
        }
    }

    /// Maps the raw payload through `mapper` when the key is present.
    ///
    /// The mapper receives `None` for a null key and decides the outcome by
    /// its return value: `Some(u)` becomes [`Defined(u)`], `None` becomes
    /// [`Undefined`]. An undefined key propagates without running the mapper.
    ///
    /// Note the collapse: mapping a null key with an identity-shaped mapper
    /// produces [`Undefined`], not [`Null`], because `map` folds "mapper
    /// produced nothing" and "payload was null" into the same erased state.
    /// Reach for [`map_to_null`](Self::map_to_null) to keep the key alive as
    /// null.
    ///
    /// # Example
    ///
    /// ```
    /// use json_optional::JsonOptional;
    ///
    /// let n = JsonOptional::Defined(2).map(|v| v.map(|x| x * 10));
    /// assert_eq!(n, JsonOptional::Defined(20));
    ///
    /// let collapsed = JsonOptional::<i32>::Null.map(|v| v);
    /// assert_eq!(collapsed, JsonOptional::Undefined);
    /// ```
    ///
    /// [`Defined(u)`]: JsonOptional::Defined
    /// [`Undefined`]: JsonOptional::Undefined
    /// [`Null`]: JsonOptional::Null
    pub fn map<U, F>(self, mapper: F) -> JsonOptional<U>
    where
        F: FnOnce(Option<T>) -> Option<U>,
    {
        match self {
            Undefined => Undefined,
            Null => match mapper(None) {
                Some(u) => Defined(u),
                None => Undefined,
            },
            Defined(v) => match mapper(Some(v)) {
                Some(u) => Defined(u),
                None => Undefined,
            },
        }
    }

    /// Like [`map`](Self::map), except a `None` mapper result resolves to
    /// [`Null`](JsonOptional::Null): the key stays present.
    ///
    /// # Example
    ///
    /// ```
    /// use json_optional::JsonOptional;
    ///
    /// let kept = JsonOptional::<i32>::Null.map_to_null(|v| v);
    /// assert_eq!(kept, JsonOptional::Null);
    /// ```
    pub fn map_to_null<U, F>(self, mapper: F) -> JsonOptional<U>
    where
        F: FnOnce(Option<T>) -> Option<U>,
    {
        match self {
            Undefined => Undefined,
            Null => JsonOptional::from_nullable(mapper(None)),
            Defined(v) => JsonOptional::from_nullable(mapper(Some(v))),
        }
    }

    /// Maps through a mapper that itself returns a `JsonOptional`, without
    /// re-wrapping. An undefined key propagates; otherwise the mapper's
    /// result is returned as-is, so it can produce any of the three states.
    ///
    /// The mapper receives `None` for a null key.
    pub fn and_then<U, F>(self, mapper: F) -> JsonOptional<U>
    where
        F: FnOnce(Option<T>) -> JsonOptional<U>,
    {
        match self {
            Undefined => Undefined,
            Null => mapper(None),
            Defined(v) => mapper(Some(v)),
        }
    }

    /// Returns self if the key is present, else the supplier's result.
    pub fn or_else<F>(self, supplier: F) -> Self
    where
        F: FnOnce() -> Self,
    {
        match self {
            Undefined => supplier(),
            other => other,
        }
    }

    /// Iterates over the raw payload: no items for an undefined key, exactly
    /// one item otherwise (`None` for a null key, `Some(&v)` for a defined
    /// one). Every call returns a fresh, independent iterator.
    ///
    /// # Example
    ///
    /// ```
    /// use json_optional::JsonOptional;
    ///
    /// let defined = JsonOptional::Defined(7);
    /// assert_eq!(defined.iter().collect::<Vec<_>>(), [Some(&7)]);
    ///
    /// let null = JsonOptional::<i32>::Null;
    /// assert_eq!(null.iter().collect::<Vec<_>>(), [None]);
    ///
    /// let undefined = JsonOptional::<i32>::Undefined;
    /// assert_eq!(undefined.iter().count(), 0);
    /// ```
    pub fn iter(&self) -> Iter<'_, T> {
        self.as_ref().into_nested().into_iter()
    }

    /// Returns the raw payload if the key is present, else `default`.
    ///
    /// Presence, not non-null-ness, is the test: a null key returns `None`
    /// and the default is *not* consulted.
    ///
    /// # Example
    ///
    /// ```
    /// use json_optional::JsonOptional;
    ///
    /// assert_eq!(JsonOptional::Defined(1).unwrap_or(Some(9)), Some(1));
    /// assert_eq!(JsonOptional::<i32>::Null.unwrap_or(Some(9)), None);
    /// assert_eq!(JsonOptional::<i32>::Undefined.unwrap_or(Some(9)), Some(9));
    /// ```
    pub fn unwrap_or(self, default: Option<T>) -> Option<T> {
        match self {
            Undefined => default,
            Null => None,
            Defined(v) => Some(v),
        }
    }

    /// As [`unwrap_or`](Self::unwrap_or), with the default lazily supplied.
    pub fn unwrap_or_else<F>(self, supplier: F) -> Option<T>
    where
        F: FnOnce() -> Option<T>,
    {
        match self {
            Undefined => supplier(),
            Null => None,
            Defined(v) => Some(v),
        }
    }

    /// Returns the raw payload.
    ///
    /// # Panics
    ///
    /// Panics if the key is undefined.
    pub fn unwrap(self) -> Option<T> {
        match self {
            Undefined => panic!("{}", NO_VALUE),
            Null => None,
            Defined(v) => Some(v),
        }
    }

    /// Returns the raw payload.
    ///
    /// # Panics
    ///
    /// Panics with `msg` if the key is undefined.
    pub fn expect(self, msg: &str) -> Option<T> {
        match self {
            Undefined => panic!("{}", msg),
            Null => None,
            Defined(v) => Some(v),
        }
    }
}

impl<T> From<Option<T>> for JsonOptional<T> {
    /// Same routing as [`JsonOptional::from_nullable`].
    fn from(value: Option<T>) -> Self {
        Self::from_nullable(value)
    }
}

/// Iterator over a borrowed [`JsonOptional`]; see [`JsonOptional::iter`].
pub type Iter<'a, T> = std::option::IntoIter<Option<&'a T>>;

impl<T> IntoIterator for JsonOptional<T> {
    type Item = Option<T>;
    type IntoIter = std::option::IntoIter<Option<T>>;

    fn into_iter(self) -> Self::IntoIter {
        self.into_nested().into_iter()
    }
}

impl<'a, T> IntoIterator for &'a JsonOptional<T> {
    type Item = Option<&'a T>;
    type IntoIter = Iter<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

impl<T: fmt::Display> fmt::Display for JsonOptional<T> {
    /// The three states render unambiguously: `JsonOptional.undefined`,
    /// `JsonOptional.null`, `JsonOptional[v]`.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Undefined => f.write_str("JsonOptional.undefined"),
            Null => f.write_str("JsonOptional.null"),
            Defined(v) => write!(f, "JsonOptional[{}]", v),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::hash_map::DefaultHasher;
    use std::hash::{Hash, Hasher};

    fn hash_of<T: Hash>(value: &T) -> u64 {
        let mut hasher = DefaultHasher::new();
        value.hash(&mut hasher);
        hasher.finish()
    }

    #[test]
    fn defined_state() {
        let opt = Defined("x");
        assert!(opt.is_present());
        assert!(!opt.is_null());
        assert!(!opt.is_undefined());
        assert_eq!(opt.get(), Some(&"x"));
    }

    #[test]
    fn null_state() {
        let opt: JsonOptional<&str> = Null;
        assert!(opt.is_present());
        assert!(opt.is_null());
        assert!(!opt.is_undefined());
        assert_eq!(opt.get(), None);
    }

    #[test]
    fn undefined_state() {
        let opt: JsonOptional<&str> = Undefined;
        assert!(!opt.is_present());
        assert!(!opt.is_null());
        assert!(opt.is_undefined());
        assert!(opt.is_empty());
    }

    #[test]
    fn from_nullable_routes_none_to_null() {
        assert_eq!(JsonOptional::<i32>::from_nullable(None), Null);
        assert_eq!(JsonOptional::from_nullable(Some(5)), Defined(5));
        assert_eq!(JsonOptional::from(Some(5)), Defined(5));
    }

    #[test]
    fn nested_roundtrip() {
        for opt in [Undefined, Null, Defined(3)] {
            assert_eq!(JsonOptional::from_nested(opt.into_nested()), opt);
        }
        assert_eq!(JsonOptional::<i32>::from_nested(None), Undefined);
        assert_eq!(JsonOptional::<i32>::from_nested(Some(None)), Null);
        assert_eq!(JsonOptional::from_nested(Some(Some(3))), Defined(3));
    }

    #[test]
    fn default_is_undefined() {
        assert_eq!(JsonOptional::<String>::default(), Undefined);
    }

    #[test]
    #[should_panic(expected = "no value present")]
    fn get_panics_on_undefined() {
        JsonOptional::<i32>::Undefined.get();
    }

    #[test]
    fn try_get_surfaces_undefined_as_error() {
        assert_eq!(Defined(1).try_get(), Ok(Some(&1)));
        assert_eq!(JsonOptional::<i32>::Null.try_get(), Ok(None));
        assert_eq!(JsonOptional::<i32>::Undefined.try_get(), Err(UndefinedError));
    }

    #[test]
    fn if_present_passes_null_payload() {
        let mut calls = Vec::new();
        Defined(1).if_present(|v| calls.push(v.copied()));
        JsonOptional::<i32>::Null.if_present(|v| calls.push(v.copied()));
        JsonOptional::<i32>::Undefined.if_present(|v| calls.push(v.copied()));
        assert_eq!(calls, [Some(1), None]);
    }

    #[test]
    fn if_present_or_else_runs_fallback_only_when_undefined() {
        let log = std::cell::RefCell::new(Vec::new());
        JsonOptional::<i32>::Null.if_present_or_else(
            |_| log.borrow_mut().push("action"),
            || log.borrow_mut().push("fallback"),
        );
        JsonOptional::<i32>::Undefined.if_present_or_else(
            |_| log.borrow_mut().push("action"),
            || log.borrow_mut().push("fallback"),
        );
        assert_eq!(log.into_inner(), ["action", "fallback"]);
    }

    #[test]
    fn filter_erases_on_failure() {
        assert_eq!(Defined(4).filter(|v| v == Some(&4)), Defined(4));
        assert_eq!(Defined(4).filter(|v| v == Some(&5)), Undefined);
        // Null is present: the predicate runs, seeing None
        assert_eq!(JsonOptional::<i32>::Null.filter(|v| v.is_none()), Null);
        assert_eq!(JsonOptional::<i32>::Null.filter(|v| v.is_some()), Undefined);
        // Undefined passes through without invoking the predicate
        assert_eq!(
            JsonOptional::<i32>::Undefined.filter(|_| panic!("must not run")),
            Undefined
        );
    }

    #[test]
    fn filter_to_null_keeps_key_on_failure() {
        assert_eq!(Defined(4).filter_to_null(|v| v == Some(&5)), Null);
        assert_eq!(JsonOptional::<i32>::Null.filter_to_null(|v| v.is_some()), Null);
        assert_eq!(
            JsonOptional::<i32>::Undefined.filter_to_null(|_| panic!("must not run")),
            Undefined
        );
    }

    #[test]
    fn map_identity_collapses_null_to_undefined() {
        assert_eq!(Defined(2).map(|v| v), Defined(2));
        assert_eq!(JsonOptional::<i32>::Undefined.map(|v| v), Undefined);
        // The documented collapse: identity over Null loses the key
        assert_eq!(JsonOptional::<i32>::Null.map(|v| v), Undefined);
    }

    #[test]
    fn map_to_null_identity_preserves_null() {
        assert_eq!(Defined(2).map_to_null(|v| v), Defined(2));
        assert_eq!(JsonOptional::<i32>::Undefined.map_to_null(|v| v), Undefined);
        assert_eq!(JsonOptional::<i32>::Null.map_to_null(|v| v), Null);
    }

    #[test]
    fn map_null_result_state_choice() {
        assert_eq!(Defined(2).map(|_| None::<i32>), Undefined);
        assert_eq!(Defined(2).map_to_null(|_| None::<i32>), Null);
    }

    #[test]
    fn and_then_returns_mapper_result_unwrapped() {
        assert_eq!(Defined(2).and_then(|_| JsonOptional::<i32>::Undefined), Undefined);
        assert_eq!(Defined(2).and_then(|v| Defined(v.unwrap() * 2)), Defined(4));
        assert_eq!(JsonOptional::<i32>::Null.and_then(|v| Defined(v.is_none())), Defined(true));
        assert_eq!(
            JsonOptional::<i32>::Undefined.and_then(|_| -> JsonOptional<i32> { panic!("must not run") }),
            Undefined
        );
    }

    #[test]
    fn or_else_only_fires_when_undefined() {
        assert_eq!(Defined(1).or_else(|| Defined(2)), Defined(1));
        assert_eq!(JsonOptional::<i32>::Null.or_else(|| Defined(2)), Null);
        assert_eq!(JsonOptional::<i32>::Undefined.or_else(|| Defined(2)), Defined(2));
    }

    #[test]
    fn iter_yields_raw_payload() {
        assert_eq!(Defined(7).iter().collect::<Vec<_>>(), [Some(&7)]);
        assert_eq!(JsonOptional::<i32>::Null.iter().collect::<Vec<_>>(), [None]);
        assert_eq!(JsonOptional::<i32>::Undefined.iter().count(), 0);
    }

    #[test]
    fn iter_is_restartable() {
        let opt = Defined(7);
        let first: Vec<_> = opt.iter().collect();
        let second: Vec<_> = opt.iter().collect();
        assert_eq!(first, second);
    }

    #[test]
    fn into_iter_consumes() {
        let items: Vec<Option<i32>> = Defined(7).into_iter().collect();
        assert_eq!(items, [Some(7)]);
        let items: Vec<Option<i32>> = JsonOptional::<i32>::Null.into_iter().collect();
        assert_eq!(items, [None]);
    }

    #[test]
    fn unwrap_or_family() {
        assert_eq!(Defined(1).unwrap_or(Some(9)), Some(1));
        assert_eq!(JsonOptional::<i32>::Null.unwrap_or(Some(9)), None);
        assert_eq!(JsonOptional::<i32>::Undefined.unwrap_or(Some(9)), Some(9));

        assert_eq!(JsonOptional::<i32>::Null.unwrap_or_else(|| panic!("must not run")), None);
        assert_eq!(JsonOptional::<i32>::Undefined.unwrap_or_else(|| Some(9)), Some(9));
    }

    #[test]
    #[should_panic(expected = "no value present")]
    fn unwrap_panics_on_undefined() {
        JsonOptional::<i32>::Undefined.unwrap();
    }

    #[test]
    #[should_panic(expected = "nickname must be sent")]
    fn expect_panics_with_caller_message() {
        JsonOptional::<i32>::Undefined.expect("nickname must be sent");
    }

    #[test]
    fn expect_returns_null_payload() {
        assert_eq!(JsonOptional::<i32>::Null.expect("present"), None);
    }

    #[test]
    fn equality_distinguishes_all_states() {
        assert_eq!(Defined("x"), Defined("x"));
        assert_ne!(Defined("x"), Defined("y"));
        assert_eq!(JsonOptional::<&str>::Null, Null);
        assert_eq!(JsonOptional::<&str>::Undefined, Undefined);
        assert_ne!(JsonOptional::<&str>::Null, Undefined);
        assert_ne!(JsonOptional::Defined("x"), Null);
    }

    #[test]
    fn hash_consistent_with_equality() {
        assert_eq!(hash_of(&Defined("x")), hash_of(&Defined("x")));
        assert_ne!(
            hash_of(&JsonOptional::<&str>::Null),
            hash_of(&JsonOptional::<&str>::Undefined)
        );
    }

    #[test]
    fn display_distinguishes_all_states() {
        assert_eq!(JsonOptional::<i32>::Undefined.to_string(), "JsonOptional.undefined");
        assert_eq!(JsonOptional::<i32>::Null.to_string(), "JsonOptional.null");
        assert_eq!(Defined(42).to_string(), "JsonOptional[42]");
    }

    #[test]
    fn as_ref_preserves_state() {
        let owned = Defined(String::from("x"));
        assert_eq!(owned.as_ref(), Defined(&String::from("x")));
        assert_eq!(JsonOptional::<String>::Null.as_ref(), Null);
        assert_eq!(JsonOptional::<String>::Undefined.as_ref(), Undefined);
    }
}
