//! Explicit "unset or value" overrides.
//!
//! A preset supplies defaults; a [`Setting`] on a request either leaves the
//! preset value alone or replaces it. `Value(0.0)` is a real override, never
//! an alias for "use the default".

use serde::{Deserialize, Deserializer, Serialize, Serializer};

/// An override that is either left unspecified or carries a value.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Setting<T> {
    /// No override; the preset or built-in default applies.
    #[default]
    Unspecified,
    /// Explicit override.
    Value(T),
}

impl<T> Setting<T> {
    /// Returns the override, or `default` when unspecified.
    pub fn resolve(self, default: T) -> T {
        match self {
            Setting::Unspecified => default,
            Setting::Value(v) => v,
        }
    }

    /// Applies `f` to the override, or returns `default` when unspecified.
    pub fn map_or<U>(self, default: U, f: impl FnOnce(T) -> U) -> U {
        match self {
            Setting::Unspecified => default,
            Setting::Value(v) => f(v),
        }
    }

    /// True when no override was given.
    pub fn is_unspecified(&self) -> bool {
        matches!(self, Setting::Unspecified)
    }

    /// Returns `self` if it carries a value, otherwise `other`.
    ///
    /// Used to layer command-line flags over a loaded request document.
    pub fn or(self, other: Setting<T>) -> Setting<T> {
        match self {
            Setting::Value(_) => self,
            Setting::Unspecified => other,
        }
    }
}

impl<T> From<Option<T>> for Setting<T> {
    fn from(value: Option<T>) -> Self {
        match value {
            Some(v) => Setting::Value(v),
            None => Setting::Unspecified,
        }
    }
}

impl<T> From<Setting<T>> for Option<T> {
    fn from(value: Setting<T>) -> Self {
        match value {
            Setting::Unspecified => None,
            Setting::Value(v) => Some(v),
        }
    }
}

impl<T: Serialize> Serialize for Setting<T> {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        match self {
            Setting::Unspecified => serializer.serialize_none(),
            Setting::Value(v) => serializer.serialize_some(v),
        }
    }
}

impl<'de, T: Deserialize<'de>> Deserialize<'de> for Setting<T> {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        Option::<T>::deserialize(deserializer).map(Setting::from)
    }
}
