//! Record-like values that [`Maybe::assign`](crate::Maybe::assign) can grow one field at a time.

use std::collections::{BTreeMap, HashMap};
use std::hash::{BuildHasher, Hash};

/// A value that can gain a named field without losing the ones it has.
///
/// Assigning a key that already exists replaces its value.
///
/// Implement this for your own record builders:
///
/// ```
/// use maybe_core::{Aggregate, Maybe};
///
/// #[derive(Debug, Default, PartialEq)]
/// struct User {
///     name: Option<String>,
///     age: Option<u32>,
/// }
///
/// enum Field {
///     Name(String),
///     Age(u32),
/// }
///
/// impl Aggregate<(), Field> for User {
///     fn with_field(self, (): (), field: Field) -> Self {
///         match field {
///             Field::Name(name) => Self { name: Some(name), ..self },
///             Field::Age(age) => Self { age: Some(age), ..self },
///         }
///     }
/// }
///
/// let user = Maybe::just(User::default())
///     .assign((), Maybe::just(Field::Name("ada".into())))
///     .assign((), Maybe::just(Field::Age(36)));
/// assert_eq!(user.map(|u| u.age), Maybe::just(Some(36)));
/// ```
pub trait Aggregate<K, V>: Sized {
    /// Return `self` extended with `key` bound to `value`.
    #[must_use]
    fn with_field(self, key: K, value: V) -> Self;
}

impl<K, V, S> Aggregate<K, V> for HashMap<K, V, S>
where
    K: Eq + Hash,
    S: BuildHasher,
{
    #[inline]
    fn with_field(mut self, key: K, value: V) -> Self {
        self.insert(key, value);
        self
    }
}

impl<K: Ord, V> Aggregate<K, V> for BTreeMap<K, V> {
    #[inline]
    fn with_field(mut self, key: K, value: V) -> Self {
        self.insert(key, value);
        self
    }
}

#[cfg(feature = "im")]
impl<K, V, S> Aggregate<K, V> for im::HashMap<K, V, S>
where
    K: Clone + Eq + Hash,
    V: Clone,
    S: BuildHasher,
{
    #[inline]
    fn with_field(mut self, key: K, value: V) -> Self {
        self.insert(key, value);
        self
    }
}

#[cfg(feature = "im")]
impl<K, V> Aggregate<K, V> for im::OrdMap<K, V>
where
    K: Clone + Ord,
    V: Clone,
{
    #[inline]
    fn with_field(mut self, key: K, value: V) -> Self {
        self.insert(key, value);
        self
    }
}

// JSON objects accept any value convertible to `Value`, so one record can mix
// numbers, strings and nested objects.
#[cfg(feature = "json")]
impl<K, V> Aggregate<K, V> for serde_json::Map<String, serde_json::Value>
where
    K: Into<String>,
    V: Into<serde_json::Value>,
{
    #[inline]
    fn with_field(mut self, key: K, value: V) -> Self {
        self.insert(key.into(), value.into());
        self
    }
}
