//! Models: field names mapped to validators
//!
//! A [`Model`] describes the expected shape of a params object. Each entry is
//! normally a [`Validator`], but a model assembled from dynamic data may hold
//! something that is not one. Such entries are kept as
//! [`Entry::NotCallable`] and reported as configuration errors when the model
//! is checked, rather than being refused up front.
//!
//! # Examples
//!
//! ```
//! use paramshape::{model, types, Entry, Model};
//!
//! let model = model! {
//!     "name" => types::string().is_required(),
//!     "verbose" => types::boolean(),
//! };
//! assert_eq!(model.len(), 2);
//!
//! let broken = Model::new().with("flag", false);
//! assert!(matches!(broken.get("flag"), Some(Entry::NotCallable(_))));
//! ```

use std::collections::btree_map::{self, BTreeMap};

use crate::chain::Validator;
use crate::value::Value;

/// One model entry.
#[derive(Debug, Clone)]
pub enum Entry {
    /// A validator for the field
    Check(Validator),
    /// A value that was placed where a validator belongs
    NotCallable(Value),
}

impl Entry {
    /// Borrow the validator, if this entry is one.
    pub fn as_validator(&self) -> Option<&Validator> {
        match self {
            Entry::Check(v) => Some(v),
            Entry::NotCallable(_) => None,
        }
    }
}

impl From<Validator> for Entry {
    fn from(v: Validator) -> Self {
        Entry::Check(v)
    }
}

impl From<&Validator> for Entry {
    fn from(v: &Validator) -> Self {
        Entry::Check(v.clone())
    }
}

impl From<Value> for Entry {
    fn from(value: Value) -> Self {
        Entry::NotCallable(value)
    }
}

impl From<bool> for Entry {
    fn from(b: bool) -> Self {
        Entry::NotCallable(Value::Bool(b))
    }
}

impl From<&str> for Entry {
    fn from(s: &str) -> Self {
        Entry::NotCallable(Value::from(s))
    }
}

/// Field names mapped to entries. Keys are unique; their order never affects
/// the verdict.
#[derive(Debug, Clone, Default)]
pub struct Model(BTreeMap<String, Entry>);

impl Model {
    /// Create an empty model.
    pub fn new() -> Self {
        Model(BTreeMap::new())
    }

    /// Set the entry for a field, returning the previous one.
    pub fn insert(&mut self, name: impl Into<String>, entry: impl Into<Entry>) -> Option<Entry> {
        self.0.insert(name.into(), entry.into())
    }

    /// Builder-style insert.
    pub fn with(mut self, name: impl Into<String>, entry: impl Into<Entry>) -> Self {
        self.insert(name, entry);
        self
    }

    /// Look up the entry for a field.
    pub fn get(&self, name: &str) -> Option<&Entry> {
        self.0.get(name)
    }

    /// Number of fields.
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Check whether the model has no fields.
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Iterate over entries in key order.
    pub fn iter(&self) -> btree_map::Iter<'_, String, Entry> {
        self.0.iter()
    }
}

impl<K: Into<String>, E: Into<Entry>> FromIterator<(K, E)> for Model {
    fn from_iter<I: IntoIterator<Item = (K, E)>>(iter: I) -> Self {
        Model(
            iter.into_iter()
                .map(|(k, e)| (k.into(), e.into()))
                .collect(),
        )
    }
}

impl<'a> IntoIterator for &'a Model {
    type Item = (&'a String, &'a Entry);
    type IntoIter = btree_map::Iter<'a, String, Entry>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.iter()
    }
}

/// Build a [`Model`] literal.
///
/// # Examples
///
/// ```
/// use paramshape::{model, types};
///
/// let model = model! {
///     "id" => types::number().is_required(),
///     "options" => types::shape(model! {
///         "dry_run" => types::boolean(),
///     }),
/// };
/// assert_eq!(model.len(), 2);
/// assert!(model! {}.is_empty());
/// ```
#[macro_export]
macro_rules! model {
    () => {
        $crate::Model::new()
    };
    ($($name:expr => $entry:expr),+ $(,)?) => {{
        let mut model = $crate::Model::new();
        $(
            model.insert($name, $entry);
        )+
        model
    }};
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types;

    #[test]
    fn later_insert_replaces_entry() {
        let mut model = Model::new();
        model.insert("a", false);
        let previous = model.insert("a", types::string());
        assert!(matches!(previous, Some(Entry::NotCallable(Value::Bool(false)))));
        assert!(model.get("a").and_then(Entry::as_validator).is_some());
        assert_eq!(model.len(), 1);
    }

    #[test]
    fn collects_from_pairs() {
        let model: Model = vec![("a", types::string()), ("b", types::number())]
            .into_iter()
            .collect();
        let keys: Vec<_> = model.iter().map(|(k, _)| k.as_str()).collect();
        assert_eq!(keys, vec!["a", "b"]);
    }

    #[test]
    fn validator_reference_is_cloned_in() {
        let shared = types::boolean();
        let model = model! { "x" => &shared, "y" => &shared };
        assert!(model.get("x").and_then(Entry::as_validator).is_some());
        assert!(model.get("y").and_then(Entry::as_validator).is_some());
    }
}
