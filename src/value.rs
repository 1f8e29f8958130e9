//! Dynamic values and params objects
//!
//! Validators inspect values whose type is only known at runtime. This module
//! provides the tagged union used for those values ([`Value`]) and the field
//! map that validators read from ([`Params`]).
//!
//! # Examples
//!
//! ```
//! use paramshape::{params, Value};
//!
//! let params = params! {
//!     "name" => "Ada",
//!     "age" => 36,
//!     "tags" => vec!["math", "engines"],
//! };
//!
//! assert_eq!(params.get("name"), Some(&Value::from("Ada")));
//! assert_eq!(params.get("age").map(Value::type_name), Some("number"));
//! assert!(!params.contains("email"));
//! ```

use std::collections::btree_map::{self, BTreeMap};
use std::fmt;
use std::sync::Arc;

/// A value whose type is inspected at validation time.
///
/// Every variant is a *present* value. Absence is expressed by the key being
/// missing from [`Params`], so `Null`, `Bool(false)`, `Number(0.0)` and an
/// empty string all reach the validator's rule.
#[derive(Debug, Clone, PartialEq)]
pub enum Value {
    /// An explicit null
    Null,
    /// A boolean
    Bool(bool),
    /// A number (all numbers are `f64`, as in JSON)
    Number(f64),
    /// A string
    String(String),
    /// An ordered sequence of values
    Array(Vec<Value>),
    /// A nested object
    Object(Params),
    /// A callable value
    Function(Function),
}

impl Value {
    /// Name of the runtime type, as used in mismatch messages.
    ///
    /// # Examples
    ///
    /// ```
    /// use paramshape::{Params, Value};
    ///
    /// assert_eq!(Value::from(true).type_name(), "boolean");
    /// assert_eq!(Value::from(Params::new()).type_name(), "object");
    /// assert_eq!(Value::Null.type_name(), "null");
    /// ```
    pub fn type_name(&self) -> &'static str {
        match self {
            Value::Null => "null",
            Value::Bool(_) => "boolean",
            Value::Number(_) => "number",
            Value::String(_) => "string",
            Value::Array(_) => "array",
            Value::Object(_) => "object",
            Value::Function(_) => "function",
        }
    }

    /// Borrow the string contents, if this is a string.
    pub fn as_str(&self) -> Option<&str> {
        match self {
            Value::String(s) => Some(s),
            _ => None,
        }
    }

    /// Get the number, if this is a number.
    pub fn as_f64(&self) -> Option<f64> {
        match self {
            Value::Number(n) => Some(*n),
            _ => None,
        }
    }

    /// Get the boolean, if this is a boolean.
    pub fn as_bool(&self) -> Option<bool> {
        match self {
            Value::Bool(b) => Some(*b),
            _ => None,
        }
    }

    /// Borrow the elements, if this is an array.
    pub fn as_array(&self) -> Option<&[Value]> {
        match self {
            Value::Array(items) => Some(items),
            _ => None,
        }
    }

    /// Borrow the fields, if this is an object.
    pub fn as_object(&self) -> Option<&Params> {
        match self {
            Value::Object(params) => Some(params),
            _ => None,
        }
    }

    /// Borrow the callable, if this is a function.
    pub fn as_function(&self) -> Option<&Function> {
        match self {
            Value::Function(f) => Some(f),
            _ => None,
        }
    }

    /// Check whether this is `Null`.
    pub fn is_null(&self) -> bool {
        matches!(self, Value::Null)
    }
}

impl From<bool> for Value {
    fn from(b: bool) -> Self {
        Value::Bool(b)
    }
}

impl From<f64> for Value {
    fn from(n: f64) -> Self {
        Value::Number(n)
    }
}

macro_rules! impl_from_number {
    ($($t:ty),+) => {
        $(
            impl From<$t> for Value {
                fn from(n: $t) -> Self {
                    Value::Number(f64::from(n))
                }
            }
        )+
    };
}

impl_from_number!(i8, i16, i32, u8, u16, u32, f32);

impl From<&str> for Value {
    fn from(s: &str) -> Self {
        Value::String(s.to_string())
    }
}

impl From<String> for Value {
    fn from(s: String) -> Self {
        Value::String(s)
    }
}

impl<T: Into<Value>> From<Vec<T>> for Value {
    fn from(items: Vec<T>) -> Self {
        Value::Array(items.into_iter().map(Into::into).collect())
    }
}

impl From<Params> for Value {
    fn from(params: Params) -> Self {
        Value::Object(params)
    }
}

impl From<Function> for Value {
    fn from(f: Function) -> Self {
        Value::Function(f)
    }
}

/// A shared callable value.
///
/// Two `Function`s are equal only when they are the same callable (clones of
/// one another), never because they behave alike.
///
/// # Examples
///
/// ```
/// use paramshape::{Function, Value};
///
/// let double = Function::new(|args| match args.first() {
///     Some(Value::Number(n)) => Value::Number(n * 2.0),
///     _ => Value::Null,
/// });
///
/// assert_eq!(double.call(&[Value::from(21)]), Value::from(42));
/// assert_eq!(double.clone(), double);
/// assert_ne!(double, Function::new(|_| Value::Null));
/// ```
#[derive(Clone)]
pub struct Function(Arc<dyn Fn(&[Value]) -> Value + Send + Sync>);

impl Function {
    /// Wrap a closure as a callable value.
    pub fn new<F>(f: F) -> Self
    where
        F: Fn(&[Value]) -> Value + Send + Sync + 'static,
    {
        Function(Arc::new(f))
    }

    /// Invoke the callable.
    pub fn call(&self, args: &[Value]) -> Value {
        (self.0)(args)
    }
}

impl PartialEq for Function {
    fn eq(&self, other: &Self) -> bool {
        Arc::ptr_eq(&self.0, &other.0)
    }
}

impl fmt::Debug for Function {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("Function(..)")
    }
}

/// A params object: field names mapped to values.
///
/// Keys are unique and iterate in sorted order. A field is *absent* exactly
/// when its key is not present.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Params(BTreeMap<String, Value>);

impl Params {
    /// Create empty params.
    pub fn new() -> Self {
        Params(BTreeMap::new())
    }

    /// Look up a field.
    pub fn get(&self, name: &str) -> Option<&Value> {
        self.0.get(name)
    }

    /// Check whether a field is present.
    pub fn contains(&self, name: &str) -> bool {
        self.0.contains_key(name)
    }

    /// Set a field, returning the previous value if any.
    pub fn insert(&mut self, name: impl Into<String>, value: impl Into<Value>) -> Option<Value> {
        self.0.insert(name.into(), value.into())
    }

    /// Builder-style insert.
    ///
    /// # Examples
    ///
    /// ```
    /// use paramshape::Params;
    ///
    /// let params = Params::new().with("a", 1).with("b", "two");
    /// assert_eq!(params.len(), 2);
    /// ```
    pub fn with(mut self, name: impl Into<String>, value: impl Into<Value>) -> Self {
        self.insert(name, value);
        self
    }

    /// Number of present fields.
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Check whether no fields are present.
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Iterate over fields in key order.
    pub fn iter(&self) -> btree_map::Iter<'_, String, Value> {
        self.0.iter()
    }
}

impl<K: Into<String>, V: Into<Value>> FromIterator<(K, V)> for Params {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        Params(
            iter.into_iter()
                .map(|(k, v)| (k.into(), v.into()))
                .collect(),
        )
    }
}

impl IntoIterator for Params {
    type Item = (String, Value);
    type IntoIter = btree_map::IntoIter<String, Value>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.into_iter()
    }
}

impl<'a> IntoIterator for &'a Params {
    type Item = (&'a String, &'a Value);
    type IntoIter = btree_map::Iter<'a, String, Value>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.iter()
    }
}

/// Build a [`Params`] literal.
///
/// # Examples
///
/// ```
/// use paramshape::{params, Value};
///
/// let empty = params! {};
/// assert!(empty.is_empty());
///
/// let nested = params! {
///     "user" => params! { "id" => 7 },
/// };
/// assert_eq!(nested.get("user").map(Value::type_name), Some("object"));
/// ```
#[macro_export]
macro_rules! params {
    () => {
        $crate::Params::new()
    };
    ($($name:expr => $value:expr),+ $(,)?) => {{
        let mut params = $crate::Params::new();
        $(
            params.insert($name, $value);
        )+
        params
    }};
}
