//! Predicates over dynamic values
//!
//! A predicate decides whether a single present value is acceptable. It also
//! sees the whole params object, so rules such as "must match another field"
//! can be expressed. Predicates compose with [`PredicateExt::and`],
//! [`PredicateExt::or`] and [`PredicateExt::not`], and become field validators
//! through [`create_validator`](crate::create_validator).
//!
//! # Example
//!
//! ```rust
//! use paramshape::predicate::*;
//! use paramshape::{params, Value};
//!
//! let short_string = Kind::String.and(|v: &Value, _: &paramshape::Params| {
//!     v.as_str().is_some_and(|s| s.len() <= 8)
//! });
//!
//! let params = params! {};
//! assert!(short_string.check(&Value::from("tiny"), &params));
//! assert!(!short_string.check(&Value::from("much too long"), &params));
//! assert!(!short_string.check(&Value::from(3), &params));
//! ```

use crate::value::{Params, Value};

/// A composable check over one value.
pub trait Predicate: Send + Sync {
    /// Check whether `value` is acceptable. `params` is the object the value
    /// was read from.
    fn check(&self, value: &Value, params: &Params) -> bool;
}

// Blanket impl for closures
impl<F> Predicate for F
where
    F: Fn(&Value, &Params) -> bool + Send + Sync,
{
    #[inline]
    fn check(&self, value: &Value, params: &Params) -> bool {
        self(value, params)
    }
}

/// Extension trait for predicate combinators.
///
/// # Example
///
/// ```rust
/// use paramshape::predicate::*;
/// use paramshape::{Params, Value};
///
/// let scalar = Kind::String.or(Kind::Number).or(Kind::Bool);
/// assert!(scalar.check(&Value::from(1), &Params::new()));
/// assert!(!scalar.check(&Value::Null, &Params::new()));
/// ```
pub trait PredicateExt: Predicate + Sized {
    /// Both predicates must hold.
    fn and<P: Predicate>(self, other: P) -> And<Self, P> {
        And(self, other)
    }

    /// Either predicate must hold.
    fn or<P: Predicate>(self, other: P) -> Or<Self, P> {
        Or(self, other)
    }

    /// Invert the predicate.
    fn not(self) -> Not<Self> {
        Not(self)
    }
}

impl<P: Predicate> PredicateExt for P {}

/// AND combinator
#[derive(Clone, Copy, Debug)]
pub struct And<P1, P2>(pub P1, pub P2);

impl<P1: Predicate, P2: Predicate> Predicate for And<P1, P2> {
    #[inline]
    fn check(&self, value: &Value, params: &Params) -> bool {
        self.0.check(value, params) && self.1.check(value, params)
    }
}

/// OR combinator
#[derive(Clone, Copy, Debug)]
pub struct Or<P1, P2>(pub P1, pub P2);

impl<P1: Predicate, P2: Predicate> Predicate for Or<P1, P2> {
    #[inline]
    fn check(&self, value: &Value, params: &Params) -> bool {
        self.0.check(value, params) || self.1.check(value, params)
    }
}

/// NOT combinator
#[derive(Clone, Copy, Debug)]
pub struct Not<P>(pub P);

impl<P: Predicate> Predicate for Not<P> {
    #[inline]
    fn check(&self, value: &Value, params: &Params) -> bool {
        !self.0.check(value, params)
    }
}

/// Matches values of one runtime type.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Kind {
    /// `Value::Null`
    Null,
    /// `Value::Bool`
    Bool,
    /// `Value::Number`
    Number,
    /// `Value::String`
    String,
    /// `Value::Array`
    Array,
    /// `Value::Object`
    Object,
    /// `Value::Function`
    Function,
}

impl Kind {
    /// The runtime kind of `value`.
    pub fn of(value: &Value) -> Kind {
        match value {
            Value::Null => Kind::Null,
            Value::Bool(_) => Kind::Bool,
            Value::Number(_) => Kind::Number,
            Value::String(_) => Kind::String,
            Value::Array(_) => Kind::Array,
            Value::Object(_) => Kind::Object,
            Value::Function(_) => Kind::Function,
        }
    }
}

impl Predicate for Kind {
    #[inline]
    fn check(&self, value: &Value, _params: &Params) -> bool {
        Kind::of(value) == *self
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::params;
    use crate::value::Function;

    #[test]
    fn kind_matches_only_its_variant() {
        let p = params! {};
        assert!(Kind::Array.check(&Value::from(vec![1, 2]), &p));
        assert!(!Kind::Array.check(&Value::from(params! {}), &p));
        assert!(Kind::Function.check(&Value::from(Function::new(|_| Value::Null)), &p));
        assert!(Kind::Bool.check(&Value::from(false), &p));
        assert!(!Kind::Number.check(&Value::from("5"), &p));
    }

    #[test]
    fn combinators() {
        let p = params! {};
        let not_null = Kind::Null.not();
        assert!(not_null.check(&Value::from(0), &p));
        assert!(!not_null.check(&Value::Null, &p));

        let never = Kind::String.and(Kind::Number);
        assert!(!never.check(&Value::from("a"), &p));
    }

    #[test]
    fn closures_see_sibling_fields() {
        let matches_password = |v: &Value, params: &Params| params.get("password") == Some(v);
        let params = params! { "password" => "hunter2" };
        assert!(matches_password.check(&Value::from("hunter2"), &params));
        assert!(!matches_password.check(&Value::from("hunter3"), &params));
    }
}
