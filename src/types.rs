//! Ready-made validators
//!
//! The primitive checks every model needs, plus the structural factories
//! re-exported under their registry names.
//!
//! # Examples
//!
//! ```
//! use paramshape::{model, params, types, validate, Function, Value};
//!
//! # fn main() -> Result<(), paramshape::ConfigError> {
//! let model = model! {
//!     "name" => types::string().is_required(),
//!     "retries" => types::number(),
//!     "dry_run" => types::boolean(),
//!     "hosts" => types::array_of(types::string())?,
//!     "on_done" => types::function(),
//!     "level" => types::one_of(Value::from(vec!["info", "debug"]))?,
//!     "tls" => types::shape(model! { "cert" => types::string().is_required() }),
//! };
//!
//! let params = params! {
//!     "name" => "deploy",
//!     "dry_run" => false,
//!     "hosts" => vec!["a", "b"],
//!     "on_done" => Function::new(|_| Value::Null),
//!     "level" => "info",
//! };
//! assert!(validate(&model, &params));
//! # Ok(())
//! # }
//! ```

use crate::chain::Validator;
use crate::predicate::Kind;
use crate::validators::create_validator;

pub use crate::validators::{array_of, one_of, one_of_values, shape};

/// Accepts strings.
pub fn string() -> Validator {
    create_validator(Kind::String)
}

/// Accepts numbers.
pub fn number() -> Validator {
    create_validator(Kind::Number)
}

/// Accepts arrays of anything.
pub fn array() -> Validator {
    create_validator(Kind::Array)
}

/// Accepts booleans.
pub fn boolean() -> Validator {
    create_validator(Kind::Bool)
}

/// Accepts callables.
pub fn function() -> Validator {
    create_validator(Kind::Function)
}

/// Accepts objects without looking inside them. Use [`shape`] to check
/// their fields.
pub fn object() -> Validator {
    create_validator(Kind::Object)
}

/// Resolve a primitive validator by its canonical name.
///
/// # Examples
///
/// ```
/// use paramshape::{params, types, Verdict};
///
/// let v = types::lookup("number").unwrap();
/// assert_eq!(v.check(&params! { "n" => 3 }, "n"), Verdict::Valid);
/// assert!(types::lookup("date").is_none());
/// ```
pub fn lookup(name: &str) -> Option<Validator> {
    match name {
        "string" => Some(string()),
        "number" => Some(number()),
        "array" => Some(array()),
        "boolean" => Some(boolean()),
        "function" => Some(function()),
        "object" => Some(object()),
        _ => None,
    }
}
