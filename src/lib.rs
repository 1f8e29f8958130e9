//! # Paramshape
//!
//! Runtime shape validation for dynamic params.
//!
//! A *model* maps field names to validators. Checking a params object against
//! a model runs every validator against its field and reports either success
//! or every failure at once.
//!
//! ## Philosophy
//!
//! - One rule, two modes: every validator is written once and works as
//!   optional or required via [`Validator::is_required`]
//! - Structural validators ([`types::shape`], [`types::array_of`]) recurse
//!   through the same aggregation as the top level
//! - Checking never panics: broken model entries are reported next to data
//!   errors, and only malformed factory arguments fail, at construction time
//!
//! ## Quick Example
//!
//! ```rust
//! use paramshape::{check, model, params, types, validate, ParamError, Validation};
//!
//! let model = model! {
//!     "boolean" => types::boolean().is_required(),
//!     "shape" => types::shape(model! {
//!         "array" => types::array().is_required(),
//!         "nested" => types::shape(model! {
//!             "name" => types::string().is_required(),
//!         }).is_required(),
//!     }).is_required(),
//! };
//!
//! let good = params! {
//!     "boolean" => true,
//!     "shape" => params! {
//!         "array" => Vec::<i32>::new(),
//!         "nested" => params! { "name" => "ok" },
//!     },
//! };
//! assert!(validate(&model, &good));
//!
//! let bad = params! { "boolean" => "yes" };
//! match check(&model, &bad) {
//!     Validation::Failure(errors) => {
//!         assert_eq!(errors[0], ParamError::TypeMismatch { param: "boolean".into() });
//!         assert_eq!(errors[1], ParamError::MissingRequired { param: "shape".into() });
//!     }
//!     Validation::Success(()) => unreachable!(),
//! }
//! ```
//!
//! ## Cargo features
//!
//! - `tracing`: log each checked field and every failure via `tracing`
//! - `serde`: `Serialize`/`Deserialize` for [`Value`] and [`Params`]
//! - `proptest`: `Arbitrary` strategies for [`Value`] and [`Params`]

#![warn(missing_docs)]
#![warn(missing_debug_implementations)]

pub mod chain;
pub mod error;
pub mod model;
pub mod predicate;
pub mod semigroup;
pub mod testing;
pub mod types;
pub mod validate;
pub mod validation;
pub mod validators;
pub mod value;

#[cfg(feature = "serde")]
mod serde_impl;

// Re-exports
pub use chain::{chain, Requirement, Rule, Validator, Verdict};
pub use error::{ConfigError, ParamError};
pub use model::{Entry, Model};
pub use semigroup::Semigroup;
pub use validate::{check, validate};
pub use validation::Validation;
pub use validators::create_validator;
pub use value::{Function, Params, Value};

/// Prelude module for convenient imports
pub mod prelude {
    pub use crate::chain::{chain, Requirement, Validator, Verdict};
    pub use crate::error::{ConfigError, ParamError};
    pub use crate::model::{Entry, Model};
    pub use crate::predicate::{Kind, Predicate, PredicateExt};
    pub use crate::types;
    pub use crate::validate::{check, validate};
    pub use crate::validation::Validation;
    pub use crate::validators::create_validator;
    pub use crate::value::{Function, Params, Value};
    pub use crate::{model, params};
}
