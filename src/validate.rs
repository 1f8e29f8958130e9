//! The aggregator
//!
//! [`check`] runs every entry of a model against its field of a params object
//! and collects every failure. [`validate`] reduces that to a single verdict.
//! Neither ever panics or returns early: a broken model entry is recorded as
//! a configuration error alongside the data errors.
//!
//! # Examples
//!
//! ```
//! use paramshape::{check, model, params, types, validate, ParamError, Validation};
//!
//! let model = model! {
//!     "name" => types::string().is_required(),
//!     "age" => types::number(),
//! };
//!
//! assert!(validate(&model, &params! { "name" => "Ada" }));
//!
//! let result = check(&model, &params! { "age" => "old" });
//! assert_eq!(
//!     result,
//!     Validation::Failure(vec![
//!         ParamError::TypeMismatch { param: "age".into() },
//!         ParamError::MissingRequired { param: "name".into() },
//!     ])
//! );
//! ```

use crate::error::ParamError;
use crate::model::{Entry, Model};
use crate::value::Params;
use crate::Validation;

/// Check `params` against every entry of `model`, collecting all failures.
///
/// Errors are reported in the model's key order. An empty model accepts any
/// params.
pub fn check(model: &Model, params: &Params) -> Validation<(), Vec<ParamError>> {
    Validation::all_iter(
        model
            .iter()
            .map(|(name, entry)| check_entry(name, entry, params)),
    )
    .map(|_| ())
}

/// Whether `params` satisfies `model`.
///
/// # Examples
///
/// ```
/// use paramshape::{model, params, types, validate, Params};
///
/// assert!(validate(&model! {}, &params! { "anything" => 1 }));
/// assert!(!validate(&model! { "string" => types::string().is_required() }, &Params::new()));
/// assert!(!validate(&model! { "boolean" => false }, &Params::new()));
/// ```
pub fn validate(model: &Model, params: &Params) -> bool {
    check(model, params).is_success()
}

fn check_entry(name: &str, entry: &Entry, params: &Params) -> Validation<(), Vec<ParamError>> {
    let validator = match entry {
        Entry::Check(validator) => validator,
        Entry::NotCallable(_value) => {
            #[cfg(feature = "tracing")]
            tracing::warn!(
                param = name,
                found = _value.type_name(),
                "model entry is not a validator"
            );
            return Validation::failure(vec![ParamError::NotCallable {
                param: name.to_string(),
            }]);
        }
    };

    let verdict = validator.check(params, name);

    #[cfg(feature = "tracing")]
    tracing::trace!(param = name, verdict = ?verdict, "checked param");

    match verdict.into_error(name) {
        None => Validation::success(()),
        Some(error) => {
            #[cfg(feature = "tracing")]
            {
                if error.is_configuration() {
                    tracing::warn!(param = name, %error, "validator produced no verdict");
                } else {
                    tracing::debug!(param = name, %error, "param failed validation");
                }
            }
            Validation::failure(vec![error])
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::chain::{chain, Requirement, Verdict};
    use crate::value::Value;
    use crate::{model, params, types};

    #[test]
    fn empty_model_is_always_valid() {
        assert!(validate(&model! {}, &params! {}));
        assert!(validate(&model! {}, &params! { "x" => Value::Null }));
    }

    #[test]
    fn not_callable_entry_is_recorded_and_others_still_run() {
        let model = model! {
            "flag" => false,
            "name" => types::string().is_required(),
        };
        let result = check(&model, &params! {});
        assert_eq!(
            result,
            Validation::Failure(vec![
                ParamError::NotCallable { param: "flag".into() },
                ParamError::MissingRequired { param: "name".into() },
            ])
        );
    }

    #[test]
    fn undecided_is_a_configuration_error() {
        let silent = chain(|_: Requirement, _: &Params, _: &str| Verdict::Undecided);
        let result = check(&model! { "cb" => silent }, &params! { "cb" => 1 });
        match result {
            Validation::Failure(errors) => {
                assert_eq!(errors, vec![ParamError::NoVerdict { param: "cb".into() }]);
                assert!(errors[0].is_configuration());
            }
            Validation::Success(()) => panic!("expected failure"),
        }
    }

    #[test]
    fn rejected_is_a_failure() {
        let never = chain(|_: Requirement, _: &Params, _: &str| Verdict::Rejected);
        assert!(!validate(&model! { "x" => never }, &params! {}));
    }

    #[test]
    fn absent_and_valid_both_pass() {
        let model = model! {
            "missing" => types::number(),
            "present" => types::number(),
        };
        assert!(validate(&model, &params! { "present" => 0 }));
    }

    #[test]
    fn same_inputs_give_same_result() {
        let model = model! { "a" => types::string(), "b" => types::number().is_required() };
        let params = params! { "a" => 1 };
        assert_eq!(check(&model, &params), check(&model, &params));
    }
}
