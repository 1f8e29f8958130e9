//! Nested object validators

use crate::chain::{chain, Requirement, Validator, Verdict};
use crate::error::ParamError;
use crate::model::Model;
use crate::validate::check;
use crate::value::{Params, Value};
use crate::Validation;

/// Build a validator that checks a nested object against `model`.
///
/// The nested object goes through the same aggregation as the top level, so
/// every sub-field is checked by name. A failing sub-model fails the outer
/// field with [`ParamError::ShapeInvalid`]; the inner errors ride along for
/// diagnostics but do not change the verdict.
///
/// # Example
///
/// ```rust
/// use paramshape::{model, params, types, validate};
///
/// let model = model! {
///     "shape" => types::shape(model! { "a" => types::array().is_required() }).is_required(),
/// };
///
/// assert!(validate(&model, &params! { "shape" => params! { "a" => Vec::<i32>::new() } }));
/// assert!(!validate(&model, &params! { "shape" => params! {} }));
/// assert!(!validate(&model, &params! { "shape" => "not an object" }));
/// ```
pub fn shape(model: Model) -> Validator {
    chain(
        move |requirement: Requirement, params: &Params, name: &str| match params.get(name) {
            None => Verdict::absent(requirement, name),
            Some(Value::Object(inner)) => match check(&model, inner) {
                Validation::Success(()) => Verdict::Valid,
                Validation::Failure(errors) => Verdict::Invalid(ParamError::ShapeInvalid {
                    param: name.to_string(),
                    errors,
                }),
            },
            Some(other) => Verdict::Invalid(ParamError::ShapeTypeMismatch {
                param: name.to_string(),
                found: other.type_name(),
            }),
        },
    )
}
