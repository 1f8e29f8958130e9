//! Array element validators

use crate::chain::{chain, Requirement, Validator, Verdict};
use crate::error::{ConfigError, ParamError};
use crate::model::Entry;
use crate::value::{Params, Value};

/// Build a validator that checks every element of an array with `element`.
///
/// Each element is placed alone in a params object under the array's field
/// name and checked in `element`'s own mode. The array fails at the first
/// failing element, and the error records that element's index.
///
/// Returns [`ConfigError::ArrayOfExpectsValidator`] when `element` is not a
/// validator.
///
/// # Example
///
/// ```rust
/// use paramshape::{model, params, types, validate};
///
/// # fn main() -> Result<(), paramshape::ConfigError> {
/// let model = model! { "tags" => types::array_of(types::string())? };
///
/// assert!(validate(&model, &params! { "tags" => vec!["a", "b"] }));
/// assert!(!validate(&model, &params! { "tags" => vec![1, 2] }));
/// assert!(!validate(&model, &params! { "tags" => "a" }));
/// # Ok(())
/// # }
/// ```
pub fn array_of(element: impl Into<Entry>) -> Result<Validator, ConfigError> {
    let element = match element.into() {
        Entry::Check(validator) => validator,
        Entry::NotCallable(value) => {
            return Err(ConfigError::ArrayOfExpectsValidator {
                found: value.type_name(),
            })
        }
    };

    Ok(chain(
        move |requirement: Requirement, params: &Params, name: &str| match params.get(name) {
            None => Verdict::absent(requirement, name),
            Some(Value::Array(items)) => check_elements(&element, items, name),
            Some(other) => Verdict::Invalid(ParamError::ArrayTypeMismatch {
                param: name.to_string(),
                found: other.type_name(),
            }),
        },
    ))
}

fn check_elements(element: &Validator, items: &[Value], name: &str) -> Verdict {
    for (index, item) in items.iter().enumerate() {
        let mut single = Params::new();
        single.insert(name, item.clone());

        if let Some(error) = element.check(&single, name).into_error(name) {
            return Verdict::Invalid(ParamError::ElementInvalid {
                param: name.to_string(),
                index,
                error: Box::new(error),
            });
        }
    }
    Verdict::Valid
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{model, params, types};

    #[test]
    fn absent_array_respects_requirement() {
        let v = array_of(types::number()).unwrap();
        assert_eq!(v.check(&params! {}, "xs"), Verdict::Absent);
        assert!(v.check_required(&params! {}, "xs").is_failure());
    }

    #[test]
    fn empty_array_is_valid() {
        let v = array_of(types::number()).unwrap().is_required();
        let params = params! { "xs" => Vec::<Value>::new() };
        assert_eq!(v.check(&params, "xs"), Verdict::Valid);
    }

    #[test]
    fn non_array_is_type_mismatch() {
        let v = array_of(types::number()).unwrap();
        assert_eq!(
            v.check(&params! { "xs" => params! {} }, "xs"),
            Verdict::Invalid(ParamError::ArrayTypeMismatch {
                param: "xs".into(),
                found: "object",
            })
        );
    }

    #[test]
    fn reports_first_failing_index() {
        let v = array_of(types::number()).unwrap();
        let params = params! {
            "xs" => vec![Value::from(1), Value::from("two"), Value::from("three")],
        };
        assert_eq!(
            v.check(&params, "xs"),
            Verdict::Invalid(ParamError::ElementInvalid {
                param: "xs".into(),
                index: 1,
                error: Box::new(ParamError::TypeMismatch { param: "xs".into() }),
            })
        );
    }

    #[test]
    fn elements_can_be_shapes() {
        let point = types::shape(model! {
            "x" => types::number().is_required(),
            "y" => types::number().is_required(),
        });
        let v = array_of(point).unwrap();

        let good = params! { "pts" => vec![params! { "x" => 0, "y" => 1 }] };
        let bad = params! {
            "pts" => vec![params! { "x" => 0, "y" => 1 }, params! { "x" => 2 }],
        };
        assert_eq!(v.check(&good, "pts"), Verdict::Valid);
        assert!(matches!(
            v.check(&bad, "pts"),
            Verdict::Invalid(ParamError::ElementInvalid { index: 1, .. })
        ));
    }

    #[test]
    fn null_element_fails_only_when_rule_rejects_it() {
        let any_shape = array_of(types::shape(model! {})).unwrap();
        let params = params! { "xs" => vec![Value::Null] };
        assert!(any_shape.check(&params, "xs").is_failure());
    }

    #[test]
    fn non_validator_element_is_config_error() {
        assert_eq!(
            array_of(Value::from(true)).unwrap_err(),
            ConfigError::ArrayOfExpectsValidator { found: "boolean" }
        );
    }
}
