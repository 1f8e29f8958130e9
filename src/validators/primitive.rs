//! Primitive validators built from a predicate

use crate::chain::{chain, Requirement, Validator, Verdict};
use crate::error::ParamError;
use crate::predicate::Predicate;
use crate::value::Params;

/// Build a validator from a predicate over one present value.
///
/// An absent field passes unless the validator is required. A present field
/// passes exactly when the predicate holds; the predicate runs once.
///
/// # Example
///
/// ```rust
/// use paramshape::{create_validator, params, validate, model, Params, Value};
///
/// let port = create_validator(|v: &Value, _: &Params| {
///     v.as_f64().is_some_and(|n| n.fract() == 0.0 && (1.0..=65535.0).contains(&n))
/// });
///
/// assert!(validate(&model! { "port" => port.clone() }, &params! { "port" => 8080 }));
/// assert!(!validate(&model! { "port" => port.clone() }, &params! { "port" => 0 }));
/// assert!(!validate(&model! { "port" => port.is_required() }, &params! {}));
/// ```
pub fn create_validator<P>(predicate: P) -> Validator
where
    P: Predicate + 'static,
{
    chain(
        move |requirement: Requirement, params: &Params, name: &str| match params.get(name) {
            None => Verdict::absent(requirement, name),
            Some(value) if predicate.check(value, params) => Verdict::Valid,
            Some(_) => Verdict::Invalid(ParamError::TypeMismatch {
                param: name.to_string(),
            }),
        },
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::params;
    use crate::predicate::Kind;
    use crate::value::Value;

    #[test]
    fn absent_optional_passes() {
        let v = create_validator(Kind::String);
        assert_eq!(v.check(&params! {}, "s"), Verdict::Absent);
    }

    #[test]
    fn absent_required_fails() {
        let v = create_validator(Kind::String);
        assert_eq!(
            v.check_required(&params! {}, "s"),
            Verdict::Invalid(ParamError::MissingRequired { param: "s".into() })
        );
    }

    #[test]
    fn wrong_type_fails_in_either_mode() {
        let v = create_validator(Kind::String);
        let params = params! { "s" => 5 };
        let expected = Verdict::Invalid(ParamError::TypeMismatch { param: "s".into() });
        assert_eq!(v.check(&params, "s"), expected);
        assert_eq!(v.check_required(&params, "s"), expected);
    }

    #[test]
    fn falsy_values_are_checked_not_skipped() {
        let boolean = create_validator(Kind::Bool).is_required();
        assert_eq!(boolean.check(&params! { "b" => false }, "b"), Verdict::Valid);

        let string = create_validator(Kind::String).is_required();
        assert_eq!(string.check(&params! { "s" => "" }, "s"), Verdict::Valid);

        let number = create_validator(Kind::Number);
        assert!(number.check(&params! { "n" => Value::Null }, "n").is_failure());
    }

    #[test]
    fn predicate_sees_all_params() {
        let confirm = create_validator(|v: &Value, params: &Params| {
            params.get("password") == Some(v)
        });
        let ok = params! { "password" => "pw", "confirm" => "pw" };
        let bad = params! { "password" => "pw", "confirm" => "px" };
        assert_eq!(confirm.check(&ok, "confirm"), Verdict::Valid);
        assert!(confirm.check(&bad, "confirm").is_failure());
    }
}
