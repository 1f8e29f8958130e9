//! Enumeration validators

use crate::chain::{chain, Requirement, Validator, Verdict};
use crate::error::{ConfigError, ParamError};
use crate::value::{Params, Value};

/// Build a validator accepting only members of `values`, which must be an
/// array.
///
/// Anything other than an array is a broken definition and is rejected here,
/// before any params are checked. Once a field is present, membership alone
/// decides the verdict, whatever the requirement.
///
/// Membership is [`Value`] equality: scalars by value (`NaN` matches
/// nothing), functions by identity, arrays and objects structurally.
///
/// # Example
///
/// ```rust
/// use paramshape::{model, params, types, validate, Value};
///
/// # fn main() -> Result<(), paramshape::ConfigError> {
/// let mode = types::one_of(Value::from(vec!["foo", "bar"]))?;
///
/// assert!(validate(&model! { "mode" => mode.is_required() }, &params! { "mode" => "foo" }));
/// assert!(!validate(&model! { "mode" => mode.clone() }, &params! { "mode" => "baz" }));
/// assert!(types::one_of(Value::from("foo")).is_err());
/// # Ok(())
/// # }
/// ```
pub fn one_of(values: impl Into<Value>) -> Result<Validator, ConfigError> {
    match values.into() {
        Value::Array(accepted) => Ok(members(accepted)),
        other => Err(ConfigError::OneOfExpectsArray {
            found: other.type_name(),
        }),
    }
}

/// Infallible form of [`one_of`] for a statically known set.
///
/// # Example
///
/// ```rust
/// use paramshape::{params, types, Verdict};
///
/// let level = types::one_of_values([1, 2, 3]);
/// assert_eq!(level.check(&params! { "level" => 2 }, "level"), Verdict::Valid);
/// assert!(level.check(&params! { "level" => 4 }, "level").is_failure());
/// ```
pub fn one_of_values<I>(values: I) -> Validator
where
    I: IntoIterator,
    I::Item: Into<Value>,
{
    members(values.into_iter().map(Into::into).collect())
}

fn members(accepted: Vec<Value>) -> Validator {
    chain(
        move |requirement: Requirement, params: &Params, name: &str| match params.get(name) {
            None => Verdict::absent(requirement, name),
            Some(value) if accepted.iter().any(|candidate| candidate == value) => Verdict::Valid,
            Some(_) => Verdict::Invalid(ParamError::EnumMismatch {
                param: name.to_string(),
            }),
        },
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::params;
    use crate::value::Function;

    fn foo_bar() -> Validator {
        one_of(Value::from(vec!["foo", "bar"])).unwrap()
    }

    #[test]
    fn member_is_valid() {
        let v = foo_bar().is_required();
        assert_eq!(v.check(&params! { "o" => "foo" }, "o"), Verdict::Valid);
    }

    #[test]
    fn non_member_fails_in_both_modes() {
        let params = params! { "o" => "baz" };
        let expected = Verdict::Invalid(ParamError::EnumMismatch { param: "o".into() });
        assert_eq!(foo_bar().check(&params, "o"), expected);
        assert_eq!(foo_bar().check_required(&params, "o"), expected);
    }

    #[test]
    fn absent_respects_requirement() {
        assert_eq!(foo_bar().check(&params! {}, "o"), Verdict::Absent);
        assert!(foo_bar().check_required(&params! {}, "o").is_failure());
    }

    #[test]
    fn comparison_is_type_strict() {
        let v = one_of_values([1, 2]);
        assert!(v.check(&params! { "n" => "1" }, "n").is_failure());
        assert_eq!(v.check(&params! { "n" => 1 }, "n"), Verdict::Valid);
    }

    #[test]
    fn nan_is_never_a_member() {
        let v = one_of_values([f64::NAN]);
        assert!(v.check(&params! { "n" => f64::NAN }, "n").is_failure());
    }

    #[test]
    fn functions_match_by_identity() {
        let f = Function::new(|_| Value::Null);
        let v = one_of_values([f.clone()]);
        assert_eq!(v.check(&params! { "cb" => f }, "cb"), Verdict::Valid);
        let other = Function::new(|_| Value::Null);
        assert!(v.check(&params! { "cb" => other }, "cb").is_failure());
    }

    #[test]
    fn empty_set_rejects_everything_present() {
        let v = one_of_values(Vec::<Value>::new());
        assert!(v.check(&params! { "x" => Value::Null }, "x").is_failure());
        assert_eq!(v.check(&params! {}, "x"), Verdict::Absent);
    }

    #[test]
    fn non_array_definition_fails_at_construction() {
        assert_eq!(
            one_of(params! { "foo" => true }).unwrap_err(),
            ConfigError::OneOfExpectsArray { found: "object" }
        );
        assert_eq!(
            one_of(5).unwrap_err(),
            ConfigError::OneOfExpectsArray { found: "number" }
        );
    }
}
