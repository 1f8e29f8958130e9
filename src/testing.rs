//! Testing utilities
//!
//! Assertion macros for checking models in tests, and (with the `proptest`
//! feature) strategies for generating arbitrary values and params.
//!
//! # Examples
//!
//! ```rust
//! use paramshape::{assert_invalid, assert_valid, model, params, types};
//!
//! let model = model! { "id" => types::number().is_required() };
//! assert_valid!(&model, &params! { "id" => 1 });
//! assert_invalid!(&model, &params! {});
//! ```

/// Assert that params satisfy a model.
///
/// Panics with every collected error if they do not.
#[macro_export]
macro_rules! assert_valid {
    ($model:expr, $params:expr) => {
        match $crate::check($model, $params) {
            $crate::Validation::Success(()) => {}
            $crate::Validation::Failure(errors) => {
                panic!("Expected params to be valid, got errors: {:?}", errors);
            }
        }
    };
}

/// Assert that params do not satisfy a model.
#[macro_export]
macro_rules! assert_invalid {
    ($model:expr, $params:expr) => {
        if let $crate::Validation::Success(()) = $crate::check($model, $params) {
            panic!("Expected params to be invalid, got success");
        }
    };
}

/// Assert that checking params against a model fails with exactly these errors.
///
/// # Example
///
/// ```rust
/// use paramshape::{assert_param_errors, model, params, types, ParamError};
///
/// let model = model! { "id" => types::number().is_required() };
/// assert_param_errors!(
///     &model,
///     &params! {},
///     vec![ParamError::MissingRequired { param: "id".into() }]
/// );
/// ```
#[macro_export]
macro_rules! assert_param_errors {
    ($model:expr, $params:expr, $expected:expr) => {
        match $crate::check($model, $params) {
            $crate::Validation::Failure(errors) => {
                assert_eq!(errors, $expected);
            }
            $crate::Validation::Success(()) => {
                panic!("Expected errors {:?}, got success", $expected);
            }
        }
    };
}

#[cfg(feature = "proptest")]
use crate::value::{Params, Value};
#[cfg(feature = "proptest")]
use proptest::prelude::*;

/// Functions are not generated: there is no meaningful arbitrary callable.
#[cfg(feature = "proptest")]
impl Arbitrary for Value {
    type Parameters = ();
    type Strategy = BoxedStrategy<Self>;

    fn arbitrary_with(_args: Self::Parameters) -> Self::Strategy {
        let leaf = prop_oneof![
            Just(Value::Null),
            any::<bool>().prop_map(Value::Bool),
            any::<f64>().prop_map(Value::Number),
            "[a-z]{0,8}".prop_map(Value::String),
        ];
        leaf.prop_recursive(3, 24, 4, |inner| {
            prop_oneof![
                prop::collection::vec(inner.clone(), 0..4).prop_map(Value::Array),
                prop::collection::btree_map("[a-z]{1,4}", inner, 0..4)
                    .prop_map(|fields| Value::Object(fields.into_iter().collect())),
            ]
        })
        .boxed()
    }
}

#[cfg(feature = "proptest")]
impl Arbitrary for Params {
    type Parameters = ();
    type Strategy = BoxedStrategy<Self>;

    fn arbitrary_with(_args: Self::Parameters) -> Self::Strategy {
        prop::collection::btree_map("[a-z]{1,6}", any::<Value>(), 0..6)
            .prop_map(|fields| fields.into_iter().collect())
            .boxed()
    }
}

#[cfg(test)]
mod tests {
    use crate::{model, params, types, ParamError};

    #[test]
    fn assert_valid_macro() {
        assert_valid!(&model! { "s" => types::string() }, &params! { "s" => "x" });
    }

    #[test]
    fn assert_invalid_macro() {
        assert_invalid!(&model! { "s" => types::string() }, &params! { "s" => 1 });
    }

    #[test]
    fn assert_param_errors_macro() {
        assert_param_errors!(
            &model! { "s" => types::string() },
            &params! { "s" => 1 },
            vec![ParamError::TypeMismatch { param: "s".into() }]
        );
    }

    #[test]
    #[should_panic(expected = "Expected params to be valid")]
    fn assert_valid_panics_on_failure() {
        assert_valid!(&model! { "s" => types::string().is_required() }, &params! {});
    }

    #[test]
    #[should_panic(expected = "Expected params to be invalid")]
    fn assert_invalid_panics_on_success() {
        assert_invalid!(&model! {}, &params! {});
    }

    #[cfg(feature = "proptest")]
    mod proptest_tests {
        use crate::value::{Params, Value};
        use proptest::prelude::*;

        proptest! {
            #[test]
            fn arbitrary_values_never_contain_functions(v in any::<Value>()) {
                fn has_function(v: &Value) -> bool {
                    match v {
                        Value::Function(_) => true,
                        Value::Array(items) => items.iter().any(has_function),
                        Value::Object(fields) => fields.iter().any(|(_, v)| has_function(v)),
                        _ => false,
                    }
                }
                prop_assert!(!has_function(&v));
            }

            #[test]
            fn arbitrary_params_have_bounded_size(p in any::<Params>()) {
                prop_assert!(p.len() < 6);
            }
        }
    }
}
