//! Validation and configuration errors
//!
//! [`ParamError`] describes why one field of a params object was rejected.
//! Errors are collected by the aggregator, never raised while validating.
//!
//! [`ConfigError`] is returned when a structural factory is handed a broken
//! definition. It is reported at construction time, before any params exist.

use std::error::Error as StdError;
use std::fmt;

/// Why a field failed validation.
///
/// Every variant carries the name of the field it was raised for.
///
/// # Examples
///
/// ```
/// use paramshape::ParamError;
///
/// let err = ParamError::MissingRequired { param: "email".into() };
/// assert_eq!(err.to_string(), "Required param `email` missing");
/// assert_eq!(err.param(), "email");
/// assert!(!err.is_configuration());
/// ```
#[derive(Debug, Clone, PartialEq)]
pub enum ParamError {
    /// A required field was absent.
    MissingRequired {
        /// Field name
        param: String,
    },
    /// A present value failed a primitive predicate.
    TypeMismatch {
        /// Field name
        param: String,
    },
    /// A shape-typed field held something other than an object.
    ShapeTypeMismatch {
        /// Field name
        param: String,
        /// Runtime type of the value found
        found: &'static str,
    },
    /// An array-typed field held something other than an array.
    ArrayTypeMismatch {
        /// Field name
        param: String,
        /// Runtime type of the value found
        found: &'static str,
    },
    /// A value was not a member of the accepted set.
    EnumMismatch {
        /// Field name
        param: String,
    },
    /// A nested object did not satisfy its sub-model.
    ///
    /// The verdict for the outer field is the same generic failure whatever
    /// went wrong inside; the inner errors are kept only for diagnostics.
    ShapeInvalid {
        /// Field name
        param: String,
        /// Failures reported by the sub-model
        errors: Vec<ParamError>,
    },
    /// An element of an array failed the element validator.
    ElementInvalid {
        /// Field name
        param: String,
        /// Index of the first failing element
        index: usize,
        /// The element's failure
        error: Box<ParamError>,
    },
    /// A custom rule rejected the value without describing why.
    Rejected {
        /// Field name
        param: String,
    },
    /// The model entry for this field is not a validator.
    NotCallable {
        /// Field name
        param: String,
    },
    /// The validator for this field produced no verdict.
    NoVerdict {
        /// Field name
        param: String,
    },
}

impl ParamError {
    /// Name of the field this error was raised for.
    pub fn param(&self) -> &str {
        match self {
            ParamError::MissingRequired { param }
            | ParamError::TypeMismatch { param }
            | ParamError::ShapeTypeMismatch { param, .. }
            | ParamError::ArrayTypeMismatch { param, .. }
            | ParamError::EnumMismatch { param }
            | ParamError::ShapeInvalid { param, .. }
            | ParamError::ElementInvalid { param, .. }
            | ParamError::Rejected { param }
            | ParamError::NotCallable { param }
            | ParamError::NoVerdict { param } => param,
        }
    }

    /// Whether this error points at a broken model rather than bad data.
    pub fn is_configuration(&self) -> bool {
        matches!(
            self,
            ParamError::NotCallable { .. } | ParamError::NoVerdict { .. }
        )
    }

    /// Flatten nested failures into `(path, error)` pairs.
    ///
    /// The path lists the field names (and array indices) leading from the
    /// top-level params to the innermost error.
    ///
    /// # Examples
    ///
    /// ```
    /// use paramshape::ParamError;
    ///
    /// let err = ParamError::ShapeInvalid {
    ///     param: "user".into(),
    ///     errors: vec![ParamError::TypeMismatch { param: "age".into() }],
    /// };
    ///
    /// let leaves = err.leaves();
    /// assert_eq!(leaves.len(), 1);
    /// assert_eq!(leaves[0].0, vec!["user".to_string(), "age".to_string()]);
    /// ```
    pub fn leaves(&self) -> Vec<(Vec<String>, &ParamError)> {
        let mut out = Vec::new();
        self.collect_leaves(Vec::new(), &mut out);
        out
    }

    fn collect_leaves<'a>(
        &'a self,
        mut path: Vec<String>,
        out: &mut Vec<(Vec<String>, &'a ParamError)>,
    ) {
        match self {
            ParamError::ShapeInvalid { param, errors } if !errors.is_empty() => {
                path.push(param.clone());
                for inner in errors {
                    inner.collect_leaves(path.clone(), out);
                }
            }
            ParamError::ElementInvalid { param, index, error } => {
                // The element was checked under the array's own field name.
                path.push(format!("{}[{}]", param, index));
                match error.as_ref() {
                    ParamError::ShapeInvalid { errors, .. } if !errors.is_empty() => {
                        for inner in errors {
                            inner.collect_leaves(path.clone(), out);
                        }
                    }
                    ParamError::ElementInvalid { .. } => error.collect_leaves(path, out),
                    leaf => out.push((path, leaf)),
                }
            }
            _ => {
                path.push(self.param().to_string());
                out.push((path, self));
            }
        }
    }
}

impl fmt::Display for ParamError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ParamError::MissingRequired { param } => {
                write!(f, "Required param `{}` missing", param)
            }
            ParamError::TypeMismatch { param } => {
                write!(f, "Param `{}` received incorrect type", param)
            }
            ParamError::ShapeTypeMismatch { param, found } => write!(
                f,
                "Shape param `{}` expects `object`, but got `{}`",
                param, found
            ),
            ParamError::ArrayTypeMismatch { param, found } => write!(
                f,
                "ArrayOf param `{}` expects `array`, but got `{}`",
                param, found
            ),
            ParamError::EnumMismatch { param } => {
                write!(f, "Param `{}` is not one of the accepted values", param)
            }
            ParamError::ShapeInvalid { param, .. } => {
                write!(f, "Shape param `{}` failed validation", param)
            }
            ParamError::ElementInvalid { param, index, .. } => {
                write!(f, "Element {} of param `{}` failed validation", index, param)
            }
            ParamError::Rejected { param } => write!(f, "Param `{}` is invalid", param),
            ParamError::NotCallable { param } => {
                write!(f, "Type validator for param `{}` is not a function", param)
            }
            ParamError::NoVerdict { param } => write!(
                f,
                "Validator for `{}` returned no verdict. \
                 Validators must report absent, valid, an error, or a rejection.",
                param
            ),
        }
    }
}

impl StdError for ParamError {
    fn source(&self) -> Option<&(dyn StdError + 'static)> {
        match self {
            ParamError::ElementInvalid { error, .. } => Some(error.as_ref()),
            ParamError::ShapeInvalid { errors, .. } => {
                errors.first().map(|e| e as &(dyn StdError + 'static))
            }
            _ => None,
        }
    }
}

/// A structural factory was given a malformed definition.
///
/// # Examples
///
/// ```
/// use paramshape::{types, ConfigError, Value};
///
/// let err = types::one_of(Value::from("foo")).unwrap_err();
/// assert_eq!(err, ConfigError::OneOfExpectsArray { found: "string" });
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ConfigError {
    /// `one_of` was given something other than an array of values.
    OneOfExpectsArray {
        /// Runtime type of the value given
        found: &'static str,
    },
    /// `array_of` was given a model entry that is not a validator.
    ArrayOfExpectsValidator {
        /// Runtime type of the value given
        found: &'static str,
    },
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConfigError::OneOfExpectsArray { found } => {
                write!(f, "OneOf validator expects `array`, but got `{}`", found)
            }
            ConfigError::ArrayOfExpectsValidator { found } => write!(
                f,
                "ArrayOf validator expects a validator, but got `{}`",
                found
            ),
        }
    }
}

impl StdError for ConfigError {}
