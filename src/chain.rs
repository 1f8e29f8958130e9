//! Required/optional wrapper
//!
//! Every validator family is written once, as a [`Rule`] that is told whether
//! the field is required. [`chain`] turns such a rule into a [`Validator`]
//! that can be used in either mode, so no family has to duplicate its logic
//! for the required case.
//!
//! # Examples
//!
//! ```
//! use paramshape::{chain, params, ParamError, Requirement, Verdict};
//!
//! let even = chain(|requirement: Requirement, params: &paramshape::Params, name: &str| {
//!     match params.get(name).and_then(|v| v.as_f64()) {
//!         None if requirement.is_required() => Verdict::Invalid(ParamError::MissingRequired {
//!             param: name.to_string(),
//!         }),
//!         None => Verdict::Absent,
//!         Some(n) if n % 2.0 == 0.0 => Verdict::Valid,
//!         Some(_) => Verdict::Rejected,
//!     }
//! });
//!
//! assert_eq!(even.check(&params! {}, "n"), Verdict::Absent);
//! assert!(even.check_required(&params! {}, "n").is_failure());
//! assert_eq!(even.check(&params! { "n" => 4 }, "n"), Verdict::Valid);
//! ```

use std::fmt;
use std::sync::Arc;

use crate::error::ParamError;
use crate::value::Params;

/// Whether a field must be present.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Requirement {
    /// Absence is acceptable
    #[default]
    Optional,
    /// Absence is a failure
    Required,
}

impl Requirement {
    /// Check whether this is [`Requirement::Required`].
    #[inline]
    pub fn is_required(self) -> bool {
        matches!(self, Requirement::Required)
    }
}

/// Outcome of checking one field.
///
/// `Absent` and `Valid` are the two passing outcomes. Everything else is a
/// failure that the aggregator records.
#[derive(Debug, Clone, PartialEq)]
pub enum Verdict {
    /// The field is optional and not present.
    Absent,
    /// The field is present and acceptable.
    Valid,
    /// The field failed, with a description.
    Invalid(ParamError),
    /// The field failed without a description.
    Rejected,
    /// The rule produced no verdict at all. This is a defect in the model,
    /// never in the params.
    Undecided,
}

impl Verdict {
    /// Whether this verdict is a failure.
    #[inline]
    pub fn is_failure(&self) -> bool {
        !matches!(self, Verdict::Absent | Verdict::Valid)
    }

    /// Convert into the error recorded for `param`, if this is a failure.
    ///
    /// # Examples
    ///
    /// ```
    /// use paramshape::{ParamError, Verdict};
    ///
    /// assert_eq!(Verdict::Valid.into_error("x"), None);
    /// assert_eq!(
    ///     Verdict::Rejected.into_error("x"),
    ///     Some(ParamError::Rejected { param: "x".into() })
    /// );
    /// ```
    pub fn into_error(self, param: &str) -> Option<ParamError> {
        match self {
            Verdict::Absent | Verdict::Valid => None,
            Verdict::Invalid(error) => Some(error),
            Verdict::Rejected => Some(ParamError::Rejected {
                param: param.to_string(),
            }),
            Verdict::Undecided => Some(ParamError::NoVerdict {
                param: param.to_string(),
            }),
        }
    }

    /// Fail with [`ParamError::MissingRequired`] when required, else pass.
    pub(crate) fn absent(requirement: Requirement, param: &str) -> Verdict {
        if requirement.is_required() {
            Verdict::Invalid(ParamError::MissingRequired {
                param: param.to_string(),
            })
        } else {
            Verdict::Absent
        }
    }
}

/// A two-mode validation function.
///
/// Implemented for any `Fn(Requirement, &Params, &str) -> Verdict`.
pub trait Rule: Send + Sync {
    /// Check `params[name]` in the given mode.
    fn evaluate(&self, requirement: Requirement, params: &Params, name: &str) -> Verdict;
}

impl<F> Rule for F
where
    F: Fn(Requirement, &Params, &str) -> Verdict + Send + Sync,
{
    #[inline]
    fn evaluate(&self, requirement: Requirement, params: &Params, name: &str) -> Verdict {
        self(requirement, params, name)
    }
}

/// A field validator usable in optional or required mode.
///
/// Cloning is cheap and clones share the same rule, so one validator can be
/// reused across any number of models and threads.
#[derive(Clone)]
pub struct Validator {
    rule: Arc<dyn Rule>,
    requirement: Requirement,
}

impl Validator {
    /// Check in this validator's own mode (optional unless built with
    /// [`Validator::is_required`]).
    #[inline]
    pub fn check(&self, params: &Params, name: &str) -> Verdict {
        self.rule.evaluate(self.requirement, params, name)
    }

    /// Check with presence enforced.
    #[inline]
    pub fn check_required(&self, params: &Params, name: &str) -> Verdict {
        self.rule.evaluate(Requirement::Required, params, name)
    }

    /// The same rule, bound to required mode.
    ///
    /// # Examples
    ///
    /// ```
    /// use paramshape::{params, types, Requirement};
    ///
    /// let name = types::string().is_required();
    /// assert_eq!(name.requirement(), Requirement::Required);
    /// assert!(name.check(&params! {}, "name").is_failure());
    /// ```
    pub fn is_required(&self) -> Validator {
        Validator {
            rule: Arc::clone(&self.rule),
            requirement: Requirement::Required,
        }
    }

    /// The mode [`Validator::check`] runs in.
    pub fn requirement(&self) -> Requirement {
        self.requirement
    }
}

impl fmt::Debug for Validator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Validator")
            .field("requirement", &self.requirement)
            .finish_non_exhaustive()
    }
}

/// Bind a two-mode rule into an optional-by-default [`Validator`].
pub fn chain<R>(rule: R) -> Validator
where
    R: Rule + 'static,
{
    Validator {
        rule: Arc::new(rule),
        requirement: Requirement::Optional,
    }
}
