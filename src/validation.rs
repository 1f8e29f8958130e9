//! Error-accumulating validation results
//!
//! `Validation` is like `Result`, except that combining failures keeps all of
//! their errors instead of stopping at the first. The aggregator builds one
//! `Validation` per model field and folds them together, so a failing check
//! reports every bad field at once.
//!
//! # Examples
//!
//! ```
//! use paramshape::Validation;
//!
//! let result = Validation::all_iter(vec![
//!     Validation::<i32, _>::failure(vec!["error1"]),
//!     Validation::failure(vec!["error2"]),
//! ]);
//! assert_eq!(result, Validation::Failure(vec!["error1", "error2"]));
//! ```

use crate::Semigroup;

/// A validation that either succeeds with a value or fails with accumulated
/// errors.
///
/// # Examples
///
/// ```
/// use paramshape::{model, params, types, check, Validation};
///
/// let model = model! { "n" => types::number().is_required() };
/// let result = check(&model, &params! { "n" => 1 });
/// assert_eq!(result, Validation::Success(()));
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Validation<T, E> {
    /// Successful validation with a value
    Success(T),
    /// Failed validation with accumulated errors
    Failure(E),
}

impl<T, E> Validation<T, E> {
    /// Create a successful validation
    #[inline]
    pub fn success(value: T) -> Self {
        Validation::Success(value)
    }

    /// Create a failed validation
    #[inline]
    pub fn failure(error: E) -> Self {
        Validation::Failure(error)
    }

    /// Check if this validation is successful
    #[inline]
    pub fn is_success(&self) -> bool {
        matches!(self, Validation::Success(_))
    }

    /// Check if this validation failed
    #[inline]
    pub fn is_failure(&self) -> bool {
        matches!(self, Validation::Failure(_))
    }

    /// Transform the success value if present
    #[inline]
    pub fn map<U, F>(self, f: F) -> Validation<U, E>
    where
        F: FnOnce(T) -> U,
    {
        match self {
            Validation::Success(value) => Validation::Success(f(value)),
            Validation::Failure(error) => Validation::Failure(error),
        }
    }
}

impl<T, E: Semigroup> Validation<T, E> {
    /// Combine every validation yielded by an iterator
    ///
    /// Succeeds with all success values when nothing failed; otherwise fails
    /// with every error combined in order.
    ///
    /// # Examples
    ///
    /// ```
    /// use paramshape::Validation;
    ///
    /// let result = Validation::all_iter(vec![
    ///     Validation::<i32, _>::failure(vec!["a"]),
    ///     Validation::success(2),
    ///     Validation::failure(vec!["b"]),
    /// ]);
    /// assert_eq!(result, Validation::Failure(vec!["a", "b"]));
    /// ```
    pub fn all_iter<I>(validations: I) -> Validation<Vec<T>, E>
    where
        I: IntoIterator<Item = Validation<T, E>>,
    {
        validations
            .into_iter()
            .fold(Validation::Success(Vec::new()), |acc, next| match (acc, next) {
                (Validation::Success(mut values), Validation::Success(value)) => {
                    values.push(value);
                    Validation::Success(values)
                }
                (Validation::Success(_), Validation::Failure(error)) => Validation::Failure(error),
                (Validation::Failure(error), Validation::Success(_)) => Validation::Failure(error),
                (Validation::Failure(acc), Validation::Failure(error)) => {
                    Validation::Failure(acc.combine(error))
                }
            })
    }
}
