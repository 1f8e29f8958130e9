//! Validator factories
//!
//! Each factory writes its rule once against a [`Requirement`](crate::Requirement)
//! and hands it to [`chain`](crate::chain), so every validator it builds works
//! in optional and required mode alike.
//!
//! - [`create_validator`]: a primitive check of one present value
//! - [`shape`]: a nested object checked against a sub-model
//! - [`array_of`]: every element of an array checked by one validator
//! - [`one_of`]: membership in a fixed set of values

mod array_of;
mod one_of;
mod primitive;
mod shape;

pub use array_of::array_of;
pub use one_of::{one_of, one_of_values};
pub use primitive::create_validator;
pub use shape::shape;
