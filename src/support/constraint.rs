//! Type-level numeric constraints with zero runtime cost.
//!
//! Marker types express constraints like "strictly positive" or "within the
//! upper-open unit interval" at the type level. A value is checked once,
//! when a [`Constrained<T, C>`] is constructed, and carries no overhead
//! after that. The models can then stay total: by the time a constrained
//! value exists, it is inside the formula's domain.
//!
//! # Provided constraints
//!
//! - [`NonNegative`]: zero or greater (wind speeds)
//! - [`StrictlyPositive`]: greater than zero (geometry, densities, rates)
//! - [`UnitIntervalUpperOpen`]: `0 ≤ x < 1` (thrust coefficient)
//!
//! Each marker is used with the generic [`Constrained<T, C>`] wrapper and
//! also provides an associated `new()` constructor (e.g.,
//! `StrictlyPositive::new(8.0)`).
//!
//! # Extending
//!
//! Custom numeric invariants are defined by implementing [`Constraint<T>`]
//! for a zero-sized marker type; the yaw misalignment model does this for
//! its bounded error angle.

mod non_negative;
mod strictly_positive;
mod unit_interval;

use std::marker::PhantomData;

use thiserror::Error;

pub use non_negative::NonNegative;
pub use strictly_positive::StrictlyPositive;
pub use unit_interval::{UnitBounds, UnitIntervalUpperOpen};

/// A trait for enforcing numeric invariants at construction time.
///
/// Implement this trait for any marker type representing a numeric
/// constraint, such as [`NonNegative`] or [`StrictlyPositive`].
pub trait Constraint<T> {
    /// Checks that the given value satisfies this constraint.
    ///
    /// # Errors
    ///
    /// Returns a [`ConstraintError`] if the value does not satisfy the
    /// constraint.
    fn check(value: &T) -> Result<(), ConstraintError>;
}

/// An error returned when a [`Constraint`] is violated.
///
/// This enum is marked `#[non_exhaustive]` and may include additional
/// variants in future releases.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
#[non_exhaustive]
pub enum ConstraintError {
    #[error("value must not be negative")]
    Negative,
    #[error("value must not be zero")]
    Zero,
    #[error("value is not a number")]
    NotANumber,
    #[error("value is below the minimum allowed")]
    BelowMinimum,
    #[error("value is above the maximum allowed")]
    AboveMaximum,
}

/// A result type alias to use with [`Constraint`].
pub type ConstraintResult<T, E = ConstraintError> = Result<T, E>;

/// A wrapper enforcing a numeric constraint at construction time.
///
/// Combine this with one of the provided marker types (such as
/// [`NonNegative`]) or your own [`Constraint<T>`] implementation.
///
/// # Example
///
/// ```
/// use turbine_models::support::constraint::{Constrained, StrictlyPositive};
///
/// let tip_speed_ratio = Constrained::<_, StrictlyPositive>::new(8.0).unwrap();
/// assert_eq!(tip_speed_ratio.into_inner(), 8.0);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub struct Constrained<T, C: Constraint<T>> {
    value: T,
    _marker: PhantomData<C>,
}

impl<T, C: Constraint<T>> Constrained<T, C> {
    /// Constructs a new constrained value.
    ///
    /// # Errors
    ///
    /// Returns an error if the value does not satisfy the constraint.
    pub fn new(value: T) -> Result<Self, ConstraintError> {
        C::check(&value)?;
        Ok(Self {
            value,
            _marker: PhantomData,
        })
    }

    /// Consumes the wrapper and returns the inner value.
    pub fn into_inner(self) -> T {
        self.value
    }
}

/// Returns a reference to the inner unconstrained value.
impl<T, C: Constraint<T>> AsRef<T> for Constrained<T, C> {
    fn as_ref(&self) -> &T {
        &self.value
    }
}
