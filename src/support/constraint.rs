//! Type-level numeric constraints.
//!
//! Physical inputs to the exchanger model (heat transfer coefficient,
//! perimeter, length, mass flow rates, molar masses) must be strictly
//! positive. Wrapping them in [`Constrained<T, StrictlyPositive>`] checks that
//! once at construction, so the solver never re-validates them.
//!
//! Additional invariants can be expressed by implementing [`Constraint<T>`]
//! for another zero-sized marker type.

mod strictly_positive;

use std::marker::PhantomData;

use thiserror::Error;

pub use strictly_positive::StrictlyPositive;

/// A numeric invariant enforced at construction time.
pub trait Constraint<T> {
    /// Checks that the given value satisfies this constraint.
    ///
    /// # Errors
    ///
    /// Returns a [`ConstraintError`] if the value does not satisfy the constraint.
    fn check(value: &T) -> Result<(), ConstraintError>;
}

/// An error returned when a [`Constraint`] is violated.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
#[non_exhaustive]
pub enum ConstraintError {
    #[error("value must not be negative")]
    Negative,
    #[error("value must not be zero")]
    Zero,
    #[error("value is not a number")]
    NotANumber,
}

/// A result type alias to use with [`Constraint`].
pub type ConstraintResult<T, E = ConstraintError> = Result<T, E>;

/// A value that is known to satisfy the constraint `C`.
///
/// # Example
///
/// ```
/// use twine_crossflow::support::constraint::{Constrained, StrictlyPositive};
/// use uom::si::{f64::Length, length::meter};
///
/// let length = Constrained::<_, StrictlyPositive>::new(Length::new::<meter>(1.0)).unwrap();
/// assert_eq!(length.into_inner().get::<meter>(), 1.0);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd)]
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

impl<T, C: Constraint<T>> AsRef<T> for Constrained<T, C> {
    fn as_ref(&self) -> &T {
        &self.value
    }
}
