//! The field capability surface.
//!
//! Deliberately minimal: a carrier only needs the four field operations
//! and a *total* inverse. The richness comes from the valuation laid on
//! top, not from the field itself.

use std::fmt;

/// A field with the total-inverse convention.
///
/// Laws (caller contract, property-tested for the shipped carriers):
/// the usual field axioms, plus `inv(0) = 0`. Division by zero is never
/// an error anywhere in this workspace — it is resolved by convention
/// here, once.
///
/// The `Send + Sync + 'static` bounds let field elements flow into the
/// lazily evaluated sequences of the completion layer.
pub trait Field: Clone + PartialEq + fmt::Debug + Send + Sync + 'static {
    fn zero() -> Self;

    fn one() -> Self;

    fn add(&self, rhs: &Self) -> Self;

    fn neg(&self) -> Self;

    fn mul(&self, rhs: &Self) -> Self;

    /// Multiplicative inverse, total: `inv(0) = 0`, and `inv(x)·x = 1`
    /// for nonzero `x`.
    fn inv(&self) -> Self;

    fn sub(&self, rhs: &Self) -> Self {
        self.add(&rhs.neg())
    }

    fn is_zero(&self) -> bool {
        *self == Self::zero()
    }
}
