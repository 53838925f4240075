//! The value-group capability surface.
//!
//! A valuation measures field elements in a linearly ordered group with
//! zero. Rather than one monolithic algebra hierarchy, the requirements
//! are collected into a single per-capability trait with provided
//! helpers, composed downstream via generic bounds.

use std::fmt;

/// A linearly ordered commutative group with zero (Γ₀).
///
/// Laws (documented preconditions on implementors, verified by property
/// tests rather than checked at runtime):
///
/// - `Ord` is a total order with [`zero`](ValueGroup::zero) least;
/// - `mul` is commutative and associative with identity
///   [`one`](ValueGroup::one);
/// - zero is absorbing: `0·x = 0`;
/// - every nonzero element is a unit: `inv` returns `Some` exactly off
///   zero, and `x·x⁻¹ = 1`;
/// - multiplication is strictly monotone on units:
///   `a < b ⟹ a·c < b·c` whenever `c` is a unit.
pub trait ValueGroup: Clone + Eq + Ord + fmt::Debug + Send + Sync + 'static {
    /// The absorbing least element.
    fn zero() -> Self;

    /// The multiplicative identity.
    fn one() -> Self;

    /// Commutative multiplication.
    fn mul(&self, rhs: &Self) -> Self;

    /// Inverse of a unit. `None` exactly on zero.
    fn inv(&self) -> Option<Self>;

    fn is_zero(&self) -> bool {
        *self == Self::zero()
    }

    /// Nonzero elements of Γ₀ are the units Γ₀ˣ.
    fn is_unit(&self) -> bool {
        !self.is_zero()
    }

    fn squared(&self) -> Self {
        self.mul(self)
    }

    /// The smaller of two magnitudes.
    fn min_with(&self, rhs: &Self) -> Self {
        if self <= rhs {
            self.clone()
        } else {
            rhs.clone()
        }
    }

    /// The larger of two magnitudes.
    fn max_with(&self, rhs: &Self) -> Self {
        if self >= rhs {
            self.clone()
        } else {
            rhs.clone()
        }
    }
}
