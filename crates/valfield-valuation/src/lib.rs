//! # Valfield Valuation
//!
//! Valued fields: a field K together with a multiplicative, ultrametric
//! map v: K → Γ₀ into a linearly ordered value group with zero.
//!
//! ## Architecture
//!
//! ```text
//! ValueGroup (Γ₀)        ← valfield-order
//!     │
//! Field / Valuation      ← the four valuation axioms, lemma operations
//!     │
//! NhdsZeroBasis          ← lazy filter base { Bγ = {x : v(x) < γ} }
//!     │
//! inversion_estimate     ← v(x−y) < min(γ·v(y)², v(y)) ⟹ v(x⁻¹−y⁻¹) < γ
//! ```
//!
//! The inversion estimate is the load-bearing primitive: it bounds the
//! discontinuity of x ↦ x⁻¹ near any nonzero point and everything the
//! completion layer does with inverses rests on it.
//!
//! Axiom violations are caller contract violations, not runtime errors:
//! the traits document their laws and the property tests enforce them
//! for the shipped carriers.

pub mod basis;
pub mod estimate;
pub mod field;
pub mod padic;
pub mod rational;
pub mod valuation;
pub mod witness;

pub use basis::{Ball, NhdsZeroBasis};
pub use estimate::{EstimateError, InversionBound, inversion_estimate};
pub use field::Field;
pub use padic::PAdic;
pub use rational::Rational;
pub use valuation::{Valuation, dominant_value, ne_zero_iff, value_of_neg};
pub use witness::ContractViolation;
