//! Valuations and their elementary lemmas.
//!
//! A valuation v: K → Γ₀ satisfies four axioms:
//!
//! ```text
//! v(0) = 0        v(1) = 1
//! v(x·y) = v(x)·v(y)                      (multiplicative)
//! v(x+y) ≤ max(v(x), v(y))               (ultrametric)
//! ```
//!
//! The axioms are constructor preconditions on implementors, verified
//! by property tests over the concrete carriers — never re-checked per
//! call.

use crate::field::Field;
use valfield_order::ValueGroup;

/// A valuation bound to a field, measuring into an ordered value group.
///
/// Implementors are immutable pure functions: constructed once, never
/// mutated, possibly *extended* later to a new carrier (the completion).
pub trait Valuation {
    type Field: Field;
    type Value: ValueGroup;

    fn value(&self, x: &Self::Field) -> Self::Value;

    /// Whether x lies in the kernel of the valuation.
    ///
    /// For a separated valuation this holds exactly at x = 0.
    fn vanishes(&self, x: &Self::Field) -> bool {
        self.value(x).is_zero()
    }
}

/// The separation law at a point: v(x) ≠ 0 ⟺ x ≠ 0.
///
/// A valuation is *separated* when this holds everywhere. Used by the
/// property tests; the completion layer takes separation as a marker
/// on the valuation itself.
pub fn ne_zero_iff<V: Valuation>(v: &V, x: &V::Field) -> bool {
    v.value(x).is_unit() == !x.is_zero()
}

/// v(−x) = v(x).
///
/// (−1)² = 1 forces v(−1)² = 1, and 1 is the only square root of 1 in
/// a linearly ordered group, so v(−1) = 1 and negation is
/// value-preserving.
pub fn value_of_neg<V: Valuation>(v: &V, x: &V::Field) -> V::Value {
    v.value(&x.neg())
}

/// Equality of value under a dominated perturbation.
///
/// If v(x − y) < v(y) then v(x) = v(y): writing x = y + (x − y), the
/// ultrametric inequality caps v(x) at v(y), and were v(x) < v(y) the
/// same inequality applied to y = x − (x − y) would contradict itself.
/// In particular x ≠ 0 whenever the valuation is separated.
///
/// Returns the shared value; `None` when the hypothesis fails.
pub fn dominant_value<V: Valuation>(v: &V, x: &V::Field, y: &V::Field) -> Option<V::Value> {
    let vy = v.value(y);
    let diff = v.value(&x.sub(y));
    if diff < vy {
        debug_assert!(v.value(x) == vy);
        Some(vy)
    } else {
        None
    }
}
