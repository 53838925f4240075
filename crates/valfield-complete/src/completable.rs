//! Completability: when inversion preserves Cauchy data.
//!
//! A separated valued field completes to a field exactly because Cauchy
//! data bounded away from zero stays Cauchy under x ↦ x⁻¹. Both halves
//! of that sentence are explicit here:
//!
//! - separatedness is the [`Completable`] marker on the valuation;
//! - "bounded away from zero" is an [`Apartness`] witness;
//! - "stays Cauchy" is [`inversion_modulus`], which names the index
//!   past which the inverted tail is pairwise within any tolerance.

use crate::cauchy::CauchyApprox;
use serde::{Deserialize, Serialize};
use valfield_order::ValueGroup;
use valfield_valuation::{PAdic, Valuation};

/// Marker for separated valuations: v(x) = 0 ⟺ x = 0.
///
/// A documented, unchecked precondition verified by property tests.
/// Non-separated valuations are simply never `Completable` and no
/// completion construction is offered for them — this is a missing
/// hypothesis, not a runtime error.
pub trait Completable: Valuation {}

impl Completable for PAdic {}

/// Witness that a sequence is bounded away from zero.
///
/// Claims v(terms(n)) ≥ bound for every n ≥ from, with `bound` a unit.
/// The full tail claim is a caller contract; constructions spot-check
/// what they can and property tests do the rest.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Apartness<G> {
    pub bound: G,
    pub from: usize,
}

/// The completability witness: an index M such that the *inverted*
/// tail is pairwise within γ.
///
/// For m, n ≥ M the inversion estimate applies at scale
/// min(γ·γ₀², γ₀) with γ₀ the apartness bound, giving
/// v(terms(m)⁻¹ − terms(n)⁻¹) < γ. Preconditions: γ a unit, and the
/// apartness witness honest.
pub fn inversion_modulus<V: Valuation + 'static>(
    seq: &CauchyApprox<V>,
    apart: &Apartness<V::Value>,
    gamma: &V::Value,
) -> usize {
    let scale = gamma.mul(&apart.bound.squared()).min_with(&apart.bound);
    apart.from.max(seq.modulus(&scale))
}

/// Search a finite prefix for an apartness witness.
///
/// If some index n has a unit value γ₀ = v(terms(n)) with
/// modulus(γ₀) ≤ n, every later term is within γ₀ of terms(n) and the
/// dominated-perturbation lemma pins its value to γ₀ exactly — so γ₀
/// bounds the whole tail from n.
///
/// `None` means no witness surfaced by `depth`: the point is either a
/// zero limit or simply deeper than the probe. Callers treat such
/// points as zero (the documented fallback) or supply their own
/// oracle.
pub fn observe_apartness<V: Valuation + 'static>(
    v: &V,
    seq: &CauchyApprox<V>,
    depth: usize,
) -> Option<Apartness<V::Value>> {
    for n in 0..=depth {
        let g = v.value(&seq.term(n));
        if g.is_unit() && seq.modulus(&g) <= n {
            return Some(Apartness { bound: g, from: n });
        }
    }
    None
}
