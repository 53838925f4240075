//! The valuation extended to the completion.
//!
//! v̂ = extend(v): on a point with apartness witness (γ₀, from), the
//! dominated-perturbation lemma pins v to a single value on the whole
//! tail past max(from, modulus(γ₀)), and v̂ reads it off there. On a
//! point with no witness v̂ is zero — the case-split between "the
//! limit is zero" (density against the closed point {0}) and "the
//! limit is apart" (continuity at the point), made explicit.
//!
//! The zero-basis of v̂ is the closure of the embedded basis:
//! {p : v̂(p) < γ} is exactly the closure of ι({x : v(x) < γ}), and
//! [`ExtendedValuation::closure_witness`] produces the dense-subset
//! witnesses.

use crate::completable::Completable;
use crate::point::Point;
use valfield_order::ValueGroup;
use valfield_valuation::Valuation;

/// v̂: the valuation carried over K̂.
pub struct ExtendedValuation<V: Completable> {
    v: V,
}

impl<V: Completable + 'static> ExtendedValuation<V> {
    pub fn new(v: V) -> Self {
        Self { v }
    }

    pub fn inner(&self) -> &V {
        &self.v
    }

    /// v̂(p). Total: witnessed points read their stabilized tail
    /// value, unwitnessed points are zero (the documented fallback).
    ///
    /// On embedded points this agrees with v: ι(x) carries the witness
    /// (v(x), 0) when x ≠ 0, and the zero point takes the fallback.
    pub fn value(&self, p: &Point<V>) -> V::Value {
        match p.apartness() {
            None => V::Value::zero(),
            Some(apart) => {
                let n = apart.from.max(p.seq().modulus(&apart.bound));
                self.v.value(&p.seq().term(n))
            }
        }
    }

    /// Membership in the zero-basis ball {p : v̂(p) < γ}.
    /// γ must be a unit.
    pub fn in_ball(&self, p: &Point<V>, gamma: &V::Value) -> bool {
        self.value(p) < *gamma
    }

    /// A dense-subset witness for the closure reading of the ball.
    ///
    /// For p in {v̂ < γ} and any unit tolerance δ, produces x ∈ K with
    /// v(x) < γ and p within δ of ι(x) — the element of the embedded
    /// ball that closure membership promises. `None` when p is not in
    /// the ball (the candidate term itself refutes it).
    pub fn closure_witness(
        &self,
        p: &Point<V>,
        gamma: &V::Value,
        delta: &V::Value,
    ) -> Option<V::Field> {
        let mut n = p.seq().modulus(&gamma.min_with(delta));
        if let Some(apart) = p.apartness() {
            n = n.max(apart.from).max(p.seq().modulus(&apart.bound));
        }
        let x = p.seq().term(n);
        if self.v.value(&x) < *gamma { Some(x) } else { None }
    }
}
