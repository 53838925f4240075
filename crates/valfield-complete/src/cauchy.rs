//! Sequence-shaped Cauchy data.
//!
//! A Cauchy filter on K is represented by a lazily evaluated sequence
//! together with its modulus: for every unit tolerance γ the modulus
//! names an index past which the terms are pairwise within γ. The
//! modulus is the constructive content of "the filter contains
//! arbitrarily small sets" — no set is ever materialized.

use std::sync::Arc;
use valfield_valuation::Valuation;

/// A sequence in K with an explicit Cauchy modulus.
///
/// Contract (caller-supplied, never re-checked per call): for every
/// unit γ and all `m, n ≥ modulus(γ)`,
///
/// ```text
/// v(terms(m) − terms(n)) < γ
/// ```
///
/// Querying the modulus at zero is a contract violation: no tail is
/// pairwise within the empty ball.
pub struct CauchyApprox<V: Valuation> {
    terms: Arc<dyn Fn(usize) -> V::Field + Send + Sync>,
    modulus: Arc<dyn Fn(&V::Value) -> usize + Send + Sync>,
}

impl<V: Valuation> Clone for CauchyApprox<V> {
    fn clone(&self) -> Self {
        Self {
            terms: Arc::clone(&self.terms),
            modulus: Arc::clone(&self.modulus),
        }
    }
}

impl<V: Valuation> std::fmt::Debug for CauchyApprox<V> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("CauchyApprox").finish_non_exhaustive()
    }
}

impl<V: Valuation + 'static> CauchyApprox<V> {
    pub fn new(
        terms: impl Fn(usize) -> V::Field + Send + Sync + 'static,
        modulus: impl Fn(&V::Value) -> usize + Send + Sync + 'static,
    ) -> Self {
        Self {
            terms: Arc::new(terms),
            modulus: Arc::new(modulus),
        }
    }

    /// The constant sequence at x — the image of x under the dense
    /// embedding, before it is wrapped into a completion point.
    pub fn constant(x: V::Field) -> Self {
        Self::new(move |_| x.clone(), |_| 0)
    }

    pub fn term(&self, n: usize) -> V::Field {
        (self.terms)(n)
    }

    pub fn modulus(&self, gamma: &V::Value) -> usize {
        (self.modulus)(gamma)
    }

    /// The sequence frozen before `start`: term n becomes
    /// term max(n, start). Same limit, and every tail statement from
    /// `start` onward holds from index zero.
    pub fn tail(&self, start: usize) -> Self {
        let terms = self.clone();
        let modulus = self.clone();
        Self::new(
            move |n| terms.term(n.max(start)),
            move |g: &V::Value| modulus.modulus(g).max(start),
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use valfield_order::Level;
    use valfield_valuation::{Field, PAdic, Rational, Valuation};

    #[test]
    fn constant_sequence() {
        let c = CauchyApprox::<PAdic>::constant(Rational::from_int(7));
        assert_eq!(c.term(0), Rational::from_int(7));
        assert_eq!(c.term(99), Rational::from_int(7));
        assert_eq!(c.modulus(&Level::Exp(40)), 0);
    }

    #[test]
    fn tail_shifts_terms_and_modulus() {
        let s = CauchyApprox::<PAdic>::new(
            |n| Rational::from_int(n as i128),
            |g: &Level| g.exponent().map(|e| (e + 1).max(0) as usize).unwrap_or(0),
        );
        let t = s.tail(5);
        assert_eq!(t.term(0), Rational::from_int(5));
        assert_eq!(t.term(7), Rational::from_int(7));
        assert_eq!(t.modulus(&Level::Exp(1)), 5);
        assert_eq!(t.modulus(&Level::Exp(9)), 10);
    }

    #[test]
    fn partial_sums_are_cauchy_for_their_modulus() {
        // s_n = 2ⁿ − 1, the partial sums of Σ 2ⁱ.
        let v = PAdic::new(2).unwrap();
        let s = CauchyApprox::<PAdic>::new(
            |n| Rational::from_int((1i128 << n.min(100)) - 1),
            |g: &Level| g.exponent().map(|e| (e + 1).max(0) as usize).unwrap_or(0),
        );
        for e in 0..10 {
            let gamma = Level::Exp(e);
            let n0 = s.modulus(&gamma);
            for m in n0..n0 + 4 {
                for n in n0..n0 + 4 {
                    let d = s.term(m).sub(&s.term(n));
                    assert!(v.value(&d) < gamma, "m={m} n={n} γ=ε^{e}");
                }
            }
        }
    }
}
