//! The completion field K̂.
//!
//! Field structure on completion points: the dense embedding ι, the
//! pointwise ring operations with composed moduli, and the total
//! inverse with inv(0) = 0.
//!
//! Inversion is the one delicate operation. It is not continuous at
//! zero, so it extends only over an apart tail: given an apartness
//! bound γ₀, the inversion estimate makes x ↦ x⁻¹ uniformly continuous
//! there with transport γ ↦ min(γ·γ₀², γ₀), and
//! [`extend_by_density`] does the rest. Points without a witness take
//! the inv(0) = 0 branch.

use crate::cauchy::CauchyApprox;
use crate::completable::{Apartness, Completable};
use crate::error::CompletionError;
use crate::extend::{UniformMap, extend_by_density};
use crate::point::Point;
use valfield_order::ValueGroup;
use valfield_valuation::{Field, Valuation};

/// The completion K̂ of a separated valued field.
///
/// A fixed, total pipeline: every operation either succeeds or was
/// never offered. The only `Result` in sight guards caller-supplied
/// apartness claims.
pub struct CompletionField<V: Completable> {
    v: V,
}

impl<V: Completable + 'static> CompletionField<V> {
    pub fn new(v: V) -> Self {
        Self { v }
    }

    pub fn valuation(&self) -> &V {
        &self.v
    }

    /// The dense embedding ι: K → K̂.
    ///
    /// Embedded nonzero elements carry their exact apartness witness:
    /// a constant sequence is apart at its own value from index 0.
    pub fn embed(&self, x: &V::Field) -> Point<V> {
        let value = self.v.value(x);
        let apartness = if value.is_unit() {
            Some(Apartness {
                bound: value,
                from: 0,
            })
        } else {
            None
        };
        Point::raw(CauchyApprox::constant(x.clone()), apartness)
    }

    pub fn zero(&self) -> Point<V> {
        self.embed(&V::Field::zero())
    }

    pub fn one(&self) -> Point<V> {
        self.embed(&V::Field::one())
    }

    /// Pointwise sum. The ultrametric makes the joint modulus just the
    /// max of the two; no apartness survives in general (the limits
    /// may cancel), so the sum carries none — recover it with
    /// [`observe_apartness`](crate::completable::observe_apartness)
    /// or [`attach_apartness`](Self::attach_apartness).
    pub fn add(&self, a: &Point<V>, b: &Point<V>) -> Point<V> {
        let (ta, tb) = (a.seq().clone(), b.seq().clone());
        let (ma, mb) = (a.seq().clone(), b.seq().clone());
        Point::raw(
            CauchyApprox::new(
                move |n| ta.term(n).add(&tb.term(n)),
                move |g: &V::Value| ma.modulus(g).max(mb.modulus(g)),
            ),
            None,
        )
    }

    /// Pointwise negation. Negation is an isometry, so both the
    /// modulus and the apartness witness carry over unchanged.
    pub fn neg(&self, a: &Point<V>) -> Point<V> {
        let ta = a.seq().clone();
        let ma = a.seq().clone();
        Point::raw(
            CauchyApprox::new(
                move |n| ta.term(n).neg(),
                move |g: &V::Value| ma.modulus(g),
            ),
            a.apartness().cloned(),
        )
    }

    pub fn sub(&self, a: &Point<V>, b: &Point<V>) -> Point<V> {
        self.add(a, &self.neg(b))
    }

    /// Pointwise product.
    ///
    /// The modulus needs tail value bounds: past N₁ = modulus(1) every
    /// term's value is capped by B = max(v(term(N₁)), 1), so a target
    /// tolerance γ asks each factor for γ·B⁻¹ against the other's
    /// bound. Apartness multiplies when both factors carry it.
    pub fn mul(&self, a: &Point<V>, b: &Point<V>) -> Point<V> {
        let one = V::Value::one();
        let na = a.seq().modulus(&one);
        let nb = b.seq().modulus(&one);
        let bound_a = self.v.value(&a.seq().term(na)).max_with(&one);
        let bound_b = self.v.value(&b.seq().term(nb)).max_with(&one);
        let inv_a = bound_a.inv().expect("max with one is a unit");
        let inv_b = bound_b.inv().expect("max with one is a unit");

        let (ta, tb) = (a.seq().clone(), b.seq().clone());
        let (ma, mb) = (a.seq().clone(), b.seq().clone());
        let seq = CauchyApprox::new(
            move |n| ta.term(n).mul(&tb.term(n)),
            move |g: &V::Value| {
                let tol_a = g.mul(&inv_b);
                let tol_b = g.mul(&inv_a);
                ma.modulus(&tol_a).max(mb.modulus(&tol_b)).max(na).max(nb)
            },
        );

        let apartness = match (a.apartness(), b.apartness()) {
            (Some(x), Some(y)) => Some(Apartness {
                bound: x.bound.mul(&y.bound),
                from: x.from.max(y.from),
            }),
            _ => None,
        };
        Point::raw(seq, apartness)
    }

    /// The total inverse on K̂.
    ///
    /// Without an apartness witness the point is treated as zero and
    /// inv(0) = 0 (the conventional branch). With one, the inversion
    /// estimate extends x ↦ x⁻¹ by density over the apart tail, and
    /// the tail value bound hands the inverse its own apartness:
    /// v(x⁻¹) ≥ B⁻¹.
    ///
    /// Invariant (tested, not checked): inv(p)·p = 1 within every unit
    /// tolerance whenever p carries a witness.
    pub fn inv(&self, a: &Point<V>) -> Point<V> {
        let Some(apart) = a.apartness().cloned() else {
            return self.zero();
        };

        let start = apart.from.max(a.seq().modulus(&apart.bound));
        let tail = a.seq().tail(start);

        let g0 = apart.bound.clone();
        let g0_sq = g0.squared();
        let map = UniformMap::<V, V>::new(
            |x: &V::Field| x.inv(),
            move |gamma: &V::Value| gamma.mul(&g0_sq).min_with(&g0),
        );
        let seq = extend_by_density(&map, &tail);

        let one = V::Value::one();
        let n1 = a.seq().modulus(&one);
        let cap = self
            .v
            .value(&a.seq().term(n1.max(start)))
            .max_with(&one);
        let bound = cap.inv().expect("max with one is a unit");
        Point::raw(
            seq,
            Some(Apartness {
                bound,
                from: n1,
            }),
        )
    }

    /// Equality at a tolerance: v(a − b) < γ, read off the difference
    /// at its own modulus. This is the computable reading of equality
    /// in K̂; exact equality of arbitrary points is not decidable in
    /// the sequence model and is deliberately not offered.
    pub fn eq_within(&self, a: &Point<V>, b: &Point<V>, gamma: &V::Value) -> bool {
        let d = self.sub(a, b);
        let n = d.seq().modulus(gamma);
        self.v.value(&d.seq().term(n)) < *gamma
    }

    /// Adopt a caller-supplied apartness oracle after spot-checking it
    /// at its starting index. The full tail claim remains the caller's
    /// contract.
    pub fn attach_apartness(
        &self,
        p: &Point<V>,
        apart: Apartness<V::Value>,
    ) -> Result<Point<V>, CompletionError<V::Value>> {
        if !apart.bound.is_unit() {
            return Err(CompletionError::ZeroApartnessBound);
        }
        let found = self.v.value(&p.seq().term(apart.from));
        if found < apart.bound {
            return Err(CompletionError::ApartnessRefuted {
                index: apart.from,
                found,
                bound: apart.bound,
            });
        }
        Ok(Point::raw(p.seq().clone(), Some(apart)))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use valfield_order::Level;
    use valfield_valuation::{PAdic, Rational};

    fn q(num: i128, den: i128) -> Rational {
        Rational::new(num, den).unwrap()
    }

    fn khat() -> CompletionField<PAdic> {
        CompletionField::new(PAdic::new(2).unwrap())
    }

    fn tolerances() -> impl Iterator<Item = Level> {
        (0..12).map(Level::Exp)
    }

    #[test]
    fn embedded_ring_ops_agree_with_rationals() {
        let k = khat();
        let a = k.embed(&q(1, 2));
        let b = k.embed(&q(1, 3));
        for g in tolerances() {
            assert!(k.eq_within(&k.add(&a, &b), &k.embed(&q(5, 6)), &g));
            assert!(k.eq_within(&k.mul(&a, &b), &k.embed(&q(1, 6)), &g));
            assert!(k.eq_within(&k.sub(&a, &a), &k.zero(), &g));
        }
    }

    #[test]
    fn embedded_inverse_round_trip() {
        let k = khat();
        let third = k.embed(&q(1, 3));
        let inv = k.inv(&third);
        for g in tolerances() {
            assert!(k.eq_within(&inv, &k.embed(&q(3, 1)), &g));
            assert!(k.eq_within(&k.mul(&inv, &third), &k.one(), &g));
        }
    }

    #[test]
    fn inverse_of_zero_is_zero() {
        let k = khat();
        let z = k.inv(&k.zero());
        assert!(z.apartness().is_none());
        for g in tolerances() {
            assert!(k.eq_within(&z, &k.zero(), &g));
        }
    }

    #[test]
    fn embedding_carries_exact_apartness() {
        let k = khat();
        let p = k.embed(&q(12, 1));
        let apart = p.apartness().unwrap();
        assert_eq!(apart.bound, Level::Exp(2));
        assert_eq!(apart.from, 0);
        assert!(k.zero().apartness().is_none());
    }

    #[test]
    fn mul_multiplies_apartness() {
        let k = khat();
        let p = k.mul(&k.embed(&q(2, 1)), &k.embed(&q(4, 3)));
        assert_eq!(p.apartness().unwrap().bound, Level::Exp(3));
    }

    #[test]
    fn attach_apartness_spot_checks() {
        let k = khat();
        let p = Point::new(CauchyApprox::constant(q(8, 1)));

        let ok = k.attach_apartness(
            &p,
            Apartness {
                bound: Level::Exp(3),
                from: 0,
            },
        );
        assert!(ok.is_ok());

        let refuted = k.attach_apartness(
            &p,
            Apartness {
                bound: Level::Exp(1),
                from: 0,
            },
        );
        assert_eq!(
            refuted.unwrap_err(),
            CompletionError::ApartnessRefuted {
                index: 0,
                found: Level::Exp(3),
                bound: Level::Exp(1),
            }
        );

        let zero_bound = k.attach_apartness(
            &p,
            Apartness {
                bound: Level::Zero,
                from: 0,
            },
        );
        assert_eq!(zero_bound.unwrap_err(), CompletionError::ZeroApartnessBound);
    }

    /// Continuity of inversion away from zero: points sharing an
    /// apartness bound γ₀ that agree within min(γ·γ₀², γ₀) have
    /// inverses agreeing within γ.
    #[test]
    fn inversion_is_continuous_away_from_zero() {
        let k = khat();
        let g0 = Level::Exp(0);
        for (xn, xd, yn, yd) in [(3, 1, 3, 1), (1, 3, 3, 1), (5, 1, 1, 5), (7, 3, 5, 9)] {
            let a = k.embed(&q(xn, xd));
            let b = k.embed(&q(yn, yd));
            for g in tolerances() {
                let scale = g.mul(&g0.squared()).min_with(&g0);
                if k.eq_within(&a, &b, &scale) {
                    assert!(k.eq_within(&k.inv(&a), &k.inv(&b), &g));
                }
            }
        }
    }
}
