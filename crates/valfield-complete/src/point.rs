//! Points of the completion.
//!
//! A point of K̂ is Cauchy data plus, optionally, an apartness witness
//! recording that the limit is bounded away from zero. The witness is
//! what makes the total inverse and the extended valuation computable;
//! points without one are treated as zero by every fallback branch,
//! and [`observe_apartness`](crate::completable::observe_apartness)
//! or a caller-supplied oracle can upgrade them.

use crate::cauchy::CauchyApprox;
use crate::completable::Apartness;
use valfield_valuation::Valuation;

/// A point of the completion K̂.
pub struct Point<V: Valuation> {
    seq: CauchyApprox<V>,
    apartness: Option<Apartness<V::Value>>,
}

impl<V: Valuation> Clone for Point<V> {
    fn clone(&self) -> Self {
        Self {
            seq: self.seq.clone(),
            apartness: self.apartness.clone(),
        }
    }
}

impl<V: Valuation> std::fmt::Debug for Point<V> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Point")
            .field("apartness", &self.apartness)
            .finish_non_exhaustive()
    }
}

impl<V: Valuation + 'static> Point<V> {
    /// Wrap Cauchy data with no apartness claim.
    pub fn new(seq: CauchyApprox<V>) -> Self {
        Self {
            seq,
            apartness: None,
        }
    }

    pub(crate) fn raw(seq: CauchyApprox<V>, apartness: Option<Apartness<V::Value>>) -> Self {
        Self { seq, apartness }
    }

    pub fn seq(&self) -> &CauchyApprox<V> {
        &self.seq
    }

    pub fn apartness(&self) -> Option<&Apartness<V::Value>> {
        self.apartness.as_ref()
    }

    /// A representative of the point at the given tolerance: a field
    /// element the whole remaining tail stays within γ of.
    pub fn at(&self, gamma: &V::Value) -> V::Field {
        self.seq.term(self.seq.modulus(gamma))
    }
}
