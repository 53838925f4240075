//! The zero-neighborhood basis derived from a valuation.
//!
//! The family { Bγ = {x : v(x) < γ} } over unit γ is a filter base at
//! zero: every ball contains 0, and Bγ ∩ Bδ ⊇ B_min(γ,δ). It generates
//! the valuation uniformity on K and, through it, the topology of the
//! completion.
//!
//! The family is derived lazily and never materialized: a ball is a
//! predicate closing over the valuation.

use crate::valuation::Valuation;
use valfield_order::ValueGroup;

/// The lazy family of zero-neighborhood balls of a valuation.
pub struct NhdsZeroBasis<'a, V: Valuation> {
    v: &'a V,
}

impl<'a, V: Valuation> NhdsZeroBasis<'a, V> {
    pub fn new(v: &'a V) -> Self {
        Self { v }
    }

    /// The ball Bγ = {x : v(x) < γ}.
    ///
    /// `None` unless the radius is a unit: B₀ is empty and not a
    /// neighborhood of anything.
    pub fn ball(&self, radius: V::Value) -> Option<Ball<'a, V>> {
        if radius.is_unit() {
            Some(Ball { v: self.v, radius })
        } else {
            None
        }
    }
}

/// One member Bγ of the zero-neighborhood basis.
pub struct Ball<'a, V: Valuation> {
    v: &'a V,
    radius: V::Value,
}

impl<'a, V: Valuation> Ball<'a, V> {
    pub fn radius(&self) -> &V::Value {
        &self.radius
    }

    pub fn contains(&self, x: &V::Field) -> bool {
        self.v.value(x) < self.radius
    }

    /// A basis member inside the intersection: B_min(γ,δ) ⊆ Bγ ∩ Bδ.
    ///
    /// In an ultrametric the inclusion is an equality, which is what
    /// makes the family a filter base without any materialization.
    pub fn meet(&self, other: &Ball<'a, V>) -> Ball<'a, V> {
        Ball {
            v: self.v,
            radius: self.radius.min_with(&other.radius),
        }
    }
}
