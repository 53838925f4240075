//! Extension by density.
//!
//! A uniformly continuous map out of K extends to K̂ by mapping Cauchy
//! data through it and transporting tolerances backwards. Packaged
//! once, parameterized over both valued carriers; the completion
//! field's inverse is this utility applied to x ↦ x⁻¹ on an apart
//! tail.

use crate::cauchy::CauchyApprox;
use std::sync::Arc;
use valfield_valuation::Valuation;

/// A uniformly continuous map between valued carriers, with its
/// modulus of continuity made explicit.
///
/// Contract: whenever v(x − y) < transport(γ), w(map(x) − map(y)) < γ,
/// for x, y in the region the map is used on (uniform continuity may
/// hold only on a subset, e.g. inversion on {v ≥ γ₀}; it is the
/// caller's contract that the sequences fed through stay inside it).
pub struct UniformMap<V: Valuation, W: Valuation> {
    map: Arc<dyn Fn(&V::Field) -> W::Field + Send + Sync>,
    transport: Arc<dyn Fn(&W::Value) -> V::Value + Send + Sync>,
}

impl<V: Valuation, W: Valuation> UniformMap<V, W> {
    pub fn new(
        map: impl Fn(&V::Field) -> W::Field + Send + Sync + 'static,
        transport: impl Fn(&W::Value) -> V::Value + Send + Sync + 'static,
    ) -> Self {
        Self {
            map: Arc::new(map),
            transport: Arc::new(transport),
        }
    }

    pub fn apply(&self, x: &V::Field) -> W::Field {
        (self.map)(x)
    }

    /// Pull a target tolerance back to a source tolerance.
    pub fn transport(&self, gamma: &W::Value) -> V::Value {
        (self.transport)(gamma)
    }
}

/// Extend a uniformly continuous map over Cauchy data: terms map
/// forward, the modulus composes with the transported tolerance.
pub fn extend_by_density<V: Valuation + 'static, W: Valuation + 'static>(
    f: &UniformMap<V, W>,
    seq: &CauchyApprox<V>,
) -> CauchyApprox<W> {
    let map = Arc::clone(&f.map);
    let terms = seq.clone();
    let transport = Arc::clone(&f.transport);
    let modulus = seq.clone();
    CauchyApprox::new(
        move |n| map(&terms.term(n)),
        move |gamma: &W::Value| modulus.modulus(&transport(gamma)),
    )
}
