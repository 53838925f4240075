//! The inversion estimate.
//!
//! The epsilon-delta heart of the engine: inversion is not uniformly
//! continuous on K \ {0}, but near any nonzero y its discontinuity is
//! bounded exactly. For a unit tolerance γ,
//!
//! ```text
//! v(x − y) < min(γ·v(y)², v(y))   ⟹   v(x⁻¹ − y⁻¹) < γ
//! ```
//!
//! and in fact v(x⁻¹ − y⁻¹) = v(x − y)·(v(y)²)⁻¹ on the nose. Every
//! downstream use of inverses — Cauchy stability under inversion, the
//! total inverse on the completion, continuity of inversion away from
//! zero — routes through this one lemma.
//!
//! All comparisons are exact order comparisons in Γ₀; nothing rounds.

use crate::field::Field;
use crate::valuation::{Valuation, dominant_value, value_of_neg};
use crate::witness::{ContractViolation, law};
use valfield_order::ValueGroup;

/// Proof-carrying conclusion of the inversion estimate.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InversionBound<G> {
    /// v(x⁻¹ − y⁻¹), computed exactly as v(x−y)·(v(y)²)⁻¹.
    pub exact: G,

    /// The requested tolerance; `exact` is strictly below it.
    pub below: G,
}

/// A violated precondition of [`inversion_estimate`].
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum EstimateError<G: std::fmt::Debug> {
    /// γ must be a unit of Γ₀.
    #[error("tolerance must be a unit of the value group")]
    ZeroTolerance,

    /// y must have nonzero value (y ≠ 0 in a separated field).
    #[error("estimate centered at a point of value zero")]
    ZeroCenter,

    /// v(x − y) must lie strictly below min(γ·v(y)², v(y)).
    #[error("perturbation too large: v(x − y) = {got:?}, needs to be below {needed:?}")]
    PerturbationTooLarge { got: G, needed: G },
}

impl<G: std::fmt::Debug> EstimateError<G> {
    /// Fingerprint this precondition failure for stable reporting.
    pub fn violation(&self) -> ContractViolation {
        match self {
            EstimateError::ZeroTolerance => ContractViolation::new(
                "zero_tolerance",
                law::TOLERANCE_UNIT,
                serde_json::json!({}),
            ),
            EstimateError::ZeroCenter => {
                ContractViolation::new("zero_center", law::CENTER_NONZERO, serde_json::json!({}))
            }
            EstimateError::PerturbationTooLarge { got, needed } => ContractViolation::new(
                "perturbation_too_large",
                law::PERTURBATION_BOUND,
                serde_json::json!({
                    "got": format!("{got:?}"),
                    "needed": format!("{needed:?}"),
                }),
            ),
        }
    }
}

/// Bound v(x⁻¹ − y⁻¹) below γ from a bound on v(x − y).
///
/// Preconditions (checked, violations are typed errors): γ is a unit,
/// v(y) is a unit, and v(x − y) < min(γ·v(y)², v(y)).
///
/// The derivation:
/// 1. v(x − y) < v(y) forces v(x) = v(y), so x ≠ 0 and v(x) is a unit;
/// 2. x⁻¹ − y⁻¹ = x⁻¹·(y − x)·y⁻¹;
/// 3. multiplicativity gives v(x⁻¹ − y⁻¹) = v(y − x)·(v(x)·v(y))⁻¹
///    = v(y − x)·(v(y)²)⁻¹;
/// 4. v(y − x) = v(x − y) < γ·v(y)², so the product sits below γ.
pub fn inversion_estimate<V: Valuation>(
    v: &V,
    x: &V::Field,
    y: &V::Field,
    gamma: &V::Value,
) -> Result<InversionBound<V::Value>, EstimateError<V::Value>> {
    if !gamma.is_unit() {
        return Err(EstimateError::ZeroTolerance);
    }
    let vy = v.value(y);
    if !vy.is_unit() {
        return Err(EstimateError::ZeroCenter);
    }

    let diff = v.value(&x.sub(y));
    let needed = gamma.mul(&vy.squared()).min_with(&vy);
    let Some(vx) = dominant_value(v, x, y) else {
        return Err(EstimateError::PerturbationTooLarge { got: diff, needed });
    };
    if diff >= needed {
        return Err(EstimateError::PerturbationTooLarge { got: diff, needed });
    }

    let denom = vx.mul(&vy).inv().ok_or(EstimateError::ZeroCenter)?;
    let exact = value_of_neg(v, &x.sub(y)).mul(&denom);
    debug_assert!(exact < *gamma);

    Ok(InversionBound {
        exact,
        below: gamma.clone(),
    })
}
