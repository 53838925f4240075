//! Discrete magnitude levels: the value group ε^ℤ ∪ {0}.
//!
//! [`Level`] is the concrete Γ₀ shared by every discrete valuation:
//! `Exp(n)` denotes the magnitude εⁿ for a fixed base 0 < ε < 1, so a
//! *larger* exponent is a *smaller* magnitude. For the p-adic valuation
//! ε = 1/p and `v(pⁿ·u) = Exp(n)`.

use crate::group::ValueGroup;
use serde::{Deserialize, Serialize};
use std::cmp::Ordering;

/// An element of the value group ε^ℤ ∪ {0}.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Level {
    /// The absorbing least element.
    Zero,

    /// The magnitude εⁿ. Negative exponents are magnitudes above 1.
    Exp(i64),
}

impl Level {
    /// The exponent, if this level is a unit.
    pub fn exponent(&self) -> Option<i64> {
        match self {
            Level::Zero => None,
            Level::Exp(n) => Some(*n),
        }
    }
}

impl Ord for Level {
    fn cmp(&self, other: &Self) -> Ordering {
        match (self, other) {
            (Level::Zero, Level::Zero) => Ordering::Equal,
            (Level::Zero, Level::Exp(_)) => Ordering::Less,
            (Level::Exp(_), Level::Zero) => Ordering::Greater,
            // εᵃ < εᵇ iff a > b, since 0 < ε < 1.
            (Level::Exp(a), Level::Exp(b)) => b.cmp(a),
        }
    }
}

impl PartialOrd for Level {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl ValueGroup for Level {
    fn zero() -> Self {
        Level::Zero
    }

    fn one() -> Self {
        Level::Exp(0)
    }

    fn mul(&self, rhs: &Self) -> Self {
        match (self, rhs) {
            (Level::Exp(a), Level::Exp(b)) => Level::Exp(a + b),
            _ => Level::Zero,
        }
    }

    fn inv(&self) -> Option<Self> {
        match self {
            Level::Zero => None,
            Level::Exp(n) => Some(Level::Exp(-n)),
        }
    }
}

impl std::fmt::Display for Level {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Level::Zero => write!(f, "0"),
            Level::Exp(0) => write!(f, "1"),
            Level::Exp(n) => write!(f, "ε^{n}"),
        }
    }
}
