//! The p-adic valuation on ℚ.
//!
//! Writing a nonzero rational as pⁿ·a/b with a, b coprime to p,
//!
//! ```text
//! v(pⁿ·a/b) = Exp(n),   v(0) = Zero
//! ```
//!
//! so high powers of p are small. This is the golden model for every
//! downstream construction: it is separated, its value group is
//! [`Level`], and completing ℚ under it yields ℚ_p.

use crate::rational::Rational;
use crate::valuation::Valuation;
use serde::{Deserialize, Serialize};
use valfield_order::Level;

/// The p-adic valuation. `p` must be prime (caller contract; only
/// `p ≥ 2` is checked).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct PAdic {
    p: u32,
}

impl PAdic {
    /// `None` when `p < 2`. Primality of `p` is a documented
    /// precondition: for composite p the multiplicative axiom fails.
    pub fn new(p: u32) -> Option<Self> {
        if p >= 2 { Some(Self { p }) } else { None }
    }

    pub fn prime(&self) -> u32 {
        self.p
    }
}

/// Multiplicity of p in a nonzero integer.
fn multiplicity(n: i128, p: i128) -> i64 {
    let mut n = n.abs();
    let mut count = 0;
    while n % p == 0 {
        n /= p;
        count += 1;
    }
    count
}

impl Valuation for PAdic {
    type Field = Rational;
    type Value = Level;

    fn value(&self, x: &Rational) -> Level {
        if x.num() == 0 {
            return Level::Zero;
        }
        let p = self.p as i128;
        Level::Exp(multiplicity(x.num(), p) - multiplicity(x.den(), p))
    }
}
