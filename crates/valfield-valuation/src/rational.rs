//! ℚ as a concrete field carrier.
//!
//! Reduced fractions over `i128`. This is the golden model for the
//! whole engine: large enough to run genuine Cauchy approximations
//! (partial sums of p-adic series) without ever rounding.

use crate::field::Field;
use serde::{Deserialize, Serialize};

/// A rational number in lowest terms with positive denominator.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Rational {
    num: i128,
    den: i128,
}

impl Rational {
    /// `num/den` in lowest terms. `None` when `den` is zero.
    pub fn new(num: i128, den: i128) -> Option<Self> {
        if den == 0 {
            None
        } else {
            Some(Self::normalized(num, den))
        }
    }

    pub fn from_int(n: i128) -> Self {
        Self { num: n, den: 1 }
    }

    pub fn num(&self) -> i128 {
        self.num
    }

    pub fn den(&self) -> i128 {
        self.den
    }

    fn normalized(num: i128, den: i128) -> Self {
        if num == 0 {
            return Self { num: 0, den: 1 };
        }
        let sign = if (num < 0) != (den < 0) { -1 } else { 1 };
        let (num, den) = (num.abs(), den.abs());
        let g = gcd(num, den);
        Self {
            num: sign * (num / g),
            den: den / g,
        }
    }
}

fn gcd(mut a: i128, mut b: i128) -> i128 {
    while b != 0 {
        (a, b) = (b, a % b);
    }
    a
}

impl Field for Rational {
    fn zero() -> Self {
        Self::from_int(0)
    }

    fn one() -> Self {
        Self::from_int(1)
    }

    fn add(&self, rhs: &Self) -> Self {
        Self::normalized(
            self.num * rhs.den + rhs.num * self.den,
            self.den * rhs.den,
        )
    }

    fn neg(&self) -> Self {
        Self {
            num: -self.num,
            den: self.den,
        }
    }

    fn mul(&self, rhs: &Self) -> Self {
        Self::normalized(self.num * rhs.num, self.den * rhs.den)
    }

    fn inv(&self) -> Self {
        if self.num == 0 {
            Self::zero()
        } else if self.num < 0 {
            Self {
                num: -self.den,
                den: -self.num,
            }
        } else {
            Self {
                num: self.den,
                den: self.num,
            }
        }
    }
}

impl std::fmt::Display for Rational {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        if self.den == 1 {
            write!(f, "{}", self.num)
        } else {
            write!(f, "{}/{}", self.num, self.den)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn q(num: i128, den: i128) -> Rational {
        Rational::new(num, den).unwrap()
    }

    #[test]
    fn normalization() {
        assert_eq!(q(2, 4), q(1, 2));
        assert_eq!(q(-2, -4), q(1, 2));
        assert_eq!(q(2, -4), q(-1, 2));
        assert_eq!(q(0, 7), Rational::zero());
        assert!(Rational::new(1, 0).is_none());
    }

    #[test]
    fn arithmetic() {
        assert_eq!(q(1, 2).add(&q(1, 3)), q(5, 6));
        assert_eq!(q(1, 2).sub(&q(1, 2)), Rational::zero());
        assert_eq!(q(2, 3).mul(&q(3, 4)), q(1, 2));
        assert_eq!(q(1, 1).sub(&q(1, 3)), q(2, 3));
    }

    #[test]
    fn total_inverse() {
        assert_eq!(q(2, 3).inv(), q(3, 2));
        assert_eq!(q(-2, 3).inv(), q(-3, 2));
        assert_eq!(Rational::zero().inv(), Rational::zero());
        assert_eq!(q(2, 3).inv().mul(&q(2, 3)), Rational::one());
    }

    #[test]
    fn display() {
        assert_eq!(q(3, 1).to_string(), "3");
        assert_eq!(q(-1, 3).to_string(), "-1/3");
    }
}
