//! A complex number with exact rational real and imaginary parts.

use num_bigint::BigInt;
use num_rational::BigRational;
use num_traits::Zero;
use std::ops::Neg;

/// Pair `(re, im)` of arbitrary-precision rationals.
///
/// Only the operations the accumulator (`§4.6`) actually needs are provided:
/// the grammar never multiplies or divides two complex coefficients against
/// each other, only adds them and negates them for a leading `-` sign.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ComplexRational {
    pub re: BigRational,
    pub im: BigRational,
}

impl ComplexRational {
    /// The additive identity, `0 + 0i`.
    pub fn zero() -> Self {
        ComplexRational {
            re: BigRational::zero(),
            im: BigRational::zero(),
        }
    }

    /// A purely real value, `re + 0i`.
    pub fn real(re: BigRational) -> Self {
        ComplexRational {
            re,
            im: BigRational::zero(),
        }
    }

    /// `re + im*i`.
    pub fn new(re: BigRational, im: BigRational) -> Self {
        ComplexRational { re, im }
    }

    /// True when both components are exactly zero.
    pub fn is_zero(&self) -> bool {
        self.re.is_zero() && self.im.is_zero()
    }

    /// Adds `other` in place, component-wise.
    pub fn add_assign(&mut self, other: &ComplexRational) {
        self.re += &other.re;
        self.im += &other.im;
    }
}

impl Neg for ComplexRational {
    type Output = ComplexRational;

    fn neg(self) -> Self::Output {
        ComplexRational {
            re: -self.re,
            im: -self.im,
        }
    }
}

impl Default for ComplexRational {
    fn default() -> Self {
        ComplexRational::zero()
    }
}

/// Convenience: `n/1 + 0i` from a plain integer, used by tests.
impl From<i64> for ComplexRational {
    fn from(n: i64) -> Self {
        ComplexRational::real(BigRational::from_integer(BigInt::from(n)))
    }
}
