//! Polynomial assembler (spec §4.7, component 7).
//!
//! The dense monomial polynomial handed to the external rootfinder: an
//! array of [`ComplexRational`] coefficients indexed by degree `0..=d`,
//! with the top slot guaranteed non-zero.

use crate::complex::ComplexRational;

/// A dense polynomial `c_0 + c_1 x + ... + c_d x^d` with `c_d != 0`.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Polynomial {
    coefficients: Vec<ComplexRational>,
}

impl Polynomial {
    /// Builds a polynomial from slots in degree order.
    ///
    /// Returns `None` if `slots` is empty — "no polynomial", per spec §4.7,
    /// is the caller's responsibility to treat as an empty result, not an
    /// invariant this type can hold (a `Polynomial` always has degree `>= 0`).
    pub fn from_slots(slots: Vec<ComplexRational>) -> Option<Self> {
        if slots.is_empty() {
            None
        } else {
            debug_assert!(!slots.last().unwrap().is_zero());
            Some(Polynomial {
                coefficients: slots,
            })
        }
    }

    /// The polynomial's degree (`>= 0`).
    pub fn degree(&self) -> usize {
        self.coefficients.len() - 1
    }

    /// The coefficient at `degree`, or `None` if `degree` exceeds this
    /// polynomial's degree.
    pub fn coefficient(&self, degree: usize) -> Option<&ComplexRational> {
        self.coefficients.get(degree)
    }

    /// All coefficients in degree order, `0..=degree()`.
    pub fn coefficients(&self) -> &[ComplexRational] {
        &self.coefficients
    }
}
