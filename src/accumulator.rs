//! Coefficient accumulator (spec §4.6, component 6).
//!
//! A dense, degree-indexed table of [`ComplexRational`] slots. Repeated
//! mentions of the same degree accumulate rather than overwrite, and the
//! table automatically trims trailing zero slots so that its top coefficient
//! is always non-zero.

use crate::complex::ComplexRational;

/// Sparse-update, dense-storage coefficient table.
///
/// Invariant: `slots.last()` is never zero (checked after every update); an
/// empty table represents "no polynomial" (`current_top() == -1`).
#[derive(Debug, Clone, Default)]
pub struct CoefficientTable {
    slots: Vec<ComplexRational>,
}

impl CoefficientTable {
    pub fn new() -> Self {
        CoefficientTable { slots: Vec::new() }
    }

    /// The highest degree with a (guaranteed non-zero) coefficient, or `-1`
    /// if the table is empty.
    pub fn current_top(&self) -> i64 {
        self.slots.len() as i64 - 1
    }

    /// Adds `value` to the coefficient at degree `degree`, growing the table
    /// if needed and trimming trailing zero slots afterwards.
    pub fn add_term(&mut self, degree: u32, value: &ComplexRational) {
        let degree = degree as usize;
        if degree >= self.slots.len() {
            self.slots.resize(degree + 1, ComplexRational::zero());
        }
        self.slots[degree].add_assign(value);

        while matches!(self.slots.last(), Some(top) if top.is_zero()) {
            self.slots.pop();
        }
    }

    /// Consumes the table, returning its slots in degree order (empty if the
    /// whole expression cancelled to zero).
    pub fn into_slots(self) -> Vec<ComplexRational> {
        self.slots
    }
}
