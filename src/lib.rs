//! Parser for univariate polynomials written in conventional
//! sum-of-monomials textual form — `a_k x^k + a_{k-1} x^{k-1} + ... + a_0` —
//! producing a dense, in-memory polynomial with arbitrary-precision complex
//! rational coefficients.
//!
//! This crate implements the parsing front end of MPSolve's inline
//! polynomial reader in isolation from the rootfinder it normally feeds:
//! given an abstract byte source and a diagnostic sink, it hands back either
//! a [`Polynomial`] or a [`ParseError`], with no intermediate state left
//! over on either path.
//!
//! ```
//! use mpsolve_polyparse::{parse_polynomial_str, NullSink};
//!
//! let mut sink = NullSink;
//! let poly = parse_polynomial_str("x^2 - 2x + 1", &mut sink)
//!     .unwrap()
//!     .unwrap();
//! assert_eq!(poly.degree(), 2);
//! ```

mod accumulator;
mod complex;
mod diagnostics;
mod error;
mod lexer;
mod parser;
mod poly;
mod rational;
mod source;
mod token;

pub use crate::complex::ComplexRational;
pub use crate::diagnostics::{DiagnosticSink, NullSink, StderrSink, VecSink};
pub use crate::error::ParseError;
pub use crate::parser::parse_polynomial;
pub use crate::poly::Polynomial;
pub use crate::source::{ByteSource, ReaderSource, SliceSource};

/// Convenience wrapper around [`parse_polynomial`] for an in-memory string.
pub fn parse_polynomial_str(
    input: &str,
    diagnostics: &mut dyn DiagnosticSink,
) -> Result<Option<Polynomial>, ParseError> {
    let mut source = SliceSource::new(input.as_bytes());
    parse_polynomial(&mut source, diagnostics)
}
