//! Parser state machine (spec §4.5, component 5).
//!
//! Drives `{Sign → Coefficient → Exponent → Reset}` over the token buffer,
//! handling the token-boundary stitching that parenthesized complex
//! coefficients need. This module is the one place that owns the "current
//! token" cursor; every other module just receives a `&str` suffix of it.

use crate::accumulator::CoefficientTable;
use crate::complex::ComplexRational;
use crate::diagnostics::DiagnosticSink;
use crate::error::ParseError;
use crate::lexer::{lex_coefficient, lex_exponent};
use crate::poly::Polynomial;
use crate::source::ByteSource;
use crate::token::TokenBuffer;

#[derive(Debug, Clone, Copy, PartialEq)]
enum ParseState {
    Sign,
    Coefficient,
    Exponent,
    Reset,
}

/// Parses one polynomial from `source`, reporting at most one diagnostic to
/// `diagnostics` on failure.
///
/// Returns `Ok(Some(poly))` on a non-trivial polynomial, `Ok(None)` if the
/// input was empty or every monomial cancelled out, and `Err(_)` — with
/// exactly one call to `diagnostics.report()` already made — on malformed
/// input.
pub fn parse_polynomial(
    source: &mut dyn ByteSource,
    diagnostics: &mut dyn DiagnosticSink,
) -> Result<Option<Polynomial>, ParseError> {
    let mut buffer = TokenBuffer::new(source);
    run(&mut buffer).inspect_err(|err| diagnostics.report(&err.to_string()))
}

fn run(buffer: &mut TokenBuffer) -> Result<Option<Polynomial>, ParseError> {
    let mut table = CoefficientTable::new();

    let mut current = match buffer.next_token() {
        Some(t) => t,
        None => return Ok(Polynomial::from_slots(table.into_slots())),
    };

    let mut state = ParseState::Sign;
    let mut sign: i32 = 1;
    let mut sign_found = true; // the first monomial needs no explicit sign
    let mut pending: Option<ComplexRational> = None;

    loop {
        match state {
            ParseState::Sign => {
                let (folded, consumed, found) = fold_sign(&current);
                sign *= folded;
                if found {
                    sign_found = true;
                }
                current.drain(..consumed);

                if !current.is_empty() {
                    if !sign_found {
                        return Err(ParseError::MissingSign);
                    }
                    state = ParseState::Coefficient;
                }
            }
            ParseState::Coefficient => {
                let (value, rest) = lex_coefficient(&current, buffer)?;
                let signed = if sign < 0 { -value } else { value };
                current = rest;

                if current.is_empty() {
                    table.add_term(0, &signed);
                    state = ParseState::Reset;
                } else {
                    pending = Some(signed);
                    state = ParseState::Exponent;
                }
            }
            ParseState::Exponent => {
                let (degree, consumed) = lex_exponent(&current)?;
                if degree < 0 {
                    return Err(ParseError::NegativeExponent(degree));
                }
                current.drain(..consumed);
                let value = pending
                    .take()
                    .expect("Exponent state is only reached after a coefficient was parsed");
                table.add_term(degree as u32, &value);
                state = ParseState::Reset;
            }
            ParseState::Reset => {
                sign = 1;
                sign_found = false;
                state = ParseState::Sign;
            }
        }

        if current.is_empty() {
            match buffer.next_token() {
                Some(t) => current = t,
                None => {
                    return match state {
                        ParseState::Sign | ParseState::Reset => {
                            Ok(Polynomial::from_slots(table.into_slots()))
                        }
                        ParseState::Coefficient | ParseState::Exponent => {
                            Err(ParseError::UnexpectedEof)
                        }
                    };
                }
            }
        }
    }
}

/// Folds a leading run of `+`/`-` characters, matching the reference
/// implementation: `+` is a no-op, each `-` flips the running sign (so
/// `--` cancels back to positive and `+-`/`-+` both negate).
fn fold_sign(s: &str) -> (i32, usize, bool) {
    let bytes = s.as_bytes();
    let mut i = 0;
    let mut sign = 1;
    let mut found = false;
    while i < bytes.len() {
        match bytes[i] {
            b'+' => {
                found = true;
                i += 1;
            }
            b'-' => {
                sign = -sign;
                found = true;
                i += 1;
            }
            _ => break,
        }
    }
    (sign, i, found)
}
