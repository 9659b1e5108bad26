//! Rational normalizer (spec §4.2, component 3).
//!
//! Converts a textual coefficient fragment — decimal, scientific, or
//! rational — into an exact [`BigRational`], stopping at the first `x` (the
//! exponent marker is not part of the coefficient) or at a bare `+`/`-` that
//! is not part of a scientific-notation exponent (that marks the start of
//! the next monomial's sign).

use crate::error::ParseError;
use num_bigint::BigInt;
use num_rational::BigRational;
use num_traits::Zero;
use std::str::FromStr;

/// Result of normalizing one real-coefficient fragment.
#[derive(Debug, Clone, PartialEq)]
pub struct NormalizedReal {
    /// The exact value, sign already applied.
    pub value: BigRational,
    /// How many bytes of the input fragment were consumed.
    pub consumed: usize,
}

/// Parses a real-coefficient fragment per spec §4.2.
///
/// `fragment` is the remainder of the current token starting at the parser's
/// cursor. Does not handle the "bare `x` means coefficient 1" rule — that is
/// the monomial lexer's concern (spec §4.2 edge policy), since it only
/// applies when reading a whole monomial's coefficient, not when reading the
/// real/imaginary parts of a complex coefficient.
pub fn parse_real_fragment(fragment: &str) -> Result<NormalizedReal, ParseError> {
    let bytes = fragment.as_bytes();
    let mut i = 0;
    let mut sign = 1i32;

    while i < bytes.len() {
        match bytes[i] {
            b'+' => i += 1,
            b'-' => {
                sign = -sign;
                i += 1;
            }
            b' ' | b'\t' | b'\n' | b'\r' => i += 1,
            _ => break,
        }
    }
    let start = i;

    let mut j = start;
    let mut exp_start: Option<usize> = None;
    let mut has_dot = false;
    let mut has_slash = false;
    while j < bytes.len() {
        match bytes[j] {
            b'x' => break,
            b'+' | b'-' => {
                let prev_is_exp_marker =
                    j > start && matches!(bytes[j - 1], b'e' | b'E');
                if prev_is_exp_marker {
                    j += 1;
                } else {
                    break;
                }
            }
            b'.' => {
                has_dot = true;
                j += 1;
            }
            b'/' => {
                has_slash = true;
                j += 1;
            }
            b'e' | b'E' => {
                exp_start = Some(j);
                j += 1;
            }
            b'0'..=b'9' => j += 1,
            _ => break,
        }
    }

    let body = &fragment[start..j];
    let consumed = j;

    if has_slash && (has_dot || exp_start.is_some()) {
        return Err(ParseError::MixedRationalAndFloating(body.to_string()));
    }

    let magnitude = if has_slash {
        parse_rational_body(body)?
    } else {
        parse_decimal_body(body, exp_start.map(|e| e - start))?
    };

    let value = if sign < 0 { -magnitude } else { magnitude };
    Ok(NormalizedReal { value, consumed })
}

fn parse_rational_body(body: &str) -> Result<BigRational, ParseError> {
    let (num_str, denom_str) = body
        .split_once('/')
        .ok_or_else(|| ParseError::CannotParseCoefficient(body.to_string()))?;

    let numerator = BigInt::from_str(num_str)
        .map_err(|_| ParseError::CannotParseCoefficient(body.to_string()))?;
    let denominator = BigInt::from_str(denom_str)
        .map_err(|_| ParseError::CannotParseCoefficient(body.to_string()))?;

    if denominator.is_zero() {
        return Err(ParseError::CannotParseCoefficient(body.to_string()));
    }

    Ok(BigRational::new(numerator, denominator))
}

/// `body` is the mantissa, optionally followed by an `e`/`E` exponent
/// starting at `exp_offset` (relative to `body`).
fn parse_decimal_body(body: &str, exp_offset: Option<usize>) -> Result<BigRational, ParseError> {
    let (mantissa, exponent) = match exp_offset {
        Some(off) => {
            let exp_str = &body[off + 1..];
            let exponent = exp_str
                .parse::<i64>()
                .map_err(|_| ParseError::CannotParseCoefficient(body.to_string()))?;
            (&body[..off], exponent)
        }
        None => (body, 0i64),
    };

    let (int_part, frac_part) = match mantissa.split_once('.') {
        Some((i, f)) => (i, f),
        None => (mantissa, ""),
    };

    if int_part.is_empty() && frac_part.is_empty() {
        return Err(ParseError::CannotParseCoefficient(body.to_string()));
    }
    if !int_part.bytes().all(|b| b.is_ascii_digit())
        || !frac_part.bytes().all(|b| b.is_ascii_digit())
    {
        return Err(ParseError::CannotParseCoefficient(body.to_string()));
    }

    let mut digits = String::with_capacity(int_part.len() + frac_part.len());
    digits.push_str(int_part);
    digits.push_str(frac_part);
    if digits.is_empty() {
        digits.push('0');
    }

    let numerator = BigInt::from_str(&digits)
        .map_err(|_| ParseError::CannotParseCoefficient(body.to_string()))?;
    let ten = BigInt::from(10);
    let denominator = ten.pow(frac_part.len() as u32);

    let mut value = BigRational::new(numerator, denominator);

    if exponent >= 0 {
        let scale = BigRational::from_integer(ten.pow(exponent as u32));
        value *= scale;
    } else {
        let scale = BigRational::from_integer(ten.pow((-exponent) as u32));
        value /= scale;
    }

    Ok(value)
}
