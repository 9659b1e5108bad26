//! Monomial lexer: coefficients (spec §4.3) and exponents (spec §4.4).
//!
//! These functions all operate on *cursors*: a `&str` suffix of the current
//! token, starting wherever the parser's last operation left off. They
//! return how many bytes were consumed so the driver in `parser.rs` can
//! advance the cursor, pulling a new token only once a cursor is fully
//! spent.

use crate::complex::ComplexRational;
use crate::error::ParseError;
use crate::rational::parse_real_fragment;
use crate::token::TokenBuffer;

/// Parses one monomial's coefficient starting at `cursor`.
///
/// Returns the coefficient and the unconsumed remainder of the (possibly
/// stitched-together) token. A cursor beginning with `(` is treated as a
/// complex coefficient and may pull further tokens from `buffer` until the
/// closing `)` is found (spec §4.3); a cursor beginning with `x` has an
/// implicit coefficient of `1` (spec §4.2 edge policy); anything else is
/// parsed as a real coefficient via [`parse_real_fragment`].
pub fn lex_coefficient(
    cursor: &str,
    buffer: &mut TokenBuffer,
) -> Result<(ComplexRational, String), ParseError> {
    if cursor.starts_with('x') {
        return Ok((ComplexRational::from(1i64), cursor.to_string()));
    }
    if cursor.starts_with('(') {
        return lex_complex_coefficient(cursor, buffer);
    }
    let real = parse_real_fragment(cursor)?;
    let rest = cursor[real.consumed..].to_string();
    Ok((ComplexRational::real(real.value), rest))
}

fn lex_complex_coefficient(
    cursor: &str,
    buffer: &mut TokenBuffer,
) -> Result<(ComplexRational, String), ParseError> {
    let mut combined = cursor.to_string();
    while !combined.contains(')') {
        match buffer.next_token() {
            Some(tok) => combined.push_str(&tok),
            None => return Err(ParseError::UnterminatedComplexCoefficient),
        }
    }

    let open = combined.find('(').ok_or(ParseError::MissingStartingBracket)?;
    let close = combined.find(')').ok_or(ParseError::MissingClosingBracket)?;
    let comma = combined[open + 1..close]
        .find(',')
        .map(|p| p + open + 1)
        .ok_or(ParseError::MissingComma)?;

    if !(open < comma && comma < close) {
        return Err(ParseError::MissingComma);
    }

    let real_part = &combined[open + 1..comma];
    let imag_part = &combined[comma + 1..close];

    let re = parse_real_fragment(real_part)?;
    if re.consumed != real_part.len() {
        return Err(ParseError::CannotParseCoefficient(real_part.to_string()));
    }
    let im = parse_real_fragment(imag_part)?;
    if im.consumed != imag_part.len() {
        return Err(ParseError::CannotParseCoefficient(imag_part.to_string()));
    }

    let rest = combined[close + 1..].to_string();
    Ok((ComplexRational::new(re.value, im.value), rest))
}

/// Parses the exponent marker `x[^k]` following a coefficient (spec §4.4).
///
/// Returns the degree and the number of bytes consumed. A negative degree
/// is returned as-is (the caller raises [`ParseError::NegativeExponent`]):
/// the reference implementation's `strtol` accepts a leading `-` inside
/// `x^<digits>` even though the grammar's `nnint` does not, and explicitly
/// rejects the result afterwards, so this lexer does the same.
pub fn lex_exponent(cursor: &str) -> Result<(i64, usize), ParseError> {
    let bytes = cursor.as_bytes();

    if bytes.is_empty() || matches!(bytes[0], b'+' | b'-') {
        return Ok((0, 0));
    }
    if bytes[0] != b'x' {
        return Err(ParseError::UnexpectedTokenAfterCoefficient(
            cursor.chars().next().unwrap(),
        ));
    }

    let mut i = 1;
    if i >= bytes.len() || matches!(bytes[i], b'+' | b'-') {
        return Ok((1, i));
    }
    if bytes[i] != b'^' {
        return Err(ParseError::UnexpectedTokenAfterX(
            cursor[i..].chars().next().unwrap(),
        ));
    }
    i += 1;

    let digits_start = i;
    if i < bytes.len() && bytes[i] == b'-' {
        i += 1;
    }
    while i < bytes.len() && bytes[i].is_ascii_digit() {
        i += 1;
    }
    if i == digits_start || (i == digits_start + 1 && bytes[digits_start] == b'-') {
        return Err(ParseError::UnexpectedTokenAfterX('^'));
    }

    let degree: i64 = cursor[digits_start..i]
        .parse()
        .map_err(|_| ParseError::UnexpectedTokenAfterX('^'))?;

    Ok((degree, i))
}
