//! Property-based coverage for the quantified invariants over the parser:
//! degree collapse, order-independence of monomial summation, exactness of
//! decimal-to-rational conversion, scientific-notation equivalence,
//! idempotence of a parse/serialize/parse round trip, and totality of
//! rejection over malformed input.

use mpsolve_polyparse::{NullSink, Polynomial, parse_polynomial_str};
use num_bigint::BigInt;
use num_rational::BigRational;
use proptest::prelude::*;

fn int(n: i64) -> BigRational {
    BigRational::from_integer(BigInt::from(n))
}

fn monomial(sign: &str, coeff: i64, degree: u32) -> String {
    match degree {
        0 => format!("{sign}{coeff}"),
        1 => format!("{sign}{coeff}x"),
        d => format!("{sign}{coeff}x^{d}"),
    }
}

/// Renders a polynomial back into sum-of-monomials text using explicit
/// `(re,im)` coefficients, so the round trip never depends on this test's
/// own sign- or decimal-formatting matching the parser's.
fn to_canonical_text(poly: &Polynomial) -> String {
    poly.coefficients()
        .iter()
        .enumerate()
        .map(|(degree, c)| {
            let term = format!(
                "({}/{},{}/{})",
                c.re.numer(),
                c.re.denom(),
                c.im.numer(),
                c.im.denom()
            );
            match degree {
                0 => format!("+{term}"),
                1 => format!("+{term}x"),
                d => format!("+{term}x^{d}"),
            }
        })
        .collect::<Vec<_>>()
        .join(" ")
}

proptest! {
    /// A monomial's coefficient cancelling exactly with its own negation
    /// collapses the top of the coefficient table down past that degree,
    /// leaving whatever lower-degree term (if any) remains.
    #[test]
    fn top_degree_collapses_when_its_coefficient_cancels(
        degree in 1u32..8,
        magnitude in 1i64..1000,
        constant in -1000i64..1000,
    ) {
        let top = monomial("", magnitude, degree);
        let cancel = monomial("-", magnitude, degree);
        let tail = if constant >= 0 {
            monomial("+", constant, 0)
        } else {
            monomial("-", -constant, 0)
        };
        let input = format!("{top} {cancel} {tail}");

        let mut sink = NullSink;
        let result = parse_polynomial_str(&input, &mut sink).unwrap();

        if constant == 0 {
            prop_assert_eq!(result, None);
        } else {
            let poly = result.unwrap();
            prop_assert_eq!(poly.degree(), 0);
            prop_assert_eq!(poly.coefficient(0).unwrap().re.clone(), int(constant));
        }
    }

    /// Summing the same three monomials in a different textual order
    /// produces the same polynomial: addition at each degree is
    /// commutative, and the table only cares about the multiset of terms.
    #[test]
    fn monomial_order_does_not_affect_the_result(
        a in -100i64..100,
        b in -100i64..100,
        c in -100i64..100,
    ) {
        let term_a = if a >= 0 { monomial("+", a, 0) } else { monomial("-", -a, 0) };
        let term_b = if b >= 0 { monomial("+", b, 1) } else { monomial("-", -b, 1) };
        let term_c = if c >= 0 { monomial("+", c, 2) } else { monomial("-", -c, 2) };

        let forward = format!("{term_a} {term_b} {term_c}");
        let backward = format!("{term_c} {term_b} {term_a}");

        let mut sink = NullSink;
        let forward_result = parse_polynomial_str(&forward, &mut sink).unwrap();
        let mut sink = NullSink;
        let backward_result = parse_polynomial_str(&backward, &mut sink).unwrap();

        prop_assert_eq!(forward_result, backward_result);
    }

    /// A decimal fragment `int.frac` is converted to the exact rational
    /// `(int * 10^len(frac) + frac) / 10^len(frac)`, never a lossy float
    /// approximation.
    #[test]
    fn decimal_fragments_convert_to_the_exact_rational(
        int_part in 0u64..100_000,
        frac_digits in prop::collection::vec(0u8..10, 1..6),
    ) {
        // An all-zero value (e.g. "0.0") correctly parses to `Ok(None)`, not
        // a polynomial (spec §4.7 / Open Question 2) — excluded here since
        // this property is about the non-zero coefficient's exact value.
        prop_assume!(int_part != 0 || frac_digits.iter().any(|&d| d != 0));
        let frac_str: String = frac_digits.iter().map(|d| (b'0' + d) as char).collect();
        let input = format!("{int_part}.{frac_str}");

        let mut sink = NullSink;
        let poly = parse_polynomial_str(&input, &mut sink).unwrap().unwrap();

        let denom = BigInt::from(10u32).pow(frac_str.len() as u32);
        let digits = format!("{int_part}{frac_str}");
        let numer: BigInt = digits.parse().unwrap();
        let expected = BigRational::new(numer, denom);

        prop_assert_eq!(poly.coefficient(0).unwrap().re.clone(), expected);
    }

    /// `<mantissa>e<exp>` and the fully expanded integer it denotes parse
    /// to the same coefficient.
    #[test]
    fn scientific_notation_matches_its_expansion(mantissa in 0i64..100_000, exponent in 0u32..5) {
        let scientific = format!("{mantissa}e{exponent}");
        let expanded = format!("{}", mantissa * 10i64.pow(exponent));

        let mut sink = NullSink;
        let scientific_value = parse_polynomial_str(&scientific, &mut sink)
            .unwrap()
            .map(|p| p.coefficient(0).unwrap().re.clone());
        let mut sink = NullSink;
        let expanded_value = parse_polynomial_str(&expanded, &mut sink)
            .unwrap()
            .map(|p| p.coefficient(0).unwrap().re.clone());

        prop_assert_eq!(scientific_value, expanded_value);
    }

    /// Parsing a polynomial, rendering it back to canonical monomial text,
    /// and parsing that text again reproduces the same polynomial.
    #[test]
    fn parse_render_parse_is_idempotent(
        a in -50i64..50,
        b in -50i64..50,
        c in -50i64..50,
    ) {
        let term_a = if a >= 0 { monomial("+", a, 0) } else { monomial("-", -a, 0) };
        let term_b = if b >= 0 { monomial("+", b, 1) } else { monomial("-", -b, 1) };
        let term_c = if c >= 0 { monomial("+", c, 3) } else { monomial("-", -c, 3) };
        let input = format!("{term_a} {term_b} {term_c}");

        let mut sink = NullSink;
        let first = parse_polynomial_str(&input, &mut sink).unwrap();

        match &first {
            None => {
                // Nothing to round-trip: re-parsing empty text is still `None`.
                let mut sink = NullSink;
                prop_assert_eq!(parse_polynomial_str("", &mut sink).unwrap(), None);
            }
            Some(poly) => {
                let rendered = to_canonical_text(poly);
                let mut sink = NullSink;
                let second = parse_polynomial_str(&rendered, &mut sink).unwrap();
                prop_assert_eq!(second, first);
            }
        }
    }
}

/// Every member of the malformed-input corpus is rejected, never silently
/// accepted or panicked on, regardless of how the corpus grows.
#[test]
fn malformed_input_corpus_is_always_rejected() {
    let corpus = [
        "3 x^2 4 x",
        "(1,2",
        "(1 2)x",
        "1/2.5",
        "x^-2",
        "3y",
        "x%",
        "((1,2)x",
        "(1,2,3)x",
        "1//2",
        "1.2.3",
    ];

    for input in corpus {
        let mut sink = NullSink;
        let result = parse_polynomial_str(input, &mut sink);
        assert!(result.is_err(), "expected {input:?} to be rejected");
    }
}
