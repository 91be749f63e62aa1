//! Conversion of operand literals into integers.
//!
//! A literal is an optional sign followed by decimal digits, possibly
//! surrounded by whitespace. Single underscores may separate groups of
//! digits, so `1_000` is accepted while `1__000`, `_1` and `1_` are not.
//! Integers are unbounded.
use std::str::FromStr;

use num::bigint::Sign;
use num::{BigInt, BigUint};

use winnow::ascii::digit1;
use winnow::combinator::{delimited, opt, separated};
use winnow::token::{one_of, take_while};
use winnow::{ModalResult, Parser};

use crate::error::{ConversionError, Error};

/// Converts the value of the flag `--{name}` into an integer
pub fn parse(name: &'static str, value: Option<&str>) -> Result<BigInt, Error> {
    let Some(value) = value else {
        return Err(Error::MissingArgument { name });
    };

    let operand = literal
        .parse(value)
        .map_err(|error| ConversionError::new(name, value, error.offset()))?;

    log::debug!("--{name} {value:?} converted to {operand}");

    Ok(operand)
}

fn literal(input: &mut &str) -> ModalResult<BigInt> {
    delimited(whitespace, (sign, magnitude), whitespace)
        .map(|(sign, magnitude)| BigInt::from_biguint(sign, magnitude))
        .parse_next(input)
}

/// Any Unicode whitespace, including vertical tabs and form feeds
fn whitespace<'s>(input: &mut &'s str) -> ModalResult<&'s str> {
    take_while(0.., char::is_whitespace).parse_next(input)
}

fn sign(input: &mut &str) -> ModalResult<Sign> {
    opt(one_of(['+', '-']))
        .map(|sign| {
            if sign == Some('-') {
                Sign::Minus
            } else {
                Sign::Plus
            }
        })
        .parse_next(input)
}

fn magnitude(input: &mut &str) -> ModalResult<BigUint> {
    separated(1.., digit1, '_')
        .try_map(|groups: Vec<&str>| BigUint::from_str(&groups.concat()))
        .parse_next(input)
}

#[cfg(test)]
mod tests {
    use num::BigInt;

    use crate::error::Error;

    use super::parse;

    fn integer(value: &str) -> BigInt {
        parse("first", Some(value)).unwrap()
    }

    fn conversion_offset(value: &str) -> usize {
        match parse("first", Some(value)) {
            Err(Error::Conversion(error)) => {
                assert_eq!(error.name(), "first");
                assert_eq!(error.value(), value);
                error.span().offset()
            }
            other => panic!("expected a conversion error for {value:?}, got {other:?}"),
        }
    }

    #[test]
    fn plain() {
        assert_eq!(integer("42"), BigInt::from(42));
        assert_eq!(integer("0"), BigInt::from(0));
        assert_eq!(integer("007"), BigInt::from(7));
    }

    #[test]
    fn signed() {
        assert_eq!(integer("-42"), BigInt::from(-42));
        assert_eq!(integer("+42"), BigInt::from(42));
        assert_eq!(integer("-0"), BigInt::from(0));
    }

    #[test]
    fn surrounding_whitespace() {
        assert_eq!(integer(" 12 "), BigInt::from(12));
        assert_eq!(integer("\t-3\n"), BigInt::from(-3));
        assert_eq!(integer("\u{0b}5\u{0c}"), BigInt::from(5));
        assert_eq!(integer("\u{2003}8\u{00a0}"), BigInt::from(8));
    }

    #[test]
    fn underscores() {
        assert_eq!(integer("1_000"), BigInt::from(1000));
        assert_eq!(integer("-1_2_3"), BigInt::from(-123));
    }

    #[test]
    fn unbounded() {
        let beyond_i128 = "170141183460469231731687303715884105728";
        assert_eq!(
            integer(beyond_i128),
            BigInt::from(i128::MAX) + BigInt::from(1)
        );

        let huge = format!("-{}", "9".repeat(400));
        assert_eq!(integer(&huge).to_string(), huge);
    }

    #[test]
    fn missing() {
        assert!(matches!(
            parse("second", None),
            Err(Error::MissingArgument { name: "second" })
        ));
    }

    #[test]
    fn empty() {
        assert_eq!(conversion_offset(""), 0);
        assert_eq!(conversion_offset("   "), 3);
    }

    #[test]
    fn decimal_point() {
        assert_eq!(conversion_offset("3.5"), 1);
    }

    #[test]
    fn not_a_number() {
        assert_eq!(conversion_offset("abc"), 0);
        assert_eq!(conversion_offset("12abc"), 2);
        assert_eq!(conversion_offset("+"), 1);
        assert_eq!(conversion_offset("--1"), 1);
        assert_eq!(conversion_offset("1 2"), 2);
    }

    #[test]
    fn misplaced_underscores() {
        assert_eq!(conversion_offset("_1"), 0);
        assert_eq!(conversion_offset("1_"), 1);
        assert_eq!(conversion_offset("1__0"), 1);
    }
}
