use std::fmt;

use num::{BigInt, BigRational, ToPrimitive, Zero};

use crate::error::Error;
use crate::value::Value;

/// Arithmetic operation selected by `--operator`
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Operator {
    Add,
    Subtract,
    Multiply,
    Divide,
}

impl Operator {
    /// Every operator, in the order symbols are matched
    pub const ALL: [Self; 4] = [Self::Add, Self::Subtract, Self::Multiply, Self::Divide];

    pub const fn symbol(self) -> &'static str {
        match self {
            Self::Add => "+",
            Self::Subtract => "-",
            Self::Multiply => "*",
            Self::Divide => "/",
        }
    }

    /// Returns the operator written exactly as `symbol`, if any
    pub fn from_symbol(symbol: &str) -> Option<Self> {
        Self::ALL
            .into_iter()
            .find(|operator| operator.symbol() == symbol)
    }

    /// Applies the operator to `first` and `second`.
    ///
    /// Division is not truncating: it always produces a [`Value::Real`],
    /// the `f64` nearest to the exact quotient.
    pub fn apply(self, first: &BigInt, second: &BigInt) -> Result<Value, Error> {
        let value = match self {
            Self::Add => Value::Integer(first + second),
            Self::Subtract => Value::Integer(first - second),
            Self::Multiply => Value::Integer(first * second),
            Self::Divide => Value::Real(divide(first, second)?),
        };

        Ok(value)
    }
}

fn divide(dividend: &BigInt, divisor: &BigInt) -> Result<f64, Error> {
    if divisor.is_zero() {
        return Err(Error::DivisionByZero {
            dividend: dividend.clone(),
        });
    }

    BigRational::new(dividend.clone(), divisor.clone())
        .to_f64()
        .filter(|quotient| quotient.is_finite())
        .ok_or_else(|| Error::QuotientTooLarge {
            dividend: dividend.clone(),
            divisor: divisor.clone(),
        })
}

impl fmt::Display for Operator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.symbol())
    }
}
