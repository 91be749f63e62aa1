use std::io::{self, Write};

use anyhow::Context;

use crate::error::Error;
use crate::operand;
use crate::operator::Operator;
use crate::value::Value;

/// Operands and operator as given on the command line
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Invocation {
    pub first: Option<String>,
    pub second: Option<String>,
    pub operator: Option<String>,
}

impl Invocation {
    pub fn new(
        first: Option<String>,
        second: Option<String>,
        operator: Option<String>,
    ) -> Self {
        Self {
            first,
            second,
            operator,
        }
    }

    /// Computes the result of the invocation.
    ///
    /// Both operands are converted before the operator is looked at. An
    /// operator that is absent or not one of `+`, `-`, `*`, `/` is not an
    /// error: nothing is computed and `Ok(None)` is returned.
    ///
    /// # Example
    ///
    /// ```
    /// # use argcalc::eval::Invocation;
    /// # use argcalc::value::Value;
    /// # fn main() -> Result<(), argcalc::error::Error> {
    /// let invocation = Invocation::new(Some("7".into()), Some("2".into()), Some("/".into()));
    /// assert_eq!(invocation.evaluate()?, Some(Value::Real(3.5)));
    /// # Ok(())
    /// # }
    /// ```
    pub fn evaluate(&self) -> Result<Option<Value>, Error> {
        let first = operand::parse("first", self.first.as_deref())?;
        let second = operand::parse("second", self.second.as_deref())?;

        let Some(operator) = self.operator.as_deref().and_then(Operator::from_symbol) else {
            log::debug!("no operator matches {:?}, nothing to compute", self.operator);
            return Ok(None);
        };

        let value = operator.apply(&first, &second)?;
        log::debug!("{first} {operator} {second} = {value}");

        Ok(Some(value))
    }

    /// Evaluates the invocation and writes the result line to `out`, if any.
    ///
    /// The outer error reports a failure to write, the inner one a failed
    /// evaluation.
    pub fn run(&self, out: &mut impl Write) -> anyhow::Result<Result<(), Error>> {
        match self.evaluate() {
            Ok(Some(value)) => {
                write_result(out, &value).context("could not write the result")?;
                Ok(Ok(()))
            }
            Ok(None) => Ok(Ok(())),
            Err(error) => Ok(Err(error)),
        }
    }
}

/// Writes `Result: <value>` on its own line
pub fn write_result(out: &mut impl Write, value: &Value) -> io::Result<()> {
    writeln!(out, "Result: {value}")?;
    out.flush()
}
