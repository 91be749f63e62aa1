use miette::{Diagnostic, NamedSource, SourceSpan};

use num::BigInt;

use thiserror::Error;

/// Fatal failures of an evaluation
#[derive(Error, Debug, Diagnostic)]
pub enum Error {
    /// An operand flag was not given on the command line.
    #[error("missing required argument `--{name}`")]
    #[diagnostic(
        code("argcalc::missing-argument"),
        help("pass an integer with `--{name} <value>`")
    )]
    MissingArgument { name: &'static str },

    #[error(transparent)]
    #[diagnostic(transparent)]
    Conversion(#[from] ConversionError),

    #[error("cannot divide {dividend} by zero")]
    #[diagnostic(code("argcalc::division-by-zero"))]
    DivisionByZero { dividend: BigInt },

    /// The quotient is beyond the largest finite `f64`.
    #[error("`{dividend} / {divisor}` is too large for a real number")]
    #[diagnostic(code("argcalc::quotient-too-large"))]
    QuotientTooLarge { dividend: BigInt, divisor: BigInt },
}

/// An operand is not a base-10 integer literal.
///
/// The literal itself is attached as source code so that the report points
/// at the offending part of it.
#[derive(Error, Debug, Diagnostic)]
#[error("invalid integer `{value}` for `--{name}`")]
#[diagnostic(
    code("argcalc::invalid-integer"),
    help("write an optional sign followed by digits, for example `-42` or `1_000`")
)]
pub struct ConversionError {
    name: &'static str,

    value: String,

    #[source_code]
    src: NamedSource<String>,

    #[label("expected a digit here")]
    span: SourceSpan,
}

impl ConversionError {
    pub(crate) fn new(name: &'static str, value: &str, offset: usize) -> Self {
        let len = value
            .get(offset..)
            .and_then(|rest| rest.chars().next())
            .map_or(0, char::len_utf8);

        Self {
            name,
            value: value.to_owned(),
            src: NamedSource::new(format!("--{name}"), value.to_owned()),
            span: (offset, len).into(),
        }
    }

    /// Name of the flag, without its leading dashes
    pub fn name(&self) -> &'static str {
        self.name
    }

    /// The literal as given on the command line
    pub fn value(&self) -> &str {
        &self.value
    }

    /// Span of the first character that could not be converted
    pub fn span(&self) -> SourceSpan {
        self.span
    }
}
