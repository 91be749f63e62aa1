use std::fmt;

use num::BigInt;

/// Result of an arithmetic operation
///
/// Addition, subtraction and multiplication stay integers, division yields a
/// real number even when the operands divide evenly.
#[derive(Debug, Clone, PartialEq)]
pub enum Value {
    Integer(BigInt),
    /// Always finite
    Real(f64),
}

impl fmt::Display for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Integer(n) => write!(f, "{n}"),
            Self::Real(x) => fmt_real(*x, f),
        }
    }
}

/// Shortest representation that reads back as `x`.
///
/// It always carries a fractional part or an exponent, switching to
/// scientific notation below `1e-4` and from `1e16` onward, with a signed
/// exponent of at least two digits (`1e+16`, `2.5e-07`).
fn fmt_real(x: f64, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    let magnitude = x.abs();
    if magnitude != 0.0 && !(1e-4..1e16).contains(&magnitude) {
        let scientific = format!("{x:e}");
        let (mantissa, exponent) = scientific.split_once('e').ok_or(fmt::Error)?;
        let exponent: i32 = exponent.parse().map_err(|_| fmt::Error)?;
        let sign = if exponent < 0 { '-' } else { '+' };

        return write!(f, "{mantissa}e{sign}{:02}", exponent.unsigned_abs());
    }

    let fixed = x.to_string();
    if fixed.contains('.') {
        f.write_str(&fixed)
    } else {
        write!(f, "{fixed}.0")
    }
}

#[cfg(test)]
mod tests {
    use num::BigInt;

    use super::Value;

    fn real(x: f64) -> String {
        Value::Real(x).to_string()
    }

    #[test]
    fn integers() {
        assert_eq!(Value::Integer(BigInt::from(9)).to_string(), "9");
        assert_eq!(Value::Integer(BigInt::from(-42)).to_string(), "-42");
        assert_eq!(
            Value::Integer(BigInt::from(i128::MIN) - 1).to_string(),
            "-170141183460469231731687303715884105729"
        );
    }

    #[test]
    fn fractional() {
        assert_eq!(real(3.5), "3.5");
        assert_eq!(real(-3.5), "-3.5");
        assert_eq!(real(1.0 / 3.0), "0.3333333333333333");
        assert_eq!(real(0.0001), "0.0001");
    }

    #[test]
    fn whole_reals_keep_a_fractional_part() {
        assert_eq!(real(2.0), "2.0");
        assert_eq!(real(0.0), "0.0");
        assert_eq!(real(-0.0), "-0.0");
        assert_eq!(real(1e15), "1000000000000000.0");
    }

    #[test]
    fn scientific() {
        assert_eq!(real(1e16), "1e+16");
        assert_eq!(real(-1.5e16), "-1.5e+16");
        assert_eq!(real(1e-5), "1e-05");
        assert_eq!(real(2.5e-7), "2.5e-07");
        assert_eq!(real(1.7014118346046923e38), "1.7014118346046923e+38");
    }
}
