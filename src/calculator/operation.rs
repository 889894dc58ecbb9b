//! The four keypad operators and their guarded arithmetic.

use std::fmt;
use std::str::FromStr;

use super::CalcError;

/// A binary arithmetic operator.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Operation {
    Add,
    Subtract,
    Multiply,
    Divide,
}

impl Operation {
    /// All operators, in keypad order.
    pub const ALL: [Operation; 4] = [Self::Add, Self::Subtract, Self::Multiply, Self::Divide];

    /// Apply the operator to `left` and `right`.
    ///
    /// Operands are checked before the arithmetic and the result after it, so
    /// a NaN or infinite operand is reported as [`CalcError::Overflow`] even for
    /// a division by zero.
    pub fn calculate(self, left: f64, right: f64) -> Result<f64, CalcError> {
        if !left.is_finite() || !right.is_finite() {
            return Err(CalcError::Overflow);
        }

        let result = match self {
            Self::Add => left + right,
            Self::Subtract => left - right,
            Self::Multiply => left * right,
            Self::Divide => {
                if right == 0.0 {
                    return Err(CalcError::DivisionByZero);
                }
                left / right
            }
        };

        if result.is_infinite() || result.is_nan() {
            return Err(CalcError::Overflow);
        }
        if result > f64::MAX || result < -f64::MAX {
            return Err(CalcError::Overflow);
        }

        Ok(result)
    }

    /// The label printed on the keypad button.
    pub fn symbol(self) -> &'static str {
        match self {
            Self::Add => "+",
            Self::Subtract => "-",
            Self::Multiply => "X",
            Self::Divide => "/",
        }
    }

    /// Look up an operator by keypad label, accepting the common aliases.
    pub fn from_symbol(symbol: char) -> Option<Self> {
        match symbol {
            '+' => Some(Self::Add),
            '-' | '−' => Some(Self::Subtract),
            'X' | 'x' | '*' | '×' => Some(Self::Multiply),
            '/' | '÷' => Some(Self::Divide),
            _ => None,
        }
    }
}

impl fmt::Display for Operation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.symbol())
    }
}

/// Returned when a string is not a single operator label.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown operator {0:?}")]
pub struct UnknownOperator(pub String);

impl FromStr for Operation {
    type Err = UnknownOperator;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let mut chars = s.trim().chars();
        match (chars.next(), chars.next()) {
            (Some(c), None) => Self::from_symbol(c).ok_or_else(|| UnknownOperator(s.to_string())),
            _ => Err(UnknownOperator(s.to_string())),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_basic_arithmetic() {
        assert_eq!(Operation::Add.calculate(5.0, 3.0), Ok(8.0));
        assert_eq!(Operation::Subtract.calculate(5.0, 3.0), Ok(2.0));
        assert_eq!(Operation::Multiply.calculate(5.0, 3.0), Ok(15.0));
        assert_eq!(Operation::Divide.calculate(10.0, 4.0), Ok(2.5));
    }

    #[test]
    fn test_division_matches_ieee() {
        let pairs = [(1.0, 3.0), (-7.5, 0.1), (1e-300, 1e10), (f64::MAX, 2.0)];
        for (a, b) in pairs {
            assert_eq!(Operation::Divide.calculate(a, b), Ok(a / b));
        }
    }

    #[test]
    fn test_division_by_zero() {
        for a in [0.0, 1.0, -1.0, f64::MAX, f64::MIN_POSITIVE] {
            assert_eq!(
                Operation::Divide.calculate(a, 0.0),
                Err(CalcError::DivisionByZero)
            );
        }
        assert_eq!(
            Operation::Divide.calculate(1.0, -0.0),
            Err(CalcError::DivisionByZero)
        );
    }

    #[test]
    fn test_non_finite_operands_overflow() {
        for op in Operation::ALL {
            for bad in [f64::NAN, f64::INFINITY, f64::NEG_INFINITY] {
                assert_eq!(op.calculate(bad, 1.0), Err(CalcError::Overflow));
                assert_eq!(op.calculate(1.0, bad), Err(CalcError::Overflow));
            }
        }
        // The operand check runs before the zero-divisor check.
        assert_eq!(
            Operation::Divide.calculate(f64::NAN, 0.0),
            Err(CalcError::Overflow)
        );
    }

    #[test]
    fn test_result_overflow() {
        assert_eq!(
            Operation::Multiply.calculate(f64::MAX, 2.0),
            Err(CalcError::Overflow)
        );
        assert_eq!(
            Operation::Add.calculate(f64::MAX, f64::MAX),
            Err(CalcError::Overflow)
        );
        assert_eq!(
            Operation::Subtract.calculate(-f64::MAX, f64::MAX),
            Err(CalcError::Overflow)
        );
        assert_eq!(
            Operation::Divide.calculate(f64::MAX, 0.5),
            Err(CalcError::Overflow)
        );
    }

    #[test]
    fn test_large_but_finite() {
        assert_eq!(Operation::Add.calculate(f64::MAX, 1.0), Ok(f64::MAX));
        assert_eq!(Operation::Multiply.calculate(1e154, 1e154), Ok(1e154 * 1e154));
    }

    #[test]
    fn test_symbols() {
        for op in Operation::ALL {
            assert_eq!(op.symbol().parse::<Operation>(), Ok(op));
        }
        assert_eq!("*".parse::<Operation>(), Ok(Operation::Multiply));
        assert_eq!("÷".parse::<Operation>(), Ok(Operation::Divide));
        assert!("%".parse::<Operation>().is_err());
        assert!("++".parse::<Operation>().is_err());
    }
}
