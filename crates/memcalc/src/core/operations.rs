//! Binary arithmetic operations
//!
//! Arithmetic follows IEEE 754: dividing by zero produces an infinity and
//! `0 / 0` produces NaN. Rejecting non-finite results is the controller's job.

/// Type-safe binary operation
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Operation {
    /// Addition (+)
    Add,
    /// Subtraction (-)
    Subtract,
    /// Multiplication (*)
    Multiply,
    /// Division (/)
    Divide,
    /// Modulo (%)
    Modulo,
    /// Power (^)
    Power,
}

impl Operation {
    /// Maps an operator character to its operation
    #[must_use]
    pub const fn from_symbol(symbol: char) -> Option<Self> {
        match symbol {
            '+' => Some(Self::Add),
            '-' => Some(Self::Subtract),
            '*' => Some(Self::Multiply),
            '/' => Some(Self::Divide),
            '%' => Some(Self::Modulo),
            '^' => Some(Self::Power),
            _ => None,
        }
    }

    /// Applies the operation to two operands
    #[must_use]
    pub fn apply(&self, a: f64, b: f64) -> f64 {
        match self {
            Self::Add => a + b,
            Self::Subtract => a - b,
            Self::Multiply => a * b,
            Self::Divide => a / b,
            Self::Modulo => a % b,
            Self::Power => a.powf(b),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn test_from_symbol_operators() {
        for (symbol, op) in [
            ('+', Operation::Add),
            ('-', Operation::Subtract),
            ('*', Operation::Multiply),
            ('/', Operation::Divide),
            ('%', Operation::Modulo),
            ('^', Operation::Power),
        ] {
            assert_eq!(Operation::from_symbol(symbol), Some(op));
        }
    }

    #[test]
    fn test_from_symbol_unknown() {
        assert_eq!(Operation::from_symbol('x'), None);
        assert_eq!(Operation::from_symbol('('), None);
    }

    #[test]
    fn test_apply_basic() {
        assert_eq!(Operation::Add.apply(2.0, 3.0), 5.0);
        assert_eq!(Operation::Subtract.apply(5.0, 3.0), 2.0);
        assert_eq!(Operation::Multiply.apply(4.0, 3.0), 12.0);
        assert_eq!(Operation::Divide.apply(12.0, 4.0), 3.0);
        assert_eq!(Operation::Modulo.apply(7.0, 3.0), 1.0);
        assert_eq!(Operation::Power.apply(2.0, 10.0), 1024.0);
    }

    #[test]
    fn test_divide_by_zero_is_infinite() {
        assert_eq!(Operation::Divide.apply(5.0, 0.0), f64::INFINITY);
        assert_eq!(Operation::Divide.apply(-5.0, 0.0), f64::NEG_INFINITY);
    }

    #[test]
    fn test_zero_over_zero_is_nan() {
        assert!(Operation::Divide.apply(0.0, 0.0).is_nan());
        assert!(Operation::Modulo.apply(3.0, 0.0).is_nan());
    }

    #[test]
    fn test_power_negative_exponent() {
        assert_eq!(Operation::Power.apply(2.0, -1.0), 0.5);
    }

    #[test]
    fn test_power_overflow() {
        assert!(Operation::Power.apply(10.0, 1000.0).is_infinite());
    }

    proptest! {
        #[test]
        fn prop_add_commutative(a in -1e10f64..1e10f64, b in -1e10f64..1e10f64) {
            prop_assert_eq!(Operation::Add.apply(a, b), Operation::Add.apply(b, a));
        }

        #[test]
        fn prop_multiply_identity(a in -1e10f64..1e10f64) {
            prop_assert_eq!(Operation::Multiply.apply(a, 1.0), a);
        }

        #[test]
        fn prop_divide_by_self(a in 1e-3f64..1e10f64) {
            prop_assert!((Operation::Divide.apply(a, a) - 1.0).abs() < 1e-12);
        }
    }
}
