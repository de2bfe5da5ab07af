//! Expression evaluation
//!
//! The controller never parses expressions itself. It is handed something
//! implementing [`ExpressionEvaluator`], which is [`Evaluator`] unless a
//! caller injects another (a closure works too).

use crate::core::parser::{AstNode, Parser};
use crate::core::CalcResult;

/// Capability to evaluate an infix expression string to a number.
///
/// Implementations may return non-finite values (`5/0` is `Infinity`);
/// callers decide how to present them.
pub trait ExpressionEvaluator {
    /// Evaluates `expression`
    fn evaluate(&mut self, expression: &str) -> CalcResult<f64>;
}

impl<F> ExpressionEvaluator for F
where
    F: FnMut(&str) -> CalcResult<f64>,
{
    fn evaluate(&mut self, expression: &str) -> CalcResult<f64> {
        self(expression)
    }
}

/// Default evaluator backed by [`Parser`]
#[derive(Debug, Clone, Copy, Default)]
pub struct Evaluator;

impl Evaluator {
    #[must_use]
    pub fn new() -> Self {
        Self
    }

    /// Evaluates an AST node with IEEE 754 arithmetic
    #[must_use]
    pub fn evaluate_ast(&self, node: &AstNode) -> f64 {
        match node {
            AstNode::Number(n) => *n,
            AstNode::Negate(inner) => -self.evaluate_ast(inner),
            AstNode::BinaryOp { left, op, right } => {
                op.apply(self.evaluate_ast(left), self.evaluate_ast(right))
            }
        }
    }

    /// Parses and evaluates a string expression
    pub fn evaluate_str(&self, input: &str) -> CalcResult<f64> {
        let ast = Parser::parse_str(input)?;
        Ok(self.evaluate_ast(&ast))
    }
}

impl ExpressionEvaluator for Evaluator {
    fn evaluate(&mut self, expression: &str) -> CalcResult<f64> {
        self.evaluate_str(expression)
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use crate::core::{CalcError, Operation};
    use proptest::prelude::*;

    fn eval(input: &str) -> CalcResult<f64> {
        Evaluator::new().evaluate_str(input)
    }

    // ===== AST evaluation =====

    #[test]
    fn test_evaluate_ast_number() {
        assert_eq!(Evaluator::new().evaluate_ast(&AstNode::number(42.0)), 42.0);
    }

    #[test]
    fn test_evaluate_ast_negate() {
        let ast = AstNode::negate(AstNode::negate(AstNode::number(5.0)));
        assert_eq!(Evaluator::new().evaluate_ast(&ast), 5.0);
    }

    #[test]
    fn test_evaluate_ast_nested() {
        // (2 + 3) * 4
        let ast = AstNode::binary(
            AstNode::binary(AstNode::number(2.0), Operation::Add, AstNode::number(3.0)),
            Operation::Multiply,
            AstNode::number(4.0),
        );
        assert_eq!(Evaluator::new().evaluate_ast(&ast), 20.0);
    }

    // ===== String evaluation =====

    #[test]
    fn test_evaluate_str_simple() {
        assert_eq!(eval("2+3"), Ok(5.0));
        assert_eq!(eval("10/4"), Ok(2.5));
    }

    #[test]
    fn test_evaluate_str_precedence() {
        assert_eq!(eval("2+3*4"), Ok(14.0));
        assert_eq!(eval("(2+3)*4"), Ok(20.0));
    }

    #[test]
    fn test_evaluate_str_power() {
        assert_eq!(eval("2^10"), Ok(1024.0));
        assert_eq!(eval("2^3^2"), Ok(512.0));
        assert_eq!(eval("-2^2"), Ok(-4.0));
        assert_eq!(eval("2^-1"), Ok(0.5));
    }

    #[test]
    fn test_evaluate_str_unary_minus() {
        assert_eq!(eval("-5+3"), Ok(-2.0));
        assert_eq!(eval("3*-2"), Ok(-6.0));
    }

    #[test]
    fn test_evaluate_str_implicit_multiplication() {
        assert_eq!(eval("2(3+1)"), Ok(8.0));
        assert_eq!(eval("(1+1)(2+2)"), Ok(8.0));
        assert_eq!(eval("(4)5"), Ok(20.0));
    }

    #[test]
    fn test_evaluate_str_modulo() {
        assert_eq!(eval("10%3"), Ok(1.0));
    }

    #[test]
    fn test_evaluate_str_float_noise_preserved() {
        assert_eq!(eval("0.1+0.2"), Ok(0.1 + 0.2));
    }

    #[test]
    fn test_evaluate_str_division_by_zero_is_infinite() {
        assert_eq!(eval("5/0"), Ok(f64::INFINITY));
        assert_eq!(eval("-5/0"), Ok(f64::NEG_INFINITY));
        assert!(eval("0/0").unwrap().is_nan());
    }

    #[test]
    fn test_evaluate_str_empty() {
        assert_eq!(eval(""), Err(CalcError::EmptyExpression));
    }

    #[test]
    fn test_evaluate_str_invalid() {
        assert!(matches!(eval("5+"), Err(CalcError::ParseError(_))));
        assert!(matches!(eval("1.2.3"), Err(CalcError::ParseError(_))));
        assert!(matches!(eval("Error5"), Err(CalcError::ParseError(_))));
    }

    // ===== Trait dispatch =====

    #[test]
    fn test_evaluator_through_trait() {
        let mut evaluator = Evaluator::new();
        assert_eq!(ExpressionEvaluator::evaluate(&mut evaluator, "7*6"), Ok(42.0));
    }

    #[test]
    fn test_closure_is_an_evaluator() {
        let mut seen = Vec::new();
        let mut stub = |expr: &str| -> CalcResult<f64> {
            seen.push(expr.to_string());
            Ok(1.5)
        };
        assert_eq!(stub.evaluate("anything"), Ok(1.5));
        assert_eq!(seen, vec!["anything".to_string()]);
    }

    proptest! {
        #[test]
        fn prop_addition_matches_ieee(a in 0u32..100_000, b in 0u32..100_000) {
            let result = eval(&format!("{a}+{b}")).unwrap();
            prop_assert_eq!(result, f64::from(a) + f64::from(b));
        }

        #[test]
        fn prop_parenthesised_number_is_identity(n in 0u32..1_000_000) {
            prop_assert_eq!(eval(&format!("(({n}))")).unwrap(), f64::from(n));
        }
    }
}
