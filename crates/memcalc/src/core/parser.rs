//! Expression tokenizer and recursive descent parser
//!
//! Accepts the characters a calculator display can hold: digits, `.`,
//! `+ - * / % ^` and parentheses. Anything else is a parse error.

use crate::core::{CalcError, CalcResult, Operation};

/// Token types from lexical analysis
#[derive(Debug, Clone, PartialEq)]
pub enum Token {
    /// Numeric literal
    Number(f64),
    /// Binary operator (`+` and `-` double as unary signs)
    Operator(Operation),
    /// Left parenthesis
    LeftParen,
    /// Right parenthesis
    RightParen,
}

/// Abstract Syntax Tree node
#[derive(Debug, Clone, PartialEq)]
pub enum AstNode {
    /// Numeric literal
    Number(f64),
    /// Binary operation
    BinaryOp {
        /// Left operand
        left: Box<AstNode>,
        /// Operator
        op: Operation,
        /// Right operand
        right: Box<AstNode>,
    },
    /// Unary negation
    Negate(Box<AstNode>),
}

impl AstNode {
    #[must_use]
    pub fn number(value: f64) -> Self {
        Self::Number(value)
    }

    #[must_use]
    pub fn binary(left: AstNode, op: Operation, right: AstNode) -> Self {
        Self::BinaryOp {
            left: Box::new(left),
            op,
            right: Box::new(right),
        }
    }

    #[must_use]
    pub fn negate(inner: AstNode) -> Self {
        Self::Negate(Box::new(inner))
    }
}

/// Tokenizer for converting expression strings to tokens
#[derive(Debug)]
pub struct Tokenizer<'a> {
    input: &'a str,
    pos: usize,
}

impl<'a> Tokenizer<'a> {
    #[must_use]
    pub fn new(input: &'a str) -> Self {
        Self { input, pos: 0 }
    }

    /// Tokenizes the entire input
    pub fn tokenize(&mut self) -> CalcResult<Vec<Token>> {
        let mut tokens = Vec::new();
        while let Some(token) = self.next_token()? {
            tokens.push(token);
        }
        Ok(tokens)
    }

    /// Returns the next token, or None at end of input
    pub fn next_token(&mut self) -> CalcResult<Option<Token>> {
        self.skip_whitespace();

        let Some(ch) = self.current_char() else {
            return Ok(None);
        };

        let token = match ch {
            '0'..='9' | '.' => self.read_number()?,
            '(' => {
                self.advance();
                Token::LeftParen
            }
            ')' => {
                self.advance();
                Token::RightParen
            }
            _ => match Operation::from_symbol(ch) {
                Some(op) => {
                    self.advance();
                    Token::Operator(op)
                }
                None => {
                    return Err(CalcError::ParseError(format!(
                        "Unexpected character: '{ch}'"
                    )));
                }
            },
        };

        Ok(Some(token))
    }

    fn current_char(&self) -> Option<char> {
        self.input[self.pos..].chars().next()
    }

    fn advance(&mut self) {
        if let Some(ch) = self.current_char() {
            self.pos += ch.len_utf8();
        }
    }

    fn skip_whitespace(&mut self) {
        while self.current_char().is_some_and(char::is_whitespace) {
            self.advance();
        }
    }

    fn read_number(&mut self) -> CalcResult<Token> {
        let start = self.pos;
        let mut dots = 0;

        while let Some(ch) = self.current_char() {
            if ch == '.' {
                dots += 1;
            } else if !ch.is_ascii_digit() {
                break;
            }
            self.advance();
        }

        // Exponent only counts when at least one digit follows it
        let rest = &self.input[self.pos..];
        if let Some(after) = rest.strip_prefix(&['e', 'E'][..]) {
            let sign = usize::from(matches!(after.as_bytes().first(), Some(b'+' | b'-')));
            let digits = after[sign..]
                .bytes()
                .take_while(u8::is_ascii_digit)
                .count();
            if digits > 0 {
                self.pos += 1 + sign + digits;
            }
        }

        let literal = &self.input[start..self.pos];
        if dots > 1 {
            return Err(CalcError::ParseError(format!("Invalid number: '{literal}'")));
        }
        literal
            .parse()
            .map(Token::Number)
            .map_err(|_| CalcError::ParseError(format!("Invalid number: '{literal}'")))
    }
}

/// Recursive descent parser for expressions
///
/// Grammar:
/// ```text
/// expression ::= term (('+' | '-') term)*
/// term       ::= unary (('*' | '/' | '%') unary | implicit unary)*
/// unary      ::= ('-' | '+') unary | power
/// power      ::= primary ('^' unary)?     // right associative
/// primary    ::= NUMBER | '(' expression ')'
/// ```
///
/// `implicit` is a multiplication with no operator: before `(`, or between
/// `)` and a number.
///
/// Nesting (parentheses, signs, exponents) is limited to [`MAX_NESTING`]
/// levels and input to [`MAX_TOKENS`] tokens, so the tree stays shallow
/// enough to evaluate and drop recursively.
#[derive(Debug)]
pub struct Parser {
    tokens: Vec<Token>,
    pos: usize,
    depth: usize,
}

/// Deepest nesting the parser accepts
pub const MAX_NESTING: usize = 256;
/// Longest token stream the parser accepts
pub const MAX_TOKENS: usize = 4096;

impl Parser {
    #[must_use]
    pub fn new(tokens: Vec<Token>) -> Self {
        Self {
            tokens,
            pos: 0,
            depth: 0,
        }
    }

    /// Parses a string expression into an AST
    pub fn parse_str(input: &str) -> CalcResult<AstNode> {
        let tokens = Tokenizer::new(input).tokenize()?;
        Self::new(tokens).parse()
    }

    /// Parses all tokens into an AST
    pub fn parse(&mut self) -> CalcResult<AstNode> {
        if self.tokens.is_empty() {
            return Err(CalcError::EmptyExpression);
        }
        if self.tokens.len() > MAX_TOKENS {
            return Err(CalcError::ParseError("Expression too long".into()));
        }

        let ast = self.parse_expression()?;
        if let Some(token) = self.current() {
            return Err(CalcError::ParseError(format!(
                "Unexpected token {token:?} at position {}",
                self.pos
            )));
        }
        Ok(ast)
    }

    fn current(&self) -> Option<&Token> {
        self.tokens.get(self.pos)
    }

    fn previous(&self) -> Option<&Token> {
        self.pos.checked_sub(1).and_then(|i| self.tokens.get(i))
    }

    fn advance(&mut self) -> Option<&Token> {
        let token = self.tokens.get(self.pos);
        if token.is_some() {
            self.pos += 1;
        }
        token
    }

    fn parse_expression(&mut self) -> CalcResult<AstNode> {
        let mut left = self.parse_term()?;

        while let Some(Token::Operator(op @ (Operation::Add | Operation::Subtract))) =
            self.current()
        {
            let op = *op;
            self.advance();
            let right = self.parse_term()?;
            left = AstNode::binary(left, op, right);
        }

        Ok(left)
    }

    fn parse_term(&mut self) -> CalcResult<AstNode> {
        let mut left = self.parse_unary()?;

        loop {
            let op = match self.current() {
                Some(Token::Operator(
                    op @ (Operation::Multiply | Operation::Divide | Operation::Modulo),
                )) => {
                    let op = *op;
                    self.advance();
                    op
                }
                Some(Token::LeftParen) => Operation::Multiply,
                Some(Token::Number(_)) if matches!(self.previous(), Some(Token::RightParen)) => {
                    Operation::Multiply
                }
                _ => break,
            };
            let right = self.parse_unary()?;
            left = AstNode::binary(left, op, right);
        }

        Ok(left)
    }

    // Every recursive path (parentheses, signs, exponents) passes through here
    fn parse_unary(&mut self) -> CalcResult<AstNode> {
        if self.depth >= MAX_NESTING {
            return Err(CalcError::ParseError("Expression nested too deeply".into()));
        }
        self.depth += 1;
        let node = match self.current() {
            Some(Token::Operator(Operation::Subtract)) => {
                self.advance();
                self.parse_unary().map(AstNode::negate)
            }
            Some(Token::Operator(Operation::Add)) => {
                self.advance();
                self.parse_unary()
            }
            _ => self.parse_power(),
        };
        self.depth -= 1;
        node
    }

    fn parse_power(&mut self) -> CalcResult<AstNode> {
        let base = self.parse_primary()?;

        if matches!(self.current(), Some(Token::Operator(Operation::Power))) {
            self.advance();
            let exponent = self.parse_unary()?;
            return Ok(AstNode::binary(base, Operation::Power, exponent));
        }

        Ok(base)
    }

    fn parse_primary(&mut self) -> CalcResult<AstNode> {
        let token = self
            .advance()
            .ok_or_else(|| CalcError::ParseError("Unexpected end of expression".into()))?;

        match token {
            Token::Number(n) => Ok(AstNode::number(*n)),
            Token::LeftParen => {
                let expr = self.parse_expression()?;
                match self.advance() {
                    Some(Token::RightParen) => Ok(expr),
                    Some(t) => Err(CalcError::ParseError(format!(
                        "Expected ')' but found {t:?}"
                    ))),
                    None => Err(CalcError::ParseError("Unclosed parenthesis".into())),
                }
            }
            _ => Err(CalcError::ParseError(format!(
                "Unexpected token: {token:?}"
            ))),
        }
    }
}
