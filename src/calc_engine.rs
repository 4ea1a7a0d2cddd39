use std::fmt;
use std::ops::{Add, Div, Mul, Neg, Sub};

use thiserror::Error;

/// Error raised when an expression does not match the grammar. Carries a
/// message naming the offending character, or `<EOL>` at end of input.
#[derive(Debug, Clone, PartialEq, Error)]
#[error("{0}")]
pub struct SyntaxError(pub String);

/// Result of evaluating an expression. Integer-only arithmetic stays `Int`;
/// a decimal literal or a division anywhere forces `Float`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Value {
    Int(i64),
    Float(f64),
}

impl Value {
    pub fn as_f64(self) -> f64 {
        match self {
            Value::Int(n) => n as f64,
            Value::Float(x) => x,
        }
    }

    pub fn is_nan(self) -> bool {
        matches!(self, Value::Float(x) if x.is_nan())
    }
}

impl fmt::Display for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Value::Int(n) => write!(f, "{}", n),
            // {:?} keeps the decimal point, so 4.0 never prints as 4
            Value::Float(x) => write!(f, "{:?}", x),
        }
    }
}

impl Add for Value {
    type Output = Value;

    fn add(self, rhs: Value) -> Value {
        match (self, rhs) {
            (Value::Int(a), Value::Int(b)) => Value::Int(a + b),
            (a, b) => Value::Float(a.as_f64() + b.as_f64()),
        }
    }
}

impl Sub for Value {
    type Output = Value;

    fn sub(self, rhs: Value) -> Value {
        match (self, rhs) {
            (Value::Int(a), Value::Int(b)) => Value::Int(a - b),
            (a, b) => Value::Float(a.as_f64() - b.as_f64()),
        }
    }
}

impl Mul for Value {
    type Output = Value;

    fn mul(self, rhs: Value) -> Value {
        match (self, rhs) {
            (Value::Int(a), Value::Int(b)) => Value::Int(a * b),
            (a, b) => Value::Float(a.as_f64() * b.as_f64()),
        }
    }
}

impl Div for Value {
    type Output = Value;

    // Division always goes through f64. A zero divisor gives NaN, whatever
    // the numerator is.
    fn div(self, rhs: Value) -> Value {
        if rhs.as_f64() == 0.0 {
            return Value::Float(f64::NAN);
        }
        Value::Float(self.as_f64() / rhs.as_f64())
    }
}

impl Neg for Value {
    type Output = Value;

    fn neg(self) -> Value {
        match self {
            Value::Int(n) => Value::Int(-n),
            Value::Float(x) => Value::Float(-x),
        }
    }
}

/// Shape of the next token a grammar rule is willing to accept.
enum Pattern {
    Char(char),
    AnyOf(&'static [char]),
    Number,
}

/// Recursive-descent evaluator. Tokenization is folded into parsing: each
/// grammar rule asks `is_next` for the token shape it wants, and the value
/// of the expression is computed as the rules match. No token list and no
/// syntax tree are ever built.
pub struct Evaluator {
    line: String,
    current: String,
}

impl Evaluator {
    pub fn new() -> Self {
        Evaluator {
            line: String::new(),
            current: String::new(),
        }
    }

    /// Evaluates one full expression. The whole input must be consumed;
    /// anything left over after the top-level expression is an error.
    pub fn parse(&mut self, expr: &str) -> Result<Value, SyntaxError> {
        self.line = expr.to_string();
        self.current.clear();

        let result = self.exp()?;
        match self.line.chars().next() {
            None => Ok(result),
            Some(c) => Err(SyntaxError(format!(
                "Unexpected character after expression: '{}'",
                c
            ))),
        }
    }

    // exp ::= term [ [ '+' | '-' ] term ]*
    fn exp(&mut self) -> Result<Value, SyntaxError> {
        let mut result = self.term()?;

        while self.is_next(&Pattern::AnyOf(&['+', '-'])) {
            if self.current == "+" {
                result = result + self.term()?;
            } else {
                result = result - self.term()?;
            }
        }
        Ok(result)
    }

    // term ::= factor [ [ '*' | '/' ] factor ]*
    fn term(&mut self) -> Result<Value, SyntaxError> {
        let mut result = self.factor()?;

        while self.is_next(&Pattern::AnyOf(&['*', '/'])) {
            if self.current == "*" {
                result = result * self.factor()?;
            } else {
                result = result / self.factor()?;
            }
        }
        Ok(result)
    }

    // factor ::= <number> | '-' factor | '(' exp ')'
    fn factor(&mut self) -> Result<Value, SyntaxError> {
        if self.is_next(&Pattern::Number) {
            return Ok(self.number_value());
        }
        if self.is_next(&Pattern::Char('-')) {
            return Ok(-self.factor()?);
        }
        if self.is_next(&Pattern::Char('(')) {
            let result = self.exp()?;
            if !self.is_next(&Pattern::Char(')')) {
                return Err(SyntaxError(format!(
                    "Expected ')' but got '{}'",
                    self.lookahead()
                )));
            }
            return Ok(result);
        }
        Err(SyntaxError(format!(
            "Expected number or '(' but got '{}'",
            self.lookahead()
        )))
    }

    /// Tries to match `pattern` at the front of the remaining line, skipping
    /// leading whitespace. On a match the token text lands in `self.current`
    /// and the line advances past the token and any trailing whitespace. On
    /// failure nothing is consumed. This is the only place characters leave
    /// the line.
    fn is_next(&mut self, pattern: &Pattern) -> bool {
        let rest = self.line.trim_start();

        let len = match pattern {
            Pattern::Char(expected) => {
                if rest.starts_with(*expected) {
                    expected.len_utf8()
                } else {
                    return false;
                }
            }
            Pattern::AnyOf(set) => match rest.chars().next() {
                Some(c) if set.contains(&c) => c.len_utf8(),
                _ => return false,
            },
            Pattern::Number => match number_prefix(rest) {
                Some(len) => len,
                None => return false,
            },
        };

        self.current = rest[..len].to_string();
        let remaining = rest[len..].trim_start().len();
        let consumed = self.line.len() - remaining;
        self.line.drain(..consumed);
        true
    }

    /// Converts the just-matched number token. A token without a decimal
    /// point is an integer; digits that overflow i64 still evaluate, as a
    /// float.
    fn number_value(&self) -> Value {
        if self.current.contains('.') {
            Value::Float(self.current.parse().unwrap_or(f64::NAN))
        } else {
            match self.current.parse::<i64>() {
                Ok(n) => Value::Int(n),
                Err(_) => Value::Float(self.current.parse().unwrap_or(f64::NAN)),
            }
        }
    }

    fn lookahead(&self) -> String {
        match self.line.chars().next() {
            Some(c) => c.to_string(),
            None => "<EOL>".to_string(),
        }
    }
}

/// Byte length of a leading numeric literal: zero or more digits, an
/// optional decimal point, then at least one digit. `.5` matches, a bare
/// `.` does not, and `5.` matches only the `5`.
fn number_prefix(s: &str) -> Option<usize> {
    let bytes = s.as_bytes();
    let int_len = bytes.iter().take_while(|b| b.is_ascii_digit()).count();

    if bytes.get(int_len) == Some(&b'.') {
        let frac_len = bytes[int_len + 1..]
            .iter()
            .take_while(|b| b.is_ascii_digit())
            .count();
        if frac_len > 0 {
            return Some(int_len + 1 + frac_len);
        }
    }

    if int_len > 0 {
        Some(int_len)
    } else {
        None
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parse(line: &str) -> Result<Value, SyntaxError> {
        Evaluator::new().parse(line)
    }

    #[test]
    fn number_prefix_shapes() {
        assert_eq!(Some(2), number_prefix("42"));
        assert_eq!(Some(3), number_prefix("007"));
        assert_eq!(Some(2), number_prefix(".5"));
        assert_eq!(Some(3), number_prefix("0.1"));
        assert_eq!(Some(5), number_prefix("000.1"));
        // the trailing dot is not part of the literal
        assert_eq!(Some(1), number_prefix("5."));
        assert_eq!(None, number_prefix("."));
        assert_eq!(None, number_prefix(""));
        assert_eq!(None, number_prefix("abc"));
    }

    #[test]
    fn match_failure_consumes_nothing() {
        let mut calc = Evaluator::new();
        calc.line = "  abc".to_string();
        assert!(!calc.is_next(&Pattern::Number));
        assert!(!calc.is_next(&Pattern::Char('(')));
        assert_eq!("  abc", calc.line);
        assert_eq!("", calc.current);
    }

    #[test]
    fn match_success_strips_surrounding_whitespace() {
        let mut calc = Evaluator::new();
        calc.line = "  12  + 3".to_string();
        assert!(calc.is_next(&Pattern::Number));
        assert_eq!("12", calc.current);
        assert_eq!("+ 3", calc.line);
    }

    #[test]
    fn integer_arithmetic_stays_integer() {
        let tests = [
            (2, "1+1"),
            (3, "1+1+1"),
            (0, "1-1"),
            (-1, "1-1-1"),
            (-1, "-1"),
            (1, "--1"),
            (4, "--1--1--1--1"),
            (10, "------------10"),
            (7, "1+2*3"),
            (7, "3*2+1"),
            (27, "3*3*3"),
            (9, "(1+2)*3"),
            (42, "42"),
            (3, "1 + 2"),
            (3, "  1 + 2"),
            (3, "  1 + 2   "),
            (1, "(((((1)))))"),
            (8, "(1-(2-3))*4"),
        ];
        for (expected, line) in tests {
            assert_eq!(Ok(Value::Int(expected)), parse(line), "input: {:?}", line);
        }
    }

    #[test]
    fn division_always_floats() {
        assert_eq!(Ok(Value::Float(3.0)), parse("3*3/3"));
        assert_eq!(Ok(Value::Float(1.0)), parse("27/3/3/3"));
        assert_eq!(Ok(Value::Float(2.0)), parse("4/2"));
    }

    #[test]
    fn float_literals_promote() {
        assert_eq!(Ok(Value::Float(4.0)), parse("2+2.0"));
        assert_eq!(Ok(Value::Float(0.5)), parse(".5"));
        assert_eq!(Ok(Value::Float(-0.5)), parse("-.5"));
        assert_eq!(Ok(Value::Float(6.0)), parse("2.0*3"));
    }

    #[test]
    fn division_by_zero_is_nan() {
        for line in ["1/0", "-1/0", "0/0", "1/0.0", "1/(2-2)"] {
            let value = parse(line).unwrap();
            assert!(value.is_nan(), "input: {:?} gave {:?}", line, value);
        }
    }

    #[test]
    fn error_messages_name_the_culprit() {
        // the '+' itself is consumed by the repetition, so the factor level
        // reports the end of line
        assert_eq!(
            Err(SyntaxError(
                "Expected number or '(' but got '<EOL>'".to_string()
            )),
            parse("1+1+")
        );
        assert_eq!(
            Err(SyntaxError(
                "Unexpected character after expression: ')'".to_string()
            )),
            parse("1+2)")
        );
        assert_eq!(
            Err(SyntaxError(
                "Unexpected character after expression: 'a'".to_string()
            )),
            parse("1a")
        );
        assert_eq!(
            Err(SyntaxError("Expected ')' but got '<EOL>'".to_string())),
            parse("(1+2")
        );
        assert_eq!(
            Err(SyntaxError("Expected ')' but got 'a'".to_string())),
            parse("(42a")
        );
        assert_eq!(
            Err(SyntaxError(
                "Expected number or '(' but got '<EOL>'".to_string()
            )),
            parse("")
        );
        assert_eq!(
            Err(SyntaxError(
                "Expected number or '(' but got 'a'".to_string()
            )),
            parse("abc")
        );
    }

    #[test]
    fn malformed_input_is_rejected() {
        for line in ["abc", "(42a", "1+a", "1a", "(1", "", "   ", "."] {
            assert!(parse(line).is_err(), "input: {:?}", line);
        }
    }

    #[test]
    fn state_resets_between_calls() {
        let mut calc = Evaluator::new();
        assert!(calc.parse("(1").is_err());
        assert_eq!(Ok(Value::Int(3)), calc.parse("1+2"));
        assert_eq!(Ok(Value::Int(3)), calc.parse("1+2"));
    }

    #[test]
    fn display_round_trips_the_numeric_kind() {
        assert_eq!("4", Value::Int(4).to_string());
        assert_eq!("4.0", Value::Float(4.0).to_string());
        assert_eq!("-0.5", Value::Float(-0.5).to_string());
        assert_eq!("NaN", Value::Float(f64::NAN).to_string());
    }

    #[test]
    fn huge_integer_literals_fall_back_to_float() {
        match parse("99999999999999999999999999") {
            Ok(Value::Float(x)) => assert!(x > 9.9e25),
            other => panic!("expected float fallback, got {:?}", other),
        }
    }
}
