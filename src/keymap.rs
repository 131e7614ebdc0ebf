//! Key mapping for typed input.
//!
//! Translates a line of typed keys into calculator tokens. Anything that is
//! not a recognised key is rejected here so it never reaches the engine.

use crate::calculator::{MemoryOp, Operator, Token};
use lazy_static::lazy_static;
use regex::Regex;

lazy_static! {
    /// Matches a single key at the start of the input.
    /// Multi-character keys come first so `M+` is not read as `M` then `+`.
    static ref KEY: Regex = Regex::new(
        r"(?i)^(?:MC|MR|MS|M\+|M-|AC|BS|DEL|C|[0-9]|[.,]|[+\-*/x×÷]|=|<)"
    ).unwrap();
}

/// Result of mapping a line of keys.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct KeyParse {
    /// Recognised tokens, in input order.
    pub tokens: Vec<Token>,
    /// Characters that did not map to any key.
    pub rejected: Vec<char>,
}

/// Map typed keys to tokens. Whitespace separates nothing and is ignored.
pub fn parse_keys(input: &str) -> KeyParse {
    let mut parsed = KeyParse::default();
    let mut rest = input;

    loop {
        rest = rest.trim_start();
        let Some(first) = rest.chars().next() else {
            break;
        };

        match KEY.find(rest).and_then(|m| Some((key_token(m.as_str())?, m.end()))) {
            Some((token, end)) => {
                parsed.tokens.push(token);
                rest = &rest[end..];
            }
            None => {
                parsed.rejected.push(first);
                rest = &rest[first.len_utf8()..];
            }
        }
    }

    parsed
}

/// Map one key label to its token.
fn key_token(key: &str) -> Option<Token> {
    let token = match key.to_ascii_uppercase().as_str() {
        "MC" => Token::Memory(MemoryOp::Clear),
        "MR" => Token::Memory(MemoryOp::Recall),
        "MS" => Token::Memory(MemoryOp::Store),
        "M+" => Token::Memory(MemoryOp::Add),
        "M-" => Token::Memory(MemoryOp::Subtract),
        "AC" | "C" => Token::AllClear,
        "BS" | "DEL" | "<" => Token::Backspace,
        "." | "," => Token::Decimal,
        "=" => Token::Equals,
        "X" | "×" => Token::Operator(Operator::Multiply),
        "÷" => Token::Operator(Operator::Divide),
        other => {
            let c = other.chars().next()?;
            if let Some(digit) = c.to_digit(10) {
                return Token::digit(digit as u8);
            }
            Token::Operator(Operator::from_symbol(c)?)
        }
    };
    Some(token)
}

#[cfg(test)]
mod tests {
    use super::*;

    const ADD: Token = Token::Operator(Operator::Add);

    #[test]
    fn test_digits_and_operators() {
        let parsed = parse_keys("12.5 + 3 =");
        assert_eq!(
            parsed.tokens,
            vec![
                Token::Digit(1),
                Token::Digit(2),
                Token::Decimal,
                Token::Digit(5),
                ADD,
                Token::Digit(3),
                Token::Equals,
            ]
        );
        assert!(parsed.rejected.is_empty());
    }

    #[test]
    fn test_operator_aliases() {
        let parsed = parse_keys("x X × ÷ / * -");
        assert_eq!(
            parsed.tokens,
            vec![
                Token::Operator(Operator::Multiply),
                Token::Operator(Operator::Multiply),
                Token::Operator(Operator::Multiply),
                Token::Operator(Operator::Divide),
                Token::Operator(Operator::Divide),
                Token::Operator(Operator::Multiply),
                Token::Operator(Operator::Subtract),
            ]
        );
    }

    #[test]
    fn test_memory_keys() {
        let parsed = parse_keys("ms mr MC m+ M-");
        assert_eq!(
            parsed.tokens,
            vec![
                Token::Memory(MemoryOp::Store),
                Token::Memory(MemoryOp::Recall),
                Token::Memory(MemoryOp::Clear),
                Token::Memory(MemoryOp::Add),
                Token::Memory(MemoryOp::Subtract),
            ]
        );
    }

    #[test]
    fn test_clear_and_backspace() {
        let parsed = parse_keys("AC c < bs DEL");
        assert_eq!(
            parsed.tokens,
            vec![
                Token::AllClear,
                Token::AllClear,
                Token::Backspace,
                Token::Backspace,
                Token::Backspace,
            ]
        );
    }

    #[test]
    fn test_comma_is_decimal() {
        assert_eq!(parse_keys("1,5").tokens[1], Token::Decimal);
    }

    #[test]
    fn test_unknown_keys_rejected() {
        let parsed = parse_keys("2 % 3 ^ hé");
        assert_eq!(parsed.tokens, vec![Token::Digit(2), Token::Digit(3)]);
        assert_eq!(parsed.rejected, vec!['%', '^', 'h', 'é']);
    }

    #[test]
    fn test_empty_input() {
        assert_eq!(parse_keys("   "), KeyParse::default());
    }
}
