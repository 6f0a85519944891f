use crate::cursor::Cursor;
use crate::error::{Failure, ParseResult};
use crate::parser::Parser;
use std::borrow::Cow;

/// Parser that matches an exact token at the current position
pub struct Literal {
    token: Cow<'static, str>,
}

impl Literal {
    pub fn new(token: impl Into<Cow<'static, str>>) -> Self {
        Self {
            token: token.into(),
        }
    }
}

impl<'code> Parser<'code> for Literal {
    type Output = ();

    fn parse(&self, cursor: Cursor<'code>) -> ParseResult<'code, ()> {
        if cursor.remainder().starts_with(self.token.as_ref()) {
            Ok(((), cursor.advance(self.token.len())))
        } else {
            Err(Failure::NoMatch)
        }
    }
}

/// Convenience function to create a Literal parser
pub fn literal(token: impl Into<Cow<'static, str>>) -> Literal {
    Literal::new(token)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_exact_match() {
        let ((), cursor) = literal("hello").parse(Cursor::new("hello")).unwrap();
        assert!(cursor.is_at_end());
    }

    #[test]
    fn test_prefix_match_with_remaining() {
        let ((), cursor) = literal("hello").parse(Cursor::new("hello world")).unwrap();
        assert_eq!(cursor.remainder(), " world");
    }

    #[test]
    fn test_unicode_token() {
        let ((), cursor) = literal("こんにちは").parse(Cursor::new("こんにちは世界")).unwrap();
        assert_eq!(cursor.remainder(), "世界");
    }

    #[test]
    fn test_empty_token() {
        let cursor = Cursor::new("hello");
        let ((), after) = literal("").parse(cursor).unwrap();
        assert_eq!(after, cursor);
    }

    #[test]
    fn test_partial_match_fails() {
        assert_eq!(literal("hello").parse(Cursor::new("help")), Err(Failure::NoMatch));
        assert_eq!(literal("hello").parse(Cursor::new("hell")), Err(Failure::NoMatch));
    }

    #[test]
    fn test_owned_token() {
        let token = format!("{}{}", "fa", "lse");
        let ((), cursor) = literal(token).parse(Cursor::new("false]")).unwrap();
        assert_eq!(cursor.remainder(), "]");
    }
}
