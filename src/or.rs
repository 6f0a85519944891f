use crate::cursor::Cursor;
use crate::error::ParseResult;
use crate::parser::Parser;

/// Parser combinator that tries the first parser, and if it fails, tries the second parser
/// from the same starting position
pub struct Or<P1, P2> {
    parser1: P1,
    parser2: P2,
}

impl<P1, P2> Or<P1, P2> {
    pub fn new(parser1: P1, parser2: P2) -> Self {
        Or { parser1, parser2 }
    }
}

impl<'code, P1, P2, O> Parser<'code> for Or<P1, P2>
where
    P1: Parser<'code, Output = O>,
    P2: Parser<'code, Output = O>,
{
    type Output = O;

    fn parse(&self, cursor: Cursor<'code>) -> ParseResult<'code, O> {
        match self.parser1.parse(cursor) {
            Ok(result) => Ok(result),
            Err(_) => self.parser2.parse(cursor),
        }
    }
}

/// Extension trait to add .or() method support for parsers
pub trait OrExt<'code>: Parser<'code> + Sized {
    fn or<P>(self, other: P) -> Or<Self, P>
    where
        P: Parser<'code, Output = Self::Output>,
    {
        Or::new(self, other)
    }
}

impl<'code, P> OrExt<'code> for P where P: Parser<'code> {}

/// Convenience function to create an Or parser
pub fn or<'code, P1, P2, O>(parser1: P1, parser2: P2) -> Or<P1, P2>
where
    P1: Parser<'code, Output = O>,
    P2: Parser<'code, Output = O>,
{
    Or::new(parser1, parser2)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::Failure;
    use crate::literal::literal;
    use crate::map::MapExt;
    use crate::sequence::{SequenceExt, start_skipping};

    #[test]
    fn test_or_first_succeeds() {
        let parser = or(literal("a").map(|()| 'a'), literal("b").map(|()| 'b'));

        let (ch, cursor) = parser.parse(Cursor::new("abc")).unwrap();
        assert_eq!(ch, 'a');
        assert_eq!(cursor.remainder(), "bc");
    }

    #[test]
    fn test_or_second_succeeds() {
        let parser = literal("a").map(|()| 'a').or(literal("b").map(|()| 'b'));

        let (ch, cursor) = parser.parse(Cursor::new("bcd")).unwrap();
        assert_eq!(ch, 'b');
        assert_eq!(cursor.remainder(), "cd");
    }

    #[test]
    fn test_or_both_fail() {
        let parser = literal("a").or(literal("b"));
        assert_eq!(parser.parse(Cursor::new("xyz")), Err(Failure::NoMatch));
    }

    #[test]
    fn test_or_second_starts_from_original_position() {
        // The first branch consumes "ab" before failing on 'c'
        let first = start_skipping(literal("ab")).skip(literal("c"));
        let parser = first.or(literal("abd"));

        let ((), cursor) = parser.parse(Cursor::new("abd")).unwrap();
        assert!(cursor.is_at_end());
    }
}
