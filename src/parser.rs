use crate::cursor::Cursor;
use crate::error::ParseResult;
use std::sync::Arc;

/// Core parser trait for parser combinators
pub trait Parser<'code> {
    type Output;

    /// Attempt to parse from the given cursor position
    ///
    /// Returns the parsed value and the advanced cursor on success. A failure
    /// carries no cursor: the caller still holds the one it passed in, which
    /// is where parsing resumes after backtracking.
    fn parse(&self, cursor: Cursor<'code>) -> ParseResult<'code, Self::Output>;
}

impl<'code, P> Parser<'code> for &P
where
    P: Parser<'code> + ?Sized,
{
    type Output = P::Output;

    fn parse(&self, cursor: Cursor<'code>) -> ParseResult<'code, Self::Output> {
        (**self).parse(cursor)
    }
}

/// A type-erased, cheaply clonable parser.
///
/// Useful wherever differently-typed parsers need to share one type, such as
/// the alternatives of [`one_of`](crate::one_of::one_of) or the parsers
/// returned by an [`iterate`](crate::iterate::iterate) stepper.
pub struct BoxedParser<'code, T> {
    parser: Arc<dyn Parser<'code, Output = T> + Send + Sync + 'code>,
}

impl<'code, T> BoxedParser<'code, T> {
    pub fn new<P>(parser: P) -> Self
    where
        P: Parser<'code, Output = T> + Send + Sync + 'code,
    {
        BoxedParser {
            parser: Arc::new(parser),
        }
    }
}

impl<T> Clone for BoxedParser<'_, T> {
    fn clone(&self) -> Self {
        BoxedParser {
            parser: Arc::clone(&self.parser),
        }
    }
}

impl<'code, T> Parser<'code> for BoxedParser<'code, T> {
    type Output = T;

    fn parse(&self, cursor: Cursor<'code>) -> ParseResult<'code, T> {
        self.parser.parse(cursor)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::literal::literal;
    use crate::map::MapExt;

    #[test]
    fn test_reference_is_a_parser() {
        let parser = literal("ab");
        let by_ref = &parser;

        let ((), cursor) = by_ref.parse(Cursor::new("abc")).unwrap();
        assert_eq!(cursor.remainder(), "c");
    }

    #[test]
    fn test_boxed_parser_clones_share_behavior() {
        let parser = BoxedParser::new(literal("yes").map(|()| true));
        let copy = parser.clone();

        let (first, _) = parser.parse(Cursor::new("yes")).unwrap();
        let (second, _) = copy.parse(Cursor::new("yes")).unwrap();
        assert!(first);
        assert!(second);
        assert!(copy.parse(Cursor::new("no")).is_err());
    }

    #[test]
    fn test_dyn_parser() {
        let parsers: Vec<Box<dyn Parser<'_, Output = ()>>> =
            vec![Box::new(literal("a")), Box::new(literal("b"))];

        let cursor = Cursor::new("ab");
        let ((), cursor) = parsers[0].as_ref().parse(cursor).unwrap();
        let ((), cursor) = parsers[1].as_ref().parse(cursor).unwrap();
        assert!(cursor.is_at_end());
    }
}
