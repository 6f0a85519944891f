use crate::cursor::Cursor;
use crate::error::ParseResult;
use crate::parser::Parser;

/// Parser combinator that runs a parser, builds a second parser from its
/// result, and runs that from where the first one stopped.
///
/// A failure in either step fails the whole combination; nothing consumed by
/// the first parser survives it.
pub struct AndThen<P, F> {
    parser: P,
    continuation: F,
}

impl<P, F> AndThen<P, F> {
    pub fn new(parser: P, continuation: F) -> Self {
        AndThen {
            parser,
            continuation,
        }
    }
}

impl<'code, P, F, Q> Parser<'code> for AndThen<P, F>
where
    P: Parser<'code>,
    F: Fn(P::Output) -> Q,
    Q: Parser<'code>,
{
    type Output = Q::Output;

    fn parse(&self, cursor: Cursor<'code>) -> ParseResult<'code, Self::Output> {
        let (value, cursor) = self.parser.parse(cursor)?;
        (self.continuation)(value).parse(cursor)
    }
}

/// Convenience function to create an AndThen parser
pub fn and_then<'code, P, F, Q>(parser: P, continuation: F) -> AndThen<P, F>
where
    P: Parser<'code>,
    F: Fn(P::Output) -> Q,
    Q: Parser<'code>,
{
    AndThen::new(parser, continuation)
}

/// Extension trait to add .and_then() method support for parsers
pub trait AndThenExt<'code>: Parser<'code> + Sized {
    fn and_then<F, Q>(self, continuation: F) -> AndThen<Self, F>
    where
        F: Fn(Self::Output) -> Q,
        Q: Parser<'code>,
    {
        AndThen::new(self, continuation)
    }
}

impl<'code, P> AndThenExt<'code> for P where P: Parser<'code> {}
