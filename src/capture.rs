use crate::cursor::Cursor;
use crate::error::ParseResult;
use crate::parser::Parser;
use crate::position::Span;

/// Parser combinator that returns the slice of input matched by a parser
/// instead of the parser's own value
pub struct Capture<P> {
    parser: P,
}

impl<P> Capture<P> {
    pub fn new(parser: P) -> Self {
        Capture { parser }
    }
}

impl<'code, P> Parser<'code> for Capture<P>
where
    P: Parser<'code>,
{
    type Output = &'code str;

    fn parse(&self, cursor: Cursor<'code>) -> ParseResult<'code, &'code str> {
        let (_, next) = self.parser.parse(cursor)?;
        Ok((Span::between(cursor, next).as_str(), next))
    }
}

/// Convenience function to create a Capture parser
pub fn capture<P>(parser: P) -> Capture<P> {
    Capture::new(parser)
}
