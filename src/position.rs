use crate::cursor::Cursor;
use crate::error::ParseResult;
use crate::parser::Parser;

/// Represents a span in the source text with start and end byte offsets
/// and a reference to the source
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Span<'code> {
    /// Reference to the source text
    pub source: &'code str,
    /// Start offset (inclusive)
    pub start: usize,
    /// End offset (exclusive)
    pub end: usize,
}

impl<'code> Span<'code> {
    pub fn new(source: &'code str, start: usize, end: usize) -> Self {
        Span { source, start, end }
    }

    /// Span covering everything between two cursors into the same input
    pub fn between(start: Cursor<'code>, end: Cursor<'code>) -> Self {
        Span::new(start.source(), start.offset(), end.offset())
    }

    pub fn len(&self) -> usize {
        self.end - self.start
    }

    pub fn is_empty(&self) -> bool {
        self.start == self.end
    }

    /// The text this span covers
    pub fn as_str(&self) -> &'code str {
        &self.source[self.start..self.end]
    }
}

/// A parser combinator that captures the span of a successful parse
pub struct Spanned<P> {
    parser: P,
}

impl<P> Spanned<P> {
    pub fn new(parser: P) -> Self {
        Spanned { parser }
    }
}

impl<'code, P> Parser<'code> for Spanned<P>
where
    P: Parser<'code>,
{
    type Output = (P::Output, Span<'code>);

    fn parse(&self, cursor: Cursor<'code>) -> ParseResult<'code, Self::Output> {
        let (output, next) = self.parser.parse(cursor)?;
        Ok(((output, Span::between(cursor, next)), next))
    }
}

/// Extension trait to add span tracking to any parser
pub trait SpanExt<'code>: Parser<'code> + Sized {
    /// Wrap this parser to capture its span
    fn with_span(self) -> Spanned<Self> {
        Spanned::new(self)
    }
}

impl<'code, P> SpanExt<'code> for P where P: Parser<'code> {}

/// Convenience function to create a Spanned combinator
pub fn with_span<P>(parser: P) -> Spanned<P> {
    Spanned::new(parser)
}
