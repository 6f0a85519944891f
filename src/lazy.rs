use crate::cursor::Cursor;
use crate::error::ParseResult;
use crate::parser::Parser;

/// A lazy parser that defers the construction of the actual parser until parse time.
/// This is useful for breaking recursion between parsers.
pub struct Lazy<F> {
    factory: F,
}

impl<F> Lazy<F> {
    /// Create a new lazy parser with the given factory function
    pub fn new(factory: F) -> Self {
        Self { factory }
    }
}

impl<'code, F, P> Parser<'code> for Lazy<F>
where
    F: Fn() -> P,
    P: Parser<'code>,
{
    type Output = P::Output;

    fn parse(&self, cursor: Cursor<'code>) -> ParseResult<'code, Self::Output> {
        let parser = (self.factory)();
        parser.parse(cursor)
    }
}

/// Create a lazy parser from a factory function
pub fn lazy<'code, F, P>(factory: F) -> Lazy<F>
where
    F: Fn() -> P,
    P: Parser<'code>,
{
    Lazy::new(factory)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::literal::literal;
    use crate::map::MapExt;
    use crate::one_of;
    use crate::parser::BoxedParser;
    use crate::sequence::{SequenceExt, apply, start_skipping};
    use crate::succeed::succeed;

    /// Nesting depth of balanced parentheses: "" | "(" nested ")"
    fn nested<'code>() -> BoxedParser<'code, usize> {
        let deeper = start_skipping(literal("("))
            .keep(lazy(nested))
            .skip(literal(")"));
        BoxedParser::new(one_of![apply(deeper, |depth| depth + 1), succeed(0)])
    }

    #[test]
    fn test_lazy_basic() {
        let parser = lazy(|| literal("a").map(|()| 'a'));

        let (output, cursor) = parser.parse(Cursor::new("aaaa")).unwrap();
        assert_eq!(output, 'a');
        assert_eq!(cursor.offset(), 1);
    }

    #[test]
    fn test_lazy_recursive_grammar() {
        let parser = nested();

        let (depth, cursor) = parser.parse(Cursor::new("((()))")).unwrap();
        assert_eq!(depth, 3);
        assert!(cursor.is_at_end());

        let (depth, cursor) = parser.parse(Cursor::new("(()")).unwrap();
        assert_eq!(depth, 0);
        assert_eq!(cursor.offset(), 0);
    }
}
