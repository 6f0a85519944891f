use crate::cursor::Cursor;
use crate::error::{Failure, ParseResult};
use crate::parser::Parser;

/// Parser combinator that tries each alternative in order from the same
/// position and returns the first success.
///
/// If every alternative fails the last failure is returned; an empty list
/// fails with `NoMatch`. Nothing consumed by a failed alternative is seen by
/// the next one. There is no commit point, so deeply ambiguous grammars can
/// re-parse the same input many times.
pub struct OneOf<P> {
    parsers: Vec<P>,
}

impl<P> OneOf<P> {
    pub fn new(parsers: Vec<P>) -> Self {
        OneOf { parsers }
    }
}

impl<'code, P> Parser<'code> for OneOf<P>
where
    P: Parser<'code>,
{
    type Output = P::Output;

    fn parse(&self, cursor: Cursor<'code>) -> ParseResult<'code, Self::Output> {
        let mut failure = Failure::NoMatch;
        for parser in &self.parsers {
            match parser.parse(cursor) {
                Ok(result) => return Ok(result),
                Err(error) => failure = error,
            }
        }
        Err(failure)
    }
}

/// Creates a parser trying `parsers` in order.
///
/// All alternatives must have the same type; use [`one_of!`](crate::one_of!)
/// to mix different parser types with a common output.
pub fn one_of<'code, P, I>(parsers: I) -> OneOf<P>
where
    I: IntoIterator<Item = P>,
    P: Parser<'code>,
{
    OneOf::new(parsers.into_iter().collect())
}

/// Builds a [`OneOf`] from differently-typed parsers by boxing each one.
///
/// ```
/// use seqcomb::{Parser, Cursor, one_of};
/// use seqcomb::literal::literal;
/// use seqcomb::map::MapExt;
/// use seqcomb::succeed::succeed;
///
/// let parser = one_of![literal("yes").map(|()| true), succeed(false)];
/// let (value, _) = parser.parse(Cursor::new("yes")).unwrap();
/// assert!(value);
/// ```
#[macro_export]
macro_rules! one_of {
    ($($parser:expr),+ $(,)?) => {
        $crate::one_of::OneOf::new(::std::vec![
            $($crate::parser::BoxedParser::new($parser)),+
        ])
    };
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::literal::literal;
    use crate::map::MapExt;
    use crate::satisfy::satisfy;
    use crate::sequence::{SequenceExt, start_skipping};
    use crate::succeed::{fail, succeed};

    #[test]
    fn test_first_listed_wins() {
        let parser = one_of![
            literal("a").map(|()| "first"),
            satisfy(|c| c == 'a').map(|_| "second"),
            succeed("third"),
        ];

        let (value, cursor) = parser.parse(Cursor::new("a")).unwrap();
        assert_eq!(value, "first");
        assert!(cursor.is_at_end());
    }

    #[test]
    fn test_later_alternative_matches() {
        let parser = one_of([literal("let"), literal("fn"), literal("if")]);

        let ((), cursor) = parser.parse(Cursor::new("if x")).unwrap();
        assert_eq!(cursor.remainder(), " x");
    }

    #[test]
    fn test_all_fail() {
        let parser = one_of([literal("a"), literal("b")]);
        assert_eq!(parser.parse(Cursor::new("c")), Err(Failure::NoMatch));
    }

    #[test]
    fn test_empty_list_fails() {
        let parser = one_of(Vec::<crate::succeed::Fail<()>>::new());
        assert_eq!(parser.parse(Cursor::new("")), Err(Failure::NoMatch));
    }

    #[test]
    fn test_failed_alternative_does_not_leak() {
        let parser = one_of![
            start_skipping(literal("ab")).skip(literal("x")).map(|()| 1),
            start_skipping(literal("a")).skip(literal("bc")).map(|()| 2),
            fail(),
        ];

        let (value, cursor) = parser.parse(Cursor::new("abc")).unwrap();
        assert_eq!(value, 2);
        assert!(cursor.is_at_end());
    }
}
