//! Sequencing parsers while choosing which results to keep.
//!
//! A sequence is a chain of parsers whose kept results accumulate in a
//! right-nested tuple anchored at `()`:
//!
//! | kept values | output type             |
//! |-------------|-------------------------|
//! | 0           | `()`                    |
//! | 1           | `((), A)`               |
//! | 2           | `(((), A), B)`          |
//! | 3           | `((((), A), B), C)`     |
//!
//! Skipped steps (punctuation, whitespace) must still match but leave the
//! tuple unchanged. The `apply` family unpacks a finished tuple into a
//! combiner function, one function per arity:
//!
//! ```
//! use seqcomb::{Cursor, Parser};
//! use seqcomb::literal::literal;
//! use seqcomb::satisfy::satisfy;
//! use seqcomb::sequence::{SequenceExt, apply2, start_keeping};
//!
//! let pair = start_keeping(satisfy(|c| c.is_ascii_digit()))
//!     .skip(literal(","))
//!     .keep(satisfy(|c| c.is_ascii_digit()));
//! let parser = apply2(pair, |a, b| format!("{b}{a}"));
//!
//! let (swapped, _) = parser.parse(Cursor::new("1,2")).unwrap();
//! assert_eq!(swapped, "21");
//! ```

use crate::cursor::Cursor;
use crate::error::ParseResult;
use crate::map::Map;
use crate::parser::Parser;

/// Starts a sequence holding the result of `parser`
pub struct StartKeeping<P> {
    parser: P,
}

impl<'code, P> Parser<'code> for StartKeeping<P>
where
    P: Parser<'code>,
{
    type Output = ((), P::Output);

    fn parse(&self, cursor: Cursor<'code>) -> ParseResult<'code, Self::Output> {
        let (value, cursor) = self.parser.parse(cursor)?;
        Ok((((), value), cursor))
    }
}

pub fn start_keeping<'code, P>(parser: P) -> StartKeeping<P>
where
    P: Parser<'code>,
{
    StartKeeping { parser }
}

/// Starts an empty sequence that still requires `parser` to match
pub struct StartSkipping<P> {
    parser: P,
}

impl<'code, P> Parser<'code> for StartSkipping<P>
where
    P: Parser<'code>,
{
    type Output = ();

    fn parse(&self, cursor: Cursor<'code>) -> ParseResult<'code, ()> {
        let (_, cursor) = self.parser.parse(cursor)?;
        Ok(((), cursor))
    }
}

pub fn start_skipping<'code, P>(parser: P) -> StartSkipping<P>
where
    P: Parser<'code>,
{
    StartSkipping { parser }
}

/// Runs a sequence then one more parser, adding its result to the sequence
pub struct AppendKeeping<S, P> {
    sequence: S,
    parser: P,
}

impl<'code, S, P> Parser<'code> for AppendKeeping<S, P>
where
    S: Parser<'code>,
    P: Parser<'code>,
{
    type Output = (S::Output, P::Output);

    fn parse(&self, cursor: Cursor<'code>) -> ParseResult<'code, Self::Output> {
        let (kept, cursor) = self.sequence.parse(cursor)?;
        let (value, cursor) = self.parser.parse(cursor)?;
        Ok(((kept, value), cursor))
    }
}

pub fn append_keeping<'code, S, P>(sequence: S, parser: P) -> AppendKeeping<S, P>
where
    S: Parser<'code>,
    P: Parser<'code>,
{
    AppendKeeping { sequence, parser }
}

/// Runs a sequence then one more parser whose result is discarded
pub struct AppendSkipping<S, P> {
    sequence: S,
    parser: P,
}

impl<'code, S, P> Parser<'code> for AppendSkipping<S, P>
where
    S: Parser<'code>,
    P: Parser<'code>,
{
    type Output = S::Output;

    fn parse(&self, cursor: Cursor<'code>) -> ParseResult<'code, Self::Output> {
        let (kept, cursor) = self.sequence.parse(cursor)?;
        let (_, cursor) = self.parser.parse(cursor)?;
        Ok((kept, cursor))
    }
}

pub fn append_skipping<'code, S, P>(sequence: S, parser: P) -> AppendSkipping<S, P>
where
    S: Parser<'code>,
    P: Parser<'code>,
{
    AppendSkipping { sequence, parser }
}

/// Extension trait to add .keep() and .skip() method support for sequences
pub trait SequenceExt<'code>: Parser<'code> + Sized {
    fn keep<P>(self, parser: P) -> AppendKeeping<Self, P>
    where
        P: Parser<'code>,
    {
        append_keeping(self, parser)
    }

    fn skip<P>(self, parser: P) -> AppendSkipping<Self, P>
    where
        P: Parser<'code>,
    {
        append_skipping(self, parser)
    }
}

impl<'code, S> SequenceExt<'code> for S where S: Parser<'code> {}

/// Finishes a one-value sequence
pub fn apply<'code, S, A, F, R>(sequence: S, combiner: F) -> impl Parser<'code, Output = R>
where
    S: Parser<'code, Output = ((), A)>,
    F: Fn(A) -> R,
{
    Map::new(sequence, move |((), a): ((), A)| combiner(a))
}

/// Finishes a two-value sequence
pub fn apply2<'code, S, A, B, F, R>(
    sequence: S,
    combiner: F,
) -> impl Parser<'code, Output = R>
where
    S: Parser<'code, Output = (((), A), B)>,
    F: Fn(A, B) -> R,
{
    Map::new(sequence, move |(((), a), b): (((), A), B)| combiner(a, b))
}

/// Finishes a three-value sequence
pub fn apply3<'code, S, A, B, C, F, R>(
    sequence: S,
    combiner: F,
) -> impl Parser<'code, Output = R>
where
    S: Parser<'code, Output = ((((), A), B), C)>,
    F: Fn(A, B, C) -> R,
{
    Map::new(sequence, move |((((), a), b), c): ((((), A), B), C)| {
        combiner(a, b, c)
    })
}

/// Finishes a four-value sequence
pub fn apply4<'code, S, A, B, C, D, F, R>(
    sequence: S,
    combiner: F,
) -> impl Parser<'code, Output = R>
where
    S: Parser<'code, Output = (((((), A), B), C), D)>,
    F: Fn(A, B, C, D) -> R,
{
    Map::new(
        sequence,
        move |(((((), a), b), c), d): (((((), A), B), C), D)| combiner(a, b, c, d),
    )
}

/// Finishes a five-value sequence
pub fn apply5<'code, S, A, B, C, D, E, F, R>(
    sequence: S,
    combiner: F,
) -> impl Parser<'code, Output = R>
where
    S: Parser<'code, Output = ((((((), A), B), C), D), E)>,
    F: Fn(A, B, C, D, E) -> R,
{
    Map::new(
        sequence,
        move |((((((), a), b), c), d), e): ((((((), A), B), C), D), E)| combiner(a, b, c, d, e),
    )
}

/// Finishes a six-value sequence
pub fn apply6<'code, S, A, B, C, D, E, G, F, R>(
    sequence: S,
    combiner: F,
) -> impl Parser<'code, Output = R>
where
    S: Parser<'code, Output = (((((((), A), B), C), D), E), G)>,
    F: Fn(A, B, C, D, E, G) -> R,
{
    Map::new(
        sequence,
        move |(((((((), a), b), c), d), e), g): (((((((), A), B), C), D), E), G)| {
            combiner(a, b, c, d, e, g)
        },
    )
}
