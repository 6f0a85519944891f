//! Stack-safe repetition.
//!
//! Expressing "more of the same" through self-referential
//! [`and_then`](crate::and_then::and_then) chains costs one stack frame per
//! repetition. [`iterate`] instead runs a plain loop: each round a stepper
//! turns the current accumulator into a single-step parser, and the
//! [`Step`] that parser yields decides whether to go around again.

use crate::cursor::Cursor;
use crate::error::ParseResult;
use crate::parser::Parser;

/// Outcome of one round of [`iterate`]
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Step<A, T> {
    /// Keep looping with this accumulator
    Continue(A),
    /// Stop and yield this result
    Done(T),
}

/// Parser that loops a stepper-built parser until it reports [`Step::Done`]
pub struct Iterate<A, F> {
    start: A,
    stepper: F,
}

impl<A, F> Iterate<A, F> {
    pub fn new(start: A, stepper: F) -> Self {
        Iterate { start, stepper }
    }
}

impl<'code, A, F, Q, T> Parser<'code> for Iterate<A, F>
where
    A: Clone,
    F: Fn(A) -> Q,
    Q: Parser<'code, Output = Step<A, T>>,
{
    type Output = T;

    fn parse(&self, mut cursor: Cursor<'code>) -> ParseResult<'code, T> {
        let mut accumulator = self.start.clone();
        loop {
            let step_parser = (self.stepper)(accumulator);
            // Any failure abandons every round so far
            let (step, next) = step_parser.parse(cursor)?;
            cursor = next;
            match step {
                Step::Continue(updated) => accumulator = updated,
                Step::Done(result) => return Ok((result, cursor)),
            }
        }
    }
}

/// Creates a parser that repeats `stepper`'s parsers starting from `start`.
///
/// ```
/// use seqcomb::{Cursor, Parser};
/// use seqcomb::iterate::{Step, iterate};
/// use seqcomb::literal::literal;
/// use seqcomb::map::MapExt;
/// use seqcomb::or::OrExt;
/// use seqcomb::succeed::succeed;
///
/// // Count the leading 'a' characters
/// let count = iterate(0usize, |n| {
///     literal("a")
///         .map(move |()| Step::Continue(n + 1))
///         .or(succeed(Step::Done(n)))
/// });
/// let (n, _) = count.parse(Cursor::new("aaab")).unwrap();
/// assert_eq!(n, 3);
/// ```
pub fn iterate<'code, A, F, Q, T>(start: A, stepper: F) -> Iterate<A, F>
where
    A: Clone,
    F: Fn(A) -> Q,
    Q: Parser<'code, Output = Step<A, T>>,
{
    Iterate::new(start, stepper)
}
