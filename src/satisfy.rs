use crate::cursor::Cursor;
use crate::error::{Failure, ParseResult};
use crate::parser::Parser;
use crate::sequence::{SequenceExt, start_skipping};

/// Parser that consumes a single code point if it satisfies a predicate
pub struct Satisfy<F> {
    predicate: F,
}

impl<F> Satisfy<F> {
    pub fn new(predicate: F) -> Self {
        Satisfy { predicate }
    }
}

impl<'code, F> Parser<'code> for Satisfy<F>
where
    F: Fn(char) -> bool,
{
    type Output = char;

    fn parse(&self, cursor: Cursor<'code>) -> ParseResult<'code, char> {
        match cursor.next_char() {
            Some((ch, next)) if (self.predicate)(ch) => Ok((ch, next)),
            _ => Err(Failure::NoMatch),
        }
    }
}

/// Matches one code point for which `predicate` holds
pub fn satisfy<F>(predicate: F) -> Satisfy<F>
where
    F: Fn(char) -> bool,
{
    Satisfy::new(predicate)
}

/// Parser that greedily consumes code points while a predicate holds.
/// Never fails.
pub struct ZeroOrMore<F> {
    predicate: F,
}

impl<F> ZeroOrMore<F> {
    pub fn new(predicate: F) -> Self {
        ZeroOrMore { predicate }
    }
}

impl<'code, F> Parser<'code> for ZeroOrMore<F>
where
    F: Fn(char) -> bool,
{
    type Output = ();

    fn parse(&self, mut cursor: Cursor<'code>) -> ParseResult<'code, ()> {
        while let Some((ch, next)) = cursor.next_char() {
            if !(self.predicate)(ch) {
                break;
            }
            cursor = next;
        }
        Ok(((), cursor))
    }
}

pub fn zero_or_more<F>(predicate: F) -> ZeroOrMore<F>
where
    F: Fn(char) -> bool,
{
    ZeroOrMore::new(predicate)
}

/// Parser that consumes at least one code point satisfying a predicate, then
/// as many more as it can.
pub struct OneOrMore<F> {
    predicate: F,
}

impl<F> OneOrMore<F> {
    pub fn new(predicate: F) -> Self {
        OneOrMore { predicate }
    }
}

impl<'code, F> Parser<'code> for OneOrMore<F>
where
    F: Fn(char) -> bool,
{
    type Output = ();

    fn parse(&self, cursor: Cursor<'code>) -> ParseResult<'code, ()> {
        start_skipping(satisfy(&self.predicate))
            .skip(zero_or_more(&self.predicate))
            .parse(cursor)
    }
}

pub fn one_or_more<F>(predicate: F) -> OneOrMore<F>
where
    F: Fn(char) -> bool,
{
    OneOrMore::new(predicate)
}
