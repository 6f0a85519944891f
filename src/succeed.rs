use crate::cursor::Cursor;
use crate::error::{Failure, ParseResult};
use crate::parser::Parser;
use std::marker::PhantomData;

/// Parser that always succeeds with a clone of its value, consuming nothing
#[derive(Debug, Clone)]
pub struct Succeed<T> {
    value: T,
}

impl<T> Succeed<T> {
    pub fn new(value: T) -> Self {
        Succeed { value }
    }
}

impl<'code, T: Clone> Parser<'code> for Succeed<T> {
    type Output = T;

    fn parse(&self, cursor: Cursor<'code>) -> ParseResult<'code, T> {
        Ok((self.value.clone(), cursor))
    }
}

/// Convenience function to create a Succeed parser
pub fn succeed<T: Clone>(value: T) -> Succeed<T> {
    Succeed::new(value)
}

/// Parser that always fails with `NoMatch`
pub struct Fail<T> {
    _output: PhantomData<fn() -> T>,
}

impl<T> Fail<T> {
    pub fn new() -> Self {
        Fail {
            _output: PhantomData,
        }
    }
}

impl<T> Default for Fail<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> Clone for Fail<T> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<T> Copy for Fail<T> {}

impl<T> std::fmt::Debug for Fail<T> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str("Fail")
    }
}

impl<'code, T> Parser<'code> for Fail<T> {
    type Output = T;

    fn parse(&self, _cursor: Cursor<'code>) -> ParseResult<'code, T> {
        Err(Failure::NoMatch)
    }
}

/// Creates a parser producing `T` that never matches
pub fn fail<T>() -> Fail<T> {
    Fail::new()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_succeed_consumes_nothing() {
        let cursor = Cursor::new("abc");
        let (value, next) = succeed(42).parse(cursor).unwrap();
        assert_eq!(value, 42);
        assert_eq!(next, cursor);
    }

    #[test]
    fn test_succeed_is_reusable() {
        let parser = succeed(String::from("same"));
        for _ in 0..3 {
            let (value, _) = parser.parse(Cursor::new("")).unwrap();
            assert_eq!(value, "same");
        }
    }

    #[test]
    fn test_fail_always_fails() {
        let parser = fail::<u64>();
        assert_eq!(parser.parse(Cursor::new("")), Err(Failure::NoMatch));
        assert_eq!(parser.parse(Cursor::new("anything")), Err(Failure::NoMatch));
    }
}
