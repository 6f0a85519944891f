use crate::cursor::Cursor;

/// The ways a parse can fail.
///
/// Combinators only ever produce `NoMatch`; `UnconsumedInput` is reported by
/// the top-level [`parse`](crate::driver::parse) driver when a parser
/// succeeded without reaching the end of the input.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, thiserror::Error)]
pub enum Failure {
    /// No primitive or alternative matched.
    #[error("no match")]
    NoMatch,
    /// The parser succeeded but left input behind.
    #[error("unconsumed input")]
    UnconsumedInput,
}

/// Result of running a parser from a cursor: the value and the advanced
/// cursor, or a failure.
pub type ParseResult<'code, T> = Result<(T, Cursor<'code>), Failure>;
