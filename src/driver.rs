use crate::cursor::Cursor;
use crate::error::Failure;
use crate::parser::Parser;

/// Runs `parser` over the whole of `input`.
///
/// Fails with the parser's own failure if it does not match, or with
/// [`Failure::UnconsumedInput`] if it matches without reaching the end of the
/// input.
pub fn parse<'code, P>(parser: &P, input: &'code str) -> Result<P::Output, Failure>
where
    P: Parser<'code> + ?Sized,
{
    let (value, cursor) = parser.parse(Cursor::new(input))?;
    if !cursor.is_at_end() {
        return Err(Failure::UnconsumedInput);
    }
    Ok(value)
}
