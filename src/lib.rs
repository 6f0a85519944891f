//! # SeqComb - Backtracking Parser Combinators
//!
//! Typed parsers for textual grammars, built by composing small parsers into
//! larger ones. The library emphasizes:
//!
//! - **Full backtracking**: A failed parser never consumes input; alternatives
//!   always restart from the same position
//! - **Typed sequences**: Chains of parsers keep or skip each result, and the
//!   kept values reach a combiner function with their static types intact
//! - **Stack safety**: Repetition runs in a loop, not in nested calls, so long
//!   inputs cannot overflow the stack
//! - **Purity**: Parsers hold no mutable state and can be shared freely across
//!   threads
//!
//! ```
//! use seqcomb::config::{Binding, Value, parse_config};
//!
//! let bindings = parse_config("[flag=true, count=42]").unwrap();
//! assert_eq!(bindings[1], Binding { name: "count".into(), value: Value::Int(42) });
//! ```

pub mod and_then;
pub mod capture;
pub mod config;
pub mod cursor;
pub mod driver;
pub mod error;
pub mod iterate;
pub mod lazy;
pub mod literal;
pub mod many;
pub mod map;
pub mod one_of;
pub mod or;
pub mod parser;
pub mod position;
pub mod satisfy;
pub mod sequence;
pub mod succeed;

pub use and_then::{AndThenExt, and_then};
pub use capture::capture;
pub use cursor::Cursor;
pub use driver::parse;
pub use error::{Failure, ParseResult};
pub use iterate::{Step, iterate};
pub use lazy::lazy;
pub use literal::literal;
pub use many::many;
pub use map::{MapExt, map};
pub use one_of::one_of;
pub use or::{OrExt, or};
pub use parser::{BoxedParser, Parser};
pub use position::{Span, SpanExt, with_span};
pub use satisfy::{one_or_more, satisfy, zero_or_more};
pub use sequence::{
    SequenceExt, append_keeping, append_skipping, apply, apply2, apply3, apply4, apply5, apply6,
    start_keeping, start_skipping,
};
pub use succeed::{fail, succeed};
