//! A small configuration language built from the public combinators.
//!
//! ```text
//! configuration:  '[' whitespace bindings whitespace ']'
//! bindings:       binding (whitespace ',' whitespace binding)*
//! binding:        name whitespace '=' whitespace value
//! name:           [a-zA-Z][0-9a-zA-Z]*
//! value:          bool | int
//! int:            [0-9] | [1-9][0-9]+
//! bool:           "true" | "false"
//! whitespace:     [ \t\n]*
//! ```

use crate::and_then::AndThenExt;
use crate::capture::capture;
use crate::error::Failure;
use crate::iterate::{Step, iterate};
use crate::literal::literal;
use crate::map::MapExt;
use crate::one_of;
use crate::or::OrExt;
use crate::parser::{BoxedParser, Parser};
use crate::satisfy::{one_or_more, satisfy, zero_or_more};
use crate::sequence::{SequenceExt, apply, apply2, start_keeping, start_skipping};
use crate::succeed::{fail, succeed};
use std::sync::Arc;

/// A `name = value` pair
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Binding {
    pub name: String,
    pub value: Value,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Value {
    Bool(bool),
    Int(u64),
}

fn is_ascii_letter(c: char) -> bool {
    c.is_ascii_alphabetic()
}

fn is_decimal_digit(c: char) -> bool {
    c.is_ascii_digit()
}

fn is_alphanumeric(c: char) -> bool {
    is_ascii_letter(c) || is_decimal_digit(c)
}

fn is_whitespace(c: char) -> bool {
    matches!(c, ' ' | '\t' | '\n')
}

pub fn boolean<'code>() -> impl Parser<'code, Output = bool> {
    literal("true")
        .map(|()| true)
        .or(literal("false").map(|()| false))
}

/// Unsigned decimal integer; a leading zero is only allowed on "0" itself
pub fn integer<'code>() -> impl Parser<'code, Output = u64> {
    capture(one_or_more(is_decimal_digit)).and_then(
        |digits: &'code str| -> BoxedParser<'code, u64> {
            if digits.len() > 1 && digits.starts_with('0') {
                return BoxedParser::new(fail());
            }
            match digits.parse() {
                Ok(value) => BoxedParser::new(succeed(value)),
                // Too large for u64
                Err(_) => BoxedParser::new(fail()),
            }
        },
    )
}

pub fn value<'code>() -> impl Parser<'code, Output = Value> {
    one_of![boolean().map(Value::Bool), integer().map(Value::Int)]
}

pub fn name<'code>() -> impl Parser<'code, Output = &'code str> {
    capture(satisfy(is_ascii_letter).and_then(|_| zero_or_more(is_alphanumeric)))
}

pub fn whitespace<'code>() -> impl Parser<'code, Output = ()> {
    zero_or_more(is_whitespace)
}

pub fn binding<'code>() -> impl Parser<'code, Output = Binding> {
    let sequence = start_keeping(name())
        .skip(whitespace())
        .skip(literal("="))
        .skip(whitespace())
        .keep(value());
    apply2(sequence, |name, value| Binding {
        name: name.to_owned(),
        value,
    })
}

/// Bindings seen so far, newest first.
///
/// Extending shares the existing nodes, so each round of the bindings loop
/// costs O(1) regardless of how many bindings came before.
#[derive(Clone, Default)]
struct BindingList {
    head: Option<Arc<Node>>,
}

struct Node {
    binding: Binding,
    next: Option<Arc<Node>>,
}

impl BindingList {
    fn is_empty(&self) -> bool {
        self.head.is_none()
    }

    fn push(&self, binding: Binding) -> Self {
        BindingList {
            head: Some(Arc::new(Node {
                binding,
                next: self.head.clone(),
            })),
        }
    }

    /// The bindings in the order they were parsed
    fn to_vec(&self) -> Vec<Binding> {
        let mut bindings = Vec::new();
        let mut node = self.head.as_deref();
        while let Some(current) = node {
            bindings.push(current.binding.clone());
            node = current.next.as_deref();
        }
        bindings.reverse();
        bindings
    }
}

impl Drop for BindingList {
    // Unlink iteratively; the default recursive drop overflows on long lists
    fn drop(&mut self) {
        let mut next = self.head.take();
        while let Some(node) = next {
            match Arc::try_unwrap(node) {
                Ok(mut node) => next = node.next.take(),
                Err(_) => break,
            }
        }
    }
}

type BindingStep = Step<BindingList, Vec<Binding>>;

/// One or more comma separated bindings
pub fn bindings<'code>() -> impl Parser<'code, Output = Vec<Binding>> {
    let single = BoxedParser::new(binding());
    iterate(
        BindingList::default(),
        move |list: BindingList| -> BoxedParser<'code, BindingStep> {
            if list.is_empty() {
                return BoxedParser::new(
                    single
                        .clone()
                        .map(|first| Step::Continue(BindingList::default().push(first))),
                );
            }
            let separated = start_skipping(whitespace())
                .skip(literal(","))
                .skip(whitespace())
                .keep(single.clone());
            let extend = {
                let list = list.clone();
                apply(separated, move |next| Step::Continue(list.push(next)))
            };
            let finish = succeed(()).map(move |()| Step::Done(list.to_vec()));
            BoxedParser::new(extend.or(finish))
        },
    )
}

pub fn configuration<'code>() -> impl Parser<'code, Output = Vec<Binding>> {
    let sequence = start_skipping(literal("["))
        .skip(whitespace())
        .keep(bindings())
        .skip(whitespace())
        .skip(literal("]"));
    apply(sequence, |bindings| bindings)
}

/// Parses a complete configuration text
pub fn parse_config(input: &str) -> Result<Vec<Binding>, Failure> {
    crate::driver::parse(&configuration(), input)
}
