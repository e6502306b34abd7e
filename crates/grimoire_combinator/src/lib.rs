//! Parser combinators for statblock prose.
//!
//! This crate provides:
//! - [`Cursor`] - An explicit position into a character slice
//! - [`Parser`] - A composable, clonable parsing function
//! - Lexical primitives ([`character`], [`string`], [`int`], [`word`])
//! - Combinators ([`zip`], [`either`], [`any`], [`one_or_more`], [`skip_until`])
//!
//! Failure is a normal outcome, represented by `None`, and never consumes
//! input. That contract is what makes sequencing and alternation composable;
//! every parser built here must preserve it.

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]

pub mod cursor;
pub mod parser;
pub mod primitives;


pub use cursor::Cursor;
pub use parser::{
    Parser, any, either, either3, either4, either5, either6, end, one_or_more, remainder,
    skip_until, zip, zip3, zip4, zip5, zip6, zip7,
};
pub use primitives::{
    char, character, horizontal_whitespace, int, string, vertical_whitespace, whitespace, word,
};
