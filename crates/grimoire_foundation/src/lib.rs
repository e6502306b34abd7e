//! Foundational types for the Grimoire parsing engine.
//!
//! This crate provides:
//! - [`Located`] - A parsed value paired with its source character range
//! - [`Parseable`] - A versioned, lazily recomputed parse cache
//! - [`DomainParser`] - The interface between raw text and structured results

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]

pub mod located;
pub mod parseable;

pub use located::Located;
pub use parseable::{DomainParser, Parseable, ParserResult};
