//! Command-line argument declaration and parsing.
//!
//! ```text
//! register specs → parse argv → validate all tokens → dispatch actions → ParseResult
//! ```
//!
//! The parser knows nothing about flag semantics; behavior lives in the
//! [`Action`] attached to each spec.

mod action;
mod error;
mod parser;
mod registry;

pub use action::{action_fn, Action, Invocation};
pub use error::ArgError;
pub use parser::{ArgumentParser, Dispatch, ParseResult, RegistryState};
pub use registry::{ArgumentSpec, Registry};
