//! Syntax diagnostics reported by the parser.
//!
//! The parser serializes its errors and warnings beside the tree. This crate
//! holds their decoded form:
//! - [`ErrorType`] / [`WarningType`]: type codes, validated against the
//!   tables of the pinned format version
//! - [`ErrorLevel`] / [`WarningLevel`]: severities
//! - [`SyntaxError`] / [`SyntaxWarning`]: one reported diagnostic
//!
//! Diagnostics are data, not failures: a parse result with syntax errors is
//! still a successful decode.

mod diagnostic;
mod types;

pub use diagnostic::{SyntaxError, SyntaxWarning};
pub use types::{ErrorLevel, ErrorType, WarningLevel, WarningType};
