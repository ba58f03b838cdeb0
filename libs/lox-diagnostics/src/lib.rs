//! # Lox Diagnostics Crate
//!
//! Reports syntax errors, runtime errors and warnings, and remembers whether
//! any error occurred so the host can pick an exit status.
//!
//! ## Usage
//!
//! ```rust
//! use lox_diagnostics::Reporter;
//!
//! let mut reporter = Reporter::with_sink(Vec::new());
//! reporter.error(5, "Unexpected character.");
//!
//! assert!(reporter.had_error());
//! assert_eq!(reporter.exit_code(), 65);
//! assert_eq!(String::from_utf8(reporter.into_sink()).unwrap(), "[line 5] Error: Unexpected character.\n");
//! ```
//!
//! ## Design Principles
//!
//! - **Explicit Context**: state lives in a `Reporter` passed to each stage
//! - **Never Halts**: reporting records and writes, the caller decides what
//!   to do next
//! - **Sticky Flags**: once set, a flag stays set until `reset`

pub mod diagnostic;
pub mod error;
pub mod reporter;

// Re-exports for convenience
pub use diagnostic::{Diagnostic, Severity};
pub use error::RuntimeError;
pub use reporter::Reporter;
