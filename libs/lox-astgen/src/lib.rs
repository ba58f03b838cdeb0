//! # Lox AST Generator
//!
//! Generates the Lox syntax-tree node model from a compact textual schema.
//!
//! ## Architecture
//!
//! ```text
//! schema lines → schema (VariantDescriptor) → emitter (TokenStream)
//!              → syn + prettyplease (formatted source) → writer (file)
//! ```
//!
//! ## Usage
//!
//! ```rust
//! use lox_astgen::generate_lox_ast;
//!
//! let source = generate_lox_ast().unwrap();
//! assert!(source.contains("pub trait ExprVisitor"));
//! assert!(source.contains("fn visit_binary_expr"));
//! ```
//!
//! ## Design Principles
//!
//! - **Deterministic**: identical schemas produce byte-identical output
//! - **Schema Order**: variants and fields are emitted in declared order
//! - **Fail Loudly**: malformed schemas abort the run with a descriptive error

pub mod emitter;
pub mod error;
pub mod grammar;
pub mod schema;
pub mod types;
pub mod writer;

// Re-exports for convenience
pub use emitter::{generate, Emitter, Imports};
pub use error::{GenerateError, SchemaError};
pub use grammar::{lox_grammars, EXPR_GRAMMAR, STMT_GRAMMAR};
pub use schema::{parse_declaration, parse_grammar, FieldDescriptor, GrammarDescriptor, VariantDescriptor};
pub use types::FieldType;
pub use writer::{is_up_to_date, sync_generated, write_generated, SyncOutcome};

// =============================================================================
// PUBLIC API
// =============================================================================

/// Generates the Lox node model with the default import paths.
///
/// This is what the `lox-ast` build script and the `generate-ast` CLI run.
pub fn generate_lox_ast() -> Result<String, GenerateError> {
    let grammars = lox_grammars()?;
    generate(&grammars, &Imports::default())
}
