//! # Configuration Constants
//!
//! Centralized constants for the Lox syntax-tree workspace.
//!
//! ## Categories
//!
//! - **Schema**: Separators of the compact `Name : Type field, ...` notation
//! - **Type Vocabulary**: Type names the generator maps onto Rust types
//! - **Output**: Where and how the generated source is written
//! - **Diagnostics**: Message fragments and process exit codes

// =============================================================================
// SCHEMA CONSTANTS
// =============================================================================

/// Separates the variant name from its field list in a declaration.
///
/// Only the first occurrence splits the line.
///
/// # Example
///
/// ```rust
/// use config::constants::DECLARATION_SEPARATOR;
///
/// let (name, fields) = "Grouping : Expr expression"
///     .split_once(DECLARATION_SEPARATOR)
///     .unwrap();
/// assert_eq!(name.trim(), "Grouping");
/// assert_eq!(fields.trim(), "Expr expression");
/// ```
pub const DECLARATION_SEPARATOR: char = ':';

/// Separates the fields of one declaration.
///
/// # Example
///
/// ```rust
/// use config::constants::FIELD_SEPARATOR;
///
/// let fields: Vec<&str> = "Expr left, Token operator, Expr right"
///     .split(FIELD_SEPARATOR)
///     .map(str::trim)
///     .collect();
/// assert_eq!(fields, ["Expr left", "Token operator", "Expr right"]);
/// ```
pub const FIELD_SEPARATOR: char = ',';

// =============================================================================
// TYPE VOCABULARY CONSTANTS
// =============================================================================

/// Declared type of fields holding a shared lexical token.
pub const TOKEN_TYPE: &str = "Token";

/// Wrapper marking an ordered sequence of owned values, e.g. `List<Stmt>`.
pub const LIST_TYPE: &str = "List";

/// Wrapper marking a field that may be absent, e.g. `Option<Expr>`.
pub const OPTION_TYPE: &str = "Option";

/// Rust type used for fields declared without a type.
///
/// Untyped fields carry literal payloads (nil, booleans, numbers, strings).
pub const LITERAL_PAYLOAD_TYPE: &str = "LiteralValue";

/// Prefix of every generated visitor method (`visit_binary_expr`).
pub const VISIT_METHOD_PREFIX: &str = "visit";

/// Suffix appended to a base name to name its visitor trait (`ExprVisitor`).
pub const VISITOR_SUFFIX: &str = "Visitor";

// =============================================================================
// OUTPUT CONSTANTS
// =============================================================================

/// File name of the generated node model.
///
/// The `lox-ast` build script writes this file into `OUT_DIR`.
pub const GENERATED_FILE_NAME: &str = "ast.rs";

/// Destination used by the `generate-ast` CLI when `--output` is omitted.
///
/// # Example
///
/// ```rust
/// use config::constants::{DEFAULT_OUTPUT_PATH, GENERATED_FILE_NAME};
///
/// assert!(DEFAULT_OUTPUT_PATH.ends_with(GENERATED_FILE_NAME));
/// ```
pub const DEFAULT_OUTPUT_PATH: &str = "ast.rs";

/// First line of every generated file.
///
/// Written as a plain `//` comment so the file can be pulled in with
/// `include!`, which rejects inner attributes.
pub const GENERATED_HEADER: &str =
    "// @generated by generate-ast from the Lox grammar schema. Do not edit by hand.";

// =============================================================================
// DIAGNOSTIC CONSTANTS
// =============================================================================

/// Location fragment used when an error is reported against end of input.
pub const END_OF_INPUT_LOCATION: &str = " at end";

/// Prefix of informational, non-fatal messages.
pub const WARNING_PREFIX: &str = "WARNING: ";

/// Process exit code after a successful run.
pub const EXIT_SUCCESS: i32 = 0;

/// Process exit code after a syntax or static error (sysexits `EX_DATAERR`).
///
/// # Example
///
/// ```rust
/// use config::constants::{EXIT_RUNTIME_ERROR, EXIT_SYNTAX_ERROR};
///
/// assert_ne!(EXIT_SYNTAX_ERROR, EXIT_RUNTIME_ERROR);
/// ```
pub const EXIT_SYNTAX_ERROR: i32 = 65;

/// Process exit code after a runtime error (sysexits `EX_SOFTWARE`).
pub const EXIT_RUNTIME_ERROR: i32 = 70;
