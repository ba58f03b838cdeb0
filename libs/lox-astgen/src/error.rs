//! # Generator Errors
//!
//! Error types for schema parsing and code emission.
//!
//! ## Error Policy
//!
//! A malformed schema is a bug in the schema itself. Every failure is
//! reported with the offending declaration and aborts the generator run;
//! nothing is emitted from a schema that did not parse cleanly.

use std::path::PathBuf;

use thiserror::Error;

// =============================================================================
// SCHEMA ERRORS
// =============================================================================

/// Errors raised while parsing schema declarations.
///
/// ## Example
///
/// ```rust
/// use lox_astgen::{parse_declaration, SchemaError};
///
/// let err = parse_declaration("Binary Expr left").unwrap_err();
/// assert!(matches!(err, SchemaError::MissingSeparator { .. }));
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SchemaError {
    /// The declaration has no `:` between variant name and fields.
    #[error("declaration '{declaration}' has no ':' separating the variant name from its fields")]
    MissingSeparator { declaration: String },

    /// Nothing precedes the `:`.
    #[error("declaration '{declaration}' has an empty variant name")]
    EmptyVariantName { declaration: String },

    /// A field entry is blank or has a type but no name.
    #[error("declaration '{declaration}' has an empty field name")]
    EmptyFieldName { declaration: String },

    /// A variant or field name is not a valid identifier.
    #[error("declaration '{declaration}': '{name}' is not a valid identifier")]
    InvalidIdentifier { declaration: String, name: String },

    /// The same variant is declared twice in one grammar.
    #[error("variant '{variant}' is declared more than once")]
    DuplicateVariant { variant: String },

    /// The same field name appears twice in one declaration.
    #[error("declaration '{declaration}' declares field '{field}' more than once")]
    DuplicateField { declaration: String, field: String },

    /// Wraps an error with its position inside a grammar listing.
    #[error("{base_name} grammar, declaration {index}: {source}")]
    InGrammar {
        /// Base name of the grammar being parsed.
        base_name: String,
        /// 1-based position of the declaration in the listing.
        index: usize,
        #[source]
        source: Box<SchemaError>,
    },
}

impl SchemaError {
    /// Returns the innermost error, unwrapping grammar positions.
    pub fn root(&self) -> &SchemaError {
        match self {
            SchemaError::InGrammar { source, .. } => source.root(),
            other => other,
        }
    }
}

// =============================================================================
// GENERATE ERRORS
// =============================================================================

/// Errors that abort a generator run.
#[derive(Debug, Error)]
pub enum GenerateError {
    /// The schema text is malformed.
    #[error("invalid schema: {0}")]
    Schema(#[from] SchemaError),

    /// A declared field type is outside the generator's vocabulary.
    #[error("variant '{variant}', field '{field}': unsupported type '{declared}'")]
    UnsupportedType {
        variant: String,
        field: String,
        declared: String,
    },

    /// A name maps onto a Rust identifier that cannot be used, e.g. `self`.
    #[error("variant '{variant}': '{name}' cannot be used as a Rust identifier")]
    ReservedName { variant: String, name: String },

    /// Two schema names map onto the same generated Rust name, e.g. the
    /// fields `fooBar` and `foo_bar`.
    #[error("variant '{variant}': generated name '{name}' is already in use")]
    NameCollision { variant: String, name: String },

    /// Two grammars in one run share a base name.
    #[error("base name '{0}' is generated more than once")]
    DuplicateBase(String),

    /// A configured import path is not a valid Rust path or does not end in
    /// the expected type name.
    #[error("invalid import path '{0}'")]
    InvalidImport(String),

    /// The emitted tokens do not form a valid Rust file.
    #[error("generated code does not parse: {0}")]
    Syntax(#[from] syn::Error),

    /// Reading or writing the output destination failed.
    #[error("cannot access '{}': {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

// =============================================================================
// TESTS
// =============================================================================
