//! # Schema Parser
//!
//! Parses compact node declarations into descriptors.
//!
//! ## Format
//!
//! ```text
//! Name : [Type ]field[, [Type ]field]*
//! ```
//!
//! The line is split on the first `:`. Each comma-separated field is either
//! `Type name` (the first whitespace-separated token is the type, the rest is
//! the name) or a bare `name` with no declared type.
//!
//! ## Example
//!
//! ```rust
//! use lox_astgen::parse_declaration;
//!
//! let variant = parse_declaration("Binary : Expr left, Token operator, Expr right").unwrap();
//! assert_eq!(variant.name, "Binary");
//! assert_eq!(variant.field_names(), ["left", "operator", "right"]);
//! ```

use std::collections::HashSet;

use config::constants::{DECLARATION_SEPARATOR, FIELD_SEPARATOR};
use serde::{Deserialize, Serialize};

use crate::error::SchemaError;

// =============================================================================
// DESCRIPTORS
// =============================================================================

/// One field of a variant, in declaration order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FieldDescriptor {
    /// Declared type, or `None` for an untyped literal payload.
    pub declared_type: Option<String>,
    /// Field name exactly as written in the schema.
    pub name: String,
}

/// One node variant parsed from a single declaration line.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct VariantDescriptor {
    pub name: String,
    pub fields: Vec<FieldDescriptor>,
}

impl VariantDescriptor {
    /// Returns the field names in declaration order.
    pub fn field_names(&self) -> Vec<&str> {
        self.fields.iter().map(|f| f.name.as_str()).collect()
    }
}

/// A whole node family: its base name and variants in schema order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GrammarDescriptor {
    pub base_name: String,
    pub variants: Vec<VariantDescriptor>,
}

impl GrammarDescriptor {
    /// Looks up a variant by name.
    pub fn variant(&self, name: &str) -> Option<&VariantDescriptor> {
        self.variants.iter().find(|v| v.name == name)
    }
}

// =============================================================================
// PARSING
// =============================================================================

/// Parses one declaration line into a variant descriptor.
///
/// ## Errors
///
/// Returns a [`SchemaError`] when the `:` is missing, when the variant or a
/// field name is empty or not an identifier, or when a field name repeats.
pub fn parse_declaration(line: &str) -> Result<VariantDescriptor, SchemaError> {
    let declaration = line.trim();
    let (name, field_list) = declaration
        .split_once(DECLARATION_SEPARATOR)
        .ok_or_else(|| SchemaError::MissingSeparator {
            declaration: declaration.to_string(),
        })?;

    let name = name.trim();
    if name.is_empty() {
        return Err(SchemaError::EmptyVariantName {
            declaration: declaration.to_string(),
        });
    }
    check_identifier(declaration, name)?;

    let mut fields = Vec::new();
    let mut seen = HashSet::new();
    for entry in field_list.split(FIELD_SEPARATOR) {
        let field = parse_field(declaration, entry.trim())?;
        if !seen.insert(field.name.clone()) {
            return Err(SchemaError::DuplicateField {
                declaration: declaration.to_string(),
                field: field.name,
            });
        }
        fields.push(field);
    }

    Ok(VariantDescriptor {
        name: name.to_string(),
        fields,
    })
}

/// Parses a whole listing into a grammar descriptor, preserving order.
///
/// ## Example
///
/// ```rust
/// use lox_astgen::parse_grammar;
///
/// let grammar = parse_grammar("Stmt", &["Print : Expr expression", "Block : List<Stmt> statements"]).unwrap();
/// assert_eq!(grammar.variants[0].name, "Print");
/// assert_eq!(grammar.variants[1].name, "Block");
/// ```
pub fn parse_grammar(base_name: &str, lines: &[&str]) -> Result<GrammarDescriptor, SchemaError> {
    check_identifier(base_name, base_name)?;
    let mut variants: Vec<VariantDescriptor> = Vec::with_capacity(lines.len());

    for (offset, line) in lines.iter().enumerate() {
        let at = |source: SchemaError| SchemaError::InGrammar {
            base_name: base_name.to_string(),
            index: offset + 1,
            source: Box::new(source),
        };

        let variant = parse_declaration(line).map_err(at)?;
        if variants.iter().any(|v| v.name == variant.name) {
            return Err(at(SchemaError::DuplicateVariant {
                variant: variant.name,
            }));
        }
        log::debug!(
            "{base_name}: parsed variant {} with {} field(s)",
            variant.name,
            variant.fields.len()
        );
        variants.push(variant);
    }

    Ok(GrammarDescriptor {
        base_name: base_name.to_string(),
        variants,
    })
}

fn parse_field(declaration: &str, entry: &str) -> Result<FieldDescriptor, SchemaError> {
    let (declared_type, name) = match entry.split_once(char::is_whitespace) {
        Some((ty, rest)) => (Some(ty.to_string()), rest.trim()),
        None => (None, entry),
    };

    if name.is_empty() {
        return Err(SchemaError::EmptyFieldName {
            declaration: declaration.to_string(),
        });
    }
    check_identifier(declaration, name)?;

    Ok(FieldDescriptor {
        declared_type,
        name: name.to_string(),
    })
}

fn check_identifier(declaration: &str, name: &str) -> Result<(), SchemaError> {
    if is_identifier(name) {
        Ok(())
    } else {
        Err(SchemaError::InvalidIdentifier {
            declaration: declaration.to_string(),
            name: name.to_string(),
        })
    }
}

/// Returns true for ASCII identifiers: a letter or `_` followed by
/// letters, digits or `_`. A lone `_` is not a name.
pub(crate) fn is_identifier(name: &str) -> bool {
    if name == "_" {
        return false;
    }
    let mut chars = name.chars();
    match chars.next() {
        Some(first) if first.is_ascii_alphabetic() || first == '_' => {
            chars.all(|c| c.is_ascii_alphanumeric() || c == '_')
        }
        _ => false,
    }
}

#[cfg(test)]
mod tests;
