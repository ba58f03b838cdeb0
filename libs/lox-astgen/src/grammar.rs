//! # Lox Grammar Schema
//!
//! The two node families of the Lox language, in the compact declaration
//! format understood by [`crate::schema`]. Order matters: it is the order of
//! the visitor methods and of the generated items.
//!
//! Absent-or-node fields (`superclass`, `elseBranch`, `initializer`, the
//! value of `return`) are declared `Option<...>`; the only untyped field is
//! the literal payload.

use crate::error::SchemaError;
use crate::schema::{parse_grammar, GrammarDescriptor};

/// Base name of the expression family.
pub const EXPR_BASE: &str = "Expr";

/// Base name of the statement family.
pub const STMT_BASE: &str = "Stmt";

/// Expression node declarations.
pub const EXPR_GRAMMAR: &[&str] = &[
    "Assign   : Token name, Expr value",
    "Binary   : Expr left, Token operator, Expr right",
    "Call     : Expr callee, Token paren, List<Expr> arguments",
    "Get      : Expr object, Token name",
    "Grouping : Expr expression",
    "Literal  : value",
    "Logical  : Expr left, Token operator, Expr right",
    "Set      : Expr object, Token name, Expr value",
    "Super    : Token keyword, Token method",
    "This     : Token keyword",
    "Unary    : Token operator, Expr right",
    "Variable : Token name",
];

/// Statement node declarations.
pub const STMT_GRAMMAR: &[&str] = &[
    "Block      : List<Stmt> statements",
    "Class      : Token name, Option<Expr> superclass, List<FunctionStmt> methods",
    "Expression : Expr expression",
    "Function   : Token name, List<Token> params, List<Stmt> body",
    "If         : Expr condition, Stmt thenBranch, Option<Stmt> elseBranch",
    "Print      : Expr expression",
    "Return     : Token keyword, Option<Expr> value",
    "Var        : Token name, Option<Expr> initializer",
    "While      : Expr condition, Stmt body",
];

/// Parses both Lox families, expressions first.
///
/// ## Example
///
/// ```rust
/// use lox_astgen::lox_grammars;
///
/// let grammars = lox_grammars().unwrap();
/// assert_eq!(grammars[0].base_name, "Expr");
/// assert_eq!(grammars[1].base_name, "Stmt");
/// ```
pub fn lox_grammars() -> Result<Vec<GrammarDescriptor>, SchemaError> {
    Ok(vec![
        parse_grammar(EXPR_BASE, EXPR_GRAMMAR)?,
        parse_grammar(STMT_BASE, STMT_GRAMMAR)?,
    ])
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_lox_schema_parses() {
        let grammars = lox_grammars().unwrap();
        assert_eq!(grammars[0].variants.len(), EXPR_GRAMMAR.len());
        assert_eq!(grammars[1].variants.len(), STMT_GRAMMAR.len());
    }

    #[test]
    fn test_literal_is_the_only_untyped_field() {
        let grammars = lox_grammars().unwrap();
        let untyped: Vec<(&str, &str)> = grammars
            .iter()
            .flat_map(|g| g.variants.iter())
            .flat_map(|v| v.fields.iter().map(move |f| (v, f)))
            .filter(|(_, f)| f.declared_type.is_none())
            .map(|(v, f)| (v.name.as_str(), f.name.as_str()))
            .collect();
        assert_eq!(untyped, [("Literal", "value")]);
    }

    #[test]
    fn test_binary_declaration() {
        let grammars = lox_grammars().unwrap();
        let binary = grammars[0].variant("Binary").unwrap();
        assert_eq!(binary.field_names(), ["left", "operator", "right"]);
    }
}
