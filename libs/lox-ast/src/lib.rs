//! # Lox AST Crate
//!
//! Immutable syntax-tree nodes for the Lox language, reached through a
//! double-dispatch visitor protocol.
//!
//! ## Architecture
//!
//! ```text
//! lox-astgen (schema → source) ──build.rs──▶ lox-ast (Expr, Stmt, visitors)
//!                                                 │
//!            scanner / parser / resolver / interpreter (external)
//! ```
//!
//! ## Usage
//!
//! ```rust
//! use std::rc::Rc;
//! use lox_ast::{AstPrinter, BinaryExpr, Expr, LiteralExpr, LiteralValue, Token, TokenKind};
//!
//! let plus = Rc::new(Token::new(TokenKind::Plus, "+", LiteralValue::Nil, 1));
//! let expr: Expr = BinaryExpr::new(
//!     LiteralExpr::new(LiteralValue::Number(1.0)).into(),
//!     plus,
//!     LiteralExpr::new(LiteralValue::Number(2.0)).into(),
//! )
//! .into();
//!
//! assert_eq!(AstPrinter.print_expr(&expr), "(+ 1 2)");
//! ```
//!
//! ## Design Principles
//!
//! - **Closed Families**: `Expr` and `Stmt` are enums; adding a variant makes
//!   every visitor that lacks the new method fail to compile
//! - **Open Operations**: new behavior is a new visitor, nodes never change
//! - **Trees Only**: children are owned by their parent, tokens are shared

pub mod ast;
pub mod printer;
pub mod token;
pub mod value;

// Re-exports for convenience
pub use ast::*;
pub use printer::AstPrinter;
pub use token::{Token, TokenKind};
pub use value::LiteralValue;
