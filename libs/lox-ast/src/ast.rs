//! # Node Model
//!
//! The `Expr` and `Stmt` families, their visitor traits and one struct per
//! variant, generated by `lox-astgen` from the Lox grammar schema at build
//! time.
//!
//! Nodes carry data only. Every behavior over trees is a visitor:
//!
//! ```rust
//! use std::rc::Rc;
//! use lox_ast::{Expr, ExprVisitor, LiteralExpr, LiteralValue, VariableExpr, Token, TokenKind};
//! # use lox_ast::*;
//!
//! struct CountVariables;
//!
//! impl ExprVisitor for CountVariables {
//!     type Output = usize;
//!     fn visit_variable_expr(&mut self, _: &VariableExpr) -> usize { 1 }
//!     fn visit_literal_expr(&mut self, _: &LiteralExpr) -> usize { 0 }
//!     fn visit_assign_expr(&mut self, e: &AssignExpr) -> usize { 1 + e.value.accept(self) }
//!     fn visit_binary_expr(&mut self, e: &BinaryExpr) -> usize { e.left.accept(self) + e.right.accept(self) }
//!     fn visit_call_expr(&mut self, e: &CallExpr) -> usize {
//!         e.callee.accept(self) + e.arguments.iter().map(|a| a.accept(self)).sum::<usize>()
//!     }
//!     fn visit_get_expr(&mut self, e: &GetExpr) -> usize { e.object.accept(self) }
//!     fn visit_grouping_expr(&mut self, e: &GroupingExpr) -> usize { e.expression.accept(self) }
//!     fn visit_logical_expr(&mut self, e: &LogicalExpr) -> usize { e.left.accept(self) + e.right.accept(self) }
//!     fn visit_set_expr(&mut self, e: &SetExpr) -> usize { e.object.accept(self) + e.value.accept(self) }
//!     fn visit_super_expr(&mut self, _: &SuperExpr) -> usize { 0 }
//!     fn visit_this_expr(&mut self, _: &ThisExpr) -> usize { 0 }
//!     fn visit_unary_expr(&mut self, e: &UnaryExpr) -> usize { e.right.accept(self) }
//! }
//!
//! let name = Rc::new(Token::new(TokenKind::Identifier, "x", LiteralValue::Nil, 1));
//! let expr: Expr = VariableExpr::new(name).into();
//! assert_eq!(expr.accept(&mut CountVariables), 1);
//! ```

include!(concat!(env!("OUT_DIR"), "/ast.rs"));
