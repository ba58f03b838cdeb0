//! # AST Printer
//!
//! Renders trees in parenthesized prefix form, one visitor method per
//! variant. Useful for debugging parsers and for asserting tree shape in
//! tests.
//!
//! ```text
//! -123 * (45.67)   →   (* (- 123) (group 45.67))
//! ```

use crate::ast::*;

/// Visitor producing a prefix rendering of expressions and statements.
#[derive(Debug, Default, Clone, Copy)]
pub struct AstPrinter;

impl AstPrinter {
    /// Renders one expression.
    pub fn print_expr(&mut self, expr: &Expr) -> String {
        expr.accept(self)
    }

    /// Renders one statement.
    pub fn print_stmt(&mut self, stmt: &Stmt) -> String {
        stmt.accept(self)
    }

    /// Renders a program, one statement per line.
    pub fn print_program(&mut self, statements: &[Stmt]) -> String {
        statements
            .iter()
            .map(|stmt| stmt.accept(self))
            .collect::<Vec<_>>()
            .join("\n")
    }
}

fn parenthesize(name: &str, parts: impl IntoIterator<Item = String>) -> String {
    let mut out = format!("({name}");
    for part in parts {
        out.push(' ');
        out.push_str(&part);
    }
    out.push(')');
    out
}

impl ExprVisitor for AstPrinter {
    type Output = String;

    fn visit_assign_expr(&mut self, expr: &AssignExpr) -> String {
        parenthesize("=", [expr.name.lexeme.clone(), expr.value.accept(self)])
    }

    fn visit_binary_expr(&mut self, expr: &BinaryExpr) -> String {
        parenthesize(
            &expr.operator.lexeme,
            [expr.left.accept(self), expr.right.accept(self)],
        )
    }

    fn visit_call_expr(&mut self, expr: &CallExpr) -> String {
        let mut parts = vec![expr.callee.accept(self)];
        parts.extend(expr.arguments.iter().map(|arg| arg.accept(self)));
        parenthesize("call", parts)
    }

    fn visit_get_expr(&mut self, expr: &GetExpr) -> String {
        parenthesize(".", [expr.object.accept(self), expr.name.lexeme.clone()])
    }

    fn visit_grouping_expr(&mut self, expr: &GroupingExpr) -> String {
        parenthesize("group", [expr.expression.accept(self)])
    }

    fn visit_literal_expr(&mut self, expr: &LiteralExpr) -> String {
        expr.value.to_string()
    }

    fn visit_logical_expr(&mut self, expr: &LogicalExpr) -> String {
        parenthesize(
            &expr.operator.lexeme,
            [expr.left.accept(self), expr.right.accept(self)],
        )
    }

    fn visit_set_expr(&mut self, expr: &SetExpr) -> String {
        let target = parenthesize(".", [expr.object.accept(self), expr.name.lexeme.clone()]);
        parenthesize("=", [target, expr.value.accept(self)])
    }

    fn visit_super_expr(&mut self, expr: &SuperExpr) -> String {
        parenthesize("super", [expr.method.lexeme.clone()])
    }

    fn visit_this_expr(&mut self, _expr: &ThisExpr) -> String {
        "this".to_string()
    }

    fn visit_unary_expr(&mut self, expr: &UnaryExpr) -> String {
        parenthesize(&expr.operator.lexeme, [expr.right.accept(self)])
    }

    fn visit_variable_expr(&mut self, expr: &VariableExpr) -> String {
        expr.name.lexeme.clone()
    }
}

impl StmtVisitor for AstPrinter {
    type Output = String;

    fn visit_block_stmt(&mut self, stmt: &BlockStmt) -> String {
        let body: Vec<String> = stmt.statements.iter().map(|s| s.accept(self)).collect();
        parenthesize("block", body)
    }

    fn visit_class_stmt(&mut self, stmt: &ClassStmt) -> String {
        let head = match &stmt.superclass {
            Some(superclass) => format!("class {} < {}", stmt.name.lexeme, superclass.accept(self)),
            None => format!("class {}", stmt.name.lexeme),
        };
        let methods: Vec<String> = stmt.methods.iter().map(|m| m.accept(self)).collect();
        parenthesize(&head, methods)
    }

    fn visit_expression_stmt(&mut self, stmt: &ExpressionStmt) -> String {
        parenthesize(";", [stmt.expression.accept(self)])
    }

    fn visit_function_stmt(&mut self, stmt: &FunctionStmt) -> String {
        let params: Vec<&str> = stmt.params.iter().map(|p| p.lexeme.as_str()).collect();
        let head = format!("fun {}({})", stmt.name.lexeme, params.join(" "));
        let body: Vec<String> = stmt.body.iter().map(|s| s.accept(self)).collect();
        parenthesize(&head, body)
    }

    fn visit_if_stmt(&mut self, stmt: &IfStmt) -> String {
        let condition = stmt.condition.accept(self);
        let then_branch = stmt.then_branch.accept(self);
        match &stmt.else_branch {
            Some(else_branch) => parenthesize("if", [condition, then_branch, else_branch.accept(self)]),
            None => parenthesize("if", [condition, then_branch]),
        }
    }

    fn visit_print_stmt(&mut self, stmt: &PrintStmt) -> String {
        parenthesize("print", [stmt.expression.accept(self)])
    }

    fn visit_return_stmt(&mut self, stmt: &ReturnStmt) -> String {
        match &stmt.value {
            Some(value) => parenthesize("return", [value.accept(self)]),
            None => parenthesize("return", []),
        }
    }

    fn visit_var_stmt(&mut self, stmt: &VarStmt) -> String {
        let name = stmt.name.lexeme.clone();
        match &stmt.initializer {
            Some(init) => parenthesize("var", [name, "=".to_string(), init.accept(self)]),
            None => parenthesize("var", [name]),
        }
    }

    fn visit_while_stmt(&mut self, stmt: &WhileStmt) -> String {
        parenthesize("while", [stmt.condition.accept(self), stmt.body.accept(self)])
    }
}
