//! # Runtime Errors
//!
//! The error an interpreter raises and hands to the reporter.

use std::rc::Rc;

use lox_ast::Token;
use thiserror::Error;

/// An error raised while executing, tied to the token where it happened.
#[derive(Debug, Clone, PartialEq, Error)]
#[error("{message}")]
pub struct RuntimeError {
    pub token: Rc<Token>,
    pub message: String,
}

impl RuntimeError {
    pub fn new(token: Rc<Token>, message: impl Into<String>) -> Self {
        Self {
            token,
            message: message.into(),
        }
    }

    /// Source line of the failing token.
    pub fn line(&self) -> usize {
        self.token.line
    }
}

#[cfg(test)]
mod tests {
    use lox_ast::{LiteralValue, TokenKind};

    use super::*;

    #[test]
    fn test_display_is_message() {
        let token = Rc::new(Token::new(TokenKind::Slash, "/", LiteralValue::Nil, 9));
        let err = RuntimeError::new(token, "Division by zero.");
        assert_eq!(err.to_string(), "Division by zero.");
        assert_eq!(err.line(), 9);
    }
}
