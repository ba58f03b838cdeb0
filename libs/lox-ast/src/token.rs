//! # Tokens
//!
//! Lexical units produced by the scanner. Tree nodes share tokens through
//! `Rc<Token>` and never modify them.
//!
//! ## Example
//!
//! ```rust
//! use lox_ast::{LiteralValue, Token, TokenKind};
//!
//! let token = Token::new(TokenKind::Identifier, "foo", LiteralValue::Nil, 7);
//! assert_eq!(token.lexeme, "foo");
//! assert!(!token.is_eof());
//! ```

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::value::LiteralValue;

// =============================================================================
// TOKEN
// =============================================================================

/// A token produced by the scanner.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Token {
    /// Token type.
    pub kind: TokenKind,
    /// Source text of the token.
    pub lexeme: String,
    /// Parsed value for string and number literals, `Nil` otherwise.
    pub literal: LiteralValue,
    /// 1-based source line.
    pub line: usize,
}

impl Token {
    /// Create a new token.
    ///
    /// ## Parameters
    ///
    /// - `kind`: Token type
    /// - `lexeme`: Source text
    /// - `literal`: Literal payload
    /// - `line`: Source line
    pub fn new(kind: TokenKind, lexeme: impl Into<String>, literal: LiteralValue, line: usize) -> Self {
        Self {
            kind,
            lexeme: lexeme.into(),
            literal,
            line,
        }
    }

    /// Create the end-of-input marker for `line`.
    pub fn eof(line: usize) -> Self {
        Self::new(TokenKind::Eof, "", LiteralValue::Nil, line)
    }

    /// Check if token is EOF.
    pub fn is_eof(&self) -> bool {
        self.kind == TokenKind::Eof
    }
}

impl fmt::Display for Token {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:?} {} {}", self.kind, self.lexeme, self.literal)
    }
}

// =============================================================================
// TOKEN KIND
// =============================================================================

/// Kinds of Lox tokens.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum TokenKind {
    // Single-character tokens.
    LeftParen,
    RightParen,
    LeftBrace,
    RightBrace,
    Comma,
    Dot,
    Minus,
    Plus,
    Semicolon,
    Slash,
    Star,

    // One or two character tokens.
    Bang,
    BangEqual,
    Equal,
    EqualEqual,
    Greater,
    GreaterEqual,
    Less,
    LessEqual,

    // Literals.
    Identifier,
    String,
    Number,

    // Keywords.
    And,
    Class,
    Else,
    False,
    Fun,
    For,
    If,
    Nil,
    Or,
    Print,
    Return,
    Super,
    This,
    True,
    Var,
    While,

    Eof,
}

impl TokenKind {
    /// Looks up the keyword kind for an identifier lexeme.
    ///
    /// ```rust
    /// use lox_ast::TokenKind;
    ///
    /// assert_eq!(TokenKind::keyword("while"), Some(TokenKind::While));
    /// assert_eq!(TokenKind::keyword("whilst"), None);
    /// ```
    pub fn keyword(lexeme: &str) -> Option<TokenKind> {
        let kind = match lexeme {
            "and" => TokenKind::And,
            "class" => TokenKind::Class,
            "else" => TokenKind::Else,
            "false" => TokenKind::False,
            "fun" => TokenKind::Fun,
            "for" => TokenKind::For,
            "if" => TokenKind::If,
            "nil" => TokenKind::Nil,
            "or" => TokenKind::Or,
            "print" => TokenKind::Print,
            "return" => TokenKind::Return,
            "super" => TokenKind::Super,
            "this" => TokenKind::This,
            "true" => TokenKind::True,
            "var" => TokenKind::Var,
            "while" => TokenKind::While,
            _ => return None,
        };
        Some(kind)
    }
}
