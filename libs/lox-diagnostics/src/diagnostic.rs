//! # Diagnostics
//!
//! A record of one reported message, kept alongside the text written to the
//! sink.

use std::fmt;

use config::constants::WARNING_PREFIX;
use serde::{Deserialize, Serialize};

/// Severity of a diagnostic message.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Severity {
    /// Syntax or static error; sets `had_error`.
    Error,
    /// Error raised while running; sets `had_runtime_error`.
    RuntimeError,
    /// Informational; sets nothing.
    Warning,
}

/// A reported message with its source line.
///
/// `Display` produces exactly the line written to the sink.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Diagnostic {
    pub severity: Severity,
    /// Source line; absent for warnings.
    pub line: Option<usize>,
    /// Location fragment such as `" at 'foo'"`; empty when unspecified.
    pub location: String,
    pub message: String,
}

impl Diagnostic {
    pub fn error(line: usize, location: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            severity: Severity::Error,
            line: Some(line),
            location: location.into(),
            message: message.into(),
        }
    }

    pub fn runtime(line: usize, message: impl Into<String>) -> Self {
        Self {
            severity: Severity::RuntimeError,
            line: Some(line),
            location: String::new(),
            message: message.into(),
        }
    }

    pub fn warning(message: impl Into<String>) -> Self {
        Self {
            severity: Severity::Warning,
            line: None,
            location: String::new(),
            message: message.into(),
        }
    }
}

impl fmt::Display for Diagnostic {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if let Some(line) = self.line {
            write!(f, "[line {line}] ")?;
        }
        match self.severity {
            Severity::Error => write!(f, "Error{}: {}", self.location, self.message),
            Severity::RuntimeError => write!(f, "{}", self.message),
            Severity::Warning => write!(f, "{WARNING_PREFIX}{}", self.message),
        }
    }
}
