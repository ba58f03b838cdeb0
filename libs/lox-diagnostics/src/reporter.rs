//! # Reporter
//!
//! Writes diagnostics to a sink as they arrive and tracks the two failure
//! flags a host reads after each phase.
//!
//! ```text
//! scanner / parser / resolver ──error*──▶ ┐
//!                                          ├─▶ Reporter ──▶ sink (stdout)
//! interpreter ──────────runtime_error────▶ ┘        │
//!                                            had_error / had_runtime_error
//! ```

use std::io::{self, Write};

use config::constants::{EXIT_RUNTIME_ERROR, EXIT_SUCCESS, EXIT_SYNTAX_ERROR, END_OF_INPUT_LOCATION};
use lox_ast::Token;

use crate::diagnostic::Diagnostic;
use crate::error::RuntimeError;

/// Diagnostic state for one interpreter session.
///
/// Flags only ever go from false to true; `reset` is the only way back.
///
/// Every reported diagnostic is also kept in memory until `reset` or
/// `take_diagnostics`, so a long-running host such as a REPL should call one
/// of them between inputs.
#[derive(Debug)]
pub struct Reporter<W: Write = io::Stdout> {
    sink: W,
    had_error: bool,
    had_runtime_error: bool,
    diagnostics: Vec<Diagnostic>,
}

impl Reporter<io::Stdout> {
    /// A reporter writing to standard output.
    pub fn new() -> Self {
        Self::with_sink(io::stdout())
    }
}

impl Default for Reporter<io::Stdout> {
    fn default() -> Self {
        Self::new()
    }
}

impl<W: Write> Reporter<W> {
    /// A reporter writing to `sink`.
    pub fn with_sink(sink: W) -> Self {
        Self {
            sink,
            had_error: false,
            had_runtime_error: false,
            diagnostics: Vec::new(),
        }
    }

    /// Reports a syntax error with no location detail.
    pub fn error(&mut self, line: usize, message: &str) {
        self.report(line, "", message);
    }

    /// Reports a syntax error at `token`.
    ///
    /// The location reads ` at end` for the end-of-input token and
    /// ` at '<lexeme>'` otherwise.
    pub fn error_at(&mut self, token: &Token, message: &str) {
        if token.is_eof() {
            self.report(token.line, END_OF_INPUT_LOCATION, message);
        } else {
            let location = format!(" at '{}'", token.lexeme);
            self.report(token.line, &location, message);
        }
    }

    /// Writes `[line N] Error<location>: <message>` and sets `had_error`.
    pub fn report(&mut self, line: usize, location: &str, message: &str) {
        self.had_error = true;
        self.emit(Diagnostic::error(line, location, message));
    }

    /// Writes `[line N] <message>` and sets `had_runtime_error`.
    pub fn runtime_error(&mut self, error: &RuntimeError) {
        self.had_runtime_error = true;
        self.emit(Diagnostic::runtime(error.line(), error.message.as_str()));
    }

    /// Writes `WARNING: <message>`. No flag changes.
    pub fn warning(&mut self, message: &str) {
        self.emit(Diagnostic::warning(message));
    }

    pub fn had_error(&self) -> bool {
        self.had_error
    }

    pub fn had_runtime_error(&self) -> bool {
        self.had_runtime_error
    }

    /// Clears both flags and the recorded diagnostics.
    pub fn reset(&mut self) {
        self.had_error = false;
        self.had_runtime_error = false;
        self.diagnostics.clear();
    }

    /// Exit status for the current state. A syntax error takes precedence.
    pub fn exit_code(&self) -> i32 {
        if self.had_error {
            EXIT_SYNTAX_ERROR
        } else if self.had_runtime_error {
            EXIT_RUNTIME_ERROR
        } else {
            EXIT_SUCCESS
        }
    }

    /// Everything reported since creation, the last `reset` or the last
    /// `take_diagnostics`, in order.
    pub fn diagnostics(&self) -> &[Diagnostic] {
        &self.diagnostics
    }

    /// Removes and returns the recorded diagnostics. Flags are unchanged.
    pub fn take_diagnostics(&mut self) -> Vec<Diagnostic> {
        std::mem::take(&mut self.diagnostics)
    }

    pub fn sink(&self) -> &W {
        &self.sink
    }

    pub fn into_sink(self) -> W {
        self.sink
    }

    fn emit(&mut self, diagnostic: Diagnostic) {
        log::debug!("{:?} reported: {}", diagnostic.severity, diagnostic.message);
        if let Err(err) = writeln!(self.sink, "{diagnostic}").and_then(|()| self.sink.flush()) {
            log::warn!("failed to write diagnostic: {err}");
        }
        self.diagnostics.push(diagnostic);
    }
}
