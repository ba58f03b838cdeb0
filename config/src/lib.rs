//! # Config Crate
//!
//! Centralized configuration constants for the Lox syntax-tree workspace.
//! Every literal shared between the AST generator, the generated node model
//! and the diagnostic reporter is defined here so the crates cannot drift
//! apart.
//!
//! ## Usage
//!
//! ```rust
//! use config::constants::{END_OF_INPUT_LOCATION, WARNING_PREFIX};
//!
//! let location = END_OF_INPUT_LOCATION;
//! assert_eq!(format!("[line 3] Error{location}: oops"), "[line 3] Error at end: oops");
//! assert_eq!(format!("{WARNING_PREFIX}unused"), "WARNING: unused");
//! ```
//!
//! ## Design Principles
//!
//! - **Single Source of Truth**: All constants defined once, used everywhere
//! - **Deterministic Output**: Nothing here depends on the host environment
//! - **Well-Documented**: Every constant has clear documentation

pub mod constants;
