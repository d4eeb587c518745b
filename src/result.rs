//! Error handling and result types for herald.
//!
//! This module provides a unified error handling approach at the CLI
//! boundary using the `color-eyre` crate, which offers enhanced error
//! reporting with context, suggestions, and colored output.
//!
//! Command and argument handling code returns the `Result<T>` type defined
//! here; core formatting logic returns the typed
//! [`crate::error::Result`] and converts automatically when propagated
//! with `?`.

use color_eyre::eyre::Result as EyreResult;

/// Standard result type used at the herald CLI boundary.
///
/// This is a type alias for `color_eyre::eyre::Result<T>`, providing
/// enhanced error reporting capabilities including:
///
/// - Colorized error output in terminals
/// - Automatic error context and suggestions
/// - Chain-able error contexts using `.wrap_err()`
pub type Result<T> = EyreResult<T>;
