//! Core shared types for the scanwind configuration descriptor.

#![warn(missing_docs, clippy::pedantic)]

mod error;
mod glob;
mod length;
mod plugin;

/// Error type and result alias shared across the workspace.
pub use error::{Error, Result};
/// File-path pattern selecting sources to scan for class-name usage.
pub use glob::ContentGlob;
/// Advisory CSS length parsing.
pub use length::{CssLength, LengthUnit};
/// Opaque handle to an extension module of the consuming tool.
pub use plugin::PluginRef;
