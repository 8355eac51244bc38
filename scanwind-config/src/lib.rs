//! Scan-and-theme configuration descriptor.
//!
//! The descriptor tells a CSS utility-class generator which source files to
//! scan for class-name usage (`content`), which theme overrides to layer on
//! top of its defaults (`theme.extend`) and which plugins to enable
//! (`plugins`). This crate only defines and loads that record; resolving the
//! globs and generating CSS belong to the consuming tool.
//!
//! ```no_run
//! let config = scanwind_config::load()?;
//! for glob in config.content() {
//!     println!("scan {glob}");
//! }
//! # Ok::<(), scanwind_config::ConfigError>(())
//! ```

#![warn(missing_docs, clippy::pedantic)]

mod diagnostics;
mod error;
pub mod loader;
pub mod schema;

/// Advisory findings about a loaded descriptor.
pub use diagnostics::Diagnostic;
/// Error type and result alias for loading and saving descriptors.
pub use error::{ConfigError, ConfigResult};
/// Loader entry points and settings.
pub use loader::{
    ConfigFormat, ConfigLoader, DEFAULT_FILE_NAMES, load, load_async, load_from,
    load_from_async, parse_str,
};
/// The descriptor record and its parts.
pub use schema::{
    ContainerOverride, ScanAndThemeConfig, ScanAndThemeConfigBuilder, ThemeExtension,
};

/// Primitive newtypes used by the record.
pub use scanwind_primitives::{ContentGlob, PluginRef};
