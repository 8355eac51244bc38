//! Descriptor loading and saving.
//!
//! A descriptor lives in a single file. By convention it is named
//! `scanwind.config.json` or `scanwind.config.toml` and sits in the working
//! directory of the tool that reads it. Loading is one atomic read-and-parse:
//! either the whole record is returned or an error is, never a partial result.

use std::path::{Path, PathBuf};

use tracing::{debug, warn};

use crate::error::{ConfigError, ConfigResult};
use crate::schema::ScanAndThemeConfig;

/// File names probed by [`load`], in priority order.
pub const DEFAULT_FILE_NAMES: [&str; 2] = ["scanwind.config.json", "scanwind.config.toml"];

/// On-disk encodings of a descriptor.
#[derive(Clone, Copy, Debug, Eq, PartialEq, Hash)]
pub enum ConfigFormat {
    /// JSON document.
    Json,
    /// TOML document.
    Toml,
}

impl ConfigFormat {
    /// Picks the format from a file extension. Unknown extensions fall back to JSON.
    #[must_use]
    pub fn from_path(path: &Path) -> Self {
        match path.extension().and_then(|ext| ext.to_str()) {
            Some(ext) if ext.eq_ignore_ascii_case("toml") => Self::Toml,
            _ => Self::Json,
        }
    }

    /// Canonical file extension without the leading dot.
    #[must_use]
    pub const fn extension(self) -> &'static str {
        match self {
            Self::Json => "json",
            Self::Toml => "toml",
        }
    }
}

/// Settings controlling where descriptors are looked up.
#[derive(Clone, Debug)]
pub struct ConfigLoader {
    search_dir: PathBuf,
    file_names: Vec<String>,
    search_parents: bool,
}

impl Default for ConfigLoader {
    fn default() -> Self {
        Self {
            search_dir: PathBuf::from("."),
            file_names: DEFAULT_FILE_NAMES.iter().map(ToString::to_string).collect(),
            search_parents: false,
        }
    }
}

impl ConfigLoader {
    /// Creates a loader probing the default file names in the working directory.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Probes `dir` instead of the working directory.
    #[must_use]
    pub fn in_dir(mut self, dir: impl Into<PathBuf>) -> Self {
        self.search_dir = dir.into();
        self
    }

    /// Replaces the candidate file names, highest priority first.
    #[must_use]
    pub fn with_file_names<I, S>(mut self, names: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.file_names = names.into_iter().map(Into::into).collect();
        self
    }

    /// Also probes every ancestor of the search directory, nearest first.
    #[must_use]
    pub const fn search_parents(mut self, enabled: bool) -> Self {
        self.search_parents = enabled;
        self
    }

    /// Returns the directory probed first.
    #[must_use]
    pub fn search_dir(&self) -> &Path {
        &self.search_dir
    }

    /// Locates the descriptor file without reading it.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::NotFound`] naming the first candidate path when
    /// no candidate exists.
    pub fn discover(&self) -> ConfigResult<PathBuf> {
        self.candidates()
            .find(|candidate| candidate.is_file())
            .ok_or_else(|| self.not_found())
    }

    /// Locates and loads the descriptor.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::NotFound`] when no candidate file exists and the
    /// errors of [`load_from`] otherwise.
    pub fn load(&self) -> ConfigResult<ScanAndThemeConfig> {
        let path = self.discover()?;
        load_from(path)
    }

    /// Async variant of [`ConfigLoader::load`].
    ///
    /// # Errors
    ///
    /// Same as [`ConfigLoader::load`].
    pub async fn load_async(&self) -> ConfigResult<ScanAndThemeConfig> {
        let path = self.discover_async().await?;
        load_from_async(path).await
    }

    async fn discover_async(&self) -> ConfigResult<PathBuf> {
        // collected up front so the future stays Send across the awaits
        let candidates: Vec<PathBuf> = self.candidates().collect();
        for candidate in candidates {
            if let Ok(meta) = tokio::fs::metadata(&candidate).await {
                if meta.is_file() {
                    return Ok(candidate);
                }
            }
        }
        Err(self.not_found())
    }

    fn candidates(&self) -> impl Iterator<Item = PathBuf> + '_ {
        let dirs: Box<dyn Iterator<Item = &Path> + '_> = if self.search_parents {
            Box::new(self.search_dir.ancestors())
        } else {
            Box::new(std::iter::once(self.search_dir.as_path()))
        };
        dirs.flat_map(move |dir| self.file_names.iter().map(move |name| dir.join(name)))
    }

    fn not_found(&self) -> ConfigError {
        let name = self
            .file_names
            .first()
            .map_or(DEFAULT_FILE_NAMES[0], String::as_str);
        ConfigError::NotFound {
            path: self.search_dir.join(name),
        }
    }
}

/// Loads the descriptor from the working directory using the default file names.
///
/// # Errors
///
/// Returns [`ConfigError::NotFound`] if no descriptor file exists and
/// [`ConfigError::MalformedConfig`] if it does not parse.
pub fn load() -> ConfigResult<ScanAndThemeConfig> {
    ConfigLoader::default().load()
}

/// Async variant of [`load`].
///
/// # Errors
///
/// Same as [`load`].
pub async fn load_async() -> ConfigResult<ScanAndThemeConfig> {
    ConfigLoader::default().load_async().await
}

/// Loads a descriptor from an explicit path; the extension selects the format.
///
/// # Errors
///
/// Returns [`ConfigError::NotFound`] for a missing file,
/// [`ConfigError::MalformedConfig`] for content that is not a descriptor and
/// [`ConfigError::Io`] for any other read failure.
pub fn load_from(path: impl AsRef<Path>) -> ConfigResult<ScanAndThemeConfig> {
    let path = path.as_ref();
    let contents =
        std::fs::read_to_string(path).map_err(|err| ConfigError::from_io(path, err))?;
    parse_file(path, &contents)
}

/// Async variant of [`load_from`].
///
/// # Errors
///
/// Same as [`load_from`].
pub async fn load_from_async(path: impl AsRef<Path>) -> ConfigResult<ScanAndThemeConfig> {
    let path = path.as_ref();
    let contents = tokio::fs::read_to_string(path)
        .await
        .map_err(|err| ConfigError::from_io(path, err))?;
    parse_file(path, &contents)
}

/// Parses an in-memory descriptor document.
///
/// # Errors
///
/// Returns [`ConfigError::MalformedConfig`] when `input` is not a valid
/// descriptor in `format`.
pub fn parse_str(input: &str, format: ConfigFormat) -> ConfigResult<ScanAndThemeConfig> {
    parse(input, format).map_err(|reason| ConfigError::malformed(None, reason))
}

fn parse(input: &str, format: ConfigFormat) -> Result<ScanAndThemeConfig, String> {
    match format {
        ConfigFormat::Json => serde_json::from_str(input).map_err(|err| err.to_string()),
        ConfigFormat::Toml => toml::from_str(input).map_err(|err| err.message().to_string()),
    }
}

fn parse_file(path: &Path, contents: &str) -> ConfigResult<ScanAndThemeConfig> {
    let format = ConfigFormat::from_path(path);
    let config =
        parse(contents, format).map_err(|reason| ConfigError::malformed(Some(path), reason))?;

    debug!(
        path = %path.display(),
        ?format,
        globs = config.content().len(),
        plugins = config.plugins().len(),
        "loaded configuration"
    );
    if config.content().is_empty() {
        warn!(path = %path.display(), "configuration has no content globs; nothing will be scanned");
    }
    Ok(config)
}

impl ScanAndThemeConfig {
    /// Renders the descriptor as a pretty-printed document.
    ///
    /// TOML has no null, so `null` entries inside untyped theme values are
    /// dropped when rendering TOML. JSON output keeps them.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::Serialize`] when a theme value cannot be
    /// represented in `format`.
    pub fn to_string_pretty(&self, format: ConfigFormat) -> ConfigResult<String> {
        let rendered = match format {
            ConfigFormat::Json => serde_json::to_string_pretty(self).map_err(|err| err.to_string()),
            ConfigFormat::Toml => {
                toml::to_string_pretty(&self.without_nulls()).map_err(|err| err.to_string())
            }
        };
        rendered.map_err(|reason| ConfigError::Serialize { reason })
    }

    /// Writes the descriptor to `path`; the extension selects the format.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::Serialize`] when rendering fails and
    /// [`ConfigError::Io`] when the file cannot be written.
    pub fn save(&self, path: impl AsRef<Path>) -> ConfigResult<()> {
        let path = path.as_ref();
        let format = ConfigFormat::from_path(path);
        let mut rendered = self.to_string_pretty(format)?;
        if !rendered.ends_with('\n') {
            rendered.push('\n');
        }
        std::fs::write(path, rendered).map_err(|source| ConfigError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        debug!(path = %path.display(), ?format, "saved configuration");
        Ok(())
    }
}
