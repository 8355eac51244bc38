//! Strongly typed descriptor schema.

use std::collections::BTreeMap;

use scanwind_primitives::{ContentGlob, PluginRef};
use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::error::{ConfigError, ConfigResult};

/// Theme key holding the typed [`ContainerOverride`].
const CONTAINER_KEY: &str = "container";

/// The scan-and-theme configuration record.
///
/// Field order on the wire is `content`, `plugins`, `theme` so that formats
/// requiring plain values before nested tables (TOML) render cleanly.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScanAndThemeConfig {
    content: Vec<ContentGlob>,
    #[serde(default)]
    plugins: Vec<PluginRef>,
    #[serde(default)]
    theme: Theme,
}

/// Wrapper matching the `theme: { extend: { ... } }` nesting of the file.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
struct Theme {
    #[serde(default)]
    extend: ThemeExtension,
}

/// Overrides layered on top of the consumer's default design tokens.
///
/// `container` is typed. Any other key is carried verbatim so that theme
/// sections this crate does not model survive a load/save cycle.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ThemeExtension {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    container: Option<ContainerOverride>,
    #[serde(flatten)]
    other: BTreeMap<String, Value>,
}

impl ThemeExtension {
    /// Returns the container override, if configured.
    #[must_use]
    pub fn container(&self) -> Option<&ContainerOverride> {
        self.container.as_ref()
    }

    /// Returns the raw value of an untyped theme key.
    #[must_use]
    pub fn get(&self, key: &str) -> Option<&Value> {
        self.other.get(key)
    }

    /// Iterates over untyped theme keys in sorted order.
    pub fn other(&self) -> impl Iterator<Item = (&str, &Value)> {
        self.other.iter().map(|(k, v)| (k.as_str(), v))
    }

    /// Returns `true` when no override is configured.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.container.is_none() && self.other.is_empty()
    }
}

/// Override record for the `container` utility.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct ContainerOverride {
    center: bool,
    padding: String,
}

impl ContainerOverride {
    /// Creates a container override.
    #[must_use]
    pub fn new(center: bool, padding: impl Into<String>) -> Self {
        Self {
            center,
            padding: padding.into(),
        }
    }

    /// Whether the container utility auto-centers.
    #[must_use]
    pub const fn center(&self) -> bool {
        self.center
    }

    /// CSS length applied as container padding, exactly as written.
    #[must_use]
    pub fn padding(&self) -> &str {
        &self.padding
    }
}

impl ScanAndThemeConfig {
    /// Starts building a descriptor.
    #[must_use]
    pub fn builder() -> ScanAndThemeConfigBuilder {
        ScanAndThemeConfigBuilder::default()
    }

    /// Returns the content globs in declaration order.
    #[must_use]
    pub fn content(&self) -> &[ContentGlob] {
        &self.content
    }

    /// Returns the theme extension.
    #[must_use]
    pub fn theme_extension(&self) -> &ThemeExtension {
        &self.theme.extend
    }

    /// Shorthand for `theme_extension().container()`.
    #[must_use]
    pub fn container(&self) -> Option<&ContainerOverride> {
        self.theme.extend.container()
    }

    /// Returns the plugin references in declaration order.
    #[must_use]
    pub fn plugins(&self) -> &[PluginRef] {
        &self.plugins
    }

    /// Copy with every `null` removed from untyped theme values.
    pub(crate) fn without_nulls(&self) -> Self {
        let mut copy = self.clone();
        copy.theme.extend.other.retain(|_, value| !value.is_null());
        copy.theme.extend.other.values_mut().for_each(strip_nulls);
        copy
    }
}

fn strip_nulls(value: &mut Value) {
    match value {
        Value::Object(map) => {
            map.retain(|_, v| !v.is_null());
            map.values_mut().for_each(strip_nulls);
        }
        Value::Array(items) => {
            items.retain(|v| !v.is_null());
            items.iter_mut().for_each(strip_nulls);
        }
        _ => {}
    }
}

/// Builder for [`ScanAndThemeConfig`].
#[derive(Debug, Default)]
pub struct ScanAndThemeConfigBuilder {
    content: Vec<ContentGlob>,
    extension: ThemeExtension,
    plugins: Vec<PluginRef>,
}

impl ScanAndThemeConfigBuilder {
    /// Appends a content glob.
    #[must_use]
    pub fn add_content(mut self, glob: impl Into<ContentGlob>) -> Self {
        self.content.push(glob.into());
        self
    }

    /// Replaces the content globs.
    #[must_use]
    pub fn content<I, G>(mut self, globs: I) -> Self
    where
        I: IntoIterator<Item = G>,
        G: Into<ContentGlob>,
    {
        self.content = globs.into_iter().map(Into::into).collect();
        self
    }

    /// Sets the container override.
    #[must_use]
    pub fn container(mut self, center: bool, padding: impl Into<String>) -> Self {
        self.extension.container = Some(ContainerOverride::new(center, padding));
        self
    }

    /// Sets an arbitrary theme extension key.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::MalformedConfig`] when `key` is `container` and
    /// `value` does not have the shape of a [`ContainerOverride`].
    pub fn extend(mut self, key: impl Into<String>, value: Value) -> ConfigResult<Self> {
        let key = key.into();
        if key == CONTAINER_KEY {
            let container = serde_json::from_value(value)
                .map_err(|err| ConfigError::malformed(None, format!("theme.extend.container: {err}")))?;
            self.extension.container = Some(container);
        } else {
            self.extension.other.insert(key, value);
        }
        Ok(self)
    }

    /// Appends a plugin reference.
    #[must_use]
    pub fn add_plugin(mut self, plugin: impl Into<PluginRef>) -> Self {
        self.plugins.push(plugin.into());
        self
    }

    /// Consumes the builder and returns the descriptor.
    ///
    /// Nothing is validated here; see [`ScanAndThemeConfig::diagnostics`] for
    /// advisory checks.
    #[must_use]
    pub fn build(self) -> ScanAndThemeConfig {
        ScanAndThemeConfig {
            content: self.content,
            plugins: self.plugins,
            theme: Theme {
                extend: self.extension,
            },
        }
    }
}
