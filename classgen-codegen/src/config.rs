//! Formatter configuration.

use std::str::FromStr;

use classgen_core::Indent;
use serde::{Deserialize, Serialize};

use crate::{Error, Result};

/// Settings for [`ClassFormatter`](crate::ClassFormatter).
///
/// The defaults (four-space indent, no banner) produce the reference layout.
///
/// ```
/// use classgen_codegen::FormatterConfig;
/// use classgen_core::Indent;
///
/// let config = FormatterConfig::from_toml_str(
///     r#"
///     indent = "tab"
///     banner = "Created by the schema importer"
///     "#,
/// )
/// .unwrap();
///
/// assert_eq!(config.indent, Indent::Tab);
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct FormatterConfig {
    /// Indentation unit for one level.
    pub indent: Indent,
    /// Extra line in the class doc block, e.g. `Created by ...`.
    pub banner: Option<String>,
}

impl FormatterConfig {
    /// Parse a configuration from TOML.
    pub fn from_toml_str(s: &str) -> Result<Self> {
        toml::from_str(s).map_err(Error::config)
    }

    /// Set the indentation unit.
    pub fn indent(mut self, indent: Indent) -> Self {
        self.indent = indent;
        self
    }

    /// Set the doc block banner.
    pub fn banner(mut self, banner: impl Into<String>) -> Self {
        self.banner = Some(banner.into());
        self
    }
}

impl Default for FormatterConfig {
    fn default() -> Self {
        Self {
            indent: Indent::PHP,
            banner: None,
        }
    }
}

impl FromStr for FormatterConfig {
    type Err = Box<Error>;

    fn from_str(s: &str) -> Result<Self> {
        Self::from_toml_str(s)
    }
}
