//! Configuration loader for the ebl-atf command-line tool.
//!
//! `defaults/ebl-atf.default.toml` is embedded into the binary so that the documented
//! defaults and runtime behavior stay in sync. User files and command-line overrides are
//! layered on top of those defaults via [`Loader`] before deserializing into [`AtfConfig`].

use config::builder::DefaultState;
use config::{Config, ConfigBuilder, File, FileFormat, ValueKind};
use serde::Deserialize;
use std::path::{Path, PathBuf};

pub use config::ConfigError;

const DEFAULT_TOML: &str = include_str!("../../defaults/ebl-atf.default.toml");

/// Top-level configuration.
#[derive(Debug, Clone, Deserialize)]
pub struct AtfConfig {
    pub output: OutputConfig,
    pub signs: SignsConfig,
    pub logging: LoggingConfig,
}

#[derive(Debug, Clone, Deserialize)]
pub struct OutputConfig {
    pub pretty: bool,
}

#[derive(Debug, Clone, Deserialize)]
pub struct SignsConfig {
    pub catalog: String,
}

impl SignsConfig {
    /// The catalog path, if one is configured.
    pub fn catalog_path(&self) -> Option<PathBuf> {
        if self.catalog.trim().is_empty() {
            None
        } else {
            Some(PathBuf::from(&self.catalog))
        }
    }
}

#[derive(Debug, Clone, Deserialize)]
pub struct LoggingConfig {
    pub level: String,
}

/// Layers for the command-line tool, lowest first: the embedded defaults, `./ebl-atf.toml`,
/// a `--config` file, then flags (`--catalog`, `--verbose`).
#[derive(Debug, Clone)]
pub struct Loader {
    builder: ConfigBuilder<DefaultState>,
}

impl Loader {
    /// Seeded with pretty JSON output, no sign catalog and `warn` logging.
    pub fn new() -> Self {
        let builder = Config::builder().add_source(File::from_str(DEFAULT_TOML, FileFormat::Toml));
        Self { builder }
    }

    /// Layer a TOML file that must exist, such as the `--config` argument.
    pub fn with_file(self, path: impl AsRef<Path>) -> Self {
        self.with_toml(path.as_ref(), true)
    }

    /// Layer a TOML file that may be absent, such as `./ebl-atf.toml`.
    pub fn with_optional_file(self, path: impl AsRef<Path>) -> Self {
        self.with_toml(path.as_ref(), false)
    }

    fn with_toml(mut self, path: &Path, required: bool) -> Self {
        let source = File::from(path).format(FileFormat::Toml).required(required);
        self.builder = self.builder.add_source(source);
        self
    }

    /// Read signs from this JSON catalog instead of the configured one.
    pub fn with_catalog(self, catalog: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let catalog = catalog.as_ref().to_string_lossy().into_owned();
        self.with_value("signs.catalog", catalog)
    }

    /// Log at `level` (`error` through `trace`) instead of the configured level.
    pub fn with_log_level(self, level: &str) -> Result<Self, ConfigError> {
        self.with_value("logging.level", level)
    }

    fn with_value(mut self, key: &str, value: impl Into<ValueKind>) -> Result<Self, ConfigError> {
        self.builder = self.builder.set_override(key, value)?;
        Ok(self)
    }

    pub fn build(self) -> Result<AtfConfig, ConfigError> {
        self.builder.build()?.try_deserialize()
    }
}

impl Default for Loader {
    fn default() -> Self {
        Self::new()
    }
}

pub fn load_defaults() -> Result<AtfConfig, ConfigError> {
    Loader::new().build()
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn loads_default_config() {
        let config = load_defaults().expect("defaults to deserialize");
        assert!(config.output.pretty);
        assert_eq!(config.signs.catalog_path(), None);
        assert_eq!(config.logging.level, "warn");
    }

    #[test]
    fn catalog_flag_wins_over_files() {
        let mut file = tempfile::Builder::new()
            .suffix(".toml")
            .tempfile()
            .expect("temp file");
        writeln!(file, "[signs]\ncatalog = \"from-file.json\"").expect("write config");

        let config = Loader::new()
            .with_file(file.path())
            .with_catalog("signs.json")
            .expect("override to apply")
            .build()
            .expect("config to build");
        assert_eq!(
            config.signs.catalog_path(),
            Some(PathBuf::from("signs.json"))
        );
    }

    #[test]
    fn log_level_override() {
        let config = Loader::new()
            .with_log_level("trace")
            .expect("override to apply")
            .build()
            .expect("config to build");
        assert_eq!(config.logging.level, "trace");
    }

    #[test]
    fn layers_user_file() {
        let mut file = tempfile::Builder::new()
            .suffix(".toml")
            .tempfile()
            .expect("temp file");
        writeln!(file, "[output]\npretty = false").expect("write config");

        let config = Loader::new()
            .with_file(file.path())
            .build()
            .expect("config to build");
        assert!(!config.output.pretty);
        assert_eq!(config.logging.level, "warn");
    }

    #[test]
    fn missing_optional_file_is_ignored() {
        let config = Loader::new()
            .with_optional_file("does-not-exist.toml")
            .build()
            .expect("config to build");
        assert!(config.output.pretty);
    }

    #[test]
    fn missing_required_file_fails() {
        assert!(Loader::new().with_file("does-not-exist.toml").build().is_err());
    }
}
