//! Application configuration.
//!
//! [`AppConfig`] is loaded once at startup and passed down by value.  The
//! CLI layer owns config; the core crate never sees it.
//!
//! # Resolution order (highest priority first)
//!
//! 1. CLI flags (handled at the call-site, not here)
//! 2. Environment variables (`REPOGEN_` prefix, `__` as separator)
//! 3. Config file (`--config` path, or the default location if present)
//! 4. Built-in defaults (always present)

use std::path::PathBuf;

use serde::{Deserialize, Serialize};

use repogen_core::domain::DEFAULT_CONTEXT_CLASS;

/// Application configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AppConfig {
    /// Default values for generation.
    pub defaults: Defaults,
    /// Output settings.
    pub output: OutputConfig,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Defaults {
    /// Fallback context class when the Context directory yields nothing.
    pub context_class: String,
    /// Extension (without the dot) of scanned and generated source files.
    pub source_extension: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct OutputConfig {
    pub no_color: bool,
    pub format: String,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            defaults: Defaults {
                context_class: DEFAULT_CONTEXT_CLASS.into(),
                source_extension: "cs".into(),
            },
            output: OutputConfig {
                no_color: false,
                format: "human".into(),
            },
        }
    }
}

impl AppConfig {
    /// Load configuration, starting from defaults.
    ///
    /// `config_file` is the path the user passed via `--config`; when it is
    /// `None` the default location is consulted and silently skipped if the
    /// file does not exist.  An explicitly passed path that fails to load is
    /// an error.
    pub fn load(config_file: Option<&PathBuf>) -> anyhow::Result<Self> {
        let defaults = Self::default();

        let mut builder = config::Config::builder()
            .set_default("defaults.context_class", defaults.defaults.context_class)?
            .set_default(
                "defaults.source_extension",
                defaults.defaults.source_extension,
            )?
            .set_default("output.no_color", defaults.output.no_color)?
            .set_default("output.format", defaults.output.format)?;

        builder = match config_file {
            Some(path) => builder.add_source(config::File::from(path.clone()).required(true)),
            None => builder.add_source(
                config::File::from(Self::config_path())
                    .required(false)
                    .format(config::FileFormat::Toml),
            ),
        };

        // REPOGEN_DEFAULTS__CONTEXT_CLASS=BillingDbContext, etc.
        builder = builder.add_source(config::Environment::with_prefix("REPOGEN").separator("__"));

        let cfg = builder.build()?.try_deserialize()?;
        Ok(cfg)
    }

    /// Path to the default configuration file.
    ///
    /// Uses `directories::ProjectDirs` for cross-platform correctness,
    /// falling back to `.repogen.toml` in the current directory.
    pub fn config_path() -> PathBuf {
        directories::ProjectDirs::from("com", "repogen", "repogen")
            .map(|d| d.config_dir().join("config.toml"))
            .unwrap_or_else(|| PathBuf::from(".repogen.toml"))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn default_context_class() {
        let cfg = AppConfig::default();
        assert_eq!(cfg.defaults.context_class, "AppDbContext");
        assert_eq!(cfg.defaults.source_extension, "cs");
    }

    #[test]
    fn default_no_color_is_false() {
        assert!(!AppConfig::default().output.no_color);
    }

    #[test]
    fn explicit_missing_file_is_error() {
        let path = PathBuf::from("/no/such/config.toml");
        assert!(AppConfig::load(Some(&path)).is_err());
    }

    #[test]
    fn file_overrides_defaults() {
        let mut file = tempfile::Builder::new()
            .suffix(".toml")
            .tempfile()
            .unwrap();
        writeln!(file, "[defaults]\ncontext_class = \"BillingDbContext\"").unwrap();

        let cfg = AppConfig::load(Some(&file.path().to_path_buf())).unwrap();
        assert_eq!(cfg.defaults.context_class, "BillingDbContext");
        // untouched keys keep their defaults
        assert_eq!(cfg.defaults.source_extension, "cs");
    }

    #[test]
    fn config_path_is_non_empty() {
        let p = AppConfig::config_path();
        assert!(!p.as_os_str().is_empty());
    }
}
