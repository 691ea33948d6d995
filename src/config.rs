//! Run configuration for cwe-tree.
//!
//! A run is configured from built-in defaults, then an optional
//! `cwe-tree.config.yml` file, then command-line overrides.

use anyhow::Context;
use serde::Deserialize;
use std::collections::HashMap;
use std::path::{Path, PathBuf};
use std::time::Duration;

use crate::shared::error::CweTreeError;
use crate::shared::Result;
use crate::taxonomy::domain::ViewDefinition;

pub const DEFAULT_BASE_URL: &str = "https://cwe.mitre.org/data/xml/views/";
pub const DEFAULT_SCHEMA_NAMESPACE: &str = "http://cwe.mitre.org/cwe-6";
pub const DEFAULT_TIMEOUT_SECS: u64 = 60;
pub const CONFIG_FILENAME: &str = "cwe-tree.config.yml";

/// Output location relative to the executable's directory
const DEFAULT_OUTPUT_DIR_REL: &str = "html/js";

/// The fixed table of views to generate, in processing order.
pub fn default_views() -> Vec<ViewDefinition> {
    vec![
        ViewDefinition::new("699", "Development Concepts"),
        ViewDefinition::new("1000", "Research Concepts"),
        ViewDefinition::new("1008", "Architectural Concepts"),
    ]
}

/// `html/js` next to the running executable.
pub fn default_output_dir() -> Result<PathBuf> {
    let exe = std::env::current_exe()
        .context("Failed to locate the running executable")?;
    let exe_dir = exe.parent().unwrap_or_else(|| Path::new("."));
    Ok(exe_dir.join(DEFAULT_OUTPUT_DIR_REL))
}

/// Where view archives are read from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SourceLocation {
    /// Download `<base_url><id>.xml.zip`
    Remote { base_url: String },
    /// Read `<archive_dir>/<id>.xml.zip`
    Local { archive_dir: PathBuf },
}

/// Fully resolved settings for one run.
#[derive(Debug, Clone)]
pub struct RunConfig {
    pub views: Vec<ViewDefinition>,
    pub source: SourceLocation,
    pub output_dir: PathBuf,
    pub schema_namespace: String,
    pub timeout: Duration,
    pub quiet: bool,
}

impl RunConfig {
    /// Built-in defaults with the given output directory.
    pub fn with_output_dir(output_dir: PathBuf) -> Self {
        Self {
            views: default_views(),
            source: SourceLocation::Remote {
                base_url: DEFAULT_BASE_URL.to_string(),
            },
            output_dir,
            schema_namespace: DEFAULT_SCHEMA_NAMESPACE.to_string(),
            timeout: Duration::from_secs(DEFAULT_TIMEOUT_SECS),
            quiet: false,
        }
    }

    /// Built-in defaults, writing beside the executable.
    pub fn from_defaults() -> Result<Self> {
        Ok(Self::with_output_dir(default_output_dir()?))
    }

    /// Overlays the values present in a config file.
    pub fn apply_file(&mut self, file: &ConfigFile) {
        if let Some(ref base_url) = file.base_url {
            self.source = SourceLocation::Remote {
                base_url: base_url.clone(),
            };
        }
        if let Some(ref namespace) = file.schema_namespace {
            self.schema_namespace = namespace.clone();
        }
        if let Some(secs) = file.timeout_secs {
            self.timeout = Duration::from_secs(secs);
        }
        if let Some(ref output_dir) = file.output_dir {
            self.output_dir = output_dir.clone();
        }
    }
}

/// Configuration file schema.
#[derive(Debug, Deserialize, Default)]
pub struct ConfigFile {
    pub base_url: Option<String>,
    pub schema_namespace: Option<String>,
    pub timeout_secs: Option<u64>,
    pub output_dir: Option<PathBuf>,
    /// Captures unknown fields for warnings.
    #[serde(flatten)]
    pub unknown_fields: HashMap<String, serde_yaml_ng::Value>,
}

/// Load config from an explicit path. Returns an error if the file is not found.
pub fn load_config_from_path(path: &Path) -> Result<ConfigFile> {
    let content = std::fs::read_to_string(path).with_context(|| {
        format!(
            "Failed to read config file: {}\n\n💡 Hint: Check that the file exists and is readable.",
            path.display()
        )
    })?;

    let config: ConfigFile = serde_yaml_ng::from_str(&content).with_context(|| {
        format!(
            "Failed to parse config file: {}\n\n💡 Hint: Ensure the file contains valid YAML syntax.",
            path.display()
        )
    })?;

    validate_config(&config)?;
    warn_unknown_fields(&config);

    tracing::debug!(path = %path.display(), "loaded config file");
    Ok(config)
}

/// Auto-discover config in a directory. Returns `None` silently if not found.
pub fn discover_config(dir: &Path) -> Result<Option<ConfigFile>> {
    let config_path = dir.join(CONFIG_FILENAME);

    if !config_path.exists() {
        return Ok(None);
    }

    let config = load_config_from_path(&config_path)?;
    Ok(Some(config))
}

fn validate_config(config: &ConfigFile) -> Result<()> {
    if let Some(ref base_url) = config.base_url {
        if base_url.trim().is_empty() {
            return Err(invalid(format!(
                "base_url must not be empty.\n\n\
                 💡 Hint: Remove the key to use {} or set a full URL.",
                DEFAULT_BASE_URL
            )));
        }
    }
    if let Some(ref namespace) = config.schema_namespace {
        if namespace.trim().is_empty() {
            return Err(invalid(format!(
                "schema_namespace must not be empty.\n\n\
                 💡 Hint: The current CWE schema namespace is {}.",
                DEFAULT_SCHEMA_NAMESPACE
            )));
        }
    }
    if config.timeout_secs == Some(0) {
        return Err(invalid(format!(
            "timeout_secs must be greater than zero.\n\n\
             💡 Hint: The default timeout is {} seconds.",
            DEFAULT_TIMEOUT_SECS
        )));
    }
    Ok(())
}

fn invalid(message: String) -> anyhow::Error {
    CweTreeError::Validation {
        message: format!("Invalid config: {}", message),
    }
    .into()
}

fn warn_unknown_fields(config: &ConfigFile) {
    for key in config.unknown_fields.keys() {
        eprintln!(
            "⚠️  Warning: Unknown config field '{}' will be ignored.",
            key
        );
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::TempDir;

    fn assert_validation_error(err: &anyhow::Error, expected: &str) {
        match err.downcast_ref::<CweTreeError>() {
            Some(CweTreeError::Validation { message }) => assert!(message.contains(expected)),
            other => panic!("expected a validation error, got {:?}", other),
        }
    }

    fn write_config(dir: &TempDir, content: &str) -> PathBuf {
        let path = dir.path().join("config.yml");
        fs::write(&path, content).unwrap();
        path
    }

    #[test]
    fn test_default_views_order() {
        let ids: Vec<String> = default_views().iter().map(|v| v.id().to_string()).collect();
        assert_eq!(ids, vec!["699", "1000", "1008"]);
        assert_eq!(default_views()[2].title(), "Architectural Concepts");
    }

    #[test]
    fn test_default_output_dir_is_beside_executable() {
        let dir = default_output_dir().unwrap();
        assert!(dir.ends_with("html/js"));
    }

    #[test]
    fn test_run_config_defaults() {
        let config = RunConfig::with_output_dir(PathBuf::from("out"));
        assert_eq!(
            config.source,
            SourceLocation::Remote {
                base_url: DEFAULT_BASE_URL.to_string()
            }
        );
        assert_eq!(config.schema_namespace, DEFAULT_SCHEMA_NAMESPACE);
        assert_eq!(config.timeout, Duration::from_secs(60));
        assert_eq!(config.views.len(), 3);
        assert!(!config.quiet);
    }

    #[test]
    fn test_load_valid_config() {
        let dir = TempDir::new().unwrap();
        let path = write_config(
            &dir,
            r#"
base_url: "https://mirror.example.org/cwe/"
schema_namespace: "http://cwe.mitre.org/cwe-7"
timeout_secs: 15
output_dir: site/js
"#,
        );

        let config = load_config_from_path(&path).unwrap();
        assert_eq!(
            config.base_url.as_deref(),
            Some("https://mirror.example.org/cwe/")
        );
        assert_eq!(
            config.schema_namespace.as_deref(),
            Some("http://cwe.mitre.org/cwe-7")
        );
        assert_eq!(config.timeout_secs, Some(15));
        assert_eq!(config.output_dir, Some(PathBuf::from("site/js")));
        assert!(config.unknown_fields.is_empty());
    }

    #[test]
    fn test_apply_file_overrides_only_present_values() {
        let mut config = RunConfig::with_output_dir(PathBuf::from("out"));
        let file = ConfigFile {
            timeout_secs: Some(5),
            ..ConfigFile::default()
        };

        config.apply_file(&file);

        assert_eq!(config.timeout, Duration::from_secs(5));
        assert_eq!(config.output_dir, PathBuf::from("out"));
        assert_eq!(config.schema_namespace, DEFAULT_SCHEMA_NAMESPACE);
    }

    #[test]
    fn test_apply_file_base_url_sets_remote_source() {
        let mut config = RunConfig::with_output_dir(PathBuf::from("out"));
        let file = ConfigFile {
            base_url: Some("http://localhost:8080/".to_string()),
            output_dir: Some(PathBuf::from("elsewhere")),
            ..ConfigFile::default()
        };

        config.apply_file(&file);

        assert_eq!(
            config.source,
            SourceLocation::Remote {
                base_url: "http://localhost:8080/".to_string()
            }
        );
        assert_eq!(config.output_dir, PathBuf::from("elsewhere"));
    }

    #[test]
    fn test_discover_config_found() {
        let dir = TempDir::new().unwrap();
        fs::write(dir.path().join(CONFIG_FILENAME), "timeout_secs: 30\n").unwrap();

        let config = discover_config(dir.path()).unwrap();
        assert_eq!(config.unwrap().timeout_secs, Some(30));
    }

    #[test]
    fn test_discover_config_not_found() {
        let dir = TempDir::new().unwrap();
        let config = discover_config(dir.path()).unwrap();
        assert!(config.is_none());
    }

    #[test]
    fn test_load_config_missing_file() {
        let result = load_config_from_path(Path::new("/nonexistent/config.yml"));
        let err = format!("{}", result.unwrap_err());
        assert!(err.contains("Failed to read config file"));
    }

    #[test]
    fn test_load_config_parse_error() {
        let dir = TempDir::new().unwrap();
        let path = write_config(&dir, "invalid: yaml: [[[broken");

        let err = format!("{}", load_config_from_path(&path).unwrap_err());
        assert!(err.contains("Failed to parse config file"));
    }

    #[test]
    fn test_empty_base_url_rejected() {
        let dir = TempDir::new().unwrap();
        let path = write_config(&dir, "base_url: \"  \"\n");

        let err = load_config_from_path(&path).unwrap_err();
        assert_validation_error(&err, "base_url must not be empty");
    }

    #[test]
    fn test_empty_namespace_rejected() {
        let dir = TempDir::new().unwrap();
        let path = write_config(&dir, "schema_namespace: \"\"\n");

        let err = load_config_from_path(&path).unwrap_err();
        assert_validation_error(&err, "schema_namespace must not be empty");
    }

    #[test]
    fn test_zero_timeout_rejected() {
        let dir = TempDir::new().unwrap();
        let path = write_config(&dir, "timeout_secs: 0\n");

        let err = load_config_from_path(&path).unwrap_err();
        assert_validation_error(&err, "timeout_secs must be greater than zero");
    }

    #[test]
    fn test_unknown_fields_are_collected() {
        let dir = TempDir::new().unwrap();
        let path = write_config(
            &dir,
            r#"
timeout_secs: 10
views: ["79"]
retries: 3
"#,
        );

        let config = load_config_from_path(&path).unwrap();
        assert_eq!(config.unknown_fields.len(), 2);
        assert!(config.unknown_fields.contains_key("views"));
        assert!(config.unknown_fields.contains_key("retries"));
    }
}
