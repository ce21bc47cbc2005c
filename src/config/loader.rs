//! Configuration file discovery and loading.

use std::fs;
use std::path::{Path, PathBuf};

use crate::config::schema::LoaderConfig;
use crate::error::{LoaderError, Result};

/// Configuration file looked up in the project root.
pub const CONFIG_FILE: &str = "wenprise.yml";

/// Default config location for a project.
pub fn default_config_path(project_root: &Path) -> PathBuf {
    project_root.join(CONFIG_FILE)
}

/// Parse configuration text. `path` only labels errors.
pub fn parse_config(content: &str, path: &Path) -> Result<LoaderConfig> {
    if content.trim().is_empty() {
        return Ok(LoaderConfig::default());
    }
    serde_yaml::from_str(content).map_err(|e| LoaderError::ConfigParseError {
        path: path.to_path_buf(),
        message: e.to_string(),
    })
}

/// Load a configuration file that must exist.
pub fn load_config_file(path: &Path) -> Result<LoaderConfig> {
    if !path.exists() {
        return Err(LoaderError::ConfigNotFound {
            path: path.to_path_buf(),
        });
    }
    let content = fs::read_to_string(path)?;
    parse_config(&content, path)
}

/// Load configuration for a project.
///
/// An explicit path must exist. Without one, `<project>/wenprise.yml` is
/// used when present and defaults otherwise. Roots are then overridden by
/// environment variables of the same name.
pub fn load_config(project_root: &Path, explicit: Option<&Path>) -> Result<LoaderConfig> {
    let mut config = match explicit {
        Some(path) => load_config_file(path)?,
        None => {
            let path = default_config_path(project_root);
            if path.exists() {
                load_config_file(&path)?
            } else {
                tracing::debug!("No config at {}, using defaults", path.display());
                LoaderConfig::default()
            }
        }
    };

    config.roots = config.roots.with_env();
    Ok(config)
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn missing_default_config_yields_defaults() {
        let temp = TempDir::new().unwrap();
        let config = load_config(temp.path(), None).unwrap();
        assert_eq!(config.template_path, "wenprise/");
    }

    #[test]
    fn loads_project_config() {
        let temp = TempDir::new().unwrap();
        fs::write(
            temp.path().join(CONFIG_FILE),
            "default_path: /plugin/templates/\n",
        )
        .unwrap();

        let config = load_config(temp.path(), None).unwrap();
        assert_eq!(config.default_path, "/plugin/templates/");
    }

    #[test]
    fn explicit_config_must_exist() {
        let temp = TempDir::new().unwrap();
        let missing = temp.path().join("other.yml");
        let result = load_config(temp.path(), Some(&missing));
        assert!(matches!(result, Err(LoaderError::ConfigNotFound { .. })));
    }

    #[test]
    fn explicit_config_wins() {
        let temp = TempDir::new().unwrap();
        fs::write(temp.path().join(CONFIG_FILE), "template_path: a/\n").unwrap();
        let other = temp.path().join("other.yml");
        fs::write(&other, "template_path: b/\n").unwrap();

        let config = load_config(temp.path(), Some(&other)).unwrap();
        assert_eq!(config.template_path, "b/");
    }

    #[test]
    fn invalid_yaml_is_parse_error() {
        let result = parse_config("template_path: [unclosed", Path::new("bad.yml"));
        match result {
            Err(LoaderError::ConfigParseError { path, .. }) => {
                assert_eq!(path, PathBuf::from("bad.yml"))
            }
            other => panic!("unexpected result: {other:?}"),
        }
    }

    #[test]
    fn empty_file_is_default() {
        let config = parse_config("\n", Path::new("empty.yml")).unwrap();
        assert_eq!(config, LoaderConfig::default());
    }
}
