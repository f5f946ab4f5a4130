use crate::error::{AssessError, Result};
use crate::types::config::FitcheckConfig;
use std::path::{Path, PathBuf};
use toml::map::Map;
use toml::Value;

pub const DEFAULT_CONFIG_FILE: &str = "fitcheck.toml";
pub const DEFAULT_GLOBAL_CONFIG_FILE: &str = ".config/fitcheck/config.toml";

/// Loads the global config, then `explicit` (which must exist) or
/// `fitcheck.toml` in the working directory, later files winning.
pub fn load_config(explicit: Option<&Path>) -> Result<FitcheckConfig> {
    let global = std::env::var_os("HOME")
        .map(PathBuf::from)
        .map(|home| home.join(DEFAULT_GLOBAL_CONFIG_FILE));
    load_config_with_global(explicit, Path::new("."), global.as_deref())
}

pub(crate) fn load_config_with_global(
    explicit: Option<&Path>,
    cwd: &Path,
    global_path: Option<&Path>,
) -> Result<FitcheckConfig> {
    let mut merged = Value::Table(Map::new());
    if let Some(path) = global_path {
        merge_file_if_exists(&mut merged, path)?;
    }
    match explicit {
        Some(path) => {
            if !path.exists() {
                return Err(AssessError::ConfigNotFound(path.display().to_string()));
            }
            merge_file_if_exists(&mut merged, path)?;
        }
        None => merge_file_if_exists(&mut merged, &cwd.join(DEFAULT_CONFIG_FILE))?,
    }

    let cfg: FitcheckConfig = merged
        .try_into()
        .map_err(|e: toml::de::Error| AssessError::ConfigParse(e.to_string()))?;
    cfg.validate()?;
    Ok(cfg)
}

fn merge_file_if_exists(merged: &mut Value, path: &Path) -> Result<()> {
    if !path.exists() {
        return Ok(());
    }
    tracing::debug!(path = %path.display(), "merging config file");
    let value = read_toml_value(path)?;
    merge_toml(merged, value);
    Ok(())
}

fn read_toml_value(path: &Path) -> Result<Value> {
    let content = std::fs::read_to_string(path)?;
    toml::from_str(&content)
        .map_err(|e| AssessError::ConfigParse(format!("{}: {}", path.display(), e)))
}

fn merge_toml(base: &mut Value, overlay: Value) {
    match (base, overlay) {
        (Value::Table(base_table), Value::Table(overlay_table)) => {
            for (key, value) in overlay_table {
                match base_table.get_mut(&key) {
                    Some(existing) => merge_toml(existing, value),
                    None => {
                        base_table.insert(key, value);
                    }
                }
            }
        }
        (slot, value) => {
            *slot = value;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::config::RecommendationThresholds;
    use std::fs;
    use tempfile::TempDir;

    #[test]
    fn load_config_defaults_when_no_file_exists() {
        let dir = TempDir::new().expect("temp dir should be created");
        let cfg = load_config_with_global(None, dir.path(), None).expect("load should not fail");
        assert_eq!(cfg.thresholds(), RecommendationThresholds::default());
        assert_eq!(cfg.log_level(), "warn");
    }

    #[test]
    fn load_config_merges_global_then_local() {
        let cwd = TempDir::new().expect("cwd temp dir should be created");
        let global_root = TempDir::new().expect("global temp dir should be created");
        let global_path = global_root.path().join("config.toml");

        fs::write(
            &global_path,
            r#"
[thresholds]
strong_fit = 80
developing = 60

[logging]
level = "info"
"#,
        )
        .expect("global config should write");
        fs::write(
            cwd.path().join(DEFAULT_CONFIG_FILE),
            r#"
[thresholds]
developing = 50

[report]
format = "json"
"#,
        )
        .expect("local config should write");

        let cfg = load_config_with_global(None, cwd.path(), Some(&global_path))
            .expect("load should succeed");

        assert_eq!(
            cfg.thresholds(),
            RecommendationThresholds {
                strong_fit: 80,
                developing: 50,
            }
        );
        assert_eq!(cfg.report_format(), Some("json"));
        assert_eq!(cfg.log_level(), "info");
    }

    #[test]
    fn explicit_config_must_exist() {
        let dir = TempDir::new().expect("temp dir should be created");
        let missing = dir.path().join("nope.toml");
        let err = load_config_with_global(Some(&missing), dir.path(), None)
            .expect_err("missing explicit config");
        assert!(matches!(err, AssessError::ConfigNotFound(_)));
    }

    #[test]
    fn explicit_config_replaces_working_directory_file() {
        let dir = TempDir::new().expect("temp dir should be created");
        fs::write(
            dir.path().join(DEFAULT_CONFIG_FILE),
            "[report]\nformat = \"json\"\n",
        )
        .expect("local config should write");
        let explicit = dir.path().join("other.toml");
        fs::write(&explicit, "[logging]\nlevel = \"debug\"\n").expect("explicit should write");

        let cfg = load_config_with_global(Some(&explicit), dir.path(), None)
            .expect("load should succeed");
        assert_eq!(cfg.report_format(), None);
        assert_eq!(cfg.log_level(), "debug");
    }

    #[test]
    fn merged_config_is_validated() {
        let dir = TempDir::new().expect("temp dir should be created");
        fs::write(
            dir.path().join(DEFAULT_CONFIG_FILE),
            "[thresholds]\nstrong_fit = 40\n",
        )
        .expect("local config should write");
        let err = load_config_with_global(None, dir.path(), None).expect_err("invalid thresholds");
        assert!(matches!(err, AssessError::ConfigParse(_)));
    }

    #[test]
    fn malformed_file_names_its_path() {
        let dir = TempDir::new().expect("temp dir should be created");
        fs::write(dir.path().join(DEFAULT_CONFIG_FILE), "[report\n").expect("config should write");
        let err = load_config_with_global(None, dir.path(), None).expect_err("malformed toml");
        assert!(err.to_string().contains(DEFAULT_CONFIG_FILE));
    }
}
