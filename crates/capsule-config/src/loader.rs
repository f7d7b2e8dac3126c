//! Configuration loader.

use std::fs;
use std::path::Path;

use crate::error::ConfigError;
use crate::schema::Config;

/// Configuration loader with environment variable substitution.
pub struct ConfigLoader;

impl ConfigLoader {
    /// Default config file location: `~/.capsule/config.toml`.
    pub fn default_path() -> std::path::PathBuf {
        dirs::home_dir()
            .unwrap_or_else(|| std::path::PathBuf::from("."))
            .join(".capsule")
            .join("config.toml")
    }

    /// Load configuration from a TOML file. A missing file yields the
    /// defaults rather than an error.
    pub fn load(path: &Path) -> Result<Config, ConfigError> {
        let content = match fs::read_to_string(path) {
            Ok(content) => content,
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => return Ok(Config::default()),
            Err(e) => return Err(e.into()),
        };
        Self::load_str(&content)
    }

    /// Load configuration from a string.
    pub fn load_str(content: &str) -> Result<Config, ConfigError> {
        let expanded = Self::expand_env_vars(content)?;
        let config: Config = toml::from_str(&expanded)?;
        Ok(config)
    }

    /// Expand environment variables in the format `${VAR}`.
    fn expand_env_vars(content: &str) -> Result<String, ConfigError> {
        let mut result = content.to_string();
        let re = regex::Regex::new(r"\$\{([^}]+)\}").unwrap();

        for cap in re.captures_iter(content) {
            let var_name = &cap[1];
            let var_value = std::env::var(var_name)
                .map_err(|_| ConfigError::EnvVarNotSet(var_name.to_string()))?;
            result = result.replace(&cap[0], &var_value);
        }

        Ok(result)
    }
}

#[cfg(test)]
mod tests {
    use std::io::Write;

    use tempfile::NamedTempFile;

    use super::*;

    #[test]
    fn test_load_empty_config_uses_defaults() {
        let config = ConfigLoader::load_str("").unwrap();
        assert_eq!(config.chrome.endpoint, "http://localhost:9222");
        assert_eq!(config.gemini.model, "gemini-2.0-flash");
        assert_eq!(config.handoff.settle_delay_ms, 300);
        assert_eq!(config.handoff.fallback_window_secs, 15);
    }

    #[test]
    fn test_load_basic_config() {
        let content = r#"
            [chrome]
            endpoint = "http://127.0.0.1:9333"

            [gemini]
            api_key = "secret"
            model = "gemini-2.5-pro"
        "#;
        let config = ConfigLoader::load_str(content).unwrap();
        assert_eq!(config.chrome.endpoint, "http://127.0.0.1:9333");
        assert_eq!(config.gemini.api_key, "secret");
        assert_eq!(config.gemini.model, "gemini-2.5-pro");
        // Untouched sections keep defaults.
        assert_eq!(config.handoff.settle_delay_ms, 300);
    }

    #[test]
    fn test_load_from_file() {
        let mut file = NamedTempFile::new().unwrap();
        writeln!(file, "[handoff]").unwrap();
        writeln!(file, "fallback_window_secs = 30").unwrap();

        let config = ConfigLoader::load(file.path()).unwrap();
        assert_eq!(config.handoff.fallback_window_secs, 30);
    }

    #[test]
    fn test_load_missing_file_is_defaults() {
        let config = ConfigLoader::load(Path::new("/nonexistent/capsule.toml")).unwrap();
        assert_eq!(config.gemini.model, "gemini-2.0-flash");
    }

    #[test]
    fn test_load_invalid_toml() {
        let result = ConfigLoader::load_str("invalid = [unclosed");
        assert!(result.is_err());
    }

    #[test]
    fn test_expand_env_vars() {
        // SAFETY: unique test-only variable.
        unsafe {
            std::env::set_var("CAPSULE_TEST_KEY", "k-123");
        }
        let config = ConfigLoader::load_str("[gemini]\napi_key = \"${CAPSULE_TEST_KEY}\"").unwrap();
        assert_eq!(config.gemini.api_key, "k-123");
        unsafe {
            std::env::remove_var("CAPSULE_TEST_KEY");
        }
    }

    #[test]
    fn test_expand_env_vars_not_set() {
        let result = ConfigLoader::load_str("[gemini]\napi_key = \"${CAPSULE_UNSET_VAR_9}\"");
        assert!(matches!(result, Err(ConfigError::EnvVarNotSet(_))));
    }

    #[test]
    fn test_history_capacity_override_and_default() {
        let config = ConfigLoader::load_str("").unwrap();
        assert_eq!(config.history.capacity, 50);

        let config = ConfigLoader::load_str("[history]\ncapacity = 10").unwrap();
        assert_eq!(config.history.capacity, 10);
    }

    #[test]
    fn test_history_path_tilde_expansion() {
        let config = ConfigLoader::load_str("").unwrap();
        let expanded = config.history.expanded_path();
        assert!(!expanded.to_string_lossy().starts_with('~'));
    }
}
