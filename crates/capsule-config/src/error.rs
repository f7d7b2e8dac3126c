//! Configuration errors.

use thiserror::Error;

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Missing required field: {0}")]
    MissingField(String),

    #[error("Environment variable not set: {0}")]
    EnvVarNotSet(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("TOML parse error: {0}")]
    TomlParse(#[from] toml::de::Error),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_env_var_not_set_display() {
        let err = ConfigError::EnvVarNotSet("GEMINI_API_KEY".to_string());
        assert!(err.to_string().contains("GEMINI_API_KEY"));
        assert!(err.to_string().contains("not set"));
    }

    #[test]
    fn test_missing_field_display() {
        let err = ConfigError::MissingField("gemini.api_key".to_string());
        assert!(err.to_string().contains("gemini.api_key"));
    }

    #[test]
    fn test_io_error_from() {
        let io = std::io::Error::new(std::io::ErrorKind::NotFound, "no config");
        let err = ConfigError::from(io);
        assert!(err.to_string().contains("no config"));
    }
}
