use crate::env_variable_utils::{get_api_base_url, get_api_key, get_app_name, is_debug_mode};
use crate::error::ConfigError;

pub const DEFAULT_API_URL: &str = "https://www.omdbapi.com/";
pub const DEFAULT_APP_NAME: &str = "usePopcorn";

/// Settings resolved once at startup and handed to the data sources
/// through a `ContextProvider`.
#[derive(Debug, Clone, PartialEq)]
pub struct Config {
    pub api_key: String,
    pub api_base_url: String,
    pub app_name: String,
    pub debug: bool,
}

impl Config {
    pub fn new(
        api_key: Option<String>,
        api_base_url: Option<String>,
        app_name: Option<String>,
        debug: bool,
    ) -> Result<Self, ConfigError> {
        let api_key = api_key
            .map(|key| key.trim().to_string())
            .filter(|key| !key.is_empty())
            .ok_or(ConfigError::MissingApiKey)?;

        let api_base_url = match api_base_url.filter(|url| !url.trim().is_empty()) {
            Some(url) => validate_base_url(url.trim())?,
            None => DEFAULT_API_URL.to_string(),
        };

        Ok(Self {
            api_key,
            api_base_url,
            app_name: app_name.unwrap_or_else(|| DEFAULT_APP_NAME.to_string()),
            debug,
        })
    }

    pub fn from_env() -> Result<Self, ConfigError> {
        Self::new(get_api_key(), get_api_base_url(), get_app_name(), is_debug_mode())
    }
}

fn validate_base_url(url: &str) -> Result<String, ConfigError> {
    if !(url.starts_with("https://") || url.starts_with("http://")) {
        return Err(ConfigError::InvalidApiUrl {
            url: url.to_string(),
            reason: "expected an http(s) url".to_string(),
        });
    }
    if url.contains('?') {
        return Err(ConfigError::InvalidApiUrl {
            url: url.to_string(),
            reason: "must not carry a query string".to_string(),
        });
    }
    Ok(url.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn missing_key_fails_fast() {
        assert_eq!(
            Config::new(None, None, None, false),
            Err(ConfigError::MissingApiKey)
        );
        assert_eq!(
            Config::new(Some("   ".into()), None, None, false),
            Err(ConfigError::MissingApiKey)
        );
    }

    #[test]
    fn defaults_fill_optional_values() {
        let config = Config::new(Some(" abc123 ".into()), None, None, true).unwrap();
        assert_eq!(config.api_key, "abc123");
        assert_eq!(config.api_base_url, DEFAULT_API_URL);
        assert_eq!(config.app_name, DEFAULT_APP_NAME);
        assert!(config.debug);
    }

    #[test]
    fn rejects_unusable_base_url() {
        let err = Config::new(Some("k".into()), Some("ftp://omdb".into()), None, false);
        assert!(matches!(err, Err(ConfigError::InvalidApiUrl { .. })));

        let err = Config::new(Some("k".into()), Some("https://omdb/?x=1".into()), None, false);
        assert!(matches!(err, Err(ConfigError::InvalidApiUrl { .. })));
    }
}
