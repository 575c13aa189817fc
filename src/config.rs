use serde::{Deserialize, Serialize};

use crate::error::ConfigError;
use crate::utils::constants::{routes, DEFAULT_API_BASE_URL, DEFAULT_TIMEOUT_SECONDS};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AppConfig {
    pub api_base_url: String,
    pub app_name: String,
    pub app_version: String,
    pub environment: Environment,
    pub enable_dev_tools: bool,
    pub enable_logging: bool,
    pub network_timeout_seconds: u32,
    pub login_route: String,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Environment {
    Development,
    Test,
    Production,
}

impl Environment {
    fn parse(value: &str) -> Option<Self> {
        match value.trim().to_lowercase().as_str() {
            "development" | "dev" => Some(Environment::Development),
            "test" => Some(Environment::Test),
            "production" | "prod" => Some(Environment::Production),
            _ => None,
        }
    }
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            api_base_url: DEFAULT_API_BASE_URL.to_string(),
            app_name: "Investigation Platform".to_string(),
            app_version: "1.0.0".to_string(),
            environment: Environment::Development,
            enable_dev_tools: false,
            enable_logging: true,
            network_timeout_seconds: DEFAULT_TIMEOUT_SECONDS,
            login_route: routes::LOGIN.to_string(),
        }
    }
}

impl AppConfig {
    /// Carga la configuración desde variables de entorno en tiempo de compilación
    /// Valores que no se pueden interpretar caen al valor por defecto
    pub fn from_env() -> Self {
        let defaults = Self::default();
        Self {
            api_base_url: option_env!("API_BASE_URL")
                .map(str::to_string)
                .unwrap_or(defaults.api_base_url),
            app_name: option_env!("APP_NAME")
                .map(str::to_string)
                .unwrap_or(defaults.app_name),
            app_version: option_env!("APP_VERSION")
                .map(str::to_string)
                .unwrap_or(defaults.app_version),
            environment: option_env!("ENVIRONMENT")
                .and_then(Environment::parse)
                .unwrap_or(defaults.environment),
            enable_dev_tools: option_env!("ENABLE_DEV_TOOLS")
                .map(|v| v == "true")
                .unwrap_or(defaults.enable_dev_tools),
            enable_logging: option_env!("ENABLE_LOGGING")
                .and_then(|v| v.parse().ok())
                .unwrap_or(defaults.enable_logging),
            network_timeout_seconds: option_env!("NETWORK_TIMEOUT_SECONDS")
                .and_then(|v| v.parse().ok())
                .unwrap_or(defaults.network_timeout_seconds),
            login_route: option_env!("LOGIN_ROUTE")
                .map(str::to_string)
                .unwrap_or(defaults.login_route),
        }
    }

    /// Valida la configuración antes de arrancar la app
    pub fn validate(&self) -> Result<(), ConfigError> {
        let parsed = url::Url::parse(&self.api_base_url).map_err(|e| ConfigError::InvalidBaseUrl {
            value: self.api_base_url.clone(),
            reason: e.to_string(),
        })?;

        if !matches!(parsed.scheme(), "http" | "https") {
            return Err(ConfigError::InvalidBaseUrl {
                value: self.api_base_url.clone(),
                reason: format!("unsupported scheme '{}'", parsed.scheme()),
            });
        }

        if self.network_timeout_seconds == 0 {
            return Err(ConfigError::InvalidValue {
                key: "NETWORK_TIMEOUT_SECONDS",
                value: self.network_timeout_seconds.to_string(),
            });
        }

        if !self.login_route.starts_with('/') {
            return Err(ConfigError::InvalidValue {
                key: "LOGIN_ROUTE",
                value: self.login_route.clone(),
            });
        }

        Ok(())
    }

    /// URL base sin '/' final
    pub fn base_url(&self) -> &str {
        self.api_base_url.trim_end_matches('/')
    }

    pub fn is_production(&self) -> bool {
        self.environment == Environment::Production
    }

    /// Verifica si el modo de logging está habilitado
    pub fn is_logging_enabled(&self) -> bool {
        self.enable_logging
    }
}

// Configuración global estática
lazy_static::lazy_static! {
    pub static ref CONFIG: AppConfig = AppConfig::from_env();
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config_is_valid() {
        let config = AppConfig::default();
        assert!(config.validate().is_ok());
        assert_eq!(config.network_timeout_seconds, 30);
        assert_eq!(config.login_route, "/login");
    }

    #[test]
    fn test_rejects_invalid_base_url() {
        let config = AppConfig {
            api_base_url: "not a url".to_string(),
            ..AppConfig::default()
        };
        assert!(matches!(config.validate(), Err(ConfigError::InvalidBaseUrl { .. })));

        let config = AppConfig {
            api_base_url: "ftp://files.example.com".to_string(),
            ..AppConfig::default()
        };
        assert!(matches!(config.validate(), Err(ConfigError::InvalidBaseUrl { .. })));
    }

    #[test]
    fn test_rejects_zero_timeout_and_relative_login_route() {
        let config = AppConfig {
            network_timeout_seconds: 0,
            ..AppConfig::default()
        };
        assert!(matches!(
            config.validate(),
            Err(ConfigError::InvalidValue { key: "NETWORK_TIMEOUT_SECONDS", .. })
        ));

        let config = AppConfig {
            login_route: "login".to_string(),
            ..AppConfig::default()
        };
        assert!(matches!(
            config.validate(),
            Err(ConfigError::InvalidValue { key: "LOGIN_ROUTE", .. })
        ));
    }

    #[test]
    fn test_base_url_strips_trailing_slash() {
        let config = AppConfig {
            api_base_url: "https://osint.example.com/api/".to_string(),
            ..AppConfig::default()
        };
        assert_eq!(config.base_url(), "https://osint.example.com/api");
    }

    #[test]
    fn test_environment_parse() {
        assert_eq!(Environment::parse("Production"), Some(Environment::Production));
        assert_eq!(Environment::parse("dev"), Some(Environment::Development));
        assert_eq!(Environment::parse("staging"), None);

        let config = AppConfig {
            environment: Environment::Production,
            ..AppConfig::default()
        };
        assert!(config.is_production());
        assert!(!AppConfig::default().is_production());
    }
}
