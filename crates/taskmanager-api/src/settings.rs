use config::{Config, ConfigError, Environment};
use serde::Deserialize;

/// Server settings, read from the process environment (`API_HOST`,
/// `API_PORT`, `DATABASE_URL`).
#[derive(Debug, Clone, Deserialize)]
pub struct ApiConfig {
    pub api_host: String,
    pub api_port: u16,
    #[serde(default)]
    pub database_url: Option<String>,
}

impl ApiConfig {
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_environment(Environment::default())
    }

    fn from_environment(environment: Environment) -> Result<Self, ConfigError> {
        Config::builder()
            .set_default("api_host", "0.0.0.0")?
            .set_default("api_port", 3000_i64)?
            .add_source(environment.try_parsing(true))
            .build()?
            .try_deserialize()
    }

    pub fn bind_addr(&self) -> String {
        format!("{}:{}", self.api_host, self.api_port)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn environment(vars: &[(&str, &str)]) -> Environment {
        Environment::default().source(Some(
            vars.iter()
                .map(|(key, value)| (key.to_string(), value.to_string()))
                .collect(),
        ))
    }

    #[test]
    fn test_defaults() {
        let config = ApiConfig::from_environment(environment(&[])).unwrap();

        assert_eq!(config.api_port, 3000);
        assert!(config.database_url.is_none());
        assert_eq!(config.bind_addr(), "0.0.0.0:3000");
    }

    #[test]
    fn test_environment_overrides() {
        let config = ApiConfig::from_environment(environment(&[
            ("API_PORT", "8080"),
            ("DATABASE_URL", "postgres://localhost/tasks"),
        ]))
        .unwrap();

        assert_eq!(config.api_port, 8080);
        assert_eq!(
            config.database_url.as_deref(),
            Some("postgres://localhost/tasks")
        );
    }

    #[test]
    fn test_invalid_port_rejected() {
        let result = ApiConfig::from_environment(environment(&[("API_PORT", "not-a-port")]));
        assert!(result.is_err());
    }
}
