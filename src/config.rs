use std::env;

#[derive(Clone, Debug)]
pub struct Config {
    pub database_url: String,
    pub server_host: String,
    pub server_port: u16,
    pub ml_service_url: String,
    pub ml_service_timeout_ms: u64,
}

impl Config {
    pub fn from_env() -> Result<Self, ConfigError> {
        // Load .env file if it exists
        dotenvy::dotenv().ok();

        let database_url = env::var("DATABASE_URL")
            .unwrap_or_else(|_| "sqlite://linkstash.db?mode=rwc".to_string());

        let server_host = env::var("SERVER_HOST").unwrap_or_else(|_| "127.0.0.1".to_string());

        let server_port = env::var("SERVER_PORT")
            .unwrap_or_else(|_| "3001".to_string())
            .parse()
            .map_err(|_| ConfigError::InvalidPort)?;

        let ml_service_url =
            env::var("ML_SERVICE_URL").unwrap_or_else(|_| "http://localhost:8000".to_string());

        let ml_service_timeout_ms = env::var("ML_SERVICE_TIMEOUT_MS")
            .unwrap_or_else(|_| "5000".to_string())
            .parse()
            .map_err(|_| ConfigError::InvalidTimeout)?;

        Ok(Config {
            database_url,
            server_host,
            server_port,
            ml_service_url,
            ml_service_timeout_ms,
        })
    }

    pub fn server_address(&self) -> String {
        format!("{}:{}", self.server_host, self.server_port)
    }
}

#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("Invalid port number")]
    InvalidPort,

    #[error("Invalid ML_SERVICE_TIMEOUT_MS value")]
    InvalidTimeout,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_apply_without_env() {
        // Only checks the fallback values; CI may set none of these vars
        env::remove_var("SERVER_PORT");
        env::remove_var("ML_SERVICE_URL");
        env::remove_var("ML_SERVICE_TIMEOUT_MS");

        let config = Config::from_env().expect("defaults should parse");
        assert_eq!(config.server_port, 3001);
        assert_eq!(config.ml_service_url, "http://localhost:8000");
        assert_eq!(config.ml_service_timeout_ms, 5000);
    }
}
