use std::env;
use std::time::Duration;

use crate::shared::constants::MAX_SEARCH_RADIUS_KM;

#[derive(Debug, Clone)]
pub struct Config {
    pub app: AppConfig,
    pub database: Option<DatabaseConfig>,
    pub search: SearchConfig,
    pub mock: MockSourceConfig,
    pub submission: SubmissionConfig,
    pub swagger: SwaggerConfig,
}

#[derive(Debug, Clone)]
pub struct AppConfig {
    pub host: String,
    pub port: u16,
    pub cors_allowed_origins: Vec<String>,
}

#[derive(Debug, Clone)]
pub struct DatabaseConfig {
    pub url: String,
    pub max_connections: u32,
    pub min_connections: u32,
    pub acquire_timeout_secs: u64,
    pub idle_timeout_secs: u64,
    pub max_lifetime_secs: u64,
}

/// Nearby search tuning: radius filter, result cap and data source timeout
#[derive(Debug, Clone)]
pub struct SearchConfig {
    pub radius_km: f64,
    pub max_results: usize,
    pub source_timeout: Duration,
}

/// Synthetic data source settings, used while no database is configured
#[derive(Debug, Clone)]
pub struct MockSourceConfig {
    pub count: usize,
    pub seed: u64,
}

#[derive(Debug, Clone)]
pub struct SubmissionConfig {
    /// Artificial latency of the logging sink
    pub simulated_delay: Duration,
    pub timeout: Duration,
}

#[derive(Debug, Clone)]
pub struct SwaggerConfig {
    pub username: Option<String>,
    pub password: Option<String>,
    pub title: String,
    pub version: String,
    pub description: String,
}

impl Config {
    pub fn from_env() -> Result<Self, String> {
        // Load .env file if exists, ignore if not found (optional for production)
        if let Err(e) = dotenvy::dotenv() {
            if !e.to_string().contains("not found") {
                eprintln!("Warning: Error loading .env file: {}", e);
            }
        }

        Ok(Config {
            app: AppConfig::from_env()?,
            database: DatabaseConfig::from_env()?,
            search: SearchConfig::from_env()?,
            mock: MockSourceConfig::from_env()?,
            submission: SubmissionConfig::from_env()?,
            swagger: SwaggerConfig::from_env()?,
        })
    }
}

impl AppConfig {
    pub fn from_env() -> Result<Self, String> {
        let host = env::var("HOST").unwrap_or_else(|_| "127.0.0.1".to_string());
        let port = env::var("PORT")
            .unwrap_or_else(|_| "3000".to_string())
            .parse::<u16>()
            .map_err(|e| format!("Invalid PORT: {}", e))?;

        // Parse CORS allowed origins from comma-separated string
        let cors_allowed_origins = env::var("CORS_ALLOWED_ORIGINS")
            .unwrap_or_else(|_| "*".to_string())
            .split(',')
            .map(|s| s.trim().to_string())
            .filter(|s| !s.is_empty())
            .collect();

        Ok(Self {
            host,
            port,
            cors_allowed_origins,
        })
    }

    pub fn server_address(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}

impl DatabaseConfig {
    const DEFAULT_MAX_CONNECTIONS: u32 = 10;
    const DEFAULT_MIN_CONNECTIONS: u32 = 1;
    const DEFAULT_ACQUIRE_TIMEOUT_SECS: u64 = 5;
    const DEFAULT_IDLE_TIMEOUT_SECS: u64 = 600; // 10 minutes
    const DEFAULT_MAX_LIFETIME_SECS: u64 = 1800; // 30 minutes

    /// Returns `None` when `DATABASE_URL` is unset or empty; the service then
    /// runs on the synthetic data source.
    pub fn from_env() -> Result<Option<Self>, String> {
        let Some(url) = env::var("DATABASE_URL").ok().filter(|s| !s.is_empty()) else {
            return Ok(None);
        };

        let max_connections = env::var("DB_MAX_CONNECTIONS")
            .unwrap_or_else(|_| Self::DEFAULT_MAX_CONNECTIONS.to_string())
            .parse::<u32>()
            .map_err(|_| "DB_MAX_CONNECTIONS must be a valid number".to_string())?;

        let min_connections = env::var("DB_MIN_CONNECTIONS")
            .unwrap_or_else(|_| Self::DEFAULT_MIN_CONNECTIONS.to_string())
            .parse::<u32>()
            .map_err(|_| "DB_MIN_CONNECTIONS must be a valid number".to_string())?;

        let acquire_timeout_secs = env::var("DB_ACQUIRE_TIMEOUT_SECS")
            .unwrap_or_else(|_| Self::DEFAULT_ACQUIRE_TIMEOUT_SECS.to_string())
            .parse::<u64>()
            .map_err(|_| "DB_ACQUIRE_TIMEOUT_SECS must be a valid number".to_string())?;

        let idle_timeout_secs = env::var("DB_IDLE_TIMEOUT_SECS")
            .unwrap_or_else(|_| Self::DEFAULT_IDLE_TIMEOUT_SECS.to_string())
            .parse::<u64>()
            .map_err(|_| "DB_IDLE_TIMEOUT_SECS must be a valid number".to_string())?;

        let max_lifetime_secs = env::var("DB_MAX_LIFETIME_SECS")
            .unwrap_or_else(|_| Self::DEFAULT_MAX_LIFETIME_SECS.to_string())
            .parse::<u64>()
            .map_err(|_| "DB_MAX_LIFETIME_SECS must be a valid number".to_string())?;

        Ok(Some(Self {
            url,
            max_connections,
            min_connections,
            acquire_timeout_secs,
            idle_timeout_secs,
            max_lifetime_secs,
        }))
    }
}

impl SearchConfig {
    pub const DEFAULT_RADIUS_KM: f64 = 5.0;
    pub const DEFAULT_MAX_RESULTS: usize = 20;
    const DEFAULT_SOURCE_TIMEOUT_MS: u64 = 3000;

    pub fn from_env() -> Result<Self, String> {
        let radius_km = env::var("SEARCH_RADIUS_KM")
            .unwrap_or_else(|_| Self::DEFAULT_RADIUS_KM.to_string())
            .parse::<f64>()
            .map_err(|_| "SEARCH_RADIUS_KM must be a valid number".to_string())?;

        let max_results = env::var("SEARCH_MAX_RESULTS")
            .unwrap_or_else(|_| Self::DEFAULT_MAX_RESULTS.to_string())
            .parse::<usize>()
            .map_err(|_| "SEARCH_MAX_RESULTS must be a valid number".to_string())?;

        let source_timeout_ms = env::var("SOURCE_TIMEOUT_MS")
            .unwrap_or_else(|_| Self::DEFAULT_SOURCE_TIMEOUT_MS.to_string())
            .parse::<u64>()
            .map_err(|_| "SOURCE_TIMEOUT_MS must be a valid number".to_string())?;

        Self {
            radius_km,
            max_results,
            source_timeout: Duration::from_millis(source_timeout_ms),
        }
        .validated()
    }

    /// Reject settings under which no search could ever return a result
    pub fn validated(self) -> Result<Self, String> {
        if !self.radius_km.is_finite()
            || self.radius_km <= 0.0
            || self.radius_km > MAX_SEARCH_RADIUS_KM
        {
            return Err(format!(
                "SEARCH_RADIUS_KM must be greater than 0 and at most {}",
                MAX_SEARCH_RADIUS_KM
            ));
        }
        if self.max_results == 0 {
            return Err("SEARCH_MAX_RESULTS must be at least 1".to_string());
        }
        if self.source_timeout.is_zero() {
            return Err("SOURCE_TIMEOUT_MS must be greater than 0".to_string());
        }
        Ok(self)
    }
}

impl Default for SearchConfig {
    fn default() -> Self {
        Self {
            radius_km: Self::DEFAULT_RADIUS_KM,
            max_results: Self::DEFAULT_MAX_RESULTS,
            source_timeout: Duration::from_millis(Self::DEFAULT_SOURCE_TIMEOUT_MS),
        }
    }
}

impl MockSourceConfig {
    pub const DEFAULT_COUNT: usize = 8;
    pub const DEFAULT_SEED: u64 = 20240817;

    pub fn from_env() -> Result<Self, String> {
        let count = env::var("MOCK_MOSQUE_COUNT")
            .unwrap_or_else(|_| Self::DEFAULT_COUNT.to_string())
            .parse::<usize>()
            .map_err(|_| "MOCK_MOSQUE_COUNT must be a valid number".to_string())?;

        let seed = env::var("MOCK_SEED")
            .unwrap_or_else(|_| Self::DEFAULT_SEED.to_string())
            .parse::<u64>()
            .map_err(|_| "MOCK_SEED must be a valid number".to_string())?;

        Ok(Self { count, seed })
    }
}

impl Default for MockSourceConfig {
    fn default() -> Self {
        Self {
            count: Self::DEFAULT_COUNT,
            seed: Self::DEFAULT_SEED,
        }
    }
}

impl SubmissionConfig {
    const DEFAULT_DELAY_MS: u64 = 2000;
    const DEFAULT_TIMEOUT_MS: u64 = 10_000;

    pub fn from_env() -> Result<Self, String> {
        let delay_ms = env::var("SUBMISSION_DELAY_MS")
            .unwrap_or_else(|_| Self::DEFAULT_DELAY_MS.to_string())
            .parse::<u64>()
            .map_err(|_| "SUBMISSION_DELAY_MS must be a valid number".to_string())?;

        let timeout_ms = env::var("SUBMISSION_TIMEOUT_MS")
            .unwrap_or_else(|_| Self::DEFAULT_TIMEOUT_MS.to_string())
            .parse::<u64>()
            .map_err(|_| "SUBMISSION_TIMEOUT_MS must be a valid number".to_string())?;

        Ok(Self {
            simulated_delay: Duration::from_millis(delay_ms),
            timeout: Duration::from_millis(timeout_ms),
        })
    }
}

impl SwaggerConfig {
    pub fn from_env() -> Result<Self, String> {
        // Only use credentials if they are non-empty
        let username = env::var("SWAGGER_USERNAME").ok().filter(|s| !s.is_empty());
        let password = env::var("SWAGGER_PASSWORD").ok().filter(|s| !s.is_empty());
        let title = env::var("SWAGGER_TITLE").unwrap_or_else(|_| "Masjid Finder API".to_string());
        let version = env::var("SWAGGER_VERSION").unwrap_or_else(|_| "0.1.0".to_string());
        let description = env::var("SWAGGER_DESCRIPTION")
            .unwrap_or_else(|_| "API documentation for Masjid Finder".to_string());

        Ok(Self {
            username,
            password,
            title,
            version,
            description,
        })
    }

    /// Returns credentials in "username:password" format if auth is enabled
    pub fn credentials(&self) -> Option<String> {
        match (&self.username, &self.password) {
            (Some(user), Some(pass)) => Some(format!("{}:{}", user, pass)),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_search_config_defaults() {
        let config = SearchConfig::default();
        assert_eq!(config.radius_km, 5.0);
        assert_eq!(config.max_results, 20);
        assert_eq!(config.source_timeout, Duration::from_secs(3));
        assert!(config.validated().is_ok());
    }

    #[test]
    fn test_search_config_rejects_unusable_values() {
        let zero_results = SearchConfig {
            max_results: 0,
            ..SearchConfig::default()
        };
        assert!(zero_results.validated().unwrap_err().contains("SEARCH_MAX_RESULTS"));

        let wide_radius = SearchConfig {
            radius_km: 51.0,
            ..SearchConfig::default()
        };
        assert!(wide_radius.validated().unwrap_err().contains("SEARCH_RADIUS_KM"));

        let no_timeout = SearchConfig {
            source_timeout: Duration::ZERO,
            ..SearchConfig::default()
        };
        assert!(no_timeout.validated().is_err());

        let single = SearchConfig {
            max_results: 1,
            ..SearchConfig::default()
        };
        assert!(single.validated().is_ok());
    }

    #[test]
    fn test_swagger_credentials_require_both_parts() {
        let mut config = SwaggerConfig {
            username: Some("admin".to_string()),
            password: None,
            title: "t".to_string(),
            version: "v".to_string(),
            description: "d".to_string(),
        };
        assert_eq!(config.credentials(), None);

        config.password = Some("secret".to_string());
        assert_eq!(config.credentials(), Some("admin:secret".to_string()));
    }

    #[test]
    fn test_server_address() {
        let app = AppConfig {
            host: "0.0.0.0".to_string(),
            port: 8080,
            cors_allowed_origins: vec!["*".to_string()],
        };
        assert_eq!(app.server_address(), "0.0.0.0:8080");
    }
}
