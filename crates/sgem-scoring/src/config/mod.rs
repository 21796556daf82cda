use crate::scoring::{HealthThresholds, ScoringConfig, MAX_PROJECTION_YEARS};
use std::env;
use std::fmt;

/// Distinguishes runtime behavior for different stages of the deployment.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AppEnvironment {
    Development,
    Test,
    Production,
}

impl AppEnvironment {
    fn from_str(value: &str) -> Self {
        match value.trim().to_ascii_lowercase().as_str() {
            "prod" | "production" => Self::Production,
            "test" | "ci" => Self::Test,
            _ => Self::Development,
        }
    }
}

/// Top-level configuration for the application.
#[derive(Debug, Clone)]
pub struct AppConfig {
    pub environment: AppEnvironment,
    pub telemetry: TelemetryConfig,
    pub scoring: ScoringConfig,
}

impl AppConfig {
    pub fn load() -> Result<Self, ConfigError> {
        dotenvy::dotenv().ok();

        let environment = AppEnvironment::from_str(
            &env::var("APP_ENV").unwrap_or_else(|_| "development".to_string()),
        );

        let log_level = env::var("APP_LOG_LEVEL").unwrap_or_else(|_| "info".to_string());

        let defaults = ScoringConfig::default();
        let thresholds = HealthThresholds {
            cpi_critical_below: read_f64(
                "SCORING_CPI_CRITICAL",
                defaults.thresholds.cpi_critical_below,
            )?,
            cpi_attention_below: read_f64(
                "SCORING_CPI_ATTENTION",
                defaults.thresholds.cpi_attention_below,
            )?,
            spi_attention_below: read_f64(
                "SCORING_SPI_ATTENTION",
                defaults.thresholds.spi_attention_below,
            )?,
        };

        if thresholds.cpi_critical_below > thresholds.cpi_attention_below {
            return Err(ConfigError::InvertedThresholds {
                critical: thresholds.cpi_critical_below,
                attention: thresholds.cpi_attention_below,
            });
        }

        let cpi_alert_below = read_f64("SCORING_CPI_ALERT", defaults.cpi_alert_below)?;
        let projection_years = match env::var("SCORING_PROJECTION_YEARS") {
            Ok(raw) => raw
                .trim()
                .parse::<u32>()
                .ok()
                .filter(|years| (1..=MAX_PROJECTION_YEARS).contains(years))
                .ok_or(ConfigError::InvalidNumber {
                    key: "SCORING_PROJECTION_YEARS",
                })?,
            Err(_) => defaults.projection_years,
        };

        Ok(Self {
            environment,
            telemetry: TelemetryConfig { log_level },
            scoring: ScoringConfig {
                thresholds,
                cpi_alert_below,
                projection_years,
            },
        })
    }
}

fn read_f64(key: &'static str, default: f64) -> Result<f64, ConfigError> {
    match env::var(key) {
        Ok(raw) => raw
            .trim()
            .parse::<f64>()
            .ok()
            .filter(|value| value.is_finite())
            .ok_or(ConfigError::InvalidNumber { key }),
        Err(_) => Ok(default),
    }
}

/// Tracing controls.
#[derive(Debug, Clone)]
pub struct TelemetryConfig {
    pub log_level: String,
}

#[derive(Debug)]
pub enum ConfigError {
    InvalidNumber { key: &'static str },
    InvertedThresholds { critical: f64, attention: f64 },
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConfigError::InvalidNumber { key } => {
                write!(f, "{} must be a valid number", key)
            }
            ConfigError::InvertedThresholds {
                critical,
                attention,
            } => write!(
                f,
                "SCORING_CPI_CRITICAL ({}) must not exceed SCORING_CPI_ATTENTION ({})",
                critical, attention
            ),
        }
    }
}

impl std::error::Error for ConfigError {}

#[cfg(test)]
mod tests {
    use super::*;
    use std::env;
    use std::sync::{Mutex, OnceLock};

    fn env_guard() -> &'static Mutex<()> {
        static GUARD: OnceLock<Mutex<()>> = OnceLock::new();
        GUARD.get_or_init(|| Mutex::new(()))
    }

    fn reset_env() {
        env::remove_var("APP_ENV");
        env::remove_var("APP_LOG_LEVEL");
        env::remove_var("SCORING_CPI_CRITICAL");
        env::remove_var("SCORING_CPI_ATTENTION");
        env::remove_var("SCORING_SPI_ATTENTION");
        env::remove_var("SCORING_CPI_ALERT");
        env::remove_var("SCORING_PROJECTION_YEARS");
    }

    #[test]
    fn load_uses_defaults_when_env_missing() {
        let _lock = env_guard().lock().expect("env mutex poisoned");
        reset_env();
        let config = AppConfig::load().expect("config loads with defaults");
        assert_eq!(config.environment, AppEnvironment::Development);
        assert_eq!(config.telemetry.log_level, "info");
        assert_eq!(config.scoring.thresholds.cpi_critical_below, 0.90);
        assert_eq!(config.scoring.thresholds.cpi_attention_below, 1.0);
        assert_eq!(config.scoring.thresholds.spi_attention_below, 1.0);
        assert_eq!(config.scoring.cpi_alert_below, 0.95);
        assert_eq!(config.scoring.projection_years, 4);
    }

    #[test]
    fn overrides_thresholds_from_env() {
        let _lock = env_guard().lock().expect("env mutex poisoned");
        reset_env();
        env::set_var("APP_ENV", "prod");
        env::set_var("SCORING_CPI_CRITICAL", "0.8");
        env::set_var("SCORING_PROJECTION_YEARS", "6");
        let config = AppConfig::load().expect("config loads");
        assert_eq!(config.environment, AppEnvironment::Production);
        assert_eq!(config.scoring.thresholds.cpi_critical_below, 0.8);
        assert_eq!(config.scoring.projection_years, 6);
        reset_env();
    }

    #[test]
    fn rejects_malformed_numbers() {
        let _lock = env_guard().lock().expect("env mutex poisoned");
        reset_env();
        env::set_var("SCORING_SPI_ATTENTION", "soon");
        let err = AppConfig::load().expect_err("malformed threshold rejected");
        assert!(matches!(
            err,
            ConfigError::InvalidNumber {
                key: "SCORING_SPI_ATTENTION"
            }
        ));

        reset_env();
        env::set_var("SCORING_PROJECTION_YEARS", "0");
        let err = AppConfig::load().expect_err("zero projection horizon rejected");
        assert!(matches!(
            err,
            ConfigError::InvalidNumber {
                key: "SCORING_PROJECTION_YEARS"
            }
        ));

        reset_env();
        env::set_var("SCORING_PROJECTION_YEARS", "2000000000");
        let err = AppConfig::load().expect_err("oversized projection horizon rejected");
        assert!(matches!(
            err,
            ConfigError::InvalidNumber {
                key: "SCORING_PROJECTION_YEARS"
            }
        ));
        reset_env();
    }

    #[test]
    fn rejects_inverted_cpi_thresholds() {
        let _lock = env_guard().lock().expect("env mutex poisoned");
        reset_env();
        env::set_var("SCORING_CPI_CRITICAL", "1.2");
        let err = AppConfig::load().expect_err("inverted thresholds rejected");
        assert!(matches!(err, ConfigError::InvertedThresholds { .. }));
        reset_env();
    }
}
