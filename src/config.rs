//! Configuration management for Library Desk

use config::{Config, ConfigError, Environment, File};
use serde::Deserialize;
use std::env;
use std::path::PathBuf;
use validator::Validate;

#[derive(Debug, Deserialize, Clone)]
#[serde(default)]
pub struct CatalogueConfig {
    pub data_dir: PathBuf,
    pub books_file: String,
    pub magazines_file: String,
    pub journals_file: String,
    /// Location label given to items loaded from file
    pub default_location: String,
    /// Return-duration label given to items loaded from file
    pub default_return_duration: String,
}

impl CatalogueConfig {
    pub fn books_path(&self) -> PathBuf {
        self.data_dir.join(&self.books_file)
    }

    pub fn magazines_path(&self) -> PathBuf {
        self.data_dir.join(&self.magazines_file)
    }

    pub fn journals_path(&self) -> PathBuf {
        self.data_dir.join(&self.journals_file)
    }
}

/// Loan periods in days, at most about a century each
#[derive(Debug, Deserialize, Clone, Validate)]
#[serde(default)]
pub struct LoansConfig {
    #[validate(range(min = 1, max = 36_500, message = "student_days must be between 1 and 36500"))]
    pub student_days: u32,
    #[validate(range(min = 1, max = 36_500, message = "faculty_days must be between 1 and 36500"))]
    pub faculty_days: u32,
    #[validate(range(min = 1, max = 36_500, message = "on_loan_days must be between 1 and 36500"))]
    pub on_loan_days: u32,
}

#[derive(Debug, Deserialize, Clone)]
#[serde(default)]
pub struct LoggingConfig {
    pub level: String,
    pub format: String,
}

#[derive(Debug, Deserialize, Clone, Default)]
#[serde(default)]
pub struct AppConfig {
    pub catalogue: CatalogueConfig,
    pub loans: LoansConfig,
    pub logging: LoggingConfig,
}

impl AppConfig {
    /// Load configuration from files and environment variables
    pub fn load() -> Result<Self, ConfigError> {
        let run_mode = env::var("RUN_MODE").unwrap_or_else(|_| "development".into());

        let config = Config::builder()
            // Built-in defaults come from the Default impls below
            .add_source(File::with_name("config/default").required(false))
            // Layer on the environment-specific file
            .add_source(File::with_name(&format!("config/{}", run_mode)).required(false))
            // Add environment variables (e.g. LIBRARY__LOANS__STUDENT_DAYS=14)
            .add_source(
                Environment::with_prefix("LIBRARY")
                    .separator("__")
                    .try_parsing(true),
            )
            .build()?;

        Self::from_config(config)
    }

    /// Deserialize a built configuration and check value ranges
    pub fn from_config(config: Config) -> Result<Self, ConfigError> {
        let app: AppConfig = config.try_deserialize()?;
        app.loans
            .validate()
            .map_err(|e| ConfigError::Message(format!("Invalid loans configuration: {}", e)))?;
        Ok(app)
    }
}

impl Default for CatalogueConfig {
    fn default() -> Self {
        Self {
            data_dir: PathBuf::from("."),
            books_file: "books.csv".to_string(),
            magazines_file: "magazines.csv".to_string(),
            journals_file: "journals.csv".to_string(),
            default_location: "Unknown location".to_string(),
            default_return_duration: "Unknown duration".to_string(),
        }
    }
}

impl Default for LoansConfig {
    fn default() -> Self {
        Self {
            student_days: 30,
            faculty_days: 180,
            on_loan_days: 7,
        }
    }
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: "info".to_string(),
            format: "pretty".to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = AppConfig::default();
        assert_eq!(config.loans.student_days, 30);
        assert_eq!(config.loans.faculty_days, 180);
        assert_eq!(config.loans.on_loan_days, 7);
        assert_eq!(config.catalogue.default_location, "Unknown location");
        assert_eq!(config.logging.format, "pretty");
    }

    #[test]
    fn test_paths_join_data_dir() {
        let catalogue = CatalogueConfig {
            data_dir: PathBuf::from("data"),
            ..CatalogueConfig::default()
        };
        assert_eq!(catalogue.books_path(), PathBuf::from("data").join("books.csv"));
        assert_eq!(catalogue.journals_path(), PathBuf::from("data").join("journals.csv"));
    }

    #[test]
    fn test_partial_source_keeps_defaults() {
        let config = AppConfig::from_config(
            Config::builder()
                .set_override("loans.student_days", 14i64)
                .unwrap()
                .build()
                .unwrap(),
        )
        .unwrap();
        assert_eq!(config.loans.student_days, 14);
        assert_eq!(config.loans.faculty_days, 180);
        assert_eq!(config.catalogue.books_file, "books.csv");
    }

    #[test]
    fn test_out_of_range_loan_days_are_rejected() {
        let built = Config::builder()
            .set_override("loans.student_days", 4_000_000_000i64)
            .unwrap()
            .build()
            .unwrap();
        let err = AppConfig::from_config(built).unwrap_err();
        assert!(err.to_string().contains("student_days"));

        let zero = Config::builder()
            .set_override("loans.on_loan_days", 0i64)
            .unwrap()
            .build()
            .unwrap();
        assert!(AppConfig::from_config(zero).is_err());
    }

    #[test]
    fn test_default_loans_are_in_range() {
        assert!(LoansConfig::default().validate().is_ok());
    }
}
