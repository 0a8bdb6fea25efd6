//! Application Configuration
//!
//! Configuration for the dev endpoints, including the deployment
//! environment that gates them.

use std::fmt;

/// Deployment environment
///
/// Parsed from the `APP_ENV` environment variable. Anything unrecognized is
/// treated as `Production` so the guards fail closed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Environment {
    /// Developer machine
    Local,
    /// Shared development server
    Dev,
    /// Live deployment
    Production,
}

impl Environment {
    /// Read the environment from `APP_ENV`
    pub fn from_env() -> Self {
        std::env::var("APP_ENV")
            .map(|v| Self::parse(&v))
            .unwrap_or(Environment::Production)
    }

    pub fn parse(value: &str) -> Self {
        match value.trim().to_ascii_lowercase().as_str() {
            "local" => Environment::Local,
            "dev" | "development" => Environment::Dev,
            _ => Environment::Production,
        }
    }

    pub fn is_production(&self) -> bool {
        matches!(self, Environment::Production)
    }

    pub fn is_local(&self) -> bool {
        matches!(self, Environment::Local)
    }
}

impl fmt::Display for Environment {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Environment::Local => "local",
            Environment::Dev => "dev",
            Environment::Production => "production",
        };
        write!(f, "{}", name)
    }
}

/// Dev endpoint configuration
#[derive(Debug, Clone)]
pub struct DevToolsConfig {
    /// Deployment environment gating the endpoints
    pub environment: Environment,
    /// Tables emptied by the truncate endpoint
    pub truncate_tables: Vec<String>,
    /// Key of the shared test counter
    pub counter_key: String,
    /// Recipient of the test email
    pub test_email_to: String,
    /// Subject of the test email
    pub test_email_subject: String,
    /// Template name passed to the delivery worker
    pub test_email_template: String,
}

impl Default for DevToolsConfig {
    fn default() -> Self {
        Self {
            environment: Environment::Production,
            truncate_tables: vec!["users".to_string(), "movies".to_string()],
            counter_key: "testcounter".to_string(),
            test_email_to: "dev@example.com".to_string(),
            test_email_subject: "Hello world!".to_string(),
            test_email_template: "welcome.html".to_string(),
        }
    }
}

impl DevToolsConfig {
    /// Create config for development (all endpoints enabled)
    pub fn development() -> Self {
        Self {
            environment: Environment::Local,
            ..Default::default()
        }
    }

    /// Build config from the process environment
    ///
    /// Reads `APP_ENV`, `DEV_TRUNCATE_TABLES` (comma-separated) and
    /// `DEV_TEST_EMAIL_TO`; everything else keeps its default.
    pub fn from_env() -> Self {
        let mut config = Self {
            environment: Environment::from_env(),
            ..Default::default()
        };

        if let Ok(tables) = std::env::var("DEV_TRUNCATE_TABLES") {
            let tables: Vec<String> = tables
                .split(',')
                .map(|t| t.trim().to_string())
                .filter(|t| !t.is_empty())
                .collect();
            if !tables.is_empty() {
                config.truncate_tables = tables;
            }
        }

        if let Ok(to) = std::env::var("DEV_TEST_EMAIL_TO") {
            if !to.trim().is_empty() {
                config.test_email_to = to.trim().to_string();
            }
        }

        config
    }
}
