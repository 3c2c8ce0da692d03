//! Application configuration management.
//!
//! Configuration is an explicitly constructed object owned by the
//! composition root. Nothing in the domain crates reads process-global
//! state.

use serde::Deserialize;

/// Application configuration.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct AppConfig {
    /// General application settings.
    #[serde(default)]
    pub app: AppSettings,
    /// Demo dataset settings used by the seeding binary.
    #[serde(default)]
    pub demo: DemoSettings,
}

/// General application settings.
#[derive(Debug, Clone, Deserialize)]
pub struct AppSettings {
    /// Application name, used in log output.
    #[serde(default = "default_app_name")]
    pub name: String,
    /// Fallback tracing filter when `RUST_LOG` is unset.
    #[serde(default = "default_log_filter")]
    pub log_filter: String,
}

fn default_app_name() -> String {
    "tallybook".to_string()
}

fn default_log_filter() -> String {
    "tallybook=debug,info".to_string()
}

impl Default for AppSettings {
    fn default() -> Self {
        Self {
            name: default_app_name(),
            log_filter: default_log_filter(),
        }
    }
}

/// Settings for the seeded demo tenant.
#[derive(Debug, Clone, Deserialize)]
pub struct DemoSettings {
    /// Display name of the demo company.
    #[serde(default = "default_company_name")]
    pub company_name: String,
    /// Globally unique code of the demo company.
    #[serde(default = "default_company_code")]
    pub company_code: String,
    /// Reporting currency (ISO 4217) of the demo company.
    #[serde(default = "default_currency")]
    pub currency: String,
    /// Email of the seeded administrator account.
    #[serde(default = "default_admin_email")]
    pub admin_email: String,
    /// Full name of the seeded administrator account.
    #[serde(default = "default_admin_name")]
    pub admin_name: String,
}

fn default_company_name() -> String {
    "DEMO".to_string()
}

fn default_company_code() -> String {
    "DEMO".to_string()
}

fn default_currency() -> String {
    "EUR".to_string()
}

fn default_admin_email() -> String {
    "admin@demo.com".to_string()
}

fn default_admin_name() -> String {
    "Admin User".to_string()
}

impl Default for DemoSettings {
    fn default() -> Self {
        Self {
            company_name: default_company_name(),
            company_code: default_company_code(),
            currency: default_currency(),
            admin_email: default_admin_email(),
            admin_name: default_admin_name(),
        }
    }
}

impl AppConfig {
    /// Loads configuration from environment and config files.
    ///
    /// Layering order: `config/default.toml`, then `config/{RUN_MODE}.toml`,
    /// then environment variables prefixed with `TALLYBOOK` (e.g.
    /// `TALLYBOOK__APP__NAME`). All file sources are optional; serde
    /// defaults make a fileless load succeed.
    ///
    /// # Errors
    ///
    /// Returns an error if configuration cannot be loaded.
    pub fn load() -> Result<Self, config::ConfigError> {
        let run_mode = std::env::var("RUN_MODE").unwrap_or_else(|_| "development".to_string());

        let config = config::Config::builder()
            .add_source(config::File::with_name("config/default").required(false))
            .add_source(config::File::with_name(&format!("config/{run_mode}")).required(false))
            .add_source(config::Environment::with_prefix("TALLYBOOK").separator("__"))
            .build()?;

        config.try_deserialize()
    }
}
