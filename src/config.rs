use config::{Config, ConfigError, Environment, File};
use serde::Deserialize;
use std::path::Path;

use crate::models::PriceThresholds;

/// Application configuration
#[derive(Debug, Clone, Deserialize, Default)]
pub struct Settings {
    #[serde(default)]
    pub server: ServerSettings,
    #[serde(default)]
    pub catalog: CatalogSettings,
    #[serde(default)]
    pub pricing: PricingSettings,
    #[serde(default)]
    pub session: SessionSettings,
    #[serde(default)]
    pub logging: LoggingSettings,
}

#[derive(Debug, Clone, Deserialize)]
pub struct ServerSettings {
    #[serde(default = "default_host")]
    pub host: String,
    #[serde(default = "default_port")]
    pub port: u16,
    #[serde(default)]
    pub workers: Option<usize>,
}

impl Default for ServerSettings {
    fn default() -> Self {
        Self {
            host: default_host(),
            port: default_port(),
            workers: None,
        }
    }
}

fn default_host() -> String {
    "127.0.0.1".to_string()
}
fn default_port() -> u16 {
    8080
}

/// The closed value sets the environment owns: talent categories, provinces,
/// and event types. The core validates filter input against them but does
/// not define them.
#[derive(Debug, Clone, Deserialize)]
pub struct CatalogSettings {
    #[serde(default = "default_categories")]
    pub categories: Vec<String>,
    #[serde(default = "default_provinces")]
    pub provinces: Vec<String>,
    #[serde(default = "default_event_types")]
    pub event_types: Vec<String>,
}

impl Default for CatalogSettings {
    fn default() -> Self {
        Self {
            categories: default_categories(),
            provinces: default_provinces(),
            event_types: default_event_types(),
        }
    }
}

fn default_categories() -> Vec<String> {
    [
        "Traditional Music",
        "Contemporary Music",
        "Traditional Dance",
        "Modern Dance",
        "Visual Arts",
        "Theatre & Drama",
        "Cultural Ceremonies",
        "Poetry & Spoken Word",
        "Photography",
        "Fashion & Design",
    ]
    .iter()
    .map(|s| s.to_string())
    .collect()
}

fn default_provinces() -> Vec<String> {
    [
        "Kigali",
        "Northern Province",
        "Southern Province",
        "Eastern Province",
        "Western Province",
    ]
    .iter()
    .map(|s| s.to_string())
    .collect()
}

fn default_event_types() -> Vec<String> {
    [
        "Wedding",
        "Corporate Event",
        "Birthday Party",
        "Cultural Festival",
        "Conference",
        "Product Launch",
        "Anniversary",
        "Community Event",
        "Educational Workshop",
        "Religious Ceremony",
    ]
    .iter()
    .map(|s| s.to_string())
    .collect()
}

/// Hourly-rate boundaries for the price buckets (whole RWF)
#[derive(Debug, Clone, Deserialize)]
pub struct PricingSettings {
    #[serde(default = "default_medium_min")]
    pub medium_min: u32,
    #[serde(default = "default_high_min")]
    pub high_min: u32,
}

impl Default for PricingSettings {
    fn default() -> Self {
        Self {
            medium_min: default_medium_min(),
            high_min: default_high_min(),
        }
    }
}

impl PricingSettings {
    pub fn thresholds(&self) -> PriceThresholds {
        PriceThresholds {
            medium_min: self.medium_min,
            high_min: self.high_min,
        }
    }
}

fn default_medium_min() -> u32 {
    50_000
}
fn default_high_min() -> u32 {
    100_000
}

/// Demo credential pair accepted by the mock session service
#[derive(Debug, Clone, Deserialize)]
pub struct SessionSettings {
    #[serde(default = "default_demo_email")]
    pub demo_email: String,
    #[serde(default = "default_demo_password")]
    pub demo_password: String,
}

impl Default for SessionSettings {
    fn default() -> Self {
        Self {
            demo_email: default_demo_email(),
            demo_password: default_demo_password(),
        }
    }
}

fn default_demo_email() -> String {
    "demo@hexahype.com".to_string()
}
fn default_demo_password() -> String {
    "demo123".to_string()
}

#[derive(Debug, Clone, Deserialize)]
pub struct LoggingSettings {
    #[serde(default = "default_log_level")]
    pub level: String,
    #[serde(default = "default_log_format")]
    pub format: String,
}

impl Default for LoggingSettings {
    fn default() -> Self {
        Self {
            level: default_log_level(),
            format: default_log_format(),
        }
    }
}

fn default_log_level() -> String {
    "info".to_string()
}
fn default_log_format() -> String {
    "json".to_string()
}

impl Settings {
    /// Load configuration from file and environment variables
    ///
    /// Configuration is loaded in the following order (later overrides earlier):
    /// 1. Default values in the struct
    /// 2. Configuration file (config/default.toml)
    /// 3. Local overrides (config/local.toml)
    /// 4. Environment variables (prefixed with HEXA__)
    pub fn load() -> Result<Self, ConfigError> {
        let settings = Config::builder()
            .add_source(File::with_name("config/default").required(false))
            .add_source(File::with_name("config/local").required(false))
            // e.g. HEXA__SERVER__PORT -> server.port
            .add_source(
                Environment::with_prefix("HEXA")
                    .prefix_separator("__")
                    .separator("__")
                    .try_parsing(true),
            )
            .build()?;

        settings.try_deserialize()
    }

    /// Load configuration from a custom path
    pub fn load_from<P: AsRef<Path>>(path: P) -> Result<Self, ConfigError> {
        let settings = Config::builder()
            .add_source(File::from(path.as_ref()))
            .add_source(
                Environment::with_prefix("HEXA")
                    .prefix_separator("__")
                    .separator("__")
                    .try_parsing(true),
            )
            .build()?;

        settings.try_deserialize()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_pricing_thresholds() {
        let pricing = PricingSettings::default();
        assert_eq!(pricing.medium_min, 50_000);
        assert_eq!(pricing.high_min, 100_000);

        let thresholds = pricing.thresholds();
        assert_eq!(thresholds.medium_min, 50_000);
        assert_eq!(thresholds.high_min, 100_000);
    }

    #[test]
    fn test_default_catalog_enumerations() {
        let catalog = CatalogSettings::default();
        assert_eq!(catalog.categories.len(), 10);
        assert_eq!(catalog.provinces.len(), 5);
        assert_eq!(catalog.event_types.len(), 10);
        assert!(catalog.categories.contains(&"Contemporary Music".to_string()));
        assert!(catalog.provinces.contains(&"Kigali".to_string()));
    }

    #[test]
    fn test_default_logging() {
        let logging = LoggingSettings::default();
        assert_eq!(logging.level, "info");
        assert_eq!(logging.format, "json");
    }
}
