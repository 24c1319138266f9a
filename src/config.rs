use anyhow::Result;
use config::{Config, Environment, File};
use serde::{Deserialize, Serialize};
use std::path::Path;

/// Main configuration structure for siaga-register
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct SiagaRegisterConfig {
    /// Observability settings
    pub observability: ObservabilityConfig,
    /// Validation rule constants applied by the wizard
    pub validation: ValidationRules,
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct ObservabilityConfig {
    /// Log level passed to the tracing subscriber
    pub log_level: String,
    /// Emit log records as JSON instead of human-readable lines
    pub json_logs: bool,
}

/// Constants consumed by the field and page validators.
///
/// Patterns (email, phone, blood type) are fixed; only the numeric knobs
/// that differ between deployments are configurable.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
pub struct ValidationRules {
    /// Minimum length of the full name
    pub full_name_min_len: usize,
    /// Maximum length of the full name
    pub full_name_max_len: usize,
    /// Minimum password length
    pub password_min_len: usize,
    /// Number of digits in the national identity number
    pub national_id_digits: usize,
    /// Number of digits in a postal code
    pub postal_code_digits: usize,
    /// Youngest registrable age, inclusive
    pub age_min: u32,
    /// Oldest registrable age, inclusive
    pub age_max: u32,
    /// Smallest accepted household size
    pub household_min: u32,
    /// Largest accepted household size
    pub household_max: u32,
    /// Maximum length of each address sub-field
    pub address_max_len: usize,
    /// Maximum length of the free-form medical notes
    pub medical_notes_max_len: usize,
}

impl Default for ObservabilityConfig {
    fn default() -> Self {
        Self {
            log_level: "info".to_string(),
            json_logs: false,
        }
    }
}

impl Default for ValidationRules {
    fn default() -> Self {
        Self {
            full_name_min_len: 3,
            full_name_max_len: 100,
            password_min_len: 8,
            national_id_digits: 16,
            postal_code_digits: 5,
            age_min: 18,
            age_max: 100,
            household_min: 1,
            household_max: 20,
            address_max_len: 120,
            medical_notes_max_len: 500,
        }
    }
}

impl Default for SiagaRegisterConfig {
    fn default() -> Self {
        Self {
            observability: ObservabilityConfig::default(),
            validation: ValidationRules::default(),
        }
    }
}

impl SiagaRegisterConfig {
    /// Load configuration from multiple sources with precedence:
    /// 1. Default values
    /// 2. Configuration file (siaga-register.toml)
    /// 3. Environment variables (prefixed with SIAGA_REGISTER__)
    pub fn load() -> Result<Self> {
        let defaults = Config::try_from(&SiagaRegisterConfig::default())?;

        let mut builder = Config::builder().add_source(defaults);

        if Path::new("siaga-register.toml").exists() {
            builder = builder.add_source(File::with_name("siaga-register"));
        }

        builder = builder.add_source(
            Environment::with_prefix("SIAGA_REGISTER")
                .separator("__")
                .try_parsing(true),
        );

        let config = builder.build()?;
        let loaded: SiagaRegisterConfig = config.try_deserialize()?;
        Ok(loaded)
    }

    /// Save configuration to file
    pub fn save_to_file<P: AsRef<Path>>(&self, path: P) -> Result<()> {
        let toml_content = toml::to_string_pretty(self)?;
        std::fs::write(path, toml_content)?;
        Ok(())
    }

    /// Load .env file if it exists
    pub fn load_env_file() -> Result<()> {
        if Path::new(".env").exists() {
            dotenvy::dotenv()?;
            tracing::info!("Loaded environment variables from .env file");
        }
        Ok(())
    }
}

/// Global configuration instance
static CONFIG: std::sync::LazyLock<Result<SiagaRegisterConfig, anyhow::Error>> =
    std::sync::LazyLock::new(|| {
        let _ = SiagaRegisterConfig::load_env_file();
        SiagaRegisterConfig::load()
    });

/// Get the global configuration
pub fn config() -> Result<&'static SiagaRegisterConfig> {
    CONFIG
        .as_ref()
        .map_err(|e| anyhow::anyhow!("Failed to load configuration: {}", e))
}

/// Initialize configuration (called at startup)
pub fn init_config() -> Result<()> {
    let _config = config()?;
    tracing::info!("Configuration loaded successfully");
    Ok(())
}
