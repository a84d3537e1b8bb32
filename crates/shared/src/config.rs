//! Application configuration management.

use serde::Deserialize;

/// Application configuration.
#[derive(Debug, Clone, Deserialize)]
pub struct AppConfig {
    /// Local storage configuration.
    #[serde(default)]
    pub storage: StorageConfig,
    /// Onboarding configuration.
    #[serde(default)]
    pub onboarding: OnboardingConfig,
}

/// Local storage configuration.
///
/// The wallet persists the whole account aggregate as JSON under a single
/// storage key, plus a second key holding the session login flag.
#[derive(Debug, Clone, Deserialize)]
pub struct StorageConfig {
    /// Root directory for local storage.
    #[serde(default = "default_storage_root")]
    pub root: String,
    /// Storage key for the serialized account aggregate.
    #[serde(default = "default_user_key")]
    pub user_key: String,
    /// Storage key for the session login flag.
    #[serde(default = "default_session_key")]
    pub session_key: String,
}

fn default_storage_root() -> String {
    "./data".to_string()
}

fn default_user_key() -> String {
    "paymoment_user_data".to_string()
}

fn default_session_key() -> String {
    "paymoment_is_logged_in".to_string()
}

impl Default for StorageConfig {
    fn default() -> Self {
        Self {
            root: default_storage_root(),
            user_key: default_user_key(),
            session_key: default_session_key(),
        }
    }
}

/// Onboarding configuration for newly registered accounts.
#[derive(Debug, Clone, Deserialize)]
pub struct OnboardingConfig {
    /// Welcome bonus credited in NGN on registration.
    #[serde(default = "default_welcome_bonus")]
    pub welcome_bonus: u64,
    /// Loyalty points granted on registration.
    #[serde(default = "default_starting_points")]
    pub starting_points: u64,
}

fn default_welcome_bonus() -> u64 {
    5000
}

fn default_starting_points() -> u64 {
    50
}

impl Default for OnboardingConfig {
    fn default() -> Self {
        Self {
            welcome_bonus: default_welcome_bonus(),
            starting_points: default_starting_points(),
        }
    }
}

impl AppConfig {
    /// Loads configuration from environment and config files.
    ///
    /// # Errors
    ///
    /// Returns an error if configuration cannot be loaded.
    pub fn load() -> Result<Self, config::ConfigError> {
        let run_mode = std::env::var("RUN_MODE").unwrap_or_else(|_| "development".to_string());

        let config = config::Config::builder()
            .add_source(config::File::with_name("config/default").required(false))
            .add_source(config::File::with_name(&format!("config/{run_mode}")).required(false))
            .add_source(config::Environment::with_prefix("PAYMOMENT").separator("__"))
            .build()?;

        config.try_deserialize()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_storage_defaults() {
        let storage = StorageConfig::default();
        assert_eq!(storage.root, "./data");
        assert_eq!(storage.user_key, "paymoment_user_data");
        assert_eq!(storage.session_key, "paymoment_is_logged_in");
    }

    #[test]
    fn test_onboarding_defaults() {
        let onboarding = OnboardingConfig::default();
        assert_eq!(onboarding.welcome_bonus, 5000);
        assert_eq!(onboarding.starting_points, 50);
    }
}
