//! Storage configuration types.

use std::path::PathBuf;

use paymoment_shared::config::StorageConfig;

/// Configuration for the local session store.
#[derive(Debug, Clone)]
pub struct StoreConfig {
    /// Root directory for the filesystem backend.
    pub root: PathBuf,
    /// Storage key for the serialized account aggregate.
    pub user_key: String,
    /// Storage key for the session login flag.
    pub session_key: String,
}

impl StoreConfig {
    /// Default key for the serialized account aggregate.
    pub const DEFAULT_USER_KEY: &'static str = "paymoment_user_data";
    /// Default key for the session login flag.
    pub const DEFAULT_SESSION_KEY: &'static str = "paymoment_is_logged_in";

    /// Creates a config rooted at the given directory with default keys.
    #[must_use]
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self {
            root: root.into(),
            user_key: Self::DEFAULT_USER_KEY.to_string(),
            session_key: Self::DEFAULT_SESSION_KEY.to_string(),
        }
    }

    /// Overrides the storage keys.
    #[must_use]
    pub fn with_keys(mut self, user_key: impl Into<String>, session_key: impl Into<String>) -> Self {
        self.user_key = user_key.into();
        self.session_key = session_key.into();
        self
    }
}

impl From<&StorageConfig> for StoreConfig {
    fn from(settings: &StorageConfig) -> Self {
        Self::new(&settings.root).with_keys(&settings.user_key, &settings.session_key)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_keys() {
        let config = StoreConfig::new("./data");
        assert_eq!(config.user_key, "paymoment_user_data");
        assert_eq!(config.session_key, "paymoment_is_logged_in");
    }

    #[test]
    fn test_from_app_settings() {
        let settings = StorageConfig::default();
        let config = StoreConfig::from(&settings);
        assert_eq!(config.root, PathBuf::from("./data"));
        assert_eq!(config.user_key, settings.user_key);
    }
}
