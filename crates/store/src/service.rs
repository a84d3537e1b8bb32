//! Session store implementation using Apache OpenDAL.

use opendal::{services, ErrorKind, Operator};
use tracing::debug;

use paymoment_core::account::Account;

use super::config::StoreConfig;
use super::error::StoreError;

/// Local session store for the account aggregate and login flag.
///
/// One JSON object per storage key, written whole on every save.
pub struct SessionStore {
    operator: Operator,
    config: StoreConfig,
}

impl SessionStore {
    /// Creates a session store from configuration, ensuring the root
    /// directory exists.
    ///
    /// # Errors
    ///
    /// Returns an error if the root directory cannot be created or the
    /// filesystem backend cannot be initialized.
    pub fn from_config(config: StoreConfig) -> Result<Self, StoreError> {
        std::fs::create_dir_all(&config.root)
            .map_err(|e| StoreError::configuration(e.to_string()))?;

        let root = config
            .root
            .to_str()
            .ok_or_else(|| StoreError::configuration("invalid storage root path"))?;
        let builder = services::Fs::default().root(root);
        let operator = Operator::new(builder)
            .map_err(|e| StoreError::configuration(e.to_string()))?
            .finish();

        Ok(Self { operator, config })
    }

    fn user_path(&self) -> String {
        format!("{}.json", self.config.user_key)
    }

    fn session_path(&self) -> String {
        self.config.session_key.clone()
    }

    /// Loads the persisted aggregate, or `None` when no registration has
    /// been saved yet.
    ///
    /// # Errors
    ///
    /// Returns an error if the read fails or the stored JSON does not
    /// deserialize (no schema versioning exists - a format change means
    /// `wipe` and re-register).
    pub async fn load_account(&self) -> Result<Option<Account>, StoreError> {
        match self.operator.read(&self.user_path()).await {
            Ok(buffer) => {
                let account = serde_json::from_slice(&buffer.to_vec())?;
                Ok(Some(account))
            }
            Err(err) if err.kind() == ErrorKind::NotFound => Ok(None),
            Err(err) => Err(err.into()),
        }
    }

    /// Persists the whole aggregate. Last write wins.
    ///
    /// # Errors
    ///
    /// Returns an error if serialization or the write fails.
    pub async fn save_account(&self, account: &Account) -> Result<(), StoreError> {
        let bytes = serde_json::to_vec(account)?;
        self.operator.write(&self.user_path(), bytes).await?;
        debug!(key = %self.config.user_key, "account aggregate saved");
        Ok(())
    }

    /// Records the session login flag.
    ///
    /// # Errors
    ///
    /// Returns an error if the write fails.
    pub async fn set_logged_in(&self, logged_in: bool) -> Result<(), StoreError> {
        let flag = if logged_in { b"true".to_vec() } else { b"false".to_vec() };
        self.operator.write(&self.session_path(), flag).await?;
        Ok(())
    }

    /// Reads the session login flag; missing means logged out.
    ///
    /// # Errors
    ///
    /// Returns an error if the read fails.
    pub async fn is_logged_in(&self) -> Result<bool, StoreError> {
        match self.operator.read(&self.session_path()).await {
            Ok(buffer) => Ok(buffer.to_vec() == b"true"),
            Err(err) if err.kind() == ErrorKind::NotFound => Ok(false),
            Err(err) => Err(err.into()),
        }
    }

    /// Clears both storage keys - the "wipe all data" operation.
    ///
    /// # Errors
    ///
    /// Returns an error if a delete fails (missing keys are fine).
    pub async fn wipe(&self) -> Result<(), StoreError> {
        self.operator.delete(&self.user_path()).await?;
        self.operator.delete(&self.session_path()).await?;
        debug!("local storage wiped");
        Ok(())
    }
}
