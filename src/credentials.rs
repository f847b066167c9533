use anyhow::{Context, Result};
use keyring::{Entry, Error as KeyringError};

/// Keyring-backed store for sender passwords, keyed by sender address.
///
/// Absence of a stored secret is not an error, merely nothing to pre-fill.
#[derive(Clone)]
pub struct CredentialStore {
    service: String,
}

impl CredentialStore {
    pub fn new() -> Self {
        Self {
            service: "batchmail".to_string(),
        }
    }

    /// Store the password for `sender` securely in the system keyring
    pub fn store_password(&self, sender: &str, password: &str) -> Result<()> {
        let entry = Entry::new(&self.service, sender)
            .context("Failed to create keyring entry")?;

        entry
            .set_password(password)
            .context("Failed to store password in keyring")?;

        log::debug!("Password stored securely for {}", sender);
        Ok(())
    }

    /// Retrieve the password stored for `sender`, if any
    pub fn get_password(&self, sender: &str) -> Result<Option<String>> {
        let entry = Entry::new(&self.service, sender)
            .context("Failed to create keyring entry")?;

        match entry.get_password() {
            Ok(password) => Ok(Some(password)),
            Err(KeyringError::NoEntry) => Ok(None),
            Err(e) => Err(anyhow::anyhow!("Failed to retrieve password: {}", e)),
        }
    }

    /// Delete the password stored for `sender`
    pub fn delete_password(&self, sender: &str) -> Result<()> {
        let entry = Entry::new(&self.service, sender)
            .context("Failed to create keyring entry")?;

        match entry.delete_password() {
            Ok(()) => {
                log::debug!("Password deleted for {}", sender);
                Ok(())
            }
            Err(KeyringError::NoEntry) => {
                // Password doesn't exist, that's fine
                Ok(())
            }
            Err(e) => Err(anyhow::anyhow!("Failed to delete password: {}", e)),
        }
    }
}

impl Default for CredentialStore {
    fn default() -> Self {
        Self::new()
    }
}
