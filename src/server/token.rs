//! Credential loading from the secrets directory.
//!
//! The bot token and the session signing secret are kept in plain files, one secret per
//! file, so they can be mounted from a secret store without touching the environment.
//! Only the first line of each file is used.

use std::path::{Path, PathBuf};

use crate::server::error::{config::ConfigError, AppError};

/// File holding the Discord bot token.
pub const BOT_TOKEN_FILE: &str = "discord_token";
/// File holding the secret used to sign session cookies.
pub const SESSION_SECRET_FILE: &str = "session_secret";
/// Minimum length of the session secret; cookie signing keys need 64 bytes of material.
pub const MIN_SESSION_SECRET_LEN: usize = 64;

/// Reads credentials from a directory of secret files.
pub struct TokenStore {
    dir: PathBuf,
}

impl TokenStore {
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self { dir: dir.into() }
    }

    /// Loads the Discord bot token.
    ///
    /// # Returns
    /// - `Ok(String)` - First line of `discord_token`, trailing whitespace removed
    /// - `Err(AppError::ConfigErr)` - File missing, unreadable or empty
    pub async fn bot_token(&self) -> Result<String, AppError> {
        Ok(read_first_line(&self.dir.join(BOT_TOKEN_FILE)).await?)
    }

    /// Loads the session signing secret.
    ///
    /// # Returns
    /// - `Ok(String)` - First line of `session_secret`
    /// - `Err(AppError::ConfigErr)` - File missing, unreadable, empty or shorter than
    ///   `MIN_SESSION_SECRET_LEN` bytes
    pub async fn session_secret(&self) -> Result<String, AppError> {
        let secret = read_first_line(&self.dir.join(SESSION_SECRET_FILE)).await?;

        if secret.len() < MIN_SESSION_SECRET_LEN {
            return Err(ConfigError::InvalidSessionSecret {
                required: MIN_SESSION_SECRET_LEN,
                found: secret.len(),
            }
            .into());
        }

        Ok(secret)
    }
}

async fn read_first_line(path: &Path) -> Result<String, ConfigError> {
    let contents =
        tokio::fs::read_to_string(path)
            .await
            .map_err(|source| ConfigError::UnreadableSecret {
                path: path.to_path_buf(),
                source,
            })?;

    let line = contents.lines().next().unwrap_or_default().trim_end();
    if line.is_empty() {
        return Err(ConfigError::MissingSecret(path.to_path_buf()));
    }

    Ok(line.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn write_secret(dir: &Path, name: &str, contents: &str) {
        std::fs::write(dir.join(name), contents).unwrap();
    }

    /// Tests that only the first line of the token file is returned.
    ///
    /// Expected: Ok with the first line and no trailing newline
    #[tokio::test]
    async fn reads_first_line_of_bot_token() {
        let dir = tempfile::tempdir().unwrap();
        write_secret(dir.path(), BOT_TOKEN_FILE, "abc.def.ghi\nignored\n");

        let token = TokenStore::new(dir.path()).bot_token().await.unwrap();

        assert_eq!(token, "abc.def.ghi");
    }

    /// Tests that a missing token file is reported with its path.
    ///
    /// Expected: Err(ConfigError::UnreadableSecret)
    #[tokio::test]
    async fn fails_when_token_file_missing() {
        let dir = tempfile::tempdir().unwrap();

        let result = TokenStore::new(dir.path()).bot_token().await;

        assert!(matches!(
            result,
            Err(AppError::ConfigErr(ConfigError::UnreadableSecret { ref path, .. }))
                if path.ends_with(BOT_TOKEN_FILE)
        ));
    }

    /// Tests that a blank token file is rejected.
    ///
    /// Expected: Err(ConfigError::MissingSecret)
    #[tokio::test]
    async fn fails_when_token_file_blank() {
        let dir = tempfile::tempdir().unwrap();
        write_secret(dir.path(), BOT_TOKEN_FILE, "   \n");

        let result = TokenStore::new(dir.path()).bot_token().await;

        assert!(matches!(
            result,
            Err(AppError::ConfigErr(ConfigError::MissingSecret(_)))
        ));
    }

    /// Tests that a short session secret is rejected.
    ///
    /// Expected: Err(ConfigError::InvalidSessionSecret) reporting the found length
    #[tokio::test]
    async fn rejects_short_session_secret() {
        let dir = tempfile::tempdir().unwrap();
        write_secret(dir.path(), SESSION_SECRET_FILE, "too-short");

        let result = TokenStore::new(dir.path()).session_secret().await;

        assert!(matches!(
            result,
            Err(AppError::ConfigErr(ConfigError::InvalidSessionSecret { found: 9, .. }))
        ));
    }

    /// Tests that a long enough session secret is accepted.
    ///
    /// Expected: Ok with the secret unchanged
    #[tokio::test]
    async fn accepts_long_session_secret() {
        let dir = tempfile::tempdir().unwrap();
        let secret = "s".repeat(MIN_SESSION_SECRET_LEN);
        write_secret(dir.path(), SESSION_SECRET_FILE, &format!("{}\n", secret));

        let loaded = TokenStore::new(dir.path()).session_secret().await.unwrap();

        assert_eq!(loaded, secret);
    }
}
