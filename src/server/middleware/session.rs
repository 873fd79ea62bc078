//! Type-safe session management wrappers.
//!
//! Each struct wraps the same underlying `Session` but exposes only the methods relevant
//! to its concern, so keys and value types are defined in one place:
//! - `ReturnToSession` - The page a successful moderation action redirects back to
//! - `FlashSession` - A one-shot error message shown on the next page render

use tower_sessions::Session;

use crate::server::error::AppError;

// Session key constants
const SESSION_RETURN_TO_URL: &str = "dashboard:return_to";
const SESSION_FLASH_ERROR: &str = "dashboard:error";

/// "Return-to" URL management.
///
/// Page renders record their own URL; a successful kick or ban consumes it to send the
/// user back to the page the action was issued from.
pub struct ReturnToSession<'a> {
    session: &'a Session,
}

impl<'a> ReturnToSession<'a> {
    pub fn new(session: &'a Session) -> Self {
        Self { session }
    }

    /// Records the URL of the page being rendered.
    ///
    /// # Returns
    /// - `Ok(())` - URL stored
    /// - `Err(AppError::SessionErr(_))` - Failed to store in session
    pub async fn set_url(&self, url: &str) -> Result<(), AppError> {
        self.session
            .insert(SESSION_RETURN_TO_URL, url.to_string())
            .await?;
        Ok(())
    }

    /// Removes and returns the recorded URL.
    ///
    /// # Returns
    /// - `Ok(Some(String))` - A page was recorded; it is now cleared
    /// - `Ok(None)` - Nothing was recorded
    /// - `Err(AppError::SessionErr(_))` - Failed to read from session
    pub async fn take_url(&self) -> Result<Option<String>, AppError> {
        Ok(self.session.remove::<String>(SESSION_RETURN_TO_URL).await?)
    }
}

/// Flashed error message management.
pub struct FlashSession<'a> {
    session: &'a Session,
}

impl<'a> FlashSession<'a> {
    pub fn new(session: &'a Session) -> Self {
        Self { session }
    }

    /// Stores an error message for the next page render, replacing any pending one.
    pub async fn set_error(&self, message: &str) -> Result<(), AppError> {
        self.session
            .insert(SESSION_FLASH_ERROR, message.to_string())
            .await?;
        Ok(())
    }

    /// Removes and returns the pending error message, if any.
    pub async fn take_error(&self) -> Result<Option<String>, AppError> {
        Ok(self.session.remove::<String>(SESSION_FLASH_ERROR).await?)
    }
}
