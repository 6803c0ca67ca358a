//! Error types for the Minnotes core library.

use thiserror::Error;

/// All errors that can occur within the Minnotes core library.
#[derive(Debug, Error)]
pub enum NotesError {
    /// The remote list call failed.
    #[error("Fetch failed: {0}")]
    Fetch(String),

    /// The remote insert failed.
    #[error("Create failed: {0}")]
    Create(String),

    /// The remote update failed, including writes to an unknown id.
    #[error("Update failed: {0}")]
    Update(String),

    /// The remote delete failed.
    #[error("Delete failed: {0}")]
    Delete(String),

    /// A local validation check failed before any remote call was made.
    #[error("Validation failed: {0}")]
    Validation(String),

    /// The store connection parameters are missing or unusable.
    #[error("Configuration error: {0}")]
    Config(String),
}

/// Convenience alias that pins the error type to [`NotesError`].
pub type Result<T> = std::result::Result<T, NotesError>;

impl NotesError {
    /// Returns a short, human-readable message suitable for display to the end user.
    #[must_use]
    pub fn user_message(&self) -> String {
        match self {
            Self::Fetch(_) => "Failed to fetch notes.".to_string(),
            Self::Create(_) => "Could not create note.".to_string(),
            Self::Update(_) => "Failed to save note.".to_string(),
            Self::Delete(_) => "Error deleting note.".to_string(),
            Self::Validation(msg) => msg.clone(),
            Self::Config(_) => "Notes store is not configured.".to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_user_messages_hide_transport_detail() {
        let e = NotesError::Fetch("connection reset by peer".to_string());
        assert_eq!(e.user_message(), "Failed to fetch notes.");
        assert!(e.to_string().contains("connection reset"));
    }

    #[test]
    fn test_validation_message_passes_through() {
        let e = NotesError::Validation("Title cannot be empty.".to_string());
        assert_eq!(e.user_message(), "Title cannot be empty.");
    }
}
