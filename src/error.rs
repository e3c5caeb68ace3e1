use thiserror::Error;

#[derive(Debug, Error)]
pub enum CommitGenError {
   #[error("Git command failed: {0}")]
   GitError(String),

   #[error("No staged changes found.")]
   NoStagedChanges,

   #[error("API request failed (HTTP {status}): {body}")]
   ApiError { status: u16, body: String },

   #[error("API response is missing `{0}`")]
   MissingField(&'static str),

   #[error("Invalid configuration: {0}")]
   InvalidConfig(String),

   #[error("IO error: {0}")]
   IoError(#[from] std::io::Error),

   #[error("JSON error: {0}")]
   JsonError(#[from] serde_json::Error),

   #[error("HTTP error: {0}")]
   HttpError(#[from] reqwest::Error),

   #[error("Clipboard error: {0}")]
   ClipboardError(#[from] arboard::Error),
}

impl CommitGenError {
   /// Line shown to the user before exiting with status 1.
   ///
   /// The two expected failures keep their short wording; everything else
   /// falls back to the `Display` text.
   pub fn user_message(&self) -> String {
      match self {
         Self::NoStagedChanges => self.to_string(),
         Self::ApiError { body, .. } => format!("Error: {body}"),
         other => format!("Error: {other}"),
      }
   }
}

pub type Result<T> = std::result::Result<T, CommitGenError>;
