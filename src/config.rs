use crate::error::{CommitGenError, Result};

/// Endpoint of the commit-message generation service
pub const DEFAULT_API_URL: &str = "http://localhost:8080/api/commit/generate";

/// Overrides `api_url`
pub const ENV_API_URL: &str = "AICOMMIT_API_URL";
/// Overrides `request_timeout_secs`
pub const ENV_TIMEOUT_SECS: &str = "AICOMMIT_TIMEOUT_SECS";
/// Enables verbose diagnostics when set
pub const ENV_VERBOSE: &str = "AICOMMIT_VERBOSE";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CommitConfig {
   pub api_url: String,

   /// HTTP request timeout in seconds. `None` waits for the service
   /// indefinitely.
   pub request_timeout_secs: Option<u64>,

   pub verbose: bool,
}

impl Default for CommitConfig {
   fn default() -> Self {
      Self { api_url: DEFAULT_API_URL.to_string(), request_timeout_secs: None, verbose: false }
   }
}

impl CommitConfig {
   /// Load config from defaults and the process environment:
   /// - `AICOMMIT_API_URL` overrides `api_url`
   /// - `AICOMMIT_TIMEOUT_SECS` sets `request_timeout_secs`
   /// - `AICOMMIT_VERBOSE` turns on `verbose`
   pub fn load() -> Result<Self> {
      Self::from_env_vars(|key| std::env::var(key).ok())
   }

   /// Build config from defaults plus whatever `lookup` returns for each
   /// recognized variable
   pub fn from_env_vars<F>(lookup: F) -> Result<Self>
   where
      F: Fn(&str) -> Option<String>,
   {
      let mut config = Self::default();

      if let Some(api_url) = lookup(ENV_API_URL).filter(|v| !v.trim().is_empty()) {
         config.api_url = api_url.trim().to_string();
      }

      if let Some(raw) = lookup(ENV_TIMEOUT_SECS) {
         let secs = raw.trim().parse::<u64>().map_err(|e| {
            CommitGenError::InvalidConfig(format!("{ENV_TIMEOUT_SECS}={raw:?}: {e}"))
         })?;
         config.request_timeout_secs = Some(secs);
      }

      if lookup(ENV_VERBOSE).is_some() {
         config.verbose = true;
      }

      Ok(config)
   }
}
