use std::fmt;

use clap::{Parser, ValueEnum};
use serde::Serialize;

/// Message style requested from the generation service
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, ValueEnum, Serialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum CommitStyle {
   /// Conventional commits (`type(scope): summary`)
   #[default]
   Conventional,
   /// Gitmoji-prefixed messages
   Gitmoji,
   /// Free-form summary line
   Plain,
}

impl CommitStyle {
   pub const fn as_str(self) -> &'static str {
      match self {
         Self::Conventional => "CONVENTIONAL",
         Self::Gitmoji => "GITMOJI",
         Self::Plain => "PLAIN",
      }
   }
}

impl fmt::Display for CommitStyle {
   fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
      f.write_str(self.as_str())
   }
}

/// Generation parameters sent alongside the diff
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GenerationOptions {
   pub style:            CommitStyle,
   pub num_alternatives: u8,
   pub generate_pr:      bool,
}

impl Default for GenerationOptions {
   fn default() -> Self {
      Self { style: CommitStyle::Conventional, num_alternatives: 2, generate_pr: false }
   }
}

/// Body of `POST /api/commit/generate`
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct GenerateRequest {
   pub diff_content:     String,
   pub style:            CommitStyle,
   pub num_alternatives: u8,
   pub generate_pr:      bool,
}

/// Successful reply from the generation service
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct GenerateResponse {
   pub commit_message: String,
   pub alternatives:   Vec<String>,
   pub type_labels:    Vec<String>,
   pub pr_title:       Option<String>,
   pub pr_body:        Option<String>,
}

/// What a run produced
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CommitOutcome {
   /// Message passed to `git commit -m`
   pub message:   String,
   pub response:  GenerateResponse,
   /// False for dry runs
   pub committed: bool,
}

// CLI Args
#[derive(Parser, Debug)]
#[command(
   author,
   version,
   about = "Commit staged changes with a generated commit message",
   long_about = None
)]
pub struct Args {
   /// Directory to run git commands in
   #[arg(long, default_value = ".")]
   pub dir: String,

   /// Generation endpoint (default: http://localhost:8080/api/commit/generate,
   /// or $AICOMMIT_API_URL)
   #[arg(long)]
   pub url: Option<String>,

   /// Message style to request
   #[arg(long, value_enum, default_value = "conventional")]
   pub style: CommitStyle,

   /// Number of alternative messages to request (1-5)
   #[arg(long, default_value_t = 2, value_parser = clap::value_parser!(u8).range(1..=5))]
   pub alternatives: u8,

   /// Also ask the service for a pull request title and body
   #[arg(long)]
   pub pr: bool,

   /// HTTP timeout in seconds (default: wait indefinitely, or
   /// $AICOMMIT_TIMEOUT_SECS)
   #[arg(long)]
   pub timeout: Option<u64>,

   /// Print the generated message without committing
   #[arg(long)]
   pub dry_run: bool,

   /// Copy the message to clipboard
   #[arg(long)]
   pub copy: bool,

   /// Print request details and the raw response
   #[arg(long, short = 'v')]
   pub verbose: bool,
}

impl Args {
   pub const fn generation_options(&self) -> GenerationOptions {
      GenerationOptions {
         style:            self.style,
         num_alternatives: self.alternatives,
         generate_pr:      self.pr,
      }
   }
}

impl Default for Args {
   fn default() -> Self {
      Self {
         dir:          ".".to_string(),
         url:          None,
         style:        CommitStyle::Conventional,
         alternatives: 2,
         pr:           false,
         timeout:      None,
         dry_run:      false,
         copy:         false,
         verbose:      false,
      }
   }
}
