//! Staged diff → generation service → `git commit`.

use std::fmt::Write;

use crate::{
   api,
   config::CommitConfig,
   error::Result,
   git, style,
   types::{CommitOutcome, GenerateResponse, GenerationOptions},
};

/// Banner printed after a successful commit
pub const DONE_BANNER: &str = "Commit done with AI-generated message:";

/// Run the pipeline in `dir`.
///
/// Nothing is sent when no changes are staged, and nothing is committed
/// unless the service answered with a message. `dry_run` stops short of
/// `git commit`.
pub fn run(
   dir: &str,
   options: &GenerationOptions,
   config: &CommitConfig,
   dry_run: bool,
) -> Result<CommitOutcome> {
   let diff = git::get_staged_diff(dir)?;

   let response = style::with_spinner_result("Generating commit message...", || {
      api::request_commit_message(&diff, options, config)
   })?;

   let message = response.commit_message.clone();

   if dry_run {
      return Ok(CommitOutcome { message, response, committed: false });
   }

   let git_output = git::git_commit(&message, dir)?;
   if config.verbose && !git_output.trim().is_empty() {
      style::print_info(git_output.trim_end());
   }

   Ok(CommitOutcome { message, response, committed: true })
}

/// Banner and message shown once the run finishes
pub fn render_result(outcome: &CommitOutcome) -> String {
   let header = if outcome.committed {
      style::success(&format!("{} {DONE_BANNER}", style::icons::DONE))
   } else {
      style::bold("Generated commit message (dry run):")
   };
   format!("{header}\n{}", outcome.message)
}

/// Alternatives, labels and (with `include_pr`) PR details returned alongside
/// the message.
///
/// Empty when the service sent none of them.
pub fn render_extras(response: &GenerateResponse, include_pr: bool) -> String {
   let mut out = String::new();

   if !response.alternatives.is_empty() {
      writeln!(out, "{}", style::bold("Alternatives:")).ok();
      writeln!(out, "{}", style::bullet_list(&response.alternatives)).ok();
   }

   if !response.type_labels.is_empty() {
      writeln!(out, "{} {}", style::bold("Labels:"), response.type_labels.join(", ")).ok();
   }

   if include_pr {
      if let Some(ref title) = response.pr_title {
         writeln!(out, "{} {title}", style::bold("PR title:")).ok();
      }
      if let Some(ref body) = response.pr_body {
         writeln!(out, "{}\n{body}", style::bold("PR body:")).ok();
      }
   }

   out.trim_end().to_string()
}
