use std::process::Command;

use crate::error::{CommitGenError, Result};

/// Get the staged diff (`git diff --cached`)
///
/// Whitespace-only output counts as nothing staged. A git failure is
/// reported as such rather than as an empty diff.
pub fn get_staged_diff(dir: &str) -> Result<String> {
   let output = Command::new("git")
      .args(["diff", "--cached"])
      .current_dir(dir)
      .output()
      .map_err(|e| CommitGenError::GitError(format!("Failed to run git diff --cached: {e}")))?;

   if !output.status.success() {
      let stderr = String::from_utf8_lossy(&output.stderr);
      return Err(CommitGenError::GitError(format!("git diff --cached failed: {}", stderr.trim())));
   }

   let diff = String::from_utf8_lossy(&output.stdout).to_string();

   if diff.trim().is_empty() {
      return Err(CommitGenError::NoStagedChanges);
   }

   Ok(diff)
}

/// Execute git commit with the given message, returning git's stdout
pub fn git_commit(message: &str, dir: &str) -> Result<String> {
   let output = Command::new("git")
      .args(["commit", "-m", message])
      .current_dir(dir)
      .output()
      .map_err(|e| CommitGenError::GitError(format!("Failed to run git commit: {e}")))?;

   if !output.status.success() {
      let stderr = String::from_utf8_lossy(&output.stderr);
      let stdout = String::from_utf8_lossy(&output.stdout);
      return Err(CommitGenError::GitError(format!(
         "Git commit failed:\nstderr: {stderr}\nstdout: {stdout}"
      )));
   }

   Ok(String::from_utf8_lossy(&output.stdout).to_string())
}
