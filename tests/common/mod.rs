//! Shared helpers: a throwaway git repository and a mock generation service.
#![allow(dead_code, reason = "Not every test file uses every helper")]

use std::{fs, process::Command};

use ai_commit::CommitConfig;
use tokio::runtime::Runtime;
use wiremock::MockServer;

/// Path the service listens on
pub const GENERATE_PATH: &str = "/api/commit/generate";

/// A git repository in a temp directory with a local identity configured.
pub struct TestRepo {
   pub dir: tempfile::TempDir,
}

impl TestRepo {
   pub fn new() -> Self {
      let dir = tempfile::tempdir().expect("Failed to create temp directory");
      let repo = Self { dir };
      repo.git(&["init", "-q"]);
      repo.git(&["config", "user.name", "Test User"]);
      repo.git(&["config", "user.email", "test@example.com"]);
      repo.git(&["config", "commit.gpgsign", "false"]);
      repo
   }

   pub fn path(&self) -> &str {
      self.dir.path().to_str().expect("temp dir is not UTF-8")
   }

   /// Run git in the repository, panicking on failure. Returns stdout.
   pub fn git(&self, args: &[&str]) -> String {
      let output = Command::new("git")
         .args(args)
         .current_dir(self.dir.path())
         .output()
         .expect("Failed to run git");
      assert!(
         output.status.success(),
         "git {args:?} failed: {}",
         String::from_utf8_lossy(&output.stderr)
      );
      String::from_utf8_lossy(&output.stdout).to_string()
   }

   pub fn write(&self, name: &str, contents: &str) {
      fs::write(self.dir.path().join(name), contents).expect("Failed to write file");
   }

   /// Write a file and stage it.
   pub fn stage(&self, name: &str, contents: &str) {
      self.write(name, contents);
      self.git(&["add", name]);
   }

   pub fn commit_count(&self) -> usize {
      let out = Command::new("git")
         .args(["rev-list", "--count", "HEAD"])
         .current_dir(self.dir.path())
         .output()
         .expect("Failed to run git");
      if !out.status.success() {
         // No HEAD yet
         return 0;
      }
      String::from_utf8_lossy(&out.stdout)
         .trim()
         .parse()
         .expect("rev-list --count output")
   }

   pub fn head_message(&self) -> String {
      self.git(&["log", "-1", "--format=%B"]).trim_end().to_string()
   }
}

/// Multi-threaded runtime hosting the mock server; the blocking client runs
/// on the test thread outside of it.
pub fn runtime() -> Runtime {
   tokio::runtime::Builder::new_multi_thread()
      .enable_all()
      .build()
      .expect("Failed to build tokio runtime")
}

/// Config pointing at the mock server.
pub fn config_for(server: &MockServer) -> CommitConfig {
   CommitConfig {
      api_url: format!("{}{GENERATE_PATH}", server.uri()),
      request_timeout_secs: Some(10),
      ..CommitConfig::default()
   }
}
