//! Runs the `aicommit` binary and checks exit status and what lands on
//! stdout/stderr.

mod common;

use std::process::{Command, Output};

use common::{GENERATE_PATH, TestRepo, runtime};
use serde_json::json;
use wiremock::{
   Mock, MockServer, ResponseTemplate,
   matchers::{method, path},
};

fn aicommit(repo: &TestRepo, url: &str) -> Output {
   Command::new(env!("CARGO_BIN_EXE_aicommit"))
      .args(["--dir", repo.path(), "--url", url, "--timeout", "10"])
      .env("NO_COLOR", "1")
      .env_remove("AICOMMIT_API_URL")
      .env_remove("AICOMMIT_TIMEOUT_SECS")
      .env_remove("AICOMMIT_VERBOSE")
      .output()
      .expect("Failed to run aicommit")
}

fn stdout(output: &Output) -> String {
   String::from_utf8_lossy(&output.stdout).to_string()
}

fn generate_url(server: &MockServer) -> String {
   format!("{}{GENERATE_PATH}", server.uri())
}

#[test]
fn test_empty_diff_exits_1() {
   let rt = runtime();
   let server = rt.block_on(MockServer::start());
   rt.block_on(
      Mock::given(method("POST"))
         .respond_with(ResponseTemplate::new(200))
         .expect(0)
         .mount(&server),
   );

   let repo = TestRepo::new();
   let output = aicommit(&repo, &generate_url(&server));

   assert_eq!(output.status.code(), Some(1));
   assert_eq!(stdout(&output), "No staged changes found.\n");
}

#[test]
fn test_server_error_exits_1_with_body() {
   let rt = runtime();
   let server = rt.block_on(MockServer::start());
   rt.block_on(
      Mock::given(method("POST"))
         .and(path(GENERATE_PATH))
         .respond_with(ResponseTemplate::new(500).set_body_string("model overloaded"))
         .expect(1)
         .mount(&server),
   );

   let repo = TestRepo::new();
   repo.stage("a.txt", "a\n");
   let output = aicommit(&repo, &generate_url(&server));

   assert_eq!(output.status.code(), Some(1));
   assert_eq!(stdout(&output), "Error: model overloaded\n");
   assert_eq!(repo.commit_count(), 0);
}

#[test]
fn test_success_prints_banner_then_message() {
   let rt = runtime();
   let server = rt.block_on(MockServer::start());
   rt.block_on(
      Mock::given(method("POST"))
         .and(path(GENERATE_PATH))
         .respond_with(
            ResponseTemplate::new(200).set_body_json(json!({ "commitMessage": "feat: add login" })),
         )
         .expect(1)
         .mount(&server),
   );

   let repo = TestRepo::new();
   repo.stage("login.rs", "fn login() {}\n");
   let output = aicommit(&repo, &generate_url(&server));

   assert_eq!(output.status.code(), Some(0));
   assert_eq!(stdout(&output), "\u{2705} Commit done with AI-generated message:\nfeat: add login\n");
   assert_eq!(repo.head_message(), "feat: add login");
}

#[cfg(unix)]
#[test]
fn test_failed_commit_exits_1_without_banner() {
   use std::os::unix::fs::PermissionsExt;

   let rt = runtime();
   let server = rt.block_on(MockServer::start());
   rt.block_on(
      Mock::given(method("POST"))
         .respond_with(
            ResponseTemplate::new(200).set_body_json(json!({ "commitMessage": "feat: add login" })),
         )
         .mount(&server),
   );

   let repo = TestRepo::new();
   repo.stage("login.rs", "fn login() {}\n");
   let hooks = repo.dir.path().join(".git/hooks");
   std::fs::create_dir_all(&hooks).unwrap();
   repo.git(&["config", "core.hooksPath", ".git/hooks"]);
   let hook = hooks.join("pre-commit");
   std::fs::write(&hook, "#!/bin/sh\nexit 1\n").unwrap();
   std::fs::set_permissions(&hook, std::fs::Permissions::from_mode(0o755)).unwrap();

   let output = aicommit(&repo, &generate_url(&server));

   assert_eq!(output.status.code(), Some(1));
   assert!(!stdout(&output).contains("Commit done"));
   assert!(String::from_utf8_lossy(&output.stderr).contains("Git commit failed"));
   assert_eq!(repo.commit_count(), 0);
}
