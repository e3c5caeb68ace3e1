use std::process::ExitCode;

use ai_commit::*;
use arboard::Clipboard;
use clap::Parser;
use types::Args;

/// Apply CLI overrides to config
fn apply_cli_overrides(config: &mut CommitConfig, args: &Args) {
   if let Some(ref url) = args.url {
      config.api_url.clone_from(url);
   }
   if let Some(secs) = args.timeout {
      config.request_timeout_secs = Some(secs);
   }
   if args.verbose {
      config.verbose = true;
   }
}

/// Copy text to clipboard
fn copy_to_clipboard(text: &str) -> Result<()> {
   let mut clipboard = Clipboard::new()?;
   clipboard.set_text(text)?;
   Ok(())
}

fn run(args: &Args) -> Result<()> {
   let mut config = CommitConfig::load()?;
   apply_cli_overrides(&mut config, args);

   let options = args.generation_options();
   let outcome = commit::run(&args.dir, &options, &config, args.dry_run)?;

   println!("{}", commit::render_result(&outcome));

   let extras = commit::render_extras(&outcome.response, options.generate_pr);
   if !extras.is_empty() {
      println!("\n{}", style::separator(style::term_width().min(60)));
      println!("{extras}");
   }

   if args.copy {
      match copy_to_clipboard(&outcome.message) {
         Ok(()) => style::print_info("Copied to clipboard"),
         Err(e) => style::warn(&format!("Failed to copy to clipboard: {e}")),
      }
   }

   Ok(())
}

fn main() -> ExitCode {
   let args = Args::parse();

   match run(&args) {
      Ok(()) => ExitCode::SUCCESS,
      Err(CommitGenError::NoStagedChanges) => {
         println!("{}", CommitGenError::NoStagedChanges.user_message());
         ExitCode::FAILURE
      },
      Err(err @ CommitGenError::ApiError { .. }) => {
         println!("{}", err.user_message());
         ExitCode::FAILURE
      },
      Err(err) => {
         style::print_error(&err.user_message());
         ExitCode::FAILURE
      },
   }
}
