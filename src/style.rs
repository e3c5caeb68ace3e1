//! Terminal styling for CLI output and diagnostics.
//!
//! Respects `NO_COLOR` and only colors streams attached to a terminal.
//! Progress and diagnostics go to stderr so stdout carries just the result.

use std::{
   io::{self, IsTerminal, Write},
   sync::{OnceLock, mpsc},
   thread,
   time::Duration,
};

use owo_colors::OwoColorize;

/// Whether color output is enabled on stdout / stderr (cached on first call).
static STDOUT_COLOR: OnceLock<bool> = OnceLock::new();
static STDERR_COLOR: OnceLock<bool> = OnceLock::new();

fn stream_supports_color(no_color: bool, stream: supports_color::Stream) -> bool {
   // NO_COLOR takes precedence (https://no-color.org/)
   !no_color && supports_color::on(stream).is_some_and(|level| level.has_basic)
}

fn detect(stream: supports_color::Stream) -> bool {
   stream_supports_color(std::env::var_os("NO_COLOR").is_some(), stream)
}

/// Check if colors should be used for stdout.
pub fn colors_enabled() -> bool {
   *STDOUT_COLOR.get_or_init(|| detect(supports_color::Stream::Stdout))
}

/// Check if colors should be used for stderr (diagnostics, spinner).
pub fn stderr_colors_enabled() -> bool {
   *STDERR_COLOR.get_or_init(|| detect(supports_color::Stream::Stderr))
}

fn paint(s: &str, f: impl FnOnce(&str) -> String) -> String {
   if colors_enabled() { f(s) } else { s.to_string() }
}

/// Success: banners, completed actions (green + bold).
pub fn success(s: &str) -> String {
   paint(s, |s| s.green().bold().to_string())
}

/// Dim: secondary details.
pub fn dim(s: &str) -> String {
   paint(s, |s| s.dimmed().to_string())
}

/// Bold: headers.
pub fn bold(s: &str) -> String {
   paint(s, |s| s.bold().to_string())
}

/// Print a warning to stderr, clearing any active spinner line first.
pub fn warn(msg: &str) {
   clear_spinner_line();
   let line = format!("{} {msg}", icons::WARNING);
   if stderr_colors_enabled() {
      eprintln!("{}", line.yellow());
   } else {
      eprintln!("{line}");
   }
}

/// Print an error line to stderr.
pub fn print_error(msg: &str) {
   clear_spinner_line();
   if stderr_colors_enabled() {
      eprintln!("{}", msg.red().bold());
   } else {
      eprintln!("{msg}");
   }
}

/// Print a diagnostic line to stderr.
pub fn print_info(msg: &str) {
   clear_spinner_line();
   if stderr_colors_enabled() {
      eprintln!("{} {msg}", icons::INFO.cyan());
   } else {
      eprintln!("{} {msg}", icons::INFO);
   }
}

fn clear_spinner_line() {
   if io::stderr().is_terminal() {
      eprint!("\r\x1b[K");
      io::stderr().flush().ok();
   }
}

/// Get terminal width, capped at 120 columns.
pub fn term_width() -> usize {
   terminal_size::terminal_size()
      .map_or(80, |(w, _)| w.0 as usize)
      .min(120)
}

/// Horizontal separator line.
pub fn separator(width: usize) -> String {
   dim(&"\u{2500}".repeat(width))
}

/// Render items as a bulleted list, one per line.
pub fn bullet_list(items: &[String]) -> String {
   items
      .iter()
      .map(|item| format!("  {} {item}", icons::BULLET))
      .collect::<Vec<_>>()
      .join("\n")
}

// === Status Icons ===

pub mod icons {
   pub const DONE: &str = "\u{2705}";
   pub const SUCCESS: &str = "\u{2713}";
   pub const WARNING: &str = "\u{26A0}";
   pub const ERROR: &str = "\u{2717}";
   pub const INFO: &str = "\u{2139}";
   pub const BULLET: &str = "\u{2022}";
}

// === Spinner ===

const SPINNER_FRAMES: &[char] = &[
   '\u{280B}', '\u{2819}', '\u{2839}', '\u{2838}', '\u{283C}', '\u{2834}', '\u{2826}', '\u{2827}',
   '\u{2807}', '\u{280F}',
];

/// Run a function with a spinner on stderr, marking the line with success or
/// failure once it returns. No animation when stderr is not a TTY.
pub fn with_spinner_result<F, T, E>(message: &str, f: F) -> Result<T, E>
where
   F: FnOnce() -> Result<T, E>,
{
   if !io::stderr().is_terminal() || !stderr_colors_enabled() {
      return f();
   }

   let (tx, rx) = mpsc::channel::<bool>();
   let msg = message.to_string();

   let spinner = thread::spawn(move || {
      let mut idx = 0;
      loop {
         match rx.try_recv() {
            Ok(ok) => {
               let icon = if ok {
                  icons::SUCCESS.green().to_string()
               } else {
                  icons::ERROR.red().to_string()
               };
               eprint!("\r\x1b[K{icon} {msg}\n");
               io::stderr().flush().ok();
               break;
            },
            Err(mpsc::TryRecvError::Disconnected) => break,
            Err(mpsc::TryRecvError::Empty) => {},
         }
         eprint!("\r{} {}", SPINNER_FRAMES[idx].cyan(), msg);
         io::stderr().flush().ok();
         idx = (idx + 1) % SPINNER_FRAMES.len();
         thread::sleep(Duration::from_millis(80));
      }
   });

   let result = f();
   tx.send(result.is_ok()).ok();
   spinner.join().ok();
   result
}
