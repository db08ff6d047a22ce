//! CLI output formatting utilities.

use owo_colors::{OwoColorize, Stream};

const ERROR: &str = "✗";

pub fn print_error(message: &str) {
  eprintln!(
    "{} {}",
    ERROR.if_supports_color(Stream::Stderr, |s| s.red()),
    message.if_supports_color(Stream::Stderr, |s| s.red())
  );
}
