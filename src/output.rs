//! User-facing output.
//! stdout carries only the generated path so scripts can capture it;
//! every other message goes to stderr, colored only when stderr is a TTY.

use owo_colors::OwoColorize;

/// True when stderr is a terminal, so escapes and colors are safe to emit.
pub fn stderr_is_tty() -> bool {
    atty::is(atty::Stream::Stderr)
}

pub fn print_info(msg: &str) {
    if stderr_is_tty() {
        eprintln!("{} {}", "info:".cyan().bold(), msg);
    } else {
        eprintln!("info: {}", msg);
    }
}

pub fn print_warn(msg: &str) {
    if stderr_is_tty() {
        eprintln!("{} {}", "warn:".yellow().bold(), msg);
    } else {
        eprintln!("warn: {}", msg);
    }
}

pub fn print_error(msg: &str) {
    if stderr_is_tty() {
        eprintln!("{} {}", "error:".red().bold(), msg);
    } else {
        eprintln!("error: {}", msg);
    }
}

/// Print the primary result line (no prefix, no color) on stdout.
pub fn print_user(msg: &str) {
    println!("{}", msg);
}
