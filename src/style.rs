// bopo-create/src/style.rs
//! ANSI helpers for the terminal UI.

pub const RESET: &str = "\x1b[0m";
pub const DIM: &str = "\x1b[2m";
pub const ITALIC: &str = "\x1b[3m";
pub const RED: &str = "\x1b[31m";
pub const GREEN: &str = "\x1b[32m";
pub const CYAN: &str = "\x1b[36m";

/// Dimmed `│` on a new line, printed under each question.
pub const SEP: &str = "\n\x1b[2m│\x1b[0m";

pub fn dim(s: &str) -> String {
    format!("{DIM}{s}{RESET}")
}

/// Dim + italic, for optional markers and hints.
pub fn em(s: &str) -> String {
    format!("{DIM}{ITALIC}{s}{RESET}")
}

pub fn green(s: &str) -> String {
    format!("{GREEN}{s}{RESET}")
}

pub fn red(s: &str) -> String {
    format!("{RED}{s}{RESET}")
}

pub fn banner(temp: bool) -> String {
    let temp_tag = if temp { format!("  {DIM} temp{RESET}") } else { String::new() };
    format!("{DIM}│{RESET}\n{DIM}│{CYAN}  b o p o {RESET}  c r e a t e{temp_tag}\n{DIM}│{RESET}")
}

pub fn outro() -> String {
    format!("b o p o   {}", green("c r e a t e d"))
}
