/// ANSI color helper utilities for terminal output.
pub const RESET: &str = "\x1b[0m";

pub const GREY: &str = "\x1b[90m";
pub const RED: &str = "\x1b[31m";
pub const GREEN: &str = "\x1b[32m";
pub const YELLOW: &str = "\x1b[33m";
pub const BLUE: &str = "\x1b[34m";
pub const CYAN: &str = "\x1b[36m";
pub const MAGENTA: &str = "\x1b[35m";

/// Placeholder shown for empty cells.
pub const EMPTY: &str = "--";

/// Returns a grey placeholder when the field is empty, the value otherwise.
pub fn colorize_optional(value: &str) -> String {
    if value.trim().is_empty() {
        format!("{GREY}{EMPTY}{RESET}")
    } else {
        value.to_string()
    }
}

/// Color used for the type column.
pub fn color_for_type(object_type: &str) -> &'static str {
    match object_type.trim().to_lowercase().as_str() {
        "mobile" => BLUE,
        "computer" => CYAN,
        "bijstand" => MAGENTA,
        _ => RESET,
    }
}
