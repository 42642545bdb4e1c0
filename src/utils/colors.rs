/// ANSI color helper utilities for terminal output.
pub const RESET: &str = "\x1b[0m";

pub const GREY: &str = "\x1b[90m";
pub const RED: &str = "\x1b[31m";
pub const GREEN: &str = "\x1b[32m";
pub const YELLOW: &str = "\x1b[33m";
pub const CYAN: &str = "\x1b[36m";
pub const TEAL: &str = "\x1b[96m";

fn is_placeholder(value: &str) -> bool {
    let v = value.trim();
    v.is_empty() || v == "--" || v == "--:--" || v == "0h 0m"
}

/// Greys out empty or placeholder values ("--", "--:--", "0h 0m").
pub fn colorize_optional(value: &str) -> String {
    if is_placeholder(value) {
        format!("{GREY}{value}{RESET}")
    } else {
        value.to_string()
    }
}

/// Office in is green, office out is red, empty is grey.
pub fn colorize_in_out(value: &str, is_in: bool) -> String {
    if is_placeholder(value) {
        return format!("{GREY}{value}{RESET}");
    }

    if is_in {
        format!("{GREEN}{value}{RESET}")
    } else {
        format!("{RED}{value}{RESET}")
    }
}

/// Desk time color:
/// \>0 → teal
/// \<0 → red (breaks exceed office time)
/// 0 → reset
pub fn color_for_desk(value: i64) -> &'static str {
    if value > 0 {
        TEAL
    } else if value < 0 {
        RED
    } else {
        RESET
    }
}
