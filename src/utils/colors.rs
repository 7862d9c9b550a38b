/// ANSI color helper utilities for terminal output.
pub const RESET: &str = "\x1b[0m";

pub const GREY: &str = "\x1b[90m";
pub const RED: &str = "\x1b[31m";
pub const GREEN: &str = "\x1b[32m";
pub const YELLOW: &str = "\x1b[33m";
pub const CYAN: &str = "\x1b[36m";

/// Background used for holidays in the calendar grid.
pub const HOLIDAY_BG: &str = "\x1b[41;97m";

/// Difference color:
/// \>=0 → green
/// \<0 → red
pub fn color_for_difference(value: f64) -> &'static str {
    if value >= 0.0 { GREEN } else { RED }
}
