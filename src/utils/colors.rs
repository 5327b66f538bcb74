/// ANSI color helper utilities for terminal output.
pub const RESET: &str = "\x1b[0m";

pub const GREY: &str = "\x1b[90m";

pub const RED: &str = "\x1b[31m";
pub const GREEN: &str = "\x1b[32m";

pub const YELLOW: &str = "\x1b[33m";
pub const BLUE: &str = "\x1b[34m";
pub const CYAN: &str = "\x1b[36m";
pub const MAGENTA: &str = "\x1b[35m";

const SERIES: [&str; 6] = [BLUE, GREEN, YELLOW, MAGENTA, CYAN, RED];

/// Stable color for the n-th chart series.
pub fn series_color(index: usize) -> &'static str {
    SERIES[index % SERIES.len()]
}
