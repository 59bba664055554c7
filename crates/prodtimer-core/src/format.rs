//! Display formatting for elapsed/remaining values.
//!
//! Pure functions of an integer millisecond value; integer division
//! throughout, so the same input always renders the same string.

/// Format milliseconds as `HH:MM:SS:CC` (centisecond resolution).
pub fn format_fine(ms: u64) -> String {
    let total_secs = ms / 1000;
    let h = total_secs / 3600;
    let m = (total_secs % 3600) / 60;
    let s = total_secs % 60;
    let cs = (ms % 1000) / 10;
    format!("{h:02}:{m:02}:{s:02}:{cs:02}")
}

/// Format milliseconds as `HH:MM:SS` (the coarser countdown display).
pub fn format_coarse(ms: u64) -> String {
    let total_secs = ms / 1000;
    let h = total_secs / 3600;
    let m = (total_secs % 3600) / 60;
    let s = total_secs % 60;
    format!("{h:02}:{m:02}:{s:02}")
}
