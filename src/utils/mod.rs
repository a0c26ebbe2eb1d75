//! Utility modules
//!
//! - **logging**: tracing subscriber setup

pub mod logging; // Logging & monitoring

pub use logging::{LogFormat, init_tracing};

/// Truncate string to specified length with ellipsis
pub fn truncate_string(s: &str, max_len: usize) -> String {
    if s.len() <= max_len {
        return s.to_string();
    }

    let mut end = max_len.saturating_sub(3);
    while !s.is_char_boundary(end) {
        end -= 1;
    }
    format!("{}...", &s[..end])
}
