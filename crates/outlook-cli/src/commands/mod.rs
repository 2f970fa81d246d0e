//! CLI command implementations
//!
//! Commands are organized by domain:
//! - `config` - Resolved configuration display
//! - `forecast` - Single-scenario forecast and scenario comparison
//! - `serve` - Web server command
//! - `shared` - Shared utilities (config loading, input loading, flag resolution)
//! - `stats` - Historical statistics

pub mod config;
pub mod forecast;
pub mod serve;
pub mod shared;
pub mod stats;

// Re-export command functions for main.rs
pub use config::*;
pub use forecast::*;
pub use serve::*;
pub use shared::*;
pub use stats::*;

/// Format a whole-currency amount with thousands separators ("-$1,234")
pub fn format_money(value: f64) -> String {
    let rounded = value.round();
    let digits = format!("{:.0}", rounded.abs());

    let mut grouped = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(ch);
    }

    if rounded < 0.0 {
        format!("-${}", grouped)
    } else {
        format!("${}", grouped)
    }
}
