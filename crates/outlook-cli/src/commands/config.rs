//! Configuration display command

use std::path::Path;

use anyhow::Result;
use outlook_core::{config::default_config_path, ForecastConfig};

pub fn cmd_config(config: &ForecastConfig, explicit: Option<&Path>) -> Result<()> {
    let source = match explicit {
        Some(p) if p.exists() => p.display().to_string(),
        Some(p) => format!("{} (not found, using built-in defaults)", p.display()),
        None => match default_config_path() {
            Some(p) if p.exists() => p.display().to_string(),
            _ => "built-in defaults".to_string(),
        },
    };

    println!();
    println!("⚙️  Outlook Configuration");
    println!("   Source: {}", source);
    if let Some(p) = default_config_path() {
        println!("   Override path: {}", p.display());
    }
    println!("   ─────────────────────────────────────────────");
    println!("   Default scenario: {}", config.default_scenario);
    println!("   Default horizon:  {} months", config.default_horizon.months());
    println!("   Output format:    {}", config.output);
    println!();
    println!("   Server: {}:{}", config.server.host, config.server.port);
    if config.server.allowed_origins.is_empty() {
        println!("   CORS origins: same-origin only");
    } else {
        println!(
            "   CORS origins: {}",
            config.server.allowed_origins.join(", ")
        );
    }

    Ok(())
}
