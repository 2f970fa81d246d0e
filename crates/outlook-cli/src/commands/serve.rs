//! Server command implementation

use anyhow::Result;
use outlook_core::ForecastConfig;

pub async fn cmd_serve(
    config: ForecastConfig,
    host: Option<&str>,
    port: Option<u16>,
    no_auth: bool,
) -> Result<()> {
    let host = host.unwrap_or(config.server.host.as_str()).to_string();
    let port = port.unwrap_or(config.server.port);

    println!("🚀 Starting Outlook web server...");
    println!("   Listening: http://{}:{}", host, port);
    println!(
        "   Defaults: {} scenario, {} months",
        config.default_scenario,
        config.default_horizon.months()
    );

    // Parse API keys from environment (comma-separated)
    let api_keys =
        outlook_server::parse_api_keys(&std::env::var("OUTLOOK_API_KEYS").unwrap_or_default());

    if no_auth {
        println!();
        println!("   ⚠️  Authentication DISABLED - do not expose to network!");
    } else if api_keys.is_empty() {
        println!("   🔒 Authentication: no keys configured, set OUTLOOK_API_KEYS");
    } else {
        println!(
            "   🔑 API keys: {} configured (OUTLOOK_API_KEYS)",
            api_keys.len()
        );
    }
    println!();
    println!("   Press Ctrl+C to stop");

    let server_config = outlook_server::ServerConfig {
        require_auth: !no_auth,
        allowed_origins: config.server.allowed_origins.clone(),
        api_keys,
    };

    outlook_server::serve_with_config(config, &host, port, server_config).await?;

    Ok(())
}
