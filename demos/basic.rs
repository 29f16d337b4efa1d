//! Basic usage example

use easyconf::Populate;

#[derive(Debug, Default, Populate)]
struct Config {
    // Required field: loaded from DATABASE_URL environment variable
    #[conf(env = "DATABASE_URL", required)]
    pub database_url: String,

    // Optional field: keeps its initial value when SERVER_ADDR is unset
    #[conf(env = "SERVER_ADDR")]
    pub server_addr: String,

    // Numeric type
    #[conf(env = "MAX_CONNECTIONS")]
    pub max_connections: u32,

    // Boolean type: true/false/t/f/1/0
    #[conf(env = "DEBUG_MODE")]
    pub debug_mode: bool,

    // Comma-separated list
    #[conf(env = "ALLOWED_ORIGINS")]
    pub allowed_origins: Vec<String>,
}

fn main() -> anyhow::Result<()> {
    // Set environment variables for demonstration
    std::env::set_var("DATABASE_URL", "postgres://localhost/mydb");
    std::env::set_var("DEBUG_MODE", "1");
    std::env::set_var("ALLOWED_ORIGINS", "https://a.example,https://b.example");

    // Initial values act as fallbacks for unset variables
    let mut config = Config {
        server_addr: "127.0.0.1:8080".to_string(),
        max_connections: 10,
        ..Default::default()
    };
    config.populate()?;

    println!("Configuration loaded:");
    println!("  Database URL: {}", config.database_url);
    println!("  Server Address: {}", config.server_addr);
    println!("  Max Connections: {}", config.max_connections);
    println!("  Debug Mode: {}", config.debug_mode);
    println!("  Allowed Origins: {:?}", config.allowed_origins);

    Ok(())
}
