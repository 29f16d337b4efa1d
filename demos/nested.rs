//! Nested records example

use easyconf::Populate;

#[derive(Debug, Default, Populate)]
struct DatabaseConfig {
    #[conf(env = "DB_HOST", required)]
    pub host: String,

    #[conf(env = "DB_PORT")]
    pub port: u16,
}

#[derive(Debug, Default, Populate)]
struct CacheConfig {
    #[conf(env = "CACHE_NODES")]
    pub nodes: Vec<String>,

    #[conf(env = "CACHE_TTL_SECONDS")]
    pub ttl_seconds: u64,
}

#[derive(Debug, Default, Populate)]
struct Config {
    #[conf(env = "APP_NAME", required)]
    pub app_name: String,

    // Nested records have no key of their own; their fields carry the keys
    #[conf(nested)]
    pub database: DatabaseConfig,

    #[conf(nested)]
    pub cache: CacheConfig,
}

fn main() -> anyhow::Result<()> {
    std::env::set_var("APP_NAME", "inventory");
    std::env::set_var("DB_HOST", "db.internal");
    std::env::set_var("DB_PORT", "5432");
    std::env::set_var("CACHE_NODES", "cache-0:6379,cache-1:6379");

    let config = Config::from_env()?;

    println!("Configuration loaded:");
    println!("  App Name: {}", config.app_name);
    println!("  Database: {}:{}", config.database.host, config.database.port);
    println!("  Cache Nodes: {:?}", config.cache.nodes);
    println!("  Cache TTL: {}s", config.cache.ttl_seconds);

    Ok(())
}
