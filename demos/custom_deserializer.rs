//! Example demonstrating custom deserializer functions

use easyconf::Populate;
use serde::Deserialize;
use std::collections::HashMap;
use std::time::Duration;

#[derive(Debug, Default, Deserialize)]
struct RetryPolicy {
    pub attempts: u32,
    pub backoff_ms: u64,
}

/// Parse durations like `30s`, `5m` or `250ms`
fn parse_duration(s: &str) -> Result<Duration, String> {
    let split = s
        .find(|c: char| !c.is_ascii_digit())
        .ok_or_else(|| format!("missing unit in '{s}'"))?;
    let (amount, unit) = s.split_at(split);
    let amount = amount.parse::<u64>().map_err(|e| e.to_string())?;

    match unit {
        "ms" => Ok(Duration::from_millis(amount)),
        "s" => Ok(Duration::from_secs(amount)),
        "m" => Ok(Duration::from_secs(amount.saturating_mul(60))),
        other => Err(format!("unknown unit '{other}'")),
    }
}

#[derive(Debug, Default, Populate)]
struct Config {
    // Built-in coercion
    #[conf(env = "SERVICE_NAME", required)]
    pub service_name: String,

    // Custom function
    #[conf(env = "REQUEST_TIMEOUT", deserializer = "parse_duration")]
    pub request_timeout: Duration,

    // JSON through serde
    #[conf(env = "RETRY_POLICY", deserializer = "serde_json::from_str")]
    pub retry_policy: RetryPolicy,

    #[conf(env = "RATE_LIMITS", deserializer = "serde_json::from_str")]
    pub rate_limits: HashMap<String, u32>,
}

fn main() -> anyhow::Result<()> {
    std::env::set_var("SERVICE_NAME", "billing");
    std::env::set_var("REQUEST_TIMEOUT", "30s");
    std::env::set_var("RETRY_POLICY", r#"{"attempts":3,"backoff_ms":200}"#);
    std::env::set_var("RATE_LIMITS", r#"{"read":1000,"write":100}"#);

    let config = Config::from_env()?;

    println!("Configuration loaded:");
    println!("  Service: {}", config.service_name);
    println!("  Request Timeout: {:?}", config.request_timeout);
    println!(
        "  Retry Policy: {} attempts, {}ms backoff",
        config.retry_policy.attempts, config.retry_policy.backoff_ms
    );
    println!("  Rate Limits: {:?}", config.rate_limits);

    // A bad value is reported with the variable name and the parser's message
    std::env::set_var("REQUEST_TIMEOUT", "30 parsecs");
    if let Err(e) = Config::from_env() {
        println!("Expected failure: {e}");
    }

    Ok(())
}
