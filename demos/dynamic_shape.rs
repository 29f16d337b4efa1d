//! Example declaring a configuration shape at runtime

use easyconf::dynamic::{Shape, Value};

fn main() -> anyhow::Result<()> {
    // Field list could come from a plugin manifest or a schema registry
    let shape = Shape::new()
        .required("name", "PLUGIN_NAME", "String")
        .field("workers", "PLUGIN_WORKERS", "u8")
        .field("weights", "PLUGIN_WEIGHTS", "Vec<f64>")
        .nested(
            "http",
            Shape::new()
                .field("enabled", "PLUGIN_HTTP_ENABLED", "bool")
                .field("port", "PLUGIN_HTTP_PORT", "u16"),
        );

    std::env::set_var("PLUGIN_NAME", "resizer");
    std::env::set_var("PLUGIN_WEIGHTS", "0.5,0.25,0.25");
    std::env::set_var("PLUGIN_HTTP_ENABLED", "true");

    let mut config = shape.zero()?;
    shape.populate(&mut config)?;

    println!("Configuration loaded:");
    println!("  Name: {:?}", config.get("name"));
    println!("  Workers: {:?}", config.get("workers"));
    println!("  Weights: {:?}", config.get("weights"));
    println!(
        "  HTTP enabled: {:?}",
        config.get("http").and_then(|http| http.get("enabled"))
    );

    // Populating anything other than a record is rejected
    let mut not_a_record = Value::Bool(false);
    if let Err(e) = shape.populate(&mut not_a_record) {
        println!("Expected failure: {e}");
    }

    Ok(())
}
