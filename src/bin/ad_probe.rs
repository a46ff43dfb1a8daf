use adzerk_sdk::utils::{logger, validation::Validate};
use adzerk_sdk::{AdClient, AdRequest, ClientConfig, ProbeConfig};
use anyhow::Context;
use clap::Parser;
use serde_json::Value;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let config = ProbeConfig::parse();

    logger::init_cli_logger(config.verbose);

    tracing::info!("Starting ad_probe");
    if config.verbose {
        tracing::debug!("Probe config: {:?}", config);
    }

    let client_config = ClientConfig::new(config.endpoint.clone());
    if let Err(e) = client_config.validate() {
        tracing::error!("Configuration validation failed: {}", e);
        eprintln!("❌ {}", e);
        std::process::exit(1);
    }

    let mut request = AdRequest::new();
    for pair in &config.fields {
        let (name, raw) = pair
            .split_once('=')
            .with_context(|| format!("field must be key=value, got: {}", pair))?;

        // Values that parse as JSON are kept structured, anything else is a string
        let value =
            serde_json::from_str::<Value>(raw).unwrap_or_else(|_| Value::String(raw.to_string()));
        request.set_field(name, value);
    }

    let client = AdClient::builder().config(client_config).build()?;

    tracing::info!("Sending decision request to {}", config.endpoint);
    match client.request(&request).await {
        Ok(response) => {
            println!("✅ Decision request succeeded");
            println!("{}", serde_json::to_string_pretty(response.fields())?);
        }
        Err(e) => {
            tracing::error!("Decision request failed: {}", e);
            eprintln!("❌ {}", e);
            std::process::exit(1);
        }
    }

    Ok(())
}
