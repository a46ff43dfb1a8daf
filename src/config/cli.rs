use crate::config::DECISION_API_ENDPOINT;
use clap::Parser;

#[derive(Debug, Clone, Parser)]
#[command(name = "ad_probe")]
#[command(about = "Send a single decision request to the ad engine")]
pub struct ProbeConfig {
    #[arg(long, default_value = DECISION_API_ENDPOINT)]
    pub endpoint: String,

    #[arg(long, value_delimiter = ',', help = "Request fields as key=value pairs")]
    pub fields: Vec<String>,

    #[arg(long, help = "Enable verbose output")]
    pub verbose: bool,
}
