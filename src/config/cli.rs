use crate::utils::validation::{validate_path, Validate};
use clap::Parser;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize, Parser)]
#[command(name = "log-relay")]
#[command(about = "Transforms batches of base64-encoded log records")]
pub struct CliConfig {
    /// Batch envelope JSON file to read, or "-" for stdin
    #[arg(long, default_value = "-")]
    pub input: String,

    /// Result envelope JSON file to write, or "-" for stdout
    #[arg(long, default_value = "-")]
    pub output: String,

    #[arg(long, help = "Enable verbose output")]
    pub verbose: bool,
}

impl Validate for CliConfig {
    fn validate(&self) -> crate::utils::error::Result<()> {
        if self.input != "-" {
            validate_path("input", &self.input)?;
        }
        if self.output != "-" {
            validate_path("output", &self.output)?;
        }
        Ok(())
    }
}
