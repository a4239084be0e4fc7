pub mod file;

use crate::core::SwapConfig;
use crate::utils::error::Result;
use crate::utils::validation::{self, Validate};
use clap::Parser;
use serde::{Deserialize, Serialize};
use std::time::Duration;

#[derive(Debug, Clone, Serialize, Deserialize, Parser)]
#[command(name = "color-swap")]
#[command(about = "Two vehicles with swappable colors over a simulated JSON backend")]
pub struct CliConfig {
    #[arg(long, default_value = "./data")]
    pub data_dir: String,

    #[arg(long, help = "TOML configuration file; overrides the other flags")]
    pub config: Option<String>,

    #[arg(long, default_value = "300")]
    pub api_delay_ms: u64,

    #[arg(long, default_value = "2000")]
    pub swap_delay_ms: u64,

    #[arg(long, help = "Force periodic error responses from the backend")]
    pub simulate_errors: bool,

    #[arg(long, default_value = "1", help = "Number of color swaps to perform")]
    pub swaps: usize,

    #[arg(long, help = "Print the persisted document after each operation")]
    pub show_document: bool,

    #[arg(long, help = "Enable verbose output")]
    pub verbose: bool,
}

impl SwapConfig for CliConfig {
    fn data_dir(&self) -> &str {
        &self.data_dir
    }

    fn api_delay(&self) -> Duration {
        Duration::from_millis(self.api_delay_ms)
    }

    fn swap_delay(&self) -> Duration {
        Duration::from_millis(self.swap_delay_ms)
    }

    fn simulate_errors(&self) -> bool {
        self.simulate_errors
    }
}

impl Validate for CliConfig {
    fn validate(&self) -> Result<()> {
        validation::validate_path("data_dir", &self.data_dir)?;
        validation::validate_range("api_delay_ms", self.api_delay_ms, 0, 60_000)?;
        validation::validate_range("swap_delay_ms", self.swap_delay_ms, 0, 60_000)?;
        validation::validate_positive_number("swaps", self.swaps, 1)?;
        Ok(())
    }
}
