//! Runtime configuration
//!
//! The backend base address is resolved exactly once here and handed to the
//! constructed [`ems_client::ApiClient`] during startup.

use std::path::PathBuf;

use clap::Parser;

/// Terminal admin console for the EMS backend
#[derive(Debug, Parser)]
#[command(name = "ems-console", version)]
pub struct Config {
    /// Base address of the backend REST service
    #[arg(long, env = "EMS_API_URL", default_value = "http://localhost:8080")]
    pub api_url: String,

    /// Directory for rolling log files
    #[arg(long, env = "EMS_LOG_DIR", default_value = "./logs")]
    pub log_dir: PathBuf,
}
