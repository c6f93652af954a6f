pub mod config;
pub mod core;
pub mod domain;
pub mod utils;

pub use config::{cli::LocalStorage, AppConfig};

#[cfg(feature = "cli")]
pub use config::CliConfig;

pub use crate::core::{
    etl::EtlEngine, gemini::GeminiClient, notifier::DeployNotifier, pipeline::ContentPipeline,
};
pub use crate::domain::model::{ContentRecord, DeployOutcome, ProcessingOutcome, RunReport};
pub use crate::utils::error::{EtlError, Result};
