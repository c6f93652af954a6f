pub mod etl;
pub mod gemini;
pub mod notifier;
pub mod parser;
pub mod pipeline;
pub mod prompt;

pub use crate::domain::model::{ContentRecord, DeployOutcome, ProcessingOutcome, RunReport};
pub use crate::domain::ports::{ConfigProvider, Pipeline, Storage, TextGenerator};
pub use crate::utils::error::Result;
