use serde::{Deserialize, Serialize};
use std::fmt;

pub const FALLBACK_TITLE: &str = "Error: AI Processing Failed";

/// The record handed to the static site: a headline plus a summary paragraph.
///
/// Extra top-level keys returned by the model are carried through unchanged
/// and written after `title` and `summary`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ContentRecord {
    pub title: String,
    pub summary: String,
    #[serde(flatten)]
    pub extra: serde_json::Map<String, serde_json::Value>,
}

impl ContentRecord {
    pub fn new(title: impl Into<String>, summary: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            summary: summary.into(),
            extra: serde_json::Map::new(),
        }
    }

    /// 處理失敗時寫出的佔位紀錄，確保下游網站仍能讀取
    pub fn fallback(error: &impl fmt::Display) -> Self {
        Self::new(
            FALLBACK_TITLE,
            format!("Could not process content. Error: {}", error),
        )
    }

    pub fn is_fallback(&self) -> bool {
        self.title == FALLBACK_TITLE
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ProcessingOutcome {
    Generated,
    Fallback { reason: String },
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DeployOutcome {
    /// No hook URL configured.
    Skipped,
    Triggered { status: u16 },
    Rejected { status: u16, body: String },
    Unreachable { reason: String },
}

impl DeployOutcome {
    pub fn is_triggered(&self) -> bool {
        matches!(self, DeployOutcome::Triggered { .. })
    }
}

#[derive(Debug, Clone)]
pub struct RunReport {
    pub output_path: String,
    pub outcome: ProcessingOutcome,
    pub deploy: Option<DeployOutcome>,
}

impl RunReport {
    pub fn is_generated(&self) -> bool {
        self.outcome == ProcessingOutcome::Generated
    }
}
