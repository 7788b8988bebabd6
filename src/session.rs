use crate::simulation::encryption::FileRecord;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Analytics {
    pub simulations_run: u64,
    pub phishing_checks: u64,
    pub quizzes_taken: u64,
    pub avg_quiz_score: f64,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ChatTurn {
    pub question: String,
    pub answer: String,
}

/// Everything one trainee accumulates while using the simulator.
/// Each session owns its own instance.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct SessionState {
    pub files: Vec<FileRecord>,
    pub infected: bool,
    pub ransom_note: String,
    pub analytics: Analytics,
    pub chat: Vec<ChatTurn>,
    /// Mail id -> marked as phishing.
    pub inbox_marks: BTreeMap<u32, bool>,
    pub inbox_score: u32,
    pub inbox_attempts: u32,
    pub open_mail: Option<u32>,
}

impl SessionState {
    pub fn new() -> Self {
        Self::default()
    }

    /// Start from previously persisted counters.
    pub fn with_analytics(analytics: Analytics) -> Self {
        Self {
            analytics,
            ..Default::default()
        }
    }

    pub fn record_simulation(&mut self) {
        self.analytics.simulations_run += 1;
    }

    pub fn record_phishing_check(&mut self) {
        self.analytics.phishing_checks += 1;
    }

    pub fn reset_analytics(&mut self) {
        self.analytics = Analytics::default();
        log::info!("Session analytics reset");
    }

    pub fn analytics_json(&self) -> serde_json::Result<String> {
        serde_json::to_string_pretty(&self.analytics)
    }
}
