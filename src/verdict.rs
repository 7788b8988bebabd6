use serde::{Deserialize, Serialize};

/// How a phishing percentage is presented to the trainee.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum LikelihoodTier {
    Low,
    Possible,
    High,
}

impl LikelihoodTier {
    pub fn from_score(pct: u8) -> Self {
        match pct {
            p if p > 60 => LikelihoodTier::High,
            p if p > 30 => LikelihoodTier::Possible,
            _ => LikelihoodTier::Low,
        }
    }

    pub fn message(&self) -> &'static str {
        match self {
            LikelihoodTier::High => "High likelihood of phishing — treat with caution",
            LikelihoodTier::Possible => "Possible phishing indicators found",
            LikelihoodTier::Low => "Low likelihood by simple heuristics",
        }
    }

    pub fn icon(&self) -> &'static str {
        match self {
            LikelihoodTier::High => "🚨",
            LikelihoodTier::Possible => "⚠️",
            LikelihoodTier::Low => "ℹ️",
        }
    }
}
