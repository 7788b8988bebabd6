pub mod config;
pub mod phishing;
pub mod session;
pub mod simulation;
pub mod statistics;
pub mod verdict;

pub use config::Config;
pub use phishing::{score, PhishingScorer, ScoreBreakdown, ScoringConfig};
pub use session::{Analytics, SessionState};
pub use statistics::StatsStore;
pub use verdict::LikelihoodTier;
