use lazy_static::lazy_static;
use regex::Regex;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

lazy_static! {
    static ref LINK_PATTERN: Regex = Regex::new(r"https?://").unwrap();
    static ref DEFAULT_SCORER: PhishingScorer = PhishingScorer::default();
}

/// Suspicious keyword weights. Each keyword counts once no matter how often it appears.
pub const DEFAULT_KEYWORD_WEIGHTS: &[(&str, u32)] = &[
    ("urgent", 2),
    ("verify", 1),
    ("password", 2),
    ("bank", 1),
    ("click", 1),
    ("login", 1),
    ("update", 1),
    ("invoice", 1),
    ("salary", 1),
];

/// Sender top-level domains that earn the sender bonus.
pub const DEFAULT_SUSPICIOUS_TLDS: &[&str] = &["ru", "cn", "tk", "ml"];
/// Any of these in a short message earns the short-message bonus.
pub const DEFAULT_URGENT_TRIGGERS: &[&str] = &["urgent", "verify", "password"];

/// Unicode whitespace plus the ASCII file/group/record/unit separators
/// (0x1C..=0x1F) split words.
fn word_count(text: &str) -> usize {
    text.split(|c: char| c.is_whitespace() || ('\x1c'..='\x1f').contains(&c))
        .filter(|word| !word.is_empty())
        .count()
}

/// Score the text with the built-in rule table.
pub fn score(text: &str) -> u8 {
    DEFAULT_SCORER.score(text)
}

#[derive(Debug, Deserialize, Serialize, Clone, PartialEq)]
#[serde(default)]
pub struct ScoringConfig {
    pub keyword_weights: BTreeMap<String, u32>,
    pub suspicious_tlds: Vec<String>,
    pub sender_bonus: u32,
    pub link_weight: u32,
    pub link_cap: u32,
    pub short_message_words: usize,
    pub short_message_bonus: u32,
    pub urgent_triggers: Vec<String>,
    /// Raw score that maps to 100%.
    pub max_score: u32,
}

impl Default for ScoringConfig {
    fn default() -> Self {
        Self {
            keyword_weights: DEFAULT_KEYWORD_WEIGHTS
                .iter()
                .map(|(k, w)| (k.to_string(), *w))
                .collect(),
            suspicious_tlds: DEFAULT_SUSPICIOUS_TLDS
                .iter()
                .map(|t| t.to_string())
                .collect(),
            sender_bonus: 3,
            link_weight: 2,
            link_cap: 6,
            short_message_words: 20,
            short_message_bonus: 2,
            urgent_triggers: DEFAULT_URGENT_TRIGGERS
                .iter()
                .map(|t| t.to_string())
                .collect(),
            max_score: 20,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ScoringRule {
    Keywords,
    SuspiciousSender,
    Links,
    ShortUrgentMessage,
}

impl ScoringRule {
    pub fn name(&self) -> &'static str {
        match self {
            ScoringRule::Keywords => "keywords",
            ScoringRule::SuspiciousSender => "suspicious_sender",
            ScoringRule::Links => "links",
            ScoringRule::ShortUrgentMessage => "short_urgent_message",
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RuleContribution {
    pub rule: ScoringRule,
    pub points: u32,
    pub evidence: Vec<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ScoreBreakdown {
    pub raw_score: u32,
    pub percentage: u8,
    pub contributions: Vec<RuleContribution>,
}

/// Rule-based phishing likelihood scorer. Holds only immutable data, so a
/// single instance can be shared freely between threads.
#[derive(Debug, Clone)]
pub struct PhishingScorer {
    config: ScoringConfig,
    // None when no TLDs are configured: the sender rule never fires.
    sender_pattern: Option<Regex>,
}

impl Default for PhishingScorer {
    fn default() -> Self {
        let config = ScoringConfig::default();
        let sender_pattern = Self::compile_sender_pattern(&config.suspicious_tlds).unwrap();
        Self {
            config,
            sender_pattern,
        }
    }
}

impl PhishingScorer {
    pub fn new(mut config: ScoringConfig) -> anyhow::Result<Self> {
        if config.max_score == 0 {
            anyhow::bail!("scoring max_score must be greater than zero");
        }
        // Matching happens on lowercased text.
        config.keyword_weights = config
            .keyword_weights
            .into_iter()
            .map(|(keyword, weight)| (keyword.to_lowercase(), weight))
            .collect();
        for trigger in config.urgent_triggers.iter_mut() {
            *trigger = trigger.to_lowercase();
        }
        let sender_pattern = Self::compile_sender_pattern(&config.suspicious_tlds)?;
        Ok(Self {
            config,
            sender_pattern,
        })
    }

    pub fn load_from_file(path: &str) -> Result<Self, Box<dyn std::error::Error>> {
        let content = std::fs::read_to_string(path)?;
        let config: ScoringConfig = serde_yaml::from_str(&content)?;
        Ok(Self::new(config)?)
    }

    pub fn config(&self) -> &ScoringConfig {
        &self.config
    }

    // The whole lowercased text must be a bare address ending in a listed TLD.
    // `[^@]` also spans newlines, and one trailing newline is tolerated.
    fn compile_sender_pattern(tlds: &[String]) -> anyhow::Result<Option<Regex>> {
        if tlds.is_empty() {
            return Ok(None);
        }
        let alternatives: Vec<String> = tlds
            .iter()
            .map(|tld| regex::escape(&tld.to_lowercase()))
            .collect();
        let pattern = format!(r"^[^@]+@[^@]+\.({})\n?$", alternatives.join("|"));
        Ok(Some(Regex::new(&pattern)?))
    }

    pub fn score(&self, text: &str) -> u8 {
        self.analyze(text).percentage
    }

    pub fn analyze(&self, text: &str) -> ScoreBreakdown {
        let normalized = text.to_lowercase();
        let mut contributions = Vec::new();

        let mut keyword_points = 0u32;
        let mut matched_keywords = Vec::new();
        for (keyword, weight) in &self.config.keyword_weights {
            if normalized.contains(keyword.as_str()) {
                keyword_points = keyword_points.saturating_add(*weight);
                matched_keywords.push(format!("'{}' (+{})", keyword, weight));
            }
        }
        if keyword_points > 0 {
            contributions.push(RuleContribution {
                rule: ScoringRule::Keywords,
                points: keyword_points,
                evidence: matched_keywords,
            });
        }

        if let Some(pattern) = &self.sender_pattern {
            if pattern.is_match(&normalized) {
                contributions.push(RuleContribution {
                    rule: ScoringRule::SuspiciousSender,
                    points: self.config.sender_bonus,
                    evidence: vec![format!(
                        "Sender address uses a high-risk TLD: {}",
                        normalized.trim_end()
                    )],
                });
            }
        }

        let link_count = LINK_PATTERN.find_iter(&normalized).count() as u32;
        let link_points = link_count
            .saturating_mul(self.config.link_weight)
            .min(self.config.link_cap);
        if link_points > 0 {
            contributions.push(RuleContribution {
                rule: ScoringRule::Links,
                points: link_points,
                evidence: vec![format!("{} link(s) found", link_count)],
            });
        }

        let words = word_count(&normalized);
        if words < self.config.short_message_words {
            let triggers: Vec<&String> = self
                .config
                .urgent_triggers
                .iter()
                .filter(|t| normalized.contains(t.as_str()))
                .collect();
            if !triggers.is_empty() {
                contributions.push(RuleContribution {
                    rule: ScoringRule::ShortUrgentMessage,
                    points: self.config.short_message_bonus,
                    evidence: vec![format!(
                        "Short message ({} words) with pressure words: {}",
                        words,
                        triggers
                            .iter()
                            .map(|t| t.as_str())
                            .collect::<Vec<_>>()
                            .join(", ")
                    )],
                });
            }
        }

        let raw_score = contributions
            .iter()
            .fold(0u32, |acc, c| acc.saturating_add(c.points));
        let percentage = self.normalize(raw_score);

        log::debug!(
            "Phishing score: raw={} pct={} rules={:?}",
            raw_score,
            percentage,
            contributions.iter().map(|c| c.rule.name()).collect::<Vec<_>>()
        );

        ScoreBreakdown {
            raw_score,
            percentage,
            contributions,
        }
    }

    fn normalize(&self, raw_score: u32) -> u8 {
        let pct = (raw_score as f64 / self.config.max_score as f64 * 100.0).min(100.0);
        // Float-to-int casts truncate toward zero.
        pct as u8
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_text_scores_zero() {
        assert_eq!(score(""), 0);
        assert!(PhishingScorer::default().analyze("").contributions.is_empty());
    }

    #[test]
    fn test_single_keyword_gets_short_message_bonus() {
        // keyword 2 + short urgent bonus 2 = 4 of 20
        assert_eq!(score("urgent"), 20);
        // "bank" is not a pressure word, so no bonus
        assert_eq!(score("bank"), 5);
    }

    #[test]
    fn test_case_insensitive() {
        assert_eq!(score("URGENT VERIFY PASSWORD"), 35);
        assert_eq!(
            score("URGENT VERIFY PASSWORD"),
            score("urgent verify password")
        );
    }

    #[test]
    fn test_keyword_counted_once() {
        assert_eq!(score("urgent urgent urgent"), score("urgent"));
    }

    #[test]
    fn test_link_bonus_is_capped() {
        let text = "https://a.example https://b.example https://c.example https://d.example";
        let breakdown = PhishingScorer::default().analyze(text);
        let links = breakdown
            .contributions
            .iter()
            .find(|c| c.rule == ScoringRule::Links)
            .unwrap();
        assert_eq!(links.points, 6);
        assert_eq!(breakdown.raw_score, 6);
        assert_eq!(breakdown.percentage, 30);
    }

    #[test]
    fn test_mixed_scheme_links_counted() {
        // two links = 4 points
        assert_eq!(score("see HTTP://one.example and http://two.example"), 20);
    }

    #[test]
    fn test_long_message_no_short_bonus() {
        let mut words = vec!["urgent"];
        words.extend(std::iter::repeat("filler").take(24));
        let text = words.join(" ");
        assert_eq!(word_count(&text), 25);
        assert_eq!(score(&text), 10);
    }

    #[test]
    fn test_bare_suspicious_sender() {
        // bank keyword 1 + sender 3
        assert_eq!(score("alerts@bank-secure.ru"), 20);
        assert_eq!(score("Alerts@Bank-Secure.RU"), 20);
        assert_eq!(score("alerts@bank-secure.ru\n"), 20);
        assert_eq!(score("someone@example.tk"), 15);
    }

    #[test]
    fn test_embedded_sender_not_matched() {
        let breakdown = PhishingScorer::default().analyze("from alerts@bank-secure.ru today");
        assert!(!breakdown
            .contributions
            .iter()
            .any(|c| c.rule == ScoringRule::SuspiciousSender));
        assert!(!PhishingScorer::default()
            .analyze("a@b@c.ru")
            .contributions
            .iter()
            .any(|c| c.rule == ScoringRule::SuspiciousSender));
    }

    #[test]
    fn test_everything_clamps_to_100() {
        let text = "urgent verify password bank click login update invoice salary \
                    http://a http://b http://c x@evil.ru";
        let breakdown = PhishingScorer::default().analyze(text);
        assert_eq!(breakdown.raw_score, 22);
        assert_eq!(breakdown.percentage, 100);
    }

    #[test]
    fn test_non_ascii_and_binary_input() {
        for text in ["Пароль срочно", "\u{0}\u{1}\u{fffd}", "密码 urgent", "@@@@", "."] {
            let pct = score(text);
            assert!(pct <= 100);
            assert_eq!(pct, score(text));
        }
    }

    #[test]
    fn test_breakdown_matches_score() {
        let scorer = PhishingScorer::default();
        for text in [
            "",
            "Please login to update your bank details",
            "We detected a problem. Verify at http://bank.verify-now.example",
            "Reminder: Team lunch tomorrow 1PM",
        ] {
            assert_eq!(scorer.analyze(text).percentage, scorer.score(text));
        }
    }

    #[test]
    fn test_monotonic_in_contributions() {
        let base = "please review the attached document";
        let with_keyword = "please review the attached invoice";
        let with_link = "please review the attached invoice http://x.example";
        assert!(score(with_keyword) >= score(base));
        assert!(score(with_link) >= score(with_keyword));
    }

    #[test]
    fn test_custom_config() {
        let mut config = ScoringConfig::default();
        config.keyword_weights.insert("Gift Card".to_string(), 4);
        config.suspicious_tlds.clear();
        let scorer = PhishingScorer::new(config).unwrap();
        assert_eq!(scorer.score("buy a gift card now please"), 20);
        // sender rule disabled
        assert_eq!(scorer.score("someone@example.tk"), 0);
    }

    #[test]
    fn test_information_separators_split_words() {
        let text = format!("urgent{}", "\x1fa".repeat(25));
        assert_eq!(word_count(&text), 26);
        // 26 words, so no short-message bonus
        assert_eq!(score(&text), 10);
        assert_eq!(word_count("a\x1c\x1d\x1eb"), 2);
    }

    #[test]
    fn test_load_from_file() {
        let path = std::env::temp_dir().join(format!(
            "ransomshield-rules-{}.yaml",
            std::process::id()
        ));
        std::fs::write(
            &path,
            "keyword_weights:\n  Gift Card: 4\nsuspicious_tlds: []\n",
        )
        .unwrap();
        let scorer = PhishingScorer::load_from_file(path.to_str().unwrap()).unwrap();
        std::fs::remove_file(&path).unwrap();

        assert_eq!(scorer.config().keyword_weights.get("gift card"), Some(&4));
        assert_eq!(scorer.config().max_score, 20);
        assert_eq!(scorer.score("buy a gift card now please"), 20);
        assert_eq!(scorer.score("someone@example.tk"), 0);
    }

    #[test]
    fn test_load_from_file_errors() {
        assert!(PhishingScorer::load_from_file("/nonexistent/rules.yaml").is_err());

        let path = std::env::temp_dir().join(format!(
            "ransomshield-bad-rules-{}.yaml",
            std::process::id()
        ));
        std::fs::write(&path, "max_score: 0\n").unwrap();
        let result = PhishingScorer::load_from_file(path.to_str().unwrap());
        std::fs::remove_file(&path).unwrap();
        assert!(result.is_err());
    }

    #[test]
    fn test_zero_max_score_rejected() {
        let config = ScoringConfig {
            max_score: 0,
            ..Default::default()
        };
        assert!(PhishingScorer::new(config).is_err());
    }

    #[test]
    fn test_scorer_is_shareable_across_threads() {
        let scorer = std::sync::Arc::new(PhishingScorer::default());
        let handles: Vec<_> = (0..4)
            .map(|_| {
                let scorer = scorer.clone();
                std::thread::spawn(move || scorer.score("URGENT VERIFY PASSWORD"))
            })
            .collect();
        for handle in handles {
            assert_eq!(handle.join().unwrap(), 35);
        }
    }
}
