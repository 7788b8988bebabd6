use chrono::{Duration, NaiveDateTime};
use rand::seq::SliceRandom;
use rand::Rng;

pub const LEVELS: &[&str] = &["INFO", "WARN", "ERROR", "CRITICAL"];

pub const ACTIONS: &[&str] = &[
    "User login success",
    "User login failure",
    "Suspicious PowerShell execution",
    "File write to backup folder",
    "SMB connection from 192.168.1.50",
    "Large file read: finances.xlsx",
    "Process created: suspicious.exe",
    "Network scan detected",
    "Potential data exfiltration",
    "Ransom note dropped: READ_ME_NOW.txt",
];

pub const MIN_ENTRIES: usize = 6;
pub const MAX_ENTRIES: usize = 50;
pub const DEFAULT_ENTRIES: usize = 12;

/// Fake SOC log lines. Entry `i` is stamped `(count - i) * rand(10..=80)`
/// seconds before `now`.
pub fn generate_audit_logs<R: Rng>(count: usize, rng: &mut R, now: NaiveDateTime) -> Vec<String> {
    (0..count)
        .map(|i| {
            let offset = (count - i) as i64 * rng.gen_range(10..=80);
            let timestamp = now - Duration::seconds(offset);
            let level = LEVELS.choose(rng).copied().unwrap_or("INFO");
            let action = ACTIONS.choose(rng).copied().unwrap_or("Network scan detected");
            format!(
                "[{}] {} - {}",
                timestamp.format("%Y-%m-%dT%H:%M:%S%.f"),
                level,
                action
            )
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    fn fixed_now() -> NaiveDateTime {
        NaiveDate::from_ymd_opt(2025, 3, 1)
            .unwrap()
            .and_hms_opt(12, 0, 0)
            .unwrap()
    }

    #[test]
    fn test_line_shape() {
        let mut rng = StdRng::seed_from_u64(7);
        let logs = generate_audit_logs(DEFAULT_ENTRIES, &mut rng, fixed_now());
        assert_eq!(logs.len(), DEFAULT_ENTRIES);

        for line in &logs {
            assert!(line.starts_with("[2025-"));
            let (_, rest) = line.split_once("] ").unwrap();
            let (level, action) = rest.split_once(" - ").unwrap();
            assert!(LEVELS.contains(&level));
            assert!(ACTIONS.contains(&action));
        }
    }

    #[test]
    fn test_timestamps_before_now() {
        let mut rng = StdRng::seed_from_u64(1);
        let now = fixed_now();
        let logs = generate_audit_logs(MIN_ENTRIES, &mut rng, now);
        for line in logs {
            let stamp = &line[1..line.find(']').unwrap()];
            let parsed = NaiveDateTime::parse_from_str(stamp, "%Y-%m-%dT%H:%M:%S%.f").unwrap();
            assert!(parsed < now);
            // at most count * 80 seconds back
            assert!(now - parsed <= Duration::seconds(MIN_ENTRIES as i64 * 80));
        }
    }

    #[test]
    fn test_seeded_generation_is_reproducible() {
        let a = generate_audit_logs(10, &mut StdRng::seed_from_u64(3), fixed_now());
        let b = generate_audit_logs(10, &mut StdRng::seed_from_u64(3), fixed_now());
        assert_eq!(a, b);
    }
}
