use super::pause;
use std::time::Duration;

pub const DEFAULT_TARGETS: &[&str] = &["project_code.py", "taxes.xlsx", "notes.txt"];

pub fn terminal_lines<S: AsRef<str>>(targets: &[S]) -> Vec<String> {
    let mut lines = vec!["Starting scan of file system...".to_string()];
    lines.extend(targets.iter().map(|f| format!("Found file: {}", f.as_ref())));
    lines.push("Beginning encryption routine...".to_string());
    lines.extend(
        targets
            .iter()
            .map(|f| format!("Encrypting: {0} -> {0}.locked", f.as_ref())),
    );
    lines.push("Encryption complete. Ransom note created: READ_ME_NOW.txt".to_string());
    lines
}

/// Stream the canned output with a pause after each scan and encrypt line.
pub async fn play<S, F>(targets: &[S], scan_delay: Duration, encrypt_delay: Duration, mut emit: F)
where
    S: AsRef<str>,
    F: FnMut(&str),
{
    for line in terminal_lines(targets) {
        emit(&line);
        if line.starts_with("Found file:") {
            pause(scan_delay).await;
        } else if line.starts_with("Encrypting:") {
            pause(encrypt_delay).await;
        }
    }
}
