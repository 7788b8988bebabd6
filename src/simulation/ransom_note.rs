use crate::session::SessionState;

pub const FAMILIES: &[&str] = &["Generic", "LockBit", "REvil", "WannaCry"];
pub const DEFAULT_FAMILY: &str = "Generic";
pub const DEFAULT_AMOUNT: &str = "0.5 BTC";
const FALLBACK_FILE: &str = "example.docx";

pub fn generate_note<S: AsRef<str>>(files: &[S], family: &str, amount: &str) -> String {
    let mut note = format!("*** {} RANSOM NOTE (SIMULATION) ***\n\n", family);
    note.push_str("The files listed below have been encrypted:\n");
    for file in files {
        note.push_str(&format!("- {}\n", file.as_ref()));
    }
    note.push_str(&format!(
        "\nTo recover your files send {} to wallet: 1AaBbCccD... (SIMULATION)\n",
        amount
    ));
    note.push_str("Timer: 48:00:00");
    note
}

/// Names to list in a note: explicit lines first, then the session's
/// encrypted files, then a placeholder.
pub fn note_targets(explicit: &str, session: &SessionState) -> Vec<String> {
    let listed: Vec<String> = explicit
        .lines()
        .map(str::trim)
        .filter(|l| !l.is_empty())
        .map(str::to_string)
        .collect();
    if !listed.is_empty() {
        return listed;
    }
    if !session.files.is_empty() {
        return session.files.iter().map(|f| f.display.clone()).collect();
    }
    vec![FALLBACK_FILE.to_string()]
}
