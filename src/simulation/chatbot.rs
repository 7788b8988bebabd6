use crate::session::{ChatTurn, SessionState};

/// Checked in order; the first phrase found in the message wins.
pub const CHAT_FLOW: &[(&str, &[&str])] = &[
    (
        "opened suspicious file",
        &[
            "Step 1: Disconnect the device from the network immediately.",
            "Step 2: Notify your IT/security team and preserve the device as-is.",
            "Do NOT power off the device if evidence collection is needed; follow IT guidance.",
        ],
    ),
    (
        "machine encrypted",
        &[
            "Isolate the machine — disconnect network, unplug ethernet/Wi-Fi.",
            "Preserve logs and contact incident response. Do NOT pay ransom without consulting authority.",
        ],
    ),
    (
        "phishing email",
        &[
            "Do not click links or open attachments. Report the email to your security team.",
            "Change passwords if you suspect credential compromise.",
        ],
    ),
];

pub const FALLBACK: &str = "If this is urgent: isolate affected systems, notify IT, preserve evidence (screenshots/logs), and follow your organization incident response playbook.";

pub fn respond(message: &str) -> String {
    let message = message.to_lowercase();
    CHAT_FLOW
        .iter()
        .find(|(phrase, _)| message.contains(phrase))
        .map(|(_, lines)| lines.join("\n"))
        .unwrap_or_else(|| FALLBACK.to_string())
}

/// Answer and keep the exchange in the session history.
pub fn ask(session: &mut SessionState, message: &str) -> String {
    let answer = respond(message);
    session.chat.push(ChatTurn {
        question: message.to_string(),
        answer: answer.clone(),
    });
    answer
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_keyword_response() {
        let answer = respond("Help, I think my MACHINE ENCRYPTED everything");
        assert!(answer.starts_with("Isolate the machine"));
        assert_eq!(answer.lines().count(), 2);
    }

    #[test]
    fn test_table_order_wins() {
        let answer = respond("I opened suspicious file from a phishing email");
        assert!(answer.starts_with("Step 1:"));
    }

    #[test]
    fn test_fallback() {
        assert_eq!(respond("what now?"), FALLBACK);
        assert_eq!(respond(""), FALLBACK);
    }

    #[test]
    fn test_history_recorded() {
        let mut session = SessionState::new();
        ask(&mut session, "got a phishing email");
        ask(&mut session, "hello");
        assert_eq!(session.chat.len(), 2);
        assert_eq!(session.chat[0].question, "got a phishing email");
        assert!(session.chat[0].answer.starts_with("Do not click links"));
        assert_eq!(session.chat[1].answer, FALLBACK);
    }
}
