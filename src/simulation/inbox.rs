use crate::phishing::PhishingScorer;
use crate::session::SessionState;

#[derive(Debug, Clone, Copy)]
pub struct SampleMail {
    pub id: u32,
    pub from: &'static str,
    pub subject: &'static str,
    pub snippet: &'static str,
    pub body: &'static str,
    pub is_phish: bool,
}

impl SampleMail {
    /// Sender, subject and body combined the way the detector expects.
    pub fn as_text(&self) -> String {
        format!("From: {}\nSubject: {}\n\n{}", self.from, self.subject, self.body)
    }
}

pub const SAMPLE_INBOX: &[SampleMail] = &[
    SampleMail {
        id: 1,
        from: "hr@acme-corp.com",
        subject: "Payroll Update Required",
        snippet: "Please download attached payroll_update.zip and confirm",
        body: "Dear employee,\nPlease download payroll_update.zip and run to update payroll.",
        is_phish: true,
    },
    SampleMail {
        id: 2,
        from: "it-support@acme-corp.com",
        subject: "Password expiry notice",
        snippet: "Your password will expire, log in at https://acme-login.example to renew",
        body: "Your password will expire. Please login: https://acme-login.example",
        is_phish: true,
    },
    SampleMail {
        id: 3,
        from: "ceo@acme-corp.com",
        subject: "Team lunch tomorrow",
        snippet: "Reminder: Team lunch tomorrow 1PM",
        body: "Reminder: Team lunch tomorrow 1PM",
        is_phish: false,
    },
    SampleMail {
        id: 4,
        from: "vendor@trusted-supplier.com",
        subject: "Invoice 2025-011",
        snippet: "Please find attached invoice_2025.pdf",
        body: "Please find attached invoice_2025.pdf. Thanks.",
        is_phish: false,
    },
    SampleMail {
        id: 5,
        from: "alerts@bank-secure.ru",
        subject: "Account verification needed",
        snippet: "Verify your account immediately",
        body: "We detected a problem. Verify at http://bank.verify-now.example",
        is_phish: true,
    },
];

pub const HINTS: &str = "Look for suspicious domains, unexpected attachments, urgent language, and mismatched senders.";

pub fn find(id: u32) -> Option<&'static SampleMail> {
    SAMPLE_INBOX.iter().find(|m| m.id == id)
}

/// Open a mail; unknown ids fall back to the first one.
pub fn open(session: &mut SessionState, id: u32) -> &'static SampleMail {
    let mail = find(id).unwrap_or(&SAMPLE_INBOX[0]);
    session.open_mail = Some(mail.id);
    mail
}

/// The mail currently shown in the inspector.
pub fn current(session: &mut SessionState) -> &'static SampleMail {
    let id = session.open_mail.unwrap_or(SAMPLE_INBOX[0].id);
    open(session, id)
}

/// Grade the trainee's call on a mail. Returns whether it was correct.
pub fn mark(session: &mut SessionState, id: u32, marked_phishing: bool) -> anyhow::Result<bool> {
    let mail = find(id).ok_or_else(|| anyhow::anyhow!("no mail with id {} in the inbox", id))?;

    session.inbox_attempts += 1;
    let correct = marked_phishing == mail.is_phish;
    if correct {
        session.inbox_score += 1;
    }
    session.inbox_marks.insert(id, marked_phishing);

    log::debug!(
        "Inbox mark: mail={} marked_phishing={} correct={}",
        id,
        marked_phishing,
        correct
    );
    Ok(correct)
}

pub fn score_display(session: &SessionState) -> String {
    format!(
        "{}/{}",
        session.inbox_score,
        session.inbox_attempts.max(1)
    )
}

/// What the heuristic detector would say about every sample mail.
pub fn heuristic_scores(scorer: &PhishingScorer) -> Vec<(u32, u8)> {
    SAMPLE_INBOX
        .iter()
        .map(|m| (m.id, scorer.score(&m.as_text())))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_open_falls_back_to_first() {
        let mut session = SessionState::new();
        assert_eq!(current(&mut session).id, 1);
        assert_eq!(open(&mut session, 5).id, 5);
        assert_eq!(session.open_mail, Some(5));
        assert_eq!(open(&mut session, 99).id, 1);
    }

    #[test]
    fn test_marking_and_score() {
        let mut session = SessionState::new();
        assert_eq!(score_display(&session), "0/1");

        assert!(mark(&mut session, 5, true).unwrap());
        assert!(!mark(&mut session, 3, true).unwrap());
        assert!(mark(&mut session, 4, false).unwrap());

        assert_eq!(session.inbox_attempts, 3);
        assert_eq!(session.inbox_score, 2);
        assert_eq!(session.inbox_marks.get(&3), Some(&true));
        assert_eq!(score_display(&session), "2/3");
    }

    #[test]
    fn test_unknown_mail_rejected() {
        let mut session = SessionState::new();
        assert!(mark(&mut session, 42, true).is_err());
        assert_eq!(session.inbox_attempts, 0);
    }

    #[test]
    fn test_heuristic_scores_cover_inbox() {
        let scores = heuristic_scores(&PhishingScorer::default());
        assert_eq!(scores.len(), SAMPLE_INBOX.len());
        let lunch = scores.iter().find(|(id, _)| *id == 3).unwrap().1;
        let bank = scores.iter().find(|(id, _)| *id == 5).unwrap().1;
        assert!(bank > lunch);
    }
}
