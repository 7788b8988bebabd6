use super::pause;
use std::time::Duration;

#[derive(Debug, Clone, Copy)]
pub struct Stage {
    pub name: &'static str,
    pub description: &'static str,
}

pub const STAGES: &[Stage] = &[
    Stage {
        name: "Initial Access",
        description: "Phishing or exploit grants access",
    },
    Stage {
        name: "Execution",
        description: "Payload executes on host",
    },
    Stage {
        name: "Persistence",
        description: "Malicious service / scheduled task created",
    },
    Stage {
        name: "Privilege Escalation",
        description: "Attempt to gain higher privileges",
    },
    Stage {
        name: "Lateral Movement",
        description: "Spreading to other hosts",
    },
    Stage {
        name: "Impact",
        description: "Data encrypted and ransom note dropped",
    },
];

pub const COMPLETE_MESSAGE: &str = "Kill chain demonstration complete (simulation)";
pub const DETAILS_NOTE: &str =
    "Notes: This is a simplified educational sequence mapping to common attack steps.";

/// Play the stages one at a time, waiting `delay` after each.
pub async fn play<F>(delay: Duration, details: bool, mut emit: F)
where
    F: FnMut(&str),
{
    for (index, stage) in STAGES.iter().enumerate() {
        emit(&format!(
            "[{}/{}] {}\n      {}",
            index + 1,
            STAGES.len(),
            stage.name,
            stage.description
        ));
        pause(delay).await;
    }
    emit(COMPLETE_MESSAGE);
    if details {
        emit(DETAILS_NOTE);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_playback_order() {
        let mut frames = Vec::new();
        play(Duration::ZERO, false, |f| frames.push(f.to_string())).await;

        assert_eq!(frames.len(), STAGES.len() + 1);
        assert!(frames[0].contains("Initial Access"));
        assert!(frames[5].contains("Impact"));
        assert_eq!(frames.last().unwrap(), COMPLETE_MESSAGE);
    }

    #[tokio::test]
    async fn test_details_appended() {
        let mut frames = Vec::new();
        play(Duration::ZERO, true, |f| frames.push(f.to_string())).await;
        assert_eq!(frames.last().unwrap(), DETAILS_NOTE);
    }
}
