use super::{pause, ransom_note};
use crate::session::SessionState;
use serde::{Deserialize, Serialize};
use std::time::Duration;

pub const LOCKED_SUFFIX: &str = ".locked";
const PROGRESS_STEP: usize = 5;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FileRecord {
    pub original: String,
    pub locked: bool,
    pub display: String,
}

impl FileRecord {
    pub fn new(name: &str) -> Self {
        Self {
            original: name.to_string(),
            locked: false,
            display: name.to_string(),
        }
    }

    fn lock(&mut self) {
        self.locked = true;
        self.display = format!("{}{}", self.original, LOCKED_SUFFIX);
    }
}

#[derive(Debug, Clone, PartialEq)]
pub enum ProgressEvent<'a> {
    Started { file: &'a str },
    Progress { file: &'a str, percent: u8 },
    Locked { file: &'a str, locked_name: &'a str },
}

/// Walk each file name through a fake 0-100% progress run and mark it
/// locked. Only the names are touched.
pub async fn fake_encrypt<F>(names: &[String], tick: Duration, mut on_event: F) -> Vec<FileRecord>
where
    F: FnMut(ProgressEvent<'_>),
{
    let mut records: Vec<FileRecord> = names.iter().map(|n| FileRecord::new(n)).collect();

    for record in records.iter_mut() {
        on_event(ProgressEvent::Started {
            file: &record.original,
        });
        for percent in (0..=100).step_by(PROGRESS_STEP) {
            on_event(ProgressEvent::Progress {
                file: &record.original,
                percent: percent as u8,
            });
            pause(tick).await;
        }
        record.lock();
        on_event(ProgressEvent::Locked {
            file: &record.original,
            locked_name: &record.display,
        });
    }

    records
}

/// Run the fake encryption and record its outcome in the session.
pub async fn simulate_upload<F>(
    session: &mut SessionState,
    names: &[String],
    tick: Duration,
    on_event: F,
) -> anyhow::Result<Vec<FileRecord>>
where
    F: FnMut(ProgressEvent<'_>),
{
    if names.is_empty() {
        anyhow::bail!("no file names given to simulate");
    }

    let records = fake_encrypt(names, tick, on_event).await;
    let displays: Vec<&str> = records.iter().map(|r| r.display.as_str()).collect();
    session.ransom_note = ransom_note::generate_note(
        &displays,
        ransom_note::DEFAULT_FAMILY,
        ransom_note::DEFAULT_AMOUNT,
    );
    session.files = records.clone();
    session.infected = true;
    session.record_simulation();

    log::info!("Simulated encryption of {} file name(s)", records.len());
    Ok(records)
}
