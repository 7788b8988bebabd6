use crate::session::Analytics;
use anyhow::{Context, Result};
use chrono::{DateTime, Utc};
use rusqlite::{params, Connection, OptionalExtension};
use serde::{Deserialize, Serialize};
use std::path::Path;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LogEntry {
    pub id: i64,
    pub timestamp: DateTime<Utc>,
    pub message: String,
}

/// Optional SQLite persistence for session analytics and an activity log.
pub struct StatsStore {
    conn: Connection,
}

impl StatsStore {
    pub fn open(db_path: &str) -> Result<Self> {
        if db_path != ":memory:" {
            if let Some(parent) = Path::new(db_path).parent() {
                if !parent.as_os_str().is_empty() {
                    std::fs::create_dir_all(parent).with_context(|| {
                        format!("Failed to create stats directory: {}", parent.display())
                    })?;
                }
            }
        }

        let conn = Connection::open(db_path)
            .with_context(|| format!("Failed to open statistics database: {db_path}"))?;
        Self::init_database(&conn)?;
        Ok(Self { conn })
    }

    pub fn open_in_memory() -> Result<Self> {
        Self::open(":memory:")
    }

    fn init_database(conn: &Connection) -> Result<()> {
        conn.execute(
            "CREATE TABLE IF NOT EXISTS analytics (
                id INTEGER PRIMARY KEY AUTOINCREMENT,
                simulations_run INTEGER DEFAULT 0,
                phishing_clicked INTEGER DEFAULT 0,
                quizzes_taken INTEGER DEFAULT 0,
                avg_quiz_score REAL DEFAULT 0
            )",
            [],
        )?;

        conn.execute(
            "CREATE TABLE IF NOT EXISTS logs (
                id INTEGER PRIMARY KEY AUTOINCREMENT,
                timestamp TEXT,
                message TEXT
            )",
            [],
        )?;

        Ok(())
    }

    pub fn save_analytics(&self, analytics: &Analytics) -> Result<()> {
        self.conn.execute(
            "INSERT INTO analytics (simulations_run, phishing_clicked, quizzes_taken, avg_quiz_score)
             VALUES (?, ?, ?, ?)",
            params![
                analytics.simulations_run as i64,
                analytics.phishing_checks as i64,
                analytics.quizzes_taken as i64,
                analytics.avg_quiz_score
            ],
        )?;
        Ok(())
    }

    pub fn latest_analytics(&self) -> Result<Option<Analytics>> {
        let analytics = self
            .conn
            .query_row(
                "SELECT simulations_run, phishing_clicked, quizzes_taken, avg_quiz_score
                 FROM analytics ORDER BY id DESC LIMIT 1",
                [],
                |row| {
                    Ok(Analytics {
                        simulations_run: row.get::<_, i64>(0)? as u64,
                        phishing_checks: row.get::<_, i64>(1)? as u64,
                        quizzes_taken: row.get::<_, i64>(2)? as u64,
                        avg_quiz_score: row.get(3)?,
                    })
                },
            )
            .optional()?;
        Ok(analytics)
    }

    pub fn append_log(&self, message: &str) -> Result<()> {
        self.conn.execute(
            "INSERT INTO logs (timestamp, message) VALUES (?, ?)",
            params![Utc::now().to_rfc3339(), message],
        )?;
        Ok(())
    }

    /// Most recent entries first.
    pub fn recent_logs(&self, limit: usize) -> Result<Vec<LogEntry>> {
        let mut stmt = self
            .conn
            .prepare("SELECT id, timestamp, message FROM logs ORDER BY id DESC LIMIT ?")?;

        let rows = stmt.query_map(params![limit as i64], |row| {
            Ok((
                row.get::<_, i64>(0)?,
                row.get::<_, String>(1)?,
                row.get::<_, String>(2)?,
            ))
        })?;

        let mut entries = Vec::new();
        for row in rows {
            let (id, timestamp, message) = row?;
            let timestamp = DateTime::parse_from_rfc3339(&timestamp)
                .with_context(|| format!("Bad timestamp in log entry {id}: {timestamp}"))?
                .with_timezone(&Utc);
            entries.push(LogEntry {
                id,
                timestamp,
                message,
            });
        }
        Ok(entries)
    }

    pub fn reset(&self) -> Result<()> {
        let tx = self.conn.unchecked_transaction()?;
        tx.execute("DELETE FROM analytics", [])?;
        tx.execute("DELETE FROM logs", [])?;
        tx.commit()?;
        Ok(())
    }
}
