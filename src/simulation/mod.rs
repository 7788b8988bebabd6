//! Cosmetic attack and response demos. Nothing here opens, modifies or
//! transmits real files; only names and in-session state are used.

pub mod audit_log;
pub mod breach;
pub mod chatbot;
pub mod encryption;
pub mod inbox;
pub mod kill_chain;
pub mod lab;
pub mod network;
pub mod ransom_note;
pub mod terminal;

use std::time::Duration;

pub(crate) async fn pause(delay: Duration) {
    if !delay.is_zero() {
        tokio::time::sleep(delay).await;
    }
}
