//! Player-facing game log.
//!
//! This is duel state shown to the player, not diagnostics. Diagnostics go
//! through `tracing`.

use serde::{Deserialize, Serialize};

/// Log line category.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LogKind {
    Info,
    Combat,
    Synthesis,
    Commentary,
}

/// One game log line.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct LogEntry {
    pub turn: u32,
    pub message: String,
    pub kind: LogKind,
}

impl LogEntry {
    #[must_use]
    pub fn new(turn: u32, kind: LogKind, message: impl Into<String>) -> Self {
        Self {
            turn,
            message: message.into(),
            kind,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_serialization() {
        let entry = LogEntry::new(3, LogKind::Combat, "攻撃！");
        let json = serde_json::to_string(&entry).unwrap();
        assert!(json.contains("\"combat\""));
        let back: LogEntry = serde_json::from_str(&json).unwrap();
        assert_eq!(entry, back);
    }
}
