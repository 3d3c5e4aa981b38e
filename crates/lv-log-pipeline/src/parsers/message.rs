//! Message line tokenizer for the combined, error and exception sinks.
//!
//! Expected shape: `[<timestamp> : <level>] - <message>`. The writing
//! sink appends one stray `]` after the message; the tokenizer removes
//! it when present so canonical lines pass through unchanged.

use crate::types::MessageRecord;

/// Tokenize one message line.
pub fn parse(line: &str) -> MessageRecord {
    let mut record = MessageRecord::default();

    let Some((stamp, message)) = line.split_once(" - ") else {
        return record;
    };

    record.message = message.strip_suffix(']').unwrap_or(message).to_string();

    if let Some((timestamp, level)) = stamp.split_once(" : ") {
        record.timestamp = timestamp.strip_prefix('[').unwrap_or(timestamp).to_string();
        record.level = level.strip_suffix(']').unwrap_or(level).to_string();
    }

    record
}
