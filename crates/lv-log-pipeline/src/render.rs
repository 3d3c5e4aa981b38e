//! Canonical line rendering — the inverse of the tokenizers.

use crate::types::{LogRecord, MessageRecord, RequestRecord};

/// Re-render one record to its canonical line form, without a newline.
pub fn render_line(record: &LogRecord) -> String {
    match record {
        LogRecord::Request(r) => render_request(r),
        LogRecord::Message(m) => render_message(m),
    }
}

fn render_request(r: &RequestRecord) -> String {
    format!(
        "[{} GMT {}] {} {} {} | {} {}",
        r.timestamp,
        r.client_address,
        r.method,
        r.route,
        r.protocol_version,
        r.status_code,
        r.runtime_ms
    )
}

fn render_message(m: &MessageRecord) -> String {
    format!("[{} : {}] - {}", m.timestamp, m.level, m.message)
}

/// Fold a window into one text blob, one rendered line per record, in
/// sequence order. No trailing separator beyond the per-line newline.
pub fn render_text(records: &[LogRecord]) -> String {
    records.iter().fold(String::new(), |mut blob, record| {
        blob.push_str(&render_line(record));
        blob.push('\n');
        blob
    })
}
