//! Request (access-log) line tokenizer.
//!
//! Expected shape:
//! `[<timestamp> GMT <client>] <method> <route> <proto> | <status> <runtime>`

use crate::types::RequestRecord;

/// Tokenize one access-log line.
///
/// Recovers as many fields as the line yields; anything that does not
/// match the expected token shape stays empty.
pub fn parse(line: &str) -> RequestRecord {
    let mut record = RequestRecord::default();

    let Some((header, tail)) = line.split_once(" | ") else {
        return record;
    };

    // Tail is `<status> <runtime>`; the runtime keeps its unit suffix.
    if let Some((status, runtime)) = tail.split_once(' ') {
        record.status_code = status.to_string();
        record.runtime_ms = runtime.to_string();
    }

    let Some((stamp, request)) = header.split_once(']') else {
        return record;
    };

    if let Some((timestamp, client)) = stamp.split_once("GMT") {
        record.timestamp = timestamp
            .strip_prefix('[')
            .unwrap_or(timestamp)
            .trim_end()
            .to_string();
        record.client_address = client.trim().to_string();
    }

    // The request line must be exactly method, route, protocol version;
    // a route containing spaces does not fit the shape.
    let tokens: Vec<&str> = request.split_whitespace().collect();
    if let [method, route, version] = tokens[..] {
        record.method = method.to_string();
        record.route = route.to_string();
        record.protocol_version = version.to_string();
    }

    record
}
