//! Line splitting and the two per-variant line parsers.
//!
//! Both variants tokenize on exact literal separators, so these are
//! plain split-based tokenizers; there is nothing here a regex would
//! buy.

pub mod message;
pub mod request;

use crate::types::{LogCategory, LogRecord};

/// Split a file snapshot into its non-empty lines, in file order.
///
/// The exception sink writes `\r\n` line endings while every other sink
/// writes `\n`; a terminal delimiter would otherwise yield a trailing
/// empty element.
pub fn split_lines(content: &str, category: LogCategory) -> impl Iterator<Item = &str> {
    content
        .split(category.line_delimiter())
        .filter(|line| !line.is_empty())
}

/// Parse one line according to the category's format variant.
///
/// Malformed lines yield records with empty fields rather than errors;
/// one bad line must never sink a whole retrieval.
pub fn parse_line(line: &str, category: LogCategory) -> LogRecord {
    match category {
        LogCategory::Request => LogRecord::Request(request::parse(line)),
        _ => LogRecord::Message(message::parse(line)),
    }
}
