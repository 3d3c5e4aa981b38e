//! Core retrieval types: log categories, parsed records, queries, results.

use serde::{Deserialize, Serialize};

// ── Log Category ──────────────────────────────────────────────

/// One of the four log channels. The category selects both the backing
/// file and the line format variant.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LogCategory {
    Combined,
    Error,
    Exception,
    Request,
}

impl LogCategory {
    /// Resolve a caller-supplied channel name.
    ///
    /// Unknown names are a retrieval-level failure handled by the
    /// pipeline, never a panic.
    pub fn resolve(name: &str) -> Option<Self> {
        match name {
            "combined" => Some(Self::Combined),
            "error" => Some(Self::Error),
            "exception" => Some(Self::Exception),
            "request" => Some(Self::Request),
            _ => None,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Combined => "combined",
            Self::Error => "error",
            Self::Exception => "exception",
            Self::Request => "request",
        }
    }

    /// Backing file name under the log directory.
    pub fn file_name(&self) -> String {
        format!("{}.log", self.as_str())
    }

    /// The exception sink writes Windows-style line endings; the other
    /// sinks do not.
    pub fn line_delimiter(&self) -> &'static str {
        match self {
            Self::Exception => "\r\n",
            _ => "\n",
        }
    }
}

impl std::fmt::Display for LogCategory {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

// ── Records ───────────────────────────────────────────────────

/// One access-log line:
/// `[<timestamp> GMT <client>] <method> <route> <proto> | <status> <runtime>`.
///
/// Fields the tokenizer could not recover from a malformed line are left
/// as empty strings.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct RequestRecord {
    pub method: String,
    pub route: String,
    pub protocol_version: String,
    pub client_address: String,
    pub timestamp: String,
    pub status_code: String,
    pub runtime_ms: String,
}

/// One message line: `[<timestamp> : <level>] - <message>`.
///
/// Used by the combined, error and exception channels.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct MessageRecord {
    pub timestamp: String,
    pub level: String,
    pub message: String,
}

/// A parsed log record; the variant follows the category's line format.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum LogRecord {
    Request(RequestRecord),
    Message(MessageRecord),
}

impl LogRecord {
    /// The record's raw timestamp text, as the sink wrote it.
    pub fn timestamp(&self) -> &str {
        match self {
            Self::Request(r) => &r.timestamp,
            Self::Message(m) => &m.timestamp,
        }
    }
}

// ── Query ─────────────────────────────────────────────────────

/// Positional trim direction for the returned window.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum Order {
    #[default]
    Head,
    Tail,
}

impl Order {
    /// Boundary mapping: exactly `Tail` selects Tail, anything else
    /// falls back to Head.
    pub fn from_param(value: &str) -> Self {
        if value == "Tail" { Self::Tail } else { Self::Head }
    }
}

/// How the final window is re-emitted.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum OutputForm {
    Structured,
    #[default]
    Text,
}

impl OutputForm {
    /// Boundary mapping: `json` selects structured output, anything
    /// else is text.
    pub fn from_param(value: &str) -> Self {
        if value == "json" { Self::Structured } else { Self::Text }
    }
}

/// One retrieval request. Defaults match the HTTP boundary's.
#[derive(Debug, Clone)]
pub struct RetrievalQuery {
    /// Raw channel name; resolved inside the pipeline so unknown names
    /// degrade instead of erroring at the caller.
    pub category: String,
    /// Upper bound on the number of records returned. Bounds the
    /// window, never the filtering stage.
    pub count: usize,
    /// Compact `start*end` time range; `None` disables filtering.
    pub range: Option<String>,
    pub order: Order,
    pub output: OutputForm,
}

impl Default for RetrievalQuery {
    fn default() -> Self {
        Self {
            category: "combined".to_string(),
            count: 100,
            range: None,
            order: Order::Head,
            output: OutputForm::Text,
        }
    }
}

// ── Result ────────────────────────────────────────────────────

/// What a retrieval hands back: parsed records for machine consumption,
/// or one reconstructed text blob.
///
/// The degraded error string travels over the `Text` channel, exactly
/// as the callers forward it.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
pub enum RetrievalResult {
    Records(Vec<LogRecord>),
    Text(String),
}
