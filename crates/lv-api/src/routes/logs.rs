//! Log retrieval endpoint — a thin pass-through to the pipeline.

use axum::Json;
use axum::extract::{Query, State};
use axum::response::{IntoResponse, Response};
use serde::Deserialize;

use lv_log_pipeline::{Order, OutputForm, RetrievalQuery, RetrievalResult, retrieve};

use crate::state::AppState;

/// Raw `/logs` query parameters, straight off the wire.
#[derive(Debug, Deserialize)]
pub struct LogsParams {
    /// Log channel name.
    #[serde(rename = "type", default = "default_category")]
    pub category: String,
    /// Maximum number of records returned.
    #[serde(default = "default_length")]
    pub length: usize,
    /// Compact `start*end` time range.
    #[serde(rename = "timeFilterRange")]
    pub time_filter_range: Option<String>,
    /// `Tail` selects the tail window; anything else is Head.
    pub order: Option<String>,
    /// `json` selects structured output; anything else is text.
    pub file: Option<String>,
}

fn default_category() -> String {
    "combined".to_string()
}

fn default_length() -> usize {
    100
}

impl LogsParams {
    fn into_query(self) -> RetrievalQuery {
        RetrievalQuery {
            category: self.category,
            count: self.length,
            range: self.time_filter_range,
            order: self
                .order
                .as_deref()
                .map(Order::from_param)
                .unwrap_or_default(),
            output: self
                .file
                .as_deref()
                .map(OutputForm::from_param)
                .unwrap_or_default(),
        }
    }
}

/// GET /logs — run one retrieval and forward the result unmodified.
///
/// Always answers 200: structured windows as a JSON array, everything
/// else (including the pipeline's degraded error string) as plain text.
pub async fn get_logs(State(state): State<AppState>, Query(params): Query<LogsParams>) -> Response {
    let query = params.into_query();
    match retrieve(&query, state.store.as_ref()).await {
        RetrievalResult::Records(records) => Json(records).into_response(),
        RetrievalResult::Text(text) => text.into_response(),
    }
}
