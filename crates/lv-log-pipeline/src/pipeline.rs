//! The retrieval pipeline — one call, never a failure.

use crate::error::{PipelineResult, RetrieveError};
use crate::filter::TimeWindow;
use crate::parsers;
use crate::render;
use crate::store::LogStore;
use crate::types::{LogCategory, LogRecord, OutputForm, RetrievalQuery, RetrievalResult};
use crate::window;

/// Run one retrieval against the given store.
///
/// This is the operator-facing entry point: whatever goes wrong, the
/// caller gets a value back. Failures degrade to a human-readable
/// string on the text channel.
pub async fn retrieve(query: &RetrievalQuery, store: &dyn LogStore) -> RetrievalResult {
    match try_retrieve(query, store).await {
        Ok(result) => result,
        Err(err) => {
            tracing::warn!(category = %query.category, %err, "log retrieval degraded");
            RetrievalResult::Text(format!("Error {err} in pulling logs."))
        }
    }
}

async fn try_retrieve(
    query: &RetrievalQuery,
    store: &dyn LogStore,
) -> PipelineResult<RetrievalResult> {
    let category = LogCategory::resolve(&query.category)
        .ok_or_else(|| RetrieveError::UnknownCategory(query.category.clone()))?;

    let content = store.load(category).await?;

    let mut records: Vec<LogRecord> = parsers::split_lines(&content, category)
        .map(|line| parsers::parse_line(line, category))
        .collect();

    if let Some(range) = query.range.as_deref() {
        let time_window = TimeWindow::from_range(range);
        records.retain(|record| time_window.admits(record));
    }

    let selected = window::select(&records, query.order, query.count);

    Ok(match query.output {
        OutputForm::Structured => RetrievalResult::Records(selected.to_vec()),
        OutputForm::Text => RetrievalResult::Text(render::render_text(selected)),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::mock::MockLogStore;
    use crate::types::Order;

    fn query(category: &str) -> RetrievalQuery {
        RetrievalQuery {
            category: category.to_string(),
            ..RetrievalQuery::default()
        }
    }

    #[tokio::test]
    async fn head_of_combined_as_records() {
        let store = MockLogStore::with_message_sample();
        let result = retrieve(
            &RetrievalQuery {
                count: 2,
                output: OutputForm::Structured,
                ..query("combined")
            },
            &store,
        )
        .await;

        let RetrievalResult::Records(records) = result else {
            panic!("expected structured records");
        };
        assert_eq!(records.len(), 2);
        let LogRecord::Message(first) = &records[0] else {
            panic!("expected message record");
        };
        assert_eq!(first.level, "info");
        assert_eq!(first.message, "Server listening on port 4000");
    }

    #[tokio::test]
    async fn tail_of_request_log_as_text() {
        let store = MockLogStore::with_request_sample();
        let result = retrieve(
            &RetrievalQuery {
                count: 2,
                order: Order::Tail,
                ..query("request")
            },
            &store,
        )
        .await;

        let RetrievalResult::Text(blob) = result else {
            panic!("expected text blob");
        };
        assert_eq!(
            blob,
            "[Wed, 10 Nov 2021 08:11:40 GMT 10.0.0.5 -] GET /users/61?full=true HTTP/1.1 | 200 9.031 ms\n\
             [Wed, 10 Nov 2021 08:15:28 GMT ::1 -] DELETE /users/61 HTTP/1.1 | 204 6.992 ms\n"
        );
    }

    #[tokio::test]
    async fn range_with_no_matching_records_is_empty() {
        let store = MockLogStore::with_sparse_dates();
        let result = retrieve(
            &RetrievalQuery {
                range: Some("2020-06-01*2020-12-01".to_string()),
                output: OutputForm::Structured,
                ..query("combined")
            },
            &store,
        )
        .await;

        assert_eq!(result, RetrievalResult::Records(vec![]));
    }

    #[tokio::test]
    async fn range_spanning_both_records_keeps_file_order() {
        let store = MockLogStore::with_sparse_dates();
        let result = retrieve(
            &RetrievalQuery {
                range: Some("2019-01-01*2100-01-01".to_string()),
                output: OutputForm::Structured,
                ..query("combined")
            },
            &store,
        )
        .await;

        let RetrievalResult::Records(records) = result else {
            panic!("expected structured records");
        };
        assert_eq!(records.len(), 2);
        assert_eq!(records[0].timestamp(), "2020-01-01T00:00:00.000Z");
        assert_eq!(records[1].timestamp(), "2099-01-01T00:00:00.000Z");
    }

    #[tokio::test]
    async fn missing_backing_file_degrades_to_error_string() {
        let store = MockLogStore::new();
        let result = retrieve(&query("exception"), &store).await;

        let RetrievalResult::Text(text) = result else {
            panic!("expected degraded text");
        };
        assert!(text.starts_with("Error"));
        assert!(text.ends_with("in pulling logs."));
    }

    #[tokio::test]
    async fn unknown_category_degrades_to_error_string() {
        let store = MockLogStore::with_message_sample();
        let result = retrieve(&query("success"), &store).await;

        let RetrievalResult::Text(text) = result else {
            panic!("expected degraded text");
        };
        assert!(text.contains("Error"));
        assert!(text.contains("success"));
    }

    #[tokio::test]
    async fn defaults_return_whole_file_as_text() {
        let store = MockLogStore::with_message_sample();
        let result = retrieve(&RetrievalQuery::default(), &store).await;

        let RetrievalResult::Text(blob) = result else {
            panic!("expected text blob");
        };
        assert_eq!(blob.lines().count(), 3);
        assert!(blob.starts_with("[2021-11-10T08:08:49.123Z : info]"));
    }

    #[tokio::test]
    async fn count_bounds_the_window_not_the_filter() {
        let store = MockLogStore::with_request_sample();
        // All five records pass the filter; only one is returned.
        let result = retrieve(
            &RetrievalQuery {
                count: 1,
                range: Some("2021-11-01*2021-11-30".to_string()),
                order: Order::Tail,
                output: OutputForm::Structured,
                ..query("request")
            },
            &store,
        )
        .await;

        let RetrievalResult::Records(records) = result else {
            panic!("expected structured records");
        };
        assert_eq!(records.len(), 1);
        assert_eq!(records[0].timestamp(), "Wed, 10 Nov 2021 08:15:28");
    }

    #[tokio::test]
    async fn malformed_line_does_not_sink_the_retrieval() {
        let mut store = MockLogStore::new();
        store.add_lines(
            LogCategory::Combined,
            &[
                "[2021-11-10T08:08:49.123Z : info] - fine]",
                "totally malformed line",
                "[2021-11-10T08:08:51.123Z : info] - also fine]",
            ],
        );
        let result = retrieve(
            &RetrievalQuery {
                output: OutputForm::Structured,
                ..query("combined")
            },
            &store,
        )
        .await;

        let RetrievalResult::Records(records) = result else {
            panic!("expected structured records");
        };
        assert_eq!(records.len(), 3);
        let LogRecord::Message(broken) = &records[1] else {
            panic!("expected message record");
        };
        assert_eq!(broken.timestamp, "");
        assert_eq!(broken.message, "");
    }
}
