//! Shared test harness for E2E integration tests.
//!
//! Runs the real Axum router over a `FileLogStore` backed by a
//! temporary log directory, exercising the full retrieval path exactly
//! as a deployed server serves it.

use axum::Router;
use axum::body::Body;
use axum::http::{Request, StatusCode};
use http_body_util::BodyExt;
use tempfile::TempDir;
use tower::ServiceExt;

use lv_api::routes::build_router;
use lv_api::state::AppState;

/// End-to-end harness: a temporary log directory plus a router reading it.
pub struct TestHarness {
    /// Directory the file store reads `<category>.log` files from.
    pub log_dir: TempDir,
    /// Axum router for HTTP requests via `tower::oneshot`.
    pub router: Router,
}

impl TestHarness {
    /// Harness over an empty log directory — no category files yet.
    pub fn new() -> Self {
        let log_dir = TempDir::new().expect("create temp log dir");
        let router = build_router(AppState::with_log_dir(log_dir.path()));
        Self { log_dir, router }
    }

    /// Write one category file the way its sink writes it: lines joined
    /// and terminated with the category's delimiter (`\r\n` for
    /// exception, `\n` otherwise).
    pub fn write_log(&self, category: &str, lines: &[&str]) {
        let delimiter = if category == "exception" { "\r\n" } else { "\n" };
        let mut content = lines.join(delimiter);
        content.push_str(delimiter);
        std::fs::write(
            self.log_dir.path().join(format!("{category}.log")),
            content,
        )
        .expect("write log file");
    }

    /// GET a path, returning (status, raw body text).
    pub async fn get(&self, uri: &str) -> (StatusCode, String) {
        let response = self
            .router
            .clone()
            .oneshot(Request::get(uri).body(Body::empty()).unwrap())
            .await
            .unwrap();

        let status = response.status();
        let bytes = response.into_body().collect().await.unwrap().to_bytes();
        (status, String::from_utf8(bytes.to_vec()).unwrap())
    }

    /// GET a path, returning (status, parsed JSON body).
    pub async fn get_json(&self, uri: &str) -> (StatusCode, serde_json::Value) {
        let (status, text) = self.get(uri).await;
        (status, serde_json::from_str(&text).expect("json body"))
    }
}
