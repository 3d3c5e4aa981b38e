//! End-to-end integration tests for the LogView workspace.
//!
//! All test content lives under `tests/`; this library target exists
//! only so the crate participates in the workspace.
