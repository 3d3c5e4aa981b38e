//! LogView API — library crate for the log retrieval REST server.
//!
//! Re-exports the modules so the binary (`main.rs`) and external test
//! code can access `AppState` and `build_router`.

pub mod config;
pub mod routes;
pub mod state;
