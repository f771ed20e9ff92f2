//! Observability subsystem for reldb
//!
//! Structured JSON logging only: one log line per event, deterministic
//! key ordering, synchronous writes. Metrics and tracing layers are out
//! of scope for this core.

mod logger;

pub use logger::{Logger, Severity};
