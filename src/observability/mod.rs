//! Observability subsystem.
//!
//! Structured logging is initialized in `main` via `tracing-subscriber`;
//! this module owns the metrics side. Request IDs generated by the HTTP
//! layer flow into every log event on the render path.

pub mod metrics;
