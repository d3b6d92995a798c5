//! Event Sink Implementations
//!
//! Provides concrete implementations of SyncEventSink:
//! - TracingEventSink: forwards events to `tracing`

mod log_sink;

pub use log_sink::TracingEventSink;
