//! Observability: structured logging for tool calls and news requests

pub mod logging;

pub use logging::{init_default_logging, init_logging, LogFormat};

// Span macros for structured logging
pub use logging::{request_span, tool_span};
