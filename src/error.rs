//! Error taxonomy for news lookups
//!
//! Every failure a news tool can hit is one of four kinds. None of them is
//! fatal: the tool boundary turns each into a structured result the agent
//! host can show to the user.

use once_cell::sync::Lazy;
use regex::Regex;
use serde::{Deserialize, Serialize};
use thiserror::Error;

static SECRET_PATTERN: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"(?i)(password|token|key|secret)[=:]\s*[^\s&]+").expect("secret pattern is valid")
});

static SENSITIVE_PATH_PATTERN: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"/[a-zA-Z0-9._/-]+/(secrets?|\.ssh|\.aws|\.config)/[a-zA-Z0-9._/-]+")
        .expect("path pattern is valid")
});

const MAX_MESSAGE_LEN: usize = 500;

/// Failure raised by a news lookup
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum NewsError {
    /// The API credential is missing
    #[error("{message}")]
    Config { message: String },

    /// The city or country is not one we know about
    #[error("{message}")]
    UnsupportedInput { input: String, message: String },

    /// Transport failure or non-2xx status from the news API
    #[error("{message}")]
    Network { message: String },

    /// Well-formed response without any article
    #[error("{message}")]
    EmptyResult { message: String },
}

/// Discriminant of [`NewsError`], rendered as the `kind` field of a failed tool result
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ErrorKind {
    ConfigError,
    UnsupportedInput,
    NetworkError,
    EmptyResult,
}

impl ErrorKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            ErrorKind::ConfigError => "config_error",
            ErrorKind::UnsupportedInput => "unsupported_input",
            ErrorKind::NetworkError => "network_error",
            ErrorKind::EmptyResult => "empty_result",
        }
    }
}

impl std::fmt::Display for ErrorKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl NewsError {
    /// Missing credential; `env_var` names where the key is expected
    pub fn missing_api_key(env_var: &str) -> Self {
        Self::Config {
            message: format!(
                "News API key is not configured. Set the {env_var} environment variable."
            ),
        }
    }

    pub fn unsupported_input<I: Into<String>, M: Into<String>>(input: I, message: M) -> Self {
        Self::UnsupportedInput {
            input: input.into(),
            message: message.into(),
        }
    }

    pub fn network<S: Into<String>>(message: S) -> Self {
        Self::Network {
            message: message.into(),
        }
    }

    pub fn empty_result<S: Into<String>>(message: S) -> Self {
        Self::EmptyResult {
            message: message.into(),
        }
    }

    pub fn kind(&self) -> ErrorKind {
        match self {
            NewsError::Config { .. } => ErrorKind::ConfigError,
            NewsError::UnsupportedInput { .. } => ErrorKind::UnsupportedInput,
            NewsError::Network { .. } => ErrorKind::NetworkError,
            NewsError::EmptyResult { .. } => ErrorKind::EmptyResult,
        }
    }

    pub fn message(&self) -> &str {
        match self {
            NewsError::Config { message }
            | NewsError::UnsupportedInput { message, .. }
            | NewsError::Network { message }
            | NewsError::EmptyResult { message } => message,
        }
    }

    /// Message safe to hand to the agent host.
    ///
    /// Only network failures carry upstream or transport text, so only they
    /// are sanitized. The other kinds echo the caller's input verbatim.
    pub fn public_message(&self) -> String {
        match self {
            NewsError::Network { message } => sanitize_error_message(message),
            other => other.message().to_string(),
        }
    }
}

/// Redact secrets and sensitive paths, then cap the message length
pub fn sanitize_error_message(message: &str) -> String {
    let mut sanitized = SECRET_PATTERN
        .replace_all(message, "${1}=***")
        .to_string();

    sanitized = SENSITIVE_PATH_PATTERN
        .replace_all(&sanitized, "/***REDACTED***/")
        .to_string();

    if sanitized.len() > MAX_MESSAGE_LEN {
        let truncate_suffix = "...[truncated]";
        let mut cut = MAX_MESSAGE_LEN - truncate_suffix.len();
        while !sanitized.is_char_boundary(cut) {
            cut -= 1;
        }
        sanitized = format!("{}{}", &sanitized[..cut], truncate_suffix);
    }

    sanitized
}

/// Result type for news lookups
pub type NewsResult<T> = Result<T, NewsError>;
