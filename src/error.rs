use thiserror::Error;

pub type Result<T> = std::result::Result<T, LottoError>;

/// Error kind reported by the purchase CLI on its stderr stream.
///
/// The CLI prints unstructured tracebacks; the marker scan that maps them to
/// this closed set lives in one place (`dhapi::classify_stderr`).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CliErrorKind {
    NotFound,
    Key,
    Runtime,
    Value,
    Other,
}

impl std::fmt::Display for CliErrorKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let name = match self {
            CliErrorKind::NotFound => "not-found",
            CliErrorKind::Key => "key-error",
            CliErrorKind::Runtime => "runtime-error",
            CliErrorKind::Value => "value-error",
            CliErrorKind::Other => "error",
        };
        f.write_str(name)
    }
}

#[derive(Error, Debug)]
pub enum LottoError {
    /// Missing log file or missing CLI binary.
    #[error("not-found: {0}")]
    NotFound(String),

    /// Log filename or ticket table row does not match the expected grammar.
    #[error("invalid-format: {0}")]
    InvalidFormat(String),

    /// Results endpoint unreachable or the draw is not published yet.
    #[error("external-unavailable: {0}")]
    Unavailable(String),

    /// The purchase CLI reported a failure on stderr.
    #[error("{kind}: {message}")]
    Cli { kind: CliErrorKind, message: String },

    /// Another run holds the per-directory lock.
    #[error("already-running: {0}")]
    AlreadyRunning(String),

    #[error("http-error: {0}")]
    Http(#[from] reqwest::Error),

    #[error("io-error: {0}")]
    Io(#[from] std::io::Error),

    /// State that should be unreachable, e.g. more than six matched numbers.
    #[error("internal-error: {0}")]
    Internal(String),
}
