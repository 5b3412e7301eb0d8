//! Error types for desktop-entry.

/// Errors from the locale tag grammar.
#[derive(Debug, thiserror::Error)]
pub enum LocaleError {
    #[error("invalid character {0:?}")]
    InvalidCharacter(char),

    #[error("expected something before {0:?}")]
    NothingBefore(char),

    #[error("expected something after {0:?}")]
    NothingAfter(char),
}

/// Structural errors raised while scanning one line of a document.
#[derive(Debug, thiserror::Error)]
pub enum ScanError {
    #[error("invalid character {0:?}")]
    InvalidCharacter(char),

    #[error("expected ']' but was not found")]
    UnterminatedBracket,

    #[error("expected '=' but was not found")]
    MissingEquals,

    #[error("group {0:?} already exists")]
    DuplicateGroup(String),

    #[error("line is too big")]
    LineTooLong,

    #[error("line is not valid UTF-8")]
    InvalidUtf8,

    #[error(transparent)]
    Locale(#[from] LocaleError),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

/// A scan error wrapped with the 1-based line it occurred on. The first
/// error aborts the whole parse; there is no per-line recovery.
#[derive(Debug, thiserror::Error)]
#[error("line {line}: {kind}")]
pub struct ParseError {
    pub line: usize,
    #[source]
    pub kind: ScanError,
}

/// Recoverable lookup failures from the try-variant accessors.
#[derive(Debug, thiserror::Error)]
pub enum LookupError {
    #[error("key {key}[{locale}] not found")]
    KeyNotFound { key: String, locale: String },

    #[error("key {0} not found")]
    UnknownKey(String),

    #[error("value for key {key}[{locale}] isn't boolean")]
    NotBoolean { key: String, locale: String },

    #[error("value for key {key}[{locale}] isn't numeric")]
    NotNumeric { key: String, locale: String },
}
