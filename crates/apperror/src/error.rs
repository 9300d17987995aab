use std::fmt;

use apperror_core::HttpError;
use http::StatusCode;

use crate::kind::ErrorKind;

/// Boxed underlying cause of an [`AppError`]
pub type BoxError = Box<dyn std::error::Error + Send + Sync + 'static>;

/// Application error classified by [`ErrorKind`]
///
/// `Display` prints the cause when there is one, so logs carry the low-level
/// text. [`message`](Self::message) is the curated text for end users.
#[derive(Debug)]
pub struct AppError {
    kind: ErrorKind,
    message: String,
    cause: Option<BoxError>,
}

impl AppError {
    /// Create an error of `kind`
    ///
    /// An empty `message` is replaced by the kind's default message.
    pub fn new(kind: ErrorKind, message: impl Into<String>, cause: Option<BoxError>) -> Self {
        let mut message = message.into();
        if message.is_empty() {
            kind.default_message().clone_into(&mut message);
        }

        Self { kind, message, cause }
    }

    /// Kind this error was classified as
    pub const fn kind(&self) -> ErrorKind {
        self.kind
    }

    /// User-facing message
    ///
    /// Falls back to the kind's default message whenever the stored one is empty.
    pub fn message(&self) -> &str {
        if self.message.is_empty() {
            self.kind.default_message()
        } else {
            &self.message
        }
    }

    /// Wrapped underlying failure, if any
    pub fn cause(&self) -> Option<&(dyn std::error::Error + Send + Sync + 'static)> {
        self.cause.as_deref()
    }

    /// Take ownership of the wrapped cause
    pub fn into_cause(self) -> Option<BoxError> {
        self.cause
    }

    /// Numeric HTTP status for this error
    pub const fn http_status_code(&self) -> u16 {
        self.kind.status_code().as_u16()
    }

    /// Whether the status is in the 4xx range
    pub fn is_client_error(&self) -> bool {
        self.kind.status_code().is_client_error()
    }

    /// Whether the status is in the 5xx range
    pub fn is_server_error(&self) -> bool {
        self.kind.status_code().is_server_error()
    }

    /// Replace the message, consuming and returning the error
    #[must_use]
    pub fn with_message(mut self, message: impl Into<String>) -> Self {
        self.message = message.into();
        self
    }

    /// Replace the message in place
    ///
    /// An empty message makes [`message`](Self::message) fall back to the default again.
    pub fn set_message(&mut self, message: impl Into<String>) -> &mut Self {
        self.message = message.into();
        self
    }

    /// Emit a structured event describing this error
    ///
    /// Server errors are logged at `ERROR`, everything else at `WARN`.
    #[cfg(feature = "tracing")]
    pub fn log(&self) {
        let status = self.http_status_code();
        if self.is_server_error() {
            tracing::error!(
                kind = %self.kind,
                status,
                client_message = self.message(),
                error = %self,
                "request failed"
            );
        } else {
            tracing::warn!(
                kind = %self.kind,
                status,
                client_message = self.message(),
                error = %self,
                "request rejected"
            );
        }
    }
}

impl fmt::Display for AppError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.cause {
            Some(cause) => fmt::Display::fmt(cause, f),
            None => f.write_str(&self.message),
        }
    }
}

impl std::error::Error for AppError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        self.cause
            .as_deref()
            .map(|cause| cause as &(dyn std::error::Error + 'static))
    }
}

impl HttpError for AppError {
    fn status_code(&self) -> StatusCode {
        self.kind.status_code()
    }

    fn error_type(&self) -> &str {
        self.kind.as_str()
    }

    fn client_message(&self) -> String {
        self.message().to_owned()
    }
}

impl From<ErrorKind> for AppError {
    fn from(kind: ErrorKind) -> Self {
        Self::new(kind, String::new(), None)
    }
}

impl From<anyhow::Error> for AppError {
    fn from(err: anyhow::Error) -> Self {
        Self::new(ErrorKind::Internal, String::new(), Some(err.into()))
    }
}
