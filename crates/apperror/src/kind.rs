use std::fmt;
use std::str::FromStr;

use http::StatusCode;
use thiserror::Error;

use crate::error::{AppError, BoxError};

/// Category of failure
///
/// Drives both the default user-facing message and the HTTP status code.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "snake_case"))]
#[repr(u8)]
pub enum ErrorKind {
    /// Unclassified failure
    Unknown = 0,
    /// Input failed validation
    NotValid = 1,
    /// Malformed request
    BadRequest = 2,
    /// Caller is not authenticated
    Unauthorized = 3,
    /// Caller lacks permission
    Forbidden = 4,
    /// Requested resource does not exist
    NotFound = 5,
    /// Request is well-formed but cannot be processed
    UnprocessableEntity = 6,
    /// Internal server failure
    Internal = 7,
    /// Service or a dependency is temporarily down
    TemporaryUnavailable = 8,
    /// HTTP method is not supported for the resource
    MethodNotAllowed = 9,
    /// Caller exceeded a rate limit
    TooManyRequests = 10,
}

/// Errors from parsing an [`ErrorKind`] out of a name or numeric code
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ParseKindError {
    /// Name does not match any kind
    #[error("unknown error kind: {0}")]
    Name(String),

    /// Numeric code is outside the known range
    #[error("error kind code out of range: {0}")]
    Code(u8),
}

impl ErrorKind {
    /// Every kind, ordered by numeric code
    pub const ALL: [Self; 11] = [
        Self::Unknown,
        Self::NotValid,
        Self::BadRequest,
        Self::Unauthorized,
        Self::Forbidden,
        Self::NotFound,
        Self::UnprocessableEntity,
        Self::Internal,
        Self::TemporaryUnavailable,
        Self::MethodNotAllowed,
        Self::TooManyRequests,
    ];

    /// Curated end-user message used when no explicit one is supplied
    pub const fn default_message(self) -> &'static str {
        match self {
            Self::Unknown => "Неизвестная ошибка",
            Self::NotValid => "Ошибка валидации данных",
            Self::BadRequest => "Некорректные данные запроса",
            Self::Unauthorized => "Пользователь не авторизован",
            Self::Forbidden => "Недостаточно прав для выполнения операции",
            Self::NotFound => "Ресурс не найден",
            Self::UnprocessableEntity => "Невозможно обработать запрос",
            Self::Internal => "Внутренняя ошибка сервера",
            Self::TemporaryUnavailable => "Сервис временно недоступен",
            Self::MethodNotAllowed => "Метод не поддерживается",
            Self::TooManyRequests => "Превышено допустимое количество запросов",
        }
    }

    /// HTTP status code for this kind
    pub const fn status_code(self) -> StatusCode {
        match self {
            Self::NotValid | Self::UnprocessableEntity => StatusCode::UNPROCESSABLE_ENTITY,
            Self::BadRequest => StatusCode::BAD_REQUEST,
            Self::Unauthorized => StatusCode::UNAUTHORIZED,
            Self::Forbidden => StatusCode::FORBIDDEN,
            Self::NotFound => StatusCode::NOT_FOUND,
            Self::TemporaryUnavailable => StatusCode::SERVICE_UNAVAILABLE,
            Self::MethodNotAllowed => StatusCode::METHOD_NOT_ALLOWED,
            Self::TooManyRequests => StatusCode::TOO_MANY_REQUESTS,
            Self::Unknown | Self::Internal => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    /// Stable machine-readable name (e.g. `not_found`)
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Unknown => "unknown",
            Self::NotValid => "not_valid",
            Self::BadRequest => "bad_request",
            Self::Unauthorized => "unauthorized",
            Self::Forbidden => "forbidden",
            Self::NotFound => "not_found",
            Self::UnprocessableEntity => "unprocessable_entity",
            Self::Internal => "internal",
            Self::TemporaryUnavailable => "temporary_unavailable",
            Self::MethodNotAllowed => "method_not_allowed",
            Self::TooManyRequests => "too_many_requests",
        }
    }

    /// Numeric code of this kind
    pub const fn code(self) -> u8 {
        self as u8
    }

    /// Build an error of this kind
    ///
    /// An empty `message` is replaced by [`default_message`](Self::default_message).
    pub fn into_error(self, message: impl Into<String>, cause: Option<BoxError>) -> AppError {
        AppError::new(self, message, cause)
    }
}

impl fmt::Display for ErrorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ErrorKind {
    type Err = ParseKindError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|kind| kind.as_str() == s)
            .ok_or_else(|| ParseKindError::Name(s.to_owned()))
    }
}

impl TryFrom<u8> for ErrorKind {
    type Error = ParseKindError;

    fn try_from(code: u8) -> Result<Self, Self::Error> {
        Self::ALL
            .get(usize::from(code))
            .copied()
            .ok_or(ParseKindError::Code(code))
    }
}
