//! Shortcut constructors, one pair per kind
//!
//! `new_<kind>` takes an explicit message (empty falls back to the default),
//! `<kind>` always uses the default message.

use crate::error::{AppError, BoxError};
use crate::kind::ErrorKind;

/// Create an error of `kind`
pub fn new_error(kind: ErrorKind, message: impl Into<String>, cause: Option<BoxError>) -> AppError {
    AppError::new(kind, message, cause)
}

/// `NotValid` error with an explicit message
pub fn new_validation(message: impl Into<String>, cause: Option<BoxError>) -> AppError {
    AppError::new(ErrorKind::NotValid, message, cause)
}

/// `BadRequest` error with an explicit message
pub fn new_bad_request(message: impl Into<String>, cause: Option<BoxError>) -> AppError {
    AppError::new(ErrorKind::BadRequest, message, cause)
}

/// `Unauthorized` error with an explicit message
pub fn new_unauthorized(message: impl Into<String>, cause: Option<BoxError>) -> AppError {
    AppError::new(ErrorKind::Unauthorized, message, cause)
}

/// `Forbidden` error with an explicit message
pub fn new_forbidden(message: impl Into<String>, cause: Option<BoxError>) -> AppError {
    AppError::new(ErrorKind::Forbidden, message, cause)
}

/// `NotFound` error with an explicit message
pub fn new_not_found(message: impl Into<String>, cause: Option<BoxError>) -> AppError {
    AppError::new(ErrorKind::NotFound, message, cause)
}

/// `UnprocessableEntity` error with an explicit message
pub fn new_unprocessable_entity(message: impl Into<String>, cause: Option<BoxError>) -> AppError {
    AppError::new(ErrorKind::UnprocessableEntity, message, cause)
}

/// `Internal` error with an explicit message
pub fn new_internal(message: impl Into<String>, cause: Option<BoxError>) -> AppError {
    AppError::new(ErrorKind::Internal, message, cause)
}

/// `TemporaryUnavailable` error with an explicit message
pub fn new_temporary_unavailable(message: impl Into<String>, cause: Option<BoxError>) -> AppError {
    AppError::new(ErrorKind::TemporaryUnavailable, message, cause)
}

/// `MethodNotAllowed` error with an explicit message
pub fn new_method_not_allowed(message: impl Into<String>, cause: Option<BoxError>) -> AppError {
    AppError::new(ErrorKind::MethodNotAllowed, message, cause)
}

/// `TooManyRequests` error with an explicit message
pub fn new_too_many_requests(message: impl Into<String>, cause: Option<BoxError>) -> AppError {
    AppError::new(ErrorKind::TooManyRequests, message, cause)
}

/// `Unknown` error with an explicit message
pub fn new_unknown(message: impl Into<String>, cause: Option<BoxError>) -> AppError {
    AppError::new(ErrorKind::Unknown, message, cause)
}

/// `NotValid` error with the default message
pub fn validation(cause: Option<BoxError>) -> AppError {
    AppError::new(ErrorKind::NotValid, String::new(), cause)
}

/// `BadRequest` error with the default message
pub fn bad_request(cause: Option<BoxError>) -> AppError {
    AppError::new(ErrorKind::BadRequest, String::new(), cause)
}

/// `Unauthorized` error with the default message
pub fn unauthorized(cause: Option<BoxError>) -> AppError {
    AppError::new(ErrorKind::Unauthorized, String::new(), cause)
}

/// `Forbidden` error with the default message
pub fn forbidden(cause: Option<BoxError>) -> AppError {
    AppError::new(ErrorKind::Forbidden, String::new(), cause)
}

/// `NotFound` error with the default message
pub fn not_found(cause: Option<BoxError>) -> AppError {
    AppError::new(ErrorKind::NotFound, String::new(), cause)
}

/// `UnprocessableEntity` error with the default message
pub fn unprocessable_entity(cause: Option<BoxError>) -> AppError {
    AppError::new(ErrorKind::UnprocessableEntity, String::new(), cause)
}

/// `Internal` error with the default message
pub fn internal(cause: Option<BoxError>) -> AppError {
    AppError::new(ErrorKind::Internal, String::new(), cause)
}

/// `TemporaryUnavailable` error with the default message
pub fn temporary_unavailable(cause: Option<BoxError>) -> AppError {
    AppError::new(ErrorKind::TemporaryUnavailable, String::new(), cause)
}

/// `MethodNotAllowed` error with the default message
pub fn method_not_allowed(cause: Option<BoxError>) -> AppError {
    AppError::new(ErrorKind::MethodNotAllowed, String::new(), cause)
}

/// `TooManyRequests` error with the default message
pub fn too_many_requests(cause: Option<BoxError>) -> AppError {
    AppError::new(ErrorKind::TooManyRequests, String::new(), cause)
}

/// `Unknown` error with the default message
pub fn unknown(cause: Option<BoxError>) -> AppError {
    AppError::new(ErrorKind::Unknown, String::new(), cause)
}
