//! Application errors classified by kind
//!
//! An [`AppError`] pairs an [`ErrorKind`] with a user-facing message and an
//! optional underlying cause. The kind drives the default message and the
//! HTTP status, so failures are classified once where they are detected and
//! rendered consistently at the boundary.

#![allow(clippy::must_use_candidate)]

mod constructors;
mod error;
mod kind;

pub use apperror_core::HttpError;
pub use constructors::{
    bad_request, forbidden, internal, method_not_allowed, new_bad_request, new_error, new_forbidden, new_internal,
    new_method_not_allowed, new_not_found, new_temporary_unavailable, new_too_many_requests, new_unauthorized,
    new_unknown, new_unprocessable_entity, new_validation, not_found, temporary_unavailable, too_many_requests,
    unauthorized, unknown, unprocessable_entity, validation,
};
pub use error::{AppError, BoxError};
pub use kind::{ErrorKind, ParseKindError};
