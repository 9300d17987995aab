//! Transport-facing error contract shared by application error types

mod error;

pub use error::HttpError;
