use http::StatusCode;

/// Trait for application errors that carry their own HTTP classification
///
/// The error value decides its status and the text an end user may see.
/// Writing the actual response is left to the transport layer, which only
/// reads these accessors.
pub trait HttpError: std::error::Error {
    /// HTTP status code for this error
    fn status_code(&self) -> StatusCode;

    /// Machine-readable error type (e.g. `not_found`)
    fn error_type(&self) -> &str;

    /// Message safe to expose to API consumers
    fn client_message(&self) -> String;
}

#[cfg(test)]
mod tests {
    use std::fmt;

    use super::*;

    #[derive(Debug)]
    struct Teapot;

    impl fmt::Display for Teapot {
        fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
            f.write_str("short and stout")
        }
    }

    impl std::error::Error for Teapot {}

    impl HttpError for Teapot {
        fn status_code(&self) -> StatusCode {
            StatusCode::IM_A_TEAPOT
        }

        fn error_type(&self) -> &str {
            "teapot"
        }

        fn client_message(&self) -> String {
            "no coffee here".to_owned()
        }
    }

    #[test]
    fn usable_as_trait_object() {
        let err: Box<dyn HttpError> = Box::new(Teapot);
        assert_eq!(err.status_code(), StatusCode::IM_A_TEAPOT);
        assert_eq!(err.error_type(), "teapot");
        assert_eq!(err.client_message(), "no coffee here");
        assert_eq!(err.to_string(), "short and stout");
    }
}
