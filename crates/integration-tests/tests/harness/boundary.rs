use std::error::Error;

use apperror::HttpError;
use serde_json::{Value, json};

/// Collapse an error into the status and body a handler would send
pub fn render(error: &dyn HttpError) -> (u16, Value) {
    let body = json!({
        "error": {
            "type": error.error_type(),
            "message": error.client_message(),
        }
    });

    (error.status_code().as_u16(), body)
}

/// Display text of the error and every source below it
pub fn chain(error: &(dyn Error + 'static)) -> Vec<String> {
    let mut out = vec![error.to_string()];
    let mut current = error.source();
    while let Some(source) = current {
        out.push(source.to_string());
        current = source.source();
    }
    out
}
