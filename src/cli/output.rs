//! CLI output: error mapping from domain errors to stable CLI surface.

use crate::error::{ApiError, ResolveError};

/// Map domain/service errors to a string for CLI output.
pub fn map_error(e: &ApiError) -> String {
    match e {
        ApiError::Resolve(ResolveError::UnknownApp(app)) => format!(
            "error: unknown application '{}' (run `pathtool apps` to list applications)",
            app
        ),
        other => format!("error: {}", other),
    }
}
