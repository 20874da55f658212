//! Error types for the curl command pipeline.

use thiserror::Error;

/// Refusal text returned by `curl_advanced` when the argument list trips the denylist.
pub const UNSAFE_FLAGS_MESSAGE: &str = "Error: This command contains potentially unsafe flags. \
Please use the specific curl tools (curl_get, curl_post, curl_download, etc.) for safety.";

/// Failures that stop a request before (or instead of) spawning curl.
///
/// Process-level failures are not represented here: the executor folds
/// those into an [`ExecutionResult`](super::exec::ExecutionResult).
#[derive(Debug, Error)]
pub enum CurlError {
    /// `json_data` could not be rendered as a request body.
    #[error("failed to serialize json_data: {0}")]
    Serialize(#[from] serde_json::Error),

    /// An advanced argument matched a denylisted flag prefix.
    #[error("{}", UNSAFE_FLAGS_MESSAGE)]
    UnsafeArgument {
        /// Offending token as supplied by the caller.
        token: String,
        /// Denylist entry the token starts with.
        prefix: &'static str,
    },
}

impl CurlError {
    /// Whether this is a safety refusal rather than an execution problem.
    pub fn is_refusal(&self) -> bool {
        matches!(self, CurlError::UnsafeArgument { .. })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn refusal_displays_fixed_message() {
        let err = CurlError::UnsafeArgument {
            token: "--cert".into(),
            prefix: "--cert",
        };
        assert!(err.is_refusal());
        assert_eq!(err.to_string(), UNSAFE_FLAGS_MESSAGE);
        assert!(err.to_string().contains("unsafe flags"));
    }
}
