// Error types for the notifier pipeline

use thiserror::Error;

/// Result type alias for notifier operations
pub type Result<T> = std::result::Result<T, NotifyError>;

/// Errors that can occur during a poll cycle
#[derive(Debug, Error)]
pub enum NotifyError {
    /// Upstream request failed: transport error, non-200 status or unparseable body
    #[error("fetch failed: {0}")]
    Fetch(String),

    /// The response parsed but does not have the expected envelope shape
    #[error("bad response shape: {0}")]
    Shape(#[from] ShapeError),

    /// The homework record itself is unusable (unknown status, missing name)
    #[error("bad homework record: {0}")]
    Content(String),

    /// Message delivery to the chat failed
    #[error("failed to deliver {message:?}: {cause}")]
    Send { message: String, cause: String },
}

/// Envelope shape violations, in evaluation order.
///
/// The order matters: validation stops at the first violation, so the variant
/// decides which error text reaches the chat.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ShapeError {
    #[error("response is not a JSON object")]
    NotAnObject,

    #[error("response has no `homeworks` key")]
    MissingHomeworksKey,

    #[error("`homeworks` is not an array")]
    HomeworksNotAnArray,

    #[error("`homeworks` is an empty array")]
    HomeworksEmpty,
}

impl NotifyError {
    /// Create a fetch error
    pub fn fetch(msg: impl Into<String>) -> Self {
        NotifyError::Fetch(msg.into())
    }

    /// Create a content error
    pub fn content(msg: impl Into<String>) -> Self {
        NotifyError::Content(msg.into())
    }

    /// Create a send error
    pub fn send(message: impl Into<String>, cause: impl Into<String>) -> Self {
        NotifyError::Send {
            message: message.into(),
            cause: cause.into(),
        }
    }

    /// Whether the loop may swallow this error and carry on.
    ///
    /// Fetch, shape and content errors are converted into a chat notification
    /// and retried next cycle. Send errors are the one kind allowed to escape
    /// a cycle and stop the process.
    pub fn is_recoverable(&self) -> bool {
        !matches!(self, NotifyError::Send { .. })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn send_is_the_only_fatal_kind() {
        assert!(NotifyError::fetch("boom").is_recoverable());
        assert!(NotifyError::from(ShapeError::HomeworksEmpty).is_recoverable());
        assert!(NotifyError::content("bad").is_recoverable());
        assert!(!NotifyError::send("hi", "timeout").is_recoverable());
    }

    #[test]
    fn display_includes_the_cause() {
        let error = NotifyError::fetch("server returned status 503");
        assert_eq!(error.to_string(), "fetch failed: server returned status 503");

        let error = NotifyError::send("hello", "connection refused");
        assert!(error.to_string().contains("hello"));
        assert!(error.to_string().contains("connection refused"));
    }
}
