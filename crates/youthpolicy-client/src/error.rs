use thiserror::Error;

/// Shown when the server gives no reason of its own.
pub const GENERIC_FAILURE: &str = "검색에 실패했습니다.";

#[derive(Error, Debug)]
pub enum SearchError {
    #[cfg(feature = "http")]
    #[error("HTTP request failed: {0}")]
    Http(#[from] reqwest::Error),

    #[error("server returned {status}: {}", .message.as_deref().unwrap_or("no error message"))]
    Server { status: u16, message: Option<String> },

    #[cfg(feature = "http")]
    #[error("JSON parse error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("{0}")]
    Other(String),
}

impl SearchError {
    /// Text for the user-facing notification.
    ///
    /// Only a server-supplied message is passed through; transport and
    /// decoding failures get the generic text.
    pub fn user_message(&self) -> String {
        match self {
            SearchError::Server {
                message: Some(message),
                ..
            } if !message.is_empty() => message.clone(),
            _ => GENERIC_FAILURE.to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn server_message_passed_through() {
        let err = SearchError::Server {
            status: 400,
            message: Some("invalid filter".into()),
        };
        assert_eq!(err.user_message(), "invalid filter");
        assert_eq!(err.to_string(), "server returned 400: invalid filter");
    }

    #[test]
    fn missing_or_empty_message_is_generic() {
        let err = SearchError::Server {
            status: 500,
            message: None,
        };
        assert_eq!(err.user_message(), GENERIC_FAILURE);
        assert_eq!(err.to_string(), "server returned 500: no error message");

        let err = SearchError::Server {
            status: 500,
            message: Some(String::new()),
        };
        assert_eq!(err.user_message(), GENERIC_FAILURE);
    }

    #[test]
    fn other_failures_are_generic() {
        let err = SearchError::Other("connection reset".into());
        assert_eq!(err.user_message(), GENERIC_FAILURE);
    }
}
