use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum CitationError {
    #[error("Missing configuration: {0}")]
    Configuration(String),

    #[error("Invalid search statement: {0}")]
    InputFormat(String),

    #[error("Malformed response: {0}")]
    MalformedResponse(String),

    #[error("Request failed: {0}")]
    Transport(String),
}

pub fn from_reqwest_error(details: impl AsRef<str>, err: reqwest::Error) -> CitationError {
    if err.is_timeout() {
        CitationError::Transport(format!("{}: timed out: {}", details.as_ref(), err))
    } else {
        CitationError::Transport(format!("{}: {}", details.as_ref(), err))
    }
}

pub fn malformed_response(details: impl AsRef<str>) -> CitationError {
    CitationError::MalformedResponse(details.as_ref().to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_messages() {
        let error = CitationError::Configuration("OPENLAWS_API_KEY".to_string());
        assert_eq!(error.to_string(), "Missing configuration: OPENLAWS_API_KEY");

        let error = malformed_response("missing field `url`");
        assert_eq!(
            error,
            CitationError::MalformedResponse("missing field `url`".to_string())
        );
    }
}
