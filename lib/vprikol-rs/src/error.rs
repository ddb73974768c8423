use crate::types::ValidationError;
use reqwest::StatusCode;
use std::borrow::Cow;

/// The library error type
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// The arguments were rejected before anything was sent
    #[error("invalid arguments: {0}")]
    InvalidArguments(Cow<'static, str>),

    /// The api responded with a non-2xx status
    #[error(transparent)]
    Api(#[from] Box<ApiError>),

    /// Reqwest HTTP Error
    #[error(transparent)]
    Reqwest(#[from] reqwest::Error),

    /// The response did not match the expected schema
    #[error("failed to deserialize response at `{path}`")]
    Deserialize {
        /// The path to the field that failed
        path: Box<str>,

        /// The json error
        #[source]
        source: serde_json::Error,
    },

    /// The response had a success status, but the wrong kind of body
    #[error("expected a {expected} response, got {actual}")]
    UnexpectedPayload {
        /// The expected payload kind
        expected: &'static str,

        /// The received payload kind
        actual: &'static str,
    },

    /// Invalid URL
    #[error(transparent)]
    Url(#[from] url::ParseError),

    /// A configured header value was invalid
    #[error(transparent)]
    InvalidHeaderValue(#[from] reqwest::header::InvalidHeaderValue),
}

impl Error {
    /// Make an [`Error::InvalidArguments`].
    pub(crate) fn invalid_arguments(message: impl Into<Cow<'static, str>>) -> Self {
        Self::InvalidArguments(message.into())
    }

    /// Get the http status if this is an api error.
    pub fn status(&self) -> Option<StatusCode> {
        match self {
            Self::Api(error) => Some(error.status),
            _ => None,
        }
    }

    /// Get the api error, if this is one.
    pub fn as_api_error(&self) -> Option<&ApiError> {
        match self {
            Self::Api(error) => Some(error),
            _ => None,
        }
    }

    /// Returns true if the service could not be reached at all.
    pub fn is_transport(&self) -> bool {
        matches!(self, Self::Reqwest(_))
    }
}

impl From<serde_path_to_error::Error<serde_json::Error>> for Error {
    fn from(error: serde_path_to_error::Error<serde_json::Error>) -> Self {
        let path = error.path().to_string().into();
        Self::Deserialize {
            path,
            source: error.into_inner(),
        }
    }
}

impl From<ApiError> for Error {
    fn from(error: ApiError) -> Self {
        Self::Api(Box::new(error))
    }
}

/// An error returned by the api.
#[derive(Debug, Clone, thiserror::Error)]
#[error("the api returned an error {status}: {detail}")]
pub struct ApiError {
    /// The response status
    pub status: StatusCode,

    /// The normalized `detail` of the error body
    pub detail: ErrorDetail,

    /// The raw error body
    pub data: serde_json::Value,
}

impl ApiError {
    /// Make an [`ApiError`] from a status and an error body.
    ///
    /// The detail is the `detail` field of the body if it has one, otherwise the whole body.
    pub fn new(status: StatusCode, data: serde_json::Value) -> Self {
        let detail = match data.get("detail") {
            Some(detail) => ErrorDetail::from_value(detail.clone()),
            None => ErrorDetail::from_value(data.clone()),
        };

        Self {
            status,
            detail,
            data,
        }
    }

    /// Make an [`ApiError`] for a response that did not have a usable json body.
    pub fn unhandled(status: StatusCode) -> Self {
        let data = serde_json::json!({
            "detail": format!("Unhandled exception #{}", status.as_u16()),
            "status_code": status.as_u16(),
        });

        Self::new(status, data)
    }

    /// Get the detail message, if the detail is a plain string.
    pub fn message(&self) -> Option<&str> {
        match &self.detail {
            ErrorDetail::Message(message) => Some(message),
            _ => None,
        }
    }
}

/// The `detail` of an api error
#[derive(Debug, Clone, PartialEq)]
pub enum ErrorDetail {
    /// A plain message
    Message(Box<str>),

    /// Request validation failures
    Validation(Vec<ValidationError>),

    /// Anything else
    Other(serde_json::Value),
}

impl ErrorDetail {
    fn from_value(value: serde_json::Value) -> Self {
        match value {
            serde_json::Value::String(message) => Self::Message(message.into()),
            serde_json::Value::Array(_) => match serde_json::from_value(value.clone()) {
                Ok(errors) => Self::Validation(errors),
                Err(_) => Self::Other(value),
            },
            value => Self::Other(value),
        }
    }
}

impl std::fmt::Display for ErrorDetail {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Message(message) => write!(f, "{message}"),
            Self::Validation(errors) => {
                for (i, error) in errors.iter().enumerate() {
                    if i != 0 {
                        write!(f, "; ")?;
                    }
                    write!(f, "{error}")?;
                }

                Ok(())
            }
            Self::Other(value) => write!(f, "{value}"),
        }
    }
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn detail_field_is_used() {
        let error = ApiError::new(
            StatusCode::NOT_FOUND,
            serde_json::json!({ "detail": "Player not found" }),
        );
        assert!(error.message() == Some("Player not found"));
        assert!(error.to_string() == "the api returned an error 404 Not Found: Player not found");
    }

    #[test]
    fn whole_body_without_detail() {
        let body = serde_json::json!({ "error_code": 500 });
        let error = ApiError::new(StatusCode::INTERNAL_SERVER_ERROR, body.clone());
        assert!(error.detail == ErrorDetail::Other(body));
    }

    #[test]
    fn validation_detail() {
        let body = serde_json::json!({
            "detail": [
                { "loc": ["query", "server_id"], "msg": "field required", "type": "value_error.missing" },
                { "loc": ["body", 0, "nickname"], "msg": "str type expected", "type": "type_error.str" },
            ]
        });
        let error = ApiError::new(StatusCode::UNPROCESSABLE_ENTITY, body);
        let errors = match &error.detail {
            ErrorDetail::Validation(errors) => errors,
            detail => panic!("unexpected detail {detail:?}"),
        };
        assert!(errors.len() == 2);
        assert!(&*errors[0].msg == "field required");
        assert!(
            error.detail.to_string()
                == "query.server_id: field required; body.0.nickname: str type expected"
        );
    }

    #[test]
    fn unhandled_error() {
        let error = ApiError::unhandled(StatusCode::BAD_GATEWAY);
        assert!(error.message() == Some("Unhandled exception #502"));
        assert!(error.data["status_code"] == 502);
    }
}
