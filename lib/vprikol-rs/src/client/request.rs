use crate::{
    Error,
    FormData,
    QueryParams,
};
use bytes::Bytes;
use reqwest::Method;
use std::borrow::Cow;

/// A request to the api
#[derive(Debug, Clone)]
pub struct Request {
    /// The http method
    pub method: Method,

    /// The path, relative to the base url
    pub path: Cow<'static, str>,

    /// The query parameters
    pub query: QueryParams,

    /// The body
    pub body: Option<RequestBody>,
}

impl Request {
    /// Make a new [`Request`] without query parameters or a body.
    pub fn new(method: Method, path: impl Into<Cow<'static, str>>) -> Self {
        Self {
            method,
            path: path.into(),
            query: QueryParams::new(),
            body: None,
        }
    }

    /// Make a GET request.
    pub fn get(path: impl Into<Cow<'static, str>>) -> Self {
        Self::new(Method::GET, path)
    }

    /// Make a POST request.
    pub fn post(path: impl Into<Cow<'static, str>>) -> Self {
        Self::new(Method::POST, path)
    }

    /// Make a PUT request.
    pub fn put(path: impl Into<Cow<'static, str>>) -> Self {
        Self::new(Method::PUT, path)
    }

    /// Make a DELETE request.
    pub fn delete(path: impl Into<Cow<'static, str>>) -> Self {
        Self::new(Method::DELETE, path)
    }

    /// Set a json body.
    ///
    /// # Errors
    /// Fails if the body cannot be represented as json.
    pub fn json<T>(mut self, body: &T) -> Result<Self, Error>
    where
        T: serde::Serialize + ?Sized,
    {
        let value = serde_json::to_value(body).map_err(|error| {
            Error::invalid_arguments(format!("the request body is not valid json: {error}"))
        })?;
        self.body = Some(RequestBody::Json(value));
        Ok(self)
    }

    /// Set a multipart form body.
    pub fn form(mut self, form: FormData) -> Self {
        self.body = Some(RequestBody::Form(form));
        self
    }
}

/// A request body
#[derive(Debug, Clone)]
pub enum RequestBody {
    /// A json body
    Json(serde_json::Value),

    /// A multipart form
    Form(FormData),
}

/// A classified success response
#[derive(Debug, Clone)]
pub enum Payload {
    /// No body, like a 204
    Empty,

    /// A json body
    Json(serde_json::Value),

    /// Any other body
    Bytes(Bytes),
}

impl Payload {
    /// Get a name for the kind of this payload.
    pub fn kind(&self) -> &'static str {
        match self {
            Self::Empty => "empty",
            Self::Json(_) => "json",
            Self::Bytes(_) => "binary",
        }
    }

    /// Deserialize a json payload.
    ///
    /// # Errors
    /// Fails if this is not a json payload, or if it does not match `T`.
    pub fn into_json<T>(self) -> Result<T, Error>
    where
        T: serde::de::DeserializeOwned,
    {
        match self {
            Self::Json(value) => Ok(serde_path_to_error::deserialize(value)?),
            payload => Err(Error::UnexpectedPayload {
                expected: "json",
                actual: payload.kind(),
            }),
        }
    }

    /// Get a binary payload.
    ///
    /// # Errors
    /// Fails if this is not a binary payload.
    pub fn into_bytes(self) -> Result<Bytes, Error> {
        match self {
            Self::Bytes(bytes) => Ok(bytes),
            payload => Err(Error::UnexpectedPayload {
                expected: "binary",
                actual: payload.kind(),
            }),
        }
    }

    /// Discard the payload.
    ///
    /// Any success is accepted.
    pub fn into_unit(self) {}
}

#[cfg(test)]
mod test {
    use super::*;

    #[derive(Debug, serde::Deserialize)]
    struct Player {
        #[allow(dead_code)]
        nickname: String,
        #[allow(dead_code)]
        lvl: u32,
    }

    #[test]
    fn deserialize_error_has_path() {
        let payload = Payload::Json(serde_json::json!({
            "nickname": "Bob_Smith",
            "lvl": "high",
        }));
        let error = payload.into_json::<Player>().expect_err("parsed invalid payload");
        match error {
            Error::Deserialize { path, .. } => assert!(&*path == "lvl"),
            error => panic!("unexpected error {error:?}"),
        }
    }

    #[test]
    fn missing_field_is_an_error() {
        let payload = Payload::Json(serde_json::json!({ "nickname": "Bob_Smith" }));
        let error = payload.into_json::<Player>().expect_err("parsed invalid payload");
        assert!(matches!(error, Error::Deserialize { .. }));
    }

    #[test]
    fn wrong_payload_kind() {
        let error = Payload::Bytes(Bytes::from_static(b"\x89PNG"))
            .into_json::<Player>()
            .expect_err("parsed bytes as json");
        assert!(matches!(
            error,
            Error::UnexpectedPayload {
                expected: "json",
                actual: "binary"
            }
        ));

        let error = Payload::Empty
            .into_bytes()
            .expect_err("got bytes from an empty payload");
        assert!(matches!(error, Error::UnexpectedPayload { actual: "empty", .. }));
    }

    #[test]
    fn json_body() {
        let request = Request::post("internal/status")
            .json(&serde_json::json!({ "server_id": 5 }))
            .expect("failed to set body");
        assert!(request.method == Method::POST);
        assert!(matches!(request.body, Some(RequestBody::Json(_))));
    }
}
