use vprikol::{
    Client,
    Error,
    ErrorDetail,
    Payload,
    Request,
    StatusCode,
};
use wiremock::{
    matchers::{
        header,
        method,
        path,
    },
    Mock,
    MockServer,
    ResponseTemplate,
};

const TOKEN: &str = include_str!("../test_data/token.json");

fn client(server: &MockServer) -> Client {
    Client::builder()
        .base_url(server.uri())
        .token("test-token")
        .build()
        .expect("failed to build client")
}

#[tokio::test]
async fn sends_auth_and_user_agent() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/token"))
        .and(header("authorization", "Bearer test-token"))
        .and(header("user-agent", vprikol::DEFAULT_USER_AGENT))
        .respond_with(ResponseTemplate::new(200).set_body_raw(TOKEN, "application/json"))
        .expect(1)
        .mount(&server)
        .await;

    let token = client(&server).token().await.expect("failed to get token");
    assert!(token.id == 17);
}

#[tokio::test]
async fn custom_auth_header() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/token"))
        .and(header("x-api-key", "test-token"))
        .respond_with(ResponseTemplate::new(200).set_body_raw(TOKEN, "application/json"))
        .expect(1)
        .mount(&server)
        .await;

    let client = Client::builder()
        .base_url(server.uri())
        .token("test-token")
        .auth_header("X-Api-Key")
        .auth_scheme("")
        .build()
        .expect("failed to build client");
    client.token().await.expect("failed to get token");
}

#[tokio::test]
async fn no_content_is_empty() {
    let server = MockServer::start().await;
    Mock::given(method("DELETE"))
        .and(path("/admin/tokens/17"))
        .respond_with(ResponseTemplate::new(204))
        .expect(2)
        .mount(&server)
        .await;

    let client = client(&server);
    client
        .delete_token(17)
        .await
        .expect("failed to delete token");

    let payload = client
        .execute(Request::delete("admin/tokens/17"))
        .await
        .expect("failed to execute");
    assert!(matches!(payload, Payload::Empty));
}

#[tokio::test]
async fn error_detail_is_extracted() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/token"))
        .respond_with(
            ResponseTemplate::new(404).set_body_json(serde_json::json!({ "detail": "X" })),
        )
        .mount(&server)
        .await;

    let error = client(&server)
        .token()
        .await
        .expect_err("got a token from an error response");
    assert!(error.status() == Some(StatusCode::NOT_FOUND));

    let api_error = error.as_api_error().expect("not an api error");
    assert!(api_error.message() == Some("X"));
    assert!(api_error.data["detail"] == "X");
}

#[tokio::test]
async fn validation_errors_are_structured() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/token"))
        .respond_with(ResponseTemplate::new(422).set_body_json(serde_json::json!({
            "detail": [
                { "loc": ["query", "server_id"], "msg": "field required", "type": "value_error.missing" }
            ]
        })))
        .mount(&server)
        .await;

    let error = client(&server)
        .token()
        .await
        .expect_err("got a token from an error response");
    let api_error = error.as_api_error().expect("not an api error");
    match &api_error.detail {
        ErrorDetail::Validation(errors) => {
            assert!(errors.len() == 1);
            assert!(&*errors[0].kind == "value_error.missing");
        }
        detail => panic!("unexpected detail {detail:?}"),
    }
}

#[tokio::test]
async fn non_json_error_is_unhandled() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/token"))
        .respond_with(ResponseTemplate::new(502).set_body_string("<html>Bad Gateway</html>"))
        .mount(&server)
        .await;

    let error = client(&server)
        .token()
        .await
        .expect_err("got a token from an error response");
    let api_error = error.as_api_error().expect("not an api error");
    assert!(api_error.status == StatusCode::BAD_GATEWAY);
    assert!(api_error.message() == Some("Unhandled exception #502"));
    assert!(api_error.data["status_code"] == 502);
}

#[tokio::test]
async fn invalid_json_error_is_unhandled() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/token"))
        .respond_with(ResponseTemplate::new(500).set_body_raw("{", "application/json"))
        .mount(&server)
        .await;

    let error = client(&server)
        .token()
        .await
        .expect_err("got a token from an error response");
    let api_error = error.as_api_error().expect("not an api error");
    assert!(api_error.message() == Some("Unhandled exception #500"));
}

#[tokio::test]
async fn malformed_success_json() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/token"))
        .respond_with(ResponseTemplate::new(200).set_body_raw("{\"id\": ", "application/json"))
        .mount(&server)
        .await;

    let error = client(&server)
        .token()
        .await
        .expect_err("parsed malformed json");
    assert!(matches!(error, Error::Deserialize { .. }));
}

#[tokio::test]
async fn schema_mismatch_has_path() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/token"))
        .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
            "id": "seventeen",
        })))
        .mount(&server)
        .await;

    let error = client(&server)
        .token()
        .await
        .expect_err("parsed an invalid token");
    match error {
        Error::Deserialize { path, .. } => assert!(&*path == "id"),
        error => panic!("unexpected error {error:?}"),
    }
}

#[tokio::test]
async fn binary_payload() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/raw"))
        .respond_with(ResponseTemplate::new(200).set_body_raw(&b"\x89PNG"[..], "image/png"))
        .mount(&server)
        .await;

    let payload = client(&server)
        .execute(Request::get("raw"))
        .await
        .expect("failed to execute");
    match payload {
        Payload::Bytes(bytes) => assert!(&bytes[..] == b"\x89PNG"),
        payload => panic!("unexpected payload {payload:?}"),
    }
}

#[tokio::test]
async fn transport_error_is_distinct() {
    let client = Client::builder()
        .base_url("http://127.0.0.1:1/")
        .build()
        .expect("failed to build client");

    let error = client
        .token()
        .await
        .expect_err("reached a closed port");
    assert!(error.is_transport());
    assert!(error.status().is_none());
}
