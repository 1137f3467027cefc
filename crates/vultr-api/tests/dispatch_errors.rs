//! Integration tests for failure classification across the namespaces.

use vultr_api::{initialize, ApiErrorKind, Error, VultrConfig};
use wiremock::matchers::{method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

const API_KEY: &str = "EXAMPLEKEY";

fn config_for(server: &MockServer) -> VultrConfig {
    VultrConfig::new()
        .with_api_key(API_KEY)
        .with_base_url(server.uri())
}

async fn mock_account_info(server: &MockServer, template: ResponseTemplate) {
    Mock::given(method("GET"))
        .and(path("/v1/account/info"))
        .respond_with(template)
        .mount(server)
        .await;
}

#[tokio::test]
async fn a_404_rejects_as_a_client_error() {
    let server = MockServer::start().await;
    mock_account_info(
        &server,
        ResponseTemplate::new(404).set_body_string("Invalid API location"),
    )
    .await;

    let client = initialize(config_for(&server)).unwrap();
    let err = client.account().info().await.unwrap_err();

    assert_eq!(
        err,
        Error::Api {
            kind: ApiErrorKind::Client,
            status: 404,
            message: "Invalid API location".to_string(),
        }
    );
    assert!(!err.is_retryable());
}

#[tokio::test]
async fn a_500_rejects_as_a_server_error() {
    let server = MockServer::start().await;
    mock_account_info(&server, ResponseTemplate::new(500)).await;

    let client = initialize(config_for(&server)).unwrap();
    let err = client.account().info().await.unwrap_err();

    assert!(matches!(
        err,
        Error::Api {
            kind: ApiErrorKind::Server,
            status: 500,
            ..
        }
    ));
    assert!(err.is_retryable());
}

#[tokio::test]
async fn an_empty_403_gets_the_documented_message() {
    let server = MockServer::start().await;
    mock_account_info(&server, ResponseTemplate::new(403)).await;

    let client = initialize(config_for(&server)).unwrap();
    let err = client.account().info().await.unwrap_err();

    assert_eq!(
        err,
        Error::Api {
            kind: ApiErrorKind::Client,
            status: 403,
            message: "Invalid or missing API key".to_string(),
        }
    );
}

#[tokio::test]
async fn a_rate_limited_503_is_retryable() {
    let server = MockServer::start().await;
    mock_account_info(&server, ResponseTemplate::new(503)).await;

    let client = initialize(config_for(&server)).unwrap();
    let err = client.account().info().await.unwrap_err();

    assert_eq!(err.status(), Some(503));
    assert!(err.is_retryable());
}

#[tokio::test]
async fn a_redirect_status_is_unexpected() {
    let server = MockServer::start().await;
    mock_account_info(&server, ResponseTemplate::new(304)).await;

    let client = initialize(config_for(&server)).unwrap();
    let err = client.account().info().await.unwrap_err();

    assert_eq!(err, Error::UnexpectedStatus { status: 304 });
}

#[tokio::test]
async fn a_non_json_success_body_is_malformed() {
    let server = MockServer::start().await;
    mock_account_info(
        &server,
        ResponseTemplate::new(200).set_body_string("<html>maintenance</html>"),
    )
    .await;

    let client = initialize(config_for(&server)).unwrap();
    let err = client.account().info().await.unwrap_err();

    assert!(matches!(err, Error::MalformedResponse(_)));
}

#[tokio::test]
async fn the_error_field_of_a_json_failure_body_becomes_the_message() {
    let server = MockServer::start().await;
    mock_account_info(
        &server,
        ResponseTemplate::new(412)
            .set_body_string(r#"{"error": "Your account is not authorized to use this feature"}"#),
    )
    .await;

    let client = initialize(config_for(&server)).unwrap();
    let err = client.account().info().await.unwrap_err();

    assert_eq!(
        err,
        Error::Api {
            kind: ApiErrorKind::Client,
            status: 412,
            message: "Your account is not authorized to use this feature".to_string(),
        }
    );
}
