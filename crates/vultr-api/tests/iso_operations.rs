//! Integration tests for the ISO namespace against a mocked API.

use serde_json::json;
use vultr_api::{initialize, params, Error, VultrConfig};
use wiremock::matchers::{body_string, header, method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

const API_KEY: &str = "EXAMPLEKEY";

fn config_for(server: &MockServer) -> VultrConfig {
    VultrConfig::new()
        .with_api_key(API_KEY)
        .with_base_url(server.uri())
}

fn config_without_key(server: &MockServer) -> VultrConfig {
    VultrConfig::new().with_base_url(server.uri())
}

#[tokio::test]
async fn create_requires_an_api_key() {
    let server = MockServer::start().await;
    let client = initialize(config_without_key(&server)).unwrap();

    let err = client
        .iso()
        .create(params! { "url" => "https://templeos.org/Downloads/TempleOSLite.ISO" })
        .await
        .unwrap_err();

    assert_eq!(err, Error::MissingApiKey);
    assert!(server.received_requests().await.unwrap().is_empty());
}

#[tokio::test]
async fn create_requires_all_non_optional_parameters() {
    let server = MockServer::start().await;
    let client = initialize(config_for(&server)).unwrap();

    let err = client.iso().create(params! {}).await.unwrap_err();

    assert_eq!(err, Error::MissingParameter("url".to_string()));
    assert!(server.received_requests().await.unwrap().is_empty());
}

#[tokio::test]
async fn create_uploads_a_private_iso() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/v1/iso/create_from_url"))
        .and(header("API-Key", API_KEY))
        .and(body_string(
            "url=https%3A%2F%2Ftempleos.org%2FDownloads%2FTempleOSLite.ISO",
        ))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({ "ISOID": 24 })))
        .expect(1)
        .mount(&server)
        .await;

    let client = initialize(config_for(&server)).unwrap();
    let response = client
        .iso()
        .create(params! { "url" => "https://templeos.org/Downloads/TempleOSLite.ISO" })
        .await
        .unwrap();

    assert_eq!(response, Some(json!({ "ISOID": 24 })));
}

#[tokio::test]
async fn delete_resolves_empty_for_an_empty_body() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/v1/iso/destroy"))
        .and(header("API-Key", API_KEY))
        .and(body_string("ISOID=24"))
        .respond_with(ResponseTemplate::new(200))
        .expect(1)
        .mount(&server)
        .await;

    let client = initialize(config_for(&server)).unwrap();
    let response = client.iso().delete(params! { "ISOID" => 24 }).await.unwrap();

    assert_eq!(response, None);
}

#[tokio::test]
async fn delete_requires_an_api_key() {
    let server = MockServer::start().await;
    let client = initialize(config_without_key(&server)).unwrap();

    let err = client.iso().delete(params! { "ISOID" => 24 }).await.unwrap_err();

    assert_eq!(err, Error::MissingApiKey);
    assert!(server.received_requests().await.unwrap().is_empty());
}

#[tokio::test]
async fn list_returns_the_structured_body_unchanged() {
    let listing = json!({
        "24": {
            "ISOID": 24,
            "date_created": "2014-04-01 14:10:09",
            "filename": "CentOS-6.5-x86_64-minimal.iso",
            "size": 9_342_976,
            "md5sum": "ec0669895a250f803e1709d0402fc411",
            "status": "complete"
        }
    });

    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/v1/iso/list"))
        .and(header("API-Key", API_KEY))
        .respond_with(ResponseTemplate::new(200).set_body_json(listing.clone()))
        .expect(1)
        .mount(&server)
        .await;

    let client = initialize(config_for(&server)).unwrap();
    let response = client.iso().list().await.unwrap();

    assert_eq!(response, Some(listing));
}

#[tokio::test]
async fn list_public_returns_the_published_catalog() {
    let listing = json!({
        "494966": { "ISOID": 494_966, "name": "Arch Linux", "description": "2018.10.01 x86_64" },
        "507903": { "ISOID": 507_903, "name": "OpenBSD 6.4", "description": "amd64" },
        "522881": { "ISOID": 522_881, "name": "Ubuntu 18.10", "description": "18.10 x86_64" }
    });

    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/v1/iso/list_public"))
        .and(header("API-Key", API_KEY))
        .respond_with(ResponseTemplate::new(200).set_body_json(listing.clone()))
        .expect(1)
        .mount(&server)
        .await;

    let client = initialize(config_for(&server)).unwrap();
    let response = client.iso().list_public().await.unwrap();

    assert_eq!(response, Some(listing));
}
