//! Integration tests for `RegistryClient` using wiremock HTTP mocks.

use medscan_registry::{LookupOutcome, RegistryClient, RegistryError};
use serde_json::json;
use wiremock::matchers::{method, path, query_param};
use wiremock::{Mock, MockServer, ResponseTemplate};

fn test_client(base_url: &str) -> RegistryClient {
    RegistryClient::new(base_url, 5, "medscan-test/0.1")
        .expect("client construction should not fail")
}

#[tokio::test]
async fn lookup_returns_first_result() {
    let server = MockServer::start().await;

    let body = json!({
        "meta": { "results": { "skip": 0, "limit": 1, "total": 2 } },
        "results": [
            {
                "product_ndc": "0363-0218",
                "brand_name": "Tylenol",
                "labeler_name": "Kenvue",
                "generic_name": "ACETAMINOPHEN"
            },
            {
                "product_ndc": "0363-0218",
                "brand_name": "Second",
                "labeler_name": "Other"
            }
        ]
    });

    Mock::given(method("GET"))
        .and(path("/drug/ndc.json"))
        .and(query_param("search", "product_ndc:0363-0218"))
        .respond_with(ResponseTemplate::new(200).set_body_json(&body))
        .expect(1)
        .mount(&server)
        .await;

    let client = test_client(&server.uri());
    let product = client
        .lookup_product_ndc("0363-0218")
        .await
        .expect("lookup should succeed")
        .expect("product should be found");

    assert_eq!(product.brand_name, "Tylenol");
    assert_eq!(product.labeler_name, "Kenvue");
}

#[tokio::test]
async fn lookup_trims_payload() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/drug/ndc.json"))
        .and(query_param("search", "product_ndc:12345"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({ "results": [] })))
        .expect(1)
        .mount(&server)
        .await;

    let client = test_client(&server.uri());
    let result = client.lookup_product_ndc("  12345\n").await.unwrap();
    assert!(result.is_none());
}

#[tokio::test]
async fn lookup_treats_404_as_no_match() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/drug/ndc.json"))
        .respond_with(ResponseTemplate::new(404).set_body_json(json!({
            "error": { "code": "NOT_FOUND", "message": "No matches found!" }
        })))
        .mount(&server)
        .await;

    let client = test_client(&server.uri());
    let result = client.lookup_product_ndc("9999").await.unwrap();
    assert!(result.is_none());
    assert_eq!(
        LookupOutcome::from_result(Ok(result)).to_string(),
        "Not Found"
    );
}

#[tokio::test]
async fn lookup_surfaces_server_error() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/drug/ndc.json"))
        .respond_with(ResponseTemplate::new(503))
        .mount(&server)
        .await;

    let client = test_client(&server.uri());
    let result = client.lookup_product_ndc("0363-0218").await;
    assert!(
        matches!(result, Err(RegistryError::UnexpectedStatus { status: 503, .. })),
        "expected UnexpectedStatus(503), got: {result:?}"
    );

    let rendered = LookupOutcome::from_result(result).to_string();
    assert!(rendered.starts_with("Error fetching data:"), "{rendered}");
}

#[tokio::test]
async fn lookup_rejects_malformed_body() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/drug/ndc.json"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({ "results": "oops" })))
        .mount(&server)
        .await;

    let client = test_client(&server.uri());
    let result = client.lookup_product_ndc("0363-0218").await;
    assert!(matches!(result, Err(RegistryError::Deserialize { .. })));
}

#[tokio::test]
async fn lookup_reports_connection_failure() {
    let client = test_client("http://127.0.0.1:1");
    let result = client.lookup_product_ndc("0363-0218").await;
    assert!(matches!(result, Err(RegistryError::Http(_))));
}
