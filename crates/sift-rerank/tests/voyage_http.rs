//! Offline tests of the Voyage HTTP binding against a mock server.

use std::sync::Arc;

use serde_json::json;
use sift_core::{Node, QueryBundle, ScoredNode};
use sift_rerank::{
    ProviderError, RerankClient, RerankClientConfig, RerankPostprocessor, RerankRequest,
    VoyageRerankClient, VoyageRerankConfig, build_rerank_client,
};
use wiremock::matchers::{body_partial_json, header, method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

fn test_config(server: &MockServer) -> VoyageRerankConfig {
    let mut config = VoyageRerankConfig::new("test-key");
    config.endpoint = format!("{}/v1/rerank", server.uri());
    config
}

fn rerank_body() -> serde_json::Value {
    json!({
        "object": "list",
        "data": [
            {"index": 2, "relevance_score": 0.91},
            {"index": 0, "relevance_score": 0.44}
        ],
        "model": "rerank-2.5",
        "usage": {"total_tokens": 31}
    })
}

#[tokio::test]
async fn rerank_round_trip_decodes_scores_and_usage() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/v1/rerank"))
        .and(header("Authorization", "Bearer test-key"))
        .and(body_partial_json(json!({
            "model": "rerank-2.5",
            "query": "feline",
        })))
        .respond_with(ResponseTemplate::new(200).set_body_json(rerank_body()))
        .expect(1)
        .mount(&server)
        .await;

    let client = build_rerank_client(RerankClientConfig::Voyage(test_config(&server)))
        .expect("client");
    let response = client
        .rerank(RerankRequest {
            query: "feline".to_string(),
            documents: vec!["cat".to_string(), "dog".to_string(), "fish".to_string()],
            top_n: None,
            truncation: None,
        })
        .await
        .expect("rerank");

    assert_eq!(response.provider, "voyage");
    assert_eq!(response.model, "rerank-2.5");
    assert_eq!(response.usage_tokens, Some(31));
    assert_eq!(response.items.len(), 2);
    assert_eq!(response.items[0].index, 2);
    assert!((response.items[0].score - 0.91).abs() < 1e-6);
}

#[tokio::test]
async fn unset_limit_and_truncation_stay_off_the_wire() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/v1/rerank"))
        .respond_with(ResponseTemplate::new(200).set_body_json(rerank_body()))
        .mount(&server)
        .await;

    let client = VoyageRerankClient::new(test_config(&server)).expect("client");
    let request = RerankRequest {
        query: "q".to_string(),
        documents: vec!["a".to_string(), "b".to_string(), "c".to_string()],
        top_n: None,
        truncation: None,
    };
    client.rerank(request.clone()).await.expect("rerank");
    client
        .rerank(RerankRequest {
            top_n: Some(2),
            truncation: Some(true),
            ..request
        })
        .await
        .expect("rerank");

    let requests = server.received_requests().await.expect("recorded requests");
    assert_eq!(requests.len(), 2);

    let first: serde_json::Value = serde_json::from_slice(&requests[0].body).expect("body json");
    assert!(first.get("top_k").is_none());
    assert!(first.get("truncation").is_none());

    let second: serde_json::Value = serde_json::from_slice(&requests[1].body).expect("body json");
    assert_eq!(second.get("top_k").and_then(serde_json::Value::as_u64), Some(2));
    assert_eq!(
        second.get("truncation").and_then(serde_json::Value::as_bool),
        Some(true)
    );
}

#[tokio::test]
async fn service_errors_map_to_api_error_with_status_and_body() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/v1/rerank"))
        .respond_with(ResponseTemplate::new(401).set_body_string("invalid api key"))
        .mount(&server)
        .await;

    let client = VoyageRerankClient::new(test_config(&server)).expect("client");
    let err = client
        .rerank(RerankRequest {
            query: "q".to_string(),
            documents: vec!["a".to_string()],
            top_n: None,
            truncation: None,
        })
        .await;

    match err {
        Err(ProviderError::Api { status, body }) => {
            assert_eq!(status, 401);
            assert_eq!(body, "invalid api key");
        }
        other => panic!("expected api error, got {other:?}"),
    }
}

#[tokio::test]
async fn empty_documents_are_rejected_before_any_request() {
    let server = MockServer::start().await;

    let client = VoyageRerankClient::new(test_config(&server)).expect("client");
    let err = client
        .rerank(RerankRequest {
            query: "q".to_string(),
            documents: vec![],
            top_n: None,
            truncation: None,
        })
        .await;

    assert!(matches!(err, Err(ProviderError::Config(_))));
    let requests = server.received_requests().await.expect("recorded requests");
    assert!(requests.is_empty());
}

#[tokio::test]
async fn postprocessor_reorders_nodes_through_the_http_binding() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/v1/rerank"))
        .and(body_partial_json(json!({"top_k": 2})))
        .respond_with(ResponseTemplate::new(200).set_body_json(rerank_body()))
        .mount(&server)
        .await;

    let stage = RerankPostprocessor::voyage(test_config(&server))
        .expect("stage")
        .with_top_n(2);
    let input = vec![
        ScoredNode::from_node(Node::new("n0", "cat"), 0.5),
        ScoredNode::from_node(Node::new("n1", "dog"), 0.5),
        ScoredNode::from_node(Node::new("n2", "fish"), 0.5),
    ];
    let query = QueryBundle::new("feline");

    let out = stage.rerank(&input, Some(&query)).await.expect("rerank");

    assert_eq!(out.len(), 2);
    assert!(Arc::ptr_eq(&out[0].node, &input[2].node));
    assert!(Arc::ptr_eq(&out[1].node, &input[0].node));
    assert!((out[0].score - 0.91).abs() < 1e-6);
    assert!((out[1].score - 0.44).abs() < 1e-6);
}
