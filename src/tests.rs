//! Crate-level tests exercising the client through its public surface.

use crate::client::{fetch_fn, DocumentContext, EnvironmentContext};
use crate::{AdminResponse, AdminRuntimeClient, AdminRuntimeError, ClientOptions, FetchRequest, RequestInit};
use std::sync::{Arc, Mutex};

fn recording_client(options: ClientOptions) -> (AdminRuntimeClient, Arc<Mutex<Vec<FetchRequest>>>) {
    let seen = Arc::new(Mutex::new(Vec::new()));
    let sink = seen.clone();
    let transport = fetch_fn(move |request| {
        let sink = sink.clone();
        async move {
            sink.lock().unwrap().push(request);
            Ok(AdminResponse::new(204))
        }
    });
    (AdminRuntimeClient::new(options.with_fetch(transport)), seen)
}

#[tokio::test]
async fn test_no_token_never_sends_authorization() {
    let (client, seen) = recording_client(ClientOptions::new());
    let init = RequestInit::new().with_header("Authorization", "Bearer leaked");

    client.access_cards.delete("c1", Some(init.clone())).await.unwrap();
    client.access_rights.delete("r1", Some(init.clone())).await.unwrap();
    client.licenses.delete("l1", Some(init)).await.unwrap();

    for request in seen.lock().unwrap().iter() {
        assert!(!request.headers.contains("authorization"));
    }
}

#[tokio::test]
async fn test_token_sends_authorization() {
    let (client, seen) = recording_client(ClientOptions::new().with_api_token("tok"));
    client.access_rights.delete("r1", None).await.unwrap();
    assert_eq!(
        seen.lock().unwrap()[0].headers.get("authorization"),
        Some("Bearer tok")
    );
}

#[tokio::test]
async fn test_document_base_path_used_for_routes() {
    let env = EnvironmentContext::none()
        .with_origin("https://portal.example")
        .with_document(DocumentContext::new().with_base_href("/console/"));
    let (client, seen) = recording_client(ClientOptions::new().with_environment(env));

    client.licenses.delete_plan("pro", "annual", None).await.unwrap();
    assert_eq!(
        seen.lock().unwrap()[0].url.as_str(),
        "https://portal.example/console/licenses/pro/annual"
    );
}

#[tokio::test]
async fn test_concurrent_deletes_are_independent() {
    let (client, seen) = recording_client(ClientOptions::new().with_api_token("tok"));

    let cards = client.clone();
    let rights = client.clone();
    let (a, b, c) = futures::join!(
        cards.access_cards.delete("card a", Some(RequestInit::new().with_header("x-call", "1"))),
        rights.access_rights.delete("right/b", Some(RequestInit::new().with_header("x-call", "2"))),
        client.licenses.delete_plan_price("l", "p", "c", None),
    );
    assert!(a.is_ok() && b.is_ok() && c.is_ok());

    let seen = seen.lock().unwrap();
    assert_eq!(seen.len(), 3);
    for request in seen.iter() {
        match request.url.path() {
            "/access-cards/card%20a" => assert_eq!(request.headers.get("x-call"), Some("1")),
            "/access-rights/right%2Fb" => assert_eq!(request.headers.get("x-call"), Some("2")),
            "/licenses/l/p/c" => assert!(!request.headers.contains("x-call")),
            other => panic!("unexpected path {}", other),
        }
        assert_eq!(request.headers.get("authorization"), Some("Bearer tok"));
    }
}

#[tokio::test]
async fn test_transport_failure_propagates() {
    let transport = fetch_fn(|_request| async { Err(AdminRuntimeError::transport("connection refused")) });
    let client = AdminRuntimeClient::new(ClientOptions::new().with_fetch(transport));

    let err = client.access_cards.delete("c1", None).await.unwrap_err();
    assert!(matches!(err, AdminRuntimeError::Transport(ref msg) if msg == "connection refused"));
}

#[test]
fn test_base_url_resolved_once() {
    let (client, _) = recording_client(ClientOptions::new().with_base_url("https://a.example/x/"));
    let copy = client.clone();
    assert_eq!(client.base_url(), copy.base_url());
    assert!(std::ptr::eq(client.base_url(), copy.base_url()));
}

#[test]
fn test_blocking_delete_returns_transport_response() {
    let transport = fetch_fn(|_request| async {
        Ok(AdminResponse::new(410).with_body("gone"))
    });
    let client = AdminRuntimeClient::new(ClientOptions::new().with_fetch(transport));

    let response = tokio_test::block_on(client.access_rights.delete("r1", None)).unwrap();
    assert_eq!(response.status, 410);
    assert_eq!(response.text(), "gone");
}
