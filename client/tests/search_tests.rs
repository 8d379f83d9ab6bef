use jumpcloud_search::{SearchBody, SearchClient, SearchError, SearchRequest};
use mockito::{Matcher, Server};
use pretty_assertions::assert_eq;
use serde_json::json;

const SEARCH_PATH: &str = "/api/search/systems/";

fn search_request(server: &Server, api_key: &str, hostname: &str) -> SearchRequest {
    let url = format!("{}{}", server.url(), SEARCH_PATH);
    SearchRequest::new(&url, api_key, &SearchBody::for_hostname(hostname)).unwrap()
}

#[tokio::test]
async fn sends_documented_headers_and_body() {
    let mut server = Server::new_async().await;
    let mock = server
        .mock("POST", SEARCH_PATH)
        .match_header("accept", "application/json")
        .match_header("content-type", "application/json")
        .match_header("x-api-key", "key")
        .match_body(Matcher::Json(
            json!({"filter": [{"hostname": "ip-192-168-1-199"}]}),
        ))
        .with_status(200)
        .with_header("content-type", "application/json")
        .with_body(r#"{"totalCount": 0, "results": []}"#)
        .create_async()
        .await;

    let client = SearchClient::new().unwrap();
    let dump = client
        .send(&search_request(&server, "key", "ip-192-168-1-199"))
        .await
        .unwrap();

    mock.assert_async().await;
    assert_eq!(dump.status, 200);
    assert!(dump.ok);
    assert_eq!(dump.reason.as_deref(), Some("OK"));
    assert_eq!(dump.body, json!({"totalCount": 0, "results": []}));
    assert_eq!(
        dump.headers.get("content-type").map(String::as_str),
        Some("application/json")
    );
    assert!(dump.url.ends_with(SEARCH_PATH));
}

#[tokio::test]
async fn keeps_non_json_error_body_as_text() {
    let mut server = Server::new_async().await;
    let mock = server
        .mock("POST", SEARCH_PATH)
        .with_status(401)
        .with_body("Unauthorized")
        .create_async()
        .await;

    let client = SearchClient::new().unwrap();
    let dump = client
        .send(&search_request(&server, "wrong", "web-01"))
        .await
        .unwrap();

    mock.assert_async().await;
    assert_eq!(dump.status, 401);
    assert!(!dump.ok);
    assert_eq!(dump.body, json!("Unauthorized"));

    let err = dump.error_for_status().unwrap_err();
    assert!(matches!(err, SearchError::Status { status: 401, .. }));
}

#[tokio::test]
async fn find_id_returns_single_match() {
    let mut server = Server::new_async().await;
    let mock = server
        .mock("POST", SEARCH_PATH)
        .match_body(Matcher::PartialJson(
            json!({"filter": [{"hostname": "web-01"}]}),
        ))
        .with_status(200)
        .with_body(
            json!({
                "totalCount": 1,
                "results": [{"_id": "59a1f2", "hostname": "web-01", "os": "Ubuntu"}]
            })
            .to_string(),
        )
        .create_async()
        .await;

    let client = SearchClient::new().unwrap();
    let id = client
        .find_id(&search_request(&server, "k", "web-01"))
        .await
        .unwrap();

    mock.assert_async().await;
    assert_eq!(id, "59a1f2");
}

#[tokio::test]
async fn find_id_rejects_ambiguous_and_empty_results() {
    let mut server = Server::new_async().await;
    let _many = server
        .mock("POST", SEARCH_PATH)
        .match_body(Matcher::PartialJson(json!({"filter": [{"hostname": "dup"}]})))
        .with_status(200)
        .with_body(r#"{"totalCount": 2, "results": [{"id": "a"}, {"id": "b"}]}"#)
        .create_async()
        .await;
    let _none = server
        .mock("POST", SEARCH_PATH)
        .match_body(Matcher::PartialJson(json!({"filter": [{"hostname": "ghost"}]})))
        .with_status(200)
        .with_body(r#"{"totalCount": 0, "results": []}"#)
        .create_async()
        .await;

    let client = SearchClient::new().unwrap();

    let err = client
        .find_id(&search_request(&server, "k", "dup"))
        .await
        .unwrap_err();
    assert!(matches!(err, SearchError::Ambiguous { count: 2, .. }));

    let err = client
        .find_id(&search_request(&server, "k", "ghost"))
        .await
        .unwrap_err();
    match err {
        SearchError::NotFound { hostname } => assert_eq!(hostname, "ghost"),
        other => panic!("unexpected error: {other:?}"),
    }
}

#[tokio::test]
async fn find_id_reports_error_status_before_decoding() {
    let mut server = Server::new_async().await;
    let mock = server
        .mock("POST", SEARCH_PATH)
        .with_status(401)
        .with_header("content-type", "application/json")
        .with_body(r#"{"message": "Unauthorized"}"#)
        .create_async()
        .await;

    let client = SearchClient::new().unwrap();
    let err = client
        .find_id(&search_request(&server, "wrong", "web-01"))
        .await
        .unwrap_err();

    mock.assert_async().await;
    match err {
        SearchError::Status { status, body } => {
            assert_eq!(status, 401);
            assert!(body.contains("Unauthorized"));
        }
        other => panic!("unexpected error: {other:?}"),
    }
}

#[tokio::test]
async fn unreachable_server_is_transport_error() {
    // Reserve a free port, then release it so nothing is listening there.
    let addr = std::net::TcpListener::bind("127.0.0.1:0")
        .unwrap()
        .local_addr()
        .unwrap();
    let request = SearchRequest::new(
        &format!("http://{}/api/search/systems/", addr),
        "k",
        &SearchBody::for_hostname("h"),
    )
    .unwrap();

    let err = SearchClient::new().unwrap().send(&request).await.unwrap_err();
    assert!(matches!(err, SearchError::Transport(_)));
}
