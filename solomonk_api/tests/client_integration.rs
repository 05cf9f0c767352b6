use solomonk_api::{Client, Error, MonsterQuery, REFERER};
use wiremock::matchers::{header, method, path, query_param};
use wiremock::{Mock, MockServer, ResponseTemplate};

const ENDPOINT: &str = "/ajax/select_monster.php";

#[tokio::test]
async fn fetch_page_success() {
    let mock_server = MockServer::start().await;
    let body = include_str!("fixtures/page.json");

    Mock::given(method("GET"))
        .and(path(ENDPOINT))
        .and(query_param("O", "0"))
        .and(query_param("Q", "10"))
        .and(query_param("T", "all"))
        .respond_with(ResponseTemplate::new(200).set_body_string(body))
        .mount(&mock_server)
        .await;

    let client = Client::with_base_url(&mock_server.uri()).unwrap();
    let env = client.fetch_page(&MonsterQuery::default()).await.unwrap();
    let page = env.into_page().unwrap();
    assert!(page.html.contains("Larve Bleue"));
    assert_eq!(page.next_offset, Some(10));
}

#[tokio::test]
async fn fetch_page_sends_search_page_headers() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path(ENDPOINT))
        .and(header("referer", REFERER))
        .and(header("x-requested-with", "XMLHttpRequest"))
        .respond_with(ResponseTemplate::new(200).set_body_string(r#"{"html":"<p></p>"}"#))
        .expect(1)
        .mount(&mock_server)
        .await;

    let client = Client::with_base_url(&mock_server.uri()).unwrap();
    let env = client.fetch_page(&MonsterQuery::default()).await.unwrap();
    assert!(env.into_page().is_some());

    let requests = mock_server.received_requests().await.unwrap();
    let ua = requests[0].headers.get("user-agent").unwrap();
    assert!(ua.to_str().unwrap().starts_with("Mozilla/5.0"));
}

#[tokio::test]
async fn fetch_page_empty_envelope() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path(ENDPOINT))
        .respond_with(
            ResponseTemplate::new(200).set_body_string(include_str!("fixtures/page_empty.json")),
        )
        .mount(&mock_server)
        .await;

    let client = Client::with_base_url(&mock_server.uri()).unwrap();
    let env = client.fetch_page(&MonsterQuery::default()).await.unwrap();
    assert!(env.into_page().is_none());
}

#[tokio::test]
async fn fetch_page_server_error() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path(ENDPOINT))
        .respond_with(ResponseTemplate::new(500).set_body_string("Internal Server Error"))
        .mount(&mock_server)
        .await;

    let client = Client::with_base_url(&mock_server.uri()).unwrap();
    let result = client.fetch_page(&MonsterQuery::default()).await;
    match result {
        Err(Error::HttpStatus { status, body }) => {
            assert_eq!(status, 500);
            assert_eq!(body, "Internal Server Error");
        }
        other => panic!("expected HttpStatus, got {:?}", other),
    }
}

#[tokio::test]
async fn fetch_page_malformed_json() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path(ENDPOINT))
        .respond_with(ResponseTemplate::new(200).set_body_string("<html>maintenance</html>"))
        .mount(&mock_server)
        .await;

    let client = Client::with_base_url(&mock_server.uri()).unwrap();
    let result = client.fetch_page(&MonsterQuery::default()).await;
    assert!(matches!(result, Err(Error::Decode(_))));
}

#[tokio::test]
async fn fetch_page_invalid_utf8_is_decode_error() {
    let mock_server = MockServer::start().await;
    let mut body = br#"{"html":"<a>Larve "#.to_vec();
    body.extend_from_slice(&[0xff, 0xfe]);
    body.extend_from_slice(br#"</a>","offset":10}"#);

    Mock::given(method("GET"))
        .and(path(ENDPOINT))
        .respond_with(ResponseTemplate::new(200).set_body_bytes(body))
        .mount(&mock_server)
        .await;

    let client = Client::with_base_url(&mock_server.uri()).unwrap();
    let result = client.fetch_page(&MonsterQuery::default()).await;
    assert!(matches!(result, Err(Error::Decode(_))));
}

#[tokio::test]
async fn fetch_page_sends_no_accept_override() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path(ENDPOINT))
        .respond_with(ResponseTemplate::new(200).set_body_string(r#"{"html":"<p></p>"}"#))
        .mount(&mock_server)
        .await;

    let client = Client::with_base_url(&mock_server.uri()).unwrap();
    client.fetch_page(&MonsterQuery::default()).await.unwrap();

    let requests = mock_server.received_requests().await.unwrap();
    let accept = requests[0]
        .headers
        .get("accept")
        .map(|v| v.to_str().unwrap().to_string());
    assert!(accept.map_or(true, |v| !v.contains("application/json")));
}

#[tokio::test]
async fn fetch_page_connection_refused() {
    let client = Client::with_base_url("http://127.0.0.1:1").unwrap();
    let result = client.fetch_page(&MonsterQuery::default()).await;
    assert!(matches!(result, Err(Error::Http(_))));
}
