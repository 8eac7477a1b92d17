//! Fetcher classification against a local fixture server
//!
//! Each test binds an axum router on an ephemeral port and points a
//! `GitHubClient` at it, so no network access is needed.

use axum::extract::Path;
use axum::http::{header, HeaderMap, StatusCode};
use axum::routing::get;
use axum::Router;
use std::sync::{Arc, Mutex};

use repo_lookup::config::GitHubConfig;
use repo_lookup::{GitHubClient, LookupError, RepoSource, Username};

/// Requests seen by the fixture: (username path segment, user agent)
type Hits = Arc<Mutex<Vec<(String, String)>>>;

/// Serve `body` with `status` for every `/users/{name}/repos` request
async fn spawn_fixture(status: StatusCode, body: &'static str) -> (String, Hits) {
    let hits: Hits = Arc::new(Mutex::new(Vec::new()));
    let recorded = hits.clone();

    let app = Router::new().route(
        "/users/:username/repos",
        get(move |Path(username): Path<String>, headers: HeaderMap| {
            let recorded = recorded.clone();
            async move {
                let agent = headers
                    .get(header::USER_AGENT)
                    .and_then(|v| v.to_str().ok())
                    .unwrap_or_default()
                    .to_string();
                recorded.lock().unwrap().push((username, agent));
                (status, [(header::CONTENT_TYPE, "application/json")], body)
            }
        }),
    );

    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    tokio::spawn(async move {
        axum::serve(listener, app).await.unwrap();
    });

    (format!("http://{}", addr), hits)
}

fn client_for(api_url: &str) -> GitHubClient {
    let config = GitHubConfig {
        api_url: api_url.to_string(),
        timeout_seconds: 5,
        ..Default::default()
    };
    GitHubClient::new(&config).unwrap()
}

fn user(name: &str) -> Username {
    Username::parse(name).unwrap()
}

const OCTOCAT_REPOS: &str = r#"[
    {"id": 1, "name": "Hello-World", "owner": {"login": "octocat", "id": 583231}, "open_issues_count": 3, "fork": false},
    {"id": 2, "name": "Spoon-Knife", "owner": {"login": "octocat", "id": 583231}, "open_issues_count": 0, "fork": false}
]"#;

#[tokio::test]
async fn success_decodes_records_in_order() {
    let (base, hits) = spawn_fixture(StatusCode::OK, OCTOCAT_REPOS).await;
    let client = client_for(&base);

    let records = client.list_repos(&user("octocat")).await.unwrap();

    assert_eq!(records.len(), 2);
    assert_eq!(records[0].label(), "octocat/Hello-World");
    assert_eq!(records[0].open_issues_count, 3);
    assert_eq!(records[1].label(), "octocat/Spoon-Knife");
    assert_eq!(records[1].open_issues_count, 0);

    let hits = hits.lock().unwrap();
    assert_eq!(hits.len(), 1, "exactly one request per lookup");
    assert_eq!(hits[0].0, "octocat");
    assert!(hits[0].1.starts_with("repo-lookup/"));
}

#[tokio::test]
async fn empty_array_is_success() {
    let (base, _) = spawn_fixture(StatusCode::OK, "[]").await;
    let records = client_for(&base).list_repos(&user("nobody")).await.unwrap();
    assert!(records.is_empty());
}

#[tokio::test]
async fn not_found_maps_to_user_not_found() {
    let (base, hits) = spawn_fixture(StatusCode::NOT_FOUND, r#"{"message": "Not Found"}"#).await;

    let err = client_for(&base)
        .list_repos(&user("doesnotexist123"))
        .await
        .unwrap_err();

    assert!(matches!(err, LookupError::UserNotFound { status: 404 }));
    assert_eq!(err.notification(), "Error: GitHub User Not Found");
    assert_eq!(hits.lock().unwrap().len(), 1, "no retries");
}

#[tokio::test]
async fn other_statuses_map_to_user_not_found() {
    for status in [StatusCode::FORBIDDEN, StatusCode::INTERNAL_SERVER_ERROR] {
        let (base, _) = spawn_fixture(status, "{}").await;
        let err = client_for(&base).list_repos(&user("octocat")).await.unwrap_err();
        match err {
            LookupError::UserNotFound { status: got } => assert_eq!(got, status.as_u16()),
            other => panic!("expected UserNotFound, got {other:?}"),
        }
    }
}

#[tokio::test]
async fn wrong_shape_is_malformed() {
    let (base, _) = spawn_fixture(StatusCode::OK, r#"{"message": "not a list"}"#).await;
    let err = client_for(&base).list_repos(&user("octocat")).await.unwrap_err();
    assert!(matches!(err, LookupError::MalformedResponse(_)));

    let (base, _) = spawn_fixture(StatusCode::OK, r#"[{"name": "missing-owner"}]"#).await;
    let err = client_for(&base).list_repos(&user("octocat")).await.unwrap_err();
    assert!(matches!(err, LookupError::MalformedResponse(_)));
}

#[tokio::test]
async fn unreachable_host_is_network_error() {
    // Bind and release a port so nothing is listening on it.
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    drop(listener);

    let err = client_for(&format!("http://{}", addr))
        .list_repos(&user("octocat"))
        .await
        .unwrap_err();

    assert!(matches!(err, LookupError::Network(_)));
    assert_eq!(err.notification(), "Unable to connect to Github");
}
