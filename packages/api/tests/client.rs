use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;

use api::models::{ExportFormat, RemovalStep};
use api::{ApiClient, ApiError};
use serde_json::json;
use store::config::ApiConfig;
use store::session::{REMEMBERED_EMAIL_KEY, ROLE_KEY, TOKEN_KEY, USER_ID_KEY};
use store::{KeyValueStore, MemoryStorage, Role};
use wiremock::matchers::{body_json, header, method, path, query_param};
use wiremock::{Mock, MockServer, ResponseTemplate};

fn can_bind_localhost() -> bool {
    std::net::TcpListener::bind("127.0.0.1:0").is_ok()
}

fn signed_in_storage() -> Arc<MemoryStorage> {
    let storage = Arc::new(MemoryStorage::new());
    storage.set(TOKEN_KEY, "tok-123").unwrap();
    storage.set(ROLE_KEY, "user").unwrap();
    storage.set(USER_ID_KEY, "u1").unwrap();
    storage.set(REMEMBERED_EMAIL_KEY, "ada@example.com").unwrap();
    storage
}

fn client_for(server: &MockServer, storage: Arc<MemoryStorage>) -> ApiClient {
    let config = ApiConfig {
        base_url: format!("{}/api", server.uri()),
        ..ApiConfig::default()
    };
    ApiClient::new(&config, storage).unwrap()
}

#[tokio::test]
async fn test_bearer_token_is_attached() {
    if !can_bind_localhost() {
        eprintln!("Skipping: cannot bind localhost TCP port in this environment.");
        return;
    }
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/api/users/events"))
        .and(header("authorization", "Bearer tok-123"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "success": true,
            "data": []
        })))
        .expect(1)
        .mount(&server)
        .await;

    let client = client_for(&server, signed_in_storage());
    let events = client.users().events().await.unwrap();
    assert!(events.is_empty());
}

#[tokio::test]
async fn test_unauthorized_clears_session_and_fires_hook() {
    if !can_bind_localhost() {
        eprintln!("Skipping: cannot bind localhost TCP port in this environment.");
        return;
    }
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/api/users/profile"))
        .respond_with(ResponseTemplate::new(401).set_body_json(json!({
            "success": false,
            "message": "Token expired"
        })))
        .mount(&server)
        .await;

    let storage = signed_in_storage();
    let fired = Arc::new(AtomicUsize::new(0));
    let counter = fired.clone();
    let client = client_for(&server, storage.clone()).with_session_expired(move || {
        counter.fetch_add(1, Ordering::SeqCst);
    });

    let err = client.users().profile().await.unwrap_err();
    assert!(err.is_session_expired());
    assert_eq!(fired.load(Ordering::SeqCst), 1);
    assert_eq!(storage.get(TOKEN_KEY), None);
    assert_eq!(storage.get(ROLE_KEY), None);
    assert_eq!(storage.get(USER_ID_KEY), None);
    // Not part of the session.
    assert_eq!(
        storage.get(REMEMBERED_EMAIL_KEY).as_deref(),
        Some("ada@example.com")
    );
}

#[tokio::test]
async fn test_unauthorized_login_also_expires() {
    if !can_bind_localhost() {
        eprintln!("Skipping: cannot bind localhost TCP port in this environment.");
        return;
    }
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/api/auth/admin/login"))
        .respond_with(ResponseTemplate::new(401))
        .mount(&server)
        .await;

    let fired = Arc::new(AtomicUsize::new(0));
    let counter = fired.clone();
    let client = client_for(&server, Arc::new(MemoryStorage::new())).with_session_expired(
        move || {
            counter.fetch_add(1, Ordering::SeqCst);
        },
    );

    let err = client.auth().login_admin("root", "bad").await.unwrap_err();
    assert!(matches!(err, ApiError::SessionExpired));
    assert_eq!(fired.load(Ordering::SeqCst), 1);
}

#[tokio::test]
async fn test_error_message_from_body() {
    if !can_bind_localhost() {
        eprintln!("Skipping: cannot bind localhost TCP port in this environment.");
        return;
    }
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/api/auth/user/login"))
        .respond_with(ResponseTemplate::new(400).set_body_json(json!({
            "success": false,
            "message": "Invalid credentials"
        })))
        .mount(&server)
        .await;
    Mock::given(method("GET"))
        .and(path("/api/events"))
        .respond_with(ResponseTemplate::new(500).set_body_string("<html>oops</html>"))
        .mount(&server)
        .await;

    let storage = signed_in_storage();
    let client = client_for(&server, storage.clone());

    let err = client
        .auth()
        .login_user("ada@example.com", "wrong")
        .await
        .unwrap_err();
    assert_eq!(err.status(), Some(400));
    assert_eq!(err.message_or("Login failed"), "Invalid credentials");

    let err = client.events().all().await.unwrap_err();
    assert_eq!(err.status(), Some(500));
    assert_eq!(err.message_or("Failed to load events"), "Failed to load events");

    // Only a 401 touches the session.
    assert_eq!(storage.get(TOKEN_KEY).as_deref(), Some("tok-123"));
}

#[tokio::test]
async fn test_login_user_decodes_grant() {
    if !can_bind_localhost() {
        eprintln!("Skipping: cannot bind localhost TCP port in this environment.");
        return;
    }
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/api/auth/user/login"))
        .and(body_json(json!({ "email": "ada@example.com", "password": "secret1" })))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "success": true,
            "message": "Login successful",
            "data": {
                "token": "jwt-abc",
                "user": {
                    "_id": "64f0",
                    "fullName": "Ada Lovelace",
                    "email": "ada@example.com",
                    "srn": "PES1UG21CS001"
                }
            }
        })))
        .mount(&server)
        .await;

    let client = client_for(&server, Arc::new(MemoryStorage::new()));
    let grant = client
        .auth()
        .login_user("ada@example.com", "secret1")
        .await
        .unwrap();
    assert_eq!(grant.token, "jwt-abc");
    assert_eq!(grant.role, Role::User);
    assert_eq!(grant.user_id, "64f0");
    assert_eq!(grant.profile.display_name, "Ada Lovelace");
}

#[tokio::test]
async fn test_missing_data_is_an_error() {
    if !can_bind_localhost() {
        eprintln!("Skipping: cannot bind localhost TCP port in this environment.");
        return;
    }
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/api/admin/stats"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({ "success": true })))
        .mount(&server)
        .await;

    let client = client_for(&server, signed_in_storage());
    let err = client.admin().stats().await.unwrap_err();
    assert!(matches!(err, ApiError::MissingData));
}

#[tokio::test]
async fn test_remove_user_sends_step_body() {
    if !can_bind_localhost() {
        eprintln!("Skipping: cannot bind localhost TCP port in this environment.");
        return;
    }
    let server = MockServer::start().await;
    Mock::given(method("DELETE"))
        .and(path("/api/master/remove-user/u9"))
        .and(body_json(json!({ "step": "1" })))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "success": true,
            "data": { "confirmationToken": "confirm-xyz" }
        })))
        .mount(&server)
        .await;
    Mock::given(method("DELETE"))
        .and(path("/api/master/remove-user/u9"))
        .and(body_json(json!({
            "step": "2",
            "password": "pw",
            "confirmationToken": "confirm-xyz"
        })))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "success": true,
            "data": { "userId": "u9", "verified": true, "nextStep": 3 }
        })))
        .mount(&server)
        .await;

    let client = client_for(&server, signed_in_storage());
    let reply = client
        .master()
        .remove_user("u9", &RemovalStep::Request)
        .await
        .unwrap();
    let token = reply.confirmation_token.unwrap();
    assert_eq!(token, "confirm-xyz");
    assert!(!reply.verified);

    let reply = client
        .master()
        .remove_user(
            "u9",
            &RemovalStep::Confirm {
                password: "pw".to_string(),
                token,
            },
        )
        .await
        .unwrap();
    assert!(reply.confirmation_token.is_none());
    assert!(reply.verified);
}

#[tokio::test]
async fn test_export_returns_raw_body() {
    if !can_bind_localhost() {
        eprintln!("Skipping: cannot bind localhost TCP port in this environment.");
        return;
    }
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/api/master/stats/export"))
        .and(query_param("format", "csv"))
        .respond_with(ResponseTemplate::new(200).set_body_string("name,points\nAda,900\n"))
        .mount(&server)
        .await;

    let client = client_for(&server, signed_in_storage());
    let csv = client.master().export(ExportFormat::Csv).await.unwrap();
    assert!(csv.starts_with("name,points"));
}

#[tokio::test]
async fn test_class_leaderboard_encodes_class_segment() {
    if !can_bind_localhost() {
        eprintln!("Skipping: cannot bind localhost TCP port in this environment.");
        return;
    }
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/api/leaderboard/class/3rd%20Year%20CSE"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "success": true,
            "data": {
                "leaderboard": [
                    { "rank": 1, "fullName": "Ada", "stats": { "clusterPoints": 120 }, "isCurrentUser": true }
                ],
                "currentUserRank": 1
            }
        })))
        .mount(&server)
        .await;

    let client = client_for(&server, signed_in_storage());
    let page = client.leaderboard().class("3rd Year CSE").await.unwrap();
    assert_eq!(page.current_user_rank, Some(1));
    assert_eq!(page.leaderboard[0].stats.cluster_points, 120);
}

#[tokio::test]
async fn test_event_details_decodes_record() {
    if !can_bind_localhost() {
        eprintln!("Skipping: cannot bind localhost TCP port in this environment.");
        return;
    }
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/api/events/e42"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "success": true,
            "data": {
                "_id": "e42",
                "title": "Rust Workshop",
                "eventType": "ongoing",
                "participants": ["u1", "u2"]
            }
        })))
        .mount(&server)
        .await;

    let client = client_for(&server, signed_in_storage());
    let event = client.events().details("e42").await.unwrap();
    assert_eq!(event.title, "Rust Workshop");
    assert_eq!(event.status(), store::EventStatus::Ongoing);
    assert_eq!(event.to_display(1).attendees, 2);
}

#[tokio::test]
async fn test_slow_response_times_out_as_transport_error() {
    if !can_bind_localhost() {
        eprintln!("Skipping: cannot bind localhost TCP port in this environment.");
        return;
    }
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/api/events/slow"))
        .respond_with(
            ResponseTemplate::new(200)
                .set_delay(std::time::Duration::from_secs(3))
                .set_body_json(json!({ "success": true, "data": { "_id": "slow", "title": "Late" } })),
        )
        .mount(&server)
        .await;

    let config = ApiConfig {
        base_url: format!("{}/api", server.uri()),
        timeout_secs: 1,
    };
    let storage = signed_in_storage();
    let client = ApiClient::new(&config, storage.clone()).unwrap();
    assert_eq!(client.timeout(), std::time::Duration::from_secs(1));

    let err = client.events().details("slow").await.unwrap_err();
    match err {
        ApiError::Transport(e) => assert!(e.is_timeout(), "expected timeout, got {e}"),
        other => panic!("expected transport error, got {other:?}"),
    }
    assert_eq!(storage.get(TOKEN_KEY).as_deref(), Some("tok-123"));
}
