//! End-to-end session behavior: login, persistence, logout, and the
//! redirect-to-login rule for rejected tokens.

mod common;

use common::{authed_app, file_json, pump_messages};

use serde_json::json;
use tempfile::TempDir;
use wiremock::matchers::{header, method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

use cloudvault::api::VaultClient;
use cloudvault::app::{AppMessage, Screen};
use cloudvault::auth::{CredentialsManager, Session};
use cloudvault::error::{AuthError, VaultError};

fn temp_session(dir: &TempDir) -> Session {
    Session::with_manager(CredentialsManager::with_path(
        dir.path().join("credentials.json"),
    ))
}

/// Login returns a token, the token unlocks listings, logout revokes access
/// locally: the same call fails with an authentication error and no request.
#[tokio::test]
async fn test_login_list_logout_flow() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/auth/login"))
        .respond_with(
            ResponseTemplate::new(200)
                .set_body_json(json!({"access_token": "tok-1", "token_type": "bearer"})),
        )
        .mount(&server)
        .await;
    Mock::given(method("GET"))
        .and(path("/files"))
        .and(header("Authorization", "Bearer tok-1"))
        .respond_with(
            ResponseTemplate::new(200).set_body_json(json!([file_json(1, "root.txt", None)])),
        )
        .expect(1)
        .mount(&server)
        .await;

    let dir = TempDir::new().unwrap();
    let mut session = temp_session(&dir);
    let client = VaultClient::new(server.uri());

    // Login with valid credentials.
    let token = client.login("a@b.com", "x").await.unwrap().access_token;
    session
        .establish(token.clone(), "a@b.com".to_string())
        .unwrap();
    client.set_token(Some(token));

    // The root file listing is reachable with the token.
    let files = client.list_files(None).await.unwrap();
    assert_eq!(files.len(), 1);
    assert_eq!(files[0].name, "root.txt");

    // Logout clears both the in-memory and the durable session.
    session.clear();
    client.set_token(None);
    assert!(!temp_session(&dir).is_authenticated());

    // The same call now fails before any request goes out.
    let error = client.list_files(None).await.unwrap_err();
    assert_eq!(error, VaultError::Auth(AuthError::NotAuthenticated));
}

/// A session written by one process is restored by the next.
#[test]
fn test_session_survives_restart() {
    let dir = TempDir::new().unwrap();

    let mut first = temp_session(&dir);
    first
        .establish("tok-persist".to_string(), "a@b.com".to_string())
        .unwrap();
    drop(first);

    let restored = temp_session(&dir);
    assert!(restored.is_authenticated());
    assert_eq!(restored.token(), Some("tok-persist"));
    assert_eq!(restored.email(), Some("a@b.com"));
}

/// A 401 raised during a protected call drops the session and returns the
/// UI to the login screen, with the prior error surfaced on the form.
#[tokio::test]
async fn test_rejected_token_redirects_to_login() {
    let server = MockServer::start().await;
    let (mut app, _rx) = authed_app(&server);
    assert_eq!(app.screen, Screen::Workspace);

    app.handle_message(AppMessage::ActionFailed {
        action: "load folders",
        error: AuthError::TokenRejected.into(),
    });

    assert_eq!(app.screen, Screen::Login);
    assert!(!app.client.has_token());
    assert!(!app.session.is_authenticated());
    let form_error = app.login_form.error.as_deref().unwrap_or_default();
    assert!(form_error.contains("sign in again"));
}

/// Non-auth failures surface as a dismissable notice and leave the session
/// and the listings untouched.
#[tokio::test]
async fn test_request_error_becomes_notice() {
    let server = MockServer::start().await;
    let (mut app, _rx) = authed_app(&server);

    app.handle_message(AppMessage::ActionFailed {
        action: "delete folder",
        error: VaultError::Status {
            status: 500,
            message: "boom".to_string(),
        },
    });

    assert_eq!(app.screen, Screen::Workspace);
    assert!(app.session.is_authenticated());
    let notice = app.notice.clone().expect("failure must surface a notice");
    assert!(notice.is_error);
    assert!(notice.text.contains("delete folder"));
}

/// A successful in-app login stores the token on the shared client and
/// switches to the workspace.
#[tokio::test]
async fn test_login_message_establishes_session() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!([])))
        .mount(&server)
        .await;

    let config = cloudvault::config::ClientConfig::default().with_base_url(server.uri());
    let mut app = cloudvault::app::App::with_session(config, Session::ephemeral());
    let mut rx = app.message_rx.take().unwrap();
    assert_eq!(app.screen, Screen::Login);

    app.handle_message(AppMessage::LoggedIn {
        token: "tok-9".to_string(),
        email: "a@b.com".to_string(),
    });

    assert_eq!(app.screen, Screen::Workspace);
    assert!(app.client.has_token());
    assert_eq!(app.session.email(), Some("a@b.com"));

    // The login triggered the initial listing reload.
    pump_messages(&mut app, &mut rx, 2).await;
    assert!(!app.listing.is_loading());
}
