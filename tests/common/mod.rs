//! Shared fixtures for integration tests.

// Not every test binary uses every fixture.
#![allow(dead_code)]

use serde_json::{json, Value};
use tokio::sync::mpsc::UnboundedReceiver;
use wiremock::MockServer;

use cloudvault::api::VaultClient;
use cloudvault::app::{App, AppMessage};
use cloudvault::auth::Session;
use cloudvault::config::ClientConfig;

/// Token used by authenticated fixtures.
pub const TEST_TOKEN: &str = "test-token";

/// Gateway client already holding the test token.
pub fn authed_client(server: &MockServer) -> VaultClient {
    VaultClient::with_token(server.uri(), TEST_TOKEN)
}

/// An app signed in against the mock server, plus its message receiver.
///
/// The receiver is taken out of the app so tests can pump messages through
/// [`App::handle_message`] the way the main loop does.
pub fn authed_app(server: &MockServer) -> (App, UnboundedReceiver<AppMessage>) {
    let mut session = Session::ephemeral();
    session
        .establish(TEST_TOKEN.to_string(), "a@b.com".to_string())
        .expect("ephemeral session should establish");
    let config = ClientConfig::default().with_base_url(server.uri());
    let mut app = App::with_session(config, session);
    let rx = app.message_rx.take().expect("fresh app owns its receiver");
    (app, rx)
}

/// Receive `count` async results and merge them into the app.
pub async fn pump_messages(app: &mut App, rx: &mut UnboundedReceiver<AppMessage>, count: usize) {
    for _ in 0..count {
        let message = tokio::time::timeout(std::time::Duration::from_secs(5), rx.recv())
            .await
            .expect("timed out waiting for an app message")
            .expect("message channel closed");
        app.handle_message(message);
    }
}

pub fn folder_json(id: i64, name: &str, parent_id: Option<i64>) -> Value {
    json!({ "id": id, "name": name, "parent_id": parent_id })
}

pub fn file_json(id: i64, name: &str, folder_id: Option<i64>) -> Value {
    json!({ "id": id, "name": name, "folder_id": folder_id })
}
