//! CloudVault API gateway.
//!
//! [`VaultClient`] maps each domain operation onto its HTTP verb/path pair,
//! attaches the bearer token, and normalizes every non-success response into
//! a [`VaultError`]. Protected operations fail with an authentication error
//! before anything is sent when no token is stored.

mod types;

pub use types::{
    CreateFolderRequest, LoginRequest, RegisterRequest, SearchResults, TokenResponse,
    UploadResponse,
};

use std::path::Path;
use std::sync::RwLock;

use bytes::Bytes;
use reqwest::multipart;
use reqwest::Client;
use serde::de::DeserializeOwned;

use crate::error::{classify_reqwest_error, AuthError, VaultError};
use crate::models::{FileEntry, Folder};

/// Client for the CloudVault backend API.
///
/// One instance is shared (behind an `Arc`) by every spawned operation; the
/// token lives behind a lock so a login or logout on the main loop is seen
/// by requests spawned afterwards.
#[derive(Debug)]
pub struct VaultClient {
    /// Base URL for the API, without a trailing slash.
    base_url: String,
    /// Reusable HTTP client.
    client: Client,
    /// Current bearer token, if signed in.
    token: RwLock<Option<String>>,
}

impl VaultClient {
    /// Create a new client against the given base URL.
    pub fn new(base_url: impl Into<String>) -> Self {
        let base_url: String = base_url.into();
        Self {
            base_url: base_url.trim_end_matches('/').to_string(),
            client: Client::new(),
            token: RwLock::new(None),
        }
    }

    /// Create a client that already holds a token (restored session).
    pub fn with_token(base_url: impl Into<String>, token: impl Into<String>) -> Self {
        let client = Self::new(base_url);
        client.set_token(Some(token.into()));
        client
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Replace the stored token (Some after login, None after logout).
    pub fn set_token(&self, token: Option<String>) {
        match self.token.write() {
            Ok(mut guard) => *guard = token,
            Err(poisoned) => *poisoned.into_inner() = token,
        }
    }

    pub fn has_token(&self) -> bool {
        self.current_token().is_some()
    }

    fn current_token(&self) -> Option<String> {
        match self.token.read() {
            Ok(guard) => guard.clone(),
            Err(poisoned) => poisoned.into_inner().clone(),
        }
    }

    fn url(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path)
    }

    /// Attach the bearer header, or fail before anything is sent.
    fn authorize(
        &self,
        builder: reqwest::RequestBuilder,
    ) -> Result<reqwest::RequestBuilder, VaultError> {
        let token = self.current_token().ok_or(AuthError::NotAuthenticated)?;
        Ok(builder.header("Authorization", format!("Bearer {}", token)))
    }

    /// Map a non-success response into an error, reading the body as
    /// diagnostic text. 401 means the token itself was rejected.
    async fn ensure_success(response: reqwest::Response) -> Result<reqwest::Response, VaultError> {
        let status = response.status();
        if status.is_success() {
            return Ok(response);
        }
        if status.as_u16() == 401 {
            return Err(AuthError::TokenRejected.into());
        }
        let message = response
            .text()
            .await
            .unwrap_or_else(|_| "Unknown error".to_string());
        Err(VaultError::Status {
            status: status.as_u16(),
            message,
        })
    }

    async fn read_json<T: DeserializeOwned>(
        response: reqwest::Response,
        url: &str,
        operation: &str,
    ) -> Result<T, VaultError> {
        response
            .json::<T>()
            .await
            .map_err(|e| classify_reqwest_error(&e, url, operation).into())
    }

    /// Authenticated GET returning parsed JSON.
    async fn get_json<T: DeserializeOwned>(
        &self,
        path: &str,
        query: &[(&str, String)],
        operation: &str,
    ) -> Result<T, VaultError> {
        let url = self.url(path);
        let builder = self.authorize(self.client.get(&url))?.query(query);
        let response = builder
            .send()
            .await
            .map_err(|e| classify_reqwest_error(&e, &url, operation))?;
        let response = Self::ensure_success(response).await?;
        Self::read_json(response, &url, operation).await
    }

    /// Authenticated request whose response body is not used.
    async fn send_expect_success(
        &self,
        builder: reqwest::RequestBuilder,
        url: &str,
        operation: &str,
    ) -> Result<(), VaultError> {
        let response = self
            .authorize(builder)?
            .send()
            .await
            .map_err(|e| classify_reqwest_error(&e, url, operation))?;
        Self::ensure_success(response).await?;
        Ok(())
    }

    // ------------------------------------------------------------------
    // Auth
    // ------------------------------------------------------------------

    /// Sign in. The token is returned, not stored; the session store decides
    /// what to persist.
    pub async fn login(&self, email: &str, password: &str) -> Result<TokenResponse, VaultError> {
        let url = self.url("/auth/login");
        let response = self
            .client
            .post(&url)
            .json(&LoginRequest { email, password })
            .send()
            .await
            .map_err(|e| classify_reqwest_error(&e, &url, "login"))?;

        if !response.status().is_success() {
            let message = response
                .text()
                .await
                .unwrap_or_else(|_| "Unknown error".to_string());
            return Err(AuthError::LoginRejected { message }.into());
        }

        Self::read_json(response, &url, "login").await
    }

    /// Create an account. Success does not sign the user in.
    pub async fn register(&self, email: &str, password: &str) -> Result<(), VaultError> {
        let url = self.url("/auth/register");
        let response = self
            .client
            .post(&url)
            .json(&RegisterRequest { email, password })
            .send()
            .await
            .map_err(|e| classify_reqwest_error(&e, &url, "register"))?;

        if !response.status().is_success() {
            let message = response
                .text()
                .await
                .unwrap_or_else(|_| "Unknown error".to_string());
            return Err(AuthError::LoginRejected { message }.into());
        }
        Ok(())
    }

    // ------------------------------------------------------------------
    // Folders
    // ------------------------------------------------------------------

    /// List folders under `parent_id`, or root folders when `None`.
    ///
    /// The scope parameter is omitted from the query string at root, never
    /// sent as null.
    pub async fn list_folders(&self, parent_id: Option<i64>) -> Result<Vec<Folder>, VaultError> {
        let mut query = Vec::new();
        if let Some(parent_id) = parent_id {
            query.push(("parent_id", parent_id.to_string()));
        }
        self.get_json("/folders", &query, "list folders").await
    }

    pub async fn create_folder(
        &self,
        name: &str,
        parent_id: Option<i64>,
    ) -> Result<Folder, VaultError> {
        let url = self.url("/folders");
        let builder = self
            .authorize(self.client.post(&url))?
            .json(&CreateFolderRequest { name, parent_id });
        let response = builder
            .send()
            .await
            .map_err(|e| classify_reqwest_error(&e, &url, "create folder"))?;
        let response = Self::ensure_success(response).await?;
        Self::read_json(response, &url, "create folder").await
    }

    /// Move a folder to the trash (reversible).
    pub async fn delete_folder(&self, id: i64) -> Result<(), VaultError> {
        let url = self.url(&format!("/folders/{}", id));
        self.send_expect_success(self.client.delete(&url), &url, "delete folder")
            .await
    }

    /// Bring a trashed folder back.
    pub async fn restore_folder(&self, id: i64) -> Result<(), VaultError> {
        let url = self.url(&format!("/folders/{}/restore", id));
        self.send_expect_success(self.client.post(&url), &url, "restore folder")
            .await
    }

    /// Remove a trashed folder for good. Irreversible.
    pub async fn purge_folder(&self, id: i64) -> Result<(), VaultError> {
        let url = self.url(&format!("/folders/{}/permanent", id));
        self.send_expect_success(self.client.delete(&url), &url, "permanently delete folder")
            .await
    }

    pub async fn list_trash_folders(&self) -> Result<Vec<Folder>, VaultError> {
        self.get_json("/folders/trash", &[], "list trashed folders")
            .await
    }

    // ------------------------------------------------------------------
    // Files
    // ------------------------------------------------------------------

    /// List files in `folder_id`, or root files when `None`.
    pub async fn list_files(&self, folder_id: Option<i64>) -> Result<Vec<FileEntry>, VaultError> {
        let mut query = Vec::new();
        if let Some(folder_id) = folder_id {
            query.push(("folder_id", folder_id.to_string()));
        }
        self.get_json("/files", &query, "list files").await
    }

    /// Upload a local file as multipart form data, optionally into a folder.
    pub async fn upload_file(
        &self,
        path: &Path,
        folder_id: Option<i64>,
    ) -> Result<UploadResponse, VaultError> {
        let bytes = tokio::fs::read(path).await.map_err(|e| {
            VaultError::Network(crate::error::NetworkError::Other {
                message: format!("could not read {}: {}", path.display(), e),
            })
        })?;

        let file_name = path
            .file_name()
            .map(|n| n.to_string_lossy().into_owned())
            .unwrap_or_else(|| "upload.bin".to_string());
        let mime = mime_guess::from_path(path).first_or_octet_stream();

        let part = multipart::Part::bytes(bytes)
            .file_name(file_name)
            .mime_str(mime.essence_str())
            .map_err(|e| {
                VaultError::Network(crate::error::NetworkError::Other {
                    message: e.to_string(),
                })
            })?;
        let form = multipart::Form::new().part("file", part);

        let url = self.url("/files/upload");
        let mut query = Vec::new();
        if let Some(folder_id) = folder_id {
            query.push(("folder_id", folder_id.to_string()));
        }

        let builder = self
            .authorize(self.client.post(&url))?
            .query(&query)
            .multipart(form);
        let response = builder
            .send()
            .await
            .map_err(|e| classify_reqwest_error(&e, &url, "upload"))?;
        let response = Self::ensure_success(response).await?;
        Self::read_json(response, &url, "upload").await
    }

    /// Fetch the raw payload of a stored file.
    pub async fn download_file(&self, id: i64) -> Result<Bytes, VaultError> {
        let url = self.url(&format!("/files/{}/download", id));
        let response = self
            .authorize(self.client.get(&url))?
            .send()
            .await
            .map_err(|e| classify_reqwest_error(&e, &url, "download"))?;
        let response = Self::ensure_success(response).await?;
        response
            .bytes()
            .await
            .map_err(|e| classify_reqwest_error(&e, &url, "download").into())
    }

    /// Move a file to the trash (reversible).
    pub async fn delete_file(&self, id: i64) -> Result<(), VaultError> {
        let url = self.url(&format!("/files/{}", id));
        self.send_expect_success(self.client.delete(&url), &url, "delete file")
            .await
    }

    /// Bring a trashed file back.
    pub async fn restore_file(&self, id: i64) -> Result<(), VaultError> {
        let url = self.url(&format!("/files/{}/restore", id));
        self.send_expect_success(self.client.post(&url), &url, "restore file")
            .await
    }

    /// Remove a trashed file for good. Irreversible.
    pub async fn purge_file(&self, id: i64) -> Result<(), VaultError> {
        let url = self.url(&format!("/files/{}/permanent", id));
        self.send_expect_success(self.client.delete(&url), &url, "permanently delete file")
            .await
    }

    pub async fn list_trash_files(&self) -> Result<Vec<FileEntry>, VaultError> {
        self.get_json("/files/trash", &[], "list trashed files")
            .await
    }

    // ------------------------------------------------------------------
    // Search
    // ------------------------------------------------------------------

    /// Search folders and files by name.
    pub async fn search(&self, query: &str) -> Result<SearchResults, VaultError> {
        self.get_json("/search", &[("q", query.to_string())], "search")
            .await
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_client_new_strips_trailing_slash() {
        let client = VaultClient::new("http://localhost:8000/");
        assert_eq!(client.base_url(), "http://localhost:8000");
    }

    #[test]
    fn test_client_starts_without_token() {
        let client = VaultClient::new("http://localhost:8000");
        assert!(!client.has_token());
    }

    #[test]
    fn test_with_token() {
        let client = VaultClient::with_token("http://localhost:8000", "tok");
        assert!(client.has_token());
    }

    #[test]
    fn test_set_token_roundtrip() {
        let client = VaultClient::new("http://localhost:8000");
        client.set_token(Some("tok".to_string()));
        assert!(client.has_token());
        client.set_token(None);
        assert!(!client.has_token());
    }

    #[tokio::test]
    async fn test_protected_call_without_token_fails_before_send() {
        // Port 1 is never listening; if a request were sent this would be a
        // connection error, not NotAuthenticated.
        let client = VaultClient::new("http://127.0.0.1:1");
        let result = client.list_folders(None).await;
        assert_eq!(
            result.unwrap_err(),
            VaultError::Auth(crate::error::AuthError::NotAuthenticated)
        );
    }

    #[tokio::test]
    async fn test_login_with_unreachable_server() {
        let client = VaultClient::new("http://127.0.0.1:1");
        let result = client.login("a@b.com", "x").await;
        assert!(matches!(result, Err(VaultError::Network(_))));
    }

    #[tokio::test]
    async fn test_download_with_unreachable_server() {
        let client = VaultClient::with_token("http://127.0.0.1:1", "tok");
        let result = client.download_file(1).await;
        assert!(matches!(result, Err(VaultError::Network(_))));
    }
}
