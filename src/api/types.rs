//! Request and response payloads for the CloudVault API.
//!
//! Response shapes are validated here, at the gateway boundary; the rest of
//! the client only ever sees the typed models.

use serde::{Deserialize, Serialize};

use crate::models::{FileEntry, Folder};

/// Body for POST /auth/login.
#[derive(Debug, Serialize)]
pub struct LoginRequest<'a> {
    pub email: &'a str,
    pub password: &'a str,
}

/// Body for POST /auth/register.
#[derive(Debug, Serialize)]
pub struct RegisterRequest<'a> {
    pub email: &'a str,
    pub password: &'a str,
}

/// Response from POST /auth/login.
#[derive(Debug, Clone, Deserialize)]
pub struct TokenResponse {
    pub access_token: String,
    #[serde(default)]
    pub token_type: Option<String>,
}

/// Body for POST /folders.
///
/// `parent_id` is serialized as `null` for root-level folders; the creation
/// endpoint expects the field to be present either way.
#[derive(Debug, Serialize)]
pub struct CreateFolderRequest<'a> {
    pub name: &'a str,
    pub parent_id: Option<i64>,
}

/// Response from POST /files/upload.
#[derive(Debug, Clone, Deserialize)]
pub struct UploadResponse {
    pub id: i64,
    pub name: String,
}

/// Response from GET /search.
#[derive(Debug, Clone, Default, Deserialize, PartialEq)]
pub struct SearchResults {
    pub folders: Vec<Folder>,
    pub files: Vec<FileEntry>,
}

impl SearchResults {
    pub fn is_empty(&self) -> bool {
        self.folders.is_empty() && self.files.is_empty()
    }
}
