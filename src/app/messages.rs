//! AppMessage enum for async communication within the application.
//!
//! Every spawned operation reports back through one of these; the main loop
//! merges them into app state. Listing messages carry the reload generation
//! they belong to so stale responses can be discarded.

use crate::api::SearchResults;
use crate::error::VaultError;
use crate::models::{FileEntry, Folder};

/// Messages received from async operations.
#[derive(Debug, Clone)]
pub enum AppMessage {
    /// Login succeeded; the token is ready to be stored.
    LoggedIn { token: String, email: String },
    /// Login was rejected or never completed.
    LoginFailed { error: VaultError },
    /// Account creation succeeded; the user still signs in explicitly.
    Registered { email: String },
    /// Account creation failed.
    RegisterFailed { error: VaultError },

    /// Folder listing arrived for the stamped reload.
    FoldersLoaded {
        generation: u64,
        folders: Vec<Folder>,
    },
    /// Folder listing failed for the stamped reload.
    FoldersLoadFailed { generation: u64, error: VaultError },
    /// File listing arrived for the stamped reload.
    FilesLoaded {
        generation: u64,
        files: Vec<FileEntry>,
    },
    /// File listing failed for the stamped reload.
    FilesLoadFailed { generation: u64, error: VaultError },
    /// Search results arrived for the stamped reload.
    SearchLoaded {
        generation: u64,
        results: SearchResults,
    },
    /// Search failed for the stamped reload.
    SearchFailed { generation: u64, error: VaultError },

    /// A mutation (create/upload/delete/restore/purge) succeeded; both
    /// listings reload in the current scope.
    MutationDone { notice: String },
    /// An action that changes nothing server-side (download/preview)
    /// finished; notice only.
    ActionDone { notice: String },
    /// Any action failed. Listings are left untouched.
    ActionFailed {
        action: &'static str,
        error: VaultError,
    },
}
