//! Async actions: every user-triggered operation spawns a task that calls
//! the API gateway and reports back through the message channel.
//!
//! Tasks are fire-and-forget; nothing is cancelled. Listing reloads carry a
//! generation stamp so a late response cannot clobber a newer one.

use std::path::PathBuf;
use std::sync::Arc;

use super::{App, AppMessage, Modal, PendingAction};
use crate::state::{ListingScope, ViewMode};

impl App {
    /// Reload both listings for the current scope.
    ///
    /// In the search view this re-runs the stored query instead, so a
    /// mutation performed from search results refreshes what is on screen.
    pub fn reload_listings(&mut self) {
        if self.nav.view() == ViewMode::Search {
            if let Some(query) = self.nav.search_query().map(str::to_string) {
                self.spawn_search(query);
            }
            return;
        }

        let scope = self.nav.scope();
        let generation = self.listing.begin_reload();
        let client = Arc::clone(&self.client);
        let tx = self.message_tx.clone();
        self.mark_dirty();

        tokio::spawn(async move {
            match scope {
                ListingScope::Drive(parent_id) => {
                    let folders = client.list_folders(parent_id).await;
                    let _ = tx.send(match folders {
                        Ok(folders) => AppMessage::FoldersLoaded {
                            generation,
                            folders,
                        },
                        Err(error) => AppMessage::FoldersLoadFailed { generation, error },
                    });
                    let files = client.list_files(parent_id).await;
                    let _ = tx.send(match files {
                        Ok(files) => AppMessage::FilesLoaded { generation, files },
                        Err(error) => AppMessage::FilesLoadFailed { generation, error },
                    });
                }
                ListingScope::Trash => {
                    let folders = client.list_trash_folders().await;
                    let _ = tx.send(match folders {
                        Ok(folders) => AppMessage::FoldersLoaded {
                            generation,
                            folders,
                        },
                        Err(error) => AppMessage::FoldersLoadFailed { generation, error },
                    });
                    let files = client.list_trash_files().await;
                    let _ = tx.send(match files {
                        Ok(files) => AppMessage::FilesLoaded { generation, files },
                        Err(error) => AppMessage::FilesLoadFailed { generation, error },
                    });
                }
            }
        });
    }

    /// Submit the login form.
    pub fn submit_login(&mut self) {
        let email = self.login_form.email.trim().to_string();
        let password = self.login_form.password.clone();
        if email.is_empty() || password.is_empty() {
            self.login_form.error = Some("Email and password are required.".to_string());
            return;
        }

        self.login_form.busy = true;
        self.login_form.error = None;
        self.login_form.info = None;

        let client = Arc::clone(&self.client);
        let tx = self.message_tx.clone();
        tokio::spawn(async move {
            let _ = tx.send(match client.login(&email, &password).await {
                Ok(response) => AppMessage::LoggedIn {
                    token: response.access_token,
                    email,
                },
                Err(error) => AppMessage::LoginFailed { error },
            });
        });
    }

    /// Submit the register form.
    pub fn submit_register(&mut self) {
        let email = self.login_form.email.trim().to_string();
        let password = self.login_form.password.clone();
        if email.is_empty() || password.is_empty() {
            self.login_form.error = Some("Email and password are required.".to_string());
            return;
        }

        self.login_form.busy = true;
        self.login_form.error = None;
        self.login_form.info = None;

        let client = Arc::clone(&self.client);
        let tx = self.message_tx.clone();
        tokio::spawn(async move {
            let _ = tx.send(match client.register(&email, &password).await {
                Ok(()) => AppMessage::Registered { email },
                Err(error) => AppMessage::RegisterFailed { error },
            });
        });
    }

    /// Sign out: clears the session locally, no network call.
    pub fn logout(&mut self) {
        tracing::info!("signing out");
        self.force_logout(None);
    }

    /// Create a folder in the current scope.
    pub fn create_folder(&mut self, name: String) {
        let parent_id = self.nav.current_folder().map(|f| f.id);
        let client = Arc::clone(&self.client);
        let tx = self.message_tx.clone();
        tokio::spawn(async move {
            let _ = tx.send(match client.create_folder(&name, parent_id).await {
                Ok(folder) => AppMessage::MutationDone {
                    notice: format!("Created folder \"{}\"", folder.name),
                },
                Err(error) => AppMessage::ActionFailed {
                    action: "create folder",
                    error,
                },
            });
        });
    }

    /// Upload a local file into the current scope.
    pub fn upload(&mut self, path: String) {
        let folder_id = self.nav.current_folder().map(|f| f.id);
        let client = Arc::clone(&self.client);
        let tx = self.message_tx.clone();
        tokio::spawn(async move {
            let path = PathBuf::from(path);
            let _ = tx.send(match client.upload_file(&path, folder_id).await {
                Ok(response) => AppMessage::MutationDone {
                    notice: format!("Uploaded \"{}\"", response.name),
                },
                Err(error) => AppMessage::ActionFailed {
                    action: "upload",
                    error,
                },
            });
        });
    }

    /// Run a confirmed destructive action.
    pub fn run_pending_action(&mut self, action: PendingAction) {
        let client = Arc::clone(&self.client);
        let tx = self.message_tx.clone();
        tokio::spawn(async move {
            let message = match action {
                PendingAction::DeleteFolder { id, name } => {
                    match client.delete_folder(id).await {
                        Ok(()) => AppMessage::MutationDone {
                            notice: format!("Moved folder \"{}\" to trash", name),
                        },
                        Err(error) => AppMessage::ActionFailed {
                            action: "delete folder",
                            error,
                        },
                    }
                }
                PendingAction::DeleteFile { id, name } => match client.delete_file(id).await {
                    Ok(()) => AppMessage::MutationDone {
                        notice: format!("Moved file \"{}\" to trash", name),
                    },
                    Err(error) => AppMessage::ActionFailed {
                        action: "delete file",
                        error,
                    },
                },
                PendingAction::PurgeFolder { id, name } => match client.purge_folder(id).await {
                    Ok(()) => AppMessage::MutationDone {
                        notice: format!("Permanently deleted folder \"{}\"", name),
                    },
                    Err(error) => AppMessage::ActionFailed {
                        action: "permanently delete folder",
                        error,
                    },
                },
                PendingAction::PurgeFile { id, name } => match client.purge_file(id).await {
                    Ok(()) => AppMessage::MutationDone {
                        notice: format!("Permanently deleted file \"{}\"", name),
                    },
                    Err(error) => AppMessage::ActionFailed {
                        action: "permanently delete file",
                        error,
                    },
                },
            };
            let _ = tx.send(message);
        });
    }

    /// Restore the selected item from the trash.
    pub fn restore_folder(&mut self, id: i64, name: String) {
        let client = Arc::clone(&self.client);
        let tx = self.message_tx.clone();
        tokio::spawn(async move {
            let _ = tx.send(match client.restore_folder(id).await {
                Ok(()) => AppMessage::MutationDone {
                    notice: format!("Restored folder \"{}\"", name),
                },
                Err(error) => AppMessage::ActionFailed {
                    action: "restore folder",
                    error,
                },
            });
        });
    }

    pub fn restore_file(&mut self, id: i64, name: String) {
        let client = Arc::clone(&self.client);
        let tx = self.message_tx.clone();
        tokio::spawn(async move {
            let _ = tx.send(match client.restore_file(id).await {
                Ok(()) => AppMessage::MutationDone {
                    notice: format!("Restored file \"{}\"", name),
                },
                Err(error) => AppMessage::ActionFailed {
                    action: "restore file",
                    error,
                },
            });
        });
    }

    /// Download the file payload and save it under its original name.
    pub fn download(&mut self, id: i64, name: String) {
        let client = Arc::clone(&self.client);
        let tx = self.message_tx.clone();
        tokio::spawn(async move {
            let message = match client.download_file(id).await {
                Ok(bytes) => {
                    let dir = crate::storage::downloads_dir();
                    match crate::storage::save_download(&dir, &name, &bytes) {
                        Ok(path) => AppMessage::ActionDone {
                            notice: format!("Saved \"{}\" to {}", name, path.display()),
                        },
                        Err(e) => AppMessage::ActionFailed {
                            action: "download",
                            error: crate::error::NetworkError::Other {
                                message: e.to_string(),
                            }
                            .into(),
                        },
                    }
                }
                Err(error) => AppMessage::ActionFailed {
                    action: "download",
                    error,
                },
            };
            let _ = tx.send(message);
        });
    }

    /// Download the file payload to a temp location and open it with the
    /// system viewer.
    pub fn preview(&mut self, id: i64, name: String) {
        let client = Arc::clone(&self.client);
        let tx = self.message_tx.clone();
        tokio::spawn(async move {
            let message = match client.download_file(id).await {
                Ok(bytes) => match crate::storage::stage_preview(&name, &bytes) {
                    Ok(path) => match open::that(&path) {
                        Ok(()) => AppMessage::ActionDone {
                            notice: format!("Opened \"{}\" for preview", name),
                        },
                        Err(e) => AppMessage::ActionFailed {
                            action: "preview",
                            error: crate::error::NetworkError::Other {
                                message: format!("no viewer available: {}", e),
                            }
                            .into(),
                        },
                    },
                    Err(e) => AppMessage::ActionFailed {
                        action: "preview",
                        error: crate::error::NetworkError::Other {
                            message: e.to_string(),
                        }
                        .into(),
                    },
                },
                Err(error) => AppMessage::ActionFailed {
                    action: "preview",
                    error,
                },
            };
            let _ = tx.send(message);
        });
    }

    /// Switch to the search view and run the query.
    pub fn run_search(&mut self, query: String) {
        self.nav.show_search(query.clone());
        self.spawn_search(query);
    }

    fn spawn_search(&mut self, query: String) {
        let generation = self.listing.begin_reload();
        let client = Arc::clone(&self.client);
        let tx = self.message_tx.clone();
        self.mark_dirty();
        tokio::spawn(async move {
            let _ = tx.send(match client.search(&query).await {
                Ok(results) => AppMessage::SearchLoaded {
                    generation,
                    results,
                },
                Err(error) => AppMessage::SearchFailed { generation, error },
            });
        });
    }

    /// Open the confirmation dialog for a destructive action.
    pub fn confirm(&mut self, action: PendingAction) {
        let prompt = match &action {
            PendingAction::DeleteFolder { name, .. } => {
                format!("Move folder \"{}\" to trash?", name)
            }
            PendingAction::DeleteFile { name, .. } => {
                format!("Move file \"{}\" to trash?", name)
            }
            PendingAction::PurgeFolder { name, .. } => format!(
                "Permanently delete folder \"{}\"? This cannot be undone.",
                name
            ),
            PendingAction::PurgeFile { name, .. } => format!(
                "Permanently delete file \"{}\"? This cannot be undone.",
                name
            ),
        };
        self.modal = Some(Modal::Confirm { prompt, action });
        self.mark_dirty();
    }
}
