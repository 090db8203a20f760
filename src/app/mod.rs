//! Application state and logic for the TUI.
//!
//! This module contains the core [`App`] struct and related types:
//! - [`Screen`] - login or workspace
//! - [`Focus`] - which listing has focus in the workspace
//! - [`Modal`] - the active overlay (inputs and confirmations)
//! - [`AppMessage`] - messages for async communication

mod actions;
mod handlers;
mod messages;

pub use handlers::handle_key;
pub use messages::AppMessage;

use std::sync::Arc;

use tokio::sync::mpsc;

use crate::api::VaultClient;
use crate::auth::Session;
use crate::config::ClientConfig;
use crate::error::VaultError;
use crate::models::{FileEntry, Folder};
use crate::state::{ListingState, NavState};

/// Which screen is currently displayed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Screen {
    Login,
    Workspace,
}

/// Which listing has keyboard focus in the workspace.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Focus {
    Folders,
    Files,
}

/// Which tab of the login screen is active.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LoginTab {
    SignIn,
    Register,
}

/// Which input field of the login form has focus.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LoginField {
    Email,
    Password,
}

/// State of the login/register form.
#[derive(Debug)]
pub struct LoginForm {
    pub tab: LoginTab,
    pub field: LoginField,
    pub email: String,
    pub password: String,
    /// Inline error shown under the form.
    pub error: Option<String>,
    /// Inline info line (e.g. after a successful registration).
    pub info: Option<String>,
    /// A submit is in flight.
    pub busy: bool,
}

impl LoginForm {
    fn new() -> Self {
        Self {
            tab: LoginTab::SignIn,
            field: LoginField::Email,
            email: String::new(),
            password: String::new(),
            error: None,
            info: None,
            busy: false,
        }
    }

    /// The field currently receiving keystrokes.
    pub fn active_value_mut(&mut self) -> &mut String {
        match self.field {
            LoginField::Email => &mut self.email,
            LoginField::Password => &mut self.password,
        }
    }
}

/// A destructive operation waiting for explicit confirmation.
#[derive(Debug, Clone, PartialEq)]
pub enum PendingAction {
    DeleteFolder { id: i64, name: String },
    DeleteFile { id: i64, name: String },
    PurgeFolder { id: i64, name: String },
    PurgeFile { id: i64, name: String },
}

/// The active overlay, if any.
#[derive(Debug)]
pub enum Modal {
    /// Name prompt for a new folder in the current scope.
    CreateFolder { input: String },
    /// Local path prompt for an upload into the current scope.
    Upload { input: String },
    /// Query prompt for a name search.
    Search { input: String },
    /// Yes/no confirmation before a destructive call.
    Confirm {
        prompt: String,
        action: PendingAction,
    },
}

/// A dismissable status line at the bottom of the workspace.
#[derive(Debug, Clone, PartialEq)]
pub struct Notice {
    pub text: String,
    pub is_error: bool,
}

/// Core application state.
pub struct App {
    pub screen: Screen,
    pub session: Session,
    pub client: Arc<VaultClient>,
    pub nav: NavState,
    pub listing: ListingState,
    pub focus: Focus,
    pub folder_index: usize,
    pub file_index: usize,
    pub login_form: LoginForm,
    pub modal: Option<Modal>,
    pub notice: Option<Notice>,
    pub should_quit: bool,
    pub needs_redraw: bool,
    /// Animation counter for the loading spinner.
    pub ticks: u64,
    pub message_tx: mpsc::UnboundedSender<AppMessage>,
    /// Taken by the main loop, which needs ownership for `select!`.
    pub message_rx: Option<mpsc::UnboundedReceiver<AppMessage>>,
}

impl App {
    /// Build the app from config, restoring any persisted session.
    pub fn new(config: ClientConfig) -> Self {
        Self::with_session(config, Session::load())
    }

    /// Build the app over an explicit session (used by tests).
    pub fn with_session(config: ClientConfig, session: Session) -> Self {
        let client = match session.token() {
            Some(token) => VaultClient::with_token(&config.base_url, token),
            None => VaultClient::new(&config.base_url),
        };
        let screen = if session.is_authenticated() {
            Screen::Workspace
        } else {
            Screen::Login
        };
        let (message_tx, message_rx) = mpsc::unbounded_channel();

        Self {
            screen,
            session,
            client: Arc::new(client),
            nav: NavState::new(),
            listing: ListingState::new(),
            focus: Focus::Folders,
            folder_index: 0,
            file_index: 0,
            login_form: LoginForm::new(),
            modal: None,
            notice: None,
            should_quit: false,
            needs_redraw: true,
            ticks: 0,
            message_tx,
            message_rx: Some(message_rx),
        }
    }

    pub fn quit(&mut self) {
        self.should_quit = true;
    }

    pub fn mark_dirty(&mut self) {
        self.needs_redraw = true;
    }

    /// Advance the animation counter; redraw while anything is in flight.
    pub fn tick(&mut self) {
        self.ticks = self.ticks.wrapping_add(1);
        if self.listing.is_loading() || self.login_form.busy {
            self.mark_dirty();
        }
    }

    pub fn selected_folder(&self) -> Option<&Folder> {
        self.listing.folders().get(self.folder_index)
    }

    pub fn selected_file(&self) -> Option<&FileEntry> {
        self.listing.files().get(self.file_index)
    }

    pub fn set_notice(&mut self, text: impl Into<String>) {
        self.notice = Some(Notice {
            text: text.into(),
            is_error: false,
        });
        self.mark_dirty();
    }

    pub fn set_error_notice(&mut self, text: impl Into<String>) {
        self.notice = Some(Notice {
            text: text.into(),
            is_error: true,
        });
        self.mark_dirty();
    }

    pub fn dismiss_notice(&mut self) {
        if self.notice.take().is_some() {
            self.mark_dirty();
        }
    }

    /// Keep selections inside the listing bounds after a refresh.
    fn clamp_selection(&mut self) {
        let folders = self.listing.folders().len();
        if self.folder_index >= folders {
            self.folder_index = folders.saturating_sub(1);
        }
        let files = self.listing.files().len();
        if self.file_index >= files {
            self.file_index = files.saturating_sub(1);
        }
    }

    /// Drop the session and return to the login screen.
    ///
    /// Used for explicit logout and whenever a protected call reports that
    /// the token is no longer valid.
    pub fn force_logout(&mut self, message: Option<String>) {
        self.session.clear();
        self.client.set_token(None);
        self.screen = Screen::Login;
        self.login_form = LoginForm::new();
        self.login_form.error = message;
        self.nav = NavState::new();
        self.listing = ListingState::new();
        self.modal = None;
        self.notice = None;
        self.folder_index = 0;
        self.file_index = 0;
        self.mark_dirty();
    }

    /// Route an action failure: reauth errors drop the session, everything
    /// else becomes a dismissable notice. Listings are never touched.
    fn apply_error(&mut self, action: &str, error: &VaultError) {
        tracing::error!(code = error.error_code(), "{} failed: {}", action, error);
        if error.requires_reauth() {
            self.force_logout(Some(error.user_message()));
        } else {
            self.set_error_notice(format!("Could not {}. {}", action, error.user_message()));
        }
    }

    /// Merge an async result into app state.
    pub fn handle_message(&mut self, message: AppMessage) {
        self.mark_dirty();
        match message {
            AppMessage::LoggedIn { token, email } => {
                if let Err(e) = self.session.establish(token.clone(), email) {
                    tracing::warn!("session not persisted: {}", e);
                }
                self.client.set_token(Some(token));
                self.screen = Screen::Workspace;
                self.login_form = LoginForm::new();
                self.notice = None;
                self.reload_listings();
            }
            AppMessage::LoginFailed { error } => {
                tracing::warn!(code = error.error_code(), "login failed: {}", error);
                self.login_form.busy = false;
                self.login_form.info = None;
                self.login_form.error = Some(error.user_message());
            }
            AppMessage::Registered { email } => {
                self.login_form.busy = false;
                self.login_form.tab = LoginTab::SignIn;
                self.login_form.field = LoginField::Email;
                self.login_form.password.clear();
                self.login_form.error = None;
                self.login_form.info =
                    Some(format!("Account created for {}. Sign in to continue.", email));
            }
            AppMessage::RegisterFailed { error } => {
                tracing::warn!(code = error.error_code(), "register failed: {}", error);
                self.login_form.busy = false;
                self.login_form.info = None;
                self.login_form.error = Some(error.user_message());
            }
            AppMessage::FoldersLoaded {
                generation,
                folders,
            } => {
                if self.listing.accept_folders(generation, folders) {
                    self.clamp_selection();
                } else {
                    tracing::debug!(generation, "discarding stale folder listing");
                }
            }
            AppMessage::FoldersLoadFailed { generation, error } => {
                if self.listing.fail_folders(generation) {
                    self.apply_error("load folders", &error);
                }
            }
            AppMessage::FilesLoaded { generation, files } => {
                if self.listing.accept_files(generation, files) {
                    self.clamp_selection();
                } else {
                    tracing::debug!(generation, "discarding stale file listing");
                }
            }
            AppMessage::FilesLoadFailed { generation, error } => {
                if self.listing.fail_files(generation) {
                    self.apply_error("load files", &error);
                }
            }
            AppMessage::SearchLoaded {
                generation,
                results,
            } => {
                let folders_ok = self.listing.accept_folders(generation, results.folders);
                let files_ok = self.listing.accept_files(generation, results.files);
                if folders_ok || files_ok {
                    self.clamp_selection();
                }
            }
            AppMessage::SearchFailed { generation, error } => {
                let current = self.listing.fail_folders(generation);
                self.listing.fail_files(generation);
                if current {
                    self.apply_error("search", &error);
                }
            }
            AppMessage::MutationDone { notice } => {
                self.set_notice(notice);
                self.reload_listings();
            }
            AppMessage::ActionDone { notice } => {
                self.set_notice(notice);
            }
            AppMessage::ActionFailed { action, error } => {
                self.apply_error(action, &error);
            }
        }
    }
}
