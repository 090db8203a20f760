//! UI rendering for the CloudVault workspace.
//!
//! Two screens: the login form when unauthenticated, and the workspace
//! (sidebar, breadcrumb, folder/file listings, notice line, keybind hints)
//! when signed in. Modal overlays render on top of the workspace.

pub mod components;
mod dialog;
mod helpers;
mod login;
mod theme;
mod workspace;

pub use helpers::{centered_rect, spinner_frame, truncate_name, SPINNER_FRAMES};
pub use theme::{
    COLOR_ACCENT, COLOR_BORDER, COLOR_DIM, COLOR_ERROR, COLOR_FILE, COLOR_FOLDER, COLOR_HEADER,
    COLOR_INPUT_BG, COLOR_OK, COLOR_SELECTED_BG,
};

use ratatui::Frame;

use crate::app::{App, Screen};

use dialog::render_modal;
use login::render_login_screen;
use workspace::render_workspace;

/// Render the whole UI for the current app state.
pub fn render(frame: &mut Frame, app: &App) {
    match app.screen {
        Screen::Login => render_login_screen(frame, app),
        Screen::Workspace => {
            render_workspace(frame, app);
            render_modal(frame, app);
        }
    }
}
