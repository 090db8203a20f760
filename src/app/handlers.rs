//! Keyboard handling.
//!
//! One entry point, [`handle_key`], dispatched by screen and active modal.
//! Modals capture all input while open; destructive actions only ever run
//! out of a confirmation modal.

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

use super::{App, Focus, LoginField, LoginTab, Modal, PendingAction, Screen};
use crate::state::ViewMode;

/// Handle a key press. Returns after mutating app state; rendering picks the
/// changes up through the dirty flag.
pub fn handle_key(app: &mut App, key: KeyEvent) {
    app.mark_dirty();

    // Ctrl+C always quits, regardless of screen or modal.
    if key.code == KeyCode::Char('c') && key.modifiers.contains(KeyModifiers::CONTROL) {
        app.quit();
        return;
    }

    match app.screen {
        Screen::Login => handle_login_key(app, key),
        Screen::Workspace => {
            if app.modal.is_some() {
                handle_modal_key(app, key);
            } else {
                handle_workspace_key(app, key);
            }
        }
    }
}

fn handle_login_key(app: &mut App, key: KeyEvent) {
    if app.login_form.busy {
        // A submit is in flight; only quitting is allowed above.
        return;
    }

    match key.code {
        KeyCode::Esc => app.quit(),
        KeyCode::Tab | KeyCode::Down => {
            app.login_form.field = match app.login_form.field {
                LoginField::Email => LoginField::Password,
                LoginField::Password => LoginField::Email,
            };
        }
        KeyCode::BackTab | KeyCode::Up => {
            app.login_form.field = match app.login_form.field {
                LoginField::Email => LoginField::Password,
                LoginField::Password => LoginField::Email,
            };
        }
        KeyCode::Left | KeyCode::Right => {
            app.login_form.tab = match app.login_form.tab {
                LoginTab::SignIn => LoginTab::Register,
                LoginTab::Register => LoginTab::SignIn,
            };
            app.login_form.error = None;
        }
        KeyCode::Enter => match app.login_form.tab {
            LoginTab::SignIn => app.submit_login(),
            LoginTab::Register => app.submit_register(),
        },
        KeyCode::Backspace => {
            app.login_form.active_value_mut().pop();
        }
        KeyCode::Char(c) => {
            app.login_form.active_value_mut().push(c);
        }
        _ => {}
    }
}

fn handle_modal_key(app: &mut App, key: KeyEvent) {
    let Some(modal) = app.modal.as_mut() else {
        return;
    };

    match modal {
        Modal::Confirm { action, .. } => match key.code {
            KeyCode::Char('y') | KeyCode::Char('Y') | KeyCode::Enter => {
                let action = action.clone();
                app.modal = None;
                app.run_pending_action(action);
            }
            KeyCode::Char('n') | KeyCode::Char('N') | KeyCode::Esc => {
                app.modal = None;
            }
            _ => {}
        },
        Modal::CreateFolder { input } | Modal::Upload { input } | Modal::Search { input } => {
            match key.code {
                KeyCode::Esc => {
                    app.modal = None;
                }
                KeyCode::Backspace => {
                    input.pop();
                }
                KeyCode::Char(c) => {
                    input.push(c);
                }
                KeyCode::Enter => {
                    let value = input.trim().to_string();
                    let modal = app.modal.take();
                    if value.is_empty() {
                        return;
                    }
                    match modal {
                        Some(Modal::CreateFolder { .. }) => app.create_folder(value),
                        Some(Modal::Upload { .. }) => app.upload(value),
                        Some(Modal::Search { .. }) => app.run_search(value),
                        _ => {}
                    }
                }
                _ => {}
            }
        }
    }
}

fn handle_workspace_key(app: &mut App, key: KeyEvent) {
    let view = app.nav.view();

    match key.code {
        KeyCode::Char('q') => app.quit(),
        KeyCode::Esc => {
            if app.notice.is_some() {
                app.dismiss_notice();
            } else if view == ViewMode::Search {
                let _ = app.nav.go_root();
                app.reload_listings();
            }
        }
        KeyCode::Tab | KeyCode::BackTab => {
            app.focus = match app.focus {
                Focus::Folders => Focus::Files,
                Focus::Files => Focus::Folders,
            };
        }
        KeyCode::Up => move_selection(app, -1),
        KeyCode::Down => move_selection(app, 1),
        KeyCode::Enter => match app.focus {
            Focus::Folders => {
                // Trashed folders cannot be opened; restore them first.
                if view != ViewMode::Trash {
                    if let Some(folder) = app.selected_folder().cloned() {
                        app.nav.open_folder(folder);
                        app.folder_index = 0;
                        app.file_index = 0;
                        app.reload_listings();
                    }
                }
            }
            Focus::Files => {
                if view != ViewMode::Trash {
                    if let Some(file) = app.selected_file() {
                        let (id, name) = (file.id, file.name.clone());
                        app.preview(id, name);
                    }
                }
            }
        },
        KeyCode::Backspace => {
            if view == ViewMode::Drive {
                app.nav.go_up();
                app.folder_index = 0;
                app.file_index = 0;
                app.reload_listings();
            }
        }
        KeyCode::Char('g') => {
            app.nav.go_root();
            app.folder_index = 0;
            app.file_index = 0;
            app.reload_listings();
        }
        KeyCode::Char(c @ '1'..='9') => {
            // Jump straight to a breadcrumb element.
            let index = (c as usize) - ('1' as usize);
            if view == ViewMode::Drive && index < app.nav.breadcrumb().len() {
                app.nav.crumb_jump(index);
                app.folder_index = 0;
                app.file_index = 0;
                app.reload_listings();
            }
        }
        KeyCode::Char('t') => {
            if view != ViewMode::Trash {
                app.nav.open_trash();
                app.folder_index = 0;
                app.file_index = 0;
                app.focus = Focus::Folders;
                app.reload_listings();
            }
        }
        KeyCode::Char('n') => {
            if view == ViewMode::Drive {
                app.modal = Some(Modal::CreateFolder {
                    input: String::new(),
                });
            }
        }
        KeyCode::Char('u') => {
            if view == ViewMode::Drive {
                app.modal = Some(Modal::Upload {
                    input: String::new(),
                });
            }
        }
        KeyCode::Char('/') => {
            app.modal = Some(Modal::Search {
                input: String::new(),
            });
        }
        KeyCode::Char('d') => {
            if view != ViewMode::Trash {
                if let (Focus::Files, Some(file)) = (app.focus, app.selected_file()) {
                    let (id, name) = (file.id, file.name.clone());
                    app.download(id, name);
                }
            }
        }
        KeyCode::Char('p') => {
            if view != ViewMode::Trash {
                if let (Focus::Files, Some(file)) = (app.focus, app.selected_file()) {
                    let (id, name) = (file.id, file.name.clone());
                    app.preview(id, name);
                }
            }
        }
        KeyCode::Char('x') | KeyCode::Delete => match view {
            // In the drive view deletion is a soft delete; in the trash view
            // it is permanent. Both go through the confirmation modal.
            ViewMode::Drive => match app.focus {
                Focus::Folders => {
                    if let Some(folder) = app.selected_folder() {
                        let action = PendingAction::DeleteFolder {
                            id: folder.id,
                            name: folder.name.clone(),
                        };
                        app.confirm(action);
                    }
                }
                Focus::Files => {
                    if let Some(file) = app.selected_file() {
                        let action = PendingAction::DeleteFile {
                            id: file.id,
                            name: file.name.clone(),
                        };
                        app.confirm(action);
                    }
                }
            },
            ViewMode::Trash => match app.focus {
                Focus::Folders => {
                    if let Some(folder) = app.selected_folder() {
                        let action = PendingAction::PurgeFolder {
                            id: folder.id,
                            name: folder.name.clone(),
                        };
                        app.confirm(action);
                    }
                }
                Focus::Files => {
                    if let Some(file) = app.selected_file() {
                        let action = PendingAction::PurgeFile {
                            id: file.id,
                            name: file.name.clone(),
                        };
                        app.confirm(action);
                    }
                }
            },
            ViewMode::Search => {}
        },
        KeyCode::Char('r') => {
            if view == ViewMode::Trash {
                match app.focus {
                    Focus::Folders => {
                        if let Some(folder) = app.selected_folder() {
                            let (id, name) = (folder.id, folder.name.clone());
                            app.restore_folder(id, name);
                        }
                    }
                    Focus::Files => {
                        if let Some(file) = app.selected_file() {
                            let (id, name) = (file.id, file.name.clone());
                            app.restore_file(id, name);
                        }
                    }
                }
            }
        }
        KeyCode::Char('L') => app.logout(),
        _ => {}
    }
}

fn move_selection(app: &mut App, delta: i64) {
    let (index, len) = match app.focus {
        Focus::Folders => (&mut app.folder_index, app.listing.folders().len()),
        Focus::Files => (&mut app.file_index, app.listing.files().len()),
    };
    if len == 0 {
        *index = 0;
        return;
    }
    let current = *index as i64;
    let next = (current + delta).clamp(0, len as i64 - 1);
    *index = next as usize;
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::auth::Session;
    use crate::config::ClientConfig;
    use crate::models::Folder;

    fn test_app() -> App {
        App::with_session(ClientConfig::default(), Session::ephemeral())
    }

    fn key(code: KeyCode) -> KeyEvent {
        KeyEvent::new(code, KeyModifiers::NONE)
    }

    #[test]
    fn test_ctrl_c_quits_from_login() {
        let mut app = test_app();
        assert_eq!(app.screen, Screen::Login);
        handle_key(
            &mut app,
            KeyEvent::new(KeyCode::Char('c'), KeyModifiers::CONTROL),
        );
        assert!(app.should_quit);
    }

    #[test]
    fn test_login_typing_goes_to_focused_field() {
        let mut app = test_app();
        handle_key(&mut app, key(KeyCode::Char('a')));
        handle_key(&mut app, key(KeyCode::Char('@')));
        assert_eq!(app.login_form.email, "a@");

        handle_key(&mut app, key(KeyCode::Tab));
        handle_key(&mut app, key(KeyCode::Char('x')));
        assert_eq!(app.login_form.password, "x");
        assert_eq!(app.login_form.email, "a@");
    }

    #[test]
    fn test_login_empty_submit_shows_inline_error() {
        let mut app = test_app();
        handle_key(&mut app, key(KeyCode::Enter));
        assert!(!app.login_form.busy);
        assert!(app.login_form.error.is_some());
    }

    #[test]
    fn test_login_tab_switch() {
        let mut app = test_app();
        assert_eq!(app.login_form.tab, LoginTab::SignIn);
        handle_key(&mut app, key(KeyCode::Right));
        assert_eq!(app.login_form.tab, LoginTab::Register);
        handle_key(&mut app, key(KeyCode::Left));
        assert_eq!(app.login_form.tab, LoginTab::SignIn);
    }

    #[test]
    fn test_delete_opens_confirmation_not_action() {
        let mut app = test_app();
        app.screen = Screen::Workspace;
        let generation = app.listing.begin_reload();
        app.listing.accept_folders(
            generation,
            vec![Folder {
                id: 1,
                name: "Reports".to_string(),
                parent_id: None,
            }],
        );
        app.listing.accept_files(generation, Vec::new());

        handle_key(&mut app, key(KeyCode::Char('x')));
        match &app.modal {
            Some(Modal::Confirm { prompt, action }) => {
                assert!(prompt.contains("Reports"));
                assert!(prompt.contains("trash"));
                assert_eq!(
                    *action,
                    PendingAction::DeleteFolder {
                        id: 1,
                        name: "Reports".to_string()
                    }
                );
            }
            other => panic!("expected confirm modal, got {:?}", other.is_some()),
        }
    }

    #[test]
    fn test_confirm_modal_declined_with_n() {
        let mut app = test_app();
        app.screen = Screen::Workspace;
        app.confirm(PendingAction::DeleteFile {
            id: 3,
            name: "a.txt".to_string(),
        });
        handle_key(&mut app, key(KeyCode::Char('n')));
        assert!(app.modal.is_none());
    }

    #[test]
    fn test_purge_prompt_states_irreversibility() {
        let mut app = test_app();
        app.confirm(PendingAction::PurgeFile {
            id: 3,
            name: "a.txt".to_string(),
        });
        match &app.modal {
            Some(Modal::Confirm { prompt, .. }) => {
                assert!(prompt.contains("cannot be undone"));
            }
            _ => panic!("expected confirm modal"),
        }
    }

    #[test]
    fn test_selection_moves_and_clamps() {
        let mut app = test_app();
        app.screen = Screen::Workspace;
        let generation = app.listing.begin_reload();
        app.listing.accept_folders(
            generation,
            vec![
                Folder {
                    id: 1,
                    name: "A".to_string(),
                    parent_id: None,
                },
                Folder {
                    id: 2,
                    name: "B".to_string(),
                    parent_id: None,
                },
            ],
        );
        app.listing.accept_files(generation, Vec::new());

        handle_key(&mut app, key(KeyCode::Down));
        assert_eq!(app.folder_index, 1);
        handle_key(&mut app, key(KeyCode::Down));
        assert_eq!(app.folder_index, 1);
        handle_key(&mut app, key(KeyCode::Up));
        assert_eq!(app.folder_index, 0);
        handle_key(&mut app, key(KeyCode::Up));
        assert_eq!(app.folder_index, 0);
    }

    #[test]
    fn test_modal_captures_typing() {
        let mut app = test_app();
        app.screen = Screen::Workspace;
        handle_key(&mut app, key(KeyCode::Char('n')));
        assert!(matches!(app.modal, Some(Modal::CreateFolder { .. })));

        // 'q' must land in the input, not quit the app.
        handle_key(&mut app, key(KeyCode::Char('q')));
        assert!(!app.should_quit);
        match &app.modal {
            Some(Modal::CreateFolder { input }) => assert_eq!(input, "q"),
            _ => panic!("expected create-folder modal"),
        }

        handle_key(&mut app, key(KeyCode::Esc));
        assert!(app.modal.is_none());
    }

    #[tokio::test]
    async fn test_trash_toggle_resets_navigation() {
        // Async: the trash switch spawns its listing reload.
        let mut app = test_app();
        app.screen = Screen::Workspace;
        app.nav.open_folder(Folder {
            id: 1,
            name: "A".to_string(),
            parent_id: None,
        });

        handle_key(&mut app, key(KeyCode::Char('t')));
        assert_eq!(app.nav.view(), ViewMode::Trash);
        assert!(app.nav.breadcrumb().is_empty());
    }

    #[test]
    fn test_logout_returns_to_login() {
        let mut app = test_app();
        app.screen = Screen::Workspace;
        handle_key(&mut app, key(KeyCode::Char('L')));
        assert_eq!(app.screen, Screen::Login);
        assert!(!app.client.has_token());
    }
}
