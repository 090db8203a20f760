//! Authenticated workspace: sidebar, breadcrumb, listings, notice, hints.

use ratatui::{
    prelude::*,
    widgets::{Block, BorderType, Borders, List, ListItem, ListState, Paragraph},
};

use crate::app::{App, Focus};
use crate::state::ViewMode;

use super::helpers::{spinner_frame, truncate_name};
use super::theme::{
    COLOR_ACCENT, COLOR_BORDER, COLOR_DIM, COLOR_ERROR, COLOR_FILE, COLOR_FOLDER, COLOR_HEADER,
    COLOR_OK, COLOR_SELECTED_BG,
};

pub fn render_workspace(frame: &mut Frame, app: &App) {
    let area = frame.area();

    let columns = Layout::horizontal([Constraint::Length(20), Constraint::Min(30)]).split(area);
    render_sidebar(frame, app, columns[0]);

    let rows = Layout::vertical([
        Constraint::Length(1),
        Constraint::Percentage(45),
        Constraint::Min(5),
        Constraint::Length(1),
        Constraint::Length(1),
    ])
    .split(columns[1]);

    render_breadcrumb(frame, app, rows[0]);
    render_folder_list(frame, app, rows[1]);
    render_file_list(frame, app, rows[2]);
    render_notice(frame, app, rows[3]);
    render_hints(frame, app, rows[4]);
}

fn render_sidebar(frame: &mut Frame, app: &App, area: Rect) {
    let block = Block::default()
        .borders(Borders::ALL)
        .border_type(BorderType::Rounded)
        .border_style(Style::default().fg(COLOR_BORDER))
        .title(Span::styled(" CloudVault ", Style::default().fg(COLOR_HEADER).bold()));
    let inner = block.inner(area);
    frame.render_widget(block, area);

    let view = app.nav.view();
    let item = |label: &str, icon: &str, active: bool| {
        let style = if active {
            Style::default().fg(COLOR_ACCENT).bold()
        } else {
            Style::default().fg(COLOR_DIM)
        };
        let marker = if active { "▸ " } else { "  " };
        Line::from(Span::styled(format!("{}{} {}", marker, icon, label), style))
    };

    let mut lines = vec![
        Line::from(""),
        item("Drive", "🗀", view == ViewMode::Drive),
        item("Trash", "🗑", view == ViewMode::Trash),
    ];
    if view == ViewMode::Search {
        lines.push(item("Search", "⌕", true));
    }
    frame.render_widget(Paragraph::new(lines), inner);

    // Account + logout pinned at the bottom.
    if inner.height >= 3 {
        let footer_area = Rect {
            x: inner.x,
            y: inner.y + inner.height - 2,
            width: inner.width,
            height: 2,
        };
        let email = app.session.email().unwrap_or("signed in");
        let footer = Paragraph::new(vec![
            Line::from(Span::styled(
                truncate_name(email, inner.width as usize),
                Style::default().fg(COLOR_DIM),
            )),
            Line::from(Span::styled("[L] logout", Style::default().fg(COLOR_DIM))),
        ]);
        frame.render_widget(footer, footer_area);
    }
}

fn render_breadcrumb(frame: &mut Frame, app: &App, area: Rect) {
    let mut spans: Vec<Span> = Vec::new();
    match app.nav.view() {
        ViewMode::Trash => {
            spans.push(Span::styled("Trash", Style::default().fg(COLOR_ACCENT).bold()));
            spans.push(Span::styled(
                "  (deleted items)",
                Style::default().fg(COLOR_DIM),
            ));
        }
        ViewMode::Search => {
            spans.push(Span::styled("Search", Style::default().fg(COLOR_ACCENT).bold()));
            if let Some(query) = app.nav.search_query() {
                spans.push(Span::styled(
                    format!("  \"{}\"", query),
                    Style::default().fg(COLOR_DIM),
                ));
            }
        }
        ViewMode::Drive => {
            spans.push(Span::styled("My Drive", Style::default().fg(COLOR_ACCENT)));
            for (i, folder) in app.nav.breadcrumb().iter().enumerate() {
                spans.push(Span::styled(" / ", Style::default().fg(COLOR_DIM)));
                let is_current = i + 1 == app.nav.breadcrumb().len();
                let style = if is_current {
                    Style::default().fg(COLOR_ACCENT).bold()
                } else {
                    Style::default().fg(COLOR_DIM)
                };
                spans.push(Span::styled(folder.name.clone(), style));
            }
        }
    }
    frame.render_widget(Paragraph::new(Line::from(spans)), area);
}

fn list_block<'a>(title: String, focused: bool, loading: bool, ticks: u64) -> Block<'a> {
    let border_color = if focused { COLOR_ACCENT } else { COLOR_BORDER };
    let title = if loading {
        format!(" {} {} ", title.trim(), spinner_frame(ticks))
    } else {
        format!(" {} ", title.trim())
    };
    Block::default()
        .borders(Borders::ALL)
        .border_type(BorderType::Rounded)
        .border_style(Style::default().fg(border_color))
        .title(title)
}

fn render_folder_list(frame: &mut Frame, app: &App, area: Rect) {
    let trash = app.nav.view() == ViewMode::Trash;
    let title = if trash {
        format!("Trashed folders ({})", app.listing.folders().len())
    } else {
        format!("Folders ({})", app.listing.folders().len())
    };
    let block = list_block(
        title,
        app.focus == Focus::Folders,
        app.listing.is_loading(),
        app.ticks,
    );

    let width = area.width.saturating_sub(6) as usize;
    let items: Vec<ListItem> = app
        .listing
        .folders()
        .iter()
        .map(|folder| {
            ListItem::new(Line::from(vec![
                Span::styled("🗀 ", Style::default().fg(COLOR_FOLDER)),
                Span::styled(
                    truncate_name(&folder.name, width),
                    Style::default().fg(COLOR_FOLDER),
                ),
            ]))
        })
        .collect();

    if items.is_empty() {
        let empty = if trash { "Trash has no folders" } else { "No folders" };
        frame.render_widget(
            Paragraph::new(Span::styled(empty, Style::default().fg(COLOR_DIM)))
                .block(block)
                .alignment(Alignment::Center),
            area,
        );
        return;
    }

    let mut state = ListState::default();
    if app.focus == Focus::Folders {
        state.select(Some(app.folder_index));
    }
    let list = List::new(items)
        .block(block)
        .highlight_style(Style::default().bg(COLOR_SELECTED_BG).fg(COLOR_ACCENT));
    frame.render_stateful_widget(list, area, &mut state);
}

fn render_file_list(frame: &mut Frame, app: &App, area: Rect) {
    let trash = app.nav.view() == ViewMode::Trash;
    let title = if trash {
        format!("Trashed files ({})", app.listing.files().len())
    } else {
        format!("Files ({})", app.listing.files().len())
    };
    let block = list_block(
        title,
        app.focus == Focus::Files,
        app.listing.is_loading(),
        app.ticks,
    );

    let width = area.width.saturating_sub(6) as usize;
    let items: Vec<ListItem> = app
        .listing
        .files()
        .iter()
        .map(|file| {
            let mut spans = vec![
                Span::styled("• ", Style::default().fg(COLOR_DIM)),
                Span::styled(
                    truncate_name(&file.name, width.saturating_sub(22)),
                    Style::default().fg(COLOR_FILE),
                ),
            ];
            let mut meta = Vec::new();
            if let Some(size) = file.format_size() {
                meta.push(size);
            }
            if let Some(date) = file.format_created() {
                meta.push(date);
            }
            if !meta.is_empty() {
                spans.push(Span::styled(
                    format!("  {}", meta.join(" · ")),
                    Style::default().fg(COLOR_DIM),
                ));
            }
            ListItem::new(Line::from(spans))
        })
        .collect();

    if items.is_empty() {
        let empty = if trash { "Trash has no files" } else { "No files" };
        frame.render_widget(
            Paragraph::new(Span::styled(empty, Style::default().fg(COLOR_DIM)))
                .block(block)
                .alignment(Alignment::Center),
            area,
        );
        return;
    }

    let mut state = ListState::default();
    if app.focus == Focus::Files {
        state.select(Some(app.file_index));
    }
    let list = List::new(items)
        .block(block)
        .highlight_style(Style::default().bg(COLOR_SELECTED_BG).fg(COLOR_ACCENT));
    frame.render_stateful_widget(list, area, &mut state);
}

fn render_notice(frame: &mut Frame, app: &App, area: Rect) {
    let Some(notice) = &app.notice else {
        return;
    };
    let (prefix, color) = if notice.is_error {
        ("✗ ", COLOR_ERROR)
    } else {
        ("✓ ", COLOR_OK)
    };
    let line = Line::from(vec![
        Span::styled(prefix, Style::default().fg(color)),
        Span::styled(notice.text.clone(), Style::default().fg(color)),
        Span::styled("  [Esc] dismiss", Style::default().fg(COLOR_DIM)),
    ]);
    frame.render_widget(Paragraph::new(line), area);
}

fn render_hints(frame: &mut Frame, app: &App, area: Rect) {
    let hints = match app.nav.view() {
        ViewMode::Drive => {
            "[Enter] open/preview  [Bksp] up  [g] root  [n] new folder  [u] upload  [d] download  [x] delete  [t] trash  [/] search  [q] quit"
        }
        ViewMode::Trash => {
            "[r] restore  [x] delete forever  [g] back to drive  [Tab] focus  [/] search  [q] quit"
        }
        ViewMode::Search => {
            "[Enter] open/preview  [d] download  [Esc] back to drive  [Tab] focus  [q] quit"
        }
    };
    frame.render_widget(
        Paragraph::new(Span::styled(hints, Style::default().fg(COLOR_DIM))),
        area,
    );
}
