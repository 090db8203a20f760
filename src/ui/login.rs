//! Login screen: sign-in and register tabs over the same two fields.

use ratatui::{
    prelude::*,
    widgets::{Block, BorderType, Borders, Paragraph},
};

use crate::app::{App, LoginField, LoginTab};

use super::components::{render_input_field, InputFieldConfig};
use super::helpers::{centered_rect, spinner_frame};
use super::theme::{COLOR_ACCENT, COLOR_BORDER, COLOR_DIM, COLOR_ERROR, COLOR_HEADER, COLOR_OK};

pub fn render_login_screen(frame: &mut Frame, app: &App) {
    let area = frame.area();

    let outer_block = Block::default()
        .borders(Borders::ALL)
        .border_type(BorderType::Double)
        .border_style(Style::default().fg(COLOR_BORDER));
    frame.render_widget(outer_block, area);

    let dialog = centered_rect(52, 20, area);

    // Title
    let title_area = Rect::new(dialog.x, dialog.y, dialog.width, 2);
    let title = Paragraph::new(vec![
        Line::from(Span::styled(
            "☁  CloudVault",
            Style::default().fg(COLOR_HEADER).bold(),
        )),
        Line::from(Span::styled(
            "file storage in your terminal",
            Style::default().fg(COLOR_DIM),
        )),
    ])
    .alignment(Alignment::Center);
    frame.render_widget(title, title_area);

    // Tabs
    let form = &app.login_form;
    let tab_style = |active: bool| {
        if active {
            Style::default().fg(COLOR_ACCENT).bold()
        } else {
            Style::default().fg(COLOR_DIM)
        }
    };
    let tabs = Paragraph::new(Line::from(vec![
        Span::styled(" Sign in ", tab_style(form.tab == LoginTab::SignIn)),
        Span::styled("  ", Style::default()),
        Span::styled(" Register ", tab_style(form.tab == LoginTab::Register)),
    ]))
    .alignment(Alignment::Center);
    frame.render_widget(tabs, Rect::new(dialog.x, dialog.y + 3, dialog.width, 1));

    // Fields
    let email_area = Rect::new(dialog.x + 2, dialog.y + 5, dialog.width - 4, 4);
    render_input_field(
        frame,
        email_area,
        &InputFieldConfig::new("Email", &form.email)
            .focused(form.field == LoginField::Email && !form.busy)
            .placeholder("you@example.com"),
    );

    let password_area = Rect::new(dialog.x + 2, dialog.y + 9, dialog.width - 4, 4);
    render_input_field(
        frame,
        password_area,
        &InputFieldConfig::new("Password", &form.password)
            .focused(form.field == LoginField::Password && !form.busy)
            .password(true),
    );

    // Status line: busy spinner, error, or info.
    let status_area = Rect::new(dialog.x + 2, dialog.y + 14, dialog.width - 4, 1);
    let status = if form.busy {
        let verb = match form.tab {
            LoginTab::SignIn => "Signing in",
            LoginTab::Register => "Creating account",
        };
        Line::from(Span::styled(
            format!("{} {}...", spinner_frame(app.ticks), verb),
            Style::default().fg(COLOR_DIM),
        ))
    } else if let Some(error) = &form.error {
        Line::from(Span::styled(
            format!("✗ {}", error),
            Style::default().fg(COLOR_ERROR),
        ))
    } else if let Some(info) = &form.info {
        Line::from(Span::styled(
            format!("✓ {}", info),
            Style::default().fg(COLOR_OK),
        ))
    } else {
        Line::from("")
    };
    frame.render_widget(Paragraph::new(status).alignment(Alignment::Center), status_area);

    // Keybind hints
    let hints = Paragraph::new(Line::from(Span::styled(
        "[Enter] submit  [Tab] fields  [←/→] tabs  [Esc] quit",
        Style::default().fg(COLOR_DIM),
    )))
    .alignment(Alignment::Center);
    frame.render_widget(hints, Rect::new(dialog.x, dialog.y + 16, dialog.width, 1));
}
