//! Modal overlays: input prompts and confirmation dialogs.

use ratatui::{
    prelude::*,
    widgets::{Block, BorderType, Borders, Clear, Paragraph, Wrap},
};

use crate::app::{App, Modal, PendingAction};

use super::components::{render_input_field, InputFieldConfig};
use super::helpers::centered_rect;
use super::theme::{COLOR_ACCENT, COLOR_BORDER, COLOR_DIM, COLOR_ERROR};

pub fn render_modal(frame: &mut Frame, app: &App) {
    let Some(modal) = &app.modal else {
        return;
    };

    match modal {
        Modal::CreateFolder { input } => {
            render_input_modal(frame, "New folder", "Name", input, "Quarterly reports")
        }
        Modal::Upload { input } => {
            render_input_modal(frame, "Upload file", "Local path", input, "/path/to/file.pdf")
        }
        Modal::Search { input } => {
            render_input_modal(frame, "Search", "Name contains", input, "report")
        }
        Modal::Confirm { prompt, action } => render_confirm_modal(frame, prompt, action),
    }
}

fn render_input_modal(
    frame: &mut Frame,
    title: &str,
    label: &str,
    value: &str,
    placeholder: &str,
) {
    let area = centered_rect(50, 9, frame.area());
    frame.render_widget(Clear, area);

    let block = Block::default()
        .borders(Borders::ALL)
        .border_type(BorderType::Rounded)
        .border_style(Style::default().fg(COLOR_ACCENT))
        .title(format!(" {} ", title));
    let inner = block.inner(area);
    frame.render_widget(block, area);

    let field_area = Rect::new(inner.x + 1, inner.y + 1, inner.width.saturating_sub(2), 4);
    render_input_field(
        frame,
        field_area,
        &InputFieldConfig::new(label, value)
            .focused(true)
            .placeholder(placeholder),
    );

    let hint_area = Rect::new(inner.x + 1, inner.y + 5, inner.width.saturating_sub(2), 1);
    frame.render_widget(
        Paragraph::new(Span::styled(
            "[Enter] confirm  [Esc] cancel",
            Style::default().fg(COLOR_DIM),
        )),
        hint_area,
    );
}

fn render_confirm_modal(frame: &mut Frame, prompt: &str, action: &PendingAction) {
    let area = centered_rect(54, 8, frame.area());
    frame.render_widget(Clear, area);

    // Permanent deletion gets the alarming border.
    let destructive = matches!(
        action,
        PendingAction::PurgeFolder { .. } | PendingAction::PurgeFile { .. }
    );
    let border_color = if destructive { COLOR_ERROR } else { COLOR_BORDER };
    let title = if destructive { " Delete forever " } else { " Confirm " };

    let block = Block::default()
        .borders(Borders::ALL)
        .border_type(BorderType::Rounded)
        .border_style(Style::default().fg(border_color))
        .title(title);
    let inner = block.inner(area);
    frame.render_widget(block, area);

    let prompt_area = Rect::new(inner.x + 1, inner.y + 1, inner.width.saturating_sub(2), 3);
    frame.render_widget(
        Paragraph::new(prompt.to_string())
            .wrap(Wrap { trim: true })
            .alignment(Alignment::Center),
        prompt_area,
    );

    let hint_area = Rect::new(inner.x + 1, inner.y + 4, inner.width.saturating_sub(2), 1);
    frame.render_widget(
        Paragraph::new(Line::from(vec![
            Span::styled("[y] yes", Style::default().fg(if destructive { COLOR_ERROR } else { COLOR_ACCENT })),
            Span::styled("   [n] no", Style::default().fg(COLOR_DIM)),
        ]))
        .alignment(Alignment::Center),
        hint_area,
    );
}
