//! Input field component
//!
//! A single-line text input with a label, focus handling, password masking,
//! and an optional inline error below the box.

use ratatui::{
    layout::Rect,
    style::Style,
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, Paragraph},
    Frame,
};

use crate::ui::theme::{COLOR_ACCENT, COLOR_BORDER, COLOR_DIM, COLOR_ERROR, COLOR_INPUT_BG};

/// Configuration for rendering an input field
#[derive(Debug, Clone)]
pub struct InputFieldConfig<'a> {
    /// Label displayed above the input
    pub label: &'a str,
    /// Current value of the input
    pub value: &'a str,
    /// Whether the input is currently focused
    pub focused: bool,
    /// Whether to mask the value (for passwords)
    pub is_password: bool,
    /// Optional error message to display below the input
    pub error: Option<&'a str>,
    /// Optional placeholder text when empty
    pub placeholder: Option<&'a str>,
}

impl<'a> InputFieldConfig<'a> {
    pub fn new(label: &'a str, value: &'a str) -> Self {
        Self {
            label,
            value,
            focused: false,
            is_password: false,
            error: None,
            placeholder: None,
        }
    }

    pub fn focused(mut self, focused: bool) -> Self {
        self.focused = focused;
        self
    }

    pub fn password(mut self, is_password: bool) -> Self {
        self.is_password = is_password;
        self
    }

    pub fn error(mut self, error: Option<&'a str>) -> Self {
        self.error = error;
        self
    }

    pub fn placeholder(mut self, placeholder: &'a str) -> Self {
        self.placeholder = Some(placeholder);
        self
    }
}

/// Rows an input field occupies: label (1) + bordered box (3) + error (0/1).
pub fn input_field_height(config: &InputFieldConfig) -> u16 {
    if config.error.is_some() {
        5
    } else {
        4
    }
}

/// Render an input field with label, bordered box, and optional error.
pub fn render_input_field(frame: &mut Frame, area: Rect, config: &InputFieldConfig) {
    let label_style = if config.focused {
        Style::default().fg(COLOR_ACCENT)
    } else {
        Style::default().fg(COLOR_DIM)
    };
    let label_area = Rect {
        x: area.x,
        y: area.y,
        width: area.width,
        height: 1,
    };
    frame.render_widget(
        Paragraph::new(Line::from(Span::styled(config.label, label_style))),
        label_area,
    );

    let border_color = if config.focused {
        COLOR_ACCENT
    } else {
        COLOR_BORDER
    };
    let block = Block::default()
        .borders(Borders::ALL)
        .border_type(BorderType::Rounded)
        .border_style(Style::default().fg(border_color))
        .style(Style::default().bg(COLOR_INPUT_BG));

    let showing_placeholder = config.value.is_empty() && config.placeholder.is_some();
    let mut display_value = if config.is_password {
        "\u{2022}".repeat(config.value.chars().count())
    } else if showing_placeholder {
        config.placeholder.unwrap_or_default().to_string()
    } else {
        config.value.to_string()
    };
    if config.focused && !showing_placeholder {
        display_value.push('\u{2588}');
    }

    let text_style = if showing_placeholder {
        Style::default().fg(COLOR_DIM)
    } else if config.focused {
        Style::default().fg(COLOR_ACCENT)
    } else {
        Style::default().fg(COLOR_DIM)
    };

    let input_area = Rect {
        x: area.x,
        y: area.y + 1,
        width: area.width,
        height: 3,
    };
    frame.render_widget(
        Paragraph::new(Line::from(Span::styled(display_value, text_style))).block(block),
        input_area,
    );

    if let Some(error) = config.error {
        let error_area = Rect {
            x: area.x,
            y: area.y + 4,
            width: area.width,
            height: 1,
        };
        frame.render_widget(
            Paragraph::new(Line::from(vec![
                Span::styled("\u{2717} ", Style::default().fg(COLOR_ERROR)),
                Span::styled(error, Style::default().fg(COLOR_ERROR)),
            ])),
            error_area,
        );
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_config_builder() {
        let config = InputFieldConfig::new("Password", "secret")
            .focused(true)
            .password(true)
            .error(Some("Invalid"))
            .placeholder("Enter password");

        assert!(config.focused);
        assert!(config.is_password);
        assert_eq!(config.error, Some("Invalid"));
        assert_eq!(config.placeholder, Some("Enter password"));
    }

    #[test]
    fn test_height_without_error() {
        let config = InputFieldConfig::new("Email", "a@b.com");
        assert_eq!(input_field_height(&config), 4);
    }

    #[test]
    fn test_height_with_error() {
        let config = InputFieldConfig::new("Email", "").error(Some("Required"));
        assert_eq!(input_field_height(&config), 5);
    }
}
