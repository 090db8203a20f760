//! Color theme constants for the CloudVault UI
//!
//! Defines the minimal dark color palette used throughout the UI.

use ratatui::style::Color;

/// Primary border color - dark gray for minimal aesthetic
pub const COLOR_BORDER: Color = Color::DarkGray;

/// Accent color - white for highlights and focused elements
pub const COLOR_ACCENT: Color = Color::White;

/// Header/title color
pub const COLOR_HEADER: Color = Color::Cyan;

/// Dim text for less important info
pub const COLOR_DIM: Color = Color::DarkGray;

/// Folder entries
pub const COLOR_FOLDER: Color = Color::LightBlue;

/// File entries
pub const COLOR_FILE: Color = Color::Gray;

/// Selection highlight background
pub const COLOR_SELECTED_BG: Color = Color::Rgb(40, 40, 55);

/// Background for input areas
pub const COLOR_INPUT_BG: Color = Color::Rgb(20, 20, 30);

/// Success notices
pub const COLOR_OK: Color = Color::LightGreen;

/// Error notices and destructive prompts
pub const COLOR_ERROR: Color = Color::Red;
