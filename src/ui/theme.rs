//! Color theme constants for the titledesk UI.
//!
//! Defines the minimal dark color palette used throughout the UI.

use ratatui::style::Color;

/// Primary border color - dark gray for minimal aesthetic
pub const COLOR_BORDER: Color = Color::DarkGray;

/// Accent color - white for highlights and important elements
pub const COLOR_ACCENT: Color = Color::White;

/// Header text color
pub const COLOR_HEADER: Color = Color::White;

/// Focused input borders and selected rows
pub const COLOR_FOCUS: Color = Color::Cyan;

/// Dim text for less important info
pub const COLOR_DIM: Color = Color::DarkGray;

/// Success states - uploads done, completed reports
pub const COLOR_SUCCESS: Color = Color::LightGreen;

/// Pending/processing states
pub const COLOR_PENDING: Color = Color::Yellow;

/// Errors - failed uploads, failed reports, error notices
pub const COLOR_ERROR: Color = Color::Red;

/// Key hints in the footer
pub const COLOR_HINT: Color = Color::Gray;
