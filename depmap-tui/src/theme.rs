//! Parrot/neon theme tokens for the dependency map TUI
//!
//! Provides a consistent color palette inspired by:
//! - Parrot color scheme (neon accents on dark background)
//! - Terminal aesthetic with high contrast
//!
//! Category cards keep their own accent colors so each card is recognizable
//! at a glance; everything else uses the shared palette.

use ratatui::style::{Color, Modifier, Style};

use depmap_core::{Accent, Icon};

/// Parrot/neon palette
#[derive(Debug, Clone, Copy)]
pub struct Theme {
    /// Electric cyan accent (focus, highlights)
    pub accent: Color,
    /// Neon green (values, success)
    pub positive: Color,
    /// Neon orange (warnings, alerts)
    pub warning: Color,
    /// Cool purple (secondary info)
    pub neutral: Color,
    /// Steel blue (muted text, hints)
    pub muted: Color,
    /// Background of code blocks
    pub code_bg: Color,
    pub text_primary: Color,
    pub text_secondary: Color,
}

impl Default for Theme {
    fn default() -> Self {
        Self::parrot_neon()
    }
}

impl Theme {
    pub const fn parrot_neon() -> Self {
        Self {
            accent: Color::Rgb(0, 255, 255),
            positive: Color::Rgb(0, 255, 128),
            warning: Color::Rgb(255, 140, 0),
            neutral: Color::Rgb(147, 112, 219),
            muted: Color::Rgb(100, 149, 237),
            code_bg: Color::Rgb(30, 30, 36),
            text_primary: Color::White,
            text_secondary: Color::Rgb(170, 170, 170),
        }
    }

    /// Card color for a category token.
    pub fn category_color(&self, accent: Accent) -> Color {
        match accent {
            Accent::Blue => Color::Rgb(59, 130, 246),
            Accent::Green => Color::Rgb(34, 197, 94),
            Accent::Purple => Color::Rgb(168, 85, 247),
            Accent::Orange => Color::Rgb(249, 115, 22),
            Accent::Yellow => Color::Rgb(234, 179, 8),
            Accent::Red => Color::Rgb(239, 68, 68),
        }
    }

    /// Glyph color for an icon.
    pub fn icon_color(&self, icon: Icon) -> Color {
        match icon {
            Icon::Cloud => self.category_color(Accent::Blue),
            Icon::Lock => self.category_color(Accent::Yellow),
            Icon::Zap => self.warning,
            Icon::Database => self.positive,
            Icon::AlertCircle => self.warning,
            Icon::CheckCircle => self.accent,
            Icon::ChevronDown | Icon::ChevronRight => self.text_primary,
        }
    }
}

pub const PALETTE: Theme = Theme::parrot_neon();

pub fn accent() -> Style {
    Style::default().fg(PALETTE.accent)
}

pub fn accent_bold() -> Style {
    accent().add_modifier(Modifier::BOLD)
}

pub fn positive() -> Style {
    Style::default().fg(PALETTE.positive)
}

pub fn warning() -> Style {
    Style::default().fg(PALETTE.warning)
}

pub fn neutral() -> Style {
    Style::default().fg(PALETTE.neutral)
}

pub fn muted() -> Style {
    Style::default().fg(PALETTE.muted)
}

pub fn text() -> Style {
    Style::default().fg(PALETTE.text_primary)
}

pub fn bold() -> Style {
    text().add_modifier(Modifier::BOLD)
}

pub fn secondary() -> Style {
    Style::default().fg(PALETTE.text_secondary)
}

/// Inline code and command blocks.
pub fn code() -> Style {
    positive().bg(PALETTE.code_bg)
}

pub fn icon(icon: Icon) -> Style {
    Style::default().fg(PALETTE.icon_color(icon))
}

/// Card header: bold title in the category color.
pub fn card_header(accent: Accent) -> Style {
    Style::default()
        .fg(PALETTE.category_color(accent))
        .add_modifier(Modifier::BOLD)
}

/// `[type]` badge on item rows.
pub fn type_badge() -> Style {
    secondary().add_modifier(Modifier::DIM)
}

/// Item-count badge on card headers.
pub fn count_badge(accent: Accent) -> Style {
    Style::default()
        .fg(PALETTE.category_color(accent))
        .add_modifier(Modifier::REVERSED)
}

pub fn panel_border(active: bool) -> Style {
    if active {
        accent()
    } else {
        muted()
    }
}

pub fn panel_title(active: bool) -> Style {
    if active {
        accent_bold()
    } else {
        muted()
    }
}
