//! Page header: title, subtitle, feature badges.

use ratatui::layout::{Alignment, Rect};
use ratatui::text::{Line, Span};
use ratatui::widgets::Paragraph;
use ratatui::Frame;

use depmap_core::data;

use crate::theme;

pub const HEIGHT: u16 = 3;

pub fn render(f: &mut Frame, area: Rect) {
    let para = Paragraph::new(lines()).alignment(Alignment::Center);
    f.render_widget(para, area);
}

pub fn lines() -> Vec<Line<'static>> {
    let mut badges: Vec<Span<'static>> = Vec::new();
    for (i, badge) in data::FEATURE_BADGES.iter().enumerate() {
        if i > 0 {
            badges.push(Span::raw("  "));
        }
        badges.push(Span::styled(format!(" ✅ {badge} "), theme::neutral()));
    }

    vec![
        Line::from(Span::styled(data::PAGE_TITLE, theme::accent_bold())),
        Line::from(Span::styled(data::PAGE_SUBTITLE, theme::muted())),
        Line::from(badges),
    ]
}
