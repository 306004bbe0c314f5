//! Panel 6: Summary, the upgrade checklist.

use ratatui::layout::Rect;
use ratatui::text::{Line, Span};
use ratatui::widgets::{Paragraph, Wrap};
use ratatui::Frame;

use depmap_core::{data, Icon};

use crate::app::{App, Panel};
use crate::theme;

pub fn render(f: &mut Frame, area: Rect, app: &App) {
    let para = Paragraph::new(lines())
        .wrap(Wrap { trim: false })
        .scroll((app.scroll_of(Panel::Summary), 0));
    f.render_widget(para, area);
}

pub fn lines() -> Vec<Line<'static>> {
    let mut lines = vec![
        Line::from(vec![
            Span::styled(Icon::AlertCircle.glyph(), theme::icon(Icon::AlertCircle)),
            Span::raw(" "),
            Span::styled(data::SUMMARY_HEADING, theme::warning()),
        ]),
        Line::from(""),
    ];
    for point in data::summary() {
        lines.push(Line::from(vec![
            Span::styled("  ✅ ", theme::positive()),
            Span::styled(format!("{}:", point.label), theme::bold()),
            Span::raw(" "),
            Span::styled(point.text, theme::text()),
        ]));
    }
    lines
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ui::line_text;

    #[test]
    fn every_point_is_labeled() {
        let text: Vec<String> = lines().iter().map(line_text).collect();
        assert_eq!(text.len(), 2 + data::summary().len());
        assert_eq!(text[2], "  ✅ Multi-pair: Bot akan trade SEMUA pairs yang tersedia di broker");
        assert_eq!(text[7], "  ✅ .env Config: Credentials tersimpan aman di .env file");
    }
}
