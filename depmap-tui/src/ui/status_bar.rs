//! Bottom status bar: panel hints and the last status message.

use ratatui::layout::Rect;
use ratatui::text::{Line, Span};
use ratatui::widgets::Paragraph;
use ratatui::Frame;

use crate::app::{App, StatusLevel};
use crate::theme;

pub fn render(f: &mut Frame, area: Rect, app: &App) {
    f.render_widget(Paragraph::new(line(app)), area);
}

pub fn line(app: &App) -> Line<'static> {
    let mut spans: Vec<Span<'static>> = vec![Span::styled(
        " 1:Components 2:Flow 3:Guide 4:.env 5:Packages 6:Summary ?:Help",
        theme::muted(),
    )];

    if let Some((msg, level)) = &app.status_message {
        spans.push(Span::raw(" | "));
        let style = match level {
            StatusLevel::Info => theme::accent(),
            StatusLevel::Warning => theme::warning(),
        };
        spans.push(Span::styled(msg.clone(), style));
    }

    Line::from(spans)
}
