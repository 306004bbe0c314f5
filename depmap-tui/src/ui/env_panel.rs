//! Panel 4: `.env` template, shown verbatim in a code block.

use ratatui::layout::Rect;
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Paragraph};
use ratatui::Frame;

use depmap_core::{data, Icon};

use crate::app::{App, Panel};
use crate::theme;

pub fn render(f: &mut Frame, area: Rect, app: &App) {
    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(theme::muted())
        .title(Line::from(vec![
            Span::raw(" "),
            Span::styled(Icon::Lock.glyph(), theme::icon(Icon::Lock)),
            Span::raw(" "),
            Span::styled(data::ENV_HEADING, theme::bold()),
            Span::raw(" "),
        ]))
        .style(theme::code());

    let para = Paragraph::new(lines())
        .block(block)
        .scroll((app.scroll_of(Panel::EnvTemplate), 0));
    f.render_widget(para, area);
}

/// One line per template line. Concatenating the spans of each line and
/// joining with `\n` gives back the template exactly.
pub fn lines() -> Vec<Line<'static>> {
    data::ENV_TEMPLATE.lines().map(template_line).collect()
}

fn template_line(raw: &'static str) -> Line<'static> {
    if raw.starts_with('#') {
        return Line::from(Span::styled(raw, theme::muted()));
    }
    match raw.split_once('=') {
        Some((key, _)) => {
            let value = &raw[key.len()..];
            Line::from(vec![
                Span::styled(key, theme::accent()),
                Span::styled(value, theme::positive()),
            ])
        }
        None => Line::from(Span::styled(raw, theme::positive())),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ui::line_text;

    #[test]
    fn template_roundtrips_byte_for_byte() {
        let rendered: Vec<String> = lines().iter().map(line_text).collect();
        assert_eq!(rendered.join("\n"), data::ENV_TEMPLATE);
    }

    #[test]
    fn key_and_value_are_split_without_loss() {
        let line = template_line("ENVIRONMENT=demo  # demo or live");
        assert_eq!(line.spans[0].content, "ENVIRONMENT");
        assert_eq!(line.spans[1].content, "=demo  # demo or live");
    }

    #[test]
    fn comments_and_blanks_stay_single_span() {
        assert_eq!(template_line("# Risk Management").spans.len(), 1);
        assert_eq!(line_text(&template_line("")), "");
    }
}
