//! Modal overlays drawn on top of the active panel.

use ratatui::layout::Rect;
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Clear, Paragraph};
use ratatui::Frame;

use crate::input::key_bindings_help;
use crate::theme;
use crate::ui::centered_rect;

pub fn render_help(f: &mut Frame, area: Rect) {
    let popup = centered_rect(70, 80, area);
    f.render_widget(Clear, popup);

    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(theme::accent())
        .title(" Key Bindings ")
        .title_style(theme::accent_bold());

    let para = Paragraph::new(help_lines()).block(block);
    f.render_widget(para, popup);
}

pub fn help_lines() -> Vec<Line<'static>> {
    let mut lines: Vec<Line<'static>> = key_bindings_help()
        .into_iter()
        .map(|(keys, desc)| {
            Line::from(vec![
                Span::styled(format!("  {keys:>18}  "), theme::accent()),
                Span::styled(desc, theme::muted()),
            ])
        })
        .collect();
    lines.push(Line::from(""));
    lines.push(Line::from(Span::styled(
        "  Press any key to close",
        theme::secondary(),
    )));
    lines
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ui::line_text;

    #[test]
    fn lists_every_binding() {
        let lines = help_lines();
        assert_eq!(lines.len(), key_bindings_help().len() + 2);
        assert!(line_text(&lines[0]).contains("q / Ctrl+C"));
    }
}
