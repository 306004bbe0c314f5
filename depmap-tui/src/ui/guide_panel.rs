//! Panel 3: Guide, numbered steps for wiring an MT5 account into the bot.

use ratatui::layout::Rect;
use ratatui::text::{Line, Span};
use ratatui::widgets::Paragraph;
use ratatui::Frame;

use depmap_core::data;
use depmap_core::model::{text_runs, GuideStep, StepBody, TextRun};
use depmap_core::Icon;

use crate::app::{App, Panel};
use crate::theme;
use crate::ui::heading;

pub fn render(f: &mut Frame, area: Rect, app: &App) {
    let para = Paragraph::new(lines()).scroll((app.scroll_of(Panel::Guide), 0));
    f.render_widget(para, area);
}

pub fn lines() -> Vec<Line<'static>> {
    let mut lines = vec![heading(Icon::CheckCircle, data::GUIDE_HEADING)];
    for (idx, step) in data::guide().iter().enumerate() {
        lines.push(Line::from(""));
        lines.extend(step_lines(idx + 1, step));
    }
    lines
}

fn step_lines(number: usize, step: &GuideStep) -> Vec<Line<'static>> {
    let mut lines = vec![Line::from(Span::styled(
        format!("{number}. {}", step.title),
        theme::accent_bold(),
    ))];
    match step.body {
        StepBody::Bullets(bullets) => {
            for bullet in bullets {
                lines.push(bullet_line(bullet));
            }
        }
        StepBody::Command(cmd) => {
            lines.push(Line::from(vec![
                Span::raw("   "),
                Span::styled(format!(" $ {cmd} "), theme::code()),
            ]));
        }
    }
    lines
}

fn bullet_line(text: &'static str) -> Line<'static> {
    let mut spans = vec![Span::styled("   • ", theme::muted())];
    for run in text_runs(text) {
        spans.push(match run {
            TextRun::Plain(s) => Span::styled(s, theme::text()),
            TextRun::Code(s) => Span::styled(s, theme::code()),
        });
    }
    Line::from(spans)
}
