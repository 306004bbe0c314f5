//! Panel 5: Packages, two-column grid of package and purpose.

use ratatui::layout::Rect;
use ratatui::text::{Line, Span};
use ratatui::widgets::Paragraph;
use ratatui::Frame;

use depmap_core::model::Package;
use depmap_core::{data, Icon};

use crate::app::{App, Panel};
use crate::theme;
use crate::ui::heading;

const COLUMNS: usize = 2;

pub fn render(f: &mut Frame, area: Rect, app: &App) {
    let para = Paragraph::new(lines()).scroll((app.scroll_of(Panel::Packages), 0));
    f.render_widget(para, area);
}

pub fn lines() -> Vec<Line<'static>> {
    let packages = data::packages();
    let width = packages
        .iter()
        .flat_map(|p| [p.name.chars().count(), p.purpose.chars().count()])
        .max()
        .unwrap_or(0)
        + 4;

    let mut lines = vec![heading(Icon::Database, data::PACKAGES_HEADING)];
    for row in packages.chunks(COLUMNS) {
        lines.push(Line::from(""));
        lines.push(row_line(row, width, |p| p.name, theme::positive()));
        lines.push(row_line(row, width, |p| p.purpose, theme::secondary()));
    }
    lines
}

fn row_line(
    row: &[Package],
    width: usize,
    field: impl Fn(&Package) -> &'static str,
    style: ratatui::style::Style,
) -> Line<'static> {
    let spans: Vec<Span<'static>> = row
        .iter()
        .map(|p| Span::styled(format!("  {:<width$}", field(p)), style))
        .collect();
    Line::from(spans)
}
