//! Panel 2: Data Flow, one `source ── label ──→ destination` row per edge.

use ratatui::layout::Rect;
use ratatui::text::{Line, Span};
use ratatui::widgets::Paragraph;
use ratatui::Frame;

use depmap_core::{data, FlowEdge, Icon};

use crate::app::{App, Panel};
use crate::theme;
use crate::ui::heading;

pub fn render(f: &mut Frame, area: Rect, app: &App) {
    let para = Paragraph::new(lines()).scroll((app.scroll_of(Panel::DataFlow), 0));
    f.render_widget(para, area);
}

pub fn lines() -> Vec<Line<'static>> {
    let flows = data::flows();
    let from_width = column_width(flows.iter().map(|e| e.from));
    let label_width = column_width(flows.iter().map(|e| e.label));

    let mut lines = vec![heading(Icon::Zap, data::FLOW_HEADING), Line::from("")];
    for edge in flows {
        lines.push(edge_line(edge, from_width, label_width));
    }
    lines
}

/// Edges are free text; nothing is looked up or validated.
pub fn edge_line(edge: &FlowEdge, from_width: usize, label_width: usize) -> Line<'static> {
    Line::from(vec![
        Span::styled(format!(" {:<from_width$} ", edge.from), theme::accent()),
        Span::styled(" ── ", theme::muted()),
        Span::styled(format!("{:^label_width$}", edge.label), theme::secondary()),
        Span::styled(" ──→ ", theme::muted()),
        Span::styled(format!(" {} ", edge.to), theme::positive()),
    ])
}

fn column_width<'a>(cells: impl Iterator<Item = &'a str>) -> usize {
    cells.map(|c| c.chars().count()).max().unwrap_or(0)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ui::line_text;

    #[test]
    fn rows_follow_declared_order() {
        let rows: Vec<String> = lines().iter().skip(2).map(line_text).collect();
        assert_eq!(rows.len(), data::flows().len());
        for (row, edge) in rows.iter().zip(data::flows()) {
            let from = row.find(edge.from).unwrap();
            let label = row.find(edge.label).unwrap();
            let to = row.rfind(edge.to).unwrap();
            assert!(from < label && label < to, "{row}");
        }
    }

    #[test]
    fn first_row_before_second() {
        let text: Vec<String> = lines().iter().map(line_text).collect();
        let a = text.iter().position(|l| l.contains("Telegram News")).unwrap();
        let b = text.iter().position(|l| l.contains("Sentiment Score")).unwrap();
        assert!(a < b);
    }

    #[test]
    fn edge_line_pads_columns() {
        let edge = FlowEdge {
            from: "A",
            to: "B",
            label: "x",
        };
        assert_eq!(line_text(&edge_line(&edge, 3, 3)), " A    ──  x  ──→  B ");
    }
}
