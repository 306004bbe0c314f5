//! Top-level UI layout: page header, one active panel, status bar.

pub mod components_panel;
pub mod env_panel;
pub mod flow_panel;
pub mod guide_panel;
pub mod header;
pub mod overlays;
pub mod packages_panel;
pub mod status_bar;
pub mod summary_panel;

use ratatui::layout::{Constraint, Direction, Layout, Rect};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders};
use ratatui::Frame;

use depmap_core::Icon;

use crate::app::{App, Overlay, Panel};
use crate::theme;

/// Draw the entire UI.
pub fn draw(f: &mut Frame, app: &App) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(header::HEIGHT),
            Constraint::Min(3),
            Constraint::Length(1),
        ])
        .split(f.area());

    header::render(f, chunks[0]);
    draw_panel(f, chunks[1], app);
    status_bar::render(f, chunks[2], app);

    match app.overlay {
        Overlay::Help => overlays::render_help(f, chunks[1]),
        Overlay::None => {}
    }
}

/// Draw the active panel with its border.
fn draw_panel(f: &mut Frame, area: Rect, app: &App) {
    let panel = app.active_panel;
    let is_active = app.overlay == Overlay::None;

    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(theme::panel_border(is_active))
        .title(format!(" {} [{}] ", panel.label(), panel.index() + 1))
        .title_style(theme::panel_title(is_active));

    let inner = block.inner(area);
    f.render_widget(block, area);

    match panel {
        Panel::Components => components_panel::render(f, inner, app),
        Panel::DataFlow => flow_panel::render(f, inner, app),
        Panel::Guide => guide_panel::render(f, inner, app),
        Panel::EnvTemplate => env_panel::render(f, inner, app),
        Panel::Packages => packages_panel::render(f, inner, app),
        Panel::Summary => summary_panel::render(f, inner, app),
    }
}

/// Number of content lines a panel produces; bounds its scroll offset.
pub fn content_height(app: &App, panel: Panel) -> usize {
    match panel {
        Panel::Components => components_panel::lines(app).len(),
        Panel::DataFlow => flow_panel::lines().len(),
        Panel::Guide => guide_panel::lines().len(),
        Panel::EnvTemplate => env_panel::lines().len(),
        Panel::Packages => packages_panel::lines().len(),
        Panel::Summary => summary_panel::lines().len(),
    }
}

/// `glyph heading` line used at the top of most panels.
pub(crate) fn heading(icon: Icon, title: &'static str) -> Line<'static> {
    Line::from(vec![
        Span::styled(icon.glyph(), theme::icon(icon)),
        Span::raw(" "),
        Span::styled(title, theme::bold()),
    ])
}

/// Compute a centered rect for overlays.
pub fn centered_rect(percent_x: u16, percent_y: u16, area: Rect) -> Rect {
    let popup_layout = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Percentage((100 - percent_y) / 2),
            Constraint::Percentage(percent_y),
            Constraint::Percentage((100 - percent_y) / 2),
        ])
        .split(area);

    Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Percentage((100 - percent_x) / 2),
            Constraint::Percentage(percent_x),
            Constraint::Percentage((100 - percent_x) / 2),
        ])
        .split(popup_layout[1])[1]
}

#[cfg(test)]
pub(crate) fn line_text(line: &Line) -> String {
    line.spans.iter().map(|s| s.content.as_ref()).collect()
}
