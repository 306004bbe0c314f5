//! Panel 1: Components, collapsible category cards.
//!
//! Card headers are always drawn; item rows only while the card is
//! expanded. The cursor row is highlighted and Enter toggles it.

use ratatui::layout::Rect;
use ratatui::style::Modifier;
use ratatui::text::{Line, Span};
use ratatui::widgets::Paragraph;
use ratatui::Frame;

use depmap_core::{data, Category, Icon, Item};

use crate::app::{App, Overlay, Panel};
use crate::theme;
use crate::ui::heading;

/// Heading line plus the blank line under it.
const LEAD_LINES: usize = 2;
/// Each item takes a name row and a detail row.
const LINES_PER_ITEM: usize = 2;

pub fn render(f: &mut Frame, area: Rect, app: &App) {
    let lines = lines(app);
    let scroll = scroll_for_cursor(app, usize::from(area.height));
    let para = Paragraph::new(lines).scroll((scroll, 0));
    f.render_widget(para, area);
}

pub fn lines(app: &App) -> Vec<Line<'static>> {
    let focused = app.active_panel == Panel::Components && app.overlay == Overlay::None;
    let mut lines = vec![
        heading(Icon::AlertCircle, data::COMPONENTS_HEADING),
        Line::from(""),
    ];

    for (idx, category) in data::categories().iter().enumerate() {
        let expanded = app.expansion.is_expanded(category.key);
        lines.push(header_line(category, expanded, focused && idx == app.cursor));
        if expanded {
            for item in category.items {
                lines.extend(item_lines(item));
            }
        }
        lines.push(Line::from(""));
    }
    lines
}

/// Always-visible card header: chevron, title, item-count badge.
pub fn header_line(category: &Category, expanded: bool, is_cursor: bool) -> Line<'static> {
    let chevron = Icon::chevron(expanded);
    let title_style = if is_cursor {
        theme::card_header(category.color).add_modifier(Modifier::REVERSED)
    } else {
        theme::card_header(category.color)
    };
    Line::from(vec![
        Span::styled(chevron.glyph(), title_style),
        Span::styled(" ", title_style),
        Span::styled(category.title, title_style),
        Span::raw("  "),
        Span::styled(format!(" {} ", category.badge()), theme::count_badge(category.color)),
    ])
}

/// Name row (with optional type icon) and detail row (type badge, deps).
pub fn item_lines(item: &Item) -> [Line<'static>; 2] {
    let mut name = vec![Span::raw("    ")];
    if let Some(icon) = Icon::for_item_type(item.item_type) {
        name.push(Span::styled(icon.glyph(), theme::icon(icon)));
        name.push(Span::raw(" "));
    }
    name.push(Span::styled(item.name, theme::bold()));

    let mut detail = vec![
        Span::raw("      "),
        Span::styled(format!("[{}]", item.item_type), theme::type_badge()),
    ];
    if let Some(deps) = item.depends_on() {
        detail.push(Span::raw("  "));
        detail.push(Span::styled(format!("Depends on: {deps}"), theme::secondary()));
    }

    [Line::from(name), Line::from(detail)]
}

/// Line index of the cursor's card header within [`lines`].
pub fn cursor_line(app: &App) -> usize {
    let mut line = LEAD_LINES;
    for category in data::categories().iter().take(app.cursor) {
        line += card_height(app, category);
    }
    line
}

/// Lines taken by one card, including the trailing blank.
fn card_height(app: &App, category: &Category) -> usize {
    let body = if app.expansion.is_expanded(category.key) {
        category.items.len() * LINES_PER_ITEM
    } else {
        0
    };
    1 + body + 1
}

/// Smallest scroll that shows as much of the cursor's card as fits, header first.
fn scroll_for_cursor(app: &App, height: usize) -> u16 {
    if height == 0 {
        return 0;
    }
    let start = cursor_line(app);
    let category = data::category(app.selected_key());
    let end = start + card_height(app, category);
    let scroll = if end <= height {
        0
    } else {
        start.min(end - height)
    };
    u16::try_from(scroll).unwrap_or(u16::MAX)
}
