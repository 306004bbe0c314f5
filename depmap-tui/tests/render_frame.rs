use crossterm::event::{KeyCode, KeyEvent};
use ratatui::backend::TestBackend;
use ratatui::Terminal;

use depmap_core::data;
use depmap_tui::{handle_key, ui, App, Panel};

fn frame_rows(app: &App) -> Vec<String> {
    let mut terminal = Terminal::new(TestBackend::new(110, 60)).unwrap();
    terminal.draw(|f| ui::draw(f, app)).unwrap();
    let buffer = terminal.backend().buffer().clone();
    let area = buffer.area;
    (0..area.height)
        .map(|y| {
            (0..area.width)
                .map(|x| buffer[(x, y)].symbol().to_string())
                .collect::<String>()
        })
        .collect()
}

fn press(app: &mut App, code: KeyCode) {
    handle_key(app, KeyEvent::from(code));
}

#[test]
fn collapse_mt5_hides_items_but_keeps_header() {
    let mut app = App::default();
    let rows = frame_rows(&app);
    assert!(rows.iter().any(|r| r.contains("MT5 Terminal")));
    assert!(rows.iter().any(|r| r.contains("Demo Account")));

    // Cursor starts on Core; move to MT5 and toggle it.
    press(&mut app, KeyCode::Down);
    press(&mut app, KeyCode::Enter);

    let rows = frame_rows(&app);
    assert!(!rows.iter().any(|r| r.contains("MT5 Terminal")));
    assert!(!rows.iter().any(|r| r.contains("Broker credentials")));
    let header = rows
        .iter()
        .find(|r| r.contains("MetaTrader 5 Integration"))
        .expect("mt5 header stays visible");
    assert!(header.contains("4 items"));
    assert!(header.contains('▸'));

    press(&mut app, KeyCode::Enter);
    let rows = frame_rows(&app);
    assert!(rows.iter().any(|r| r.contains("MT5 Terminal")));
    let header = rows
        .iter()
        .find(|r| r.contains("MetaTrader 5 Integration"))
        .unwrap();
    assert!(header.contains('▾'));
}

#[test]
fn header_and_status_bar_are_always_drawn() {
    let mut app = App::default();
    for panel in 0..Panel::COUNT {
        app.switch_panel(Panel::from_index(panel).unwrap());
        let rows = frame_rows(&app);
        assert!(rows[0].contains(data::PAGE_TITLE));
        assert!(rows.last().unwrap().contains("1:Components"));
    }
}

#[test]
fn env_panel_shows_template_lines() {
    let mut app = App::default();
    press(&mut app, KeyCode::Char('4'));
    let rows = frame_rows(&app);
    assert!(rows.iter().any(|r| r.contains(".env File Structure")));
    for line in data::ENV_TEMPLATE.lines().filter(|l| !l.is_empty()) {
        assert!(rows.iter().any(|r| r.contains(line)), "missing {line}");
    }
}

#[test]
fn flow_panel_keeps_edge_order() {
    let mut app = App::default();
    press(&mut app, KeyCode::Char('2'));
    let rows = frame_rows(&app);
    let positions: Vec<usize> = data::flows()
        .iter()
        .map(|edge| {
            rows.iter()
                .position(|r| r.contains(edge.label))
                .unwrap_or_else(|| panic!("missing edge {}", edge.label))
        })
        .collect();
    assert!(positions.windows(2).all(|w| w[0] < w[1]));
}

#[test]
fn help_overlay_lists_bindings() {
    let mut app = App::default();
    press(&mut app, KeyCode::Char('?'));
    let rows = frame_rows(&app);
    assert!(rows.iter().any(|r| r.contains("Key Bindings")));
    assert!(rows.iter().any(|r| r.contains("Collapse all categories")));
}
