//! Keyboard input dispatch: overlays → global keys → panel-specific handlers.

use crossterm::event::{KeyCode, KeyEvent, KeyEventKind, KeyModifiers};

use crate::app::{App, Overlay, Panel};
use crate::ui;

/// Handle a key event.
pub fn handle_key(app: &mut App, key: KeyEvent) {
    // Only handle key press events (Windows sends both Press and Release).
    if key.kind != KeyEventKind::Press {
        return;
    }

    // 1. Overlays consume input first.
    if app.overlay == Overlay::Help {
        app.overlay = Overlay::None;
        return;
    }

    // 2. Global keys (always available).
    match key.code {
        KeyCode::Char('c') if key.modifiers.contains(KeyModifiers::CONTROL) => {
            app.quit();
            return;
        }
        KeyCode::Char('q') => {
            app.quit();
            return;
        }
        KeyCode::Char('?') => {
            app.overlay = Overlay::Help;
            return;
        }
        KeyCode::Char(c @ '1'..='6') => {
            let idx = c as usize - '1' as usize;
            if let Some(panel) = Panel::from_index(idx) {
                app.switch_panel(panel);
            }
            return;
        }
        KeyCode::Tab => {
            if key.modifiers.contains(KeyModifiers::SHIFT) {
                app.switch_panel(app.active_panel.prev());
            } else {
                app.switch_panel(app.active_panel.next());
            }
            return;
        }
        KeyCode::BackTab => {
            app.switch_panel(app.active_panel.prev());
            return;
        }
        _ => {}
    }

    // 3. Panel-specific keys.
    match app.active_panel {
        Panel::Components => handle_components_key(app, key),
        panel => handle_scroll_key(app, key, panel),
    }
}

fn handle_components_key(app: &mut App, key: KeyEvent) {
    match key.code {
        KeyCode::Char('j') | KeyCode::Down => app.cursor_down(),
        KeyCode::Char('k') | KeyCode::Up => app.cursor_up(),
        KeyCode::Enter | KeyCode::Char(' ') => app.toggle_selected(),
        KeyCode::Char('l') | KeyCode::Right => app.expand_selected(),
        KeyCode::Char('h') | KeyCode::Left => app.collapse_selected(),
        KeyCode::Char('E') => app.expand_all(),
        KeyCode::Char('C') => app.collapse_all(),
        _ => {}
    }
}

fn handle_scroll_key(app: &mut App, key: KeyEvent, panel: Panel) {
    match key.code {
        KeyCode::Char('j') | KeyCode::Down => {
            let height = ui::content_height(app, panel);
            app.scroll_down(height);
        }
        KeyCode::Char('k') | KeyCode::Up => app.scroll_up(),
        _ => {}
    }
}

/// Key bindings help text
pub fn key_bindings_help() -> Vec<(&'static str, &'static str)> {
    vec![
        ("q / Ctrl+C", "Quit"),
        ("1-6", "Switch to panel by number"),
        ("Tab / Shift+Tab", "Cycle panels forward / back"),
        ("?", "Show this help"),
        ("↑/k, ↓/j", "Move cursor (Components) or scroll"),
        ("Enter / Space", "Toggle selected category"),
        ("l / →", "Expand selected category"),
        ("h / ←", "Collapse selected category"),
        ("E", "Expand all categories"),
        ("C", "Collapse all categories"),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;
    use depmap_core::CategoryKey;

    fn press(app: &mut App, code: KeyCode) {
        handle_key(app, KeyEvent::from(code));
    }

    #[test]
    fn test_quit_on_q() {
        let mut app = App::default();
        press(&mut app, KeyCode::Char('q'));
        assert!(!app.running);
    }

    #[test]
    fn test_quit_on_ctrl_c() {
        let mut app = App::default();
        handle_key(
            &mut app,
            KeyEvent::new(KeyCode::Char('c'), KeyModifiers::CONTROL),
        );
        assert!(!app.running);
    }

    #[test]
    fn test_release_events_are_ignored() {
        let mut app = App::default();
        let mut key = KeyEvent::from(KeyCode::Char('q'));
        key.kind = KeyEventKind::Release;
        handle_key(&mut app, key);
        assert!(app.running);
    }

    #[test]
    fn test_enter_toggles_cursor_category() {
        let mut app = App::default();
        press(&mut app, KeyCode::Char('j'));
        assert_eq!(app.selected_key(), CategoryKey::Mt5);

        press(&mut app, KeyCode::Enter);
        assert!(!app.expansion.is_expanded(CategoryKey::Mt5));
        for other in CategoryKey::ALL.into_iter().filter(|k| *k != CategoryKey::Mt5) {
            assert!(app.expansion.is_expanded(other));
        }

        press(&mut app, KeyCode::Char(' '));
        assert!(app.expansion.is_expanded(CategoryKey::Mt5));
    }

    #[test]
    fn test_expand_collapse_keys() {
        let mut app = App::default();
        press(&mut app, KeyCode::Char('h'));
        assert!(!app.expansion.is_expanded(CategoryKey::Core));
        press(&mut app, KeyCode::Char('l'));
        assert!(app.expansion.is_expanded(CategoryKey::Core));

        press(&mut app, KeyCode::Char('C'));
        assert_eq!(app.expansion.expanded_count(), 0);
        press(&mut app, KeyCode::Char('E'));
        assert_eq!(app.expansion.expanded_count(), CategoryKey::COUNT);
    }

    #[test]
    fn test_panel_switching() {
        let mut app = App::default();
        press(&mut app, KeyCode::Char('4'));
        assert_eq!(app.active_panel, Panel::EnvTemplate);
        press(&mut app, KeyCode::Tab);
        assert_eq!(app.active_panel, Panel::Packages);
        press(&mut app, KeyCode::BackTab);
        press(&mut app, KeyCode::BackTab);
        assert_eq!(app.active_panel, Panel::Guide);
        press(&mut app, KeyCode::Char('6'));
        press(&mut app, KeyCode::Tab);
        assert_eq!(app.active_panel, Panel::Components);
    }

    #[test]
    fn test_toggle_keys_do_nothing_outside_components() {
        let mut app = App::default();
        press(&mut app, KeyCode::Char('2'));
        press(&mut app, KeyCode::Enter);
        press(&mut app, KeyCode::Char('C'));
        assert_eq!(app.expansion.expanded_count(), CategoryKey::COUNT);
    }

    #[test]
    fn test_scroll_in_text_panels() {
        let mut app = App::default();
        press(&mut app, KeyCode::Char('4'));
        press(&mut app, KeyCode::Char('j'));
        press(&mut app, KeyCode::Down);
        assert_eq!(app.scroll_of(Panel::EnvTemplate), 2);
        press(&mut app, KeyCode::Up);
        assert_eq!(app.scroll_of(Panel::EnvTemplate), 1);
        assert_eq!(app.cursor, 0);
    }

    #[test]
    fn test_help_overlay_swallows_next_key() {
        let mut app = App::default();
        press(&mut app, KeyCode::Char('?'));
        assert_eq!(app.overlay, Overlay::Help);
        press(&mut app, KeyCode::Char('q'));
        assert_eq!(app.overlay, Overlay::None);
        assert!(app.running);
    }

    #[test]
    fn test_key_bindings_help() {
        let bindings = key_bindings_help();
        assert!(!bindings.is_empty());
        assert_eq!(bindings[0].0, "q / Ctrl+C");
    }
}
