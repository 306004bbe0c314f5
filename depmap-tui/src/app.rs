//! Application state: single-owner, main-thread only.
//!
//! The expansion flags live here and are handed to the views by reference.
//! Every mutation goes through a method on [`App`].

use serde::{Deserialize, Serialize};

use depmap_core::{data, CategoryKey, ExpansionState};

use crate::config::TuiConfig;

/// Which panel is active.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Panel {
    Components,
    DataFlow,
    Guide,
    EnvTemplate,
    Packages,
    Summary,
}

impl Panel {
    pub const COUNT: usize = 6;

    pub fn index(self) -> usize {
        match self {
            Panel::Components => 0,
            Panel::DataFlow => 1,
            Panel::Guide => 2,
            Panel::EnvTemplate => 3,
            Panel::Packages => 4,
            Panel::Summary => 5,
        }
    }

    pub fn from_index(i: usize) -> Option<Self> {
        match i {
            0 => Some(Panel::Components),
            1 => Some(Panel::DataFlow),
            2 => Some(Panel::Guide),
            3 => Some(Panel::EnvTemplate),
            4 => Some(Panel::Packages),
            5 => Some(Panel::Summary),
            _ => None,
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Panel::Components => "Components",
            Panel::DataFlow => "Data Flow",
            Panel::Guide => "Guide",
            Panel::EnvTemplate => ".env Template",
            Panel::Packages => "Packages",
            Panel::Summary => "Summary",
        }
    }

    pub fn next(self) -> Panel {
        Self::wrap(self.index() + 1)
    }

    pub fn prev(self) -> Panel {
        Self::wrap(self.index() + Self::COUNT - 1)
    }

    fn wrap(i: usize) -> Panel {
        match Panel::from_index(i % Self::COUNT) {
            Some(p) => p,
            None => Panel::Components,
        }
    }
}

/// Status message severity.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StatusLevel {
    Info,
    Warning,
}

/// Modal drawn over the active panel.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Overlay {
    None,
    Help,
}

#[derive(Debug)]
pub struct App {
    pub running: bool,
    pub active_panel: Panel,
    pub overlay: Overlay,
    pub expansion: ExpansionState,
    /// Selected category row in the Components panel.
    pub cursor: usize,
    /// Vertical scroll offset per panel (Components follows the cursor instead).
    pub scroll: [u16; Panel::COUNT],
    pub status_message: Option<(String, StatusLevel)>,
}

impl Default for App {
    fn default() -> Self {
        Self::new(&TuiConfig::default())
    }
}

impl App {
    pub fn new(config: &TuiConfig) -> Self {
        Self {
            running: true,
            active_panel: config.start_panel,
            overlay: if config.show_help_on_start {
                Overlay::Help
            } else {
                Overlay::None
            },
            expansion: ExpansionState::initial(),
            cursor: 0,
            scroll: [0; Panel::COUNT],
            status_message: None,
        }
    }

    pub fn quit(&mut self) {
        self.running = false;
    }

    pub fn set_status(&mut self, msg: impl Into<String>) {
        self.status_message = Some((msg.into(), StatusLevel::Info));
    }

    pub fn set_warning(&mut self, msg: impl Into<String>) {
        self.status_message = Some((msg.into(), StatusLevel::Warning));
    }

    pub fn selected_key(&self) -> CategoryKey {
        CategoryKey::from_index(self.cursor).unwrap_or(CategoryKey::Core)
    }

    pub fn cursor_down(&mut self) {
        if self.cursor + 1 < CategoryKey::COUNT {
            self.cursor += 1;
        }
    }

    pub fn cursor_up(&mut self) {
        self.cursor = self.cursor.saturating_sub(1);
    }

    /// Flip one category and report the result in the status bar.
    pub fn toggle(&mut self, key: CategoryKey) {
        let expanded = self.expansion.toggle(key);
        tracing::debug!(category = %key, expanded, "toggled category");
        self.announce(key, expanded);
    }

    pub fn toggle_selected(&mut self) {
        self.toggle(self.selected_key());
    }

    pub fn expand_selected(&mut self) {
        let key = self.selected_key();
        if !self.expansion.is_expanded(key) {
            self.toggle(key);
        }
    }

    pub fn collapse_selected(&mut self) {
        let key = self.selected_key();
        if self.expansion.is_expanded(key) {
            self.toggle(key);
        }
    }

    pub fn expand_all(&mut self) {
        self.expansion.expand_all();
        tracing::debug!("expanded all categories");
        self.set_status("Expanded all categories");
    }

    pub fn collapse_all(&mut self) {
        self.expansion.collapse_all();
        tracing::debug!("collapsed all categories");
        self.set_status("Collapsed all categories");
    }

    pub fn switch_panel(&mut self, panel: Panel) {
        self.active_panel = panel;
    }

    pub fn scroll_of(&self, panel: Panel) -> u16 {
        self.scroll[panel.index()]
    }

    /// Scroll the active panel down, stopping at its last line.
    pub fn scroll_down(&mut self, content_height: usize) {
        let slot = &mut self.scroll[self.active_panel.index()];
        if usize::from(*slot) + 1 < content_height {
            *slot = slot.saturating_add(1);
        }
    }

    pub fn scroll_up(&mut self) {
        let slot = &mut self.scroll[self.active_panel.index()];
        *slot = slot.saturating_sub(1);
    }

    fn announce(&mut self, key: CategoryKey, expanded: bool) {
        let verb = if expanded { "Expanded" } else { "Collapsed" };
        self.set_status(format!("{verb} {}", data::category(key).title));
    }
}
