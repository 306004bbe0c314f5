//! Depmap TUI: terminal view of the Forex AI bot dependency map.
//!
//! Panels:
//! 1. Components: collapsible category cards
//! 2. Data Flow: labeled edges between pipeline stages
//! 3. Guide: numbered MT5 account setup steps
//! 4. .env Template: credential file reference
//! 5. Packages: required Python packages
//! 6. Summary: upgrade checklist

pub mod app;
pub mod config;
pub mod input;
pub mod theme;
pub mod ui;

pub use app::{App, Panel};
pub use config::TuiConfig;
pub use input::handle_key;
pub use theme::Theme;
