//! Depmap Core: the static dependency map of the Forex AI bot.
//!
//! This crate holds everything that is not terminal-specific:
//! - Domain types (categories, items, flow edges, guide steps)
//! - The literal data store, in declaration order
//! - Per-category expansion state
//! - Item-type → icon lookup
//! - Plain text, Markdown and JSON reports

pub mod data;
pub mod error;
pub mod expansion;
pub mod icon;
pub mod model;
pub mod report;

pub use error::DepMapError;
pub use expansion::ExpansionState;
pub use icon::Icon;
pub use model::{Accent, Category, CategoryKey, FlowEdge, Item, ItemType};
