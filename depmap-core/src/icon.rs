//! Icon glyphs and the item-type → icon lookup.

use serde::Serialize;

use crate::model::ItemType;

/// Decorative glyphs used across the views.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum Icon {
    ChevronDown,
    ChevronRight,
    AlertCircle,
    CheckCircle,
    Database,
    Cloud,
    Zap,
    Lock,
}

impl Icon {
    /// Terminal glyph for the icon.
    pub fn glyph(self) -> &'static str {
        match self {
            Icon::ChevronDown => "▾",
            Icon::ChevronRight => "▸",
            Icon::AlertCircle => "⚠",
            Icon::CheckCircle => "✔",
            Icon::Database => "⛁",
            Icon::Cloud => "☁",
            Icon::Zap => "ϟ",
            Icon::Lock => "⚿",
        }
    }

    /// Header chevron for a card.
    pub fn chevron(expanded: bool) -> Icon {
        if expanded {
            Icon::ChevronDown
        } else {
            Icon::ChevronRight
        }
    }

    /// Icon shown before an item name. Most types have none.
    pub fn for_item_type(item_type: ItemType) -> Option<Icon> {
        match item_type {
            ItemType::External => Some(Icon::Cloud),
            ItemType::Config => Some(Icon::Lock),
            ItemType::Feature => Some(Icon::Zap),
            ItemType::Storage => Some(Icon::Database),
            ItemType::Main
            | ItemType::Runtime
            | ItemType::Package
            | ItemType::Account
            | ItemType::Module
            | ItemType::Service
            | ItemType::File
            | ItemType::Report => None,
        }
    }
}
