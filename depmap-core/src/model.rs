//! Domain types for the dependency map.
//!
//! Every value of these types lives in `'static` data (see [`crate::data`]).
//! The tag sets are closed enums so lookups over them are exhaustive.

use std::fmt;
use std::str::FromStr;

use serde::Serialize;

use crate::error::DepMapError;

/// Identifier of a category card. Unique by construction.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum CategoryKey {
    Core,
    Mt5,
    News,
    Trading,
    Config,
    Monitoring,
}

impl CategoryKey {
    /// All keys in declaration order.
    pub const ALL: [CategoryKey; 6] = [
        CategoryKey::Core,
        CategoryKey::Mt5,
        CategoryKey::News,
        CategoryKey::Trading,
        CategoryKey::Config,
        CategoryKey::Monitoring,
    ];

    pub const COUNT: usize = Self::ALL.len();

    pub fn index(self) -> usize {
        match self {
            CategoryKey::Core => 0,
            CategoryKey::Mt5 => 1,
            CategoryKey::News => 2,
            CategoryKey::Trading => 3,
            CategoryKey::Config => 4,
            CategoryKey::Monitoring => 5,
        }
    }

    pub fn from_index(i: usize) -> Option<Self> {
        Self::ALL.get(i).copied()
    }

    /// Stable lowercase id, as used on the command line and in JSON.
    pub fn as_str(self) -> &'static str {
        match self {
            CategoryKey::Core => "core",
            CategoryKey::Mt5 => "mt5",
            CategoryKey::News => "news",
            CategoryKey::Trading => "trading",
            CategoryKey::Config => "config",
            CategoryKey::Monitoring => "monitoring",
        }
    }
}

impl fmt::Display for CategoryKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for CategoryKey {
    type Err = DepMapError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let needle = s.trim().to_ascii_lowercase();
        CategoryKey::ALL
            .into_iter()
            .find(|k| k.as_str() == needle)
            .ok_or_else(|| DepMapError::UnknownCategory(s.to_string()))
    }
}

/// Tag describing what kind of thing an [`Item`] is.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum ItemType {
    Main,
    Runtime,
    Config,
    Package,
    External,
    Account,
    Module,
    Service,
    Feature,
    File,
    Storage,
    Report,
}

impl ItemType {
    pub const ALL: [ItemType; 12] = [
        ItemType::Main,
        ItemType::Runtime,
        ItemType::Config,
        ItemType::Package,
        ItemType::External,
        ItemType::Account,
        ItemType::Module,
        ItemType::Service,
        ItemType::Feature,
        ItemType::File,
        ItemType::Storage,
        ItemType::Report,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            ItemType::Main => "main",
            ItemType::Runtime => "runtime",
            ItemType::Config => "config",
            ItemType::Package => "package",
            ItemType::External => "external",
            ItemType::Account => "account",
            ItemType::Module => "module",
            ItemType::Service => "service",
            ItemType::Feature => "feature",
            ItemType::File => "file",
            ItemType::Storage => "storage",
            ItemType::Report => "report",
        }
    }
}

impl fmt::Display for ItemType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ItemType {
    type Err = DepMapError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let needle = s.trim().to_ascii_lowercase();
        ItemType::ALL
            .into_iter()
            .find(|t| t.as_str() == needle)
            .ok_or_else(|| DepMapError::UnknownItemType(s.to_string()))
    }
}

/// Color token of a category card. Mapped to real colors by the UI theme.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Accent {
    Blue,
    Green,
    Purple,
    Orange,
    Yellow,
    Red,
}

/// A single labeled entry within a category.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Item {
    pub name: &'static str,
    #[serde(rename = "type")]
    pub item_type: ItemType,
    pub deps: &'static [&'static str],
}

impl Item {
    /// `"a, b, c"`, or `None` when the item has no dependencies.
    pub fn depends_on(&self) -> Option<String> {
        if self.deps.is_empty() {
            None
        } else {
            Some(self.deps.join(", "))
        }
    }
}

/// A collapsible card of related items.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Category {
    pub key: CategoryKey,
    pub title: &'static str,
    pub color: Accent,
    pub items: &'static [Item],
}

impl Category {
    /// Value shown in the header badge. Independent of expansion state.
    pub fn item_count(&self) -> usize {
        self.items.len()
    }

    pub fn badge(&self) -> String {
        format!("{} items", self.item_count())
    }
}

/// Directed, free-text relationship in the flow diagram.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct FlowEdge {
    pub from: &'static str,
    pub to: &'static str,
    pub label: &'static str,
}

/// Body of a guide step.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", content = "lines", rename_all = "lowercase")]
pub enum StepBody {
    /// Bullet list. Text between backticks is inline code.
    Bullets(&'static [&'static str]),
    /// A single shell command shown as a code block.
    Command(&'static str),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct GuideStep {
    pub title: &'static str,
    pub body: StepBody,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Package {
    pub name: &'static str,
    pub purpose: &'static str,
}

/// Labeled bullet of the upgrade summary.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct SummaryPoint {
    pub label: &'static str,
    pub text: &'static str,
}

/// A run of guide text, either plain or inline code.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TextRun<'a> {
    Plain(&'a str),
    Code(&'a str),
}

/// Split bullet text on backticks into plain and code runs.
///
/// An unmatched trailing backtick leaves the remainder as plain text.
pub fn text_runs(text: &str) -> Vec<TextRun<'_>> {
    let mut runs = Vec::new();
    let mut rest = text;
    while let Some(open) = rest.find('`') {
        let after = &rest[open + 1..];
        let Some(close) = after.find('`') else {
            break;
        };
        if open > 0 {
            runs.push(TextRun::Plain(&rest[..open]));
        }
        runs.push(TextRun::Code(&after[..close]));
        rest = &after[close + 1..];
    }
    if !rest.is_empty() {
        runs.push(TextRun::Plain(rest));
    }
    runs
}
