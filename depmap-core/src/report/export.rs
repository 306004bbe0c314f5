//! JSON export of the data store.

use serde::Serialize;

use crate::data;
use crate::error::DepMapError;
use crate::model::{Category, FlowEdge, GuideStep, Package, SummaryPoint};

/// Serializable snapshot of everything the page shows.
#[derive(Debug, Serialize)]
pub struct MapExport {
    pub title: &'static str,
    pub subtitle: &'static str,
    pub categories: &'static [Category],
    pub flows: &'static [FlowEdge],
    pub guide: &'static [GuideStep],
    pub env_template: &'static str,
    pub packages: &'static [Package],
    pub summary: &'static [SummaryPoint],
}

impl MapExport {
    pub fn current() -> Self {
        Self {
            title: data::PAGE_TITLE,
            subtitle: data::PAGE_SUBTITLE,
            categories: data::categories(),
            flows: data::flows(),
            guide: data::guide(),
            env_template: data::ENV_TEMPLATE,
            packages: data::packages(),
            summary: data::summary(),
        }
    }

    pub fn to_json(&self) -> Result<String, DepMapError> {
        Ok(serde_json::to_string_pretty(self)?)
    }
}
