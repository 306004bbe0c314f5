//! Plain-text report for terminals without the interactive UI.

use crate::data;
use crate::expansion::ExpansionState;
use crate::icon::Icon;
use crate::model::{text_runs, StepBody, TextRun};

pub struct TextReportGenerator;

impl TextReportGenerator {
    pub fn generate(&self, expansion: &ExpansionState) -> String {
        let mut out = String::new();
        let rule = "=".repeat(data::PAGE_TITLE.chars().count());

        out.push_str(&format!("{}\n{rule}\n{}\n", data::PAGE_TITLE, data::PAGE_SUBTITLE));
        for badge in data::FEATURE_BADGES {
            out.push_str(&format!("  [✅ {badge}]"));
        }
        out.push('\n');

        section(&mut out, Icon::AlertCircle, data::COMPONENTS_HEADING);
        for category in data::categories() {
            let expanded = expansion.is_expanded(category.key);
            out.push_str(&format!(
                "{} {}  ({})\n",
                Icon::chevron(expanded).glyph(),
                category.title,
                category.badge()
            ));
            if !expanded {
                continue;
            }
            for item in category.items {
                let icon = Icon::for_item_type(item.item_type).map_or(" ", Icon::glyph);
                out.push_str(&format!("    {icon} {}  [{}]", item.name, item.item_type));
                if let Some(deps) = item.depends_on() {
                    out.push_str(&format!("  Depends on: {deps}"));
                }
                out.push('\n');
            }
        }

        section(&mut out, Icon::Zap, data::FLOW_HEADING);
        out.push_str(&flow_lines().join("\n"));
        out.push('\n');

        section(&mut out, Icon::CheckCircle, data::GUIDE_HEADING);
        for (n, step) in data::guide().iter().enumerate() {
            out.push_str(&format!("{}. {}\n", n + 1, step.title));
            match step.body {
                StepBody::Bullets(bullets) => {
                    for bullet in bullets {
                        let plain: String = text_runs(bullet)
                            .into_iter()
                            .map(|run| match run {
                                TextRun::Plain(s) | TextRun::Code(s) => s,
                            })
                            .collect();
                        out.push_str(&format!("   • {plain}\n"));
                    }
                }
                StepBody::Command(cmd) => out.push_str(&format!("   $ {cmd}\n")),
            }
        }

        section(&mut out, Icon::Lock, data::ENV_HEADING);
        out.push_str(data::ENV_TEMPLATE);
        out.push('\n');

        section(&mut out, Icon::Database, data::PACKAGES_HEADING);
        let width = data::packages()
            .iter()
            .map(|p| p.name.len())
            .max()
            .unwrap_or(0);
        for pkg in data::packages() {
            out.push_str(&format!("  {:<width$}  {}\n", pkg.name, pkg.purpose));
        }

        section(&mut out, Icon::AlertCircle, data::SUMMARY_HEADING);
        for point in data::summary() {
            out.push_str(&format!("  ✅ {}: {}\n", point.label, point.text));
        }

        out
    }
}

/// One `from -[label]-> to` line per flow edge, in declaration order.
pub fn flow_lines() -> Vec<String> {
    data::flows()
        .iter()
        .map(|f| format!("{} -[{}]-> {}", f.from, f.label, f.to))
        .collect()
}

fn section(out: &mut String, icon: Icon, heading: &str) {
    out.push_str(&format!("\n{} {heading}\n", icon.glyph()));
    out.push_str(&format!("{}\n", "-".repeat(heading.chars().count() + 2)));
}
