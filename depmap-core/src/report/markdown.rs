//! Markdown report generator.

use crate::data;
use crate::expansion::ExpansionState;
use crate::icon::Icon;
use crate::model::{text_runs, StepBody, TextRun};

pub struct MarkdownReportGenerator;

impl MarkdownReportGenerator {
    pub fn generate(&self, expansion: &ExpansionState) -> String {
        let mut report = format!(
            "# {}\n\n{}\n\n{}\n",
            data::PAGE_TITLE,
            data::PAGE_SUBTITLE,
            data::FEATURE_BADGES
                .iter()
                .map(|b| format!("`✅ {b}`"))
                .collect::<Vec<_>>()
                .join(" ")
        );

        report.push_str(&format!("\n## {}\n", data::COMPONENTS_HEADING));
        for category in data::categories() {
            let expanded = expansion.is_expanded(category.key);
            report.push_str(&format!(
                "\n### {} {} ({})\n",
                Icon::chevron(expanded).glyph(),
                category.title,
                category.badge()
            ));
            if !expanded {
                continue;
            }
            report.push('\n');
            for item in category.items {
                let icon = Icon::for_item_type(item.item_type)
                    .map(|i| format!("{} ", i.glyph()))
                    .unwrap_or_default();
                report.push_str(&format!("- {icon}**{}** `{}`", item.name, item.item_type));
                if let Some(deps) = item.depends_on() {
                    report.push_str(&format!(" (Depends on: {deps})"));
                }
                report.push('\n');
            }
        }

        report.push_str(&format!("\n## {}\n\n", data::FLOW_HEADING));
        report.push_str("| From | Label | To |\n");
        report.push_str("|------|-------|----|\n");
        for flow in data::flows() {
            report.push_str(&format!("| {} | {} → | {} |\n", flow.from, flow.label, flow.to));
        }

        report.push_str(&format!("\n## {}\n", data::GUIDE_HEADING));
        for (n, step) in data::guide().iter().enumerate() {
            report.push_str(&format!("\n### {}. {}\n\n", n + 1, step.title));
            match step.body {
                StepBody::Bullets(bullets) => {
                    for bullet in bullets {
                        report.push_str("- ");
                        for run in text_runs(bullet) {
                            match run {
                                TextRun::Plain(s) => report.push_str(s),
                                TextRun::Code(s) => report.push_str(&format!("`{s}`")),
                            }
                        }
                        report.push('\n');
                    }
                }
                StepBody::Command(cmd) => {
                    report.push_str(&format!("```sh\n{cmd}\n```\n"));
                }
            }
        }

        report.push_str(&format!(
            "\n## {}\n\n```env\n{}\n```\n",
            data::ENV_HEADING,
            data::ENV_TEMPLATE
        ));

        report.push_str(&format!("\n## {}\n\n", data::PACKAGES_HEADING));
        report.push_str("| Package | Purpose |\n");
        report.push_str("|---------|---------|\n");
        for pkg in data::packages() {
            report.push_str(&format!("| `{}` | {} |\n", pkg.name, pkg.purpose));
        }

        report.push_str(&format!("\n## {}\n\n", data::SUMMARY_HEADING));
        for point in data::summary() {
            report.push_str(&format!("- ✅ **{}:** {}\n", point.label, point.text));
        }

        report
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::CategoryKey;

    #[test]
    fn collapsed_category_keeps_heading_and_badge() {
        let mut state = ExpansionState::initial();
        state.toggle(CategoryKey::Mt5);
        let md = MarkdownReportGenerator.generate(&state);

        assert!(md.contains("### ▸ 📊 MetaTrader 5 Integration (4 items)"));
        assert!(!md.contains("**MT5 Terminal**"));
        assert!(md.contains("### ▾ 🤖 Core System (3 items)"));
        assert!(md.contains("- **Python 3.8+** `runtime`\n"));
    }

    #[test]
    fn items_carry_icons_and_deps() {
        let md = MarkdownReportGenerator.generate(&ExpansionState::initial());
        assert!(md.contains("- ☁ **MT5 Terminal** `external` (Depends on: Must be running)"));
        assert!(md.contains("- ⛁ **Trading Log** `storage` (Depends on: trading_log.json)"));
    }

    #[test]
    fn template_is_fenced_verbatim() {
        let md = MarkdownReportGenerator.generate(&ExpansionState::initial());
        let fenced = format!("```env\n{}\n```", data::ENV_TEMPLATE);
        assert!(md.contains(&fenced));
    }

    #[test]
    fn flows_appear_in_order() {
        let md = MarkdownReportGenerator.generate(&ExpansionState::initial());
        let a = md.find("| Telegram News | Raw news → | NewsAnalyzer |").unwrap();
        let b = md.find("| .env | Credentials → | MT5 Connection |").unwrap();
        assert!(a < b);
    }
}
