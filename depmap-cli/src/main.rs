//! Depmap CLI: print the dependency map without the interactive UI.
//!
//! Commands:
//! - `show`: the whole page as text, Markdown or JSON
//! - `env-template`: the credential template, verbatim
//! - `flows`: the data-flow edges, one per line
//! - `categories`: key, title and item count per category

use std::io::{self, Write};

use anyhow::Result;
use clap::{Parser, Subcommand};
use depmap_core::report::{self, text::flow_lines, Format};
use depmap_core::{data, CategoryKey, ExpansionState};

#[derive(Parser)]
#[command(name = "depmap", about = "Depmap CLI: Forex AI bot dependency map")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Print the whole dependency map.
    Show {
        /// Output format: text, markdown or json.
        #[arg(long, default_value = "text")]
        format: Format,

        /// Category to print collapsed (repeatable): core, mt5, news, trading, config, monitoring.
        #[arg(long = "collapse", value_name = "CATEGORY")]
        collapse: Vec<CategoryKey>,
    },
    /// Print the .env credential template.
    EnvTemplate,
    /// Print the data-flow edges in order.
    Flows,
    /// List categories with their item counts.
    Categories,
}

fn main() -> Result<()> {
    // Initialize tracing subscriber for logging
    if std::env::var("RUST_LOG").is_ok() {
        tracing_subscriber::fmt()
            .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
            .with_writer(io::stderr)
            .init();
    }

    let cli = Cli::parse();
    let output = run(cli.command)?;

    let mut stdout = io::stdout().lock();
    stdout.write_all(output.as_bytes())?;
    if !output.ends_with('\n') {
        stdout.write_all(b"\n")?;
    }
    Ok(())
}

fn run(command: Commands) -> Result<String> {
    match command {
        Commands::Show { format, collapse } => {
            let expansion = ExpansionState::with_collapsed(&collapse);
            tracing::info!(%format, collapsed = collapse.len(), "rendering map");
            Ok(report::render(format, &expansion)?)
        }
        Commands::EnvTemplate => Ok(data::ENV_TEMPLATE.to_string()),
        Commands::Flows => Ok(flow_lines().join("\n")),
        Commands::Categories => Ok(data::categories()
            .iter()
            .map(|c| format!("{}\t{}\t{}", c.key, c.title, c.item_count()))
            .collect::<Vec<_>>()
            .join("\n")),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parse(args: &[&str]) -> Result<Cli, clap::Error> {
        Cli::try_parse_from(std::iter::once("depmap").chain(args.iter().copied()))
    }

    #[test]
    fn show_defaults_to_text_fully_expanded() {
        let cli = parse(&["show"]).unwrap();
        match cli.command {
            Commands::Show { format, collapse } => {
                assert_eq!(format, Format::Text);
                assert!(collapse.is_empty());
            }
            _ => panic!("expected show"),
        }
    }

    #[test]
    fn collapse_flags_parse_to_keys() {
        let cli = parse(&["show", "--collapse", "mt5", "--collapse", "news"]).unwrap();
        match cli.command {
            Commands::Show { collapse, .. } => {
                assert_eq!(collapse, vec![CategoryKey::Mt5, CategoryKey::News]);
            }
            _ => panic!("expected show"),
        }
    }

    #[test]
    fn unknown_category_is_rejected() {
        assert!(parse(&["show", "--collapse", "risk"]).is_err());
        assert!(parse(&["show", "--format", "yaml"]).is_err());
    }

    #[test]
    fn show_hides_collapsed_items() {
        let out = run(Commands::Show {
            format: Format::Text,
            collapse: vec![CategoryKey::Mt5],
        })
        .unwrap();
        assert!(out.contains("MetaTrader 5 Integration  (4 items)"));
        assert!(!out.contains("☁ MT5 Terminal"));
        assert!(out.contains("1. Buka MT5 Terminal"));
    }

    #[test]
    fn env_template_is_verbatim() {
        assert_eq!(run(Commands::EnvTemplate).unwrap(), data::ENV_TEMPLATE);
    }

    #[test]
    fn categories_lists_counts() {
        let out = run(Commands::Categories).unwrap();
        let rows: Vec<&str> = out.lines().collect();
        assert_eq!(rows.len(), 6);
        assert_eq!(rows[1], "mt5\t📊 MetaTrader 5 Integration\t4");
    }

    #[test]
    fn flows_are_ordered() {
        let out = run(Commands::Flows).unwrap();
        assert!(out.starts_with("Telegram News -[Raw news]-> NewsAnalyzer\n"));
    }
}
