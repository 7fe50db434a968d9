//! Outlay CLI - Local-first expense tracker
//!
//! Usage:
//!   outlay add "Coffee" 4.50 food        Record an expense
//!   outlay list --period this-month      List recent expenses
//!   outlay stats                         Show spending statistics
//!   outlay export csv -o expenses.csv    Export to CSV

mod cli;
mod commands;


use anyhow::Result;
use clap::Parser;
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

use cli::*;

fn main() -> Result<()> {
    let cli = Cli::parse();

    // Set up logging
    // Priority: RUST_LOG env var > --verbose flag > default (info)
    let filter = if std::env::var("RUST_LOG").is_ok() {
        EnvFilter::from_default_env()
    } else if cli.verbose {
        EnvFilter::new("debug")
    } else {
        EnvFilter::new("info")
    };

    tracing_subscriber::registry()
        .with(filter)
        .with(fmt::layer().with_target(false).compact())
        .init();

    let data_dir = cli.data_dir.as_deref();

    match cli.command {
        Commands::Init => commands::cmd_init(data_dir),
        Commands::Add {
            description,
            amount,
            category,
            date,
        } => commands::cmd_add(data_dir, &description, amount, &category, date.as_deref()),
        Commands::List {
            from,
            to,
            period,
            category,
            min,
            max,
            search,
        } => {
            let filter = commands::build_filter(
                from.as_deref(),
                to.as_deref(),
                period.as_deref(),
                &category,
                min,
                max,
                search.as_deref(),
            )?;
            commands::cmd_list(data_dir, filter)
        }
        Commands::Update {
            id,
            description,
            amount,
            category,
            date,
        } => commands::cmd_update(
            data_dir,
            &id,
            description.as_deref(),
            amount,
            category.as_deref(),
            date.as_deref(),
        ),
        Commands::Delete { id } => commands::cmd_delete(data_dir, &id),
        Commands::Clear { yes } => commands::cmd_clear(data_dir, yes),
        Commands::Stats {
            from,
            to,
            period,
            category,
            min,
            max,
            search,
        } => {
            let filter = commands::build_filter(
                from.as_deref(),
                to.as_deref(),
                period.as_deref(),
                &category,
                min,
                max,
                search.as_deref(),
            )?;
            commands::cmd_stats(data_dir, filter)
        }
        Commands::Export { format } => match format {
            ExportFormat::Csv {
                output,
                from,
                to,
                period,
                category,
            } => {
                let filter = commands::build_filter(
                    from.as_deref(),
                    to.as_deref(),
                    period.as_deref(),
                    &category,
                    None,
                    None,
                    None,
                )?;
                commands::cmd_export_csv(data_dir, filter, output)
            }
            ExportFormat::Summary {
                output,
                from,
                to,
                period,
                category,
            } => {
                let filter = commands::build_filter(
                    from.as_deref(),
                    to.as_deref(),
                    period.as_deref(),
                    &category,
                    None,
                    None,
                    None,
                )?;
                commands::cmd_export_summary(data_dir, filter, output)
            }
            ExportFormat::Json { output } => commands::cmd_export_json(data_dir, output),
            ExportFormat::Pdf {
                output,
                title,
                from,
                to,
                period,
                category,
            } => {
                let filter = commands::build_filter(
                    from.as_deref(),
                    to.as_deref(),
                    period.as_deref(),
                    &category,
                    None,
                    None,
                    None,
                )?;
                commands::cmd_export_pdf(data_dir, filter, &output, title.as_deref())
            }
        },
        Commands::Import { file } => commands::cmd_import(data_dir, &file),
        Commands::Seed => commands::cmd_seed(data_dir),
        Commands::Theme { value } => commands::cmd_theme(data_dir, value.as_deref()),
        Commands::Status => commands::cmd_status(data_dir),
    }
}
