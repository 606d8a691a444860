//! Dashboard report commands

use anyhow::Result;
use clap::Subcommand;

use crate::aggregate::Aggregator;
use crate::display::{format_category_report, format_transaction_register};

use super::transaction::KindArg;
use super::AppContext;

#[derive(Subcommand, Debug)]
pub enum ReportCommands {
    /// Per-category totals for one kind
    Categories {
        /// Income or expense
        #[arg(value_enum)]
        kind: KindArg,
    },
    /// The most recent transactions
    Recent {
        /// How many to show; defaults to the configured limit
        #[arg(short, long)]
        count: Option<usize>,
    },
}

/// Handle `trackfunds report ...`
pub fn handle_report_command(ctx: &AppContext, command: ReportCommands) -> Result<()> {
    let aggregator = Aggregator::new(&ctx.store);

    match command {
        ReportCommands::Categories { kind } => {
            let sums = aggregator.sum_by_category(kind.into())?;
            print!(
                "{}",
                format_category_report(kind.into(), &sums, &ctx.settings)
            );
        }
        ReportCommands::Recent { count } => {
            let limit = count.unwrap_or(ctx.settings.recent_limit);
            let recent = aggregator.recent(limit)?;
            print!("{}", format_transaction_register(&recent, &ctx.settings));
        }
    }

    Ok(())
}
