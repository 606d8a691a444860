//! Budget commands

use anyhow::Result;
use clap::Subcommand;

use crate::aggregate::Aggregator;
use crate::display::format_amount;
use crate::error::TrackError;
use crate::models::Money;
use crate::repo::BudgetRepository;

use super::{require_session, AppContext};

#[derive(Subcommand, Debug)]
pub enum BudgetCommands {
    /// Set the monthly base budget
    Set {
        /// Amount, e.g. 1000 or 1000.50
        amount: String,
    },
    /// Show the base and current budget
    Show,
}

/// Handle `trackfunds budget ...`
pub fn handle_budget_command(ctx: &AppContext, command: BudgetCommands) -> Result<()> {
    let repo = BudgetRepository::new(&ctx.store);

    match command {
        BudgetCommands::Set { amount } => {
            require_session(ctx)?;

            let amount = Money::parse(&amount).map_err(|e| TrackError::Validation(e.to_string()))?;
            repo.set_base(amount)?;
            println!("Monthly budget set to {}", format_amount(amount, &ctx.settings));
        }
        BudgetCommands::Show => {
            let aggregator = Aggregator::new(&ctx.store);
            let (income, expense) = aggregator.totals()?;
            println!(
                "Base budget:    {}",
                format_amount(repo.base()?, &ctx.settings)
            );
            println!("Total income:   {}", format_amount(income, &ctx.settings));
            println!("Total expenses: {}", format_amount(expense, &ctx.settings));
            println!(
                "Current budget: {}",
                format_amount(aggregator.current_budget()?, &ctx.settings)
            );
        }
    }

    Ok(())
}
