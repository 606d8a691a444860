//! Transaction management commands

use anyhow::{Context, Result};
use clap::{Subcommand, ValueEnum};

use crate::display::format_transaction_register;
use crate::error::TrackError;
use crate::models::{Kind, Money, Transaction, TransactionId};
use crate::repo::TransactionRepository;

use super::{require_session, AppContext};

/// clap-friendly wrapper for the transaction kind
#[derive(Debug, Clone, Copy, ValueEnum)]
pub enum KindArg {
    Income,
    Expense,
}

impl From<KindArg> for Kind {
    fn from(arg: KindArg) -> Kind {
        match arg {
            KindArg::Income => Kind::Income,
            KindArg::Expense => Kind::Expense,
        }
    }
}

#[derive(Subcommand, Debug)]
pub enum TxnCommands {
    /// Add a new transaction
    Add {
        /// Income or expense
        #[arg(value_enum)]
        kind: KindArg,
        /// Description
        description: String,
        /// Amount, e.g. 1500 or 1500.50
        amount: String,
        /// Category label
        #[arg(short, long)]
        category: String,
        /// Timestamp (yyyy-MM-dd HH:mm:ss); defaults to now
        #[arg(short, long)]
        date: Option<String>,
    },
    /// List transactions
    List {
        /// Restrict to one kind
        #[arg(short, long, value_enum)]
        kind: Option<KindArg>,
    },
    /// Delete a transaction by id
    Delete {
        /// Transaction id (full UUID)
        id: String,
    },
    /// Edit an existing transaction
    Edit {
        /// Transaction id (full UUID)
        id: String,
        /// New description
        #[arg(long)]
        description: Option<String>,
        /// New amount
        #[arg(long)]
        amount: Option<String>,
        /// New category
        #[arg(long)]
        category: Option<String>,
        /// New timestamp (yyyy-MM-dd HH:mm:ss)
        #[arg(long)]
        date: Option<String>,
    },
}

/// Handle `trackfunds txn ...`
pub fn handle_txn_command(ctx: &AppContext, command: TxnCommands) -> Result<()> {
    let repo = TransactionRepository::new(&ctx.store);

    match command {
        TxnCommands::Add {
            kind,
            description,
            amount,
            category,
            date,
        } => {
            require_session(ctx)?;

            let amount = Money::parse(&amount).map_err(|e| TrackError::Validation(e.to_string()))?;
            let txn = match date {
                Some(date) => Transaction::new(kind.into(), description, date, amount, category)?,
                None => Transaction::now(kind.into(), description, amount, category)?,
            };

            let id = repo.add(&txn)?;
            println!("Added transaction {}", id.short());
        }
        TxnCommands::List { kind } => {
            let listed = repo.list(kind.map(Into::into))?;
            print!("{}", format_transaction_register(&listed, &ctx.settings));
        }
        TxnCommands::Delete { id } => {
            require_session(ctx)?;

            let id: TransactionId = id.parse().context("Invalid transaction id")?;
            repo.remove(id)?;
            println!("Transaction deleted successfully");
        }
        TxnCommands::Edit {
            id,
            description,
            amount,
            category,
            date,
        } => {
            require_session(ctx)?;

            let id: TransactionId = id.parse().context("Invalid transaction id")?;
            let stored = repo
                .get(id)?
                .ok_or_else(|| TrackError::transaction_not_found(id.to_string()))?;

            let mut txn = stored.txn;
            if let Some(description) = description {
                txn.description = description;
            }
            if let Some(amount) = amount {
                txn.amount =
                    Money::parse(&amount).map_err(|e| TrackError::Validation(e.to_string()))?;
            }
            if let Some(category) = category {
                txn.category = category;
            }
            if let Some(date) = date {
                txn = Transaction::new(txn.kind, txn.description, date, txn.amount, txn.category)?;
            }

            repo.update(id, &txn)?;
            println!("Transaction updated");
        }
    }

    Ok(())
}
