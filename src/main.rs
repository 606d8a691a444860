use anyhow::Result;
use clap::{Parser, Subcommand};

use trackfunds::cli::{
    handle_budget_command, handle_config_command, handle_login, handle_logout,
    handle_report_command, handle_signup, handle_txn_command, handle_whoami, AppContext,
    BudgetCommands, LoginArgs, ReportCommands, SignupArgs, TxnCommands,
};

#[derive(Parser)]
#[command(
    name = "trackfunds",
    version,
    about = "Terminal-based personal finance tracker",
    long_about = "trackfunds records income and expense transactions, keeps a \
                  running budget, and breaks spending down by category, all \
                  from the command line."
)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Register the user account
    Signup(SignupArgs),

    /// Log in and open a session
    Login(LoginArgs),

    /// Log out
    Logout,

    /// Show the active session
    Whoami,

    /// Transaction management commands
    #[command(subcommand, alias = "txn")]
    Transaction(TxnCommands),

    /// Budget commands
    #[command(subcommand)]
    Budget(BudgetCommands),

    /// Dashboard reports
    #[command(subcommand)]
    Report(ReportCommands),

    /// Show current configuration and paths
    Config,
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    let ctx = AppContext::init()?;

    match cli.command {
        Commands::Signup(args) => handle_signup(&ctx, args),
        Commands::Login(args) => handle_login(&ctx, args),
        Commands::Logout => handle_logout(&ctx),
        Commands::Whoami => handle_whoami(&ctx),
        Commands::Transaction(command) => handle_txn_command(&ctx, command),
        Commands::Budget(command) => handle_budget_command(&ctx, command),
        Commands::Report(command) => handle_report_command(&ctx, command),
        Commands::Config => handle_config_command(&ctx),
    }
}
