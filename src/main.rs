use anyhow::Result;
use clap::{ArgAction, Parser, Subcommand};
use tracing::debug;
use tracing_subscriber::EnvFilter;

use smartbudgetx::cli::{
    handle_chart_command, handle_export_command, handle_history_command, handle_income_command,
    handle_insights_command, handle_onboard_command, handle_profile_command, handle_row_command,
    handle_summary_command, ExportArgs, IncomeCommands, OnboardArgs, RowCommands,
};
use smartbudgetx::config::{paths::BudgetPaths, settings::Settings};
use smartbudgetx::services::LedgerService;
use smartbudgetx::storage::Storage;

#[derive(Parser)]
#[command(
    name = "smartbudgetx",
    version,
    about = "Terminal budget and investment planner",
    long_about = "SmartBudgetX compares your monthly spending against the 50/30/20 \
                  guideline (needs, wants, savings) and suggests how to invest \
                  whatever is left over."
)]
struct Cli {
    /// Increase log verbosity (-v info, -vv debug)
    #[arg(short, long, action = ArgAction::Count, global = true)]
    verbose: u8,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Start a fresh budget with the template rows
    Init {
        /// Keep the stored onboarding profile
        #[arg(long)]
        keep_profile: bool,
    },

    /// Run the onboarding wizard (interactive unless flags are given)
    Onboard(OnboardArgs),

    /// Show the stored onboarding profile
    Profile,

    /// Monthly income commands
    #[command(subcommand)]
    Income(IncomeCommands),

    /// Expense row commands
    #[command(subcommand)]
    Row(RowCommands),

    /// Show totals per Need/Want/Saving and leftover
    Summary,

    /// Compare actual spending with the 50/30/20 guideline
    Chart,

    /// Show insights and the suggested allocation of leftover funds
    Insights,

    /// Export the monthly report
    Export(ExportArgs),

    /// Launch the interactive TUI
    #[command(alias = "ui")]
    Tui,

    /// Show current configuration and paths
    Config,

    /// Show recent changes from the audit log
    History {
        /// Number of entries to show
        #[arg(short, long, default_value = "20")]
        limit: usize,
    },
}

fn init_tracing(verbose: u8) {
    let default_level = match verbose {
        0 => "warn",
        1 => "info",
        _ => "debug",
    };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    let paths = BudgetPaths::new()?;
    let settings = Settings::load_or_create(&paths)?;
    debug!(base_dir = %paths.base_dir().display(), "Resolved data directory");

    let storage = Storage::open(paths.clone(), &settings)?;

    match cli.command {
        Some(Commands::Init { keep_profile }) => {
            if storage.is_initialized() {
                println!("Resetting SmartBudgetX at: {}", paths.base_dir().display());
            } else {
                println!("Initializing SmartBudgetX at: {}", paths.base_dir().display());
            }
            let session = LedgerService::new(&storage).reset(keep_profile)?;
            settings.save(&paths)?;
            println!("Initialization complete!");
            println!();
            println!("Your budget starts with these rows:");
            for row in &session.ledger.rows {
                println!("  - {} ({})", row.label, row.tag);
            }
            println!();
            println!("Run 'smartbudgetx income set <amount>' to enter your income.");
        }
        Some(Commands::Onboard(args)) => {
            handle_onboard_command(&storage, args)?;
        }
        Some(Commands::Profile) => {
            handle_profile_command(&storage)?;
        }
        Some(Commands::Income(cmd)) => {
            handle_income_command(&storage, &settings, cmd)?;
        }
        Some(Commands::Row(cmd)) => {
            handle_row_command(&storage, &settings, cmd)?;
        }
        Some(Commands::Summary) => {
            handle_summary_command(&storage, &settings)?;
        }
        Some(Commands::Chart) => {
            handle_chart_command(&storage, &settings)?;
        }
        Some(Commands::Insights) => {
            handle_insights_command(&storage, &settings)?;
        }
        Some(Commands::Export(args)) => {
            handle_export_command(&storage, &settings, args)?;
        }
        Some(Commands::Tui) => {
            smartbudgetx::tui::run_tui(&storage, &settings)?;
        }
        Some(Commands::Config) => {
            println!("SmartBudgetX Configuration");
            println!("==========================");
            println!("Base directory:   {}", paths.base_dir().display());
            println!("Settings file:    {}", paths.settings_file().display());
            println!("Session file:     {}", paths.session_file().display());
            println!("Audit log:        {}", paths.audit_log().display());
            println!("Export directory: {}", paths.export_dir().display());
            println!();
            println!("Settings:");
            println!("  Currency symbol:       {}", settings.currency_symbol);
            println!("  Report file name:      {}", settings.report_file_name);
            println!("  Default export format: {}", settings.default_export_format);
            println!("  Audit log enabled:     {}", settings.audit_enabled);
        }
        Some(Commands::History { limit }) => {
            handle_history_command(&storage, limit)?;
        }
        None => {
            println!("SmartBudgetX - 50/30/20 budgeting from the terminal");
            println!();
            println!("Run 'smartbudgetx --help' for usage information.");
            println!("Run 'smartbudgetx tui' to launch the interactive interface.");
        }
    }

    Ok(())
}
