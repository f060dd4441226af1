//! Onboarding CLI commands
//!
//! `onboard` runs the wizard, interactively on stdin or from flags, and
//! stores the finished profile. `profile` shows it.

use std::io;

use clap::Args;
use tracing::debug;

use crate::display::format_profile;
use crate::error::BudgetResult;
use crate::models::{InvestArea, StockPreference};
use crate::services::ProfileService;
use crate::setup::OnboardingWizard;
use crate::storage::Storage;

/// Onboarding options; with none given the wizard runs interactively
#[derive(Args, Debug, Default)]
pub struct OnboardArgs {
    /// Your name
    #[arg(long)]
    pub name: Option<String>,

    /// Your financial goal
    #[arg(long)]
    pub goal: Option<String>,

    /// Investment area to select (repeatable): Stocks, Crypto, ETFs,
    /// "Mutual Funds", "Real Estate"
    #[arg(long = "invest")]
    pub invest: Vec<InvestArea>,

    /// Preferred stock sector: Tech, Energy, Healthcare, Diversified
    #[arg(long)]
    pub stock: Option<StockPreference>,
}

impl OnboardArgs {
    fn is_empty(&self) -> bool {
        self.name.is_none() && self.goal.is_none() && self.invest.is_empty() && self.stock.is_none()
    }

    /// Walk a fresh wizard through every step using the flag values
    fn into_wizard(self) -> OnboardingWizard {
        let mut wizard = OnboardingWizard::new();

        wizard.set_name(self.name.unwrap_or_default());
        wizard.set_goal(self.goal.unwrap_or_default());
        wizard.next();

        for area in self.invest {
            if !wizard.draft().invest_areas.contains(&area) {
                wizard.toggle_invest(area);
            }
        }
        wizard.next();

        wizard.set_stock_pref(self.stock);
        wizard.next();

        wizard
    }
}

/// Handle `onboard`
pub fn handle_onboard_command(storage: &Storage, args: OnboardArgs) -> BudgetResult<()> {
    let service = ProfileService::new(storage);

    let profile = if args.is_empty() {
        let mut wizard = match service.get()? {
            Some(existing) => OnboardingWizard::with_draft(existing),
            None => OnboardingWizard::new(),
        };
        wizard.run_interactive(io::stdin().lock(), io::stdout())?
    } else {
        debug!(?args, "Onboarding from flags");
        args.into_wizard().finish()
    };

    match profile {
        Some(profile) => {
            let saved = service.complete(profile)?;
            println!("Profile saved.");
            println!();
            print!("{}", format_profile(&saved));
        }
        None => println!("No profile saved."),
    }

    Ok(())
}

/// Handle `profile`
pub fn handle_profile_command(storage: &Storage) -> BudgetResult<()> {
    match ProfileService::new(storage).require() {
        Ok(profile) => print!("{}", format_profile(&profile)),
        Err(e) if e.is_not_found() => {
            println!("No profile yet.");
            println!("Run 'smartbudgetx onboard' to create one.");
        }
        Err(e) => return Err(e),
    }
    Ok(())
}
