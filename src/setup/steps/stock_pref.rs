//! Stock preference step
//!
//! Single choice among the four sectors. An empty answer keeps the
//! current choice, which may be none.

use std::io::{BufRead, Write};

use crate::error::BudgetResult;
use crate::models::StockPreference;
use crate::setup::wizard::OnboardingWizard;

use super::{navigation, Prompter, StepAction};

pub struct StockPrefStep;

impl StockPrefStep {
    pub fn run<R: BufRead, W: Write>(
        prompter: &mut Prompter<R, W>,
        wizard: &mut OnboardingWizard,
    ) -> BudgetResult<StepAction> {
        for (i, pref) in StockPreference::ALL.iter().enumerate() {
            let mark = if wizard.draft().stock_pref == Some(*pref) {
                "*"
            } else {
                " "
            };
            prompter.say(&format!("  {}. ({}) {}", i + 1, mark, pref))?;
        }

        loop {
            let Some(answer) = prompter.ask("Select a preference, Enter to keep: ")? else {
                return Ok(StepAction::Cancel);
            };

            if answer.is_empty() {
                return Ok(StepAction::Next);
            }
            if let Some(action) = navigation(&answer) {
                return Ok(action);
            }

            let choice = answer
                .parse::<usize>()
                .ok()
                .and_then(|n| StockPreference::ALL.get(n.checked_sub(1)?).copied())
                .or_else(|| answer.parse::<StockPreference>().ok());

            match choice {
                Some(pref) => {
                    wizard.set_stock_pref(Some(pref));
                    return Ok(StepAction::Next);
                }
                None => prompter.say(&format!(
                    "  Please choose 1-{}",
                    StockPreference::ALL.len()
                ))?,
            }
        }
    }
}
