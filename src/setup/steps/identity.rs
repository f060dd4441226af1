//! Identity step
//!
//! Collects the user's name and financial goal. Empty answers keep the
//! current value.

use std::io::{BufRead, Write};

use crate::error::BudgetResult;
use crate::setup::wizard::OnboardingWizard;

use super::{Prompter, StepAction};

pub struct IdentityStep;

impl IdentityStep {
    pub fn run<R: BufRead, W: Write>(
        prompter: &mut Prompter<R, W>,
        wizard: &mut OnboardingWizard,
    ) -> BudgetResult<StepAction> {
        let Some(name) = prompter.ask(&prompt("Your name (e.g., Alex)", &wizard.draft().name))?
        else {
            return Ok(StepAction::Cancel);
        };
        if !name.is_empty() {
            wizard.set_name(name);
        }

        let Some(goal) = prompter.ask(&prompt(
            "Financial goal (e.g., Save for a home down payment)",
            &wizard.draft().goal,
        ))?
        else {
            return Ok(StepAction::Cancel);
        };
        if !goal.is_empty() {
            wizard.set_goal(goal);
        }

        Ok(StepAction::Next)
    }
}

fn prompt(label: &str, current: &str) -> String {
    if current.is_empty() {
        format!("{}: ", label)
    } else {
        format!("{} [{}]: ", label, current)
    }
}
