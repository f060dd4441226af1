//! Investment areas step
//!
//! Multi-select: each number entered toggles that option. An empty answer
//! moves on.

use std::io::{BufRead, Write};

use crate::error::BudgetResult;
use crate::models::InvestArea;
use crate::setup::wizard::OnboardingWizard;

use super::{navigation, Prompter, StepAction};

pub struct InvestAreasStep;

impl InvestAreasStep {
    pub fn run<R: BufRead, W: Write>(
        prompter: &mut Prompter<R, W>,
        wizard: &mut OnboardingWizard,
    ) -> BudgetResult<StepAction> {
        loop {
            for (i, area) in InvestArea::ALL.iter().enumerate() {
                let mark = if wizard.draft().invest_areas.contains(area) {
                    "x"
                } else {
                    " "
                };
                prompter.say(&format!("  {}. [{}] {}", i + 1, mark, area))?;
            }

            let Some(answer) = prompter.ask("Toggle options (e.g. 1 3), Enter to continue: ")?
            else {
                return Ok(StepAction::Cancel);
            };

            if answer.is_empty() {
                return Ok(StepAction::Next);
            }
            if let Some(action) = navigation(&answer) {
                return Ok(action);
            }

            for token in answer.split(|c: char| c == ',' || c.is_whitespace()) {
                match parse_choice(token) {
                    Some(area) => wizard.toggle_invest(area),
                    None if token.is_empty() => {}
                    None => prompter.say(&format!("  Ignoring '{}'", token))?,
                }
            }
        }
    }
}

fn parse_choice(token: &str) -> Option<InvestArea> {
    let n: usize = token.parse().ok()?;
    InvestArea::ALL.get(n.checked_sub(1)?).copied()
}
