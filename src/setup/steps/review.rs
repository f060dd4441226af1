//! Review step
//!
//! Shows the draft and asks for confirmation before finishing.

use std::io::{BufRead, Write};

use crate::error::BudgetResult;
use crate::setup::wizard::OnboardingWizard;

use super::{navigation, Prompter, StepAction};

pub struct ReviewStep;

impl ReviewStep {
    pub fn run<R: BufRead, W: Write>(
        prompter: &mut Prompter<R, W>,
        wizard: &mut OnboardingWizard,
    ) -> BudgetResult<StepAction> {
        for (label, value) in wizard.draft().review_lines() {
            prompter.say(&format!("{}: {}", label, value))?;
        }
        prompter.say("")?;

        loop {
            let Some(answer) = prompter.ask("Start planning? (yes/b/q) [yes]: ")? else {
                return Ok(StepAction::Cancel);
            };

            match answer.to_lowercase().as_str() {
                "" | "y" | "yes" => return Ok(StepAction::Finish),
                other => match navigation(other) {
                    Some(action) => return Ok(action),
                    None => prompter.say("  Answer yes, b or q")?,
                },
            }
        }
    }
}
