//! Onboarding wizard steps
//!
//! One prompt module per wizard step. Each step reads answers through a
//! `Prompter`, applies them to the wizard draft and reports which
//! transition to take next.

pub mod identity;
pub mod invest_areas;
pub mod review;
pub mod stock_pref;

pub use identity::IdentityStep;
pub use invest_areas::InvestAreasStep;
pub use review::ReviewStep;
pub use stock_pref::StockPrefStep;

use std::io::{BufRead, Write};

use crate::error::BudgetResult;

/// Transition requested by a step
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StepAction {
    Next,
    Back,
    Finish,
    Cancel,
}

/// Line-oriented prompt over any reader/writer pair
pub struct Prompter<R, W> {
    input: R,
    output: W,
}

impl<R: BufRead, W: Write> Prompter<R, W> {
    pub fn new(input: R, output: W) -> Self {
        Self { input, output }
    }

    /// Print a prompt and read one trimmed line; `None` at end of input
    pub fn ask(&mut self, prompt: &str) -> BudgetResult<Option<String>> {
        write!(self.output, "{}", prompt)?;
        self.output.flush()?;

        let mut line = String::new();
        if self.input.read_line(&mut line)? == 0 {
            writeln!(self.output)?;
            return Ok(None);
        }
        Ok(Some(line.trim().to_string()))
    }

    /// Print one line
    pub fn say(&mut self, text: &str) -> BudgetResult<()> {
        writeln!(self.output, "{}", text)?;
        Ok(())
    }

    pub fn heading(&mut self, title: &str) -> BudgetResult<()> {
        writeln!(self.output)?;
        writeln!(self.output, "{}", title)?;
        writeln!(self.output, "{}", "=".repeat(title.chars().count()))?;
        Ok(())
    }

    pub fn banner(&mut self, title: &str) -> BudgetResult<()> {
        let rule = "=".repeat(43);
        writeln!(self.output)?;
        writeln!(self.output, "{}", rule)?;
        writeln!(self.output, "  {}", title)?;
        writeln!(self.output, "{}", rule)?;
        writeln!(self.output, "Type 'b' to go back or 'q' to quit at any choice prompt.")?;
        Ok(())
    }
}

/// Shared handling of the back/quit shortcuts
pub(crate) fn navigation(answer: &str) -> Option<StepAction> {
    match answer.to_lowercase().as_str() {
        "b" | "back" => Some(StepAction::Back),
        "q" | "quit" => Some(StepAction::Cancel),
        _ => None,
    }
}
