//! Onboarding wizard
//!
//! A four-step linear state machine collecting the onboarding profile. The
//! wizard is driven either by the interactive prompt flow in this module or
//! by the TUI onboarding panel; both call the same transitions.

use std::io::{BufRead, Write};

use tracing::debug;

use crate::error::BudgetResult;
use crate::models::{InvestArea, OnboardingProfile, StockPreference};

use super::steps::{
    IdentityStep, InvestAreasStep, Prompter, ReviewStep, StepAction, StockPrefStep,
};

/// The four wizard steps, in order
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Default)]
pub enum OnboardingStep {
    #[default]
    Identity,
    InvestAreas,
    StockPref,
    Review,
}

impl OnboardingStep {
    pub const ALL: [OnboardingStep; 4] = [
        OnboardingStep::Identity,
        OnboardingStep::InvestAreas,
        OnboardingStep::StockPref,
        OnboardingStep::Review,
    ];

    /// Zero-based position
    pub fn index(&self) -> usize {
        match self {
            OnboardingStep::Identity => 0,
            OnboardingStep::InvestAreas => 1,
            OnboardingStep::StockPref => 2,
            OnboardingStep::Review => 3,
        }
    }

    /// The following step; the last step maps to itself
    pub fn next(&self) -> Self {
        Self::ALL[(self.index() + 1).min(Self::ALL.len() - 1)]
    }

    /// The preceding step; the first step maps to itself
    pub fn back(&self) -> Self {
        Self::ALL[self.index().saturating_sub(1)]
    }

    pub fn title(&self) -> &'static str {
        match self {
            OnboardingStep::Identity => "About you",
            OnboardingStep::InvestAreas => "Where do you want to invest?",
            OnboardingStep::StockPref => "Preferred stocks / industries",
            OnboardingStep::Review => "Review",
        }
    }

    pub fn is_last(&self) -> bool {
        *self == OnboardingStep::Review
    }
}

/// Wizard state: the current step and the draft profile
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct OnboardingWizard {
    step: OnboardingStep,
    draft: OnboardingProfile,
}

impl OnboardingWizard {
    /// A wizard at the first step with an empty draft
    pub fn new() -> Self {
        Self::default()
    }

    /// Start from an existing profile, e.g. when onboarding again
    pub fn with_draft(draft: OnboardingProfile) -> Self {
        Self {
            step: OnboardingStep::Identity,
            draft,
        }
    }

    pub fn step(&self) -> OnboardingStep {
        self.step
    }

    pub fn draft(&self) -> &OnboardingProfile {
        &self.draft
    }

    /// "Step N of 4"
    pub fn progress_label(&self) -> String {
        format!("Step {} of {}", self.step.index() + 1, OnboardingStep::ALL.len())
    }

    /// Advance one step, staying put at Review
    pub fn next(&mut self) {
        self.step = self.step.next();
    }

    /// Go back one step, staying put at Identity
    pub fn back(&mut self) {
        self.step = self.step.back();
    }

    pub fn set_name(&mut self, name: impl Into<String>) {
        self.draft.name = name.into();
    }

    pub fn set_goal(&mut self, goal: impl Into<String>) {
        self.draft.goal = goal.into();
    }

    /// Flip membership of one investment area; new picks go last
    pub fn toggle_invest(&mut self, area: InvestArea) {
        let areas = &mut self.draft.invest_areas;
        match areas.iter().position(|a| *a == area) {
            Some(index) => {
                areas.remove(index);
            }
            None => areas.push(area),
        }
    }

    pub fn set_stock_pref(&mut self, preference: Option<StockPreference>) {
        self.draft.stock_pref = preference;
    }

    /// Whether `finish` will emit a profile
    pub fn can_finish(&self) -> bool {
        self.step.is_last()
    }

    /// Emit the draft as the finished profile
    ///
    /// Only available on the Review step; the draft is emitted as-is,
    /// however incomplete. Calling it again emits the current draft again.
    pub fn finish(&self) -> Option<OnboardingProfile> {
        self.can_finish().then(|| self.draft.clone())
    }

    /// Drive the wizard through the prompt steps until it finishes
    ///
    /// Returns `None` when the user quits or input ends early.
    pub fn run_interactive<R: BufRead, W: Write>(
        &mut self,
        input: R,
        output: W,
    ) -> BudgetResult<Option<OnboardingProfile>> {
        let mut prompter = Prompter::new(input, output);
        prompter.banner("Welcome to SmartBudgetX")?;

        loop {
            prompter.heading(&format!("{}: {}", self.progress_label(), self.step.title()))?;

            let action = match self.step {
                OnboardingStep::Identity => IdentityStep::run(&mut prompter, self)?,
                OnboardingStep::InvestAreas => InvestAreasStep::run(&mut prompter, self)?,
                OnboardingStep::StockPref => StockPrefStep::run(&mut prompter, self)?,
                OnboardingStep::Review => ReviewStep::run(&mut prompter, self)?,
            };
            debug!(step = ?self.step, ?action, "Onboarding step answered");

            match action {
                StepAction::Next => self.next(),
                StepAction::Back => self.back(),
                StepAction::Finish => return Ok(self.finish()),
                StepAction::Cancel => {
                    prompter.say("Onboarding cancelled.")?;
                    return Ok(None);
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_starts_at_identity() {
        let wizard = OnboardingWizard::new();
        assert_eq!(wizard.step(), OnboardingStep::Identity);
        assert_eq!(wizard.progress_label(), "Step 1 of 4");
    }

    #[test]
    fn test_back_is_clamped_at_first_step() {
        let mut wizard = OnboardingWizard::new();
        wizard.back();
        assert_eq!(wizard.step().index(), 0);
    }

    #[test]
    fn test_next_is_clamped_at_last_step() {
        let mut wizard = OnboardingWizard::new();
        for _ in 0..10 {
            wizard.next();
        }
        assert_eq!(wizard.step(), OnboardingStep::Review);
        assert_eq!(wizard.step().index(), 3);
    }

    #[test]
    fn test_next_then_back_round_trips() {
        let mut wizard = OnboardingWizard::new();
        wizard.next();
        wizard.next();
        assert_eq!(wizard.step(), OnboardingStep::StockPref);
        wizard.back();
        assert_eq!(wizard.step(), OnboardingStep::InvestAreas);
    }

    #[test]
    fn test_toggle_twice_restores_membership() {
        let mut wizard = OnboardingWizard::new();
        wizard.toggle_invest(InvestArea::Crypto);
        assert!(wizard.draft().invest_areas.contains(&InvestArea::Crypto));
        wizard.toggle_invest(InvestArea::Crypto);
        assert!(wizard.draft().invest_areas.is_empty());
    }

    #[test]
    fn test_invest_areas_keep_pick_order() {
        let mut wizard = OnboardingWizard::new();
        wizard.toggle_invest(InvestArea::Crypto);
        wizard.toggle_invest(InvestArea::Stocks);
        assert_eq!(wizard.draft().display_invest_areas(), "Crypto, Stocks");

        // Re-picking moves an area to the end
        wizard.toggle_invest(InvestArea::Crypto);
        wizard.toggle_invest(InvestArea::Crypto);
        assert_eq!(wizard.draft().display_invest_areas(), "Stocks, Crypto");
    }

    #[test]
    fn test_finish_only_on_review() {
        let mut wizard = OnboardingWizard::new();
        wizard.set_name("Alex");
        assert!(wizard.finish().is_none());

        wizard.next();
        wizard.next();
        wizard.next();
        let profile = wizard.finish().unwrap();
        assert_eq!(profile.name, "Alex");
        assert!(profile.goal.is_empty());
        assert!(profile.stock_pref.is_none());
    }

    #[test]
    fn test_refinish_emits_current_draft() {
        let mut wizard = OnboardingWizard::new();
        for _ in 0..3 {
            wizard.next();
        }
        let first = wizard.finish().unwrap();

        wizard.back();
        wizard.set_stock_pref(Some(StockPreference::Tech));
        wizard.next();
        let second = wizard.finish().unwrap();

        assert!(first.stock_pref.is_none());
        assert_eq!(second.stock_pref, Some(StockPreference::Tech));
    }

    #[test]
    fn test_interactive_flow() {
        let answers = "Alex\nBuy a home\n1 3\n\n1\ny\n";
        let mut output = Vec::new();
        let mut wizard = OnboardingWizard::new();

        let profile = wizard
            .run_interactive(answers.as_bytes(), &mut output)
            .unwrap()
            .unwrap();

        assert_eq!(profile.name, "Alex");
        assert_eq!(profile.goal, "Buy a home");
        assert_eq!(profile.display_invest_areas(), "Stocks, ETFs");
        assert_eq!(profile.stock_pref, Some(StockPreference::Tech));

        let shown = String::from_utf8(output).unwrap();
        assert!(shown.contains("Step 4 of 4"));
        assert!(shown.contains("Stock preference: Tech"));
    }

    #[test]
    fn test_interactive_back_from_review() {
        // Review -> back to StockPref, pick Energy, then finish
        let answers = "\n\n\n\nb\n2\ny\n";
        let mut wizard = OnboardingWizard::new();

        let profile = wizard
            .run_interactive(answers.as_bytes(), Vec::new())
            .unwrap()
            .unwrap();
        assert_eq!(profile.stock_pref, Some(StockPreference::Energy));
        assert!(profile.name.is_empty());
    }

    #[test]
    fn test_interactive_eof_cancels() {
        let mut wizard = OnboardingWizard::new();
        let result = wizard.run_interactive("Alex\n".as_bytes(), Vec::new()).unwrap();
        assert!(result.is_none());
        assert_eq!(wizard.draft().name, "Alex");
    }
}
