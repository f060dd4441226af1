//! Onboarding wizard
//!
//! Collects the user's name, goal, investment areas and stock preference
//! and emits them as a single profile when the review step is confirmed.

pub mod steps;
pub mod wizard;

pub use wizard::{OnboardingStep, OnboardingWizard};
