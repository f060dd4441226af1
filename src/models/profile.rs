//! Onboarding profile model
//!
//! The profile is produced once the onboarding wizard finishes. Investment
//! areas and the stock preference are closed enumerations.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::error::BudgetError;

/// Placeholder rendered for empty profile fields
pub const EMPTY_PLACEHOLDER: &str = "—";

/// Where the user wants to invest
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum InvestArea {
    Stocks,
    Crypto,
    #[serde(rename = "ETFs")]
    Etfs,
    #[serde(rename = "Mutual Funds")]
    MutualFunds,
    #[serde(rename = "Real Estate")]
    RealEstate,
}

impl InvestArea {
    /// All options in display order
    pub const ALL: [InvestArea; 5] = [
        InvestArea::Stocks,
        InvestArea::Crypto,
        InvestArea::Etfs,
        InvestArea::MutualFunds,
        InvestArea::RealEstate,
    ];

    /// Display label
    pub fn label(&self) -> &'static str {
        match self {
            InvestArea::Stocks => "Stocks",
            InvestArea::Crypto => "Crypto",
            InvestArea::Etfs => "ETFs",
            InvestArea::MutualFunds => "Mutual Funds",
            InvestArea::RealEstate => "Real Estate",
        }
    }
}

impl fmt::Display for InvestArea {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl FromStr for InvestArea {
    type Err = BudgetError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let wanted = normalize(s);
        InvestArea::ALL
            .into_iter()
            .find(|area| normalize(area.label()) == wanted)
            .ok_or_else(|| {
                BudgetError::Validation(format!(
                    "Unknown investment area '{}'. Options: {}",
                    s.trim(),
                    join_labels(InvestArea::ALL.iter().map(InvestArea::label))
                ))
            })
    }
}

/// Preferred stock sector
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum StockPreference {
    Tech,
    Energy,
    Healthcare,
    Diversified,
}

impl StockPreference {
    /// All options in display order
    pub const ALL: [StockPreference; 4] = [
        StockPreference::Tech,
        StockPreference::Energy,
        StockPreference::Healthcare,
        StockPreference::Diversified,
    ];

    /// Display label
    pub fn label(&self) -> &'static str {
        match self {
            StockPreference::Tech => "Tech",
            StockPreference::Energy => "Energy",
            StockPreference::Healthcare => "Healthcare",
            StockPreference::Diversified => "Diversified",
        }
    }
}

impl fmt::Display for StockPreference {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl FromStr for StockPreference {
    type Err = BudgetError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let wanted = normalize(s);
        StockPreference::ALL
            .into_iter()
            .find(|pref| normalize(pref.label()) == wanted)
            .ok_or_else(|| {
                BudgetError::Validation(format!(
                    "Unknown stock preference '{}'. Options: {}",
                    s.trim(),
                    join_labels(StockPreference::ALL.iter().map(StockPreference::label))
                ))
            })
    }
}

/// The answers collected by the onboarding wizard
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct OnboardingProfile {
    /// Display name; may be empty
    #[serde(default)]
    pub name: String,

    /// Free-form financial goal; may be empty
    #[serde(default)]
    pub goal: String,

    /// Selected investment areas, in the order they were picked
    #[serde(default)]
    pub invest_areas: Vec<InvestArea>,

    /// Selected stock sector, if any
    #[serde(default)]
    pub stock_pref: Option<StockPreference>,
}

impl OnboardingProfile {
    /// Name for display, with the placeholder when empty
    pub fn display_name(&self) -> &str {
        placeholder_if_empty(&self.name)
    }

    /// Goal for display, with the placeholder when empty
    pub fn display_goal(&self) -> &str {
        placeholder_if_empty(&self.goal)
    }

    /// Comma-separated investment areas, with the placeholder when empty
    pub fn display_invest_areas(&self) -> String {
        if self.invest_areas.is_empty() {
            EMPTY_PLACEHOLDER.to_string()
        } else {
            join_labels(self.invest_areas.iter().map(InvestArea::label))
        }
    }

    /// Stock preference for display, with the placeholder when unset
    pub fn display_stock_pref(&self) -> &str {
        self.stock_pref
            .as_ref()
            .map(StockPreference::label)
            .unwrap_or(EMPTY_PLACEHOLDER)
    }

    /// Multi-line summary as shown on the review step
    pub fn review_lines(&self) -> Vec<(&'static str, String)> {
        vec![
            ("Name", self.display_name().to_string()),
            ("Goal", self.display_goal().to_string()),
            ("Invest in", self.display_invest_areas()),
            ("Stock preference", self.display_stock_pref().to_string()),
        ]
    }
}

fn placeholder_if_empty(value: &str) -> &str {
    if value.trim().is_empty() {
        EMPTY_PLACEHOLDER
    } else {
        value
    }
}

fn normalize(s: &str) -> String {
    s.chars()
        .filter(|c| !c.is_whitespace() && *c != '-' && *c != '_')
        .flat_map(char::to_lowercase)
        .collect()
}

fn join_labels<'a>(labels: impl Iterator<Item = &'a str>) -> String {
    labels.collect::<Vec<_>>().join(", ")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_invest_area_parsing() {
        assert_eq!("etfs".parse::<InvestArea>().unwrap(), InvestArea::Etfs);
        assert_eq!("mutual-funds".parse::<InvestArea>().unwrap(), InvestArea::MutualFunds);
        assert_eq!("Real Estate".parse::<InvestArea>().unwrap(), InvestArea::RealEstate);
        assert!("bonds".parse::<InvestArea>().unwrap_err().is_validation());
    }

    #[test]
    fn test_stock_preference_parsing() {
        assert_eq!("TECH".parse::<StockPreference>().unwrap(), StockPreference::Tech);
        assert_eq!(
            "healthcare".parse::<StockPreference>().unwrap(),
            StockPreference::Healthcare
        );
        assert!("gold".parse::<StockPreference>().is_err());
    }

    #[test]
    fn test_empty_profile_uses_placeholders() {
        let profile = OnboardingProfile::default();
        assert_eq!(profile.display_name(), EMPTY_PLACEHOLDER);
        assert_eq!(profile.display_goal(), EMPTY_PLACEHOLDER);
        assert_eq!(profile.display_invest_areas(), EMPTY_PLACEHOLDER);
        assert_eq!(profile.display_stock_pref(), EMPTY_PLACEHOLDER);
    }

    #[test]
    fn test_invest_areas_display_in_selection_order() {
        let mut profile = OnboardingProfile::default();
        profile.invest_areas.push(InvestArea::Crypto);
        profile.invest_areas.push(InvestArea::Stocks);
        assert_eq!(profile.display_invest_areas(), "Crypto, Stocks");
    }

    #[test]
    fn test_serde_uses_display_labels() {
        let mut profile = OnboardingProfile::default();
        profile.invest_areas.push(InvestArea::MutualFunds);
        profile.stock_pref = Some(StockPreference::Energy);

        let json = serde_json::to_string(&profile).unwrap();
        assert!(json.contains("\"Mutual Funds\""));
        assert!(json.contains("\"Energy\""));

        let back: OnboardingProfile = serde_json::from_str(&json).unwrap();
        assert_eq!(back, profile);
    }
}
