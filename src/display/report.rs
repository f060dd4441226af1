//! Report formatting utilities for terminal output

use crate::models::Money;

/// Format a money amount with color hints for terminal display
pub fn format_money_colored(amount: Money, symbol: &str) -> String {
    let text = amount.format_grouped(symbol);
    if amount.is_negative() {
        format!("\x1b[31m{}\x1b[0m", text) // Red for negative
    } else if amount.is_positive() {
        format!("\x1b[32m{}\x1b[0m", text) // Green for positive
    } else {
        text
    }
}

/// Format a fraction (0.6) as a whole percentage ("60%")
pub fn format_percentage(fraction: f64) -> String {
    format!("{:.0}%", fraction * 100.0)
}

/// Create a simple bar chart representation
pub fn format_bar(value: f64, max_value: f64, width: usize) -> String {
    if max_value <= 0.0 || value <= 0.0 {
        return " ".repeat(width);
    }

    let filled = ((value / max_value) * width as f64).round() as usize;
    let filled = filled.min(width);

    format!("{}{}", "█".repeat(filled), "░".repeat(width - filled))
}

/// Truncate a string to a maximum number of characters with ellipsis
pub fn truncate(s: &str, max_len: usize) -> String {
    if s.chars().count() <= max_len {
        s.to_string()
    } else if max_len <= 3 {
        ".".repeat(max_len)
    } else {
        let head: String = s.chars().take(max_len - 3).collect();
        format!("{}...", head)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_percentage() {
        assert_eq!(format_percentage(0.6), "60%");
        assert_eq!(format_percentage(0.1), "10%");
    }

    #[test]
    fn test_format_bar() {
        let bar = format_bar(50.0, 100.0, 10);
        assert_eq!(bar.chars().filter(|c| *c == '█').count(), 5);
        assert_eq!(format_bar(0.0, 100.0, 4), "    ");
    }

    #[test]
    fn test_truncate() {
        assert_eq!(truncate("Groceries / Essentials", 12), "Groceries...");
        assert_eq!(truncate("Rent", 12), "Rent");
    }

    #[test]
    fn test_colored_money() {
        assert!(format_money_colored(Money::from_dollars(-200), "$").contains("-$200"));
        assert_eq!(format_money_colored(Money::zero(), "$"), "$0");
    }
}
