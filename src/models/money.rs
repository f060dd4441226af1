//! Money type for representing currency amounts
//!
//! Internally stores amounts in cents (i64) to avoid floating-point precision
//! issues. Provides lenient parsing of user-entered decimal text, percentage
//! scaling and formatting.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::iter::Sum;
use std::ops::{Add, AddAssign, Neg, Sub, SubAssign};

/// Represents a monetary amount stored as cents (hundredths of the currency unit)
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Money(i64);

impl Money {
    /// Create a Money amount from cents
    ///
    /// # Examples
    /// ```
    /// use smartbudgetx::models::Money;
    /// let amount = Money::from_cents(1050); // $10.50
    /// assert_eq!(amount.to_string(), "$10.50");
    /// ```
    pub const fn from_cents(cents: i64) -> Self {
        Self(cents)
    }

    /// Create a Money amount from whole dollars
    pub const fn from_dollars(dollars: i64) -> Self {
        Self(dollars * 100)
    }

    /// Create a zero Money amount
    pub const fn zero() -> Self {
        Self(0)
    }

    /// Get the amount in cents
    pub const fn cents(&self) -> i64 {
        self.0
    }

    /// Get the whole dollars portion (truncated toward zero)
    pub const fn dollars(&self) -> i64 {
        self.0 / 100
    }

    /// Get the cents portion (0-99)
    pub const fn cents_part(&self) -> i64 {
        (self.0 % 100).abs()
    }

    /// Check if the amount is zero
    pub const fn is_zero(&self) -> bool {
        self.0 == 0
    }

    /// Check if the amount is positive
    pub const fn is_positive(&self) -> bool {
        self.0 > 0
    }

    /// Check if the amount is negative
    pub const fn is_negative(&self) -> bool {
        self.0 < 0
    }

    /// Get the absolute value
    pub const fn abs(&self) -> Self {
        Self(self.0.saturating_abs())
    }

    /// The amount in currency units, for chart scaling only
    pub fn as_f64(&self) -> f64 {
        self.0 as f64 / 100.0
    }

    /// Parse user-entered decimal text, never failing
    ///
    /// Reads the longest numeric prefix (optional sign, digits, one decimal
    /// point, digits). Text without any digit in that prefix is zero. Digits
    /// past the second decimal place round half away from zero.
    ///
    /// ```
    /// use smartbudgetx::models::Money;
    /// assert_eq!(Money::parse_lenient("12.34").cents(), 1234);
    /// assert_eq!(Money::parse_lenient("1.2.3").cents(), 120);
    /// assert_eq!(Money::parse_lenient("abc").cents(), 0);
    /// ```
    pub fn parse_lenient(input: &str) -> Self {
        let s = input.trim_start();
        let (negative, s) = match s.as_bytes().first() {
            Some(b'-') => (true, &s[1..]),
            Some(b'+') => (false, &s[1..]),
            _ => (false, s),
        };

        let mut whole: i64 = 0;
        let mut fraction: i64 = 0;
        let mut fraction_digits = 0;
        let mut round_up = false;
        let mut seen_digit = false;
        let mut in_fraction = false;

        for c in s.chars() {
            match c {
                '0'..='9' => {
                    let digit = i64::from(c as u8 - b'0');
                    seen_digit = true;
                    if !in_fraction {
                        whole = whole.saturating_mul(10).saturating_add(digit);
                    } else if fraction_digits < 2 {
                        fraction = fraction * 10 + digit;
                        fraction_digits += 1;
                    } else if fraction_digits == 2 {
                        round_up = digit >= 5;
                        fraction_digits += 1;
                    }
                }
                '.' if !in_fraction => in_fraction = true,
                _ => break,
            }
        }

        if !seen_digit {
            return Self::zero();
        }

        if fraction_digits == 1 {
            fraction *= 10;
        }

        let mut cents = whole.saturating_mul(100).saturating_add(fraction);
        if round_up {
            cents = cents.saturating_add(1);
        }

        Self(if negative { -cents } else { cents })
    }

    /// Scale by a share expressed in basis points (10_000 = 100%)
    ///
    /// Rounds half away from zero to the nearest cent.
    pub fn scale_bps(&self, basis_points: u32) -> Self {
        let product = i128::from(self.0) * i128::from(basis_points);
        let magnitude = (product.abs() + 5_000) / 10_000;
        let signed = if product < 0 { -magnitude } else { magnitude };
        Self(i64::try_from(signed).unwrap_or(if signed < 0 { i64::MIN } else { i64::MAX }))
    }

    /// Format with a currency symbol and exactly two decimals
    pub fn format_with_symbol(&self, symbol: &str) -> String {
        if self.is_negative() {
            format!("-{}{}.{:02}", symbol, self.dollars().abs(), self.cents_part())
        } else {
            format!("{}{}.{:02}", symbol, self.dollars(), self.cents_part())
        }
    }

    /// Format with thousands separators, dropping a zero fraction
    ///
    /// `450050` cents renders as `$4,500.5`, `450000` as `$4,500`.
    pub fn format_grouped(&self, symbol: &str) -> String {
        let digits = self.dollars().abs().to_string();
        let mut grouped = String::with_capacity(digits.len() + digits.len() / 3);
        for (i, c) in digits.chars().enumerate() {
            if i > 0 && (digits.len() - i) % 3 == 0 {
                grouped.push(',');
            }
            grouped.push(c);
        }

        let fraction = match self.cents_part() {
            0 => String::new(),
            c if c % 10 == 0 => format!(".{}", c / 10),
            c => format!(".{:02}", c),
        };

        let sign = if self.is_negative() { "-" } else { "" };
        format!("{}{}{}{}", sign, symbol, grouped, fraction)
    }
}

impl Default for Money {
    fn default() -> Self {
        Self::zero()
    }
}

impl fmt::Display for Money {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.format_with_symbol("$"))
    }
}

// Arithmetic saturates at the i64 bounds
impl Add for Money {
    type Output = Self;

    fn add(self, other: Self) -> Self {
        Self(self.0.saturating_add(other.0))
    }
}

impl AddAssign for Money {
    fn add_assign(&mut self, other: Self) {
        self.0 = self.0.saturating_add(other.0);
    }
}

impl Sub for Money {
    type Output = Self;

    fn sub(self, other: Self) -> Self {
        Self(self.0.saturating_sub(other.0))
    }
}

impl SubAssign for Money {
    fn sub_assign(&mut self, other: Self) {
        self.0 = self.0.saturating_sub(other.0);
    }
}

impl Neg for Money {
    type Output = Self;

    fn neg(self) -> Self {
        Self(self.0.saturating_neg())
    }
}

impl Sum for Money {
    fn sum<I: Iterator<Item = Self>>(iter: I) -> Self {
        iter.fold(Self::zero(), |acc, m| acc + m)
    }
}

impl<'a> Sum<&'a Money> for Money {
    fn sum<I: Iterator<Item = &'a Money>>(iter: I) -> Self {
        iter.fold(Self::zero(), |acc, m| acc + *m)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_lenient_plain_values() {
        assert_eq!(Money::parse_lenient("4500").cents(), 450_000);
        assert_eq!(Money::parse_lenient("10.5").cents(), 1050);
        assert_eq!(Money::parse_lenient("0.07").cents(), 7);
        assert_eq!(Money::parse_lenient("12.").cents(), 1200);
        assert_eq!(Money::parse_lenient(".5").cents(), 50);
        assert_eq!(Money::parse_lenient("-200").cents(), -20_000);
    }

    #[test]
    fn test_parse_lenient_falls_back_to_zero() {
        assert_eq!(Money::parse_lenient(""), Money::zero());
        assert_eq!(Money::parse_lenient("."), Money::zero());
        assert_eq!(Money::parse_lenient("abc"), Money::zero());
        assert_eq!(Money::parse_lenient("-"), Money::zero());
    }

    #[test]
    fn test_parse_lenient_reads_numeric_prefix() {
        assert_eq!(Money::parse_lenient("12.3.4").cents(), 1230);
        assert_eq!(Money::parse_lenient("  42abc").cents(), 4200);
        assert_eq!(Money::parse_lenient("007").cents(), 700);
    }

    #[test]
    fn test_parse_lenient_rounds_third_decimal() {
        assert_eq!(Money::parse_lenient("1.005").cents(), 101);
        assert_eq!(Money::parse_lenient("1.004").cents(), 100);
        assert_eq!(Money::parse_lenient("1.0049999").cents(), 100);
    }

    #[test]
    fn test_scale_bps() {
        let amount = Money::from_dollars(1000);
        assert_eq!(amount.scale_bps(6_000), Money::from_dollars(600));
        assert_eq!(amount.scale_bps(1_000), Money::from_dollars(100));
        assert_eq!(Money::from_cents(1).scale_bps(5_000), Money::from_cents(1));
        assert_eq!(Money::from_cents(-1).scale_bps(5_000), Money::from_cents(-1));
    }

    #[test]
    fn test_display() {
        assert_eq!(Money::from_cents(1050).to_string(), "$10.50");
        assert_eq!(Money::from_cents(-1050).to_string(), "-$10.50");
        assert_eq!(Money::zero().to_string(), "$0.00");
    }

    #[test]
    fn test_format_grouped() {
        assert_eq!(Money::from_dollars(4500).format_grouped("$"), "$4,500");
        assert_eq!(Money::from_cents(450_050).format_grouped("$"), "$4,500.5");
        assert_eq!(Money::from_cents(123_456_789).format_grouped("$"), "$1,234,567.89");
        assert_eq!(Money::from_dollars(-200).format_grouped("$"), "-$200");
        assert_eq!(Money::zero().format_grouped("$"), "$0");
    }

    #[test]
    fn test_arithmetic_saturates() {
        let max = Money::from_cents(i64::MAX);
        assert_eq!(max + Money::from_cents(1), max);
        assert_eq!(-max - Money::from_dollars(5), Money::from_cents(i64::MIN));
        assert_eq!(Money::from_cents(i64::MIN).abs(), max);

        let mut running = max;
        running += max;
        assert_eq!(running, max);

        let total: Money = [max, max, Money::from_cents(-1)].iter().sum();
        assert_eq!(total.cents(), i64::MAX - 1);
    }

    #[test]
    fn test_sum() {
        let amounts = [Money::from_cents(100), Money::from_cents(250)];
        let total: Money = amounts.iter().sum();
        assert_eq!(total.cents(), 350);
    }
}
