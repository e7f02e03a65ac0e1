use std::fmt;
use std::iter::Sum;
use std::str::FromStr;

use rust_decimal::{Decimal, RoundingStrategy};

/// Amount of money in FCFA, kept as an exact decimal
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Money(pub Decimal);

impl Money {
    pub const ZERO: Self = Self(Decimal::ZERO);

    /// Lenient conversion for backend values: anything unreadable becomes zero
    pub fn coerce(input: &str) -> Self {
        return Self::parse(input).unwrap_or(Self::ZERO);
    }

    /// Keeps only digits, `.` and `-`, then reads the leading decimal number.
    /// Returns `None` when there is no number to read.
    pub fn parse(input: &str) -> Option<Self> {
        let kept: String = input
            .chars()
            .filter(|c| c.is_ascii_digit() || *c == '.' || *c == '-')
            .collect();

        let mut chars = kept.chars().peekable();

        let negative = chars.next_if_eq(&'-').is_some();

        let mut whole = String::new();
        while let Some(c) = chars.next_if(char::is_ascii_digit) {
            whole.push(c);
        }

        let mut fraction = String::new();
        if chars.next_if_eq(&'.').is_some() {
            while let Some(c) = chars.next_if(char::is_ascii_digit) {
                fraction.push(c);
            }
        }

        if whole.is_empty() && fraction.is_empty() {
            return None;
        }

        let literal = format!(
            "{}{}.{}",
            if negative { "-" } else { "" },
            if whole.is_empty() { "0" } else { whole.as_str() },
            if fraction.is_empty() { "0" } else { fraction.as_str() },
        );

        return match Decimal::from_str(&literal) {
            Ok(d) => Some(Self(d.normalize())),
            Err(e) => {
                log::warn!("Cannot read amount {input:?}: {e}");
                None
            }
        };
    }

    /// Renders as a grouped whole amount, e.g. `1 200 FCFA`
    pub fn format_fcfa(&self) -> String {
        let rounded = self
            .0
            .round_dp_with_strategy(0, RoundingStrategy::MidpointAwayFromZero);

        let digits = rounded.abs().trunc().to_string();

        let mut grouped = String::with_capacity(digits.len() + digits.len() / 3);
        for (idx, c) in digits.chars().enumerate() {
            if idx > 0 && (digits.len() - idx) % 3 == 0 {
                grouped.push(' ');
            }
            grouped.push(c);
        }

        let sign = if rounded.is_sign_negative() && !rounded.is_zero() {
            "-"
        } else {
            ""
        };

        return format!("{sign}{grouped} FCFA");
    }
}

impl fmt::Display for Money {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        return write!(f, "{}", self.0.normalize());
    }
}

impl From<i64> for Money {
    fn from(value: i64) -> Self {
        return Self(Decimal::from(value));
    }
}

impl<'a> Sum<&'a Money> for Money {
    fn sum<I: Iterator<Item = &'a Money>>(iter: I) -> Self {
        return Self(iter.fold(Decimal::ZERO, |acc, m| acc.saturating_add(m.0)));
    }
}
