// src/formatting.rs
//
// Display helpers for prices and mileages shown in reports.

use thiserror::Error;

#[derive(Debug, Error, PartialEq)]
pub enum FormatError {
    #[error("cannot format negative value {0}")]
    Negative(i64),
    #[error("cannot format non-finite value {0}")]
    NotFinite(f64),
}

/// A fixed currency display rule: `prefix` + grouped whole units + `suffix`.
#[derive(Debug, Clone, Copy)]
pub struct CurrencyFormat {
    pub prefix: &'static str,
    pub suffix: &'static str,
    pub thousands_separator: char,
}

impl CurrencyFormat {
    /// `€ 25.037,-`
    pub const EURO: CurrencyFormat = CurrencyFormat {
        prefix: "€ ",
        suffix: ",-",
        thousands_separator: '.',
    };

    /// Formats an amount, dropping any fractional part (averages come back
    /// from SQLite as floats).
    pub fn format(&self, amount: f64) -> Result<String, FormatError> {
        if !amount.is_finite() {
            return Err(FormatError::NotFinite(amount));
        }
        let whole = amount.trunc();
        if whole < 0.0 {
            return Err(FormatError::Negative(whole as i64));
        }
        self.format_whole(whole as i64)
    }

    /// Formats a whole amount exactly, for prices stored as integers.
    pub fn format_whole(&self, amount: i64) -> Result<String, FormatError> {
        let grouped = group_with(amount, self.thousands_separator)?;
        Ok(format!("{}{}{}", self.prefix, grouped, self.suffix))
    }
}

/// Renders `n` as `1.234.567`.
pub fn group_thousands(n: i64) -> Result<String, FormatError> {
    group_with(n, CurrencyFormat::EURO.thousands_separator)
}

pub fn format_currency(amount: f64) -> Result<String, FormatError> {
    CurrencyFormat::EURO.format(amount)
}

pub fn format_mileage(km: i64) -> Result<String, FormatError> {
    Ok(format!("{} KM", group_thousands(km)?))
}

fn group_with(n: i64, separator: char) -> Result<String, FormatError> {
    if n < 0 {
        return Err(FormatError::Negative(n));
    }

    let mut groups = Vec::new();
    let mut rest = n;
    while rest >= 1000 {
        groups.push(format!("{:03}", rest % 1000));
        rest /= 1000;
    }
    groups.push(rest.to_string());
    groups.reverse();

    Ok(groups.join(&separator.to_string()))
}
