//! Type-safe price representation using decimal arithmetic.

use rust_decimal::{Decimal, RoundingStrategy};
use serde::{Deserialize, Serialize};

/// A price with currency information.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Price {
    /// Amount in the currency's standard unit (e.g., dong, dollars).
    pub amount: Decimal,
    /// ISO 4217 currency code.
    pub currency_code: CurrencyCode,
}

impl Price {
    /// Create a new price.
    #[must_use]
    pub const fn new(amount: Decimal, currency_code: CurrencyCode) -> Self {
        Self {
            amount,
            currency_code,
        }
    }

    /// Create a price in Vietnamese dong, the store currency.
    #[must_use]
    pub const fn vnd(amount: Decimal) -> Self {
        Self::new(amount, CurrencyCode::VND)
    }

    /// Format for display.
    ///
    /// ```
    /// use gymstore_core::Price;
    /// use rust_decimal::Decimal;
    ///
    /// assert_eq!(Price::vnd(Decimal::from(1_850_000)).display(), "1.850.000₫");
    /// ```
    #[must_use]
    pub fn display(&self) -> String {
        let code = self.currency_code;
        let rounded = self
            .amount
            .round_dp_with_strategy(code.minor_units(), RoundingStrategy::MidpointAwayFromZero);
        let text = rounded.abs().to_string();
        let (whole, fraction) = text.split_once('.').unwrap_or((text.as_str(), ""));

        let mut grouped = String::with_capacity(whole.len() + whole.len() / 3);
        for (i, ch) in whole.chars().enumerate() {
            if i > 0 && (whole.len() - i) % 3 == 0 {
                grouped.push(code.group_separator());
            }
            grouped.push(ch);
        }

        let sign = if rounded.is_sign_negative() && !rounded.is_zero() {
            "-"
        } else {
            ""
        };

        match code {
            CurrencyCode::VND => format!("{sign}{grouped}{}", code.symbol()),
            _ => {
                let fraction = format!("{fraction:0<2}");
                format!("{sign}{}{grouped}.{fraction}", code.symbol())
            }
        }
    }
}

/// ISO 4217 currency codes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
pub enum CurrencyCode {
    #[default]
    VND,
    USD,
    EUR,
}

impl CurrencyCode {
    /// Currency symbol used in display strings.
    #[must_use]
    pub const fn symbol(&self) -> &'static str {
        match self {
            Self::VND => "₫",
            Self::USD => "$",
            Self::EUR => "€",
        }
    }

    /// Number of decimal places shown for this currency.
    #[must_use]
    pub const fn minor_units(&self) -> u32 {
        match self {
            Self::VND => 0,
            Self::USD | Self::EUR => 2,
        }
    }

    const fn group_separator(self) -> char {
        match self {
            Self::VND => '.',
            Self::USD | Self::EUR => ',',
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display_vnd() {
        assert_eq!(Price::vnd(Decimal::from(950_000)).display(), "950.000₫");
        assert_eq!(Price::vnd(Decimal::ZERO).display(), "0₫");
        assert_eq!(Price::vnd(Decimal::from(12_345_678)).display(), "12.345.678₫");
    }

    #[test]
    fn test_display_usd() {
        let price = Price::new(Decimal::new(123_456, 2), CurrencyCode::USD);
        assert_eq!(price.display(), "$1,234.56");
        let whole = Price::new(Decimal::from(20), CurrencyCode::USD);
        assert_eq!(whole.display(), "$20.00");
    }

    #[test]
    fn test_default_currency_is_store_currency() {
        assert_eq!(CurrencyCode::default(), CurrencyCode::VND);
    }
}
