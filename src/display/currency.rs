//! Currency formatting
//!
//! Amounts are shown as `<symbol><grouped amount>`, e.g. `€1,234.50`. The
//! symbol comes from the user's currency descriptor, which has the form
//! `"<CODE> (<SYMBOL>)"`.

use crate::config::Settings;
use crate::models::Money;

/// Pull the symbol out of a descriptor like `"EUR (€)"`
///
/// The symbol is the text between the first `(` and the next `)`. A
/// descriptor missing either parenthesis is used whole.
pub fn extract_symbol(descriptor: &str) -> &str {
    descriptor
        .split_once('(')
        .and_then(|(_, rest)| rest.split_once(')'))
        .map(|(symbol, _)| symbol)
        .unwrap_or(descriptor)
}

/// Format with thousands separators and exactly two decimals: `-1,234.50`
pub fn format_grouped(amount: Money) -> String {
    let digits = amount.units().unsigned_abs().to_string();
    let mut grouped = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(ch);
    }

    let sign = if amount.is_negative() { "-" } else { "" };
    format!("{}{}.{:02}", sign, grouped, amount.cents_part())
}

/// Formats amounts with the currency symbol chosen in preferences
#[derive(Debug, Clone)]
pub struct CurrencyFormatter {
    symbol: String,
}

impl CurrencyFormatter {
    /// Build a formatter from a currency descriptor
    pub fn new(descriptor: &str) -> Self {
        Self {
            symbol: extract_symbol(descriptor).to_string(),
        }
    }

    /// Build a formatter from the user's current currency preference
    pub fn from_settings(settings: &Settings) -> Self {
        Self::new(&settings.currency_type)
    }

    pub fn format(&self, amount: Money) -> String {
        format!("{}{}", self.symbol, format_grouped(amount))
    }
}

impl Default for CurrencyFormatter {
    fn default() -> Self {
        Self::new(crate::config::settings::DEFAULT_CURRENCY_TYPE)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_extract_symbol() {
        assert_eq!(extract_symbol("USD ($)"), "$");
        assert_eq!(extract_symbol("EUR (€)"), "€");
        assert_eq!(extract_symbol("ZAR (R)"), "R");
        assert_eq!(extract_symbol("(£) GBP (x)"), "£");
    }

    #[test]
    fn test_malformed_descriptor_uses_whole_string() {
        assert_eq!(extract_symbol("Rs"), "Rs");
        assert_eq!(extract_symbol("INR (₹"), "INR (₹");
        assert_eq!(extract_symbol(""), "");
    }

    #[test]
    fn test_format_grouped() {
        assert_eq!(format_grouped(Money::from_cents(0)), "0.00");
        assert_eq!(format_grouped(Money::from_cents(5)), "0.05");
        assert_eq!(format_grouped(Money::from_cents(99_999)), "999.99");
        assert_eq!(format_grouped(Money::from_cents(100_000)), "1,000.00");
        assert_eq!(format_grouped(Money::from_cents(123_456_789)), "1,234,567.89");
        assert_eq!(format_grouped(Money::from_cents(-123_450)), "-1,234.50");
    }

    #[test]
    fn test_euro_example() {
        let formatter = CurrencyFormatter::new("EUR (€)");
        let amount = Money::from_decimal(1234.5).unwrap();
        assert_eq!(formatter.format(amount), "€1,234.50");
    }

    #[test]
    fn test_default_is_dollars() {
        let formatter = CurrencyFormatter::from_settings(&Settings::default());
        assert_eq!(formatter.format(Money::from_cents(-5000)), "$-50.00");
    }
}
