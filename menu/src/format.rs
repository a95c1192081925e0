//! Currency label formatting.

/// How prices are rendered into labels
///
/// Amounts are whole currency units grouped by thousands.
///
/// # Example
///
/// ```
/// use menu_order::CurrencyFormat;
///
/// assert_eq!(CurrencyFormat::default().format(1_234_500), "1,234,500");
/// assert_eq!(CurrencyFormat::won().format(4_500), "4,500원");
/// assert_eq!(CurrencyFormat::prefixed("$").format(12), "$12");
/// ```
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct CurrencyFormat {
    /// Currency symbol; empty for none
    pub symbol: String,
    /// Whether the symbol follows the number
    pub symbol_after: bool,
    /// Thousands separator
    pub separator: char,
}

impl CurrencyFormat {
    /// Korean won, `1,000원`
    #[must_use]
    pub fn won() -> Self {
        Self {
            symbol: "원".to_string(),
            symbol_after: true,
            separator: ',',
        }
    }

    /// Symbol before the number, e.g. `$1,000`
    #[must_use]
    pub fn prefixed(symbol: impl Into<String>) -> Self {
        Self {
            symbol: symbol.into(),
            symbol_after: false,
            separator: ',',
        }
    }

    /// Set the thousands separator
    #[must_use]
    pub fn with_separator(mut self, separator: char) -> Self {
        self.separator = separator;
        self
    }

    /// Render an amount
    #[must_use]
    pub fn format(&self, amount: u64) -> String {
        let digits = amount.to_string();
        let mut grouped = String::with_capacity(digits.len() + digits.len() / 3);

        for (i, digit) in digits.chars().enumerate() {
            if i > 0 && (digits.len() - i) % 3 == 0 {
                grouped.push(self.separator);
            }
            grouped.push(digit);
        }

        if self.symbol.is_empty() {
            grouped
        } else if self.symbol_after {
            format!("{grouped}{}", self.symbol)
        } else {
            format!("{}{grouped}", self.symbol)
        }
    }
}

impl Default for CurrencyFormat {
    fn default() -> Self {
        Self {
            symbol: String::new(),
            symbol_after: false,
            separator: ',',
        }
    }
}
