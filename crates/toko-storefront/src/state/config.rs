//! # Configuration State
//!
//! Store-level configuration loaded at startup. Read-only afterwards, so
//! no mutex is needed.

use serde::{Deserialize, Serialize};

/// Application configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ConfigState {
    /// Store name shown in the shell chrome.
    pub store_name: String,

    /// Currency code (ISO 4217).
    pub currency_code: String,

    /// Currency symbol (for display).
    pub currency_symbol: String,

    /// Number of decimal places for currency. Rupiah uses none.
    pub currency_decimals: u8,
}

impl Default for ConfigState {
    fn default() -> Self {
        ConfigState {
            store_name: "Toko".to_string(),
            currency_code: "IDR".to_string(),
            currency_symbol: "Rp".to_string(),
            currency_decimals: 0,
        }
    }
}

impl ConfigState {
    /// Creates a ConfigState from environment variables and defaults.
    ///
    /// ## Environment Variables
    /// - `TOKO_STORE_NAME`: Override store name
    pub fn from_env() -> Self {
        let mut config = ConfigState::default();

        if let Ok(store_name) = std::env::var("TOKO_STORE_NAME") {
            config.store_name = store_name;
        }

        config
    }

    /// Formats a minor-unit amount as a currency string, id-ID style:
    /// thousands grouped with `.`, decimals (if any) after `,`.
    ///
    /// ## Example
    /// ```rust,ignore
    /// let config = ConfigState::default();
    /// assert_eq!(config.format_currency(17_999_000), "Rp 17.999.000");
    /// ```
    pub fn format_currency(&self, minor: i64) -> String {
        let divisor = 10_i64.pow(u32::from(self.currency_decimals));
        let whole = (minor / divisor).abs();
        let frac = (minor % divisor).abs();

        let digits = whole.to_string();
        let mut grouped = String::with_capacity(digits.len() + digits.len() / 3);
        for (i, ch) in digits.chars().enumerate() {
            if i > 0 && (digits.len() - i) % 3 == 0 {
                grouped.push('.');
            }
            grouped.push(ch);
        }

        let mut out = String::new();
        if minor < 0 {
            out.push('-');
        }
        out.push_str(&self.currency_symbol);
        out.push(' ');
        out.push_str(&grouped);
        if self.currency_decimals > 0 {
            out.push(',');
            out.push_str(&format!(
                "{:0width$}",
                frac,
                width = usize::from(self.currency_decimals)
            ));
        }
        out
    }
}
