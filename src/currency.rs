//! Currency formatting
//!
//! Formatting is fully specified by [`CurrencyConfig`]; no locale data is
//! consulted, so output is byte-identical on every platform.

use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Thousands separator value that disables grouping
const NO_SEPARATOR: &str = "none";

/// Most fraction digits ever rendered; larger configured values are clamped
pub const MAX_DECIMALS: u32 = 20;

/// Where the currency symbol goes relative to the number
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SymbolPosition {
    #[default]
    Before,
    After,
}

/// Per-tenant currency display settings
///
/// Fields missing from a deserialized config are taken from [`CurrencyConfig::usd`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct CurrencyConfig {
    /// ISO 4217 code
    pub code: String,
    pub symbol: String,
    /// Digits after the decimal separator
    pub decimals: u32,
    #[serde(alias = "decimal_separator")]
    pub decimal_separator: String,
    /// Grouping separator; empty or `"none"` disables grouping
    #[serde(alias = "thousands_separator")]
    pub thousands_separator: String,
    pub position: SymbolPosition,
}

impl Default for CurrencyConfig {
    fn default() -> Self {
        Self::usd()
    }
}

impl CurrencyConfig {
    /// The fallback configuration: `$ 1,234.50`
    pub fn usd() -> Self {
        Self {
            code: "USD".to_string(),
            symbol: "$".to_string(),
            decimals: 2,
            decimal_separator: ".".to_string(),
            thousands_separator: ",".to_string(),
            position: SymbolPosition::Before,
        }
    }

    /// Look up a preset by ISO code (case-insensitive)
    pub fn preset(code: &str) -> Option<Self> {
        let config = match code.to_ascii_uppercase().as_str() {
            "USD" => Self::usd(),
            "EUR" => Self::usd()
                .with_code("EUR")
                .with_symbol("€")
                .with_separators(",", ".")
                .with_position(SymbolPosition::After),
            "GBP" => Self::usd().with_code("GBP").with_symbol("£"),
            "JPY" => Self::usd().with_code("JPY").with_symbol("¥").with_decimals(0),
            "INR" => Self::usd().with_code("INR").with_symbol("₹"),
            _ => return None,
        };
        Some(config)
    }

    pub fn with_code(mut self, code: impl Into<String>) -> Self {
        self.code = code.into();
        self
    }

    pub fn with_symbol(mut self, symbol: impl Into<String>) -> Self {
        self.symbol = symbol.into();
        self
    }

    pub fn with_decimals(mut self, decimals: u32) -> Self {
        self.decimals = decimals;
        self
    }

    /// Set the decimal and thousands separators
    pub fn with_separators(mut self, decimal: impl Into<String>, thousands: impl Into<String>) -> Self {
        self.decimal_separator = decimal.into();
        self.thousands_separator = thousands.into();
        self
    }

    pub fn with_position(mut self, position: SymbolPosition) -> Self {
        self.position = position;
        self
    }

    fn groups_thousands(&self) -> bool {
        !self.thousands_separator.is_empty()
            && !self.thousands_separator.eq_ignore_ascii_case(NO_SEPARATOR)
    }
}

/// A partially specified currency, applied on top of a base config
///
/// Used for store config tables where only some fields are given and the
/// rest come from the store's currency preset.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct CurrencyOverrides {
    pub code: Option<String>,
    pub symbol: Option<String>,
    pub decimals: Option<u32>,
    #[serde(alias = "decimal_separator")]
    pub decimal_separator: Option<String>,
    #[serde(alias = "thousands_separator")]
    pub thousands_separator: Option<String>,
    pub position: Option<SymbolPosition>,
}

impl CurrencyOverrides {
    /// Fill every field not given here from `base`
    pub fn apply(&self, base: CurrencyConfig) -> CurrencyConfig {
        let overrides = self.clone();
        CurrencyConfig {
            code: overrides.code.unwrap_or(base.code),
            symbol: overrides.symbol.unwrap_or(base.symbol),
            decimals: overrides.decimals.unwrap_or(base.decimals),
            decimal_separator: overrides.decimal_separator.unwrap_or(base.decimal_separator),
            thousands_separator: overrides
                .thousands_separator
                .unwrap_or(base.thousands_separator),
            position: overrides.position.unwrap_or(base.position),
        }
    }
}

/// An amount as it arrives from tenant or catalog data
#[derive(Debug, Clone, PartialEq)]
pub enum Amount {
    Number(f64),
    Text(String),
    Missing,
}

impl Amount {
    /// Parse into a finite number, if possible
    pub fn to_f64(&self) -> Option<f64> {
        let value = match self {
            Amount::Number(n) => *n,
            Amount::Text(s) => s.trim().parse::<f64>().ok()?,
            Amount::Missing => return None,
        };
        value.is_finite().then_some(value)
    }
}

impl From<f64> for Amount {
    fn from(value: f64) -> Self {
        Amount::Number(value)
    }
}

impl From<i64> for Amount {
    fn from(value: i64) -> Self {
        Amount::Number(value as f64)
    }
}

impl From<i32> for Amount {
    fn from(value: i32) -> Self {
        Amount::Number(f64::from(value))
    }
}

impl From<&str> for Amount {
    fn from(value: &str) -> Self {
        Amount::Text(value.to_string())
    }
}

impl From<String> for Amount {
    fn from(value: String) -> Self {
        Amount::Text(value)
    }
}

impl<T: Into<Amount>> From<Option<T>> for Amount {
    fn from(value: Option<T>) -> Self {
        value.map(Into::into).unwrap_or(Amount::Missing)
    }
}

impl From<&Value> for Amount {
    fn from(value: &Value) -> Self {
        match value {
            Value::Number(n) => n.as_f64().map(Amount::Number).unwrap_or(Amount::Missing),
            Value::String(s) => Amount::Text(s.clone()),
            _ => Amount::Missing,
        }
    }
}

/// Format an amount for display
///
/// Unparseable amounts format as zero. Without a config the USD default is
/// used.
///
/// # Example
///
/// ```rust
/// use storefront_engine::currency::{format, CurrencyConfig};
///
/// assert_eq!(format(1234.5, None), "$ 1,234.50");
/// assert_eq!(format("not-a-number", None), "$ 0.00");
///
/// let eur = CurrencyConfig::preset("EUR").unwrap();
/// assert_eq!(format("9876543.219", Some(&eur)), "9.876.543,22 €");
/// ```
pub fn format(amount: impl Into<Amount>, config: Option<&CurrencyConfig>) -> String {
    let fallback;
    let config = match config {
        Some(config) => config,
        None => {
            fallback = CurrencyConfig::usd();
            &fallback
        }
    };

    let amount = amount.into();
    let value = amount.to_f64().unwrap_or_else(|| {
        tracing::debug!(?amount, "unparseable amount, formatting as zero");
        0.0
    });

    let number = format_number(value, config);
    if config.symbol.is_empty() {
        return number;
    }
    match config.position {
        SymbolPosition::Before => format!("{} {}", config.symbol, number),
        SymbolPosition::After => format!("{} {}", number, config.symbol),
    }
}

/// Format the numeric part: rounding, grouping and separators, no symbol
///
/// Non-finite values format as zero. At most [`MAX_DECIMALS`] fraction digits
/// are rendered.
pub fn format_number(value: f64, config: &CurrencyConfig) -> String {
    let value = if value.is_finite() { value } else { 0.0 };
    let decimals = config.decimals.min(MAX_DECIMALS) as usize;
    let (int_digits, frac_digits) = round_half_up(value.abs(), decimals);

    let is_zero = int_digits.iter().chain(&frac_digits).all(|d| *d == 0);
    let mut out = String::new();
    if value.is_sign_negative() && !is_zero {
        out.push('-');
    }

    let int_len = int_digits.len();
    for (i, digit) in int_digits.iter().enumerate() {
        if i > 0 && (int_len - i) % 3 == 0 && config.groups_thousands() {
            out.push_str(&config.thousands_separator);
        }
        out.push(char::from(b'0' + digit));
    }

    if !frac_digits.is_empty() {
        out.push_str(&config.decimal_separator);
        out.extend(frac_digits.iter().map(|d| char::from(b'0' + d)));
    }
    out
}

/// Round a non-negative value to `decimals` places, half away from zero
///
/// Works on the shortest decimal representation of the float, so `1.005`
/// rounds to `1.01` rather than suffering binary representation error.
fn round_half_up(value: f64, decimals: usize) -> (Vec<u8>, Vec<u8>) {
    // f64 Display never uses exponent notation
    let repr = value.to_string();
    let (int_part, frac_part) = repr.split_once('.').unwrap_or((repr.as_str(), ""));

    let mut digits: Vec<u8> = int_part
        .bytes()
        .chain(frac_part.bytes().chain(std::iter::repeat(b'0')).take(decimals))
        .map(|b| b - b'0')
        .collect();
    let round_up = frac_part
        .as_bytes()
        .get(decimals)
        .is_some_and(|b| *b >= b'5');

    let mut int_len = int_part.len();
    if round_up {
        let mut carry = true;
        for digit in digits.iter_mut().rev() {
            if *digit == 9 {
                *digit = 0;
            } else {
                *digit += 1;
                carry = false;
                break;
            }
        }
        if carry {
            digits.insert(0, 1);
            int_len += 1;
        }
    }

    let frac = digits.split_off(int_len);
    (digits, frac)
}
