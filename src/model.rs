use serde::{Deserialize, Serialize};
use serde_json::{Number, Value};
use std::fmt;

const TREND_UP: &str = "up";

/// Aggregate figures returned by the summary endpoint.
#[derive(Debug, Clone, Deserialize, Serialize, PartialEq)]
pub struct SalesSummary {
    pub total_sales: DisplayValue,
    pub best_selling: String,
    #[serde(default)]
    pub trend: Trend,
    pub revenue: f64,
}

/// A scalar the page shows as-is: the endpoint may send it as a number or a string.
#[derive(Debug, Clone, Deserialize, Serialize, PartialEq)]
#[serde(untagged)]
pub enum DisplayValue {
    Number(Number),
    Text(String),
}

impl fmt::Display for DisplayValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Text(text) => f.write_str(text),
            Self::Number(number) => {
                if number.is_i64() || number.is_u64() {
                    return write!(f, "{number}");
                }
                match number.as_f64() {
                    Some(value) => f.write_str(&format_number(value)),
                    None => write!(f, "{number}"),
                }
            }
        }
    }
}

/// Formats a float the way a browser stringifies it for text content.
pub fn format_number(value: f64) -> String {
    if value.is_nan() {
        return "NaN".to_string();
    }
    if value.is_infinite() {
        return if value > 0.0 { "Infinity" } else { "-Infinity" }.to_string();
    }
    if value == 0.0 {
        return "0".to_string();
    }
    if value.fract() == 0.0 && value.abs() < 1e21 {
        return format!("{value:.0}");
    }
    format!("{value}")
}

#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(from = "Value", into = "&'static str")]
pub enum Trend {
    Up,
    /// Anything the endpoint sends other than `"up"`, including nothing at all.
    #[default]
    Down,
}

impl Trend {
    pub const fn glyph(self) -> &'static str {
        match self {
            Self::Up => "🔼",
            Self::Down => "🔽",
        }
    }

    pub const fn label(self) -> &'static str {
        match self {
            Self::Up => TREND_UP,
            Self::Down => "down",
        }
    }
}

impl From<Value> for Trend {
    fn from(value: Value) -> Self {
        match value {
            Value::String(text) if text == TREND_UP => Self::Up,
            _ => Self::Down,
        }
    }
}

impl From<Trend> for &'static str {
    fn from(trend: Trend) -> Self {
        trend.label()
    }
}
