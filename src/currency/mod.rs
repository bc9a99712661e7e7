//! Amount formatting for screen output.

use serde::{Deserialize, Serialize};

/// Locale-dependent number separators.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LocaleConfig {
    pub language_tag: String,
    pub decimal_separator: char,
    /// `None` disables digit grouping.
    pub grouping_separator: Option<char>,
}

impl Default for LocaleConfig {
    fn default() -> Self {
        Self::from_tag("ru-RU")
    }
}

impl LocaleConfig {
    /// Separators for a BCP 47 tag. Unknown tags print plain numbers.
    pub fn from_tag(tag: &str) -> Self {
        let (decimal_separator, grouping_separator) = match tag.to_ascii_lowercase().as_str() {
            "ru-ru" | "ru" => (',', Some(' ')),
            "en-us" | "en" | "en-gb" => ('.', Some(',')),
            "de-de" | "de" => (',', Some('.')),
            _ => ('.', None),
        };
        Self {
            language_tag: tag.to_string(),
            decimal_separator,
            grouping_separator,
        }
    }
}

/// How many decimals to print.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Precision {
    /// Whole amounts print without decimals, anything else with two.
    Auto,
    Fixed(u8),
}

pub fn format_number(locale: &LocaleConfig, value: f64, precision: u8) -> String {
    let body = format!("{:.*}", precision as usize, value);
    let (int_part, frac_part) = match body.split_once('.') {
        Some((int_part, frac)) => (int_part.to_string(), Some(frac.to_string())),
        None => (body, None),
    };
    let int_part = match locale.grouping_separator {
        Some(separator) => insert_grouping(&int_part, separator),
        None => int_part,
    };
    match frac_part {
        Some(frac) => format!("{}{}{}", int_part, locale.decimal_separator, frac),
        None => int_part,
    }
}

/// Formats `amount` with the currency symbol in front, e.g. `$1 990` or
/// `-$12,50`.
pub fn format_currency(
    amount: f64,
    symbol: &str,
    locale: &LocaleConfig,
    precision: Precision,
) -> String {
    let digits = match precision {
        Precision::Fixed(digits) => digits,
        Precision::Auto if amount.fract() == 0.0 => 0,
        Precision::Auto => 2,
    };
    let body = format_number(locale, amount.abs(), digits);
    // "-0" after rounding is still zero
    if amount < 0.0 && body.chars().any(|c| c.is_ascii_digit() && c != '0') {
        format!("-{}{}", symbol, body)
    } else {
        format!("{}{}", symbol, body)
    }
}

/// Formats a share of a whole, e.g. `37.8%`.
pub fn format_percentage(locale: &LocaleConfig, percent: f64) -> String {
    format!("{}%", format_number(locale, percent, 1))
}

fn insert_grouping(digits: &str, separator: char) -> String {
    let (sign, digits) = match digits.strip_prefix('-') {
        Some(rest) => ("-", rest),
        None => ("", digits),
    };
    let mut grouped = String::with_capacity(digits.len() + digits.len() / 3);
    for (idx, ch) in digits.chars().enumerate() {
        if idx > 0 && (digits.len() - idx) % 3 == 0 {
            grouped.push(separator);
        }
        grouped.push(ch);
    }
    format!("{}{}", sign, grouped)
}
