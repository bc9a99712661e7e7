//! Domain types representing spending and income categories.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::domain::common::{Amounted, Displayable};

/// Icon shown when no source defines one for a category.
pub const FALLBACK_ICON: &str = "help-outline";
/// Color used when no source defines one for a category.
pub const FALLBACK_COLOR: &str = "#000";

/// Opaque icon identifier understood by the rendering layer.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct IconToken(pub String);

impl IconToken {
    pub fn new(name: impl Into<String>) -> Self {
        Self(name.into())
    }

    pub fn fallback() -> Self {
        Self::new(FALLBACK_ICON)
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for IconToken {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// CSS-style color, normally `#rgb` or `#rrggbb`.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ColorToken(pub String);

impl ColorToken {
    pub fn new(value: impl Into<String>) -> Self {
        Self(value.into())
    }

    pub fn fallback() -> Self {
        Self::new(FALLBACK_COLOR)
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Decodes hex notation into RGB components.
    pub fn rgb(&self) -> Option<(u8, u8, u8)> {
        let hex = self.0.strip_prefix('#').filter(|hex| hex.is_ascii())?;
        let channel = |raw: &str| u8::from_str_radix(raw, 16).ok();
        match hex.len() {
            6 => Some((channel(&hex[0..2])?, channel(&hex[2..4])?, channel(&hex[4..6])?)),
            3 => {
                let mut parts = hex.chars().map(|c| {
                    let doubled = format!("{c}{c}");
                    channel(&doubled)
                });
                Some((parts.next()??, parts.next()??, parts.next()??))
            }
            _ => None,
        }
    }
}

impl fmt::Display for ColorToken {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// A single transaction line inside a category.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Operation {
    pub name: String,
    pub amount: f64,
}

impl Operation {
    pub fn new(name: impl Into<String>, amount: f64) -> Self {
        Self {
            name: name.into(),
            amount,
        }
    }
}

impl Amounted for Operation {
    fn amount(&self) -> f64 {
        self.amount
    }
}

/// One spending or income bucket for an account and month.
///
/// Real entries carry either `spend` or `income`, not both, though nothing
/// enforces it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CategoryEntry {
    pub name: String,
    pub icon: IconToken,
    #[serde(default)]
    pub spend: f64,
    #[serde(default)]
    pub income: f64,
    pub color: ColorToken,
    #[serde(default)]
    pub operations: Vec<Operation>,
}

impl CategoryEntry {
    pub fn new(
        name: impl Into<String>,
        icon: impl Into<String>,
        color: impl Into<String>,
    ) -> Self {
        Self {
            name: name.into(),
            icon: IconToken::new(icon),
            spend: 0.0,
            income: 0.0,
            color: ColorToken::new(color),
            operations: Vec::new(),
        }
    }

    pub fn with_spend(mut self, spend: f64) -> Self {
        self.spend = spend;
        self
    }

    pub fn with_income(mut self, income: f64) -> Self {
        self.income = income;
        self
    }

    pub fn with_operation(mut self, name: impl Into<String>, amount: f64) -> Self {
        self.operations.push(Operation::new(name, amount));
        self
    }

    /// Comparable size of the entry: spend when nonzero, otherwise income.
    pub fn magnitude(&self) -> f64 {
        if self.spend != 0.0 {
            self.spend
        } else {
            self.income
        }
    }

    pub fn is_income(&self) -> bool {
        self.spend == 0.0 && self.income > 0.0
    }
}

impl Displayable for CategoryEntry {
    fn display_label(&self) -> String {
        format!("{} ({})", self.name, self.icon)
    }
}
