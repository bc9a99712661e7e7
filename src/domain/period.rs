//! Calendar month used to key into monthly category data.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::errors::{Result, SpendError};

const MONTH_NAMES: [&str; 12] = [
    "Январь", "Февраль", "Март", "Апрель", "Май", "Июнь", "Июль", "Август", "Сентябрь",
    "Октябрь", "Ноябрь", "Декабрь",
];

/// Month index in `1..=12`. Stepping past either end wraps around.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(try_from = "u32", into = "u32")]
pub struct Period(u8);

impl Period {
    pub const JANUARY: Period = Period(1);
    pub const DECEMBER: Period = Period(12);

    pub fn new(month: u32) -> Result<Self> {
        if (1..=12).contains(&month) {
            Ok(Self(month as u8))
        } else {
            Err(SpendError::InvalidPeriod(month))
        }
    }

    pub fn month(&self) -> u32 {
        self.0 as u32
    }

    /// Following month; December wraps to January.
    pub fn next(self) -> Self {
        if self.0 == 12 {
            Self(1)
        } else {
            Self(self.0 + 1)
        }
    }

    /// Preceding month; January wraps to December.
    pub fn prev(self) -> Self {
        if self.0 == 1 {
            Self(12)
        } else {
            Self(self.0 - 1)
        }
    }

    /// Key used by the monthly data tables ("9" for September).
    pub fn key(&self) -> String {
        self.0.to_string()
    }

    pub fn month_name(&self) -> &'static str {
        MONTH_NAMES[(self.0 - 1) as usize]
    }

    /// Header label such as "Сентябрь 2024".
    pub fn label(&self, year: i32) -> String {
        format!("{} {}", self.month_name(), year)
    }
}

impl Default for Period {
    fn default() -> Self {
        Self(9)
    }
}

impl TryFrom<u32> for Period {
    type Error = SpendError;

    fn try_from(value: u32) -> Result<Self> {
        Self::new(value)
    }
}

impl From<Period> for u32 {
    fn from(period: Period) -> Self {
        period.month()
    }
}

impl fmt::Display for Period {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.month_name())
    }
}
