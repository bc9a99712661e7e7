use serde::{Deserialize, Serialize};

use crate::domain::{total_amount, CategoryEntry, Payment};

/// Spend, income, and what is left over for a category list.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct Totals {
    pub spend: f64,
    pub income: f64,
    pub remaining: f64,
}

pub struct SummaryService;

impl SummaryService {
    pub fn totals(entries: &[CategoryEntry]) -> Totals {
        let spend: f64 = entries.iter().map(|entry| entry.spend).sum();
        let income: f64 = entries.iter().map(|entry| entry.income).sum();
        Totals {
            spend,
            income,
            remaining: income - spend,
        }
    }

    /// Monthly total for a payment list.
    pub fn payments_total(payments: &[Payment]) -> f64 {
        total_amount(payments)
    }
}
