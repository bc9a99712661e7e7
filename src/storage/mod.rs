pub mod json_backend;
pub mod static_data;

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::domain::{CardAccount, CategoryEntry, Payment, PaymentGroup, Period};
use crate::errors::{Result, SpendError};

/// Read-only source of per-card monthly category data.
pub trait CategoryRepository: Send + Sync {
    /// Returns the categories recorded for `account` in `period`. A month with
    /// no data yields an empty list.
    fn fetch_categories(&self, account: CardAccount, period: Period) -> Vec<CategoryEntry>;
}

/// Read-only source of regular payments.
pub trait PaymentRepository: Send + Sync {
    fn fetch_payments(&self, group: PaymentGroup) -> Vec<Payment>;
}

/// Complete data set backing every screen: categories keyed by card and
/// month key, plus payments per group.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Dataset {
    #[serde(default)]
    pub categories: BTreeMap<CardAccount, BTreeMap<String, Vec<CategoryEntry>>>,
    #[serde(default)]
    pub payments: BTreeMap<PaymentGroup, Vec<Payment>>,
}

impl Dataset {
    pub fn insert_month(
        &mut self,
        account: CardAccount,
        period: Period,
        entries: Vec<CategoryEntry>,
    ) -> &mut Self {
        self.categories
            .entry(account)
            .or_default()
            .insert(period.key(), entries);
        self
    }

    pub fn insert_payments(&mut self, group: PaymentGroup, payments: Vec<Payment>) -> &mut Self {
        self.payments.insert(group, payments);
        self
    }

    /// Months that have data for at least one card.
    pub fn periods(&self) -> Vec<Period> {
        let mut periods: Vec<Period> = self
            .categories
            .values()
            .flat_map(|months| months.keys())
            .filter_map(|key| key.parse::<u32>().ok())
            .filter_map(|month| Period::new(month).ok())
            .collect();
        periods.sort();
        periods.dedup();
        periods
    }

    /// Checks that every spend, income, operation and payment amount is a
    /// finite number no smaller than zero.
    pub fn validate(&self) -> Result<()> {
        for (account, months) in &self.categories {
            for (month, entries) in months {
                for entry in entries {
                    let location = || format!("{} {} `{}`", account, month, entry.name);
                    check_amount(entry.spend, || format!("{}: spend", location()))?;
                    check_amount(entry.income, || format!("{}: income", location()))?;
                    for operation in &entry.operations {
                        check_amount(operation.amount, || {
                            format!("{}: operation `{}`", location(), operation.name)
                        })?;
                    }
                }
            }
        }
        for (group, payments) in &self.payments {
            for payment in payments {
                check_amount(payment.amount, || {
                    format!("{} payment `{}`", group.key(), payment.name)
                })?;
            }
        }
        Ok(())
    }
}

fn check_amount(value: f64, what: impl FnOnce() -> String) -> Result<()> {
    if value.is_finite() && value >= 0.0 {
        Ok(())
    } else {
        Err(SpendError::Dataset(format!(
            "{} is {}, expected a non-negative amount",
            what(),
            value
        )))
    }
}

impl CategoryRepository for Dataset {
    fn fetch_categories(&self, account: CardAccount, period: Period) -> Vec<CategoryEntry> {
        match self
            .categories
            .get(&account)
            .and_then(|months| months.get(&period.key()))
        {
            Some(entries) => entries.clone(),
            None => {
                tracing::debug!(%account, month = period.month(), "no category data for period");
                Vec::new()
            }
        }
    }
}

impl PaymentRepository for Dataset {
    fn fetch_payments(&self, group: PaymentGroup) -> Vec<Payment> {
        self.payments.get(&group).cloned().unwrap_or_default()
    }
}

pub use json_backend::{load_dataset_from_path, save_dataset_to_path};
pub use static_data::builtin;
