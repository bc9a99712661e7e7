//! Recurring payments grouped into subscriptions, bills, and debts.

use std::{fmt, str::FromStr};

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::domain::common::{Amounted, Displayable};
use crate::errors::SpendError;

/// Day-first date layout used by payment schedules.
pub const PAYMENT_DATE_FORMAT: &str = "%d/%m/%Y";

#[derive(
    Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash, PartialOrd, Ord, Default,
)]
#[serde(rename_all = "lowercase")]
pub enum PaymentGroup {
    #[default]
    Subscriptions,
    Bills,
    Debts,
}

impl PaymentGroup {
    pub const ALL: [PaymentGroup; 3] = [
        PaymentGroup::Subscriptions,
        PaymentGroup::Bills,
        PaymentGroup::Debts,
    ];

    /// Tab caption.
    pub fn title(&self) -> &'static str {
        match self {
            PaymentGroup::Subscriptions => "Подписки",
            PaymentGroup::Bills => "Счета",
            PaymentGroup::Debts => "Долги",
        }
    }

    /// Dative form used in "платеж по ..." headings.
    pub fn phrase(&self) -> &'static str {
        match self {
            PaymentGroup::Subscriptions => "подпискам",
            PaymentGroup::Bills => "счетам",
            PaymentGroup::Debts => "долгам",
        }
    }

    pub fn key(&self) -> &'static str {
        match self {
            PaymentGroup::Subscriptions => "subscriptions",
            PaymentGroup::Bills => "bills",
            PaymentGroup::Debts => "debts",
        }
    }
}

impl fmt::Display for PaymentGroup {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.title())
    }
}

impl FromStr for PaymentGroup {
    type Err = SpendError;

    fn from_str(raw: &str) -> Result<Self, Self::Err> {
        let normalized = raw.trim().to_lowercase();
        PaymentGroup::ALL
            .into_iter()
            .find(|group| group.key() == normalized || group.title().to_lowercase() == normalized)
            .ok_or_else(|| SpendError::UnknownPaymentGroup(raw.trim().to_string()))
    }
}

/// A regular payment row.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Payment {
    pub id: u32,
    pub logo: String,
    pub name: String,
    pub amount: f64,
    #[serde(with = "payment_date")]
    pub date: NaiveDate,
}

impl Payment {
    pub fn new(
        id: u32,
        logo: impl Into<String>,
        name: impl Into<String>,
        amount: f64,
        date: NaiveDate,
    ) -> Self {
        Self {
            id,
            logo: logo.into(),
            name: name.into(),
            amount,
            date,
        }
    }

    pub fn date_label(&self) -> String {
        self.date.format(PAYMENT_DATE_FORMAT).to_string()
    }
}

impl Amounted for Payment {
    fn amount(&self) -> f64 {
        self.amount
    }
}

impl Displayable for Payment {
    fn display_label(&self) -> String {
        format!("{} {}", self.logo, self.name)
    }
}

mod payment_date {
    use chrono::NaiveDate;
    use serde::{de::Error, Deserialize, Deserializer, Serializer};

    use super::PAYMENT_DATE_FORMAT;

    pub fn serialize<S: Serializer>(date: &NaiveDate, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(&date.format(PAYMENT_DATE_FORMAT))
    }

    pub fn deserialize<'de, D: Deserializer<'de>>(deserializer: D) -> Result<NaiveDate, D::Error> {
        let raw = String::deserialize(deserializer)?;
        NaiveDate::parse_from_str(&raw, PAYMENT_DATE_FORMAT).map_err(D::Error::custom)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn group_parses_key_or_title() {
        assert_eq!("bills".parse::<PaymentGroup>().unwrap(), PaymentGroup::Bills);
        assert_eq!("Долги".parse::<PaymentGroup>().unwrap(), PaymentGroup::Debts);
        assert!("loans".parse::<PaymentGroup>().is_err());
    }

    #[test]
    fn payment_dates_use_day_first_layout() {
        let json = r#"{"id":2,"logo":"🏠","name":"Аренда","amount":300.0,"date":"15/01/2024"}"#;
        let payment: Payment = serde_json::from_str(json).expect("valid payment");
        assert_eq!(payment.date, NaiveDate::from_ymd_opt(2024, 1, 15).unwrap());
        assert_eq!(payment.date_label(), "15/01/2024");

        let encoded = serde_json::to_string(&payment).expect("serialize");
        assert!(encoded.contains("\"15/01/2024\""));
    }
}
