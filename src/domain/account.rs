use std::{fmt, str::FromStr};

use serde::{Deserialize, Serialize};

use crate::domain::common::Displayable;
use crate::errors::SpendError;

/// A stored card account with its own monthly data.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[serde(rename_all = "lowercase")]
pub enum CardAccount {
    Mastercard,
    Visa,
}

impl CardAccount {
    pub const ALL: [CardAccount; 2] = [CardAccount::Mastercard, CardAccount::Visa];

    /// Short name used in selectors and dataset keys.
    pub fn name(&self) -> &'static str {
        match self {
            CardAccount::Mastercard => "Mastercard",
            CardAccount::Visa => "Visa",
        }
    }

    /// Masked card label shown in the account dropdown.
    pub fn masked_label(&self) -> &'static str {
        match self {
            CardAccount::Mastercard => "MasterCard *5993",
            CardAccount::Visa => "Visa *6790",
        }
    }
}

impl fmt::Display for CardAccount {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Which account a screen is showing. `Combined` is derived from every card and
/// never stored.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash, Default)]
#[serde(try_from = "String", into = "String")]
pub enum AccountSelector {
    #[default]
    Combined,
    Card(CardAccount),
}

impl AccountSelector {
    pub const ALL: [AccountSelector; 3] = [
        AccountSelector::Combined,
        AccountSelector::Card(CardAccount::Mastercard),
        AccountSelector::Card(CardAccount::Visa),
    ];

    pub fn name(&self) -> &'static str {
        match self {
            AccountSelector::Combined => "Общий",
            AccountSelector::Card(card) => card.name(),
        }
    }

    pub fn is_derived(&self) -> bool {
        matches!(self, AccountSelector::Combined)
    }
}

impl Displayable for AccountSelector {
    fn display_label(&self) -> String {
        match self {
            AccountSelector::Combined => self.name().to_string(),
            AccountSelector::Card(card) => card.masked_label().to_string(),
        }
    }
}

impl fmt::Display for AccountSelector {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for AccountSelector {
    type Err = SpendError;

    fn from_str(raw: &str) -> Result<Self, Self::Err> {
        let normalized = raw.trim().to_lowercase();
        match normalized.as_str() {
            "combined" | "общий" | "all" => Ok(AccountSelector::Combined),
            "mastercard" | "mc" => Ok(AccountSelector::Card(CardAccount::Mastercard)),
            "visa" => Ok(AccountSelector::Card(CardAccount::Visa)),
            _ => Err(SpendError::UnknownAccount(raw.trim().to_string())),
        }
    }
}

impl TryFrom<String> for AccountSelector {
    type Error = SpendError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

impl From<AccountSelector> for String {
    fn from(selector: AccountSelector) -> Self {
        match selector {
            AccountSelector::Combined => "combined".into(),
            AccountSelector::Card(card) => card.name().to_lowercase(),
        }
    }
}
