//! Per-screen view state, changed only through discrete UI events.

use serde::{Deserialize, Serialize};

use crate::domain::{AccountSelector, PaymentGroup, Period};

/// UI events understood by the home and analytics screens.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ViewEvent {
    ToggleDropdown,
    /// Picks an account and closes the dropdown.
    SelectAccount(AccountSelector),
    NextMonth,
    PreviousMonth,
    JumpTo(Period),
    ToggleMenu,
}

/// State shared by the dashboard-style screens (home and analytics).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct DashboardState {
    pub account: AccountSelector,
    pub period: Period,
    pub dropdown_open: bool,
    pub menu_open: bool,
}

impl Default for DashboardState {
    fn default() -> Self {
        Self::new(AccountSelector::Combined, Period::default())
    }
}

impl DashboardState {
    pub fn new(account: AccountSelector, period: Period) -> Self {
        Self {
            account,
            period,
            dropdown_open: false,
            menu_open: false,
        }
    }

    /// Applies `event`. Returns `true` when the selection changed and the data
    /// pipeline has to run again.
    pub fn apply(&mut self, event: ViewEvent) -> bool {
        let before = (self.account, self.period);
        match event {
            ViewEvent::ToggleDropdown => self.dropdown_open = !self.dropdown_open,
            ViewEvent::SelectAccount(account) => {
                self.account = account;
                self.dropdown_open = false;
            }
            ViewEvent::NextMonth => self.period = self.period.next(),
            ViewEvent::PreviousMonth => self.period = self.period.prev(),
            ViewEvent::JumpTo(period) => self.period = period,
            ViewEvent::ToggleMenu => self.menu_open = !self.menu_open,
        }
        before != (self.account, self.period)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PaymentsEvent {
    SelectTab(PaymentGroup),
    ToggleMenu,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct PaymentsState {
    pub tab: PaymentGroup,
    pub menu_open: bool,
}

impl PaymentsState {
    /// Returns `true` when the visible payment list changed.
    pub fn apply(&mut self, event: PaymentsEvent) -> bool {
        match event {
            PaymentsEvent::SelectTab(tab) => {
                let changed = self.tab != tab;
                self.tab = tab;
                changed
            }
            PaymentsEvent::ToggleMenu => {
                self.menu_open = !self.menu_open;
                false
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::CardAccount;

    #[test]
    fn selecting_account_closes_dropdown() {
        let mut state = DashboardState::default();
        assert!(!state.apply(ViewEvent::ToggleDropdown));
        assert!(state.dropdown_open);

        let visa = AccountSelector::Card(CardAccount::Visa);
        assert!(state.apply(ViewEvent::SelectAccount(visa)));
        assert_eq!(state.account, visa);
        assert!(!state.dropdown_open);
    }

    #[test]
    fn month_navigation_wraps() {
        let mut state = DashboardState::new(AccountSelector::Combined, Period::DECEMBER);
        assert!(state.apply(ViewEvent::NextMonth));
        assert_eq!(state.period, Period::JANUARY);
        assert!(state.apply(ViewEvent::PreviousMonth));
        assert_eq!(state.period, Period::DECEMBER);
    }

    #[test]
    fn menu_toggle_does_not_touch_selection() {
        let mut state = DashboardState::default();
        assert!(!state.apply(ViewEvent::ToggleMenu));
        assert!(state.menu_open);
        assert!(!state.apply(ViewEvent::ToggleMenu));
        assert!(!state.menu_open);
    }

    #[test]
    fn reselecting_same_tab_is_not_a_change() {
        let mut state = PaymentsState::default();
        assert!(!state.apply(PaymentsEvent::SelectTab(PaymentGroup::Subscriptions)));
        assert!(state.apply(PaymentsEvent::SelectTab(PaymentGroup::Bills)));
        assert_eq!(state.tab, PaymentGroup::Bills);
    }
}
