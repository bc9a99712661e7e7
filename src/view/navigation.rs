//! Side-menu navigation between screens.

use std::{fmt, str::FromStr};

use crate::domain::{AccountSelector, Period};
use crate::errors::SpendError;

use super::state::{DashboardState, PaymentsEvent, PaymentsState, ViewEvent};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Screen {
    #[default]
    Home,
    Analytics,
    RegularPayments,
}

/// Entries listed in the side menu, in display order.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MenuDestination {
    Home,
    Analytics,
    RegularPayments,
    BudgetForecast,
    Groups,
    Support,
}

impl MenuDestination {
    pub const ALL: [MenuDestination; 6] = [
        MenuDestination::Home,
        MenuDestination::Analytics,
        MenuDestination::RegularPayments,
        MenuDestination::BudgetForecast,
        MenuDestination::Groups,
        MenuDestination::Support,
    ];

    pub fn title(&self) -> &'static str {
        match self {
            MenuDestination::Home => "Главная",
            MenuDestination::Analytics => "Аналитика",
            MenuDestination::RegularPayments => "Регулярные платежи",
            MenuDestination::BudgetForecast => "Прогноз бюджета",
            MenuDestination::Groups => "Группы",
            MenuDestination::Support => "Поддержка",
        }
    }

    pub fn key(&self) -> &'static str {
        match self {
            MenuDestination::Home => "home",
            MenuDestination::Analytics => "analytics",
            MenuDestination::RegularPayments => "payments",
            MenuDestination::BudgetForecast => "forecast",
            MenuDestination::Groups => "groups",
            MenuDestination::Support => "support",
        }
    }

    /// Screen behind the entry, if one exists yet.
    pub fn screen(&self) -> Option<Screen> {
        match self {
            MenuDestination::Home => Some(Screen::Home),
            MenuDestination::Analytics => Some(Screen::Analytics),
            MenuDestination::RegularPayments => Some(Screen::RegularPayments),
            MenuDestination::BudgetForecast | MenuDestination::Groups | MenuDestination::Support => {
                None
            }
        }
    }
}

impl fmt::Display for MenuDestination {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.title())
    }
}

impl FromStr for MenuDestination {
    type Err = SpendError;

    fn from_str(raw: &str) -> Result<Self, Self::Err> {
        let normalized = raw.trim().to_lowercase();
        MenuDestination::ALL
            .into_iter()
            .find(|dest| dest.key() == normalized || dest.title().to_lowercase() == normalized)
            .ok_or_else(|| SpendError::UnknownScreen(raw.trim().to_string()))
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NavigationOutcome {
    Opened(Screen),
    Unavailable(MenuDestination),
}

/// The active screen plus each screen's own state.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct AppState {
    pub current: Screen,
    pub home: DashboardState,
    pub analytics: DashboardState,
    pub payments: PaymentsState,
}

impl AppState {
    pub fn new(account: AccountSelector, period: Period) -> Self {
        Self {
            current: Screen::Home,
            home: DashboardState::new(account, period),
            analytics: DashboardState::new(account, period),
            payments: PaymentsState::default(),
        }
    }

    /// State of the active dashboard-style screen.
    pub fn dashboard(&self) -> Option<&DashboardState> {
        match self.current {
            Screen::Home => Some(&self.home),
            Screen::Analytics => Some(&self.analytics),
            Screen::RegularPayments => None,
        }
    }

    pub fn dashboard_mut(&mut self) -> Option<&mut DashboardState> {
        match self.current {
            Screen::Home => Some(&mut self.home),
            Screen::Analytics => Some(&mut self.analytics),
            Screen::RegularPayments => None,
        }
    }

    pub fn menu_open(&self) -> bool {
        match self.current {
            Screen::Home => self.home.menu_open,
            Screen::Analytics => self.analytics.menu_open,
            Screen::RegularPayments => self.payments.menu_open,
        }
    }

    pub fn toggle_menu(&mut self) -> bool {
        match self.dashboard_mut() {
            Some(state) => {
                state.apply(ViewEvent::ToggleMenu);
            }
            None => {
                self.payments.apply(PaymentsEvent::ToggleMenu);
            }
        }
        self.menu_open()
    }

    /// Follows a side-menu entry. The menu of the screen being left is closed
    /// either way.
    pub fn navigate(&mut self, destination: MenuDestination) -> NavigationOutcome {
        if self.menu_open() {
            self.toggle_menu();
        }
        match destination.screen() {
            Some(screen) => {
                tracing::debug!(from = ?self.current, to = ?screen, "navigating");
                self.current = screen;
                NavigationOutcome::Opened(screen)
            }
            None => NavigationOutcome::Unavailable(destination),
        }
    }
}
