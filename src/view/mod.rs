pub mod navigation;
pub mod state;

pub use navigation::{AppState, MenuDestination, NavigationOutcome, Screen};
pub use state::{DashboardState, PaymentsEvent, PaymentsState, ViewEvent};
