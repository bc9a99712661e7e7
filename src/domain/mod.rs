pub mod account;
pub mod category;
pub mod common;
pub mod payment;
pub mod period;

pub use account::{AccountSelector, CardAccount};
pub use category::{CategoryEntry, ColorToken, IconToken, Operation};
pub use common::{total_amount, Amounted, Displayable};
pub use payment::{Payment, PaymentGroup};
pub use period::Period;
