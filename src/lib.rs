#![doc(test(attr(deny(warnings))))]

//! SpendSphere core: category aggregation, ranking, and donut-chart geometry
//! for a personal-finance dashboard, plus the per-screen view state and a
//! terminal shell that renders it.

pub mod cli;
pub mod config;
pub mod core;
pub mod currency;
pub mod domain;
pub mod errors;
pub mod storage;
pub mod utils;
pub mod view;

use std::sync::Once;

static INIT_TRACING: Once = Once::new();

/// Initializes global tracing and emits a startup info log.
pub fn init() {
    INIT_TRACING.call_once(|| {
        utils::init_tracing();
        tracing::info!("SpendSphere tracing initialized.");
    });
}

#[cfg(test)]
mod tests {
    #[test]
    fn init_does_not_panic() {
        super::init();
        super::init();
    }
}
