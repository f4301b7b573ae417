#![doc(test(attr(deny(warnings))))]

//! Safety Report collects a shift's facility-inspection readings through a
//! six-step wizard and renders them into a single shareable status report.

pub mod cli;
pub mod config;
pub mod core;
pub mod domain;
pub mod errors;
pub mod notify;
pub mod report;
pub mod share;
pub mod storage;
pub mod utils;
pub mod wizard;

use std::sync::Once;

static INIT_TRACING: Once = Once::new();

/// Initializes global tracing and emits a startup debug log.
pub fn init() {
    INIT_TRACING.call_once(|| {
        utils::init_tracing();
        tracing::debug!("Safety Report tracing initialized.");
    });
}
