//! Step gating, alert derivation, and report synthesis.
//!
//! Everything here is a pure function of a [`ReportData`](crate::domain::ReportData).
//! The thresholds below are shared by all three stages.

pub mod alerts;
pub mod formatter;
pub mod numbers;
pub mod validation;

pub use alerts::{derive_alerts, Alert, Severity};
pub use formatter::{format_report, ReportFormatter, DATE_FORMAT};
pub use numbers::{decimal_or_zero, int_or_zero, parse_decimal, parse_int};
pub use validation::{failing_steps, validate_step, REQUIRED_FIELDS_NOTICE};

/// Jockey pump runtime, in minutes, below which the pump is a concern.
pub const JOCKEY_MIN_RUNTIME_MINS: i64 = 45;

/// Fire-water tank level, in metres, below which a tank is reported low.
pub const TANK_MIN_LEVEL_M: f64 = 14.0;

/// Hours a generator may run before a changeover is due.
pub const GENERATOR_MAX_RUN_HOURS: f64 = 3.0;
