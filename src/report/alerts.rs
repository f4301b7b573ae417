use std::fmt;

use crate::domain::ReportData;

use super::numbers::{decimal_or_zero, int_or_zero};
use super::{GENERATOR_MAX_RUN_HOURS, JOCKEY_MIN_RUNTIME_MINS, TANK_MIN_LEVEL_M};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Severity {
    Warning,
    Critical,
}

impl Severity {
    /// Leading marker that tells the two severities apart in the report text.
    pub fn marker(self) -> &'static str {
        match self {
            Severity::Warning => "⚠️ ALERT",
            Severity::Critical => "🚨 CRITICAL",
        }
    }
}

/// One line in the report's alerts section.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Alert {
    pub severity: Severity,
    pub message: String,
}

impl Alert {
    fn warning(message: impl Into<String>) -> Self {
        Self {
            severity: Severity::Warning,
            message: message.into(),
        }
    }

    fn critical(message: impl Into<String>) -> Self {
        Self {
            severity: Severity::Critical,
            message: message.into(),
        }
    }
}

impl fmt::Display for Alert {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}", self.severity.marker(), self.message)
    }
}

/// Derives the report's alerts in their fixed order.
///
/// Readings that do not parse count as zero, so a blank jockey runtime always
/// raises the low-runtime alert.
pub fn derive_alerts(data: &ReportData) -> Vec<Alert> {
    let mut alerts = Vec::new();

    let jockey = int_or_zero(&data.jockey_runtime);
    if jockey < JOCKEY_MIN_RUNTIME_MINS {
        alerts.push(Alert::warning(format!(
            "Jockey Runtime < {JOCKEY_MIN_RUNTIME_MINS}mins ({jockey}m)"
        )));
    }

    let tk13 = decimal_or_zero(&data.tk13_level);
    if tk13 < TANK_MIN_LEVEL_M {
        alerts.push(Alert::warning(format!("TK13 Level Low ({tk13}m)")));
    }
    let tk29 = decimal_or_zero(&data.tk29_level);
    if tk29 < TANK_MIN_LEVEL_M {
        alerts.push(Alert::warning(format!("TK29 Level Low ({tk29}m)")));
    }

    if data.leak_product {
        alerts.push(Alert::critical("Product Leak Detected"));
    }
    if data.leak_hydrant {
        alerts.push(Alert::warning("Hydrant Leak Detected"));
    }
    if data.leak_air {
        alerts.push(Alert::warning("Air Leak Detected"));
    }

    if !data.power_33kv && decimal_or_zero(&data.running_gg_duration) > GENERATOR_MAX_RUN_HOURS {
        alerts.push(Alert::warning(format!(
            "Generator {} running > 3hrs! Changeover needed.",
            data.running_gg
        )));
    }

    alerts
}
