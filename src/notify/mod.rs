//! "Report due" reminders.
//!
//! The core only decides *whether* a reminder is due ([`NotificationPolicy::should_notify`]).
//! Delivery goes through a [`Notifier`], and the periodic schedule is a
//! [`ReminderTask`] owned by whoever composes the application.

pub mod reminder;

use chrono::{DateTime, Datelike, Duration, Local, Timelike, Weekday};

use crate::core::Clock;
use crate::errors::Result;
use crate::storage::TimestampStore;

pub use reminder::ReminderTask;

pub const REMINDER_TITLE: &str = "Safety Report Due";
pub const REMINDER_BODY: &str = "It has been over 2 hours since the last report.";

/// Whether the guard's device may show notifications.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Permission {
    Granted,
    Denied,
    /// Not asked yet.
    Default,
}

/// Delivery side of reminders.
pub trait Notifier: Send + Sync {
    fn permission(&self) -> Permission;
    fn request_permission(&self) -> Permission;
    fn notify(&self, title: &str, body: &str) -> Result<()>;
}

/// When an overdue report should trigger a reminder.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct NotificationPolicy {
    pub overdue_after: Duration,
    pub off_day: Weekday,
    /// Night shift begins at this hour (inclusive).
    pub night_start_hour: u32,
    /// Night shift runs until the end of this hour (inclusive).
    pub night_end_hour: u32,
}

impl Default for NotificationPolicy {
    fn default() -> Self {
        Self {
            overdue_after: Duration::hours(2),
            off_day: Weekday::Sun,
            night_start_hour: 17,
            night_end_hour: 6,
        }
    }
}

impl NotificationPolicy {
    /// True when a report exists, the last one is older than `overdue_after`,
    /// and `now` falls on the off-day or inside the night-shift window.
    pub fn should_notify(&self, now: DateTime<Local>, last_report_millis: Option<i64>) -> bool {
        let Some(last) = last_report_millis else {
            return false;
        };
        let elapsed = Duration::milliseconds(now.timestamp_millis().saturating_sub(last));
        if elapsed <= self.overdue_after {
            return false;
        }
        self.is_off_day(now) || self.is_night_shift(now)
    }

    fn is_off_day(&self, now: DateTime<Local>) -> bool {
        now.weekday() == self.off_day
    }

    fn is_night_shift(&self, now: DateTime<Local>) -> bool {
        let hour = now.hour();
        hour >= self.night_start_hour || hour <= self.night_end_hour
    }
}

/// What a single reminder check did.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CheckOutcome {
    NotDue,
    Notified,
    /// A reminder was due but the notifier has no permission.
    PermissionMissing,
}

/// Runs one reminder check: asks for permission if needed, then notifies when
/// the policy says a report is overdue.
pub fn check_and_notify(
    policy: &NotificationPolicy,
    store: &dyn TimestampStore,
    notifier: &dyn Notifier,
    clock: &dyn Clock,
) -> Result<CheckOutcome> {
    let mut permission = notifier.permission();
    if permission != Permission::Granted {
        permission = notifier.request_permission();
    }

    let last = store.last_report_millis()?;
    if !policy.should_notify(clock.now(), last) {
        return Ok(CheckOutcome::NotDue);
    }
    if permission != Permission::Granted {
        tracing::warn!("report overdue but notifications are not permitted");
        return Ok(CheckOutcome::PermissionMissing);
    }

    notifier.notify(REMINDER_TITLE, REMINDER_BODY)?;
    tracing::info!("report-due reminder delivered");
    Ok(CheckOutcome::Notified)
}
