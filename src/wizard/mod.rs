//! Step-by-step controller over the inspection record.
//!
//! The controller owns the current [`ReportData`] value and replaces it on
//! every edit. Callers drive it with [`Intent`]s and react to the returned
//! [`Transition`].

use std::sync::Arc;

use crate::core::Clock;
use crate::domain::{ReportData, ReportPatch, Step};
use crate::report::numbers::int_or_zero;
use crate::report::{derive_alerts, validate_step, ReportFormatter, JOCKEY_MIN_RUNTIME_MINS};
use crate::storage::TimestampStore;

/// Where the wizard currently is.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WizardState {
    Step(Step),
    /// Low jockey runtime with no hydrant leak: the guard must confirm the
    /// sprinklers were checked before leaving the engines step.
    ConfirmationPending,
    ReportReady,
}

/// Requests from the presentation layer.
#[derive(Debug, Clone, PartialEq)]
pub enum Intent {
    Edit(ReportPatch),
    Advance,
    Back,
    Confirm,
    Decline,
    Reset,
}

/// Outcome of applying an [`Intent`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Transition {
    Edited,
    Moved(Step),
    /// Required fields for this step are missing.
    Blocked(Step),
    AwaitingConfirmation,
    ReportReady,
    Reset,
    /// The intent has no meaning in the current state.
    Ignored,
}

pub struct WizardController {
    state: WizardState,
    data: ReportData,
    report: Option<String>,
    default_guard: Option<String>,
    store: Arc<dyn TimestampStore>,
    clock: Arc<dyn Clock>,
}

impl WizardController {
    pub fn new(store: Arc<dyn TimestampStore>, clock: Arc<dyn Clock>) -> Self {
        Self {
            state: WizardState::Step(Step::first()),
            data: ReportData::default(),
            report: None,
            default_guard: None,
            store,
            clock,
        }
    }

    /// Pre-fills the guard name on this and every later report.
    pub fn with_default_guard(mut self, guard: Option<String>) -> Self {
        self.default_guard = guard.filter(|name| !name.trim().is_empty());
        self.data = ReportData::for_guard(self.default_guard.as_deref());
        self
    }

    pub fn state(&self) -> WizardState {
        self.state
    }

    pub fn data(&self) -> &ReportData {
        &self.data
    }

    /// Report text, once the wizard reached [`WizardState::ReportReady`].
    pub fn report(&self) -> Option<&str> {
        self.report.as_deref()
    }

    pub fn apply(&mut self, intent: Intent) -> Transition {
        let transition = match (self.state, intent) {
            (WizardState::Step(_), Intent::Edit(patch)) => {
                self.data = self.data.merged(patch);
                Transition::Edited
            }
            (WizardState::Step(step), Intent::Advance) => self.advance(step),
            (WizardState::Step(step), Intent::Back) => match step.previous() {
                Some(previous) => self.move_to(previous),
                None => Transition::Ignored,
            },
            (WizardState::ConfirmationPending, Intent::Confirm) => {
                self.move_to(Step::StorageAndLeaks)
            }
            (WizardState::ConfirmationPending, Intent::Decline) => {
                self.move_to(Step::EnginesAndPumps)
            }
            (WizardState::ReportReady, Intent::Reset) => {
                self.reset();
                Transition::Reset
            }
            _ => Transition::Ignored,
        };
        tracing::debug!(state = ?self.state, ?transition, "wizard intent applied");
        transition
    }

    fn advance(&mut self, step: Step) -> Transition {
        if !validate_step(&self.data, step) {
            tracing::warn!(step = step.number(), "advance blocked by missing fields");
            return Transition::Blocked(step);
        }

        if step == Step::EnginesAndPumps && self.needs_sprinkler_check() {
            self.state = WizardState::ConfirmationPending;
            return Transition::AwaitingConfirmation;
        }

        match step.next() {
            Some(next) => self.move_to(next),
            None => {
                self.finish();
                Transition::ReportReady
            }
        }
    }

    fn needs_sprinkler_check(&self) -> bool {
        int_or_zero(&self.data.jockey_runtime) < JOCKEY_MIN_RUNTIME_MINS && !self.data.leak_hydrant
    }

    fn move_to(&mut self, step: Step) -> Transition {
        self.state = WizardState::Step(step);
        Transition::Moved(step)
    }

    fn finish(&mut self) {
        let report = ReportFormatter::new(self.clock.as_ref()).render(&self.data);
        tracing::info!(
            guard = %self.data.guard_name,
            alerts = derive_alerts(&self.data).len(),
            "safety report generated"
        );
        let generated_at = self.clock.now().timestamp_millis();
        if let Err(err) = self.store.record_report(generated_at) {
            tracing::warn!(error = %err, "could not record last report time");
        }
        self.report = Some(report);
        self.state = WizardState::ReportReady;
    }

    fn reset(&mut self) {
        self.data = ReportData::for_guard(self.default_guard.as_deref());
        self.report = None;
        self.state = WizardState::Step(Step::first());
    }
}
