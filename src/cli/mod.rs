//! Terminal front end for the report wizard.
//!
//! [`run_session`] drives a [`WizardController`] with whatever
//! [`StepPrompter`] it is given, so the flow can be scripted in tests and
//! rendered with dialoguer for a real guard.

pub mod notifier;
pub mod output;
pub mod prompter;

use crate::domain::{ReportData, ReportPatch, Step};
use crate::errors::Result;
use crate::report::REQUIRED_FIELDS_NOTICE;
use crate::share::{Distributor, COPIED_NOTICE};
use crate::wizard::{Intent, Transition, WizardController, WizardState};

pub use notifier::TerminalNotifier;
pub use output::MessageKind;
pub use prompter::DialoguerPrompter;

/// What the guard did on a step screen.
#[derive(Debug, Clone, PartialEq)]
pub enum StepAction {
    /// Keep these edits and try to move on.
    Submit(ReportPatch),
    /// Keep these edits and return to the previous step.
    Back(ReportPatch),
    Cancel,
}

/// Choice offered once the report text is ready.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ReportAction {
    Share,
    Copy,
    NewReport,
    Quit,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SessionOutcome {
    /// The guard left from the report screen.
    Completed,
    /// The guard abandoned the wizard mid-way.
    Cancelled,
}

/// Presentation seam of the wizard.
pub trait StepPrompter {
    fn collect(&mut self, step: Step, data: &ReportData) -> Result<StepAction>;

    /// Asked when jockey runtime is short and no hydrant leak is reported.
    /// `true` means the sprinklers were checked.
    fn confirm_sprinklers(&mut self) -> Result<bool>;

    fn report_action(&mut self, report: &str) -> Result<ReportAction>;

    fn show(&mut self, kind: MessageKind, message: &str);
}

/// Runs the wizard until the guard quits or cancels.
pub fn run_session(
    controller: &mut WizardController,
    prompter: &mut dyn StepPrompter,
    distributor: &dyn Distributor,
) -> Result<SessionOutcome> {
    loop {
        match controller.state() {
            WizardState::Step(step) => match prompter.collect(step, controller.data())? {
                StepAction::Submit(patch) => {
                    if !patch.is_empty() {
                        controller.apply(Intent::Edit(patch));
                    }
                    if let Transition::Blocked(_) = controller.apply(Intent::Advance) {
                        prompter.show(MessageKind::Warning, REQUIRED_FIELDS_NOTICE);
                    }
                }
                StepAction::Back(patch) => {
                    if !patch.is_empty() {
                        controller.apply(Intent::Edit(patch));
                    }
                    controller.apply(Intent::Back);
                }
                StepAction::Cancel => {
                    tracing::debug!(step = step.number(), "wizard cancelled");
                    return Ok(SessionOutcome::Cancelled);
                }
            },
            WizardState::ConfirmationPending => {
                let intent = if prompter.confirm_sprinklers()? {
                    Intent::Confirm
                } else {
                    Intent::Decline
                };
                controller.apply(intent);
            }
            WizardState::ReportReady => {
                let report = controller.report().unwrap_or_default().to_string();
                match prompter.report_action(&report)? {
                    ReportAction::Share => {
                        if let Err(err) = distributor.share(&report) {
                            tracing::warn!(error = %err, "sharing failed");
                            prompter.show(MessageKind::Error, &err.to_string());
                        }
                    }
                    ReportAction::Copy => match distributor.copy(&report) {
                        Ok(()) => prompter.show(MessageKind::Success, COPIED_NOTICE),
                        Err(err) => {
                            tracing::warn!(error = %err, "copy failed");
                            prompter.show(MessageKind::Error, &err.to_string());
                        }
                    },
                    ReportAction::NewReport => {
                        controller.apply(Intent::Reset);
                    }
                    ReportAction::Quit => return Ok(SessionOutcome::Completed),
                }
            }
        }
    }
}
