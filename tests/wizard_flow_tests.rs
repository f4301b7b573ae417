mod common;

use std::sync::Arc;

use safety_report::{
    core::Clock,
    domain::{ProductType, ReportPatch, Step},
    storage::{JsonStateStore, TimestampStore},
    wizard::{Intent, Transition, WizardController, WizardState},
};

use common::{clock_at, temp_base};

fn patch_guard() -> ReportPatch {
    ReportPatch {
        guard_name: Some("Ravi Kumar".into()),
        patrol_start: Some("22:00".into()),
        patrol_end: Some("23:30".into()),
        ..ReportPatch::default()
    }
}

fn patch_pumps(jockey: &str) -> ReportPatch {
    ReportPatch {
        hydrant_pressure: Some("7.0".into()),
        jockey_runtime: Some(jockey.into()),
        ..ReportPatch::default()
    }
}

fn patch_tanks() -> ReportPatch {
    ReportPatch {
        tk13_level: Some("14.2".into()),
        tk29_level: Some("15".into()),
        ..ReportPatch::default()
    }
}

#[test]
fn full_flow_writes_report_and_timestamp() {
    let base = temp_base();
    let store = Arc::new(JsonStateStore::in_base(&base));
    let clock = clock_at(2026, 10, 19, 23, 45);
    let mut wizard = WizardController::new(store.clone(), clock.clone());

    assert_eq!(wizard.apply(Intent::Edit(patch_guard())), Transition::Edited);
    assert_eq!(wizard.apply(Intent::Advance), Transition::Moved(Step::EnginesAndPumps));
    wizard.apply(Intent::Edit(patch_pumps("50")));
    assert_eq!(wizard.apply(Intent::Advance), Transition::Moved(Step::StorageAndLeaks));
    wizard.apply(Intent::Edit(patch_tanks()));
    assert_eq!(wizard.apply(Intent::Advance), Transition::Moved(Step::Power));
    assert_eq!(wizard.apply(Intent::Advance), Transition::Moved(Step::Logistics));
    assert_eq!(wizard.apply(Intent::Advance), Transition::Moved(Step::SecurityAndMisc));
    assert_eq!(wizard.apply(Intent::Advance), Transition::ReportReady);

    assert_eq!(wizard.state(), WizardState::ReportReady);
    let report = wizard.report().expect("report text");
    assert!(report.starts_with("*Safety Status Report - 19 Oct 2026*"));
    assert!(report.contains("*Guard:* Ravi Kumar (22:00-23:30)"));

    let reopened = JsonStateStore::in_base(&base);
    assert_eq!(
        reopened.last_report_millis().unwrap(),
        Some(clock.now().timestamp_millis())
    );
}

#[test]
fn leak_step_requires_location_once_flagged() {
    let store = Arc::new(JsonStateStore::in_base(&temp_base()));
    let mut wizard = WizardController::new(store, clock_at(2026, 10, 19, 21, 0));
    wizard.apply(Intent::Edit(patch_guard()));
    wizard.apply(Intent::Advance);
    wizard.apply(Intent::Edit(patch_pumps("60")));
    wizard.apply(Intent::Advance);

    wizard.apply(Intent::Edit(ReportPatch {
        leak_product: Some(true),
        leak_product_type: Some(ProductType::Ldo),
        ..patch_tanks()
    }));
    assert_eq!(
        wizard.apply(Intent::Advance),
        Transition::Blocked(Step::StorageAndLeaks)
    );

    wizard.apply(Intent::Edit(ReportPatch {
        leak_product_location: Some("Gantry 3".into()),
        ..ReportPatch::default()
    }));
    assert_eq!(wizard.apply(Intent::Advance), Transition::Moved(Step::Power));
}

#[test]
fn short_jockey_runtime_needs_sprinkler_confirmation() {
    let store = Arc::new(JsonStateStore::in_base(&temp_base()));
    let mut wizard = WizardController::new(store, clock_at(2026, 10, 19, 21, 0));
    wizard.apply(Intent::Edit(patch_guard()));
    wizard.apply(Intent::Advance);
    wizard.apply(Intent::Edit(patch_pumps("40")));

    assert_eq!(wizard.apply(Intent::Advance), Transition::AwaitingConfirmation);
    assert_eq!(wizard.apply(Intent::Advance), Transition::Ignored);
    assert_eq!(
        wizard.apply(Intent::Decline),
        Transition::Moved(Step::EnginesAndPumps)
    );

    // A reported hydrant leak explains the runtime; no confirmation needed.
    wizard.apply(Intent::Edit(ReportPatch {
        leak_hydrant: Some(true),
        ..ReportPatch::default()
    }));
    assert_eq!(wizard.apply(Intent::Advance), Transition::Moved(Step::StorageAndLeaks));
}

#[test]
fn new_report_keeps_configured_guard() {
    let store = Arc::new(JsonStateStore::in_base(&temp_base()));
    let mut wizard = WizardController::new(store, clock_at(2026, 10, 19, 21, 0))
        .with_default_guard(Some("Anita".into()));
    assert_eq!(wizard.data().guard_name, "Anita");

    wizard.apply(Intent::Edit(ReportPatch {
        guard_name: Some("Relief".into()),
        patrol_start: Some("21:00".into()),
        patrol_end: Some("22:00".into()),
        ..ReportPatch::default()
    }));
    wizard.apply(Intent::Advance);
    wizard.apply(Intent::Edit(patch_pumps("50")));
    wizard.apply(Intent::Advance);
    wizard.apply(Intent::Edit(patch_tanks()));
    for _ in 0..4 {
        wizard.apply(Intent::Advance);
    }
    assert_eq!(wizard.state(), WizardState::ReportReady);

    assert_eq!(wizard.apply(Intent::Reset), Transition::Reset);
    assert_eq!(wizard.state(), WizardState::Step(Step::GuardDetails));
    assert_eq!(wizard.data().guard_name, "Anita");
    assert!(wizard.data().patrol_start.is_empty());
    assert!(wizard.report().is_none());
}
