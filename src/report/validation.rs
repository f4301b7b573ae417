use crate::domain::{is_filled, RakeStatus, ReportData, Step};

use super::numbers::parse_int;

/// Notice shown whenever a step refuses to advance.
pub const REQUIRED_FIELDS_NOTICE: &str = "Please fill in all required fields before proceeding.";

/// Returns whether `data` holds everything `step` requires before advancing.
pub fn validate_step(data: &ReportData, step: Step) -> bool {
    match step {
        Step::GuardDetails => guard_details(data),
        Step::EnginesAndPumps => engines_and_pumps(data),
        Step::StorageAndLeaks => storage_and_leaks(data),
        Step::Power => power(data),
        Step::Logistics => logistics(data),
        Step::SecurityAndMisc => security_and_misc(data),
    }
}

/// Every step that would currently block, in wizard order.
pub fn failing_steps(data: &ReportData) -> Vec<Step> {
    Step::ALL
        .into_iter()
        .filter(|step| !validate_step(data, *step))
        .collect()
}

fn guard_details(data: &ReportData) -> bool {
    is_filled(&data.guard_name) && is_filled(&data.patrol_start) && is_filled(&data.patrol_end)
}

fn engines_and_pumps(data: &ReportData) -> bool {
    is_filled(&data.hydrant_pressure) && is_filled(&data.jockey_runtime)
}

fn storage_and_leaks(data: &ReportData) -> bool {
    if !is_filled(&data.tk13_level) || !is_filled(&data.tk29_level) {
        return false;
    }
    if data.leak_air && !is_filled(&data.leak_air_location) {
        return false;
    }
    if data.leak_hydrant && !is_filled(&data.leak_hydrant_location) {
        return false;
    }
    if data.leak_product
        && (!is_filled(&data.leak_product_location) || data.leak_product_type.is_none())
    {
        return false;
    }
    true
}

fn power(data: &ReportData) -> bool {
    if data.power_33kv {
        return true;
    }
    if !is_filled(&data.running_gg) || !is_filled(&data.running_gg_start_time) {
        return false;
    }
    if data.changeover_performed
        && (!is_filled(&data.new_gg) || !is_filled(&data.new_gg_start_time))
    {
        return false;
    }
    true
}

fn logistics(data: &ReportData) -> bool {
    if data.pipeline_receiving
        && (data.pipeline_product.is_none() || !is_filled(&data.pipeline_tank_no))
    {
        return false;
    }
    match data.rake_status {
        RakeStatus::Idle => true,
        RakeStatus::Placed | RakeStatus::Unloading => is_filled(&data.rake_time),
        RakeStatus::UnloadingCompleted => is_filled(&data.rake_unloading_time),
        RakeStatus::Removed => is_filled(&data.rake_removal_time),
    }
}

fn security_and_misc(data: &ReportData) -> bool {
    if !is_filled(&data.cctv_running) {
        return false;
    }
    if !data.cbacs_functional && !is_filled(&data.cbacs_issue) {
        return false;
    }
    // A count that is not a number cannot be shown short; the formatter
    // renders it as zero running.
    let short = parse_int(&data.cctv_running)
        .map(|running| running < i64::from(data.cctv_total))
        .unwrap_or(false);
    !short || is_filled(&data.cctv_issues)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::{PipelineProduct, ProductType};

    fn complete() -> ReportData {
        ReportData {
            guard_name: "Ravi".into(),
            patrol_start: "22:00".into(),
            patrol_end: "23:00".into(),
            hydrant_pressure: "7.2".into(),
            jockey_runtime: "50".into(),
            tk13_level: "14.5".into(),
            tk29_level: "15".into(),
            ..ReportData::default()
        }
    }

    #[test]
    fn complete_record_passes_every_step() {
        let data = complete();
        for step in Step::ALL {
            assert!(validate_step(&data, step), "{step} should pass");
        }
        assert!(failing_steps(&data).is_empty());
    }

    #[test]
    fn default_record_fails_first_three_steps() {
        assert_eq!(
            failing_steps(&ReportData::default()),
            vec![Step::GuardDetails, Step::EnginesAndPumps, Step::StorageAndLeaks]
        );
    }

    #[test]
    fn guard_details_require_name_and_window() {
        let mut data = complete();
        data.patrol_end = "  ".into();
        assert!(!validate_step(&data, Step::GuardDetails));
    }

    #[test]
    fn leak_flags_require_companion_fields() {
        let mut data = complete();
        data.leak_air = true;
        assert!(!validate_step(&data, Step::StorageAndLeaks));
        data.leak_air_location = "Gantry 3".into();
        assert!(validate_step(&data, Step::StorageAndLeaks));

        data.leak_hydrant = true;
        data.leak_hydrant_location = " ".into();
        assert!(!validate_step(&data, Step::StorageAndLeaks));
        data.leak_hydrant_location = "Jetty line".into();
        assert!(validate_step(&data, Step::StorageAndLeaks));

        data.leak_product = true;
        data.leak_product_location = "Bay 2".into();
        data.leak_product_type = None;
        assert!(!validate_step(&data, Step::StorageAndLeaks));
        data.leak_product_type = Some(ProductType::Hsd);
        assert!(validate_step(&data, Step::StorageAndLeaks));
    }

    #[test]
    fn power_outage_requires_running_generator() {
        let mut data = complete();
        data.power_33kv = false;
        assert!(!validate_step(&data, Step::Power));
        data.running_gg = "DG-1".into();
        data.running_gg_start_time = "21:10".into();
        assert!(validate_step(&data, Step::Power));

        data.changeover_performed = true;
        assert!(!validate_step(&data, Step::Power));
        data.new_gg = "DG-2".into();
        data.new_gg_start_time = "23:40".into();
        assert!(validate_step(&data, Step::Power));
    }

    #[test]
    fn grid_power_ignores_generator_fields() {
        let mut data = complete();
        data.changeover_performed = true;
        assert!(validate_step(&data, Step::Power));
    }

    #[test]
    fn pipeline_and_rake_branches() {
        let mut data = complete();
        data.pipeline_receiving = true;
        data.pipeline_tank_no = "TK-7".into();
        assert!(!validate_step(&data, Step::Logistics));
        data.pipeline_product = Some(PipelineProduct::Ms);
        assert!(validate_step(&data, Step::Logistics));

        data.rake_status = RakeStatus::Placed;
        assert!(!validate_step(&data, Step::Logistics));
        data.rake_time = "20:15".into();
        assert!(validate_step(&data, Step::Logistics));

        data.rake_status = RakeStatus::Unloading;
        data.rake_time.clear();
        assert!(!validate_step(&data, Step::Logistics));
        data.rake_time = "20:40".into();
        assert!(validate_step(&data, Step::Logistics));

        data.rake_status = RakeStatus::UnloadingCompleted;
        assert!(!validate_step(&data, Step::Logistics));
        data.rake_unloading_time = "22:45".into();
        assert!(validate_step(&data, Step::Logistics));

        data.rake_status = RakeStatus::Removed;
        assert!(!validate_step(&data, Step::Logistics));
        data.rake_removal_time = "23:55".into();
        assert!(validate_step(&data, Step::Logistics));
    }

    #[test]
    fn security_rules() {
        let mut data = complete();
        data.cctv_running = String::new();
        assert!(!validate_step(&data, Step::SecurityAndMisc));

        data.cctv_running = "69".into();
        assert!(!validate_step(&data, Step::SecurityAndMisc));
        data.cctv_issues = "Cam 12, 40 offline".into();
        assert!(validate_step(&data, Step::SecurityAndMisc));

        data.cbacs_functional = false;
        assert!(!validate_step(&data, Step::SecurityAndMisc));
        data.cbacs_issue = "Gate 2 reader down".into();
        assert!(validate_step(&data, Step::SecurityAndMisc));
    }

    #[test]
    fn non_numeric_cctv_count_is_accepted() {
        let mut data = complete();
        data.cctv_running = "all".into();
        assert!(validate_step(&data, Step::SecurityAndMisc));
    }

    #[test]
    fn non_numeric_readings_pass_presence_checks() {
        let mut data = complete();
        data.jockey_runtime = "unknown".into();
        data.tk13_level = "n/a".into();
        assert!(validate_step(&data, Step::EnginesAndPumps));
        assert!(validate_step(&data, Step::StorageAndLeaks));
    }
}
