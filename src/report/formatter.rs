use chrono::NaiveDate;

use crate::core::Clock;
use crate::domain::{is_filled, RakeStatus, ReportData};

use super::alerts::derive_alerts;
use super::numbers::int_or_zero;

/// Header date layout, e.g. `19 Oct 2026`.
pub const DATE_FORMAT: &str = "%d %b %Y";

const REMARKS_PLACEHOLDER: &str = "Nil";

/// Renders `data` as the WhatsApp-ready status report dated `date`.
///
/// The output is deterministic for a given record and date.
pub fn format_report(data: &ReportData, date: NaiveDate) -> String {
    let alerts = derive_alerts(data);
    let alert_section = if alerts.is_empty() {
        String::new()
    } else {
        let lines: Vec<String> = alerts.iter().map(ToString::to_string).collect();
        format!("*ALERTS:*\n{}\n", lines.join("\n"))
    };

    let remarks = if is_filled(&data.remarks) {
        data.remarks.as_str()
    } else {
        REMARKS_PLACEHOLDER
    };

    format!(
        "*Safety Status Report - {date}*\n\
         \n\
         {alert_section}*Guard:* {guard} ({start}-{end})\n\
         \n\
         *Engines:* {engines}\n\
         *Hydrant Pressure:* {pressure} kg/cm2\n\
         *Jockey Running:* {jockey} mins\n\
         *Storage:* TK13: {tk13}m | TK29: {tk29}m\n\
         *Leakages:* {leaks}\n\
         \n\
         {power}\n\
         \n\
         *Logistics:*\n\
         Pipeline: {pipeline}\n\
         Rake: {rake}\n\
         \n\
         *Security:*\n\
         Office AC & Light: {office}\n\
         C-BACS: {cbacs}\n\
         CCTV: {cctv}\n\
         Obs: Tower ({tower}) | NV ({night_vision})\n\
         \n\
         *Remarks:* {remarks}",
        date = date.format(DATE_FORMAT),
        guard = data.guard_name,
        start = data.patrol_start,
        end = data.patrol_end,
        engines = engine_status(data),
        pressure = data.hydrant_pressure,
        jockey = data.jockey_runtime,
        tk13 = data.tk13_level,
        tk29 = data.tk29_level,
        leaks = leak_line(data),
        power = power_block(data),
        pipeline = pipeline_status(data),
        rake = rake_status(data),
        office = if data.office_ac_light { "OK" } else { "Issue" },
        cbacs = cbacs_status(data),
        cctv = cctv_status(data),
        tower = data.observation_tower,
        night_vision = data.observation_night_vision,
    )
}

/// Clock-driven entry point used by the wizard.
pub struct ReportFormatter<'a> {
    clock: &'a dyn Clock,
}

impl<'a> ReportFormatter<'a> {
    pub fn new(clock: &'a dyn Clock) -> Self {
        Self { clock }
    }

    pub fn render(&self, data: &ReportData) -> String {
        format_report(data, self.clock.today())
    }
}

fn engine_status(data: &ReportData) -> String {
    let failed = data.failed_engines();
    if failed.is_empty() {
        "All OK".to_string()
    } else {
        let ids: Vec<String> = failed.iter().map(ToString::to_string).collect();
        format!("Issue ({})", ids.join(", "))
    }
}

fn leak_line(data: &ReportData) -> String {
    let mut parts = vec![
        format!("Air: {}", leak_flag(data.leak_air, &data.leak_air_location)),
        format!(
            "Hydr: {}",
            leak_flag(data.leak_hydrant, &data.leak_hydrant_location)
        ),
    ];
    if data.leak_product {
        let product = data
            .leak_product_type
            .map(|product| product.label())
            .unwrap_or_default();
        parts.push(format!(
            "Prod: YES ({}/{})",
            product, data.leak_product_location
        ));
    }
    parts.join(" | ")
}

fn leak_flag(leaking: bool, location: &str) -> String {
    if leaking {
        format!("YES ({location})")
    } else {
        "NO".to_string()
    }
}

fn power_block(data: &ReportData) -> String {
    if data.power_33kv {
        return "*Power:* 33KV ON (Grid Available)".to_string();
    }
    let mut block = String::from("*Power:* 33KV OFF\n*Running GGs:*");
    if is_filled(&data.running_gg) {
        block.push_str(&format!(
            "\n1. {} (Started: {})",
            data.running_gg, data.running_gg_start_time
        ));
        if is_filled(&data.running_gg_duration) {
            block.push_str(&format!(" - Ran {}hrs", data.running_gg_duration));
        }
    }
    if data.changeover_performed && is_filled(&data.new_gg) {
        block.push_str(&format!(
            "\n2. {} (Started: {}) [Active]",
            data.new_gg, data.new_gg_start_time
        ));
    }
    block
}

fn pipeline_status(data: &ReportData) -> String {
    if !data.pipeline_receiving {
        return "Stopped".to_string();
    }
    let product = data
        .pipeline_product
        .map(|product| product.label())
        .unwrap_or_default();
    format!("Receiving ({} -> {})", product, data.pipeline_tank_no)
}

fn rake_status(data: &ReportData) -> String {
    match data.rake_status {
        RakeStatus::Idle => "No Activity".to_string(),
        RakeStatus::Placed => format!("Placed @ {}", data.rake_time),
        RakeStatus::Unloading => format!("Unloading Started @ {}", data.rake_time),
        RakeStatus::UnloadingCompleted => {
            format!("Unloading Completed @ {}", data.rake_unloading_time)
        }
        RakeStatus::Removed => format!("Removed @ {}", data.rake_removal_time),
    }
}

fn cbacs_status(data: &ReportData) -> String {
    if data.cbacs_functional {
        "Functional".to_string()
    } else {
        format!("Issue: {}", data.cbacs_issue)
    }
}

fn cctv_status(data: &ReportData) -> String {
    if int_or_zero(&data.cctv_running) >= i64::from(data.cctv_total) {
        format!("All {} Working", data.cctv_total)
    } else {
        format!(
            "{}/{} Running. Issue: {}",
            data.cctv_running, data.cctv_total, data.cctv_issues
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::FixedClock;
    use crate::domain::{PipelineProduct, ProductType};
    use chrono::{Local, TimeZone};

    fn date() -> NaiveDate {
        NaiveDate::from_ymd_opt(2026, 10, 19).unwrap()
    }

    fn quiet() -> ReportData {
        ReportData {
            guard_name: "Ravi Kumar".into(),
            patrol_start: "22:00".into(),
            patrol_end: "23:30".into(),
            hydrant_pressure: "7.0".into(),
            jockey_runtime: "50".into(),
            tk13_level: "14.2".into(),
            tk29_level: "15".into(),
            ..ReportData::default()
        }
    }

    #[test]
    fn quiet_shift_renders_full_layout() {
        let expected = "*Safety Status Report - 19 Oct 2026*\n\
\n\
*Guard:* Ravi Kumar (22:00-23:30)\n\
\n\
*Engines:* All OK\n\
*Hydrant Pressure:* 7.0 kg/cm2\n\
*Jockey Running:* 50 mins\n\
*Storage:* TK13: 14.2m | TK29: 15m\n\
*Leakages:* Air: NO | Hydr: NO\n\
\n\
*Power:* 33KV ON (Grid Available)\n\
\n\
*Logistics:*\n\
Pipeline: Stopped\n\
Rake: No Activity\n\
\n\
*Security:*\n\
Office AC & Light: OK\n\
C-BACS: Functional\n\
CCTV: All 71 Working\n\
Obs: Tower (Normal) | NV (Clear)\n\
\n\
*Remarks:* Nil";
        assert_eq!(format_report(&quiet(), date()), expected);
    }

    #[test]
    fn alerts_section_precedes_guard_line() {
        let mut data = quiet();
        data.jockey_runtime = "30".into();
        let report = format_report(&data, date());
        assert!(report.contains(
            "*ALERTS:*\n⚠️ ALERT: Jockey Runtime < 45mins (30m)\n*Guard:* Ravi Kumar"
        ));
    }

    #[test]
    fn alerts_section_omitted_when_clear() {
        assert!(!format_report(&quiet(), date()).contains("*ALERTS:*"));
    }

    #[test]
    fn engine_issues_list_positions() {
        let mut data = quiet();
        data.engines = [true, false, true, false, true];
        let report = format_report(&data, date());
        assert!(report.contains("*Engines:* Issue (2, 4)"));
        assert!(!report.contains("All OK"));
    }

    #[test]
    fn leak_line_adds_product_only_when_leaking() {
        let mut data = quiet();
        data.leak_air = true;
        data.leak_air_location = "Compressor room".into();
        let report = format_report(&data, date());
        assert!(report.contains("*Leakages:* Air: YES (Compressor room) | Hydr: NO\n"));

        data.leak_product = true;
        data.leak_product_type = Some(ProductType::Ethanol);
        data.leak_product_location = "Bay 4".into();
        let report = format_report(&data, date());
        assert!(report.contains(
            "*Leakages:* Air: YES (Compressor room) | Hydr: NO | Prod: YES (Ethanol/Bay 4)\n"
        ));
    }

    #[test]
    fn outage_lists_generators() {
        let mut data = quiet();
        data.power_33kv = false;
        data.running_gg = "DG-1".into();
        data.running_gg_start_time = "19:00".into();
        data.running_gg_duration = "2.5".into();
        data.changeover_performed = true;
        data.new_gg = "DG-2".into();
        data.new_gg_start_time = "21:30".into();
        let report = format_report(&data, date());
        assert!(report.contains(
            "*Power:* 33KV OFF\n*Running GGs:*\n1. DG-1 (Started: 19:00) - Ran 2.5hrs\n2. DG-2 (Started: 21:30) [Active]\n"
        ));
    }

    #[test]
    fn logistics_follow_rake_branch() {
        let mut data = quiet();
        data.pipeline_receiving = true;
        data.pipeline_product = Some(PipelineProduct::Hsd);
        data.pipeline_tank_no = "TK-7".into();
        data.rake_status = RakeStatus::UnloadingCompleted;
        data.rake_time = "18:00".into();
        data.rake_unloading_time = "22:40".into();
        let report = format_report(&data, date());
        assert!(report.contains("Pipeline: Receiving (HSD -> TK-7)\nRake: Unloading Completed @ 22:40\n"));

        data.rake_status = RakeStatus::Unloading;
        let report = format_report(&data, date());
        assert!(report.contains("Rake: Unloading Started @ 18:00\n"));
    }

    #[test]
    fn security_issues_are_spelled_out() {
        let mut data = quiet();
        data.office_ac_light = false;
        data.cbacs_functional = false;
        data.cbacs_issue = "Gate 2 reader".into();
        data.cctv_running = "68".into();
        data.cctv_issues = "Perimeter cams".into();
        data.remarks = "Handed over to relief".into();
        let report = format_report(&data, date());
        assert!(report.contains("Office AC & Light: Issue\n"));
        assert!(report.contains("C-BACS: Issue: Gate 2 reader\n"));
        assert!(report.contains("CCTV: 68/71 Running. Issue: Perimeter cams\n"));
        assert!(report.ends_with("*Remarks:* Handed over to relief"));
    }

    #[test]
    fn formatter_uses_clock_date() {
        let clock = FixedClock::new(Local.with_ymd_and_hms(2026, 3, 5, 21, 0, 0).unwrap());
        let report = ReportFormatter::new(&clock).render(&quiet());
        assert!(report.starts_with("*Safety Status Report - 05 Mar 2026*"));
    }
}
