use std::io;

use chrono::NaiveTime;
use crossterm::{
    cursor,
    terminal::{Clear, ClearType},
    ExecutableCommand,
};
use dialoguer::{theme::ColorfulTheme, Input, MultiSelect, Select};

use super::output::{self, MessageKind, NoticeQueue};
use super::{ReportAction, StepAction, StepPrompter};
use crate::domain::{
    PipelineProduct, ProductType, RakeStatus, ReportData, ReportPatch, Step, ENGINE_COUNT,
};
use crate::errors::Result;
use crate::report::{parse_int, JOCKEY_MIN_RUNTIME_MINS};

const TIME_FORMAT: &str = "%H:%M";

/// Interactive prompter built on dialoguer's colourful theme.
///
/// Every input accepts an empty answer; required fields are enforced by the
/// wizard when the guard tries to move on.
///
/// Each screen starts by clearing the terminal, so notices are queued and
/// printed under the next screen's title instead of being wiped.
pub struct DialoguerPrompter {
    theme: ColorfulTheme,
    notices: NoticeQueue,
}

impl Default for DialoguerPrompter {
    fn default() -> Self {
        Self::new()
    }
}

impl DialoguerPrompter {
    pub fn new() -> Self {
        Self {
            theme: ColorfulTheme::default(),
            notices: NoticeQueue::default(),
        }
    }

    /// Shares `notices` with other producers, such as the reminder task.
    pub fn with_notices(mut self, notices: NoticeQueue) -> Self {
        self.notices = notices;
        self
    }

    fn begin_screen(&self, title: &str) -> Result<()> {
        io::stdout()
            .execute(Clear(ClearType::All))?
            .execute(cursor::MoveTo(0, 0))?;
        output::section(title);
        self.notices.flush();
        Ok(())
    }

    fn text(&self, label: &str, current: &str) -> Result<String> {
        Ok(Input::<String>::with_theme(&self.theme)
            .with_prompt(label)
            .with_initial_text(current)
            .allow_empty(true)
            .interact_text()?)
    }

    fn time(&self, label: &str, current: &str) -> Result<String> {
        let value = Input::<String>::with_theme(&self.theme)
            .with_prompt(format!("{label} (HH:MM)"))
            .with_initial_text(current)
            .allow_empty(true)
            .validate_with(|input: &String| -> std::result::Result<(), &str> {
                let trimmed = input.trim();
                if trimmed.is_empty() || NaiveTime::parse_from_str(trimmed, TIME_FORMAT).is_ok() {
                    Ok(())
                } else {
                    Err("Use 24-hour HH:MM format")
                }
            })
            .interact_text()?;
        Ok(value.trim().to_string())
    }

    fn decimal(&self, label: &str, current: &str) -> Result<String> {
        let value = Input::<String>::with_theme(&self.theme)
            .with_prompt(label)
            .with_initial_text(current)
            .allow_empty(true)
            .validate_with(|input: &String| -> std::result::Result<(), &str> {
                let trimmed = input.trim();
                if trimmed.is_empty() || trimmed.parse::<f64>().is_ok() {
                    Ok(())
                } else {
                    Err("Enter a numeric value")
                }
            })
            .interact_text()?;
        Ok(value.trim().to_string())
    }

    fn whole(&self, label: &str, current: &str) -> Result<String> {
        let value = Input::<String>::with_theme(&self.theme)
            .with_prompt(label)
            .with_initial_text(current)
            .allow_empty(true)
            .validate_with(|input: &String| -> std::result::Result<(), &str> {
                let trimmed = input.trim();
                if trimmed.is_empty() || trimmed.parse::<u32>().is_ok() {
                    Ok(())
                } else {
                    Err("Enter a whole number (e.g., 45)")
                }
            })
            .interact_text()?;
        Ok(value.trim().to_string())
    }

    fn choose<T: ToString>(&self, label: &str, items: &[T], current: usize) -> Result<usize> {
        Ok(Select::with_theme(&self.theme)
            .with_prompt(label)
            .items(items)
            .default(current)
            .interact()?)
    }

    fn flag(&self, label: &str, yes: &str, no: &str, current: bool) -> Result<bool> {
        let index = self.choose(label, &[yes, no], if current { 0 } else { 1 })?;
        Ok(index == 0)
    }

    fn guard_details(&self, data: &ReportData) -> Result<ReportPatch> {
        Ok(ReportPatch {
            guard_name: Some(self.text("Guard Name", &data.guard_name)?),
            patrol_start: Some(self.time("Patrol Start Time", &data.patrol_start)?),
            patrol_end: Some(self.time("Patrol End Time", &data.patrol_end)?),
            ..ReportPatch::default()
        })
    }

    fn engines_and_pumps(&self, data: &ReportData) -> Result<ReportPatch> {
        let labels: Vec<String> = (1..=ENGINE_COUNT).map(|n| format!("Engine {n}")).collect();
        let flagged: Vec<bool> = data.engines.iter().map(|ok| !ok).collect();
        let failed = MultiSelect::with_theme(&self.theme)
            .with_prompt("Engines with an ISSUE (space toggles, enter confirms)")
            .items(&labels)
            .defaults(&flagged)
            .interact()?;
        let mut engines = [true; ENGINE_COUNT];
        for index in failed {
            engines[index] = false;
        }

        Ok(ReportPatch {
            engines: Some(engines),
            hydrant_pressure: Some(self.decimal("Hydrant Pressure (kg/cm2)", &data.hydrant_pressure)?),
            jockey_runtime: Some(self.whole("Jockey Runtime (mins)", &data.jockey_runtime)?),
            ..ReportPatch::default()
        })
    }

    fn storage_and_leaks(&self, data: &ReportData) -> Result<ReportPatch> {
        let mut patch = ReportPatch {
            tk13_level: Some(self.decimal("TK13 Level (m)", &data.tk13_level)?),
            tk29_level: Some(self.decimal("TK29 Level (m)", &data.tk29_level)?),
            ..ReportPatch::default()
        };

        let air = self.flag("Air Leak?", "YES", "NO", data.leak_air)?;
        patch.leak_air = Some(air);
        if air {
            patch.leak_air_location =
                Some(self.text("Air Leak Location", &data.leak_air_location)?);
        }

        let hydrant = self.flag("Hydrant Leak?", "YES", "NO", data.leak_hydrant)?;
        patch.leak_hydrant = Some(hydrant);
        if hydrant {
            patch.leak_hydrant_location =
                Some(self.text("Hydrant Leak Location", &data.leak_hydrant_location)?);
        }

        let product = self.flag("Product Leak?", "YES", "NO", data.leak_product)?;
        patch.leak_product = Some(product);
        if product {
            let current = data
                .leak_product_type
                .and_then(|kind| ProductType::ALL.iter().position(|p| *p == kind))
                .unwrap_or(0);
            let index = self.choose("Type", &ProductType::ALL, current)?;
            patch.leak_product_type = Some(ProductType::ALL[index]);
            patch.leak_product_location =
                Some(self.text("Location", &data.leak_product_location)?);
        }

        Ok(patch)
    }

    fn power(&self, data: &ReportData) -> Result<ReportPatch> {
        let grid = self.flag("33KV Grid Power", "ON", "OFF", data.power_33kv)?;
        let mut patch = ReportPatch {
            power_33kv: Some(grid),
            ..ReportPatch::default()
        };
        if grid {
            return Ok(patch);
        }

        patch.running_gg = Some(self.text("Running Generator", &data.running_gg)?);
        patch.running_gg_start_time =
            Some(self.time("Start Time", &data.running_gg_start_time)?);
        patch.running_gg_duration =
            Some(self.decimal("Hours on Load", &data.running_gg_duration)?);

        let changeover = self.flag(
            "Changeover Performed?",
            "YES",
            "NO",
            data.changeover_performed,
        )?;
        patch.changeover_performed = Some(changeover);
        if changeover {
            patch.new_gg = Some(self.text("New Generator", &data.new_gg)?);
            patch.new_gg_start_time =
                Some(self.time("New Generator Start Time", &data.new_gg_start_time)?);
        }
        Ok(patch)
    }

    fn logistics(&self, data: &ReportData) -> Result<ReportPatch> {
        let receiving = self.flag(
            "Pipeline Status",
            "RECEIVING",
            "STOPPED",
            data.pipeline_receiving,
        )?;
        let mut patch = ReportPatch {
            pipeline_receiving: Some(receiving),
            ..ReportPatch::default()
        };
        if receiving {
            let current = data
                .pipeline_product
                .and_then(|kind| PipelineProduct::ALL.iter().position(|p| *p == kind))
                .unwrap_or(0);
            let index = self.choose("Product", &PipelineProduct::ALL, current)?;
            patch.pipeline_product = Some(PipelineProduct::ALL[index]);
            patch.pipeline_tank_no = Some(self.text("Tank No", &data.pipeline_tank_no)?);
        }

        let current = RakeStatus::ALL
            .iter()
            .position(|status| *status == data.rake_status)
            .unwrap_or(0);
        let status = RakeStatus::ALL[self.choose("Rake Status", &RakeStatus::ALL, current)?];
        patch.rake_status = Some(status);
        if let Some(label) = status.time_label() {
            match status {
                RakeStatus::UnloadingCompleted => {
                    patch.rake_unloading_time =
                        Some(self.time(label, &data.rake_unloading_time)?);
                }
                RakeStatus::Removed => {
                    patch.rake_removal_time = Some(self.time(label, &data.rake_removal_time)?);
                }
                _ => patch.rake_time = Some(self.time(label, &data.rake_time)?),
            }
        }
        Ok(patch)
    }

    fn security_and_misc(&self, data: &ReportData) -> Result<ReportPatch> {
        let mut patch = ReportPatch {
            office_ac_light: Some(self.flag(
                "Office AC & Lights",
                "OK",
                "ISSUE",
                data.office_ac_light,
            )?),
            ..ReportPatch::default()
        };

        let cbacs = self.flag("C-BACS System", "FUNCTIONAL", "ISSUE", data.cbacs_functional)?;
        patch.cbacs_functional = Some(cbacs);
        if !cbacs {
            patch.cbacs_issue = Some(self.text("C-BACS Issue Details", &data.cbacs_issue)?);
        }

        let running = self.whole(
            &format!("CCTV Running Count (Total {})", data.cctv_total),
            &data.cctv_running,
        )?;
        let short = parse_int(&running)
            .map(|count| count < i64::from(data.cctv_total))
            .unwrap_or(false);
        if short {
            patch.cctv_issues = Some(self.text("CCTV Issue Details", &data.cctv_issues)?);
        }
        patch.cctv_running = Some(running);

        patch.observation_tower = Some(self.text("Watch Tower Obs", &data.observation_tower)?);
        patch.observation_night_vision =
            Some(self.text("Night Vision Obs", &data.observation_night_vision)?);
        patch.remarks = Some(self.text("Final Remarks", &data.remarks)?);
        Ok(patch)
    }
}

impl StepPrompter for DialoguerPrompter {
    fn collect(&mut self, step: Step, data: &ReportData) -> Result<StepAction> {
        self.begin_screen(&step.to_string())?;
        let patch = match step {
            Step::GuardDetails => self.guard_details(data)?,
            Step::EnginesAndPumps => self.engines_and_pumps(data)?,
            Step::StorageAndLeaks => self.storage_and_leaks(data)?,
            Step::Power => self.power(data)?,
            Step::Logistics => self.logistics(data)?,
            Step::SecurityAndMisc => self.security_and_misc(data)?,
        };

        let forward = if step.is_last() { "Finish" } else { "Next" };
        let mut options = vec![forward];
        if step.previous().is_some() {
            options.push("Back");
        }
        options.push("Cancel");

        let action = match options[self.choose("Continue", &options, 0)?] {
            "Back" => StepAction::Back(patch),
            "Cancel" => StepAction::Cancel,
            _ => StepAction::Submit(patch),
        };
        Ok(action)
    }

    fn confirm_sprinklers(&mut self) -> Result<bool> {
        output::warning(format!(
            "Jockey runtime is less than {JOCKEY_MIN_RUNTIME_MINS} minutes and no hydrant leak is reported."
        ));
        let index = self.choose(
            "Did you check the sprinklers?",
            &["Go Back", "Yes, Checked"],
            0,
        )?;
        Ok(index == 1)
    }

    fn report_action(&mut self, report: &str) -> Result<ReportAction> {
        self.begin_screen("Report Ready")?;
        println!("{report}");
        output::separator();
        let actions = [
            ("Send to WhatsApp", ReportAction::Share),
            ("Copy to Clipboard", ReportAction::Copy),
            ("Start New Report", ReportAction::NewReport),
            ("Quit", ReportAction::Quit),
        ];
        let labels: Vec<&str> = actions.iter().map(|(label, _)| *label).collect();
        let index = self.choose("What next?", &labels, 0)?;
        Ok(actions[index].1)
    }

    fn show(&mut self, kind: MessageKind, message: &str) {
        self.notices.push(kind, message);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::report::REQUIRED_FIELDS_NOTICE;

    #[test]
    fn shown_notices_wait_for_next_screen() {
        let notices = NoticeQueue::default();
        let mut prompter = DialoguerPrompter::new().with_notices(notices.clone());

        prompter.show(MessageKind::Warning, REQUIRED_FIELDS_NOTICE);
        prompter.show(MessageKind::Error, "Open this link manually");

        assert_eq!(
            notices.drain(),
            vec![
                (MessageKind::Warning, REQUIRED_FIELDS_NOTICE.to_string()),
                (MessageKind::Error, "Open this link manually".to_string()),
            ]
        );
    }
}
