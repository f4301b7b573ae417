use std::fmt;

use serde::{Deserialize, Serialize};

/// Number of fire-pump engines tracked on the engines step.
pub const ENGINE_COUNT: usize = 5;

/// Installed CCTV cameras on site.
pub const CCTV_TOTAL: u32 = 71;

/// Product carried by a leaking line.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ProductType {
    #[serde(rename = "MS")]
    Ms,
    #[serde(rename = "HSD")]
    Hsd,
    Ethanol,
    #[serde(rename = "Bio-Diesel")]
    BioDiesel,
    #[serde(rename = "LDO")]
    Ldo,
    #[serde(rename = "LSHSP")]
    Lshsp,
}

impl ProductType {
    pub const ALL: [ProductType; 6] = [
        ProductType::Ms,
        ProductType::Hsd,
        ProductType::Ethanol,
        ProductType::BioDiesel,
        ProductType::Ldo,
        ProductType::Lshsp,
    ];

    pub fn label(self) -> &'static str {
        match self {
            ProductType::Ms => "MS",
            ProductType::Hsd => "HSD",
            ProductType::Ethanol => "Ethanol",
            ProductType::BioDiesel => "Bio-Diesel",
            ProductType::Ldo => "LDO",
            ProductType::Lshsp => "LSHSP",
        }
    }
}

impl fmt::Display for ProductType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Product received over the pipeline.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum PipelineProduct {
    #[serde(rename = "MS")]
    Ms,
    #[serde(rename = "HSD")]
    Hsd,
    Ethanol,
}

impl PipelineProduct {
    pub const ALL: [PipelineProduct; 3] = [
        PipelineProduct::Ms,
        PipelineProduct::Hsd,
        PipelineProduct::Ethanol,
    ];

    pub fn label(self) -> &'static str {
        match self {
            PipelineProduct::Ms => "MS",
            PipelineProduct::Hsd => "HSD",
            PipelineProduct::Ethanol => "Ethanol",
        }
    }
}

impl fmt::Display for PipelineProduct {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Lifecycle of the rail rake at the siding.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum RakeStatus {
    #[default]
    #[serde(rename = "None")]
    Idle,
    Placed,
    Unloading,
    #[serde(rename = "Unloading Completed")]
    UnloadingCompleted,
    Removed,
}

impl RakeStatus {
    pub const ALL: [RakeStatus; 5] = [
        RakeStatus::Idle,
        RakeStatus::Placed,
        RakeStatus::Unloading,
        RakeStatus::UnloadingCompleted,
        RakeStatus::Removed,
    ];

    pub fn label(self) -> &'static str {
        match self {
            RakeStatus::Idle => "None",
            RakeStatus::Placed => "Placed",
            RakeStatus::Unloading => "Unloading",
            RakeStatus::UnloadingCompleted => "Unloading Completed",
            RakeStatus::Removed => "Removed",
        }
    }

    /// Prompt label of the timestamp this status records, if any.
    pub fn time_label(self) -> Option<&'static str> {
        match self {
            RakeStatus::Idle => None,
            RakeStatus::Placed => Some("Placement Time"),
            RakeStatus::Unloading => Some("Unloading Start Time"),
            RakeStatus::UnloadingCompleted => Some("Unloading Completion Time"),
            RakeStatus::Removed => Some("Removal Time"),
        }
    }
}

impl fmt::Display for RakeStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Every reading collected over one patrol.
///
/// Text fields keep exactly what the guard typed; numeric interpretation is
/// deferred to [`crate::report::numbers`]. Missing keys deserialize to their
/// defaults, so a partial JSON document is a valid record.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ReportData {
    // Guard details
    pub guard_name: String,
    pub patrol_start: String,
    pub patrol_end: String,

    // Engines & pumps
    pub engines: [bool; ENGINE_COUNT],
    pub hydrant_pressure: String,
    /// Minutes.
    pub jockey_runtime: String,

    // Storage & leaks
    pub tk13_level: String,
    pub tk29_level: String,
    pub leak_air: bool,
    pub leak_air_location: String,
    pub leak_hydrant: bool,
    pub leak_hydrant_location: String,
    pub leak_product: bool,
    pub leak_product_location: String,
    pub leak_product_type: Option<ProductType>,

    // Power
    pub power_33kv: bool,
    pub running_gg: String,
    pub running_gg_start_time: String,
    /// Hours the running generator has been on load.
    pub running_gg_duration: String,
    pub changeover_performed: bool,
    pub new_gg: String,
    pub new_gg_start_time: String,

    // Logistics
    pub pipeline_receiving: bool,
    pub pipeline_product: Option<PipelineProduct>,
    pub pipeline_tank_no: String,
    pub rake_status: RakeStatus,
    /// Placement or unloading-start time, depending on `rake_status`.
    pub rake_time: String,
    pub rake_unloading_time: String,
    pub rake_removal_time: String,

    // Security & misc
    /// `true` reads as OK, `false` as Issue.
    pub office_ac_light: bool,
    pub cbacs_functional: bool,
    pub cbacs_issue: String,
    pub cctv_total: u32,
    pub cctv_running: String,
    pub cctv_issues: String,
    pub observation_tower: String,
    pub observation_night_vision: String,
    pub remarks: String,
}

impl Default for ReportData {
    fn default() -> Self {
        Self {
            guard_name: String::new(),
            patrol_start: String::new(),
            patrol_end: String::new(),
            engines: [true; ENGINE_COUNT],
            hydrant_pressure: String::new(),
            jockey_runtime: String::new(),
            tk13_level: String::new(),
            tk29_level: String::new(),
            leak_air: false,
            leak_air_location: String::new(),
            leak_hydrant: false,
            leak_hydrant_location: String::new(),
            leak_product: false,
            leak_product_location: String::new(),
            leak_product_type: Some(ProductType::Ms),
            power_33kv: true,
            running_gg: String::new(),
            running_gg_start_time: String::new(),
            running_gg_duration: String::new(),
            changeover_performed: false,
            new_gg: String::new(),
            new_gg_start_time: String::new(),
            pipeline_receiving: false,
            pipeline_product: None,
            pipeline_tank_no: String::new(),
            rake_status: RakeStatus::Idle,
            rake_time: String::new(),
            rake_unloading_time: String::new(),
            rake_removal_time: String::new(),
            office_ac_light: true,
            cbacs_functional: true,
            cbacs_issue: String::new(),
            cctv_total: CCTV_TOTAL,
            cctv_running: CCTV_TOTAL.to_string(),
            cctv_issues: String::new(),
            observation_tower: "Normal".to_string(),
            observation_night_vision: "Clear".to_string(),
            remarks: String::new(),
        }
    }
}

impl ReportData {
    /// Fresh record with the guard name pre-filled, as configured.
    pub fn for_guard(default_guard: Option<&str>) -> Self {
        let mut data = Self::default();
        if let Some(name) = default_guard {
            data.guard_name = name.to_string();
        }
        data
    }

    /// 1-based positions of engines reported with an issue.
    pub fn failed_engines(&self) -> Vec<usize> {
        self.engines
            .iter()
            .enumerate()
            .filter(|(_, working)| !**working)
            .map(|(index, _)| index + 1)
            .collect()
    }
}

/// A field counts as filled once it holds a non-whitespace character.
pub fn is_filled(value: &str) -> bool {
    !value.trim().is_empty()
}
