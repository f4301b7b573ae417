use serde::Deserialize;

use super::report_data::{PipelineProduct, ProductType, RakeStatus, ReportData, ENGINE_COUNT};

/// Partial update to a [`ReportData`]. `Some` fields replace the current
/// value; `None` fields keep it.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(default)]
pub struct ReportPatch {
    pub guard_name: Option<String>,
    pub patrol_start: Option<String>,
    pub patrol_end: Option<String>,

    pub engines: Option<[bool; ENGINE_COUNT]>,
    pub hydrant_pressure: Option<String>,
    pub jockey_runtime: Option<String>,

    pub tk13_level: Option<String>,
    pub tk29_level: Option<String>,
    pub leak_air: Option<bool>,
    pub leak_air_location: Option<String>,
    pub leak_hydrant: Option<bool>,
    pub leak_hydrant_location: Option<String>,
    pub leak_product: Option<bool>,
    pub leak_product_location: Option<String>,
    pub leak_product_type: Option<ProductType>,

    pub power_33kv: Option<bool>,
    pub running_gg: Option<String>,
    pub running_gg_start_time: Option<String>,
    pub running_gg_duration: Option<String>,
    pub changeover_performed: Option<bool>,
    pub new_gg: Option<String>,
    pub new_gg_start_time: Option<String>,

    pub pipeline_receiving: Option<bool>,
    pub pipeline_product: Option<PipelineProduct>,
    pub pipeline_tank_no: Option<String>,
    pub rake_status: Option<RakeStatus>,
    pub rake_time: Option<String>,
    pub rake_unloading_time: Option<String>,
    pub rake_removal_time: Option<String>,

    pub office_ac_light: Option<bool>,
    pub cbacs_functional: Option<bool>,
    pub cbacs_issue: Option<String>,
    pub cctv_running: Option<String>,
    pub cctv_issues: Option<String>,
    pub observation_tower: Option<String>,
    pub observation_night_vision: Option<String>,
    pub remarks: Option<String>,
}

impl ReportPatch {
    pub fn is_empty(&self) -> bool {
        *self == ReportPatch::default()
    }
}

impl ReportData {
    /// Returns a new record with `patch` applied on top of `self`.
    pub fn merged(&self, patch: ReportPatch) -> ReportData {
        let mut next = self.clone();

        macro_rules! replace {
            ($($field:ident),* $(,)?) => {
                $(
                    if let Some(value) = patch.$field {
                        next.$field = value;
                    }
                )*
            };
        }

        replace!(
            guard_name,
            patrol_start,
            patrol_end,
            engines,
            hydrant_pressure,
            jockey_runtime,
            tk13_level,
            tk29_level,
            leak_air,
            leak_air_location,
            leak_hydrant,
            leak_hydrant_location,
            leak_product,
            leak_product_location,
            power_33kv,
            running_gg,
            running_gg_start_time,
            running_gg_duration,
            changeover_performed,
            new_gg,
            new_gg_start_time,
            pipeline_receiving,
            pipeline_tank_no,
            rake_status,
            rake_time,
            rake_unloading_time,
            rake_removal_time,
            office_ac_light,
            cbacs_functional,
            cbacs_issue,
            cctv_running,
            cctv_issues,
            observation_tower,
            observation_night_vision,
            remarks,
        );

        if let Some(product) = patch.leak_product_type {
            next.leak_product_type = Some(product);
        }
        if let Some(product) = patch.pipeline_product {
            next.pipeline_product = Some(product);
        }

        next
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn merge_keeps_unspecified_fields() {
        let base = ReportData {
            guard_name: "Ravi".into(),
            patrol_start: "22:00".into(),
            ..ReportData::default()
        };
        let next = base.merged(ReportPatch {
            patrol_end: Some("23:30".into()),
            ..ReportPatch::default()
        });
        assert_eq!(next.guard_name, "Ravi");
        assert_eq!(next.patrol_start, "22:00");
        assert_eq!(next.patrol_end, "23:30");
        assert_eq!(base.patrol_end, "", "source record must stay untouched");
    }

    #[test]
    fn merge_sets_optional_enums() {
        let next = ReportData::default().merged(ReportPatch {
            pipeline_product: Some(PipelineProduct::Hsd),
            leak_product_type: Some(ProductType::Lshsp),
            ..ReportPatch::default()
        });
        assert_eq!(next.pipeline_product, Some(PipelineProduct::Hsd));
        assert_eq!(next.leak_product_type, Some(ProductType::Lshsp));
    }

    #[test]
    fn empty_patch_is_identity() {
        let base = ReportData::default();
        assert!(ReportPatch::default().is_empty());
        assert_eq!(base.merged(ReportPatch::default()), base);
    }

    #[test]
    fn patch_deserializes_from_partial_json() {
        let patch: ReportPatch =
            serde_json::from_str(r#"{"jockey_runtime": "30", "leak_hydrant": true}"#).unwrap();
        assert_eq!(patch.jockey_runtime.as_deref(), Some("30"));
        assert_eq!(patch.leak_hydrant, Some(true));
        assert!(patch.remarks.is_none());
    }
}
