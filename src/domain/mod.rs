//! The inspection record collected by the wizard and the steps that fill it.

pub mod patch;
pub mod report_data;
pub mod step;

pub use patch::ReportPatch;
pub use report_data::{
    is_filled, PipelineProduct, ProductType, RakeStatus, ReportData, CCTV_TOTAL, ENGINE_COUNT,
};
pub use step::Step;
