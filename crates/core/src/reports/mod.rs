//! Reports module - report model and its fluent builder.

mod report_builder;
mod reports_model;

pub use report_builder::ReportBuilder;
pub use reports_model::{ExportArtifact, Report};
