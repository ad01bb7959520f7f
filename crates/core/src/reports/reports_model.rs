//! Report domain models.

use std::fmt;

use log::info;
use serde::{Deserialize, Serialize};

use super::report_builder::ReportBuilder;
use crate::observations::HealthObservation;

/// A summary of a patient's health over a date range.
///
/// Fields are set once, by [`ReportBuilder`] or [`Report::new`].
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Report {
    #[serde(rename = "reportID")]
    report_id: String,
    date_range: String,
    summary: String,
    export_status: bool,
}

impl Report {
    pub fn new(
        report_id: impl Into<String>,
        date_range: impl Into<String>,
        summary: impl Into<String>,
        export_status: bool,
    ) -> Self {
        Self {
            report_id: report_id.into(),
            date_range: date_range.into(),
            summary: summary.into(),
            export_status,
        }
    }

    /// Creates a new report builder.
    pub fn builder() -> ReportBuilder {
        ReportBuilder::new()
    }

    pub fn report_id(&self) -> &str {
        &self.report_id
    }

    pub fn date_range(&self) -> &str {
        &self.date_range
    }

    pub fn summary(&self) -> &str {
        &self.summary
    }

    pub fn export_status(&self) -> bool {
        self.export_status
    }

    pub fn generate_summary(&self) -> &str {
        info!("Generating summary for report {}", self.report_id);
        &self.summary
    }

    /// Describes the file an export in `format` would produce.
    ///
    /// Nothing is written and `export_status` is left as is.
    pub fn export_report(&self, format: &str) -> ExportArtifact {
        info!("Exporting report {} in format {}", self.report_id, format);
        ExportArtifact {
            file_name: format!("Report_{}.{}", self.report_id, format),
        }
    }

    /// Notifies that new health data is relevant to this report.
    /// The report itself is not changed.
    pub fn update_report(&self, observation: &HealthObservation) {
        info!(
            "Updating report {} with new health data: {}",
            self.report_id,
            observation.data_id()
        );
    }
}

impl fmt::Display for Report {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Report ID: {}", self.report_id)?;
        writeln!(f, "Date Range: {}", self.date_range)?;
        writeln!(f, "Summary: {}", self.summary)?;
        write!(f, "Export Status: {}", self.export_status)
    }
}

/// Descriptor of a would-be export output.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ExportArtifact {
    pub file_name: String,
}
