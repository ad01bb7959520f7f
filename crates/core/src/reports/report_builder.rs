//! Fluent report builder.

use super::reports_model::Report;

/// Accumulates report fields across calls and materializes a [`Report`].
///
/// Setters take `&mut self` and return it so one builder can be kept
/// around and reused: [`ReportBuilder::build`] hands out the report and
/// puts the builder back to its defaults (empty strings, `false`).
/// No field is required, so an empty report can be built.
#[derive(Debug, Default)]
pub struct ReportBuilder {
    report_id: String,
    date_range: String,
    summary: String,
    export_status: bool,
}

impl ReportBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    /// Clears every accumulated field.
    pub fn reset(&mut self) -> &mut Self {
        *self = Self::default();
        self
    }

    pub fn report_id(&mut self, report_id: impl Into<String>) -> &mut Self {
        self.report_id = report_id.into();
        self
    }

    pub fn date_range(&mut self, date_range: impl Into<String>) -> &mut Self {
        self.date_range = date_range.into();
        self
    }

    pub fn summary(&mut self, summary: impl Into<String>) -> &mut Self {
        self.summary = summary.into();
        self
    }

    pub fn export_status(&mut self, export_status: bool) -> &mut Self {
        self.export_status = export_status;
        self
    }

    /// Builds the report and resets the builder.
    pub fn build(&mut self) -> Report {
        let state = std::mem::take(self);
        Report::new(
            state.report_id,
            state.date_range,
            state.summary,
            state.export_status,
        )
    }
}
