//! Health observation domain models.

use chrono::NaiveDate;
use log::{debug, info};
use serde::{Deserialize, Serialize};

use crate::constants::PLACEHOLDER_TREND_ANALYSIS;

/// A single dated set of vital signs and lifestyle notes.
///
/// `data_id` and `date` are fixed at construction. Every other field can be
/// replaced through [`HealthObservation::update_data`]; remarks can also be
/// edited on their own.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct HealthObservation {
    #[serde(rename = "dataID")]
    data_id: String,
    date: NaiveDate,
    weight: f64,
    /// Expected as "<systolic>/<diastolic>", not checked
    blood_pressure: String,
    heart_rate: f64,
    exercise: String,
    /// Hours slept
    sleep: f64,
    remarks: String,
}

impl HealthObservation {
    #[allow(clippy::too_many_arguments)]
    pub fn new(
        data_id: impl Into<String>,
        date: NaiveDate,
        weight: f64,
        blood_pressure: impl Into<String>,
        heart_rate: f64,
        exercise: impl Into<String>,
        sleep: f64,
        remarks: impl Into<String>,
    ) -> Self {
        Self {
            data_id: data_id.into(),
            date,
            weight,
            blood_pressure: blood_pressure.into(),
            heart_rate,
            exercise: exercise.into(),
            sleep,
            remarks: remarks.into(),
        }
    }

    pub fn data_id(&self) -> &str {
        &self.data_id
    }

    pub fn date(&self) -> NaiveDate {
        self.date
    }

    pub fn weight(&self) -> f64 {
        self.weight
    }

    pub fn blood_pressure(&self) -> &str {
        &self.blood_pressure
    }

    pub fn heart_rate(&self) -> f64 {
        self.heart_rate
    }

    pub fn exercise(&self) -> &str {
        &self.exercise
    }

    pub fn sleep(&self) -> f64 {
        self.sleep
    }

    pub fn remarks(&self) -> &str {
        &self.remarks
    }

    pub fn set_remarks(&mut self, remarks: impl Into<String>) {
        self.remarks = remarks.into();
    }

    /// Checks the observation for consistency.
    ///
    /// No validation rule exists yet, so every observation passes.
    pub fn validate_data(&self) -> bool {
        debug!("Validating health observation {}", self.data_id);
        true
    }

    /// Copies every measured field and the remarks from `other`.
    ///
    /// `data_id` and `date` keep their current values.
    pub fn update_data(&mut self, other: &HealthObservation) {
        self.weight = other.weight;
        self.blood_pressure = other.blood_pressure.clone();
        self.heart_rate = other.heart_rate;
        self.exercise = other.exercise.clone();
        self.sleep = other.sleep;
        self.remarks = other.remarks.clone();
        info!("Health observation {} updated", self.data_id);
    }

    /// Placeholder trend analysis. No graph is produced.
    pub fn trend_analysis(&self) -> TrendAnalysis {
        debug!("Generating trend analysis for {}", self.data_id);
        TrendAnalysis {
            trend_graph: None,
            analysis_text: PLACEHOLDER_TREND_ANALYSIS.to_string(),
        }
    }
}

/// Result of [`HealthObservation::trend_analysis`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TrendAnalysis {
    pub trend_graph: Option<String>,
    pub analysis_text: String,
}
