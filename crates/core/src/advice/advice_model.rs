//! Health advice domain models.

use std::fmt;

use log::info;
use serde::{Deserialize, Serialize};

use crate::constants::DEFAULT_ADVICE_RECOMMENDATION;
use crate::observations::HealthObservation;

/// A categorized piece of health advice.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Advice {
    #[serde(rename = "adviceID")]
    advice_id: String,
    category: String,
    content: String,
}

impl Advice {
    pub fn new(
        advice_id: impl Into<String>,
        category: impl Into<String>,
        content: impl Into<String>,
    ) -> Self {
        Self {
            advice_id: advice_id.into(),
            category: category.into(),
            content: content.into(),
        }
    }

    pub fn advice_id(&self) -> &str {
        &self.advice_id
    }

    pub fn category(&self) -> &str {
        &self.category
    }

    pub fn content(&self) -> &str {
        &self.content
    }

    /// Produces advice text for an observation.
    ///
    /// The recommendation is fixed; only the observation id varies.
    pub fn generate_advice(&self, observation: &HealthObservation) -> String {
        info!("Generating advice for dataID {}", observation.data_id());
        format!(
            "Advice for user data {}: {}",
            observation.data_id(),
            DEFAULT_ADVICE_RECOMMENDATION
        )
    }

    pub fn update_advice(&mut self, content: impl Into<String>) {
        self.content = content.into();
        info!("Advice {} updated", self.advice_id);
    }
}

impl fmt::Display for Advice {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Advice [{} - {}]: {}",
            self.advice_id, self.category, self.content
        )
    }
}
