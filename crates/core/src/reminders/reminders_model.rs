//! Health reminder domain models.

use chrono::NaiveDateTime;
use log::info;
use serde::{Deserialize, Serialize};

/// Lifecycle of a reminder. The only transition is `Pending -> Completed`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ReminderStatus {
    #[default]
    Pending,
    Completed,
}

impl ReminderStatus {
    pub fn is_completed(&self) -> bool {
        matches!(self, ReminderStatus::Completed)
    }
}

/// A scheduled nudge (medication, exercise, ...).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Reminder {
    #[serde(rename = "reminderID")]
    reminder_id: String,
    #[serde(rename = "type")]
    reminder_type: String,
    content: String,
    time: NaiveDateTime,
    status: ReminderStatus,
}

/// Partial update for [`Reminder::update_reminder`]. Absent fields are left alone.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ReminderUpdate {
    pub new_content: Option<String>,
    pub new_time: Option<NaiveDateTime>,
}

impl Reminder {
    /// Creates a pending reminder.
    pub fn new(
        reminder_id: impl Into<String>,
        reminder_type: impl Into<String>,
        content: impl Into<String>,
        time: NaiveDateTime,
    ) -> Self {
        Self::with_status(
            reminder_id,
            reminder_type,
            content,
            time,
            ReminderStatus::Pending,
        )
    }

    pub fn with_status(
        reminder_id: impl Into<String>,
        reminder_type: impl Into<String>,
        content: impl Into<String>,
        time: NaiveDateTime,
        status: ReminderStatus,
    ) -> Self {
        Self {
            reminder_id: reminder_id.into(),
            reminder_type: reminder_type.into(),
            content: content.into(),
            time,
            status,
        }
    }

    pub fn reminder_id(&self) -> &str {
        &self.reminder_id
    }

    pub fn reminder_type(&self) -> &str {
        &self.reminder_type
    }

    pub fn content(&self) -> &str {
        &self.content
    }

    pub fn time(&self) -> NaiveDateTime {
        self.time
    }

    pub fn status(&self) -> ReminderStatus {
        self.status
    }

    pub fn is_completed(&self) -> bool {
        self.status.is_completed()
    }

    pub fn set_reminder(&mut self, time: NaiveDateTime) {
        self.time = time;
        info!("Reminder {} time set to {}", self.reminder_id, time);
    }

    /// Applies the present fields. Empty content counts as absent.
    pub fn update_reminder(&mut self, details: ReminderUpdate) {
        if let Some(content) = details.new_content.filter(|content| !content.is_empty()) {
            self.content = content;
        }
        if let Some(time) = details.new_time {
            self.time = time;
        }
        info!("Reminder {} updated", self.reminder_id);
    }

    pub fn mark_as_completed(&mut self) {
        self.status = ReminderStatus::Completed;
        info!("Reminder {} marked as completed", self.reminder_id);
    }

    /// Signals cancellation. No state is recorded.
    pub fn cancel_reminder(&self) {
        info!("Reminder {} canceled", self.reminder_id);
    }
}
