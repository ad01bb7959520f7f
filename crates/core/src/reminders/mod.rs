//! Reminders module - scheduled health reminders.

mod reminders_model;

pub use reminders_model::{Reminder, ReminderStatus, ReminderUpdate};
