//! Fitness enthusiast role variant.

use log::info;
use serde_json::Value;

use super::users_model::{ContactInfo, UserBase, UserRole};
use super::users_traits::User;
use crate::observations::HealthObservation;

#[derive(Debug, Clone, PartialEq)]
pub struct FitnessEnthusiast {
    base: UserBase,
    workout_preferences: Value,
    fitness_goals: Value,
}

impl FitnessEnthusiast {
    pub fn new(base: UserBase, workout_preferences: Value, fitness_goals: Value) -> Self {
        Self {
            base,
            workout_preferences,
            fitness_goals,
        }
    }

    pub fn workout_preferences(&self) -> &Value {
        &self.workout_preferences
    }

    pub fn fitness_goals(&self) -> &Value {
        &self.fitness_goals
    }

    pub fn set_workout_preferences(&mut self, preferences: Value) {
        self.workout_preferences = preferences;
        info!("Workout preferences updated for user {}", self.user_id());
    }

    pub fn update_fitness_goals(&mut self, goals: Value) {
        self.fitness_goals = goals;
        info!("Fitness goals updated for user {}", self.user_id());
    }

    /// Announces a workout. The observation is not kept on the user;
    /// register it with the registry to retain it.
    pub fn record_workout_data(&self, observation: &HealthObservation) {
        info!(
            "User {} recorded workout data {} ({})",
            self.user_id(),
            observation.data_id(),
            observation.exercise()
        );
    }
}

impl User for FitnessEnthusiast {
    fn base(&self) -> &UserBase {
        &self.base
    }

    fn contact_info_mut(&mut self) -> &mut ContactInfo {
        self.base.contact_info_mut()
    }

    fn role(&self) -> UserRole {
        UserRole::FitnessEnthusiast
    }
}
