//! Property-based integration tests for the registry and entity rules.
//!
//! These tests verify that universal properties hold across all valid inputs,
//! using the `proptest` crate for random test case generation.

use chrono::NaiveDate;
use healthhub_core::observations::HealthObservation;
use healthhub_core::registry::{read, same_entity, share, Registry};
use healthhub_core::reports::ReportBuilder;
use healthhub_core::users::{
    MedicalHistory, Patient, User, UserBase, UserFactory, UserFields, UserRole,
};
use healthhub_core::Error;
use proptest::prelude::*;
use serde_json::Value;

// =============================================================================
// Generators
// =============================================================================

/// Generates a factory tag in random case.
fn arb_known_tag() -> impl Strategy<Value = (String, UserRole)> {
    prop_oneof![
        Just(("doctor", UserRole::Doctor)),
        Just(("patient", UserRole::Patient)),
        Just(("fitness", UserRole::FitnessEnthusiast)),
    ]
    .prop_flat_map(|(tag, role)| {
        proptest::collection::vec(any::<bool>(), tag.len()).prop_map(move |upper| {
            let cased: String = tag
                .chars()
                .zip(upper)
                .map(|(c, up)| if up { c.to_ascii_uppercase() } else { c })
                .collect();
            (cased, role)
        })
    })
}

/// Generates a random observation.
fn arb_observation() -> impl Strategy<Value = HealthObservation> {
    (
        "[A-Z]{2}[0-9]{3}", // data id
        1u32..=28,          // day
        40.0f64..150.0,     // weight
        90u32..180,         // systolic
        60u32..110,         // diastolic
        40.0f64..180.0,     // heart rate
        "[a-zA-Z ]{0,20}",  // exercise
        0.0f64..14.0,       // sleep
        "[a-zA-Z ]{0,40}",  // remarks
    )
        .prop_map(
            |(id, day, weight, sys, dia, heart_rate, exercise, sleep, remarks)| {
                HealthObservation::new(
                    id,
                    NaiveDate::from_ymd_opt(2025, 1, day).unwrap(),
                    weight,
                    format!("{sys}/{dia}"),
                    heart_rate,
                    exercise,
                    sleep,
                    remarks,
                )
            },
        )
}

/// Generates a flat history record with small integer values.
fn arb_history() -> impl Strategy<Value = MedicalHistory> {
    proptest::collection::btree_map("[a-e]", 0i64..100, 0..5).prop_map(|entries| {
        entries
            .into_iter()
            .map(|(k, v)| (k, Value::from(v)))
            .collect()
    })
}

// =============================================================================
// Property Tests
// =============================================================================

proptest! {
    #![proptest_config(ProptestConfig::with_cases(100))]

    /// Known tags build the matching variant regardless of case.
    #[test]
    fn prop_factory_builds_tagged_variant((tag, role) in arb_known_tag(), id in "[A-Z][0-9]{3}") {
        let user = UserFactory::create_user(
            &tag,
            UserFields { user_id: id.clone(), ..Default::default() },
        ).unwrap();

        prop_assert_eq!(user.role(), role);
        prop_assert_eq!(user.user_id(), id.as_str());
        prop_assert_eq!(user.as_doctor().is_some(), role == UserRole::Doctor);
        prop_assert_eq!(user.as_patient().is_some(), role == UserRole::Patient);
        prop_assert_eq!(
            user.as_fitness_enthusiast().is_some(),
            role == UserRole::FitnessEnthusiast
        );
    }

    /// Any tag outside the known set is rejected.
    #[test]
    fn prop_factory_rejects_unknown_tags(tag in "[a-z]{1,12}") {
        prop_assume!(!["doctor", "patient", "fitness"].contains(&tag.as_str()));
        let result = UserFactory::create_user(&tag, UserFields::default());
        prop_assert!(matches!(result, Err(Error::UnknownVariant(t)) if t == tag));
    }

    /// add(e); get(id) hands back the very same handle.
    #[test]
    fn prop_registry_roundtrip_preserves_identity(
        observations in proptest::collection::vec(arb_observation(), 1..20)
    ) {
        let registry = Registry::new();
        let mut last_by_id = std::collections::HashMap::new();
        for observation in observations {
            let id = observation.data_id().to_string();
            let handle = share(observation);
            registry.add_health_observation(handle.clone());
            last_by_id.insert(id, handle);
        }

        for (id, handle) in &last_by_id {
            let stored = registry.get_health_observation(id).unwrap();
            prop_assert!(same_entity(&stored, handle));
        }
        prop_assert_eq!(registry.health_observations().len(), last_by_id.len());
    }

    /// A second add under the same id replaces the first, without error.
    #[test]
    fn prop_registry_overwrite_last_write_wins(
        first in arb_observation(),
        second in arb_observation()
    ) {
        let registry = Registry::new();
        let id = first.data_id().to_string();
        let second = HealthObservation::new(
            id.clone(),
            second.date(),
            second.weight(),
            second.blood_pressure(),
            second.heart_rate(),
            second.exercise(),
            second.sleep(),
            second.remarks(),
        );
        let first = share(first);
        let second = share(second);

        registry.add_health_observation(first);
        registry.add_health_observation(second.clone());

        prop_assert!(same_entity(&registry.get_health_observation(&id).unwrap(), &second));
        prop_assert_eq!(registry.health_observations().len(), 1);
    }

    /// build() always leaves the builder at its defaults.
    #[test]
    fn prop_builder_resets_after_build(
        id in "[A-Z0-9]{0,6}",
        range in "[0-9 ~-]{0,23}",
        summary in ".{0,40}",
        exported in any::<bool>(),
    ) {
        let mut builder = ReportBuilder::new();
        let first = builder
            .report_id(id.clone())
            .date_range(range.clone())
            .summary(summary.clone())
            .export_status(exported)
            .build();
        let second = builder.build();

        prop_assert_eq!(first.report_id(), id.as_str());
        prop_assert_eq!(first.date_range(), range.as_str());
        prop_assert_eq!(first.summary(), summary.as_str());
        prop_assert_eq!(first.export_status(), exported);
        prop_assert_eq!(second.report_id(), "");
        prop_assert_eq!(second.date_range(), "");
        prop_assert_eq!(second.summary(), "");
        prop_assert!(!second.export_status());
    }

    /// Merging histories keeps old keys and lets new keys win.
    #[test]
    fn prop_medical_history_merge(old in arb_history(), new in arb_history()) {
        let mut patient = Patient::new(
            UserBase::new("P1", "Pat", 40, "Female", Default::default()),
            old.clone(),
            vec![],
            vec![],
        );

        patient.record_medical_history(new.clone());

        let merged = patient.medical_history();
        for (key, value) in &new {
            prop_assert_eq!(merged.get(key), Some(value));
        }
        for (key, value) in &old {
            if !new.contains_key(key) {
                prop_assert_eq!(merged.get(key), Some(value));
            }
        }
        for key in merged.keys() {
            prop_assert!(old.contains_key(key) || new.contains_key(key));
        }
    }

    /// update_data copies everything except the id and the date.
    #[test]
    fn prop_update_data_preserves_identity(
        target in arb_observation(),
        source in arb_observation()
    ) {
        let handle = share(target.clone());
        handle.write().unwrap().update_data(&source);
        let updated = read(&handle);

        prop_assert_eq!(updated.data_id(), target.data_id());
        prop_assert_eq!(updated.date(), target.date());
        prop_assert_eq!(updated.weight(), source.weight());
        prop_assert_eq!(updated.blood_pressure(), source.blood_pressure());
        prop_assert_eq!(updated.heart_rate(), source.heart_rate());
        prop_assert_eq!(updated.exercise(), source.exercise());
        prop_assert_eq!(updated.sleep(), source.sleep());
        prop_assert_eq!(updated.remarks(), source.remarks());
    }
}
