//! Tests for the session registry.

#[cfg(test)]
mod tests {
    use crate::advice::Advice;
    use crate::observations::HealthObservation;
    use crate::registry::{read, same_entity, share, write, Registry, RegistryStats};
    use crate::reminders::Reminder;
    use crate::reports::Report;
    use crate::users::{ContactInfo, User, UserFactory, UserFields};
    use crate::Error;
    use chrono::NaiveDate;

    fn create_test_observation(id: &str) -> HealthObservation {
        HealthObservation::new(
            id,
            NaiveDate::from_ymd_opt(2025, 1, 1).unwrap(),
            70.0,
            "120/80",
            72.0,
            "Running",
            8.0,
            "Feeling good",
        )
    }

    fn create_test_doctor(id: &str, name: &str) -> crate::users::UserAccount {
        UserFactory::create_user(
            "doctor",
            UserFields {
                user_id: id.to_string(),
                name: name.to_string(),
                age: 45,
                gender: "Female".to_string(),
                contact_info: ContactInfo::new("lee@example.com", "000"),
                specialization: "Pediatrics".to_string(),
                license_number: "LIC654321".to_string(),
                department: "Pediatrics Dept".to_string(),
                ..Default::default()
            },
        )
        .unwrap()
    }

    // ==================== Round-trip Tests ====================

    #[test]
    fn test_add_and_get_user() {
        let registry = Registry::new();
        let doctor = share(create_test_doctor("D002", "Dr. Lee"));
        registry.add_user(doctor.clone());

        let retrieved = registry.get_user("D002").unwrap();
        assert!(same_entity(&retrieved, &doctor));
        let user = read(&retrieved);
        assert_eq!(user.name(), "Dr. Lee");
        assert!(user.as_doctor().is_some());
    }

    #[test]
    fn test_add_and_get_health_observation() {
        let registry = Registry::new();
        let observation = share(create_test_observation("HD001"));
        registry.add_health_observation(observation.clone());

        let retrieved = registry.get_health_observation("HD001").unwrap();
        assert!(same_entity(&retrieved, &observation));
        assert_eq!(read(&retrieved).weight(), 70.0);
    }

    #[test]
    fn test_add_and_get_report() {
        let registry = Registry::new();
        let report = share(Report::new(
            "R001",
            "2025-01-01 ~ 2025-01-31",
            "Initial summary",
            false,
        ));
        registry.add_report(report.clone());

        let retrieved = registry.get_report("R001").unwrap();
        assert!(same_entity(&retrieved, &report));
        assert_eq!(read(&retrieved).report_id(), "R001");
    }

    #[test]
    fn test_add_and_get_reminder() {
        let registry = Registry::new();
        let time = NaiveDate::from_ymd_opt(2025, 1, 12)
            .unwrap()
            .and_hms_opt(9, 0, 0)
            .unwrap();
        let reminder = share(Reminder::new(
            "REM001",
            "Medication",
            "Take pill at 9 AM",
            time,
        ));
        registry.add_reminder(reminder.clone());

        let retrieved = registry.get_reminder("REM001").unwrap();
        assert!(same_entity(&retrieved, &reminder));
        assert_eq!(read(&retrieved).reminder_type(), "Medication");
    }

    #[test]
    fn test_add_and_get_advice() {
        let registry = Registry::new();
        let advice = share(Advice::new("ADV001", "Diet", "Reduce sugar intake"));
        registry.add_advice(advice.clone());

        let retrieved = registry.get_advice("ADV001").unwrap();
        assert!(same_entity(&retrieved, &advice));
        assert_eq!(read(&retrieved).category(), "Diet");
    }

    // ==================== Lookup / Overwrite Tests ====================

    #[test]
    fn test_get_missing_ids_return_none() {
        let registry = Registry::new();
        assert!(registry.get_user("nobody").is_none());
        assert!(registry.get_health_observation("nothing").is_none());
        assert!(registry.get_report("none").is_none());
        assert!(registry.get_reminder("none").is_none());
        assert!(registry.get_advice("none").is_none());
    }

    #[test]
    fn test_add_same_id_last_write_wins() {
        let registry = Registry::new();
        let first = share(create_test_doctor("D100", "Dr. Chen"));
        let second = share(create_test_doctor("D100", "Dr. Chen Jr."));

        registry.add_user(first.clone());
        registry.add_user(second.clone());

        let retrieved = registry.get_user("D100").unwrap();
        assert!(same_entity(&retrieved, &second));
        assert!(!same_entity(&retrieved, &first));
        assert_eq!(registry.users().len(), 1);
    }

    #[test]
    fn test_mutation_through_registry_handle_is_visible_to_caller() {
        let registry = Registry::new();
        let observation = share(create_test_observation("HD_P100_01"));
        registry.add_health_observation(observation.clone());

        if let Some(stored) = registry.get_health_observation("HD_P100_01") {
            write(&stored).set_remarks("Doctor updated remarks: keep monitoring BP.");
        }

        assert_eq!(
            read(&observation).remarks(),
            "Doctor updated remarks: keep monitoring BP."
        );
    }

    #[test]
    fn test_readd_while_editing_does_not_block() {
        let registry = std::sync::Arc::new(Registry::new());
        let observation = share(create_test_observation("HD_P100_01"));
        registry.add_health_observation(observation.clone());

        let (done_tx, done_rx) = std::sync::mpsc::channel();
        let worker_registry = registry.clone();
        let worker_observation = observation.clone();
        std::thread::spawn(move || {
            let mut guard = write(&worker_observation);
            guard.set_remarks("Edited before re-adding");
            worker_registry.add_health_observation(worker_observation.clone());
            drop(guard);
            let _ = done_tx.send(());
        });

        assert!(done_rx
            .recv_timeout(std::time::Duration::from_secs(3))
            .is_ok());
        let stored = registry.get_health_observation("HD_P100_01").unwrap();
        assert!(same_entity(&stored, &observation));
        assert_eq!(read(&stored).remarks(), "Edited before re-adding");
        assert_eq!(registry.health_observations().len(), 1);
    }

    #[test]
    fn test_stats_counts_each_kind() {
        let registry = Registry::new();
        registry.add_user(share(create_test_doctor("D1", "Dr. One")));
        registry.add_health_observation(share(create_test_observation("HD1")));
        registry.add_health_observation(share(create_test_observation("HD2")));
        registry.add_advice(share(Advice::new("ADV1", "Diet", "Less salt")));

        assert_eq!(
            registry.stats(),
            RegistryStats {
                users: 1,
                health_observations: 2,
                reports: 0,
                reminders: 0,
                advice: 1,
            }
        );
        assert_eq!(registry.health_observations().len(), 2);
        assert_eq!(registry.advice().len(), 1);
        assert!(registry.reports().is_empty());
        assert!(registry.reminders().is_empty());
    }

    // ==================== Process-wide Instance Tests ====================

    #[test]
    fn test_global_returns_same_instance() {
        let a = Registry::global();
        let b = Registry::global();
        assert!(std::ptr::eq(a, b));
    }

    #[test]
    fn test_install_after_global_exists_fails() {
        Registry::global();
        let err = Registry::install_global(Registry::new()).unwrap_err();
        assert!(matches!(err, Error::InvariantViolation(_)));
    }
}
