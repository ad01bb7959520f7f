//! Scripted walk-through of one registry session.

use anyhow::{anyhow, Context};
use chrono::{Local, NaiveDate};
use healthhub_core::advice::Advice;
use healthhub_core::observations::HealthObservation;
use healthhub_core::registry::{read, share, write, Registry};
use healthhub_core::reminders::Reminder;
use healthhub_core::reports::ReportBuilder;
use healthhub_core::users::{MedicalHistory, User, UserFactory};
use serde_json::json;
use tracing::info;

use crate::config::Config;

fn date(year: i32, month: u32, day: u32) -> anyhow::Result<NaiveDate> {
    NaiveDate::from_ymd_opt(year, month, day)
        .ok_or_else(|| anyhow!("invalid date {year}-{month}-{day}"))
}

pub fn run(registry: &Registry, config: &Config) -> anyhow::Result<()> {
    register_users(registry)?;
    register_observations(registry)?;
    patient_usage(registry)?;
    doctor_usage(registry)?;
    fitness_usage(registry)?;
    reports_reminders_and_advice(registry, config)?;

    info!(stats = ?registry.stats(), "Session complete");
    Ok(())
}

fn register_users(registry: &Registry) -> anyhow::Result<()> {
    let doctor = UserFactory::create_user_from_json(
        "doctor",
        json!({
            "userID": "D100",
            "name": "Dr. Chen",
            "age": 45,
            "gender": "Male",
            "contactInfo": { "email": "drchen@example.com", "phone": "123456" },
            "specialization": "Cardiology",
            "licenseNumber": "LIC987654",
            "department": "Cardiology Dept"
        }),
    )?;
    let patient = UserFactory::create_user_from_json(
        "patient",
        json!({
            "userID": "P100",
            "name": "Alice Patient",
            "age": 30,
            "gender": "Female",
            "contactInfo": { "email": "alicep@example.com", "phone": "654321" },
            "medicalHistory": { "pastIllnesses": ["Flu"] },
            "conditions": ["High Blood Pressure"],
            "medications": ["Amlodipine"]
        }),
    )?;
    let fitness = UserFactory::create_user_from_json(
        "fitness",
        json!({
            "userID": "F100",
            "name": "Bob Fitness",
            "age": 25,
            "gender": "Male",
            "contactInfo": { "email": "bobfit@example.com", "phone": "987654" },
            "workoutPreferences": { "favoriteExercises": ["Running", "Cycling"] },
            "fitnessGoals": { "targetWeight": 68 }
        }),
    )?;

    for user in [doctor, patient, fitness] {
        let profile = serde_json::to_string(&user.view_profile())?;
        info!(role = %user.role(), %profile, "User registered");
        registry.add_user(share(user));
    }
    Ok(())
}

fn register_observations(registry: &Registry) -> anyhow::Result<()> {
    let observations = [
        HealthObservation::new(
            "HD101",
            date(2025, 1, 10)?,
            70.0,
            "120/80",
            75.0,
            "Running",
            7.0,
            "Good condition",
        ),
        HealthObservation::new(
            "HD102",
            date(2025, 1, 11)?,
            71.0,
            "130/85",
            78.0,
            "Swimming",
            8.0,
            "Slightly elevated BP",
        ),
    ];
    for observation in observations {
        let snapshot = serde_json::to_string(&observation)?;
        info!(observation = %snapshot, "Health observation added");
        registry.add_health_observation(share(observation));
    }
    Ok(())
}

fn patient_usage(registry: &Registry) -> anyhow::Result<()> {
    let Some(handle) = registry.get_user("P100") else {
        info!("No patient found with ID P100");
        return Ok(());
    };
    let mut account = write(&handle);
    let patient = account
        .as_patient_mut()
        .context("user P100 is not a patient")?;

    let surgeries: MedicalHistory = json!({ "surgeries": ["Appendectomy"] })
        .as_object()
        .cloned()
        .unwrap_or_default();
    patient.record_medical_history(surgeries);
    patient.update_conditions(vec![
        "High Blood Pressure".to_string(),
        "Seasonal Allergies".to_string(),
    ]);
    patient.update_medications(vec!["Amlodipine".to_string(), "Cetirizine".to_string()]);

    let record = share(HealthObservation::new(
        "HD_P100_01",
        date(2025, 2, 1)?,
        69.0,
        "125/85",
        74.0,
        "Walking",
        6.0,
        "Slight improvement",
    ));
    patient.add_health_record(record.clone());
    registry.add_health_observation(record);

    let profile = serde_json::to_string(&patient.view_profile())?;
    let history = serde_json::to_string(patient.view_health_records())?;
    info!(%profile, "Patient profile");
    info!(
        %history,
        records = patient.health_records().len(),
        "Patient health records"
    );
    Ok(())
}

fn doctor_usage(registry: &Registry) -> anyhow::Result<()> {
    let Some(handle) = registry.get_user("D100") else {
        info!("No doctor found with ID D100");
        return Ok(());
    };
    let account = read(&handle);
    let doctor = account.as_doctor().context("user D100 is not a doctor")?;
    doctor.login();

    let records = doctor.view_patient_records("P100");
    info!(count = records.len(), "Doctor sees patient P100's records");

    if let Some(stored) = registry.get_health_observation("HD_P100_01") {
        let mut observation = write(&stored);
        observation.set_remarks("Doctor updated remarks: keep monitoring BP.");
        doctor.update_patient_record("P100", &observation);
    }

    let report = doctor.generate_report("P100");
    let snapshot = serde_json::to_string(&report)?;
    info!(report = %snapshot, "Doctor generated report");
    registry.add_report(share(report));
    doctor.logout();
    Ok(())
}

fn fitness_usage(registry: &Registry) -> anyhow::Result<()> {
    let Some(handle) = registry.get_user("F100") else {
        info!("No fitness enthusiast found with ID F100");
        return Ok(());
    };
    let mut account = write(&handle);
    let fitness = account
        .as_fitness_enthusiast_mut()
        .context("user F100 is not a fitness enthusiast")?;

    fitness.set_workout_preferences(json!({
        "favoriteExercises": ["Running", "Cycling"],
        "preferredTimes": ["Morning"]
    }));
    fitness.update_fitness_goals(json!({ "targetWeight": 64, "muscleGain": true }));

    let workout = HealthObservation::new(
        "HD_F100_01",
        Local::now().date_naive(),
        70.0,
        "120/80",
        75.0,
        "Running",
        7.0,
        "Felt good today",
    );
    fitness.record_workout_data(&workout);
    registry.add_health_observation(share(workout));
    Ok(())
}

fn reports_reminders_and_advice(registry: &Registry, config: &Config) -> anyhow::Result<()> {
    let monthly = ReportBuilder::new()
        .report_id("R100")
        .date_range("2025-01-01 ~ 2025-01-31")
        .summary("Initial monthly analysis for patient P100")
        .export_status(false)
        .build();
    let artifact = monthly.export_report(&config.export_format);
    info!(file = %artifact.file_name, "Report R100 export prepared");
    registry.add_report(share(monthly));

    let reminder_time = date(2025, 1, 12)?
        .and_hms_opt(9, 0, 0)
        .context("invalid reminder time")?;
    registry.add_reminder(share(Reminder::new(
        "REM100",
        "Medication",
        "Take pill at 9 AM",
        reminder_time,
    )));
    registry.add_advice(share(Advice::new(
        "ADV100",
        "Diet",
        "Reduce sodium intake",
    )));

    if let Some(advice) = registry.get_advice("ADV100") {
        info!("{}", read(&advice));
    }
    for report in registry.reports() {
        info!("{}", read(&report));
    }
    Ok(())
}
