/// Report ID stamped on every doctor-generated placeholder report
pub const PLACEHOLDER_REPORT_ID: &str = "R001";

/// Date range of the doctor-generated placeholder report
pub const PLACEHOLDER_REPORT_DATE_RANGE: &str = "2025-01-01 ~ 2025-01-31";

/// Summary of the doctor-generated placeholder report
pub const PLACEHOLDER_REPORT_SUMMARY: &str = "Initial Summary";

/// Text returned by the observation trend analysis stub
pub const PLACEHOLDER_TREND_ANALYSIS: &str = "No real analysis - placeholder.";

/// Fixed recommendation appended to generated advice
pub const DEFAULT_ADVICE_RECOMMENDATION: &str = "Keep a balanced diet and regular exercise.";

/// Factory tag for doctors
pub const USER_TYPE_DOCTOR: &str = "doctor";

/// Factory tag for patients
pub const USER_TYPE_PATIENT: &str = "patient";

/// Factory tag for fitness enthusiasts
pub const USER_TYPE_FITNESS: &str = "fitness";
