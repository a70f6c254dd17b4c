//! Records extracted from the ERP report pages.
//!
//! Field names serialize in camelCase so the JSON matches what the
//! dashboard frontend reads out of its cache.

use serde::{Deserialize, Serialize};

/// Student profile fields from the profile page.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Profile {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub reg_no: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub course: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub sem: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub institution: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub father: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub contact: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub address: Option<String>,
}

/// Hour-wise attendance: headline counters plus one log row per day.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct HourlyAttendance {
    pub summary: HourlySummary,
    pub logs: Vec<HourlyLog>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct HourlySummary {
    pub working_days: u32,
    pub present: u32,
    pub absent: u32,
    pub percentage: f64,
}

/// One day of the hour-wise grid. `None` marks an empty period cell.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct HourlyLog {
    pub date: String,
    pub hours: Vec<Option<String>>,
}

/// A registered subject.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SubjectRow {
    pub sem: String,
    #[serde(rename = "type")]
    pub kind: String,
    pub code: String,
    pub name: String,
    pub credit: f64,
}

/// Subject-wise attendance counts.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AttendanceRow {
    pub code: String,
    pub name: String,
    pub total: u32,
    pub present: u32,
    pub absent: u32,
    pub pct: f64,
}

/// Continuous internal assessment marks for one subject.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct InternalMark {
    pub code: String,
    pub name: String,
    pub obtained: f64,
    pub max: f64,
}

/// One line of the semester-end exam results.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ExamResult {
    pub sem: String,
    pub month: String,
    pub part: String,
    pub code: String,
    pub name: String,
    pub credit: f64,
    pub point: f64,
    pub grade: String,
    pub result: String,
}

/// An outstanding fee head.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FeeDueItem {
    pub head: String,
    pub due_date: String,
    pub amount: f64,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FeeDue {
    pub list: Vec<FeeDueItem>,
    pub total_due: f64,
}

/// A fee payment receipt.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FeePayment {
    pub date: String,
    pub mode: String,
    pub number: String,
    pub amount: f64,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FeePaid {
    pub history: Vec<FeePayment>,
    pub total_paid: f64,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Fees {
    pub due: FeeDue,
    pub paid: FeePaid,
}

/// Everything scraped in one login, bundled for the dashboard.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Dashboard {
    pub profile: Profile,
    pub hourly: HourlyAttendance,
    pub subjects: Vec<SubjectRow>,
    pub attendance: Vec<AttendanceRow>,
    pub internals: Vec<InternalMark>,
    pub exams: Vec<ExamResult>,
    pub fees: Fees,
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_profile_skips_missing_fields() {
        let p = Profile {
            name: Some("Asha".into()),
            reg_no: Some("22CS001".into()),
            ..Default::default()
        };
        let v = serde_json::to_value(&p).unwrap();
        assert_eq!(v, json!({ "name": "Asha", "regNo": "22CS001" }));
    }

    #[test]
    fn test_dashboard_json_shape() {
        let v = serde_json::to_value(Dashboard::default()).unwrap();
        assert_eq!(v["hourly"]["summary"]["workingDays"], json!(0));
        assert_eq!(v["fees"]["due"]["totalDue"], json!(0.0));
        assert_eq!(v["fees"]["paid"]["history"], json!([]));
        assert!(v["subjects"].as_array().unwrap().is_empty());
    }

    #[test]
    fn test_subject_kind_serializes_as_type() {
        let s = SubjectRow {
            sem: "3".into(),
            kind: "Core".into(),
            code: "22CS301".into(),
            name: "Data Structures".into(),
            credit: 4.0,
        };
        let v = serde_json::to_value(&s).unwrap();
        assert_eq!(v["type"], json!("Core"));
        assert!(v.get("kind").is_none());
    }

    #[test]
    fn test_empty_hour_serializes_as_null() {
        let log = HourlyLog {
            date: "01-07-2025".into(),
            hours: vec![Some("P".into()), None],
        };
        let v = serde_json::to_value(&log).unwrap();
        assert_eq!(v["hours"], json!(["P", null]));
    }
}
