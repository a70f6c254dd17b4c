//! Derived figures shown on the dashboard: overall attendance, recovery
//! targets, SGPA, credit counts.

use crate::types::{AttendanceRow, ExamResult, InternalMark, Profile, SubjectRow};
use serde::Serialize;

/// Minimum attendance percentage to sit the semester exams.
pub const REQUIRED_PCT: f64 = 75.0;

/// Below the requirement but still recoverable without condonation.
pub const WARNING_PCT: f64 = 65.0;

/// Shown when there is no name to take initials from.
const FALLBACK_INITIALS: &str = "LA";

/// Lab subjects carry this tag in their name.
const LAB_TAG: &str = "[PR]";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum AttendanceStatus {
    Safe,
    Warning,
    Critical,
}

impl AttendanceStatus {
    pub fn from_pct(pct: f64) -> Self {
        if pct >= REQUIRED_PCT {
            AttendanceStatus::Safe
        } else if pct >= WARNING_PCT {
            AttendanceStatus::Warning
        } else {
            AttendanceStatus::Critical
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            AttendanceStatus::Safe => "Safe",
            AttendanceStatus::Warning => "Warning",
            AttendanceStatus::Critical => "Critical",
        }
    }
}

/// Consecutive classes that must be attended to climb back to 75 %.
///
/// Each attended class adds one to both present and total, so the
/// shortfall `0.75·total − present` shrinks by 0.25 per class.
pub fn classes_to_recover(total: u32, present: u32) -> u32 {
    let needed = ((REQUIRED_PCT / 100.0 * total as f64 - present as f64) / 0.25).ceil();
    if needed > 0.0 {
        needed as u32
    } else {
        0
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SubjectAttendance {
    pub code: String,
    pub name: String,
    pub pct: f64,
    pub status: AttendanceStatus,
    pub classes_to_recover: u32,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct AttendanceOverview {
    pub total: u64,
    pub present: u64,
    pub absent: u64,
    /// Overall percentage rounded to two decimals; 0 when nothing was held.
    pub pct: f64,
    pub status: AttendanceStatus,
    pub subjects: Vec<SubjectAttendance>,
}

pub fn attendance_overview(rows: &[AttendanceRow]) -> AttendanceOverview {
    // Row counts are u32; totals are u64.
    let total: u64 = rows.iter().map(|r| u64::from(r.total)).sum();
    let present: u64 = rows.iter().map(|r| u64::from(r.present)).sum();
    let absent: u64 = rows.iter().map(|r| u64::from(r.absent)).sum();
    let pct = if total > 0 {
        round2(present as f64 / total as f64 * 100.0)
    } else {
        0.0
    };

    let subjects = rows
        .iter()
        .map(|r| SubjectAttendance {
            code: r.code.clone(),
            name: r.name.clone(),
            pct: r.pct,
            status: AttendanceStatus::from_pct(r.pct),
            classes_to_recover: classes_to_recover(r.total, r.present),
        })
        .collect();

    AttendanceOverview {
        total,
        present,
        absent,
        pct,
        status: AttendanceStatus::from_pct(pct),
        subjects,
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SemesterResult {
    pub sem: String,
    /// Exam session (e.g. `NOV-2024`) of the first row, or `N/A`.
    pub session: String,
    pub total_credits: f64,
    /// Credit-weighted grade point over graded papers only.
    pub sgpa: f64,
    pub has_backlog: bool,
    pub papers: usize,
}

pub fn semester_result(exams: &[ExamResult], sem: &str) -> SemesterResult {
    let rows: Vec<&ExamResult> = exams.iter().filter(|e| e.sem == sem).collect();

    let session = rows
        .first()
        .map(|e| e.month.clone())
        .unwrap_or_else(|| "N/A".to_string());
    let total_credits = rows.iter().map(|e| e.credit).sum();

    let graded: Vec<&&ExamResult> = rows.iter().filter(|e| e.point > 0.0).collect();
    let points: f64 = graded.iter().map(|e| e.point * e.credit).sum();
    let graded_credits: f64 = graded.iter().map(|e| e.credit).sum();
    let sgpa = if graded_credits > 0.0 {
        round2(points / graded_credits)
    } else {
        0.0
    };

    SemesterResult {
        sem: sem.to_string(),
        session,
        total_credits,
        sgpa,
        has_backlog: rows.iter().any(|e| e.result != "PASS"),
        papers: rows.len(),
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct InternalTotals {
    pub obtained: f64,
    pub max: f64,
}

pub fn internal_totals(marks: &[InternalMark]) -> InternalTotals {
    InternalTotals {
        obtained: marks.iter().map(|m| m.obtained).sum(),
        max: marks.iter().map(|m| m.max).sum(),
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SemesterSubjects {
    pub sem: String,
    pub total_credits: f64,
    pub labs: usize,
    pub theory: usize,
}

pub fn semester_subjects(subjects: &[SubjectRow], sem: &str) -> SemesterSubjects {
    let rows: Vec<&SubjectRow> = subjects.iter().filter(|s| s.sem == sem).collect();
    let labs = rows.iter().filter(|s| s.name.contains(LAB_TAG)).count();
    SemesterSubjects {
        sem: sem.to_string(),
        total_credits: rows.iter().map(|s| s.credit).sum(),
        labs,
        theory: rows.len() - labs,
    }
}

/// Split the profile's combined `phone / email` contact field.
pub fn split_contact(profile: &Profile) -> (Option<String>, Option<String>) {
    let Some(contact) = profile.contact.as_deref() else {
        return (None, None);
    };
    let mut parts = contact.splitn(2, '/');
    let phone = parts
        .next()
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .map(String::from);
    let email = parts
        .next()
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .map(String::from);
    (phone, email)
}

/// Uppercase initials of the last two words of the student's name.
pub fn initials(profile: &Profile) -> String {
    let words: Vec<&str> = profile
        .name
        .as_deref()
        .unwrap_or("")
        .split_whitespace()
        .collect();
    if words.is_empty() {
        return FALLBACK_INITIALS.to_string();
    }
    words[words.len().saturating_sub(2)..]
        .iter()
        .filter_map(|w| w.chars().next())
        .flat_map(char::to_uppercase)
        .collect()
}

fn round2(v: f64) -> f64 {
    (v * 100.0).round() / 100.0
}
