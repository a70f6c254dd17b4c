//! Print dashboard summaries from the cached snapshot.

use crate::cli::output::{self, heading, row};
use crate::config::resolve_snapshot_path;
use anyhow::{Context, Result};
use serde::Serialize;
use student_portal::summary::{
    attendance_overview, initials, internal_totals, semester_result, semester_subjects,
    split_contact, AttendanceOverview, InternalTotals, SemesterResult, SemesterSubjects,
};
use student_portal::Snapshot;

/// Semester used when neither `--sem` nor the profile names one.
const FALLBACK_SEM: &str = "1";

/// Everything `show` prints, in one serializable value for `--json`.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Report {
    pub uid: String,
    pub saved_at: String,
    pub name: Option<String>,
    pub initials: String,
    pub phone: Option<String>,
    pub email: Option<String>,
    pub attendance: AttendanceOverview,
    pub exams: SemesterResult,
    pub subjects: SemesterSubjects,
    pub internals: InternalTotals,
    pub fees_due: f64,
    pub fees_paid: f64,
}

impl Report {
    pub fn build(snapshot: &Snapshot, sem: Option<&str>) -> Self {
        let d = &snapshot.dashboard;
        let sem = sem
            .map(str::to_string)
            .or_else(|| d.profile.sem.clone())
            .unwrap_or_else(|| FALLBACK_SEM.to_string());
        let (phone, email) = split_contact(&d.profile);

        Self {
            uid: snapshot.uid.clone(),
            saved_at: snapshot.saved_at.to_rfc3339(),
            name: d.profile.name.clone(),
            initials: initials(&d.profile),
            phone,
            email,
            attendance: attendance_overview(&d.attendance),
            exams: semester_result(&d.exams, &sem),
            subjects: semester_subjects(&d.subjects, &sem),
            internals: internal_totals(&d.internals),
            fees_due: d.fees.due.total_due,
            fees_paid: d.fees.paid.total_paid,
        }
    }

    /// Human-readable rendering.
    pub fn render(&self) -> String {
        let mut lines = vec![
            format!(
                "{} ({})  [{}]",
                self.name.as_deref().unwrap_or("Unknown student"),
                self.uid,
                self.initials
            ),
            row("Saved", &self.saved_at),
        ];
        if let Some(phone) = &self.phone {
            lines.push(row("Phone", phone));
        }
        if let Some(email) = &self.email {
            lines.push(row("Email", email));
        }

        let a = &self.attendance;
        lines.push(heading("Attendance"));
        lines.push(row(
            "Overall",
            format!("{:.2}% ({}/{}) {}", a.pct, a.present, a.total, a.status.label()),
        ));
        for s in &a.subjects {
            let action = if s.classes_to_recover > 0 {
                format!("attend +{}", s.classes_to_recover)
            } else {
                "safe".to_string()
            };
            lines.push(row(
                &s.code,
                format!("{:.1}% {} ({action})", s.pct, s.status.label()),
            ));
        }

        let e = &self.exams;
        lines.push(heading(&format!("Semester {}", e.sem)));
        lines.push(row("Session", &e.session));
        lines.push(row("SGPA", format!("{:.2}", e.sgpa)));
        lines.push(row("Exam credits", e.total_credits));
        lines.push(row("Backlog", if e.has_backlog { "yes" } else { "no" }));
        lines.push(row(
            "Subjects",
            format!(
                "{} theory, {} lab, {} credits",
                self.subjects.theory, self.subjects.labs, self.subjects.total_credits
            ),
        ));
        lines.push(row(
            "Internals",
            format!("{} / {}", self.internals.obtained, self.internals.max),
        ));

        lines.push(heading("Fees"));
        lines.push(row("Due", format!("{:.2}", self.fees_due)));
        lines.push(row("Paid", format!("{:.2}", self.fees_paid)));

        lines.join("\n")
    }
}

pub fn run(snapshot: Option<&str>, sem: Option<&str>, json: bool) -> Result<()> {
    let path = resolve_snapshot_path(snapshot);
    let snapshot = Snapshot::load(&path)
        .with_context(|| format!("cannot read snapshot at {}; run 'scrape' first", path.display()))?;

    let report = Report::build(&snapshot, sem);
    if json {
        output::print_json(&report);
    } else {
        println!("{}", report.render());
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use student_portal::{AttendanceRow, Dashboard, Profile};

    fn snapshot() -> Snapshot {
        let dashboard = Dashboard {
            profile: Profile {
                name: Some("ASHA RAVI".into()),
                sem: Some("3".into()),
                contact: Some("9876543210 / asha@example.com".into()),
                ..Default::default()
            },
            attendance: vec![AttendanceRow {
                code: "22CS301".into(),
                name: "Data Structures".into(),
                total: 40,
                present: 25,
                absent: 15,
                pct: 62.5,
            }],
            ..Default::default()
        };
        Snapshot::new("22CS001", dashboard)
    }

    #[test]
    fn test_sem_defaults_to_profile() {
        let r = Report::build(&snapshot(), None);
        assert_eq!(r.exams.sem, "3");
        assert_eq!(Report::build(&snapshot(), Some("1")).exams.sem, "1");
    }

    #[test]
    fn test_render_mentions_recovery() {
        let text = Report::build(&snapshot(), None).render();
        assert!(text.starts_with("ASHA RAVI (22CS001)  [AR]"));
        assert!(text.contains("attend +20"));
        assert!(text.contains("asha@example.com"));
        assert!(text.contains("Critical"));
    }
}
