//! Report pages on the ERP portal and where they live.

/// Default portal root; every page path hangs off this.
pub const DEFAULT_BASE_URL: &str = "http://202.160.160.58:8080/lastudentportal";

/// Login form target. A rejected login lands back on this page.
pub const LOGIN_PATH: &str = "students/loginManager/youLogin.jsp";

/// Marker in the final URL that means the portal bounced us back to login.
pub const LOGIN_MARKER: &str = "youLogin.jsp";

/// The eight report pages scraped after login.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ReportPage {
    Hourly,
    Profile,
    Subjects,
    Attendance,
    Internals,
    Exams,
    FeeDue,
    FeePaid,
}

impl ReportPage {
    pub const ALL: [ReportPage; 8] = [
        ReportPage::Hourly,
        ReportPage::Profile,
        ReportPage::Subjects,
        ReportPage::Attendance,
        ReportPage::Internals,
        ReportPage::Exams,
        ReportPage::FeeDue,
        ReportPage::FeePaid,
    ];

    /// Path below the portal base URL.
    pub fn path(self) -> &'static str {
        match self {
            ReportPage::Hourly => "students/report/studentHourWiseAttendance.jsp",
            ReportPage::Profile => "students/report/studentProfile.jsp",
            ReportPage::Subjects => "students/report/studentWiseSubjects.jsp",
            ReportPage::Attendance => "students/report/studentSubjectWiseAttendance.jsp",
            ReportPage::Internals => "students/report/studentInternalMarkDetails.jsp",
            ReportPage::Exams => "students/report/studentExamResultsDetails.jsp",
            ReportPage::FeeDue => "students/report/studentFeeDueDetails.jsp",
            ReportPage::FeePaid => "students/report/studentFinanceDetails.jsp",
        }
    }

    /// Stable name used in logs and failure lists.
    pub fn key(self) -> &'static str {
        match self {
            ReportPage::Hourly => "hourly",
            ReportPage::Profile => "profile",
            ReportPage::Subjects => "subjects",
            ReportPage::Attendance => "attendance",
            ReportPage::Internals => "internals",
            ReportPage::Exams => "exams",
            ReportPage::FeeDue => "fee_due",
            ReportPage::FeePaid => "fee_paid",
        }
    }

    /// Absolute URL of this page under `base`.
    pub fn url(self, base: &str) -> String {
        join_url(base, self.path())
    }
}

/// Join a base URL and a relative path with exactly one slash between them.
pub fn join_url(base: &str, path: &str) -> String {
    format!(
        "{}/{}",
        base.trim_end_matches('/'),
        path.trim_start_matches('/')
    )
}
