//! Extractors: one routine per report page, turning loosely structured
//! HTML tables into typed records.
//!
//! Extractors never fail. A page that is empty, malformed, or was not
//! fetched at all yields empty records, so one broken report cannot take
//! the whole dashboard down.

pub mod attendance;
pub mod exams;
pub mod fees;
pub mod hourly;
pub mod internals;
pub mod profile;
pub mod subjects;
pub mod table;

pub use attendance::extract_attendance;
pub use exams::extract_exams;
pub use fees::{extract_fee_due, extract_fee_paid};
pub use hourly::extract_hourly;
pub use internals::extract_internals;
pub use profile::extract_profile;
pub use subjects::extract_subjects;

use crate::pages::ReportPage;
use crate::types::{Dashboard, Fees};
use std::collections::HashMap;

/// Run every extractor over the fetched page bodies.
pub fn extract_dashboard(bodies: &HashMap<ReportPage, String>) -> Dashboard {
    let body = |page: ReportPage| bodies.get(&page).map(String::as_str).unwrap_or("");

    Dashboard {
        profile: extract_profile(body(ReportPage::Profile)),
        hourly: extract_hourly(body(ReportPage::Hourly)),
        subjects: extract_subjects(body(ReportPage::Subjects)),
        attendance: extract_attendance(body(ReportPage::Attendance)),
        internals: extract_internals(body(ReportPage::Internals)),
        exams: extract_exams(body(ReportPage::Exams)),
        fees: Fees {
            due: extract_fee_due(body(ReportPage::FeeDue)),
            paid: extract_fee_paid(body(ReportPage::FeePaid)),
        },
    }
}
