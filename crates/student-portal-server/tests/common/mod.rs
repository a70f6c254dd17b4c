//! Fake ERP portal for the API tests.

#![allow(dead_code)]

use student_portal::pages::{LOGIN_MARKER, LOGIN_PATH};
use student_portal::ReportPage;
use wiremock::matchers::{body_string_contains, header, method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

const ROOT: &str = "/lastudentportal";
const COOKIE: &str = "JSESSIONID=api-test";
const HOME: &str = "students/home.jsp";

pub const UID: &str = "22CS001";
pub const PASSWORD: &str = "s3cret";

fn fixture(page: ReportPage) -> &'static str {
    match page {
        ReportPage::Hourly => include_str!("../fixtures/hourly.html"),
        ReportPage::Profile => include_str!("../fixtures/profile.html"),
        ReportPage::Subjects => include_str!("../fixtures/subjects.html"),
        ReportPage::Attendance => include_str!("../fixtures/attendance.html"),
        ReportPage::Internals => include_str!("../fixtures/internals.html"),
        ReportPage::Exams => include_str!("../fixtures/exams.html"),
        ReportPage::FeeDue => include_str!("../fixtures/fee_due.html"),
        ReportPage::FeePaid => include_str!("../fixtures/fee_paid.html"),
    }
}

fn under_root(rel: &str) -> String {
    format!("{ROOT}/{rel}")
}

pub fn base_url(server: &MockServer) -> String {
    format!("{}{ROOT}", server.uri())
}

/// `UID`/`PASSWORD` get a session cookie and a redirect home; anything else
/// is served the login page again.
pub async fn mount_login(server: &MockServer) {
    Mock::given(method("POST"))
        .and(path(under_root(LOGIN_PATH)))
        .and(body_string_contains(format!("txtAN={UID}")))
        .and(body_string_contains(format!("txtSK={PASSWORD}")))
        .respond_with(
            ResponseTemplate::new(302)
                .insert_header("Set-Cookie", format!("{COOKIE}; Path=/").as_str())
                .insert_header("Location", under_root(HOME).as_str()),
        )
        .with_priority(1)
        .mount(server)
        .await;

    Mock::given(method("POST"))
        .and(path(under_root(LOGIN_PATH)))
        .respond_with(
            ResponseTemplate::new(200).set_body_string(format!("<form action=\"{LOGIN_MARKER}\">")),
        )
        .with_priority(5)
        .mount(server)
        .await;

    Mock::given(method("GET"))
        .and(path(under_root(HOME)))
        .respond_with(ResponseTemplate::new(200).set_body_string("<html>Home</html>"))
        .mount(server)
        .await;
}

/// Serve each report's fixture to cookie-bearing requests; pages in
/// `failing` answer 500.
pub async fn mount_reports(server: &MockServer, failing: &[ReportPage]) {
    for page in ReportPage::ALL {
        let response = if failing.contains(&page) {
            ResponseTemplate::new(500)
        } else {
            ResponseTemplate::new(200)
                .insert_header("Content-Type", "text/html")
                .set_body_string(fixture(page))
        };
        Mock::given(method("GET"))
            .and(path(under_root(page.path())))
            .and(header("cookie", COOKIE))
            .respond_with(response)
            .mount(server)
            .await;
    }
}

pub async fn healthy_portal() -> MockServer {
    let server = MockServer::start().await;
    mount_login(&server).await;
    mount_reports(&server, &[]).await;
    server
}
