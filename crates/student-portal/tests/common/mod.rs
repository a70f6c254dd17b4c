//! Fake ERP portal on a wiremock server.

#![allow(dead_code)]

use wiremock::matchers::{body_string_contains, header, method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

pub const PORTAL_ROOT: &str = "/lastudentportal";
pub const UID: &str = "22CS001";
pub const PASSWORD: &str = "s3cret";
pub const SESSION_COOKIE: &str = "JSESSIONID=abc123";

pub const REPORTS: [(&str, &str); 8] = [
    (
        "students/report/studentHourWiseAttendance.jsp",
        include_str!("../fixtures/hourly.html"),
    ),
    (
        "students/report/studentProfile.jsp",
        include_str!("../fixtures/profile.html"),
    ),
    (
        "students/report/studentWiseSubjects.jsp",
        include_str!("../fixtures/subjects.html"),
    ),
    (
        "students/report/studentSubjectWiseAttendance.jsp",
        include_str!("../fixtures/attendance.html"),
    ),
    (
        "students/report/studentInternalMarkDetails.jsp",
        include_str!("../fixtures/internals.html"),
    ),
    (
        "students/report/studentExamResultsDetails.jsp",
        include_str!("../fixtures/exams.html"),
    ),
    (
        "students/report/studentFeeDueDetails.jsp",
        include_str!("../fixtures/fee_due.html"),
    ),
    (
        "students/report/studentFinanceDetails.jsp",
        include_str!("../fixtures/fee_paid.html"),
    ),
];

pub fn portal_path(rel: &str) -> String {
    format!("{PORTAL_ROOT}/{rel}")
}

/// Base URL the client should be pointed at.
pub fn base_url(server: &MockServer) -> String {
    format!("{}{PORTAL_ROOT}", server.uri())
}

/// Accept `UID`/`PASSWORD`: set the session cookie and redirect to the home
/// page. Any other credentials stay on the login page.
pub async fn mount_login(server: &MockServer) {
    Mock::given(method("POST"))
        .and(path(portal_path("students/loginManager/youLogin.jsp")))
        .and(body_string_contains(format!("txtAN={UID}")))
        .and(body_string_contains(format!("txtSK={PASSWORD}")))
        .and(body_string_contains("login=iamalsouser"))
        .respond_with(
            ResponseTemplate::new(302)
                .insert_header("Set-Cookie", format!("{SESSION_COOKIE}; Path=/").as_str())
                .insert_header("Location", portal_path("students/home.jsp").as_str()),
        )
        .with_priority(1)
        .mount(server)
        .await;

    Mock::given(method("POST"))
        .and(path(portal_path("students/loginManager/youLogin.jsp")))
        .respond_with(ResponseTemplate::new(200).set_body_string("<html>Login</html>"))
        .with_priority(5)
        .mount(server)
        .await;

    Mock::given(method("GET"))
        .and(path(portal_path("students/home.jsp")))
        .respond_with(ResponseTemplate::new(200).set_body_string("<html>Welcome</html>"))
        .mount(server)
        .await;
}

/// Serve every report fixture, but only to requests carrying the session
/// cookie. Paths listed in `broken` answer 500 instead.
pub async fn mount_reports(server: &MockServer, broken: &[&str]) {
    for (rel, body) in REPORTS {
        let response = if broken.contains(&rel) {
            ResponseTemplate::new(500)
        } else {
            ResponseTemplate::new(200)
                .insert_header("Content-Type", "text/html")
                .set_body_string(body)
        };
        Mock::given(method("GET"))
            .and(path(portal_path(rel)))
            .and(header("cookie", SESSION_COOKIE))
            .respond_with(response)
            .mount(server)
            .await;
    }
}

/// A portal that accepts the test credentials and serves every report.
pub async fn healthy_portal() -> MockServer {
    let server = MockServer::start().await;
    mount_login(&server).await;
    mount_reports(&server, &[]).await;
    server
}
