//! Subject-wise attendance page.

use super::table::{cell, cell_texts, count_or_zero, float_or_zero, select_all};
use crate::types::AttendanceRow;
use scraper::Html;

pub fn extract_attendance(html: &str) -> Vec<AttendanceRow> {
    let document = Html::parse_document(html);
    let mut rows = Vec::new();

    for row in select_all(&document, "#tblSubjectWiseAttendance tr") {
        let cells = cell_texts(&row);
        if cells.len() != 6 {
            continue;
        }
        let code = cell(&cells, 0);
        if code.chars().count() <= 3 || code == "Subject Code" {
            continue;
        }
        rows.push(AttendanceRow {
            code,
            name: cell(&cells, 1),
            total: count_or_zero(&cells[2]),
            present: count_or_zero(&cells[3]),
            absent: count_or_zero(&cells[4]),
            pct: float_or_zero(&cells[5].replace('%', "")),
        });
    }

    rows
}
