//! Student-wise subjects page.

use super::table::{cell, cell_texts, number_or_zero, select_all};
use crate::types::SubjectRow;
use scraper::Html;

/// Rows before this index are the two header rows of the subjects table.
const HEADER_ROWS: usize = 2;

pub fn extract_subjects(html: &str) -> Vec<SubjectRow> {
    let document = Html::parse_document(html);

    select_all(&document, "#tblStudentWiseSubjects tr")
        .iter()
        .skip(HEADER_ROWS)
        .map(cell_texts)
        .filter(|cells| cells.len() >= 5)
        .map(|cells| SubjectRow {
            sem: cell(&cells, 0),
            kind: cell(&cells, 1),
            code: cell(&cells, 2),
            name: cell(&cells, 3),
            credit: number_or_zero(&cells[4]),
        })
        .collect()
}
