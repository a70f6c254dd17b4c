//! Internal mark details. The page has no stable table id, so every row on
//! the page is considered and subject rows are picked out by their code.

use super::table::{cell, cell_texts, float_or_zero, is_code, select_all};
use crate::types::InternalMark;
use scraper::Html;

pub fn extract_internals(html: &str) -> Vec<InternalMark> {
    let document = Html::parse_document(html);
    let mut marks = Vec::new();

    for row in select_all(&document, "table tr") {
        let cells = cell_texts(&row);
        if cells.len() < 4 {
            continue;
        }
        let code = cell(&cells, 0);
        if !is_code(&code) || code.contains("Subject") {
            continue;
        }
        marks.push(InternalMark {
            code,
            name: cell(&cells, 1),
            obtained: float_or_zero(&cells[2]),
            max: float_or_zero(&cells[3]),
        });
    }

    marks
}
