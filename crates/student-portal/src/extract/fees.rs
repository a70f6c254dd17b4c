//! Fee due and fee payment pages.

use super::table::{amount_or_zero, cell, cell_texts, is_amount, is_slash_date, select_all};
use crate::types::{FeeDue, FeeDueItem, FeePaid, FeePayment};
use scraper::Html;

pub fn extract_fee_due(html: &str) -> FeeDue {
    let document = Html::parse_document(html);
    let mut list = Vec::new();

    for row in select_all(&document, "table tr") {
        let cells = cell_texts(&row);
        if cells.len() < 4 {
            continue;
        }
        let fee_type = &cells[0];
        let amount_text = &cells[3];
        if fee_type.chars().count() <= 5 || !is_amount(amount_text) {
            continue;
        }
        list.push(FeeDueItem {
            head: cell(&cells, 1),
            due_date: cell(&cells, 2),
            amount: amount_or_zero(amount_text),
        });
    }

    let total_due = list.iter().map(|i| i.amount).sum();
    FeeDue { list, total_due }
}

pub fn extract_fee_paid(html: &str) -> FeePaid {
    let document = Html::parse_document(html);
    let mut history = Vec::new();

    for row in select_all(&document, "table tr") {
        let cells = cell_texts(&row);
        if cells.len() < 4 {
            continue;
        }
        let date = cell(&cells, 0);
        if !is_slash_date(&date) {
            continue;
        }
        history.push(FeePayment {
            date,
            mode: cell(&cells, 1),
            number: cell(&cells, 2),
            amount: amount_or_zero(&cells[3]),
        });
    }

    let total_paid = history.iter().map(|p| p.amount).sum();
    FeePaid {
        history,
        total_paid,
    }
}
