//! Table-walking and number-parsing helpers shared by the extractors.

use regex::Regex;
use scraper::{ElementRef, Html, Selector};
use std::sync::OnceLock;

/// Parse a CSS selector that is known at compile time.
pub(crate) fn selector(css: &str) -> Selector {
    Selector::parse(css).expect("static selector is valid")
}

/// All elements matching `css`, in document order.
pub(crate) fn select_all<'a>(document: &'a Html, css: &str) -> Vec<ElementRef<'a>> {
    let sel = selector(css);
    document.select(&sel).collect()
}

/// Concatenated descendant text of an element, trimmed.
pub(crate) fn element_text(el: &ElementRef) -> String {
    el.text().collect::<String>().trim().to_string()
}

/// Text of every `<td>` below a row, including cells of nested tables.
pub(crate) fn cell_texts(row: &ElementRef) -> Vec<String> {
    let td = selector("td");
    row.select(&td).map(|c| element_text(&c)).collect()
}

/// Cell at `idx`, or an empty string when the row is shorter.
pub(crate) fn cell(cells: &[String], idx: usize) -> String {
    cells.get(idx).cloned().unwrap_or_default()
}

/// Subject / paper codes: five or more uppercase letters or digits in a row.
pub(crate) fn is_code(text: &str) -> bool {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| Regex::new(r"[A-Z0-9]{5,}").expect("code regex is valid"))
        .is_match(text)
}

/// Money with two decimals, optionally with thousands separators.
pub(crate) fn is_amount(text: &str) -> bool {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| Regex::new(r"[\d,]+\.\d{2}").expect("amount regex is valid"))
        .is_match(text)
}

/// `dd/mm/yyyy` anywhere in the text.
pub(crate) fn is_slash_date(text: &str) -> bool {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| Regex::new(r"\d{2}/\d{2}/\d{4}").expect("date regex is valid"))
        .is_match(text)
}

/// Longest leading decimal number in `text`, ignoring leading whitespace.
///
/// `"87.5 %"` gives `Some(87.5)`, `"abc"` gives `None`.
pub fn leading_float(text: &str) -> Option<f64> {
    static RE: OnceLock<Regex> = OnceLock::new();
    let re = RE.get_or_init(|| {
        Regex::new(r"^[+-]?(?:\d+(?:\.\d*)?|\.\d+)(?:[eE][+-]?\d+)?")
            .expect("number regex is valid")
    });
    re.find(text.trim_start())
        .and_then(|m| m.as_str().parse::<f64>().ok())
}

/// Leading float, or 0 when nothing parses.
pub fn float_or_zero(text: &str) -> f64 {
    leading_float(text).unwrap_or(0.0)
}

/// Whole-cell count. Fractions truncate; anything else is 0.
pub fn count_or_zero(text: &str) -> u32 {
    let t = text.trim();
    if let Ok(n) = t.parse::<u32>() {
        return n;
    }
    match t.parse::<f64>() {
        Ok(f) if f.is_finite() && f > 0.0 => f as u32,
        _ => 0,
    }
}

/// Whole-cell decimal number, or 0 when the cell is not a finite number.
///
/// Unlike [`leading_float`], trailing text is not tolerated: `"4 credits"` is 0.
pub fn number_or_zero(text: &str) -> f64 {
    match text.trim().parse::<f64>() {
        Ok(n) if n.is_finite() => n,
        _ => 0.0,
    }
}

/// Money amount with thousands separators removed.
pub fn amount_or_zero(text: &str) -> f64 {
    float_or_zero(&text.replace(',', ""))
}
