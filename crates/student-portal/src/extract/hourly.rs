//! Hour-wise attendance page: hidden-input counters and the day grid.

use super::table::{cell_texts, count_or_zero, float_or_zero, select_all, selector};
use crate::types::{HourlyAttendance, HourlyLog, HourlySummary};
use scraper::Html;

pub fn extract_hourly(html: &str) -> HourlyAttendance {
    let document = Html::parse_document(html);

    let summary = HourlySummary {
        working_days: count_or_zero(&hidden_value(&document, "#hdnWorkingDays")),
        present: count_or_zero(&hidden_value(&document, "#hdnHrsPresent")),
        absent: count_or_zero(&hidden_value(&document, "#hdnHrsAbsent")),
        percentage: float_or_zero(&hidden_value(&document, "#hdnPresentPercentage")),
    };

    let mut logs = Vec::new();
    for row in select_all(&document, r#"table[name="table1"] tr"#) {
        let cells = cell_texts(&row);
        let Some((date, periods)) = cells.split_first() else {
            continue;
        };
        // Day rows start with a dd-mm-yyyy date; headers and totals don't.
        if date.is_empty() || !date.contains('-') {
            continue;
        }
        let hours = periods
            .iter()
            .map(|h| if h.is_empty() { None } else { Some(h.clone()) })
            .collect();
        logs.push(HourlyLog {
            date: date.clone(),
            hours,
        });
    }

    HourlyAttendance { summary, logs }
}

fn hidden_value(document: &Html, css: &str) -> String {
    let sel = selector(css);
    document
        .select(&sel)
        .next()
        .and_then(|el| el.value().attr("value"))
        .unwrap_or("")
        .to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    const PAGE: &str = r#"
    <html><body>
      <input type="hidden" id="hdnWorkingDays" value="62">
      <input type="hidden" id="hdnHrsPresent" value="280">
      <input type="hidden" id="hdnHrsAbsent" value="30">
      <input type="hidden" id="hdnPresentPercentage" value="90.32">
      <table name="table1">
        <tr><td>Date</td><td>1</td><td>2</td><td>3</td></tr>
        <tr><td>01-07-2025</td><td>P</td><td></td><td>A</td></tr>
        <tr><td> 02-07-2025 </td><td>P</td><td>P</td><td>P</td></tr>
        <tr><td>Total</td><td>5</td><td>4</td><td>4</td></tr>
      </table>
    </body></html>"#;

    #[test]
    fn test_summary_from_hidden_inputs() {
        let h = extract_hourly(PAGE);
        assert_eq!(h.summary.working_days, 62);
        assert_eq!(h.summary.present, 280);
        assert_eq!(h.summary.absent, 30);
        assert!((h.summary.percentage - 90.32).abs() < 1e-9);
    }

    #[test]
    fn test_day_rows_only() {
        let h = extract_hourly(PAGE);
        assert_eq!(h.logs.len(), 2);
        assert_eq!(h.logs[0].date, "01-07-2025");
        assert_eq!(
            h.logs[0].hours,
            vec![Some("P".to_string()), None, Some("A".to_string())]
        );
        assert_eq!(h.logs[1].date, "02-07-2025");
    }

    #[test]
    fn test_missing_inputs_default_to_zero() {
        let h = extract_hourly("<html><body><p>session expired</p></body></html>");
        assert_eq!(h, HourlyAttendance::default());
    }
}
