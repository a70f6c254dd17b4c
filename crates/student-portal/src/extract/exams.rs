//! Semester-end exam results.

use super::table::{cell, cell_texts, is_code, number_or_zero, select_all};
use crate::types::ExamResult;
use scraper::Html;

/// Result recorded when the portal omits the result column.
const DEFAULT_RESULT: &str = "PASS";

pub fn extract_exams(html: &str) -> Vec<ExamResult> {
    let document = Html::parse_document(html);
    let mut results = Vec::new();

    for row in select_all(&document, "table tr") {
        let cells = cell_texts(&row);
        if cells.len() < 8 {
            continue;
        }
        let code = cell(&cells, 4);
        if !is_code(&code) {
            continue;
        }
        let result = cells
            .get(9)
            .cloned()
            .unwrap_or_else(|| DEFAULT_RESULT.to_string());
        results.push(ExamResult {
            sem: cell(&cells, 0),
            month: cell(&cells, 1),
            part: cell(&cells, 2),
            code,
            name: cell(&cells, 5),
            credit: number_or_zero(&cells[6]),
            point: number_or_zero(&cells[7]),
            grade: cell(&cells, 8),
            result,
        });
    }

    results
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_exam_rows() {
        let html = r#"
        <table>
          <tr><td>Sem</td><td>Month</td><td>Part</td><td>Sl</td><td>Code</td><td>Name</td><td>Credit</td><td>Point</td><td>Grade</td><td>Result</td></tr>
          <tr><td>1</td><td>NOV-2024</td><td>III</td><td>1</td><td>22CS101</td><td>Programming in C</td><td>4</td><td>9</td><td>A</td><td>PASS</td></tr>
          <tr><td>1</td><td>NOV-2024</td><td>III</td><td>2</td><td>22MA101</td><td>Calculus</td><td>4</td><td>0</td><td>F</td><td>RA</td></tr>
        </table>"#;
        let rows = extract_exams(html);
        assert_eq!(rows.len(), 2);
        assert_eq!(rows[0].code, "22CS101");
        assert_eq!(rows[0].month, "NOV-2024");
        assert_eq!(rows[0].credit, 4.0);
        assert_eq!(rows[0].point, 9.0);
        assert_eq!(rows[0].grade, "A");
        assert_eq!(rows[1].result, "RA");
    }

    #[test]
    fn test_fractional_points_and_credits() {
        let html = r#"
        <table>
          <tr><td>1</td><td>NOV-2024</td><td>III</td><td>1</td><td>22CS101</td><td>Programming in C</td><td>4</td><td>8.5</td><td>A</td><td>PASS</td></tr>
          <tr><td>1</td><td>NOV-2024</td><td>IV</td><td>2</td><td>22SK101</td><td>Soft Skills</td><td>1.5</td><td>9.5</td><td>O</td><td>PASS</td></tr>
        </table>"#;
        let rows = extract_exams(html);
        let points: Vec<f64> = rows.iter().map(|r| r.point).collect();
        let credits: Vec<f64> = rows.iter().map(|r| r.credit).collect();
        assert_eq!(points, vec![8.5, 9.5]);
        assert_eq!(credits, vec![4.0, 1.5]);
    }

    #[test]
    fn test_missing_result_column_defaults_to_pass() {
        let html = r#"
        <table>
          <tr><td>2</td><td>APR-2025</td><td>III</td><td>1</td><td>22CS201</td><td>OOP</td><td>3</td><td>8</td></tr>
        </table>"#;
        let rows = extract_exams(html);
        assert_eq!(rows.len(), 1);
        assert_eq!(rows[0].grade, "");
        assert_eq!(rows[0].result, "PASS");
    }
}
