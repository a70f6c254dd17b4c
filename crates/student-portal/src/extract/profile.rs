//! Profile page: label/value rows of `table.maintable`.

use super::table::{cell_texts, select_all};
use crate::types::Profile;
use scraper::Html;

pub fn extract_profile(html: &str) -> Profile {
    let document = Html::parse_document(html);
    let mut profile = Profile::default();

    for row in select_all(&document, "table.maintable tr") {
        let cells = cell_texts(&row);
        let (Some(label), Some(value)) = (cells.first(), cells.last()) else {
            continue;
        };
        let key = label.to_lowercase();
        let value = Some(value.clone());

        // First matching label wins; "father's name" must not land in `name`.
        if key.contains("name") && !key.contains("father") {
            profile.name = value;
        } else if key.contains("register") {
            profile.reg_no = value;
        } else if key.contains("course") {
            profile.course = value;
        } else if key.contains("semester") {
            profile.sem = value;
        } else if key.contains("institution") {
            profile.institution = value;
        } else if key.contains("father") {
            profile.father = value;
        } else if key.contains("contact") && key.contains("student") {
            profile.contact = value;
        } else if key.contains("residential") {
            profile.address = value;
        }
    }

    profile
}
