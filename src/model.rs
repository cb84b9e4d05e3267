// src/model.rs
//
// The one record type served by the certificates API.

use serde::Deserialize;

use crate::dates::format_date;

/// A student certificate as served by the API (camelCase JSON).
///
/// Dates stay as the API's ISO strings; they are only formatted for display
/// and export (see [`crate::dates`]).
#[derive(Clone, Debug, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Certificate {
    pub id: i64,
    pub first_name: String,
    pub last_name: String,
    pub from_date: String,
    /// Validity end. The API spells it `tomDate`.
    pub tom_date: String,
    pub created_at: String,
}

impl Certificate {
    /// "First Last", the string search matches against.
    pub fn full_name(&self) -> String {
        format!("{} {}", self.first_name, self.last_name)
    }

    /// Case-insensitive substring match on the full name.
    /// `needle` must already be lowercased.
    pub fn matches_lower(&self, needle: &str) -> bool {
        needle.is_empty() || self.full_name().to_lowercase().contains(needle)
    }

    /// One display/export row, dates formatted:
    /// ID, First Name, Last Name, From Date, To Date, Created At
    pub fn to_row(&self) -> Vec<String> {
        row![
            self.id.to_string(),
            &self.first_name,
            &self.last_name,
            format_date(&self.from_date),
            format_date(&self.tom_date),
            format_date(&self.created_at),
        ]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ann() -> Certificate {
        Certificate {
            id: 1,
            first_name: s!("Ann"),
            last_name: s!("Lee"),
            from_date: s!("2024-01-05"),
            tom_date: s!("2024-06-01"),
            created_at: s!("2024-01-01"),
        }
    }

    #[test]
    fn decodes_api_field_names() {
        let json = r#"{"id":1,"firstName":"Ann","lastName":"Lee","fromDate":"2024-01-05","tomDate":"2024-06-01","createdAt":"2024-01-01"}"#;
        let c: Certificate = serde_json::from_str(json).unwrap();
        assert_eq!(c, ann());
    }

    #[test]
    fn name_match_spans_the_space() {
        let c = ann();
        assert!(c.matches_lower("n l"));
        assert!(c.matches_lower(""));
        assert!(!c.matches_lower("annlee"));
    }

    #[test]
    fn row_formats_dates() {
        assert_eq!(
            ann().to_row(),
            vec!["1", "Ann", "Lee", "Jan 5, 2024", "Jun 1, 2024", "Jan 1, 2024"]
        );
    }
}
