//! Row filter/rank engine
//!
//! Pure projections over a record collection: nothing here mutates a record
//! or keeps state between calls.

use crate::core::category::CategorySelector;
use crate::core::record::Record;
use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

/// Compute the visible rows for a search text and a category selector
///
/// Non-topper selectors keep the records that contain `search_text`
/// (case-insensitive) AND satisfy the category predicate, in input order.
///
/// Topper selectors ignore `search_text` entirely: they keep passing records
/// (within the gender scope), rank them by SGPA descending with ties in input
/// order, and truncate to the selector's limit.
pub fn filter_rows<'a>(
    records: &'a [Record],
    search_text: &str,
    selector: &CategorySelector,
) -> Vec<&'a Record> {
    if let CategorySelector::Topper { limit, .. } = selector {
        let mut ranked: Vec<&Record> = records.iter().filter(|r| selector.matches(r)).collect();
        // sort_by is stable
        ranked.sort_by(|a, b| b.sgpa.total_cmp(&a.sgpa));
        ranked.truncate(*limit);
        return ranked;
    }

    let needle = search_text.to_lowercase();
    records
        .iter()
        .filter(|r| needle.is_empty() || r.text.to_lowercase().contains(&needle))
        .filter(|r| selector.matches(r))
        .collect()
}

/// A search text plus a category selector
///
/// Deserializes from the dashboard's query string (`?q=...&category=...`).
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct FilterQuery {
    /// Free-text search
    #[serde(default, alias = "search")]
    pub q: String,

    #[serde(default)]
    pub category: CategorySelector,
}

impl FilterQuery {
    pub fn new(search_text: impl Into<String>, category: CategorySelector) -> Self {
        Self {
            q: search_text.into(),
            category,
        }
    }

    /// Run the engine
    pub fn apply<'a>(&self, records: &'a [Record]) -> Vec<&'a Record> {
        filter_rows(records, &self.q, &self.category)
    }

    /// Ids of the visible rows, in result order
    pub fn visible_ids(&self, records: &[Record]) -> Vec<String> {
        self.apply(records).into_iter().map(|r| r.id.clone()).collect()
    }
}

/// Result size of every fixed selector with an empty search, in display order
pub fn category_counts(records: &[Record]) -> IndexMap<String, usize> {
    CategorySelector::FIXED
        .iter()
        .map(|raw| {
            let selector = CategorySelector::parse(raw);
            (raw.to_string(), filter_rows(records, "", &selector).len())
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::record::{Gender, ResultStatus};

    fn passed(id: &str, sgpa: f64) -> Record {
        Record::new(id, format!("student {}", id))
            .with_status(ResultStatus::Pass)
            .with_sgpa(sgpa)
    }

    #[test]
    fn test_empty_records() {
        let result = filter_rows(&[], "anything", &CategorySelector::parse("top3_overall"));
        assert!(result.is_empty());
        assert!(filter_rows(&[], "", &CategorySelector::All).is_empty());
    }

    #[test]
    fn test_topper_ties_keep_input_order() {
        let records = vec![passed("a", 8.0), passed("b", 9.0), passed("c", 8.0)];
        let result = filter_rows(&records, "", &CategorySelector::parse("top3_overall"));
        let ids: Vec<&str> = result.iter().map(|r| r.id.as_str()).collect();
        assert_eq!(ids, vec!["b", "a", "c"]);
    }

    #[test]
    fn test_topper_ignores_search_text() {
        let records = vec![passed("a", 8.0), passed("b", 9.0)];
        let result = filter_rows(&records, "no such text", &CategorySelector::parse("top5_overall"));
        assert_eq!(result.len(), 2);
    }

    #[test]
    fn test_gender_scoped_toppers() {
        let records = vec![
            passed("m1", 9.0),
            passed("f1", 8.0).with_gender(Gender::Female),
            passed("f2", 8.5).with_gender(Gender::Female),
        ];
        let result = filter_rows(&records, "", &CategorySelector::parse("top5_female"));
        let ids: Vec<&str> = result.iter().map(|r| r.id.as_str()).collect();
        assert_eq!(ids, vec!["f2", "f1"]);
    }

    #[test]
    fn test_search_is_case_insensitive() {
        let records = vec![
            Record::new("1", "PATIL Asha"),
            Record::new("2", "Kulkarni Ravi"),
        ];
        let result = filter_rows(&records, "asha", &CategorySelector::All);
        assert_eq!(result.len(), 1);
        assert_eq!(result[0].id, "1");
    }

    #[test]
    fn test_unrecognized_selector_still_searches() {
        let records = vec![Record::new("1", "alpha"), Record::new("2", "beta")];
        let result = filter_rows(&records, "beta", &CategorySelector::parse("honours"));
        assert_eq!(result.len(), 1);
    }

    #[test]
    fn test_visible_ids() {
        let records = vec![passed("a", 8.0), Record::new("b", "student b")];
        let query = FilterQuery::new("student", CategorySelector::parse("pass"));
        assert_eq!(query.visible_ids(&records), vec!["a".to_string()]);
    }

    #[test]
    fn test_category_counts_cover_fixed_selectors_in_order() {
        let records = vec![passed("a", 8.0), passed("b", 6.0), Record::new("c", "c")];
        let counts = category_counts(&records);

        let keys: Vec<&str> = counts.keys().map(String::as_str).collect();
        assert_eq!(keys, CategorySelector::FIXED.to_vec());
        assert_eq!(counts["all"], 3);
        assert_eq!(counts["pass"], 2);
        assert_eq!(counts["fail"], 1);
        assert_eq!(counts["distinction"], 1);
        assert_eq!(counts["top3_overall"], 2);
    }
}
