//! Tests for the comparator-driven table reorder

use leadger::prelude::*;

fn table(rows: &[&[&str]]) -> Vec<Vec<String>> {
    rows.iter()
        .map(|row| row.iter().map(|cell| cell.to_string()).collect())
        .collect()
}

fn column(rows: &[Vec<String>], index: usize) -> Vec<&str> {
    rows.iter().map(|row| row[index].as_str()).collect()
}

mod comparator_tests {
    use super::*;
    use std::cmp::Ordering;

    #[test]
    fn test_numbers_compare_numerically() {
        assert_eq!(compare_cells("2", "10"), Ordering::Less);
        assert_eq!(compare_cells(" 9.5 ", "9.45"), Ordering::Greater);
    }

    #[test]
    fn test_text_compares_case_insensitively() {
        assert_eq!(compare_cells("apple", "Banana"), Ordering::Less);
        assert_eq!(compare_cells("PASS", "pass"), Ordering::Equal);
    }

    #[test]
    fn test_mixed_cells_fall_back_to_text() {
        assert_eq!(compare_cells("-", "8.5"), "-".cmp("8.5"));
    }
}

mod explicit_direction_tests {
    use super::*;

    #[test]
    fn test_text_column_ascending() {
        let mut rows = table(&[&["b", "2"], &["a", "10"]]);
        sort_rows_by(&mut rows, 0, SortDirection::Asc);
        assert_eq!(rows, table(&[&["a", "10"], &["b", "2"]]));
    }

    #[test]
    fn test_numeric_column_ascending() {
        let mut rows = table(&[&["b", "2"], &["a", "10"]]);
        sort_rows_by(&mut rows, 1, SortDirection::Asc);
        assert_eq!(rows, table(&[&["b", "2"], &["a", "10"]]));
    }

    #[test]
    fn test_descending() {
        let mut rows = table(&[&["x", "7.1"], &["y", "9.2"], &["z", "8.0"]]);
        sort_rows_by(&mut rows, 1, SortDirection::Desc);
        assert_eq!(column(&rows, 1), vec!["9.2", "8.0", "7.1"]);
    }

    #[test]
    fn test_ties_keep_relative_order() {
        let mut rows = table(&[&["1", "pass"], &["2", "fail"], &["3", "pass"], &["4", "fail"]]);
        sort_rows_by(&mut rows, 1, SortDirection::Asc);
        assert_eq!(column(&rows, 0), vec!["2", "4", "1", "3"]);

        sort_rows_by(&mut rows, 1, SortDirection::Desc);
        assert_eq!(column(&rows, 0), vec!["1", "3", "2", "4"]);
    }

    #[test]
    fn test_short_rows_sort_as_empty() {
        let mut rows = vec![
            vec!["a".to_string(), "z".to_string()],
            vec!["b".to_string()],
        ];
        sort_rows_by(&mut rows, 1, SortDirection::Asc);
        assert_eq!(rows[0], vec!["b".to_string()]);
    }

    #[test]
    fn test_mixed_column_terminates_without_panicking() {
        let mut rows = table(&[
            &["10"],
            &["b"],
            &["9"],
            &["-"],
            &["a"],
            &["100"],
            &["AB"],
            &["2"],
        ]);
        sort_rows_by(&mut rows, 0, SortDirection::Asc);
        assert_eq!(rows.len(), 8);
    }

    #[test]
    fn test_empty_table() {
        let mut rows: Vec<Vec<String>> = Vec::new();
        assert_eq!(sort_rows(&mut rows, 0), SortDirection::Desc);
        assert!(rows.is_empty());
    }
}

mod toggling_tests {
    use super::*;

    #[test]
    fn test_unsorted_column_sorts_ascending() {
        let mut rows = table(&[&["b"], &["c"], &["a"]]);
        assert_eq!(sort_rows(&mut rows, 0), SortDirection::Asc);
        assert_eq!(column(&rows, 0), vec!["a", "b", "c"]);
    }

    #[test]
    fn test_ascending_column_flips_to_descending() {
        let mut rows = table(&[&["a"], &["b"], &["c"]]);
        assert_eq!(sort_rows(&mut rows, 0), SortDirection::Desc);
        assert_eq!(column(&rows, 0), vec!["c", "b", "a"]);

        assert_eq!(sort_rows(&mut rows, 0), SortDirection::Asc);
        assert_eq!(column(&rows, 0), vec!["a", "b", "c"]);
    }

    #[test]
    fn test_sort_state_flips_on_same_column() {
        let mut state = SortState::new();
        let mut rows = table(&[&["2", "b"], &["1", "a"], &["3", "c"]]);

        assert_eq!(state.sort(&mut rows, 0), SortDirection::Asc);
        assert_eq!(column(&rows, 0), vec!["1", "2", "3"]);

        assert_eq!(state.sort(&mut rows, 0), SortDirection::Desc);
        assert_eq!(column(&rows, 0), vec!["3", "2", "1"]);

        assert_eq!(state.sort(&mut rows, 1), SortDirection::Asc);
        assert_eq!(column(&rows, 1), vec!["a", "b", "c"]);
        assert_eq!(state.column, Some(1));
    }
}
