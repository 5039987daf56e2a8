//! Core module containing the record model and the filter/sort engine

pub mod category;
pub mod error;
pub mod filter;
pub mod grade;
pub mod record;
pub mod seat;
pub mod service;
pub mod sort;
pub mod stats;
pub mod subject;

pub use category::{CategorySelector, TopperScope};
pub use filter::{FilterQuery, category_counts, filter_rows};
pub use grade::{GradeClass, sgpa_to_percentage};
pub use record::{Gender, Record, ResultStatus, StudentRow};
pub use seat::SeatFilter;
pub use service::RecordStore;
pub use sort::{SortDirection, SortState, compare_cells, sort_rows, sort_rows_by};
pub use stats::ResultStats;
pub use subject::{SubjectAnalysis, SubjectMark, SubjectStats, subject_analysis, unique_subjects};
