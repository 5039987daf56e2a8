//! # Leadger
//!
//! Result-dashboard engine for university exam records.
//!
//! ## Features
//!
//! - **Filtering**: free-text search combined with a category selector
//!   (status, gender + status, grade class, toppers)
//! - **Topper Ranking**: stable SGPA ranking scoped overall or by gender
//! - **Table Sorting**: numeric-aware column sort with direction toggle
//! - **Statistics**: pass/fail/ATKT counts, grade distribution, percentages
//! - **Subject Analysis**: per-subject pass counts, grade classes and podium
//! - **Seat Lists**: narrow the dashboard to a department's students
//! - **Dashboard Settings**: persisted theme and sidebar state
//! - **Chat Relay**: pluggable transport to an external assistant
//! - **REST Exposure**: Axum router with graceful shutdown
//!
//! ## Quick Start
//!
//! ```rust,ignore
//! use leadger::prelude::*;
//!
//! let records = vec![
//!     Record::new("S1", "Asha Patil").with_sgpa(9.1).with_status(ResultStatus::Pass),
//!     Record::new("S2", "Ravi Kale").with_sgpa(7.4).with_status(ResultStatus::Pass),
//! ];
//!
//! let query = FilterQuery::new("", CategorySelector::parse("top3_overall"));
//! let ids = query.visible_ids(&records);
//! assert_eq!(ids, vec!["S1", "S2"]);
//! ```

pub mod chat;
pub mod config;
pub mod core;
pub mod report;
pub mod server;
pub mod settings;
pub mod storage;

/// Re-exports of commonly used types and traits
pub mod prelude {
    // === Record Model ===
    pub use crate::core::{Gender, GradeClass, Record, ResultStatus, StudentRow, sgpa_to_percentage};

    // === Subject Analysis ===
    pub use crate::core::{
        SeatFilter, SubjectAnalysis, SubjectMark, SubjectStats, subject_analysis, unique_subjects,
    };

    // === Filter / Sort Engine ===
    pub use crate::core::{
        CategorySelector, FilterQuery, ResultStats, SortDirection, SortState, TopperScope,
        category_counts, compare_cells, filter_rows, sort_rows, sort_rows_by,
    };

    // === Errors ===
    pub use crate::core::error::{
        ConfigError, LeadgerError, LeadgerResult, QueryError, RecordError, SettingsError,
    };

    // === Storage ===
    pub use crate::core::RecordStore;
    pub use crate::storage::InMemoryRecordStore;

    // === Configuration & Settings ===
    pub use crate::config::LeadgerConfig;
    pub use crate::settings::{DashboardSettings, Theme};

    // === Chat ===
    pub use crate::chat::{ChatError, ChatRequest, ChatResponse, ChatTransport};

    #[cfg(feature = "http-chat")]
    pub use crate::chat::HttpChatTransport;

    // === Reports ===
    pub use crate::report::subject_report_url;

    // === Server ===
    pub use crate::server::{DashboardHost, ServerBuilder};

    // === Re-exports ===
    pub use anyhow::Result;
    pub use async_trait::async_trait;
}
