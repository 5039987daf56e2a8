//! HTTP handlers binding the filter/sort engine to the dashboard

use crate::chat::{self, ChatError, ChatRequest};
use crate::core::error::{LeadgerError, QueryError, RecordError};
use crate::core::grade::sgpa_to_percentage;
use crate::core::record::parse_record_values;
use crate::core::{
    FilterQuery, Record, ResultStats, SeatFilter, SortDirection, SubjectAnalysis,
    category_counts, sort_rows, sort_rows_by, subject_analysis, unique_subjects,
};
use crate::report::subject_report_url;
use crate::server::host::DashboardHost;
use axum::Json;
use axum::extract::{Path, Query, State};
use indexmap::IndexMap;
use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::sync::Arc;

/// Shared handler state
pub type HostState = Arc<DashboardHost>;

/// A record as shown in the table
#[derive(Debug, Serialize)]
pub struct RecordView {
    #[serde(flatten)]
    pub record: Record,

    /// Percentage equivalent of the SGPA, for passing records
    #[serde(skip_serializing_if = "Option::is_none")]
    pub percentage: Option<f64>,
}

impl From<&Record> for RecordView {
    fn from(record: &Record) -> Self {
        let percentage = record
            .is_pass()
            .then(|| sgpa_to_percentage(record.sgpa))
            .filter(|p| *p > 0.0)
            .map(|p| (p * 100.0).round() / 100.0);

        Self {
            record: record.clone(),
            percentage,
        }
    }
}

/// Response for the records endpoint
#[derive(Debug, Serialize)]
pub struct RecordListResponse {
    pub records: Vec<RecordView>,
    pub visible_ids: Vec<String>,
    pub count: usize,
    pub total: usize,
    pub query: String,
    pub category: String,
}

/// Optional `seats=201001,201002:F` list narrowing the ledger
#[derive(Debug, Default, Deserialize)]
pub struct SeatParams {
    #[serde(default)]
    pub seats: Option<String>,
}

impl SeatParams {
    pub fn filter(&self) -> Option<SeatFilter> {
        self.seats
            .as_deref()
            .filter(|raw| !raw.trim().is_empty())
            .map(SeatFilter::parse_list)
    }
}

/// The stored ledger, narrowed to the requested seats
async fn ledger(host: &DashboardHost, seats: &SeatParams) -> Result<Vec<Record>, LeadgerError> {
    let records = host.record_store.list().await?;
    match seats.filter() {
        Some(filter) => Ok(filter.narrow(&records)?),
        None => Ok(records),
    }
}

/// GET /records?q=...&category=...&seats=...
pub async fn list_records(
    State(host): State<HostState>,
    Query(query): Query<FilterQuery>,
    Query(seats): Query<SeatParams>,
) -> Result<Json<RecordListResponse>, LeadgerError> {
    let records = ledger(&host, &seats).await?;
    let visible = query.apply(&records);

    tracing::debug!(
        q = %query.q,
        category = %query.category,
        visible = visible.len(),
        total = records.len(),
        "filtered records"
    );

    Ok(Json(RecordListResponse {
        visible_ids: visible.iter().map(|r| r.id.clone()).collect(),
        count: visible.len(),
        records: visible.into_iter().map(RecordView::from).collect(),
        total: records.len(),
        query: query.q,
        category: query.category.to_string(),
    }))
}

/// GET /records/{id}
pub async fn get_record(
    State(host): State<HostState>,
    Path(id): Path<String>,
) -> Result<Json<RecordView>, LeadgerError> {
    let record = host
        .record_store
        .get(&id)
        .await?
        .ok_or(RecordError::NotFound { id })?;

    Ok(Json(RecordView::from(&record)))
}

#[derive(Debug, Serialize)]
pub struct ReplaceRecordsResponse {
    pub total: usize,
}

/// PUT /records
///
/// Replaces the whole ledger with a JSON array of records or ledger rows.
pub async fn replace_records(
    State(host): State<HostState>,
    Json(rows): Json<Vec<Value>>,
) -> Result<Json<ReplaceRecordsResponse>, LeadgerError> {
    let records = parse_record_values(rows)?;
    let total = records.len();
    host.record_store.replace_all(records).await?;

    tracing::info!(total, "ledger replaced");
    Ok(Json(ReplaceRecordsResponse { total }))
}

/// Request body for sorting a table
#[derive(Debug, Deserialize)]
pub struct SortTableRequest {
    /// Body rows, without the header
    pub rows: Vec<Vec<String>>,

    pub column: usize,

    /// Explicit direction; derived from the current order when absent
    #[serde(default)]
    pub direction: Option<SortDirection>,
}

#[derive(Debug, Serialize)]
pub struct SortTableResponse {
    pub rows: Vec<Vec<String>>,
    pub direction: SortDirection,
}

/// POST /table/sort
pub async fn sort_table(
    Json(request): Json<SortTableRequest>,
) -> Result<Json<SortTableResponse>, LeadgerError> {
    let SortTableRequest {
        mut rows,
        column,
        direction,
    } = request;

    let width = rows.iter().map(Vec::len).max().unwrap_or(0);
    if !rows.is_empty() && column >= width {
        return Err(QueryError::InvalidColumn { column, width }.into());
    }

    let direction = match direction {
        Some(direction) => {
            sort_rows_by(&mut rows, column, direction);
            direction
        }
        None => sort_rows(&mut rows, column),
    };

    Ok(Json(SortTableResponse { rows, direction }))
}

/// Response for the stats endpoint
#[derive(Debug, Serialize)]
pub struct StatsResponse {
    #[serde(flatten)]
    pub stats: ResultStats,
    pub category_counts: IndexMap<String, usize>,
}

/// GET /stats?seats=...
pub async fn get_stats(
    State(host): State<HostState>,
    Query(seats): Query<SeatParams>,
) -> Result<Json<StatsResponse>, LeadgerError> {
    let records = ledger(&host, &seats).await?;

    Ok(Json(StatsResponse {
        stats: ResultStats::from_records(&records),
        category_counts: category_counts(&records),
    }))
}

#[derive(Debug, Serialize)]
pub struct ChatReply {
    pub answer: String,
    pub answer_html: String,
}

/// POST /chat
pub async fn post_chat(
    State(host): State<HostState>,
    Json(request): Json<ChatRequest>,
) -> Result<Json<ChatReply>, LeadgerError> {
    let transport = host.chat.as_ref().ok_or(ChatError::NotConfigured)?;
    let response = chat::ask(transport.as_ref(), &request.message).await?;

    Ok(Json(ChatReply {
        answer_html: response.answer_html(),
        answer: response.answer,
    }))
}

#[derive(Debug, Serialize)]
pub struct ReportLinkResponse {
    pub subject_code: String,
    pub url: String,
}

/// GET /subjects/{code}/report-link
pub async fn report_link(Path(code): Path<String>) -> Result<Json<ReportLinkResponse>, LeadgerError> {
    let url = subject_report_url(&code)?;

    Ok(Json(ReportLinkResponse {
        subject_code: code.trim().to_string(),
        url,
    }))
}

#[derive(Debug, Serialize)]
pub struct SubjectListResponse {
    pub subjects: Vec<String>,
}

/// GET /subjects
pub async fn list_subjects(
    State(host): State<HostState>,
) -> Result<Json<SubjectListResponse>, LeadgerError> {
    let records = host.record_store.list().await?;

    Ok(Json(SubjectListResponse {
        subjects: unique_subjects(&records),
    }))
}

/// GET /subjects/{code}/analysis?seats=...
///
/// Unlike the record list, a seat list matching nobody yields an empty
/// analysis rather than an error.
pub async fn subject_analysis_report(
    State(host): State<HostState>,
    Path(code): Path<String>,
    Query(seats): Query<SeatParams>,
) -> Result<Json<SubjectAnalysis>, LeadgerError> {
    let records = host.record_store.list().await?;
    let filter = seats.filter();

    Ok(Json(subject_analysis(&records, &code, filter.as_ref())?))
}
