//! Subject report links

use crate::core::error::QueryError;

/// Route prefix of the per-subject report page
pub const SUBJECT_REPORT_PREFIX: &str = "/generate_subject_report";

/// Build the report URL for a subject code
///
/// The code is trimmed and percent-encoded as a single path segment.
///
/// ```
/// use leadger::report::subject_report_url;
///
/// assert_eq!(
///     subject_report_url("CS-301").unwrap(),
///     "/generate_subject_report/CS-301"
/// );
/// ```
pub fn subject_report_url(subject_code: &str) -> Result<String, QueryError> {
    let code = subject_code.trim();
    if code.is_empty() {
        return Err(QueryError::EmptySubjectCode);
    }
    Ok(format!(
        "{}/{}",
        SUBJECT_REPORT_PREFIX,
        urlencoding::encode(code)
    ))
}
