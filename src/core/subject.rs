//! Per-subject result analysis
//!
//! Projects the ledger onto one subject code: every student's marks in that
//! subject, pass/fail counts per gender, grade-letter classes and the best
//! three passing scores.

use crate::core::error::QueryError;
use crate::core::grade::GradeClass;
use crate::core::record::{Gender, Record, ResultStatus};
use crate::core::seat::SeatFilter;
use crate::core::stats::{GradeCounts, percentage};
use serde::{Deserialize, Deserializer, Serialize};
use serde_json::Value;
use std::collections::BTreeSet;

/// Grade letters of a subject that was not cleared
pub const FAILING_GRADES: [&str; 5] = ["F", "FFF", "FAIL", "AB", "---"];

/// Size of the per-subject podium
pub const SUBJECT_PODIUM: usize = 3;

fn dash() -> String {
    "-".to_string()
}

fn zero() -> String {
    "0".to_string()
}

/// Mark cells arrive as numbers or strings; null is `-`
fn deserialize_cell<'de, D: Deserializer<'de>>(deserializer: D) -> Result<String, D::Error> {
    let value = Value::deserialize(deserializer)?;
    Ok(match value {
        Value::String(s) => s.trim().to_string(),
        Value::Null => dash(),
        other => other.to_string(),
    })
}

/// Marks of one subject on a ledger row
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SubjectMark {
    #[serde(default)]
    pub code: String,

    #[serde(default = "dash", alias = "int_m", deserialize_with = "deserialize_cell")]
    pub internal: String,

    #[serde(default = "dash", alias = "ext_m", deserialize_with = "deserialize_cell")]
    pub external: String,

    #[serde(default = "zero", deserialize_with = "deserialize_cell")]
    pub total: String,

    #[serde(default = "dash", alias = "grd", deserialize_with = "deserialize_cell")]
    pub grade: String,
}

impl SubjectMark {
    pub fn new(code: impl Into<String>, total: impl Into<String>, grade: impl Into<String>) -> Self {
        Self {
            code: code.into(),
            internal: dash(),
            external: dash(),
            total: total.into(),
            grade: grade.into(),
        }
    }

    pub fn with_split(mut self, internal: impl Into<String>, external: impl Into<String>) -> Self {
        self.internal = internal.into();
        self.external = external.into();
        self
    }

    /// Uppercased grade letter
    pub fn grade_letter(&self) -> String {
        self.grade.trim().to_uppercase()
    }

    /// Anything but a failing or absent grade clears the subject
    pub fn is_pass(&self) -> bool {
        !FAILING_GRADES.contains(&self.grade_letter().as_str())
    }

    pub fn grade_class(&self) -> Option<GradeClass> {
        self.is_pass()
            .then(|| GradeClass::from_grade_letter(&self.grade))
    }

    /// Digits of the total read as a number (`"078*"` is 78); `0` when none
    pub fn marks(&self) -> u64 {
        self.total
            .chars()
            .filter(char::is_ascii_digit)
            .collect::<String>()
            .parse()
            .unwrap_or(0)
    }
}

/// One student's line in a subject analysis
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SubjectResult {
    pub seat_no: String,
    pub name: String,
    pub gender: Gender,
    pub internal: String,
    pub external: String,
    pub total: String,
    pub grade: String,
    /// `pass` or `fail`
    pub status: ResultStatus,
    /// Grade class tag, or `fail`
    pub grade_class: String,
    pub marks: u64,
}

impl SubjectResult {
    fn new(record: &Record, mark: &SubjectMark, gender: Gender) -> Self {
        let (status, grade_class) = match mark.grade_class() {
            Some(class) => (ResultStatus::Pass, class.as_str().to_string()),
            None => (ResultStatus::Fail, "fail".to_string()),
        };

        Self {
            seat_no: record.id.clone(),
            name: record.name.clone(),
            gender,
            internal: mark.internal.clone(),
            external: mark.external.clone(),
            total: mark.total.clone(),
            grade: mark.grade_letter(),
            status,
            grade_class,
            marks: mark.marks(),
        }
    }

    pub fn is_pass(&self) -> bool {
        self.status == ResultStatus::Pass
    }
}

/// Summary counts of a subject
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize)]
pub struct SubjectStats {
    pub total: usize,
    pub pass: usize,
    pub fail: usize,
    pub male: usize,
    pub female: usize,
    pub male_pass: usize,
    pub male_fail: usize,
    pub female_pass: usize,
    pub female_fail: usize,
    #[serde(flatten)]
    pub grades: GradeCounts,
    pub pass_percentage: f64,
}

impl SubjectStats {
    fn record(&mut self, row: &SubjectResult, class: Option<GradeClass>) {
        let pass = row.is_pass();
        self.total += 1;
        if pass {
            self.pass += 1;
        } else {
            self.fail += 1;
        }

        let (count, count_pass, count_fail) = match row.gender {
            Gender::Male => (&mut self.male, &mut self.male_pass, &mut self.male_fail),
            Gender::Female => (&mut self.female, &mut self.female_pass, &mut self.female_fail),
        };
        *count += 1;
        if pass {
            *count_pass += 1;
        } else {
            *count_fail += 1;
        }

        if let Some(class) = class {
            self.grades.record(class);
        }
        self.pass_percentage = percentage(self.pass, self.total);
    }
}

/// Result of analysing one subject
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct SubjectAnalysis {
    pub subject_code: String,
    /// Whether a seat list narrowed the students
    pub filtered: bool,
    pub rows: Vec<SubjectResult>,
    pub stats: SubjectStats,
    /// Best passing marks, ties in ledger order
    pub top_3: Vec<SubjectResult>,
}

/// Analyse `subject_code` across `records`
///
/// Students without that subject are skipped. With a seat list, only listed
/// students are counted and the list's gender corrections apply.
pub fn subject_analysis(
    records: &[Record],
    subject_code: &str,
    seats: Option<&SeatFilter>,
) -> Result<SubjectAnalysis, QueryError> {
    let code = subject_code.trim();
    if code.is_empty() {
        return Err(QueryError::EmptySubjectCode);
    }

    let mut analysis = SubjectAnalysis {
        subject_code: code.to_string(),
        filtered: seats.is_some(),
        ..Default::default()
    };

    for record in records {
        if seats.is_some_and(|seats| !seats.contains(&record.id)) {
            continue;
        }
        let Some(mark) = record.subjects.iter().find(|m| m.code.trim() == code) else {
            continue;
        };

        let gender = seats
            .and_then(|seats| seats.gender_for(&record.id))
            .unwrap_or(record.gender);
        let row = SubjectResult::new(record, mark, gender);
        analysis.stats.record(&row, mark.grade_class());
        analysis.rows.push(row);
    }

    let mut passed: Vec<&SubjectResult> = analysis.rows.iter().filter(|r| r.is_pass()).collect();
    passed.sort_by(|a, b| b.marks.cmp(&a.marks));
    analysis.top_3 = passed.into_iter().take(SUBJECT_PODIUM).cloned().collect();

    tracing::debug!(
        subject = %code,
        students = analysis.stats.total,
        pass = analysis.stats.pass,
        "subject analysed"
    );
    Ok(analysis)
}

/// Sorted distinct subject codes found on the ledger
pub fn unique_subjects(records: &[Record]) -> Vec<String> {
    records
        .iter()
        .flat_map(|record| record.subjects.iter())
        .map(|mark| mark.code.trim())
        .filter(|code| !code.is_empty())
        .map(str::to_string)
        .collect::<BTreeSet<_>>()
        .into_iter()
        .collect()
}
