//! Student result records
//!
//! A [`Record`] is one row of the result ledger table. Records are loaded once
//! and never mutated by the filter/sort engine, which only computes
//! projections over them.
//!
//! Ingestion is lenient: gender, result status and SGPA accept the loose
//! shapes found in ledger exports and coerce anything unrecognized to a
//! documented default instead of failing.

use crate::core::error::RecordError;
use crate::core::grade::GradeClass;
use crate::core::subject::SubjectMark;
use regex::Regex;
use serde::{Deserialize, Deserializer, Serialize};
use serde_json::Value;
use std::fmt;
use std::sync::LazyLock;

static NON_NUMERIC: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"[^0-9.]").expect("static pattern is valid"));

/// Student gender as recorded on the ledger
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize)]
pub enum Gender {
    #[default]
    Male,
    Female,
}

impl Gender {
    /// `f` / `female` (any case) is Female, everything else is Male
    pub fn parse_lenient(raw: &str) -> Self {
        match raw.trim().to_lowercase().as_str() {
            "f" | "female" => Gender::Female,
            _ => Gender::Male,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Gender::Male => "Male",
            Gender::Female => "Female",
        }
    }

    /// Lowercase prefix used by category selectors (`male_pass`, ...)
    pub fn tag(&self) -> &'static str {
        match self {
            Gender::Male => "male",
            Gender::Female => "female",
        }
    }
}

impl fmt::Display for Gender {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl<'de> Deserialize<'de> for Gender {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let raw = Option::<String>::deserialize(deserializer)?;
        Ok(raw.map(|s| Gender::parse_lenient(&s)).unwrap_or_default())
    }
}

/// Result status of a student
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum ResultStatus {
    Pass,
    #[default]
    Fail,
    Atkt,
}

impl ResultStatus {
    pub const ALL: [ResultStatus; 3] = [ResultStatus::Pass, ResultStatus::Fail, ResultStatus::Atkt];

    /// Derive the status from a ledger result string
    ///
    /// `PASS` anywhere wins, then `A.T.K.T` / `ATKT`; anything else is a fail.
    pub fn from_result_text(text: &str) -> Self {
        let upper = text.to_uppercase();
        if upper.contains("PASS") {
            ResultStatus::Pass
        } else if upper.contains("A.T.K.T") || upper.contains("ATKT") {
            ResultStatus::Atkt
        } else {
            ResultStatus::Fail
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            ResultStatus::Pass => "pass",
            ResultStatus::Fail => "fail",
            ResultStatus::Atkt => "atkt",
        }
    }

    /// Parse an exact lowercase tag
    pub fn from_tag(tag: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|status| status.as_str() == tag)
    }
}

impl fmt::Display for ResultStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl<'de> Deserialize<'de> for ResultStatus {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let raw = Option::<String>::deserialize(deserializer)?;
        Ok(raw
            .map(|s| ResultStatus::from_result_text(&s))
            .unwrap_or_default())
    }
}

/// Parse a score cell the way ledger exports write it
///
/// `-`, `AB` and blanks mean "no score". Anything else keeps only digits and
/// dots before parsing; unparsable input is `0.0`.
pub fn parse_score_text(raw: &str) -> f64 {
    let trimmed = raw.trim();
    if trimmed.is_empty() || trimmed == "-" || trimmed.eq_ignore_ascii_case("AB") {
        return 0.0;
    }

    let cleaned = NON_NUMERIC.replace_all(trimmed, "");
    cleaned
        .parse::<f64>()
        .ok()
        .filter(|v| v.is_finite())
        .unwrap_or(0.0)
}

/// Coerce any JSON value to an SGPA (missing or non-numeric is `0.0`)
pub fn coerce_sgpa(value: &Value) -> f64 {
    match value {
        Value::Number(n) => n
            .as_f64()
            .filter(|v| v.is_finite() && *v > 0.0)
            .unwrap_or(0.0),
        Value::String(s) => parse_score_text(s),
        _ => 0.0,
    }
}

fn deserialize_sgpa<'de, D: Deserializer<'de>>(deserializer: D) -> Result<f64, D::Error> {
    let value = Value::deserialize(deserializer)?;
    Ok(coerce_sgpa(&value))
}

/// Seat numbers arrive as strings or as spreadsheet floats (`12345.0`)
fn deserialize_seat_no<'de, D: Deserializer<'de>>(deserializer: D) -> Result<String, D::Error> {
    let value = Value::deserialize(deserializer)?;
    let raw = match value {
        Value::String(s) => s,
        Value::Number(n) => n.to_string(),
        _ => String::new(),
    };
    Ok(raw.split('.').next().unwrap_or_default().trim().to_string())
}

/// One row of the result table
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Record {
    /// Row identifier (the seat number)
    #[serde(default, alias = "seatNo")]
    pub id: String,

    /// Concatenated searchable content of the row
    #[serde(default)]
    pub text: String,

    #[serde(default)]
    pub gender: Gender,

    #[serde(default)]
    pub status: ResultStatus,

    /// Only meaningful when `status` is `pass`
    #[serde(default, deserialize_with = "deserialize_sgpa")]
    pub sgpa: f64,

    #[serde(default)]
    pub grade_class: String,

    #[serde(default)]
    pub is_topper: bool,

    /// Student name, when the source has one
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub name: String,

    /// Subject marks across all semesters on the ledger
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub subjects: Vec<SubjectMark>,
}

impl Record {
    /// Create a failing record with no score
    pub fn new(id: impl Into<String>, text: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            text: text.into(),
            gender: Gender::Male,
            status: ResultStatus::Fail,
            sgpa: 0.0,
            grade_class: String::new(),
            is_topper: false,
            name: String::new(),
            subjects: Vec::new(),
        }
    }

    pub fn with_name(mut self, name: impl Into<String>) -> Self {
        self.name = name.into();
        self
    }

    pub fn with_subjects(mut self, subjects: Vec<SubjectMark>) -> Self {
        self.subjects = subjects;
        self
    }

    pub fn with_gender(mut self, gender: Gender) -> Self {
        self.gender = gender;
        self
    }

    pub fn with_status(mut self, status: ResultStatus) -> Self {
        self.status = status;
        self.grade_class = self.derived_grade_class();
        self
    }

    pub fn with_sgpa(mut self, sgpa: f64) -> Self {
        self.sgpa = if sgpa.is_finite() && sgpa > 0.0 { sgpa } else { 0.0 };
        self.grade_class = self.derived_grade_class();
        self
    }

    pub fn with_topper(mut self, is_topper: bool) -> Self {
        self.is_topper = is_topper;
        self
    }

    /// Fill in the grade class tag when the source did not provide one
    pub fn normalized(mut self) -> Self {
        if self.grade_class.trim().is_empty() {
            self.grade_class = self.derived_grade_class();
        }
        self
    }

    pub fn is_pass(&self) -> bool {
        self.status == ResultStatus::Pass
    }

    /// Grade tier of a passing record
    pub fn grade(&self) -> Option<GradeClass> {
        if self.is_pass() {
            GradeClass::from_sgpa(self.sgpa)
        } else {
            None
        }
    }

    fn derived_grade_class(&self) -> String {
        self.grade()
            .map(|class| class.as_str().to_string())
            .unwrap_or_default()
    }
}

/// Raw ledger row as produced by the result-ledger parser
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct StudentRow {
    #[serde(default, deserialize_with = "deserialize_seat_no")]
    pub seat_no: String,

    #[serde(default)]
    pub prn: String,

    #[serde(default)]
    pub full_name: String,

    #[serde(default)]
    pub mother_name: String,

    #[serde(default)]
    pub gender: Option<String>,

    /// Free-form result text (`PASS`, `FAILS A.T.K.T.`, ...)
    #[serde(default)]
    pub result: String,

    #[serde(default)]
    pub dashboard_sgpa: Option<Value>,

    #[serde(default)]
    pub cgpa: Option<Value>,

    #[serde(default)]
    pub subjects: Vec<SubjectMark>,

    #[serde(default)]
    pub sem1_subjects: Vec<SubjectMark>,

    #[serde(default)]
    pub sem2_subjects: Vec<SubjectMark>,

    #[serde(default)]
    pub sem3_subjects: Vec<SubjectMark>,

    #[serde(default)]
    pub sem4_subjects: Vec<SubjectMark>,
}

impl From<StudentRow> for Record {
    fn from(row: StudentRow) -> Self {
        let gender = row
            .gender
            .as_deref()
            .map(Gender::parse_lenient)
            .unwrap_or_default();
        let status = ResultStatus::from_result_text(&row.result);

        // Non-passing rows show "-" on the dashboard
        let sgpa = if status == ResultStatus::Pass {
            row.dashboard_sgpa
                .as_ref()
                .or(row.cgpa.as_ref())
                .map(coerce_sgpa)
                .unwrap_or(0.0)
        } else {
            0.0
        };
        let sgpa_cell = if sgpa > 0.0 {
            sgpa.to_string()
        } else {
            "-".to_string()
        };

        let text = [
            row.seat_no.as_str(),
            row.prn.as_str(),
            row.full_name.as_str(),
            row.mother_name.as_str(),
            gender.as_str(),
            row.result.as_str(),
            sgpa_cell.as_str(),
        ]
        .iter()
        .map(|part| part.trim())
        .filter(|part| !part.is_empty())
        .collect::<Vec<_>>()
        .join(" ");

        let name = row.full_name.trim().to_string();
        let subjects = [
            row.subjects,
            row.sem1_subjects,
            row.sem2_subjects,
            row.sem3_subjects,
            row.sem4_subjects,
        ]
        .into_iter()
        .flatten()
        .collect();

        Record::new(row.seat_no, text)
            .with_name(name)
            .with_gender(gender)
            .with_status(status)
            .with_sgpa(sgpa)
            .with_subjects(subjects)
    }
}

/// Parse a JSON array of records
///
/// Objects carrying ledger keys (`seat_no` or `result`) are read as
/// [`StudentRow`]s and converted; everything else is read as a [`Record`].
pub fn parse_records_json(input: &str) -> Result<Vec<Record>, RecordError> {
    let values: Vec<Value> =
        serde_json::from_str(input).map_err(|e| RecordError::InvalidData {
            message: e.to_string(),
        })?;

    parse_record_values(values)
}

/// Convert already-decoded JSON rows, as [`parse_records_json`] does
pub fn parse_record_values(values: Vec<Value>) -> Result<Vec<Record>, RecordError> {
    values
        .into_iter()
        .enumerate()
        .map(|(index, value)| {
            let is_ledger_row = value
                .as_object()
                .is_some_and(|obj| obj.contains_key("seat_no") || obj.contains_key("result"));

            let record = if is_ledger_row {
                serde_json::from_value::<StudentRow>(value).map(Record::from)
            } else {
                serde_json::from_value::<Record>(value).map(Record::normalized)
            };

            record.map_err(|e| RecordError::InvalidData {
                message: format!("row {}: {}", index, e),
            })
        })
        .collect()
}
