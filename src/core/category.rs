//! Category selectors for the records table
//!
//! A selector is parsed from the raw value of the category dropdown. Parsing
//! never fails: unknown values become [`CategorySelector::Unrecognized`],
//! which restricts nothing. Any value starting with `top` selects a ranked
//! topper view.

use crate::core::grade::GradeClass;
use crate::core::record::{Gender, Record, ResultStatus};
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::convert::Infallible;
use std::fmt;
use std::str::FromStr;

/// Prefix that switches the engine into ranking mode
pub const TOPPER_PREFIX: &str = "top";

/// Scope of a topper ranking
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TopperScope {
    Overall,
    Gender(Gender),
}

/// Category selector of the records table
#[derive(Debug, Clone, PartialEq, Eq, Hash, Default)]
pub enum CategorySelector {
    #[default]
    All,
    Status(ResultStatus),
    GenderStatus(Gender, ResultStatus),
    Grade(GradeClass),
    Topper {
        scope: TopperScope,
        limit: usize,
        /// Raw selector value, kept so unknown `top*` values round-trip
        name: String,
    },
    Unrecognized(String),
}

impl CategorySelector {
    /// The fixed selector values offered by the dashboard, in display order
    pub const FIXED: [&'static str; 19] = [
        "all",
        "pass",
        "fail",
        "atkt",
        "male_pass",
        "male_atkt",
        "male_fail",
        "female_pass",
        "female_atkt",
        "female_fail",
        "distinction",
        "first_class",
        "higher_second",
        "second_class",
        "pass_class",
        "top3_overall",
        "top5_overall",
        "top5_male",
        "top5_female",
    ];

    /// Parse a raw selector value
    pub fn parse(raw: &str) -> Self {
        if raw.starts_with(TOPPER_PREFIX) {
            let scope = match raw {
                "top5_male" => TopperScope::Gender(Gender::Male),
                "top5_female" => TopperScope::Gender(Gender::Female),
                _ => TopperScope::Overall,
            };
            let limit = if raw == "top3_overall" { 3 } else { 5 };
            return CategorySelector::Topper {
                scope,
                limit,
                name: raw.to_string(),
            };
        }

        if raw == "all" {
            return CategorySelector::All;
        }
        if let Some(status) = ResultStatus::from_tag(raw) {
            return CategorySelector::Status(status);
        }
        if let Some(class) = GradeClass::from_tag(raw) {
            return CategorySelector::Grade(class);
        }
        if let Some((gender, status)) = raw.split_once('_') {
            let gender = match gender {
                "male" => Some(Gender::Male),
                "female" => Some(Gender::Female),
                _ => None,
            };
            if let (Some(gender), Some(status)) = (gender, ResultStatus::from_tag(status)) {
                return CategorySelector::GenderStatus(gender, status);
            }
        }

        CategorySelector::Unrecognized(raw.to_string())
    }

    /// Whether this selector bypasses text search and ranks instead
    pub fn is_topper(&self) -> bool {
        matches!(self, CategorySelector::Topper { .. })
    }

    /// Category predicate for non-ranking selectors
    ///
    /// Topper selectors only pre-filter here (pass + gender scope); the
    /// ranking itself happens in the filter engine.
    pub fn matches(&self, record: &Record) -> bool {
        match self {
            CategorySelector::All | CategorySelector::Unrecognized(_) => true,
            CategorySelector::Status(status) => record.status == *status,
            CategorySelector::GenderStatus(gender, status) => {
                record.gender == *gender && record.status == *status
            }
            CategorySelector::Grade(class) => record.is_pass() && class.contains(record.sgpa),
            CategorySelector::Topper { scope, .. } => {
                record.is_pass()
                    && match scope {
                        TopperScope::Overall => true,
                        TopperScope::Gender(gender) => record.gender == *gender,
                    }
            }
        }
    }

    /// Raw selector value
    pub fn as_str(&self) -> &str {
        match self {
            CategorySelector::All => "all",
            CategorySelector::Status(status) => status.as_str(),
            CategorySelector::GenderStatus(gender, status) => {
                match (gender, status) {
                    (Gender::Male, ResultStatus::Pass) => "male_pass",
                    (Gender::Male, ResultStatus::Atkt) => "male_atkt",
                    (Gender::Male, ResultStatus::Fail) => "male_fail",
                    (Gender::Female, ResultStatus::Pass) => "female_pass",
                    (Gender::Female, ResultStatus::Atkt) => "female_atkt",
                    (Gender::Female, ResultStatus::Fail) => "female_fail",
                }
            }
            CategorySelector::Grade(class) => class.as_str(),
            CategorySelector::Topper { name, .. } => name,
            CategorySelector::Unrecognized(raw) => raw,
        }
    }
}

impl FromStr for CategorySelector {
    type Err = Infallible;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(CategorySelector::parse(s))
    }
}

impl fmt::Display for CategorySelector {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl Serialize for CategorySelector {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.as_str())
    }
}

impl<'de> Deserialize<'de> for CategorySelector {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let raw = Option::<String>::deserialize(deserializer)?;
        Ok(raw
            .map(|s| CategorySelector::parse(&s))
            .unwrap_or_default())
    }
}
