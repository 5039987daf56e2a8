//! Result statistics for the dashboard summary cards

use crate::core::grade::GradeClass;
use crate::core::record::{Gender, Record, ResultStatus};
use serde::Serialize;

/// Pass/fail/ATKT counts for one gender
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct StatusCounts {
    pub pass: usize,
    pub fail: usize,
    pub atkt: usize,
}

impl StatusCounts {
    fn record(&mut self, status: ResultStatus) {
        match status {
            ResultStatus::Pass => self.pass += 1,
            ResultStatus::Fail => self.fail += 1,
            ResultStatus::Atkt => self.atkt += 1,
        }
    }

    pub fn total(&self) -> usize {
        self.pass + self.fail + self.atkt
    }
}

/// Passing records per grade tier
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct GradeCounts {
    pub distinction: usize,
    pub first_class: usize,
    pub higher_second: usize,
    pub second_class: usize,
    pub pass_class: usize,
}

impl GradeCounts {
    pub(crate) fn record(&mut self, class: GradeClass) {
        match class {
            GradeClass::Distinction => self.distinction += 1,
            GradeClass::FirstClass => self.first_class += 1,
            GradeClass::HigherSecond => self.higher_second += 1,
            GradeClass::SecondClass => self.second_class += 1,
            GradeClass::PassClass => self.pass_class += 1,
        }
    }
}

/// Summary of a result ledger
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct ResultStats {
    pub total: usize,
    pub overall: StatusCounts,
    pub male: StatusCounts,
    pub female: StatusCounts,
    pub grades: GradeCounts,
    /// `pass / total * 100`, two decimals
    pub pass_percentage: f64,
}

impl ResultStats {
    pub fn from_records(records: &[Record]) -> Self {
        let mut stats = ResultStats {
            total: records.len(),
            ..Default::default()
        };

        for record in records {
            stats.overall.record(record.status);
            match record.gender {
                Gender::Male => stats.male.record(record.status),
                Gender::Female => stats.female.record(record.status),
            }
            if let Some(class) = record.grade() {
                stats.grades.record(class);
            }
        }

        stats.pass_percentage = percentage(stats.overall.pass, stats.total);
        stats
    }
}

/// `part / whole * 100` rounded to two decimals; `0.0` when `whole` is zero
pub fn percentage(part: usize, whole: usize) -> f64 {
    if whole == 0 {
        return 0.0;
    }
    let raw = part as f64 / whole as f64 * 100.0;
    (raw * 100.0).round() / 100.0
}
