//! Grade classification and SGPA/CGPA to percentage conversion

use serde::{Deserialize, Serialize};
use std::fmt;

/// Lower SGPA bound of the distinction band (inclusive)
pub const DISTINCTION_MIN: f64 = 7.75;
/// Lower SGPA bound of the first class band (inclusive)
pub const FIRST_CLASS_MIN: f64 = 6.75;
/// Lower SGPA bound of the higher second class band (inclusive)
pub const HIGHER_SECOND_MIN: f64 = 6.25;
/// Lower SGPA bound of the second class band (inclusive)
pub const SECOND_CLASS_MIN: f64 = 5.75;

/// Classification tier of a passing result
///
/// Tiers are half-open SGPA ranges; the lower bound is inclusive:
///
/// | tier | range |
/// |---|---|
/// | distinction | `sgpa >= 7.75` |
/// | first_class | `6.75 <= sgpa < 7.75` |
/// | higher_second | `6.25 <= sgpa < 6.75` |
/// | second_class | `5.75 <= sgpa < 6.25` |
/// | pass_class | `0 < sgpa < 5.75` |
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum GradeClass {
    Distinction,
    FirstClass,
    HigherSecond,
    SecondClass,
    PassClass,
}

impl GradeClass {
    /// All tiers, best first
    pub const ALL: [GradeClass; 5] = [
        GradeClass::Distinction,
        GradeClass::FirstClass,
        GradeClass::HigherSecond,
        GradeClass::SecondClass,
        GradeClass::PassClass,
    ];

    /// Classify an SGPA. Returns `None` when there is no positive score.
    pub fn from_sgpa(sgpa: f64) -> Option<Self> {
        if !sgpa.is_finite() || sgpa <= 0.0 {
            return None;
        }

        Some(if sgpa >= DISTINCTION_MIN {
            GradeClass::Distinction
        } else if sgpa >= FIRST_CLASS_MIN {
            GradeClass::FirstClass
        } else if sgpa >= HIGHER_SECOND_MIN {
            GradeClass::HigherSecond
        } else if sgpa >= SECOND_CLASS_MIN {
            GradeClass::SecondClass
        } else {
            GradeClass::PassClass
        })
    }

    /// Classify a passing subject grade letter (`O`, `A+`, `A`, `B+`, `B`, ...)
    pub fn from_grade_letter(letter: &str) -> Self {
        match letter.trim().to_uppercase().as_str() {
            "O" | "A+" => GradeClass::Distinction,
            "A" => GradeClass::FirstClass,
            "B+" => GradeClass::HigherSecond,
            "B" => GradeClass::SecondClass,
            _ => GradeClass::PassClass,
        }
    }

    /// Whether `sgpa` falls inside this tier's band
    pub fn contains(&self, sgpa: f64) -> bool {
        Self::from_sgpa(sgpa) == Some(*self)
    }

    /// Stable snake_case tag, identical to the category selector name
    pub fn as_str(&self) -> &'static str {
        match self {
            GradeClass::Distinction => "distinction",
            GradeClass::FirstClass => "first_class",
            GradeClass::HigherSecond => "higher_second",
            GradeClass::SecondClass => "second_class",
            GradeClass::PassClass => "pass_class",
        }
    }

    /// Parse a snake_case tag
    pub fn from_tag(tag: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|class| class.as_str() == tag)
    }
}

impl fmt::Display for GradeClass {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Convert a grade point average to a percentage using the university's
/// range-based equations.
///
/// Scores that fall between two published bands (e.g. `9.495` or `5.245`)
/// or below `4.00` yield `0.0`.
pub fn sgpa_to_percentage(cgpa: f64) -> f64 {
    let x = cgpa;
    if x >= 9.50 {
        20.0 * x - 100.0
    } else if (8.25..=9.49).contains(&x) {
        12.0 * x - 25.0
    } else if (6.75..=8.24).contains(&x) {
        10.0 * x - 7.5
    } else if (5.75..=6.74).contains(&x) {
        5.0 * x + 26.25
    } else if (5.25..=5.74).contains(&x) {
        10.0 * x - 2.5
    } else if (4.75..=5.24).contains(&x) {
        10.0 * x - 2.5
    } else if (4.00..=4.74).contains(&x) {
        6.6 * x + 13.6
    } else {
        0.0
    }
}
