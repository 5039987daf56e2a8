//! Seat-list narrowing
//!
//! Departments hand in a list of seat numbers, sometimes with a gender
//! column, and the dashboard is narrowed to just those students. Seat numbers
//! are compared after [`normalize_seat`].

use crate::core::error::QueryError;
use crate::core::record::{Gender, Record};
use indexmap::IndexMap;

/// Canonical form of a seat number
///
/// Drops a spreadsheet float suffix (`201001.0`), removes whitespace and
/// uppercases. Blank cells and `nan` have no seat.
pub fn normalize_seat(raw: &str) -> Option<String> {
    let trimmed = raw.trim();
    if trimmed.is_empty() || trimmed.eq_ignore_ascii_case("nan") {
        return None;
    }

    let head = trimmed.split('.').next().unwrap_or_default();
    let seat: String = head
        .chars()
        .filter(|c| !c.is_whitespace())
        .collect::<String>()
        .to_uppercase();

    (!seat.is_empty()).then_some(seat)
}

/// Requested seats, in the order given, with optional gender corrections
#[derive(Debug, Clone, Default, PartialEq)]
pub struct SeatFilter {
    seats: IndexMap<String, Option<Gender>>,
}

impl SeatFilter {
    pub fn new() -> Self {
        Self::default()
    }

    /// Parse a comma-separated list of `seat` or `seat:gender` entries
    ///
    /// ```
    /// use leadger::core::seat::SeatFilter;
    /// use leadger::core::Gender;
    ///
    /// let filter = SeatFilter::parse_list("201001.0, 201002:F,,");
    /// assert_eq!(filter.len(), 2);
    /// assert_eq!(filter.gender_for("201002"), Some(Gender::Female));
    /// ```
    pub fn parse_list(raw: &str) -> Self {
        let mut filter = Self::new();
        for entry in raw.split(',') {
            match entry.split_once(':') {
                Some((seat, gender)) => filter.insert(seat, Some(gender)),
                None => filter.insert(entry, None),
            };
        }
        filter
    }

    /// Add a seat; returns `false` when the seat is blank
    ///
    /// A blank gender keeps the ledger's gender. A repeated seat keeps its
    /// first position and takes the latest gender.
    pub fn insert(&mut self, seat: &str, gender: Option<&str>) -> bool {
        let Some(seat) = normalize_seat(seat) else {
            return false;
        };
        let gender = gender
            .map(str::trim)
            .filter(|g| !g.is_empty())
            .map(Gender::parse_lenient);

        self.seats.insert(seat, gender);
        true
    }

    pub fn len(&self) -> usize {
        self.seats.len()
    }

    pub fn is_empty(&self) -> bool {
        self.seats.is_empty()
    }

    pub fn contains(&self, seat: &str) -> bool {
        normalize_seat(seat).is_some_and(|seat| self.seats.contains_key(&seat))
    }

    /// Gender correction supplied with the seat list
    pub fn gender_for(&self, seat: &str) -> Option<Gender> {
        normalize_seat(seat).and_then(|seat| self.seats.get(&seat).copied().flatten())
    }

    /// Records on the list, in ledger order, with gender corrections applied
    ///
    /// Fails when none of the requested seats is on the ledger.
    pub fn narrow(&self, records: &[Record]) -> Result<Vec<Record>, QueryError> {
        let narrowed: Vec<Record> = records
            .iter()
            .filter(|record| self.contains(&record.id))
            .map(|record| {
                let mut record = record.clone();
                if let Some(gender) = self.gender_for(&record.id) {
                    record.gender = gender;
                }
                record
            })
            .collect();

        if narrowed.is_empty() {
            return Err(QueryError::NoMatchingSeats {
                requested: self.len(),
            });
        }

        tracing::debug!(
            requested = self.len(),
            matched = narrowed.len(),
            "narrowed records to seat list"
        );
        Ok(narrowed)
    }
}
