//! Sort engine
//!
//! Orders a record set by a chosen field and direction. Sorting is pure
//! (returns a new sequence) and stable: records with equal keys keep their
//! relative order from the input, in both directions.

use std::cmp::Ordering;

use crate::entities::Company;

/// Fields a record set can be ordered by
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SortField {
    #[default]
    Name,
    Location,
    Industry,
    Founded,
}

impl std::fmt::Display for SortField {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            SortField::Name => write!(f, "name"),
            SortField::Location => write!(f, "location"),
            SortField::Industry => write!(f, "industry"),
            SortField::Founded => write!(f, "founded"),
        }
    }
}

impl std::str::FromStr for SortField {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "name" => Ok(SortField::Name),
            "location" => Ok(SortField::Location),
            "industry" => Ok(SortField::Industry),
            "founded" => Ok(SortField::Founded),
            _ => Err(format!("Unknown sort field: {}", s)),
        }
    }
}

/// Sort direction
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SortOrder {
    #[default]
    Asc,
    Desc,
}

impl SortOrder {
    /// The opposite direction.
    pub fn toggled(self) -> Self {
        match self {
            SortOrder::Asc => SortOrder::Desc,
            SortOrder::Desc => SortOrder::Asc,
        }
    }
}

impl std::fmt::Display for SortOrder {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            SortOrder::Asc => write!(f, "asc"),
            SortOrder::Desc => write!(f, "desc"),
        }
    }
}

impl std::str::FromStr for SortOrder {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "asc" | "ascending" => Ok(SortOrder::Asc),
            "desc" | "descending" => Ok(SortOrder::Desc),
            _ => Err(format!("Unknown sort order: {}", s)),
        }
    }
}

/// Compare two records on `field`.
///
/// Textual fields fold to lowercase before comparing; `founded` compares
/// numerically.
pub fn compare(a: &Company, b: &Company, field: SortField) -> Ordering {
    match field {
        SortField::Name => a.name.to_lowercase().cmp(&b.name.to_lowercase()),
        SortField::Location => a.location.to_lowercase().cmp(&b.location.to_lowercase()),
        SortField::Industry => a.industry.to_lowercase().cmp(&b.industry.to_lowercase()),
        SortField::Founded => a.founded.cmp(&b.founded),
    }
}

/// Return a new sequence ordered by `field` in `order`.
///
/// Descending inverts less/greater but leaves equal pairs untouched, so the
/// underlying stable sort preserves input order within equal-key groups.
pub fn sort<'a>(records: &[&'a Company], field: SortField, order: SortOrder) -> Vec<&'a Company> {
    let mut sorted = records.to_vec();
    sorted.sort_by(|a, b| match order {
        SortOrder::Asc => compare(a, b, field),
        SortOrder::Desc => compare(a, b, field).reverse(),
    });
    sorted
}
