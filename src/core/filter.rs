//! Filter engine
//!
//! Reduces the full record set to the records matching a filter state.
//! Filtering is pure and order-preserving: the output is a subset of the
//! input in the same relative order.

use crate::entities::Company;

/// Sentinel meaning "no constraint" for the categorical selectors.
///
/// Must never collide with a real category value; dataset validation
/// rejects vocabularies containing it.
pub const ALL: &str = "all";

/// The active filter selections
///
/// `search` is a case-insensitive substring match against the company name.
/// The three categorical selectors hold either a concrete category value or
/// [`ALL`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FilterState {
    pub search: String,
    pub industry: String,
    pub location: String,
    pub employee_count: String,
}

impl Default for FilterState {
    fn default() -> Self {
        Self {
            search: String::new(),
            industry: ALL.to_string(),
            location: ALL.to_string(),
            employee_count: ALL.to_string(),
        }
    }
}

impl FilterState {
    /// True when no field constrains the result set.
    pub fn is_unconstrained(&self) -> bool {
        self.active_count() == 0
    }

    /// Number of fields holding a non-default value.
    pub fn active_count(&self) -> usize {
        let mut count = 0;
        if !self.search.is_empty() {
            count += 1;
        }
        if self.industry != ALL {
            count += 1;
        }
        if self.location != ALL {
            count += 1;
        }
        if self.employee_count != ALL {
            count += 1;
        }
        count
    }
}

/// Filter records down to those matching every field of `state`.
///
/// An empty result is a valid outcome, not an error.
pub fn filter<'a>(records: &'a [Company], state: &FilterState) -> Vec<&'a Company> {
    let needle = state.search.to_lowercase();
    records
        .iter()
        .filter(|company| matches(company, state, &needle))
        .collect()
}

fn matches(company: &Company, state: &FilterState, needle: &str) -> bool {
    company.name.to_lowercase().contains(needle)
        && (state.industry == ALL || company.industry == state.industry)
        && (state.location == ALL || company.location == state.location)
        && (state.employee_count == ALL || company.employee_count == state.employee_count)
}
