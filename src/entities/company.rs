//! Company entity type

use serde::{Deserialize, Serialize};

/// Canonical display order for employee-count buckets.
///
/// Buckets are categorical, not numeric ranges: a record either carries one
/// of these strings or an unknown bucket, which sorts after all of them.
pub const EMPLOYEE_BUCKETS: [&str; 5] = ["100-200", "200-500", "500-1000", "1000-5000", "5000+"];

/// Canonical display order for revenue buckets.
pub const REVENUE_BUCKETS: [&str; 4] = ["$10M - $50M", "$50M - $100M", "$100M - $500M", "$500M+"];

/// A company record
///
/// Records are immutable for the lifetime of a session; the full set is
/// loaded once from the embedded dataset and never mutated.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Company {
    /// Unique, stable identifier
    pub id: String,

    /// Display name
    pub name: String,

    /// Industry category
    pub industry: String,

    /// Headquarters location
    pub location: String,

    /// Employee-count bucket (categorical, see [`EMPLOYEE_BUCKETS`])
    pub employee_count: String,

    /// Year founded
    pub founded: i32,

    /// One-line description
    pub description: String,

    /// Website URL
    pub website: String,

    /// Revenue bucket (categorical, see [`REVENUE_BUCKETS`])
    pub revenue: String,

    /// Display glyph
    pub logo: String,

    /// Rating in 0.0–5.0
    pub rating: f64,

    /// Contact email
    pub email: String,

    /// Contact phone
    pub phone: String,

    /// Long-form company profile
    pub about: String,

    /// Long-form industry context
    pub industry_insight: String,
}

/// Rank of a bucket within a canonical ordering.
///
/// Unknown buckets rank after every canonical one, so a stable sort keeps
/// them last in first-seen order.
pub fn bucket_rank(bucket: &str, canonical: &[&str]) -> usize {
    canonical
        .iter()
        .position(|b| *b == bucket)
        .unwrap_or(canonical.len())
}
