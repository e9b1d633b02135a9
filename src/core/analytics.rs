//! Analytics aggregator
//!
//! Pure functions over the full (unfiltered) record set. Every function
//! recomputes from scratch on each call; the set is small and static, so
//! there is no cache to invalidate.
//!
//! Tie policy, everywhere a tie can occur: first-seen order in the source
//! sequence wins. The group/count pass walks the records in order and the
//! descending sorts are stable, so ties fall out deterministically.

use std::collections::HashMap;

use serde::Serialize;

use crate::entities::{bucket_rank, Company, EMPLOYEE_BUCKETS, REVENUE_BUCKETS};

/// Locations kept in the top-locations ranking.
pub const TOP_LOCATIONS: usize = 10;

/// Companies kept in the top-rated ranking.
pub const TOP_RATED: usize = 5;

/// One category with its record count
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CategoryCount {
    pub name: String,
    pub count: usize,
}

/// Average rating for one industry
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct IndustryRating {
    pub industry: String,
    /// Mean rating, rounded to 2 decimal places
    pub rating: f64,
    pub companies: usize,
}

/// Companies founded in one year
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct YearCount {
    pub year: i32,
    pub count: usize,
}

/// Group and count records by `key`, in first-seen order.
fn count_by<'a>(records: &'a [Company], key: impl Fn(&'a Company) -> &'a str) -> Vec<CategoryCount> {
    let mut index: HashMap<&str, usize> = HashMap::new();
    let mut counts: Vec<CategoryCount> = Vec::new();
    for record in records {
        let category = key(record);
        match index.get(category) {
            Some(&i) => counts[i].count += 1,
            None => {
                index.insert(category, counts.len());
                counts.push(CategoryCount {
                    name: category.to_string(),
                    count: 1,
                });
            }
        }
    }
    counts
}

/// Record count per industry, most common first.
pub fn industry_distribution(records: &[Company]) -> Vec<CategoryCount> {
    let mut counts = count_by(records, |c| c.industry.as_str());
    counts.sort_by(|a, b| b.count.cmp(&a.count));
    counts
}

/// The ten most common locations, by descending count.
pub fn top_locations(records: &[Company]) -> Vec<CategoryCount> {
    let mut counts = count_by(records, |c| c.location.as_str());
    counts.sort_by(|a, b| b.count.cmp(&a.count));
    counts.truncate(TOP_LOCATIONS);
    counts
}

/// Record count per employee bucket, in canonical bucket order.
///
/// Buckets absent from the canonical list sort last, first-seen among
/// themselves.
pub fn size_distribution(records: &[Company]) -> Vec<CategoryCount> {
    let mut counts = count_by(records, |c| c.employee_count.as_str());
    counts.sort_by_key(|c| bucket_rank(&c.name, &EMPLOYEE_BUCKETS));
    counts
}

/// Record count per revenue bucket, in canonical bucket order.
pub fn revenue_distribution(records: &[Company]) -> Vec<CategoryCount> {
    let mut counts = count_by(records, |c| c.revenue.as_str());
    counts.sort_by_key(|c| bucket_rank(&c.name, &REVENUE_BUCKETS));
    counts
}

/// Mean rating per industry, best first.
///
/// The industries returned are exactly the distinct industries present in
/// the input.
pub fn rating_by_industry(records: &[Company]) -> Vec<IndustryRating> {
    let mut index: HashMap<&str, usize> = HashMap::new();
    let mut groups: Vec<(String, f64, usize)> = Vec::new();
    for record in records {
        match index.get(record.industry.as_str()) {
            Some(&i) => {
                groups[i].1 += record.rating;
                groups[i].2 += 1;
            }
            None => {
                index.insert(&record.industry, groups.len());
                groups.push((record.industry.clone(), record.rating, 1));
            }
        }
    }

    let mut ratings: Vec<IndustryRating> = groups
        .into_iter()
        .map(|(industry, total, companies)| IndustryRating {
            industry,
            rating: round2(total / companies as f64),
            companies,
        })
        .collect();
    ratings.sort_by(|a, b| b.rating.total_cmp(&a.rating));
    ratings
}

/// The `n` highest-rated companies, earlier records winning ties.
pub fn top_rated(records: &[Company], n: usize) -> Vec<&Company> {
    let mut sorted: Vec<&Company> = records.iter().collect();
    sorted.sort_by(|a, b| b.rating.total_cmp(&a.rating));
    sorted.truncate(n);
    sorted
}

/// Companies founded per year, ascending by year.
pub fn founded_timeline(records: &[Company]) -> Vec<YearCount> {
    let mut counts: HashMap<i32, usize> = HashMap::new();
    for record in records {
        *counts.entry(record.founded).or_insert(0) += 1;
    }
    let mut timeline: Vec<YearCount> = counts
        .into_iter()
        .map(|(year, count)| YearCount { year, count })
        .collect();
    timeline.sort_by_key(|y| y.year);
    timeline
}

/// Arithmetic mean of `rating` across all records, 0.0 when there are none.
pub fn average_rating(records: &[Company]) -> f64 {
    if records.is_empty() {
        return 0.0;
    }
    records.iter().map(|c| c.rating).sum::<f64>() / records.len() as f64
}

fn round2(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}
