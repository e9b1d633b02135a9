//! Entity types for the company directory

pub mod company;

pub use company::{bucket_rank, Company, EMPLOYEE_BUCKETS, REVENUE_BUCKETS};
