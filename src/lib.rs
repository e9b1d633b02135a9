//! Orgdex: a browsable company directory
//!
//! A Unix-style CLI for searching, filtering, sorting, and analyzing a
//! curated directory of companies shipped with the binary.

pub mod cli;
pub mod core;
pub mod entities;
