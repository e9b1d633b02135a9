//! Embedded dataset loading and validation
//!
//! The record set and its enumerated vocabularies ship with the binary as a
//! YAML document. Loading validates the document against an embedded JSON
//! Schema, then checks the invariants the schema cannot express: id
//! uniqueness, vocabulary superset-ness, the `all` sentinel, and the rating
//! range.

use jsonschema::validator_for;
use miette::Diagnostic;
use rust_embed::Embed;
use serde::Deserialize;
use std::collections::HashSet;
use thiserror::Error;

use crate::core::filter::ALL;
use crate::entities::Company;

#[derive(Embed)]
#[folder = "data/"]
struct EmbeddedData;

const DATASET_FILE: &str = "companies.yaml";
const SCHEMA_FILE: &str = "companies.schema.json";

/// Errors raised while loading the embedded dataset.
///
/// These indicate a broken build rather than user error; commands fail fast
/// and render them through miette.
#[derive(Debug, Error, Diagnostic)]
pub enum DatasetError {
    #[error("embedded data file {name} is missing")]
    #[diagnostic(code(orgdex::dataset::missing))]
    Missing { name: &'static str },

    #[error("embedded data file {name} is not valid UTF-8")]
    #[diagnostic(code(orgdex::dataset::encoding))]
    Encoding { name: &'static str },

    #[error("failed to parse {name}: {message}")]
    #[diagnostic(code(orgdex::dataset::parse))]
    Parse { name: &'static str, message: String },

    #[error("dataset schema violation at {path}: {message}")]
    #[diagnostic(code(orgdex::dataset::schema))]
    Schema { path: String, message: String },

    #[error("duplicate company id {id:?}")]
    #[diagnostic(code(orgdex::dataset::duplicate_id))]
    DuplicateId { id: String },

    #[error("company {id:?} has {field} {value:?} missing from the {field} vocabulary")]
    #[diagnostic(
        code(orgdex::dataset::unknown_category),
        help("vocabularies must be supersets of the values present in the records")
    )]
    UnknownCategory {
        id: String,
        field: &'static str,
        value: String,
    },

    #[error("vocabulary entry {value:?} collides with the \"all\" sentinel")]
    #[diagnostic(code(orgdex::dataset::reserved_sentinel))]
    ReservedSentinel { value: String },

    #[error("company {id:?} rating {rating} is outside 0.0..=5.0")]
    #[diagnostic(code(orgdex::dataset::rating_range))]
    RatingOutOfRange { id: String, rating: f64 },
}

/// The immutable record set plus its enumerated vocabularies.
///
/// Vocabularies are supersets of the values present in the records and
/// never contain the `all` sentinel.
#[derive(Debug, Clone, Deserialize)]
pub struct Dataset {
    pub companies: Vec<Company>,
    pub industries: Vec<String>,
    pub locations: Vec<String>,
    pub employee_counts: Vec<String>,
}

impl Dataset {
    /// Load and validate the dataset embedded in the binary.
    pub fn load() -> Result<Self, DatasetError> {
        let raw = embedded(DATASET_FILE)?;
        Self::from_yaml(&raw)
    }

    /// Parse and validate a dataset document.
    pub fn from_yaml(raw: &str) -> Result<Self, DatasetError> {
        check_schema(raw)?;
        let dataset: Dataset = serde_yml::from_str(raw).map_err(|e| DatasetError::Parse {
            name: DATASET_FILE,
            message: e.to_string(),
        })?;
        dataset.validate()?;
        Ok(dataset)
    }

    /// Look up a company by exact id.
    pub fn get(&self, id: &str) -> Option<&Company> {
        self.companies.iter().find(|c| c.id == id)
    }

    /// Resolve a user-supplied query to a company.
    ///
    /// Tries exact id, then exact name (case-insensitive), then the first
    /// case-insensitive name prefix match.
    pub fn resolve(&self, query: &str) -> Option<&Company> {
        if let Some(company) = self.get(query) {
            return Some(company);
        }
        let needle = query.to_lowercase();
        self.companies
            .iter()
            .find(|c| c.name.to_lowercase() == needle)
            .or_else(|| {
                self.companies
                    .iter()
                    .find(|c| c.name.to_lowercase().starts_with(&needle))
            })
    }

    fn validate(&self) -> Result<(), DatasetError> {
        for vocabulary in [&self.industries, &self.locations, &self.employee_counts] {
            if let Some(value) = vocabulary.iter().find(|v| v.as_str() == ALL) {
                return Err(DatasetError::ReservedSentinel {
                    value: value.clone(),
                });
            }
        }

        let mut seen: HashSet<&str> = HashSet::new();
        for company in &self.companies {
            if !seen.insert(&company.id) {
                return Err(DatasetError::DuplicateId {
                    id: company.id.clone(),
                });
            }
            if !(0.0..=5.0).contains(&company.rating) {
                return Err(DatasetError::RatingOutOfRange {
                    id: company.id.clone(),
                    rating: company.rating,
                });
            }
            check_vocabulary(&company.id, "industry", &company.industry, &self.industries)?;
            check_vocabulary(&company.id, "location", &company.location, &self.locations)?;
            check_vocabulary(
                &company.id,
                "employee_count",
                &company.employee_count,
                &self.employee_counts,
            )?;
        }
        Ok(())
    }
}

fn check_vocabulary(
    id: &str,
    field: &'static str,
    value: &str,
    vocabulary: &[String],
) -> Result<(), DatasetError> {
    if vocabulary.iter().any(|v| v == value) {
        return Ok(());
    }
    Err(DatasetError::UnknownCategory {
        id: id.to_string(),
        field,
        value: value.to_string(),
    })
}

fn embedded(name: &'static str) -> Result<String, DatasetError> {
    let file = EmbeddedData::get(name).ok_or(DatasetError::Missing { name })?;
    std::str::from_utf8(&file.data)
        .map(str::to_string)
        .map_err(|_| DatasetError::Encoding { name })
}

fn check_schema(raw: &str) -> Result<(), DatasetError> {
    let schema_raw = embedded(SCHEMA_FILE)?;
    let schema: serde_json::Value =
        serde_json::from_str(&schema_raw).map_err(|e| DatasetError::Parse {
            name: SCHEMA_FILE,
            message: e.to_string(),
        })?;
    let instance: serde_json::Value =
        serde_yml::from_str(raw).map_err(|e| DatasetError::Parse {
            name: DATASET_FILE,
            message: e.to_string(),
        })?;

    let validator = validator_for(&schema).map_err(|e| DatasetError::Parse {
        name: SCHEMA_FILE,
        message: e.to_string(),
    })?;
    if let Some(error) = validator.iter_errors(&instance).next() {
        return Err(DatasetError::Schema {
            path: error.instance_path.to_string(),
            message: error.to_string(),
        });
    }
    Ok(())
}
