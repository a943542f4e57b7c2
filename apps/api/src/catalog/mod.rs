//! Career catalog: the static dataset the matcher scores against.
//!
//! Loaded once at startup from a JSON array of `CareerRecord`s and shared
//! read-only through `AppState`. A missing or malformed file degrades to an
//! empty catalog so the service still starts and recommends nothing.

pub mod handlers;

use std::collections::BTreeSet;
use std::path::{Path, PathBuf};

use regex::Regex;
use serde::Deserialize;
use thiserror::Error;
use tracing::{info, warn};

use crate::models::career::CareerRecord;

#[derive(Debug, Error)]
pub enum CatalogError {
    #[error("failed to read career dataset {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to parse career dataset {path}: {source}")]
    Parse {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },
}

/// Optional filters for catalog search. All present filters must hold.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct CareerFilter {
    pub category: Option<String>,
    pub skill: Option<String>,
    pub experience_level: Option<String>,
    pub min_salary: Option<u64>,
}

#[derive(Debug, Clone, Default)]
pub struct CareerCatalog {
    careers: Vec<CareerRecord>,
}

impl CareerCatalog {
    pub fn new(careers: Vec<CareerRecord>) -> Self {
        Self { careers }
    }

    /// Reads and parses the dataset, surfacing the failure to the caller.
    pub fn try_load(path: &Path) -> Result<Self, CatalogError> {
        let raw = std::fs::read_to_string(path).map_err(|source| CatalogError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        let careers: Vec<CareerRecord> =
            serde_json::from_str(&raw).map_err(|source| CatalogError::Parse {
                path: path.to_path_buf(),
                source,
            })?;
        Ok(Self::new(careers))
    }

    /// Loads the dataset, falling back to an empty catalog on any failure.
    pub fn load_or_empty(path: &Path) -> Self {
        match Self::try_load(path) {
            Ok(catalog) => {
                info!("Loaded {} careers from {}", catalog.len(), path.display());
                catalog
            }
            Err(e) => {
                warn!("{e}; continuing with an empty career catalog");
                Self::default()
            }
        }
    }

    pub fn careers(&self) -> &[CareerRecord] {
        &self.careers
    }

    pub fn len(&self) -> usize {
        self.careers.len()
    }

    pub fn is_empty(&self) -> bool {
        self.careers.is_empty()
    }

    pub fn get(&self, id: i64) -> Option<&CareerRecord> {
        self.careers.iter().find(|c| c.id == id)
    }

    /// Distinct non-empty categories, sorted.
    pub fn categories(&self) -> Vec<String> {
        self.careers
            .iter()
            .filter(|c| !c.category.is_empty())
            .map(|c| c.category.clone())
            .collect::<BTreeSet<_>>()
            .into_iter()
            .collect()
    }

    /// Distinct required skills across the catalog, sorted.
    pub fn skills(&self) -> Vec<String> {
        self.careers
            .iter()
            .flat_map(|c| c.required_skills.iter().cloned())
            .collect::<BTreeSet<_>>()
            .into_iter()
            .collect()
    }

    /// Careers matching every filter that is set, in catalog order.
    pub fn search(&self, filter: &CareerFilter) -> Vec<&CareerRecord> {
        self.careers
            .iter()
            .filter(|c| matches_filter(c, filter))
            .collect()
    }
}

fn matches_filter(career: &CareerRecord, filter: &CareerFilter) -> bool {
    if let Some(category) = non_blank(&filter.category) {
        if !contains_ignore_case(&career.category, category) {
            return false;
        }
    }

    if let Some(skill) = non_blank(&filter.skill) {
        if !career
            .required_skills
            .iter()
            .any(|s| contains_ignore_case(s, skill))
        {
            return false;
        }
    }

    if let Some(level) = non_blank(&filter.experience_level) {
        if !contains_ignore_case(&career.experience_level, level) {
            return false;
        }
    }

    if let Some(min) = filter.min_salary {
        match max_salary(&career.salary_range) {
            Some(max) if max >= min => {}
            _ => return false,
        }
    }

    true
}

fn non_blank(value: &Option<String>) -> Option<&str> {
    value.as_deref().map(str::trim).filter(|v| !v.is_empty())
}

fn contains_ignore_case(haystack: &str, needle: &str) -> bool {
    haystack.to_lowercase().contains(&needle.to_lowercase())
}

/// Upper bound of a salary range such as `"$60,000 - $90,000"` or `"$80k-$120k"`.
/// Uses the second amount when there are two, the only one otherwise.
pub fn max_salary(range: &str) -> Option<u64> {
    let amounts = salary_amounts(range);
    amounts.get(1).or_else(|| amounts.first()).copied()
}

fn salary_amounts(range: &str) -> Vec<u64> {
    lazy_static::lazy_static! {
        // 60,000 | 120k | 95000
        static ref AMOUNT_RE: Regex = Regex::new(r"(\d[\d,]*)\s*([kK])?").unwrap();
    }

    AMOUNT_RE
        .captures_iter(range)
        .filter_map(|caps| {
            let value: u64 = caps[1].replace(',', "").parse().ok()?;
            Some(match caps.get(2) {
                Some(_) => value.saturating_mul(1000),
                None => value,
            })
        })
        .collect()
}
