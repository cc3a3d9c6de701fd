// file: src/models/criteria.rs
// description: query criteria built from the search form and facet keys
// reference: Harvard Art Museums object search parameters

use serde::{Deserialize, Serialize};
use std::fmt;

/// Selector value meaning "no filter on this axis".
pub const ANY: &str = "any";

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct QueryCriteria {
    pub query_string: String,
    pub century: String,
    pub classification: String,
}

impl QueryCriteria {
    pub fn new(
        query_string: impl Into<String>,
        century: impl Into<String>,
        classification: impl Into<String>,
    ) -> Self {
        Self {
            query_string: query_string.into(),
            century: century.into(),
            classification: classification.into(),
        }
    }

    /// No keyword and both selectors left on [`ANY`].
    pub fn is_unfiltered(&self) -> bool {
        self.query_string.is_empty() && self.century == ANY && self.classification == ANY
    }
}

impl Default for QueryCriteria {
    fn default() -> Self {
        Self::new("", ANY, ANY)
    }
}

/// Attribute of an object whose value can be clicked to run a scoped search.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FacetKey {
    Culture,
    Technique,
    Medium,
    People,
}

impl FacetKey {
    pub fn as_str(&self) -> &'static str {
        match self {
            FacetKey::Culture => "culture",
            FacetKey::Technique => "technique",
            FacetKey::Medium => "medium",
            FacetKey::People => "people",
        }
    }

    /// The backend matches medium case-insensitively only against lower-case values.
    pub fn normalize(&self, value: &str) -> String {
        match self {
            FacetKey::Medium => value.to_lowercase(),
            _ => value.to_string(),
        }
    }
}

impl fmt::Display for FacetKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl std::str::FromStr for FacetKey {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "culture" => Ok(FacetKey::Culture),
            "technique" => Ok(FacetKey::Technique),
            "medium" => Ok(FacetKey::Medium),
            "people" | "person" => Ok(FacetKey::People),
            other => Err(format!("unknown facet key: {}", other)),
        }
    }
}
