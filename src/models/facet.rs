// file: src/models/facet.rs
// description: vocabulary entries for the century and classification selectors

use serde::{Deserialize, Deserializer, Serialize};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FacetOption {
    #[serde(deserialize_with = "string_or_number")]
    pub id: String,
    #[serde(default)]
    pub name: String,
}

impl FacetOption {
    pub fn new(id: impl Into<String>, name: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
        }
    }
}

// The remote vocabulary endpoints emit numeric ids.
fn string_or_number<'de, D>(deserializer: D) -> std::result::Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    #[derive(Deserialize)]
    #[serde(untagged)]
    enum Id {
        Text(String),
        Number(i64),
    }

    Ok(match Id::deserialize(deserializer)? {
        Id::Text(text) => text,
        Id::Number(number) => number.to_string(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_numeric_id_becomes_string() {
        let option: FacetOption =
            serde_json::from_str(r#"{"id": 37525553, "name": "19th century", "objectcount": 4}"#)
                .unwrap();
        assert_eq!(option, FacetOption::new("37525553", "19th century"));
    }

    #[test]
    fn test_string_id_kept() {
        let option: FacetOption =
            serde_json::from_str(r#"{"id": "26", "name": "Paintings"}"#).unwrap();
        assert_eq!(option.id, "26");
    }
}
