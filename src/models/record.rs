// file: src/models/record.rs
// description: loosely-shaped collection object returned by search endpoints
// reference: Harvard Art Museums object records, every field may be missing or null

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct SearchResultItem {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub dated: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub culture: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub technique: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub medium: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub dimensions: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub division: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub creditline: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub peoplecount: Option<i64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub people: Option<Vec<Person>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub imagecount: Option<i64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub images: Option<Vec<Image>>,

    /// Fields this crate never inspects, kept so records survive a round trip.
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Person {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub displayname: Option<String>,
}

impl Person {
    pub fn display_name(&self) -> Option<&str> {
        self.name.as_deref().or(self.displayname.as_deref())
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Image {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub baseimageurl: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub alttext: Option<String>,
}

impl Image {
    pub fn alt(&self) -> Option<&str> {
        self.title.as_deref().or(self.alttext.as_deref())
    }
}

impl SearchResultItem {
    /// People to render, gated on `peoplecount` and tolerant of a missing array.
    pub fn listed_people(&self) -> &[Person] {
        gated(self.peoplecount, self.people.as_deref())
    }

    /// Images to render, gated on `imagecount` and tolerant of a missing array.
    pub fn listed_images(&self) -> &[Image] {
        gated(self.imagecount, self.images.as_deref())
    }

    pub fn display_title(&self) -> &str {
        self.title.as_deref().unwrap_or("")
    }
}

fn gated<T>(count: Option<i64>, entries: Option<&[T]>) -> &[T] {
    match (count, entries) {
        (Some(count), Some(entries)) if count > 0 => entries,
        _ => &[],
    }
}
