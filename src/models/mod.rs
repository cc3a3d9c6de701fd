// file: src/models/mod.rs
// description: data models module exports
// reference: internal module structure

pub mod criteria;
pub mod facet;
pub mod record;

pub use criteria::{ANY, FacetKey, QueryCriteria};
pub use facet::FacetOption;
pub use record::{Image, Person, SearchResultItem};
