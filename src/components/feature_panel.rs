// file: src/components/feature_panel.rs
// description: detail view of the featured search result
// reference: https://docs.rs/maud

use crate::components::dispatch::QueryDispatcher;
use crate::components::searchable_fact::SearchableFact;
use crate::models::{FacetKey, Image, SearchResultItem};
use maud::{Markup, Render, html};

pub enum FactValue {
    Searchable(SearchableFact),
    Plain(Option<String>),
}

pub struct FactRow {
    pub label: &'static str,
    pub values: Vec<FactValue>,
}

impl FactRow {
    fn searchable(label: &'static str, fact: SearchableFact) -> Self {
        Self {
            label,
            values: vec![FactValue::Searchable(fact)],
        }
    }

    fn plain(label: &'static str, value: Option<&str>) -> Self {
        Self {
            label,
            values: vec![FactValue::Plain(value.map(str::to_string))],
        }
    }
}

/// Pure view over an optional featured result.
pub struct FeaturePanel<'a> {
    featured: Option<&'a SearchResultItem>,
    dispatcher: QueryDispatcher,
}

impl<'a> FeaturePanel<'a> {
    pub fn new(featured: Option<&'a SearchResultItem>, dispatcher: QueryDispatcher) -> Self {
        Self {
            featured,
            dispatcher,
        }
    }

    pub fn featured(&self) -> Option<&'a SearchResultItem> {
        self.featured
    }

    fn searchable(&self, key: FacetKey, value: Option<&str>) -> SearchableFact {
        SearchableFact::new(key, value, self.dispatcher.clone())
    }

    /// Fact rows in display order: culture, technique, dimensions, people,
    /// division, credit line. Empty when nothing is featured.
    pub fn facts(&self) -> Vec<FactRow> {
        let Some(item) = self.featured else {
            return Vec::new();
        };

        let people = item
            .listed_people()
            .iter()
            .map(|person| {
                FactValue::Searchable(self.searchable(FacetKey::People, person.display_name()))
            })
            .collect();

        vec![
            FactRow::searchable(
                "Culture",
                self.searchable(FacetKey::Culture, item.culture.as_deref()),
            ),
            FactRow::searchable(
                "Technique",
                self.searchable(FacetKey::Technique, item.technique.as_deref()),
            ),
            FactRow::plain("Dimensions", item.dimensions.as_deref()),
            FactRow {
                label: "Person",
                values: people,
            },
            FactRow::plain("Division", item.division.as_deref()),
            FactRow::plain("Credit", item.creditline.as_deref()),
        ]
    }

    /// Medium is not part of the rendered fact rows but is still searchable.
    pub fn medium_fact(&self) -> Option<SearchableFact> {
        let medium = self.featured?.medium.as_deref()?;
        Some(self.searchable(FacetKey::Medium, Some(medium)))
    }

    pub fn photos(&self) -> &'a [Image] {
        self.featured.map(SearchResultItem::listed_images).unwrap_or(&[])
    }

    pub fn searchable_facts(&self) -> Vec<SearchableFact> {
        self.facts()
            .into_iter()
            .flat_map(|row| row.values)
            .filter_map(|value| match value {
                FactValue::Searchable(fact) => Some(fact),
                FactValue::Plain(_) => None,
            })
            .collect()
    }
}

impl Render for FeaturePanel<'_> {
    fn render(&self) -> Markup {
        html! {
            main id="feature" {
                @if let Some(item) = self.featured {
                    div class="object-feature" {
                        header {
                            h3 { (item.display_title()) }
                            h4 { (item.dated.as_deref().unwrap_or("")) }
                        }
                        section class="facts" {
                            @for row in self.facts() {
                                span class="title" { (row.label) }
                                @for value in &row.values {
                                    @match value {
                                        FactValue::Searchable(fact) => { (fact) },
                                        FactValue::Plain(text) => {
                                            span { (text.as_deref().unwrap_or("")) }
                                        },
                                    }
                                }
                            }
                        }
                        section class="photos" {
                            @for image in self.photos() {
                                img src=[image.baseimageurl.as_deref()] alt=[image.alt()];
                            }
                        }
                    }
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::api::scripted::{Call, Reply, ScriptedApi};
    use crate::components::event::UiEvent;
    use crate::state::recording::RecordingOwner;
    use pretty_assertions::assert_eq;
    use std::sync::Arc;

    fn dispatcher() -> QueryDispatcher {
        QueryDispatcher::new(Arc::new(ScriptedApi::new()), RecordingOwner::new())
    }

    fn vase() -> SearchResultItem {
        serde_json::from_value(serde_json::json!({
            "title": "Vase",
            "dated": "100 BCE",
            "culture": "Greek",
            "technique": "Painted",
            "dimensions": "10cm",
            "peoplecount": 1,
            "people": [{"name": "Artisan A"}],
            "division": "Antiquities",
            "creditline": "Gift",
            "imagecount": 1,
            "images": [{"baseimageurl": "http://x/1.jpg", "title": "front"}]
        }))
        .unwrap()
    }

    #[test]
    fn test_no_featured_result_renders_empty_landmark() {
        let panel = FeaturePanel::new(None, dispatcher());

        assert_eq!(panel.render().into_string(), r#"<main id="feature"></main>"#);
        assert!(panel.facts().is_empty());
        assert!(panel.photos().is_empty());
    }

    #[test]
    fn test_featured_result_markup() {
        let item = vase();
        let panel = FeaturePanel::new(Some(&item), dispatcher());

        let expected = concat!(
            r#"<main id="feature"><div class="object-feature">"#,
            r#"<header><h3>Vase</h3><h4>100 BCE</h4></header>"#,
            r#"<section class="facts">"#,
            r#"<span class="title">Culture</span>"#,
            r##"<span class="content"><a href="#">Greek</a></span>"##,
            r#"<span class="title">Technique</span>"#,
            r##"<span class="content"><a href="#">Painted</a></span>"##,
            r#"<span class="title">Dimensions</span><span>10cm</span>"#,
            r#"<span class="title">Person</span>"#,
            r##"<span class="content"><a href="#">Artisan A</a></span>"##,
            r#"<span class="title">Division</span><span>Antiquities</span>"#,
            r#"<span class="title">Credit</span><span>Gift</span>"#,
            r#"</section>"#,
            r#"<section class="photos"><img src="http://x/1.jpg" alt="front"></section>"#,
            r#"</div></main>"#,
        );

        assert_eq!(panel.render().into_string(), expected);
    }

    #[test]
    fn test_fact_order_and_facet_keys() {
        let item = vase();
        let panel = FeaturePanel::new(Some(&item), dispatcher());

        let labels: Vec<_> = panel.facts().iter().map(|row| row.label).collect();
        assert_eq!(
            labels,
            vec!["Culture", "Technique", "Dimensions", "Person", "Division", "Credit"]
        );

        let facets: Vec<_> = panel
            .searchable_facts()
            .iter()
            .map(|fact| (fact.key(), fact.label().to_string()))
            .collect();
        assert_eq!(
            facets,
            vec![
                (FacetKey::Culture, "Greek".to_string()),
                (FacetKey::Technique, "Painted".to_string()),
                (FacetKey::People, "Artisan A".to_string()),
            ]
        );
    }

    #[test]
    fn test_zero_people_count_hides_people() {
        let mut item = vase();
        item.peoplecount = Some(0);
        let panel = FeaturePanel::new(Some(&item), dispatcher());

        assert!(
            panel
                .searchable_facts()
                .iter()
                .all(|fact| fact.key() != FacetKey::People)
        );
        assert!(!panel.render().into_string().contains("Artisan A"));
    }

    #[test]
    fn test_counts_without_arrays_render_nothing() {
        let item = SearchResultItem {
            peoplecount: Some(4),
            imagecount: Some(2),
            ..Default::default()
        };
        let panel = FeaturePanel::new(Some(&item), dispatcher());

        assert!(panel.photos().is_empty());
        let html = panel.render().into_string();
        assert!(html.contains(r#"<section class="photos"></section>"#));
        assert!(html.contains(r#"<header><h3></h3><h4></h4></header>"#));
    }

    #[test]
    fn test_image_without_alt_omits_attribute() {
        let mut item = vase();
        item.images = Some(vec![Image {
            baseimageurl: Some("http://x/2.jpg".to_string()),
            title: None,
            alttext: None,
        }]);
        let panel = FeaturePanel::new(Some(&item), dispatcher());

        assert!(panel.render().into_string().contains(r#"<img src="http://x/2.jpg">"#));
    }

    #[tokio::test]
    async fn test_medium_fact_queries_lowercase() {
        let api = Arc::new(ScriptedApi::new().reply(Reply::Items(vec![])));
        let dispatcher = QueryDispatcher::new(api.clone(), RecordingOwner::new());
        let mut item = vase();
        item.medium = Some("Terracotta".to_string());
        let panel = FeaturePanel::new(Some(&item), dispatcher);

        let medium = panel.medium_fact().unwrap();
        medium.click(&mut UiEvent::new()).await;

        assert_eq!(
            api.calls(),
            vec![Call::Term("medium".to_string(), "terracotta".to_string())]
        );
    }
}
