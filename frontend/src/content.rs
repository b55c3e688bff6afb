use std::collections::HashSet;

use serde::Deserialize;

use crate::error::ContentError;
use crate::state::filter::{ProductFilter, ALL_TAG};

const SITE_JSON: &str = include_str!("../content/site.json");

#[derive(Deserialize, Clone, Debug, Default, PartialEq)]
pub struct SiteContent {
    pub brand: String,
    #[serde(default)]
    pub tagline: String,
    #[serde(default)]
    pub nav: Vec<NavLink>,
    #[serde(default)]
    pub about: String,
    #[serde(default)]
    pub services: Vec<Service>,
    #[serde(default)]
    pub filters: Vec<FilterOption>,
    #[serde(default)]
    pub products: Vec<Product>,
    #[serde(default)]
    pub testimonials: Vec<Testimonial>,
    #[serde(default)]
    pub contact: ContactInfo,
}

#[derive(Deserialize, Clone, Debug, PartialEq)]
pub struct NavLink {
    pub label: String,
    pub href: String,
}

#[derive(Deserialize, Clone, Debug, PartialEq)]
pub struct Service {
    pub icon: String,
    pub title: String,
    pub description: String,
}

#[derive(Deserialize, Clone, Debug, PartialEq)]
pub struct FilterOption {
    pub label: String,
    pub tag: String,
}

#[derive(Deserialize, Clone, Debug, PartialEq)]
pub struct Product {
    pub name: String,
    pub price: String,
    #[serde(default)]
    pub description: String,
    pub categories: Vec<String>,
}

#[derive(Deserialize, Clone, Debug, PartialEq)]
pub struct Testimonial {
    pub quote: String,
    pub author: String,
    #[serde(default)]
    pub role: String,
}

#[derive(Deserialize, Clone, Debug, Default, PartialEq)]
pub struct ContactInfo {
    pub address: String,
    pub phone: String,
    pub email: String,
}

impl SiteContent {
    pub fn from_json(raw: &str) -> Result<Self, ContentError> {
        let content: SiteContent = serde_json::from_str(raw)?;
        if content.filters.is_empty() {
            return Ok(content);
        }

        // One button per filter, so exactly one of them can be marked active.
        let mut seen = HashSet::new();
        for option in &content.filters {
            let filter = ProductFilter::from_tag(&option.tag);
            if !seen.insert(filter.tag().to_string()) {
                return Err(ContentError::DuplicateFilter(filter.tag().to_string()));
            }
        }
        if !seen.contains(ALL_TAG) {
            return Err(ContentError::MissingAllFilter);
        }
        Ok(content)
    }

    /// Bundled page copy. Falls back to empty content so every section degrades to nothing.
    pub fn load() -> Self {
        match Self::from_json(SITE_JSON) {
            Ok(content) => content,
            Err(e) => {
                log::error!("Using empty site content: {}", e);
                Self::default()
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn bundled_content_parses() {
        let content = SiteContent::from_json(SITE_JSON).expect("bundled content");
        assert!(!content.products.is_empty());
        assert!(!content.testimonials.is_empty());
        assert_eq!(content.filters[0].tag, ALL_TAG);
    }

    #[test]
    fn every_bundled_filter_matches_something() {
        let content = SiteContent::load();
        for filter in content.filters.iter().filter(|f| f.tag != ALL_TAG) {
            assert!(
                content.products.iter().any(|p| p.categories.contains(&filter.tag)),
                "filter {} hides every product",
                filter.tag
            );
        }
    }

    #[test]
    fn filters_without_all_are_rejected() {
        let raw = r#"{"brand": "x", "filters": [{"label": "Web", "tag": "web"}]}"#;
        assert!(matches!(
            SiteContent::from_json(raw),
            Err(ContentError::MissingAllFilter)
        ));
    }

    #[test]
    fn filters_that_collapse_to_the_same_tag_are_rejected() {
        let raw = r#"{"brand": "x", "filters": [
            {"label": "All", "tag": "all"},
            {"label": "Everything", "tag": "ALL"},
            {"label": "Web", "tag": "web"}
        ]}"#;
        assert!(matches!(
            SiteContent::from_json(raw),
            Err(ContentError::DuplicateFilter(tag)) if tag == "all"
        ));

        let raw = r#"{"brand": "x", "filters": [
            {"label": "All", "tag": "all"},
            {"label": "Web", "tag": "web"},
            {"label": "Sites", "tag": " web "}
        ]}"#;
        assert!(matches!(
            SiteContent::from_json(raw),
            Err(ContentError::DuplicateFilter(tag)) if tag == "web"
        ));
    }

    #[test]
    fn bundled_filters_have_exactly_one_active_button() {
        let content = SiteContent::load();
        let active = ProductFilter::default();
        let marked = content
            .filters
            .iter()
            .filter(|f| ProductFilter::from_tag(&f.tag) == active)
            .count();
        assert_eq!(marked, 1);
    }

    #[test]
    fn sections_are_optional() {
        let content = SiteContent::from_json(r#"{"brand": "Bare"}"#).expect("minimal content");
        assert_eq!(content.brand, "Bare");
        assert!(content.testimonials.is_empty());
        assert_eq!(content.contact, ContactInfo::default());
    }

    #[test]
    fn malformed_json_is_a_parse_error() {
        assert!(matches!(
            SiteContent::from_json("{ brand"),
            Err(ContentError::Parse(_))
        ));
    }
}
