pub const ALL_TAG: &str = "all";

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub enum ProductFilter {
    #[default]
    All,
    Category(String),
}

impl ProductFilter {
    pub fn from_tag(tag: &str) -> Self {
        let tag = tag.trim();
        if tag.is_empty() || tag.eq_ignore_ascii_case(ALL_TAG) {
            ProductFilter::All
        } else {
            ProductFilter::Category(tag.to_string())
        }
    }

    pub fn tag(&self) -> &str {
        match self {
            ProductFilter::All => ALL_TAG,
            ProductFilter::Category(tag) => tag,
        }
    }

    /// Whether a product carrying `categories` stays visible under this filter.
    pub fn matches<S: AsRef<str>>(&self, categories: &[S]) -> bool {
        match self {
            ProductFilter::All => true,
            ProductFilter::Category(tag) => categories.iter().any(|c| c.as_ref() == tag),
        }
    }

    /// Positions of the entries left visible, given each entry's category list.
    pub fn visible_indices<S: AsRef<str>>(&self, entries: &[&[S]]) -> Vec<usize> {
        entries
            .iter()
            .enumerate()
            .filter(|(_, categories)| self.matches(**categories))
            .map(|(i, _)| i)
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const CATALOG: &[(&str, &[&str])] = &[
        ("Starter Site", &["web"]),
        ("Brand Kit", &["design", "branding"]),
        ("Store Setup", &["web", "ecommerce"]),
        ("Campaign", &["marketing"]),
    ];

    fn visible(filter: &ProductFilter) -> Vec<&'static str> {
        CATALOG
            .iter()
            .filter(|(_, categories)| filter.matches(*categories))
            .map(|(name, _)| *name)
            .collect()
    }

    #[test]
    fn all_shows_everything() {
        assert_eq!(visible(&ProductFilter::from_tag("all")).len(), CATALOG.len());
    }

    #[test]
    fn category_shows_exact_members() {
        assert_eq!(
            visible(&ProductFilter::from_tag("web")),
            vec!["Starter Site", "Store Setup"]
        );
        assert_eq!(visible(&ProductFilter::from_tag("branding")), vec!["Brand Kit"]);
        assert!(visible(&ProductFilter::from_tag("print")).is_empty());
    }

    #[test]
    fn visible_set_changes_when_switching_filters() {
        let entries: Vec<&[&str]> = CATALOG.iter().map(|(_, categories)| *categories).collect();
        let everything = ProductFilter::All.visible_indices(entries.as_slice());
        let marketing = ProductFilter::from_tag("marketing").visible_indices(entries.as_slice());
        assert_eq!(everything, vec![0, 1, 2, 3]);
        assert_eq!(marketing, vec![3]);
        assert_ne!(everything, marketing);
        assert_eq!(
            ProductFilter::from_tag("design").visible_indices(entries.as_slice()),
            ProductFilter::from_tag("branding").visible_indices(entries.as_slice())
        );
    }

    #[test]
    fn tag_round_trips_through_from_tag() {
        assert_eq!(ProductFilter::from_tag(" ALL ").tag(), "all");
        assert_eq!(ProductFilter::from_tag("design").tag(), "design");
        assert_eq!(ProductFilter::from_tag(""), ProductFilter::All);
    }
}
