use crate::config;

/// Id of the in-page target for an `href`, if it is a real fragment link.
pub fn target_id(href: &str) -> Option<&str> {
    href.strip_prefix('#').filter(|id| !id.is_empty())
}

/// Document offset to scroll to so the target sits just below the fixed header.
pub fn scroll_destination(element_top: f64, scroll_y: f64, header_offset: f64) -> f64 {
    (element_top + scroll_y - header_offset).max(0.0)
}

/// Reveal check for one block: its top edge has come above the bottom margin.
pub fn is_in_view(top: f64, viewport_height: f64, margin: f64) -> bool {
    top < viewport_height - margin
}

/// Inline style that staggers a card's entrance by its position in the grid.
pub fn entrance_delay_style(index: usize) -> String {
    let delay_ms = index as u64 * u64::from(config::STAGGER_STEP_MS);
    format!("transition-delay: {}ms;", delay_ms)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn fragment_links_only() {
        assert_eq!(target_id("#products"), Some("products"));
        assert_eq!(target_id("#"), None);
        assert_eq!(target_id("/about"), None);
        assert_eq!(target_id("https://example.com/#contact"), None);
    }

    #[test]
    fn destination_accounts_for_header() {
        assert_eq!(scroll_destination(300.0, 1000.0, 70.0), 1230.0);
        assert_eq!(scroll_destination(-500.0, 400.0, 70.0), 0.0);
    }

    #[test]
    fn anchor_lands_eighty_pixels_above_target() {
        assert_eq!(scroll_destination(500.0, 0.0, config::HEADER_OFFSET), 420.0);
    }

    #[test]
    fn entrance_delay_steps_by_position() {
        assert_eq!(entrance_delay_style(0), "transition-delay: 0ms;");
        assert_eq!(entrance_delay_style(1), "transition-delay: 200ms;");
        assert_eq!(entrance_delay_style(5), "transition-delay: 1000ms;");
    }

    #[test]
    fn reveal_uses_bottom_margin() {
        assert!(is_in_view(599.0, 700.0, 100.0));
        assert!(!is_in_view(600.0, 700.0, 100.0));
        assert!(is_in_view(-40.0, 700.0, 100.0));
    }
}
