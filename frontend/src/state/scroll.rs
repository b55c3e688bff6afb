use crate::config;

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ScrollThresholds {
    pub sticky: f64,
    pub hide_floor: f64,
    pub back_to_top: f64,
}

impl Default for ScrollThresholds {
    fn default() -> Self {
        Self {
            sticky: config::STICKY_OFFSET,
            hide_floor: config::HEADER_HIDE_FLOOR,
            back_to_top: config::BACK_TO_TOP_OFFSET,
        }
    }
}

/// What the header and the back-to-top button should look like after a scroll sample.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct ScrollView {
    pub sticky: bool,
    pub header_hidden: bool,
    pub back_to_top_visible: bool,
}

impl ScrollView {
    pub fn header_transform(&self) -> &'static str {
        if self.header_hidden {
            "transform: translateY(-100%);"
        } else {
            "transform: translateY(0);"
        }
    }
}

/// The only thing remembered between scroll events is the previous offset.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct ScrollState {
    pub last_offset: f64,
}

impl ScrollState {
    pub fn observe(&mut self, offset: f64, thresholds: &ScrollThresholds) -> ScrollView {
        let scrolling_down = offset > self.last_offset;
        self.last_offset = offset;

        ScrollView {
            sticky: offset > thresholds.sticky,
            header_hidden: scrolling_down && offset > thresholds.hide_floor,
            back_to_top_visible: offset > thresholds.back_to_top,
        }
    }
}
