use log::Level;

/// Scroll offset past which the header switches to its sticky layout.
pub const STICKY_OFFSET: f64 = 100.0;
/// Below this offset the header is always shown, whichever way the page moves.
pub const HEADER_HIDE_FLOOR: f64 = 200.0;
pub const BACK_TO_TOP_OFFSET: f64 = 600.0;

/// Distance from the bottom of the viewport a block has to cross before it is revealed.
pub const REVEAL_MARGIN: f64 = 100.0;
pub const REVEAL_SELECTORS: &[&str] = &[
    ".service-card",
    ".product-card",
    ".about-content",
    ".testimonials-section",
    ".contact-info",
];

/// Anchor scrolling stops this far above the target, clear of the fixed header.
pub const HEADER_OFFSET: f64 = 80.0;

/// Entrance delay added per card position in a grid.
pub const STAGGER_STEP_MS: u32 = 200;

const DEFAULT_ROTATION_PERIOD_MS: u32 = 5000;
const DEFAULT_LOG_LEVEL: Level = Level::Info;

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct AnimationOptions {
    pub duration: u32,
    pub easing: &'static str,
    pub once: bool,
}

pub const ANIMATION: AnimationOptions = AnimationOptions {
    duration: 800,
    easing: "ease-in-out",
    once: true,
};

pub fn get_rotation_period_ms() -> u32 {
    parse_rotation_period(option_env!("TESTIMONIAL_ROTATION_MS"))
}

pub fn get_log_level() -> Level {
    parse_log_level(option_env!("SITE_LOG_LEVEL"))
}

fn parse_rotation_period(raw: Option<&str>) -> u32 {
    raw.and_then(|value| value.trim().parse::<u32>().ok())
        .filter(|ms| *ms > 0)
        .unwrap_or(DEFAULT_ROTATION_PERIOD_MS)
}

fn parse_log_level(raw: Option<&str>) -> Level {
    raw.and_then(|value| value.trim().parse::<Level>().ok())
        .unwrap_or(DEFAULT_LOG_LEVEL)
}
