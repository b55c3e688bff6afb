use js_sys::{Function, Object, Reflect};
use wasm_bindgen::{JsCast, JsValue};
use web_sys::{Document, Element, MouseEvent, ScrollBehavior, ScrollToOptions, Window};

use crate::config::{self, AnimationOptions};
use crate::error::DomError;
use crate::state::viewport;

pub const REVEALED_CLASS: &str = "revealed";

pub fn window() -> Result<Window, DomError> {
    web_sys::window().ok_or(DomError::NoWindow)
}

fn document(window: &Window) -> Result<Document, DomError> {
    window.document().ok_or(DomError::NoDocument)
}

pub fn scroll_offset() -> Result<f64, DomError> {
    Ok(window()?.scroll_y()?)
}

fn viewport_height(window: &Window) -> Result<f64, DomError> {
    Ok(window.inner_height()?.as_f64().unwrap_or(0.0))
}

/// Marks every block under `selectors` whose top edge is inside the viewport.
/// Already revealed blocks are left as they are.
pub fn reveal_in_view(selectors: &[&str], margin: f64) -> Result<(), DomError> {
    let window = window()?;
    let document = document(&window)?;
    let height = viewport_height(&window)?;
    for selector in selectors {
        let nodes = document.query_selector_all(selector)?;
        for i in 0..nodes.length() {
            let Some(element) = nodes.item(i).and_then(|n| n.dyn_into::<Element>().ok()) else {
                continue;
            };
            let top = element.get_bounding_client_rect().top();
            if viewport::is_in_view(top, height, margin) {
                element.class_list().add_1(REVEALED_CLASS)?;
            }
        }
    }
    Ok(())
}

fn smooth_scroll(window: &Window, top: f64) {
    let options = ScrollToOptions::new();
    options.set_top(top);
    options.set_behavior(ScrollBehavior::Smooth);
    window.scroll_to_with_scroll_to_options(&options);
}

/// Scrolls to the element with `id`, leaving room for the fixed header.
/// Returns false when no such element exists.
pub fn scroll_to_anchor(id: &str, header_offset: f64) -> Result<bool, DomError> {
    let window = window()?;
    let Some(target) = document(&window)?.get_element_by_id(id) else {
        return Ok(false);
    };
    let top = viewport::scroll_destination(
        target.get_bounding_client_rect().top(),
        window.scroll_y()?,
        header_offset,
    );
    smooth_scroll(&window, top);
    Ok(true)
}

/// Click handler body for in-page links. The default jump is only suppressed
/// when the smooth scroll actually happened.
pub fn follow_anchor(e: &MouseEvent, href: &str) {
    let Some(id) = viewport::target_id(href) else {
        return;
    };
    match scroll_to_anchor(id, config::HEADER_OFFSET) {
        Ok(true) => e.prevent_default(),
        Ok(false) => log::debug!("No element with id {}, leaving link to the browser", id),
        Err(err) => log::warn!("Smooth scroll to #{} failed: {}", id, err),
    }
}

pub fn scroll_to_top() -> Result<(), DomError> {
    smooth_scroll(&window()?, 0.0);
    Ok(())
}

/// Calls `AOS.init(...)` when the animate-on-scroll library is loaded on the page.
/// Returns false if it is not there.
pub fn init_animation_library(options: &AnimationOptions) -> Result<bool, DomError> {
    let window = window()?;
    let aos = Reflect::get(&window, &JsValue::from_str("AOS"))?;
    if aos.is_undefined() || aos.is_null() {
        return Ok(false);
    }
    let init = Reflect::get(&aos, &JsValue::from_str("init"))?;
    let Some(init) = init.dyn_ref::<Function>() else {
        return Ok(false);
    };

    let settings = Object::new();
    Reflect::set(&settings, &"duration".into(), &JsValue::from(options.duration))?;
    Reflect::set(&settings, &"easing".into(), &JsValue::from_str(options.easing))?;
    Reflect::set(&settings, &"once".into(), &JsValue::from_bool(options.once))?;
    init.call1(&aos, &settings)?;
    Ok(true)
}
