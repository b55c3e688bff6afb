use std::cell::RefCell;
use std::rc::Rc;

use wasm_bindgen::prelude::Closure;
use wasm_bindgen::JsCast;
use yew::prelude::*;

use crate::config;
use crate::error::DomError;
use crate::state::scroll::{ScrollState, ScrollThresholds, ScrollView};
use crate::utils::dom;

/// Listens to window scrolling for the lifetime of the calling component and
/// returns the current header / back-to-top presentation. Each scroll event
/// also runs the reveal check over the content blocks.
#[hook]
pub fn use_scroll_coordinator() -> ScrollView {
    let view = use_state_eq(ScrollView::default);

    {
        let view = view.clone();
        use_effect_with_deps(
            move |_| {
                let destructor: Box<dyn FnOnce()> = match dom::window() {
                    Ok(window) => {
                        let thresholds = ScrollThresholds::default();
                        let state = Rc::new(RefCell::new(ScrollState::default()));
                        let on_scroll = move || {
                            match dom::scroll_offset() {
                                Ok(offset) => view.set(state.borrow_mut().observe(offset, &thresholds)),
                                Err(e) => log::debug!("Skipping scroll sample: {}", e),
                            }
                            if let Err(e) =
                                dom::reveal_in_view(config::REVEAL_SELECTORS, config::REVEAL_MARGIN)
                            {
                                log::debug!("Reveal check failed: {}", e);
                            }
                        };
                        // Initial sample, for pages restored part way down
                        on_scroll();

                        let callback = Closure::<dyn Fn()>::new(on_scroll);
                        match window.add_event_listener_with_callback(
                            "scroll",
                            callback.as_ref().unchecked_ref(),
                        ) {
                            Ok(()) => Box::new(move || {
                                if let Err(e) = window.remove_event_listener_with_callback(
                                    "scroll",
                                    callback.as_ref().unchecked_ref(),
                                ) {
                                    log::warn!("Failed to detach scroll listener: {}", DomError::from(e));
                                }
                            }),
                            Err(e) => {
                                log::warn!("Failed to attach scroll listener: {}", DomError::from(e));
                                Box::new(|| ())
                            }
                        }
                    }
                    Err(e) => {
                        log::warn!("Scroll effects disabled: {}", e);
                        Box::new(|| ())
                    }
                };
                move || {
                    destructor();
                }
            },
            (),
        );
    }

    *view
}
