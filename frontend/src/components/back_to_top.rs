use web_sys::MouseEvent;
use yew::prelude::*;

use crate::utils::dom;

#[derive(Properties, PartialEq)]
pub struct BackToTopProps {
    pub visible: bool,
}

#[function_component]
pub fn BackToTop(props: &BackToTopProps) -> Html {
    let onclick = Callback::from(|e: MouseEvent| match dom::scroll_to_top() {
        Ok(()) => e.prevent_default(),
        Err(err) => log::warn!("Back to top scroll failed: {}", err),
    });

    html! {
        <a
            href="#home"
            class={classes!("back-to-top", props.visible.then(|| "visible"))}
            aria-label="Back to top"
            {onclick}
        >
            <i class="fas fa-arrow-up"></i>
        </a>
    }
}
