use web_sys::MouseEvent;
use yew::prelude::*;

use crate::content::NavLink;
use crate::state::menu::MenuState;
use crate::state::scroll::ScrollView;
use crate::utils::dom;

#[derive(Properties, PartialEq, Clone)]
pub struct SiteHeaderProps {
    pub brand: String,
    pub links: Vec<NavLink>,
    pub scroll: ScrollView,
}

#[function_component]
pub fn SiteHeader(props: &SiteHeaderProps) -> Html {
    let menu = use_state(MenuState::default);

    let toggle_menu = {
        let menu = menu.clone();
        Callback::from(move |_: MouseEvent| {
            menu.set(menu.toggled());
        })
    };

    let links = props
        .links
        .iter()
        .map(|link| {
            let onclick = {
                let menu = menu.clone();
                let href = link.href.clone();
                Callback::from(move |e: MouseEvent| {
                    menu.set(menu.closed());
                    dom::follow_anchor(&e, &href);
                })
            };
            html! {
                <li>
                    <a href={link.href.clone()} class="nav-link" {onclick}>{&link.label}</a>
                </li>
            }
        })
        .collect::<Html>();

    let on_logo = Callback::from(|e: MouseEvent| dom::follow_anchor(&e, "#home"));

    html! {
        <header
            id="header"
            class={classes!("site-header", props.scroll.sticky.then(|| "sticky"))}
            style={props.scroll.header_transform()}
        >
            <nav class="navbar">
                <a href="#home" class="logo" onclick={on_logo}>{&props.brand}</a>
                <ul class={classes!("nav-menu", menu.open.then(|| "active"))}>
                    {links}
                </ul>
                <button
                    class="menu-toggle"
                    aria-label="Toggle navigation"
                    aria-expanded={menu.open.to_string()}
                    onclick={toggle_menu}
                >
                    <i class={classes!("fas", menu.icon().glyph())}></i>
                </button>
            </nav>
        </header>
    }
}
