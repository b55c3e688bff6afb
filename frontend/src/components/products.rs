use web_sys::MouseEvent;
use yew::prelude::*;

use crate::config;
use crate::content::{FilterOption, Product};
use crate::state::filter::ProductFilter;
use crate::state::viewport::entrance_delay_style;
use crate::utils::dom;

#[derive(Properties, PartialEq, Clone)]
pub struct ProductGridProps {
    pub filters: Vec<FilterOption>,
    pub products: Vec<Product>,
}

#[function_component]
pub fn ProductGrid(props: &ProductGridProps) -> Html {
    let active = use_state(ProductFilter::default);

    let buttons = props
        .filters
        .iter()
        .map(|option| {
            let filter = ProductFilter::from_tag(&option.tag);
            let is_active = *active == filter;
            let onclick = {
                let active = active.clone();
                Callback::from(move |_: MouseEvent| {
                    log::debug!("Product filter set to {}", filter.tag());
                    active.set(filter.clone());
                })
            };
            html! {
                <button
                    class={classes!("filter-btn", is_active.then(|| "active"))}
                    data-filter={option.tag.clone()}
                    {onclick}
                >
                    {&option.label}
                </button>
            }
        })
        .collect::<Html>();

    let categories = props
        .products
        .iter()
        .map(|product| product.categories.as_slice())
        .collect::<Vec<_>>();
    let visible = active.visible_indices(categories.as_slice());

    // Cards that move into view after a filter change get no scroll event.
    use_effect_with_deps(
        |_| {
            if let Err(e) = dom::reveal_in_view(config::REVEAL_SELECTORS, config::REVEAL_MARGIN) {
                log::debug!("Reveal check after filtering failed: {}", e);
            }
            || ()
        },
        visible.clone(),
    );

    // Cards keep a fixed class list so the reveal marker added outside yew survives filtering.
    let cards = props
        .products
        .iter()
        .enumerate()
        .map(|(i, product)| {
            html! {
                <div
                    class="product-card"
                    data-category={product.categories.join(" ")}
                    style={entrance_delay_style(i)}
                    hidden={!visible.contains(&i)}
                >
                    <h3>{&product.name}</h3>
                    <p class="product-description">{&product.description}</p>
                    <span class="product-price">{&product.price}</span>
                </div>
            }
        })
        .collect::<Html>();

    html! {
        <>
            <div class="filter-buttons">{buttons}</div>
            <div class="product-grid">{cards}</div>
        </>
    }
}
