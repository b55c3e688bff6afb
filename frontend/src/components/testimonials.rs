use gloo_timers::callback::Interval;
use web_sys::MouseEvent;
use yew::prelude::*;

use crate::content::Testimonial;
use crate::state::testimonials::{TestimonialAction, TestimonialState};

#[derive(Properties, PartialEq, Clone)]
pub struct TestimonialCarouselProps {
    pub testimonials: Vec<Testimonial>,
    pub rotation_ms: u32,
}

#[function_component]
pub fn TestimonialCarousel(props: &TestimonialCarouselProps) -> Html {
    let len = props.testimonials.len();
    let carousel = use_reducer(|| TestimonialState::new(len));

    // Rotation never pauses, even when the carousel is off screen. A new list
    // length resets the position before the timer is armed again.
    {
        let dispatcher = carousel.dispatcher();
        use_effect_with_deps(
            move |(len, period)| {
                dispatcher.dispatch(TestimonialAction::Reset(*len));
                let interval = if *len > 0 {
                    Some(Interval::new(*period, move || {
                        dispatcher.dispatch(TestimonialAction::Tick)
                    }))
                } else {
                    None
                };
                move || drop(interval)
            },
            (len, props.rotation_ms),
        );
    }

    if carousel.is_empty() {
        return html! {};
    }

    let slides = props
        .testimonials
        .iter()
        .enumerate()
        .map(|(i, testimonial)| {
            html! {
                <div class={classes!("testimonial", carousel.is_active(i).then(|| "active"))}>
                    <blockquote>{&testimonial.quote}</blockquote>
                    <p class="testimonial-author">{format!("- {}", testimonial.author)}</p>
                    <p class="testimonial-role">{&testimonial.role}</p>
                </div>
            }
        })
        .collect::<Html>();

    let dots = (0..carousel.len())
        .map(|i| {
            let onclick = {
                let dispatcher = carousel.dispatcher();
                Callback::from(move |_: MouseEvent| {
                    dispatcher.dispatch(TestimonialAction::Select(i))
                })
            };
            html! {
                <button
                    class={classes!("dot", carousel.is_active(i).then(|| "active"))}
                    aria-label={format!("Show testimonial {}", i + 1)}
                    {onclick}
                ></button>
            }
        })
        .collect::<Html>();

    html! {
        <div class="testimonial-slider">
            {slides}
            <div class="testimonial-dots">{dots}</div>
        </div>
    }
}
