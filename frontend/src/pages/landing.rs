use web_sys::MouseEvent;
use yew::prelude::*;

use crate::components::back_to_top::BackToTop;
use crate::components::contact::ContactForm;
use crate::components::header::SiteHeader;
use crate::components::products::ProductGrid;
use crate::components::testimonials::TestimonialCarousel;
use crate::config;
use crate::content::SiteContent;
use crate::hooks::use_scroll_coordinator;
use crate::state::viewport::entrance_delay_style;
use crate::utils::dom;

#[function_component(Landing)]
pub fn landing() -> Html {
    let content = use_memo(|_| SiteContent::load(), ());
    let scroll = use_scroll_coordinator();

    // Animate-on-scroll is optional; the page works the same without it
    {
        use_effect_with_deps(
            move |_| {
                match dom::init_animation_library(&config::ANIMATION) {
                    Ok(true) => log::debug!("Animation library initialized"),
                    Ok(false) => log::debug!("Animation library not loaded, skipping"),
                    Err(e) => log::warn!("Animation library failed to initialize: {}", e),
                }
                || ()
            },
            (),
        );
    }

    let on_cta = Callback::from(|e: MouseEvent| dom::follow_anchor(&e, "#products"));

    let services = content
        .services
        .iter()
        .enumerate()
        .map(|(i, service)| {
            html! {
                <div class="service-card" data-aos="fade-up" style={entrance_delay_style(i)}>
                    <i class={classes!("fas", service.icon.clone())}></i>
                    <h3>{&service.title}</h3>
                    <p>{&service.description}</p>
                </div>
            }
        })
        .collect::<Html>();

    html! {
        <div class="landing-page">
            <SiteHeader
                brand={content.brand.clone()}
                links={content.nav.clone()}
                scroll={scroll}
            />

            <section id="home" class="hero">
                <div class="hero-content">
                    <h1 class="hero-title">{&content.brand}</h1>
                    <p class="hero-subtitle">{&content.tagline}</p>
                    <a href="#products" class="btn btn-primary" onclick={on_cta}>{"See what we offer"}</a>
                </div>
            </section>

            <section id="about" class="about-section">
                <div class="about-content" data-aos="fade-right">
                    <h2>{"About Us"}</h2>
                    <p>{&content.about}</p>
                </div>
            </section>

            <section id="services" class="services-section">
                <h2>{"Services"}</h2>
                <div class="services-grid">{services}</div>
            </section>

            <section id="products" class="products-section">
                <h2>{"Products"}</h2>
                <ProductGrid
                    filters={content.filters.clone()}
                    products={content.products.clone()}
                />
            </section>

            <section id="testimonials" class="testimonials-section">
                <h2>{"What Clients Say"}</h2>
                <TestimonialCarousel
                    testimonials={content.testimonials.clone()}
                    rotation_ms={config::get_rotation_period_ms()}
                />
            </section>

            <section id="contact" class="contact-section">
                <h2>{"Get in Touch"}</h2>
                <div class="contact-layout">
                    <div class="contact-info">
                        <p><i class="fas fa-map-marker-alt"></i>{&content.contact.address}</p>
                        <p><i class="fas fa-phone"></i>{&content.contact.phone}</p>
                        <p><i class="fas fa-envelope"></i>{&content.contact.email}</p>
                    </div>
                    <ContactForm />
                </div>
            </section>

            <footer class="site-footer">
                <p>{format!("© {}. All rights reserved.", content.brand)}</p>
            </footer>

            <BackToTop visible={scroll.back_to_top_visible} />
        </div>
    }
}
