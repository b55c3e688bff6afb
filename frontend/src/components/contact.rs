use web_sys::{HtmlInputElement, HtmlTextAreaElement};
use yew::prelude::*;

use crate::state::contact::{ContactErrors, ContactFieldError, ContactFields};

fn field_error(error: Option<ContactFieldError>) -> Html {
    match error {
        Some(error) => html! { <span class="error-message">{error.to_string()}</span> },
        None => html! {},
    }
}

/// Contact form with inline validation. A clean submission only swaps in a
/// confirmation; nothing leaves the browser.
#[function_component]
pub fn ContactForm() -> Html {
    let name = use_state(String::new);
    let email = use_state(String::new);
    let message = use_state(String::new);
    let errors = use_state(ContactErrors::default);
    let submitted = use_state(|| false);

    let onsubmit = {
        let name = name.clone();
        let email = email.clone();
        let message = message.clone();
        let errors = errors.clone();
        let submitted = submitted.clone();
        Callback::from(move |e: SubmitEvent| {
            e.prevent_default();
            let fields = ContactFields {
                name: (*name).clone(),
                email: (*email).clone(),
                message: (*message).clone(),
            };
            let verdict = fields.validate();
            errors.set(verdict);
            if verdict.is_clean() {
                log::info!("Contact form passed validation, showing confirmation");
                submitted.set(true);
            }
        })
    };

    if *submitted {
        return html! {
            <div class="form-success">
                <i class="fas fa-check-circle"></i>
                <h3>{"Thank you!"}</h3>
                <p>{"Your message has been sent successfully. We'll get back to you soon."}</p>
            </div>
        };
    }

    let on_name = {
        let name = name.clone();
        Callback::from(move |e: InputEvent| {
            let input: HtmlInputElement = e.target_unchecked_into();
            name.set(input.value());
        })
    };
    let on_email = {
        let email = email.clone();
        Callback::from(move |e: InputEvent| {
            let input: HtmlInputElement = e.target_unchecked_into();
            email.set(input.value());
        })
    };
    let on_message = {
        let message = message.clone();
        Callback::from(move |e: InputEvent| {
            let input: HtmlTextAreaElement = e.target_unchecked_into();
            message.set(input.value());
        })
    };

    html! {
        <form id="contact-form" class="contact-form" novalidate=true {onsubmit}>
            <div class="form-group">
                <input
                    type="text"
                    id="name"
                    placeholder="Your Name"
                    class={classes!(errors.name.is_some().then(|| "error"))}
                    value={(*name).clone()}
                    oninput={on_name}
                />
                {field_error(errors.name)}
            </div>
            <div class="form-group">
                <input
                    type="email"
                    id="email"
                    placeholder="Your Email"
                    class={classes!(errors.email.is_some().then(|| "error"))}
                    value={(*email).clone()}
                    oninput={on_email}
                />
                {field_error(errors.email)}
            </div>
            <div class="form-group">
                <textarea
                    id="message"
                    rows="5"
                    placeholder="Your Message"
                    class={classes!(errors.message.is_some().then(|| "error"))}
                    value={(*message).clone()}
                    oninput={on_message}
                ></textarea>
                {field_error(errors.message)}
            </div>
            <button type="submit" class="btn btn-primary">{"Send Message"}</button>
        </form>
    }
}
