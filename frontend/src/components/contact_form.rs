use log::warn;
use web_sys::{HtmlInputElement, HtmlTextAreaElement};
use yew::prelude::*;

use crate::contact::{submit, ContactField, ContactFields, ContactSubmission};

#[derive(Properties, PartialEq)]
pub struct ContactFormProps {
    /// Receives each validated submission.
    pub on_submit: Callback<ContactSubmission>,
}

fn event_value(e: &InputEvent) -> String {
    if let Some(input) = e.target_dyn_into::<HtmlInputElement>() {
        return input.value();
    }
    e.target_dyn_into::<HtmlTextAreaElement>()
        .map(|textarea| textarea.value())
        .unwrap_or_default()
}

#[function_component(ContactForm)]
pub fn contact_form(props: &ContactFormProps) -> Html {
    let fields = use_state(ContactFields::default);
    let missing = use_state(Vec::<ContactField>::new);

    let oninput = |field: ContactField| {
        let fields = fields.clone();
        let missing = missing.clone();
        Callback::from(move |e: InputEvent| {
            let mut next = (*fields).clone();
            next.set(field, event_value(&e));
            if !next.get(field).is_empty() && missing.contains(&field) {
                missing.set(missing.iter().copied().filter(|f| *f != field).collect());
            }
            fields.set(next);
        })
    };

    let onsubmit = {
        let fields = fields.clone();
        let missing = missing.clone();
        let on_submit = props.on_submit.clone();
        Callback::from(move |e: SubmitEvent| {
            e.prevent_default();
            match submit(&fields, &on_submit) {
                Ok(()) => missing.set(Vec::new()),
                Err(err) => {
                    let missing_fields = fields.missing_fields();
                    warn!("Contact form not submitted: {} ({:?})", err, missing_fields);
                    missing.set(missing_fields);
                }
            }
        })
    };

    let field_class = |field: ContactField| {
        classes!("glass-input", missing.contains(&field).then(|| "field-missing"))
    };
    let is_missing = |field: ContactField| missing.contains(&field).to_string();

    html! {
        <section id="contact" class="contact">
            <div class="section-narrow">
                <h2>{"Contact Us"}</h2>
                <form class="contact-form" {onsubmit} novalidate={true}>
                    <div class="form-field">
                        <label for="name">{"Name"}</label>
                        <input
                            type="text"
                            id="name"
                            class={field_class(ContactField::Name)}
                            aria-invalid={is_missing(ContactField::Name)}
                            placeholder="Your name"
                            value={fields.name.clone()}
                            oninput={oninput(ContactField::Name)}
                        />
                    </div>
                    <div class="form-field">
                        <label for="email">{"Email"}</label>
                        <input
                            type="email"
                            id="email"
                            class={field_class(ContactField::Email)}
                            aria-invalid={is_missing(ContactField::Email)}
                            placeholder="Your email"
                            value={fields.email.clone()}
                            oninput={oninput(ContactField::Email)}
                        />
                    </div>
                    <div class="form-field">
                        <label for="message">{"Message"}</label>
                        <textarea
                            id="message"
                            rows="4"
                            class={field_class(ContactField::Message)}
                            aria-invalid={is_missing(ContactField::Message)}
                            placeholder="Your message"
                            value={fields.message.clone()}
                            oninput={oninput(ContactField::Message)}
                        />
                    </div>
                    <button type="submit" class="primary-button wide">{"Send Message"}</button>
                </form>
            </div>
        </section>
    }
}
