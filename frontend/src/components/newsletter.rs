use yew::prelude::*;

/// Newsletter signup. Submitting does nothing beyond keeping the page in
/// place; there is no subscription backend.
#[function_component(Newsletter)]
pub fn newsletter() -> Html {
    let onsubmit = Callback::from(|e: SubmitEvent| {
        e.prevent_default();
    });

    html! {
        <section class="newsletter">
            <div class="section-narrow">
                <h2>{"Subscribe to Our Newsletter"}</h2>
                <p class="muted">{"Stay up-to-date with the latest weather news and exclusive forecasts."}</p>
                <form class="newsletter-form" {onsubmit}>
                    <input type="email" placeholder="Enter your email" class="glass-input" />
                    <button type="submit" class="primary-button">{"Subscribe"}</button>
                </form>
            </div>
        </section>
    }
}
