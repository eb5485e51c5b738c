use yew::prelude::*;

use crate::components::{
    contact_form::ContactForm, footer::Footer, hero::Hero, newsletter::Newsletter,
    weather_card::WeatherCard,
};
use crate::contact::{ContactSubmission, LogSink, SubmissionSink};
use crate::content::{ABOUT_PARAGRAPHS, PACKAGES, SERVICES, TESTIMONIALS};

#[function_component(Landing)]
pub fn landing() -> Html {
    // Scroll to top only on initial mount
    use_effect_with_deps(
        move |_| {
            if let Some(window) = web_sys::window() {
                window.scroll_to_with_x_and_y(0.0, 0.0);
            }
            || ()
        },
        (),
    );

    let record_submission = Callback::from(|submission: ContactSubmission| {
        LogSink.record(submission);
    });

    html! {
        <div class="landing-page">
            <Hero />
            <WeatherCard />

            <section id="services" class="services">
                <div class="section">
                    <h2>{"Our Services"}</h2>
                    <div class="card-grid">
                        { for SERVICES.iter().enumerate().map(|(index, service)| html! {
                            <div key={service.title} class="glass-card fade-in-up" style={stagger(index)}>
                                <div class="service-icon">{service.icon}</div>
                                <h3>{service.title}</h3>
                                <p class="muted">{service.description}</p>
                            </div>
                        }) }
                    </div>
                </div>
            </section>

            <section id="about" class="about">
                <div class="section about-layout">
                    <div class="about-text fade-in-left">
                        <h2>{"About WeatherNow"}</h2>
                        { for ABOUT_PARAGRAPHS.iter().map(|paragraph| html! {
                            <p class="muted">{*paragraph}</p>
                        }) }
                    </div>
                    <div class="about-image fade-in-right">
                        <img src="/assets/about.svg" loading="lazy" alt="About WeatherNow" />
                    </div>
                </div>
            </section>

            <section class="testimonials">
                <div class="section">
                    <h2>{"What Our Users Say"}</h2>
                    <div class="card-grid">
                        { for TESTIMONIALS.iter().enumerate().map(|(index, testimonial)| html! {
                            <div key={testimonial.name} class="glass-card fade-in-up" style={stagger(index)}>
                                <p class="muted">{format!("\"{}\"", testimonial.text)}</p>
                                <p class="testimonial-name">{testimonial.name}</p>
                            </div>
                        }) }
                    </div>
                </div>
            </section>

            <section class="packages">
                <div class="section">
                    <h2>{"Our Packages"}</h2>
                    <div class="card-grid">
                        { for PACKAGES.iter().enumerate().map(|(index, package)| html! {
                            <div key={package.name} class="glass-card fade-in-up" style={stagger(index)}>
                                <h3 class="package-name">{package.name}</h3>
                                <p class="package-price">{package.price}</p>
                                <ul class="feature-list">
                                    { for package.features.iter().map(|feature| html! {
                                        <li key={*feature}>{"☀️ "}{*feature}</li>
                                    }) }
                                </ul>
                                <button class="primary-button wide">{"Choose Plan"}</button>
                            </div>
                        }) }
                    </div>
                </div>
            </section>

            <section class="tagline-banner">
                <div class="tagline-background"></div>
                <h2 class="tagline fade-in-up">{"Experience Weather Like Never Before"}</h2>
            </section>

            <ContactForm on_submit={record_submission} />
            <Newsletter />
            <Footer />
        </div>
    }
}

fn stagger(index: usize) -> String {
    format!("animation-delay: {:.1}s;", index as f64 * 0.1)
}
