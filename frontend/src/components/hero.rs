use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use yew::prelude::*;

use crate::config;

/// Vertical offset of the hero background, in percent of its height, for the
/// given scroll position. Grows linearly while the hero scrolls out of view.
pub fn parallax_offset_percent(scroll_y: f64, hero_height: f64) -> f64 {
    if hero_height <= 0.0 || !scroll_y.is_finite() {
        return 0.0;
    }
    (scroll_y / hero_height).clamp(0.0, 1.0) * config::HERO_PARALLAX_MAX_PERCENT
}

#[function_component(Hero)]
pub fn hero() -> Html {
    let offset = use_state(|| 0.0_f64);

    {
        let offset = offset.clone();
        use_effect_with_deps(
            move |_| {
                let window = web_sys::window();
                let listener = window.clone().map(|window| {
                    let window_clone = window.clone();
                    let scroll_callback = Closure::wrap(Box::new(move || {
                        let scroll_y = window_clone.scroll_y().unwrap_or(0.0);
                        let hero_height = window_clone
                            .inner_height()
                            .ok()
                            .and_then(|h| h.as_f64())
                            .unwrap_or(0.0);
                        offset.set(parallax_offset_percent(scroll_y, hero_height));
                    }) as Box<dyn FnMut()>);

                    let _ = window.add_event_listener_with_callback(
                        "scroll",
                        scroll_callback.as_ref().unchecked_ref(),
                    );
                    scroll_callback
                });

                move || {
                    if let (Some(window), Some(scroll_callback)) = (window, listener) {
                        let _ = window.remove_event_listener_with_callback(
                            "scroll",
                            scroll_callback.as_ref().unchecked_ref(),
                        );
                    }
                }
            },
            (),
        );
    }

    html! {
        <section id="home" class="hero" style={format!("transform: translateY({:.2}%);", *offset)}>
            <div class="hero-background"></div>
            <div class="hero-content">
                <h1 class="hero-title fade-in-up">{"Your Weather, Your Way"}</h1>
                <p class="hero-subtitle fade-in-up delayed">
                    {"Stay informed with real-time weather updates"}
                </p>
            </div>
        </section>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_offset_at_top_is_zero() {
        assert_eq!(parallax_offset_percent(0.0, 900.0), 0.0);
    }

    #[test]
    fn test_offset_is_linear_within_hero() {
        assert!((parallax_offset_percent(450.0, 900.0) - 25.0).abs() < 1e-9);
    }

    #[test]
    fn test_offset_is_clamped() {
        assert_eq!(parallax_offset_percent(5_000.0, 900.0), 50.0);
        assert_eq!(parallax_offset_percent(-20.0, 900.0), 0.0);
    }

    #[test]
    fn test_degenerate_height() {
        assert_eq!(parallax_offset_percent(100.0, 0.0), 0.0);
        assert_eq!(parallax_offset_percent(f64::NAN, 900.0), 0.0);
    }
}
