use chrono::{Datelike, Utc};
use yew::prelude::*;

use crate::config;
use crate::content::{FOOTER_ADDRESS, NAV_ITEMS, SOCIAL_ICONS};

#[function_component(Footer)]
pub fn footer() -> Html {
    let year = Utc::now().year();

    html! {
        <footer class="footer">
            <div class="footer-grid">
                <div>
                    <h3>{config::BRAND_NAME}</h3>
                    <p class="muted">{"Your trusted source for accurate weather forecasts."}</p>
                </div>
                <div>
                    <h4>{"Quick Links"}</h4>
                    <ul class="footer-links">
                        { for NAV_ITEMS.iter().map(|item| html! {
                            <li key={item.label}><a href={item.anchor}>{item.label}</a></li>
                        }) }
                    </ul>
                </div>
                <div>
                    <h4>{"Follow Us"}</h4>
                    <div class="social-links">
                        { for SOCIAL_ICONS.iter().map(|icon| html! {
                            <a href="#" class="social-link">{*icon}</a>
                        }) }
                    </div>
                </div>
                <div>
                    <h4>{"Contact Us"}</h4>
                    { for FOOTER_ADDRESS.iter().map(|line| html! { <p class="muted">{*line}</p> }) }
                </div>
            </div>
            <div class="footer-bottom">
                <p>{format!("© {} {}. All rights reserved.", year, config::BRAND_NAME)}</p>
            </div>
        </footer>
    }
}
