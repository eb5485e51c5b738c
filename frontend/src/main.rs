use log::{debug, info};
use yew::prelude::*;
use yew_router::prelude::*;

mod config;
mod contact;
mod content;
mod theme;
mod weather;
mod components {
    pub mod contact_form;
    pub mod footer;
    pub mod header;
    pub mod hero;
    pub mod newsletter;
    pub mod weather_card;
}
mod pages {
    pub mod landing;
    pub mod not_found;
}

use components::header::Header;
use pages::{landing::Landing, not_found::NotFound};
use theme::DisplayMode;

#[derive(Clone, Routable, PartialEq)]
pub enum Route {
    #[at("/")]
    Home,
    #[not_found]
    #[at("/404")]
    NotFound,
}

fn switch(routes: Route) -> Html {
    match routes {
        Route::Home => {
            info!("Rendering Landing page");
            html! { <Landing /> }
        }
        Route::NotFound => {
            info!("Rendering NotFound page");
            html! { <NotFound /> }
        }
    }
}

#[function_component]
fn App() -> Html {
    let mode = use_state(DisplayMode::default);

    let handle_toggle_mode = {
        let mode = mode.clone();
        Callback::from(move |_| {
            let mut next = *mode;
            next.toggle();
            debug!("Display mode switched to {:?}", next);
            mode.set(next);
        })
    };

    html! {
        <BrowserRouter>
            <div class={mode.page_class()}>
                <Header mode={*mode} on_toggle_mode={handle_toggle_mode} />
                <Switch<Route> render={switch} />
            </div>
        </BrowserRouter>
    }
}

fn main() {
    // Initialize console error panic hook for better error messages
    console_error_panic_hook::set_once();

    console_log::init_with_level(config::log_level()).expect("error initializing log");

    info!("Starting application");
    yew::Renderer::<App>::new().render();
}
