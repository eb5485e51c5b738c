use yew::prelude::*;
use yew_router::prelude::*;

use crate::Route;

#[function_component(NotFound)]
pub fn not_found() -> Html {
    html! {
        <div class="not-found">
            <h1>{"Page not found"}</h1>
            <p class="muted">{"The forecast for this page is clear skies and nothing else."}</p>
            <Link<Route> to={Route::Home} classes="primary-button">
                {"Back to WeatherNow"}
            </Link<Route>>
        </div>
    }
}
