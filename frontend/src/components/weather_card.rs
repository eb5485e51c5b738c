use yew::prelude::*;

use crate::weather::use_weather_snapshot;

#[function_component(WeatherCard)]
pub fn weather_card() -> Html {
    let snapshot = use_weather_snapshot();

    html! {
        <section class="current-weather">
            <div class="glass-card weather-card fade-in-up">
                <h2>{"Current Weather"}</h2>
                <div class="weather-grid">
                    <div class="weather-icon">{"☀️"}</div>
                    <div class="weather-details">
                        <p class="weather-temperature">{format!("{}°C", snapshot.temperature_celsius)}</p>
                        <p class="weather-condition">{&snapshot.condition}</p>
                        <div class="weather-metric">
                            <span class="metric-icon">{"🌡️"}</span>
                            <span>{format!("Humidity: {}%", snapshot.humidity_percent)}</span>
                        </div>
                        <div class="weather-metric">
                            <span class="metric-icon">{"💨"}</span>
                            <span>{format!("Wind: {} km/h", snapshot.wind_speed_kmh)}</span>
                        </div>
                    </div>
                </div>
            </div>
        </section>
    }
}
