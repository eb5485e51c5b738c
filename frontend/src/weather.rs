use std::rc::Rc;

use gloo_timers::callback::Timeout;
use log::debug;
use rand::Rng;
use serde::{Deserialize, Serialize};
use yew::prelude::*;

use crate::config;

/// Weather conditions shown on the current-weather card.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct WeatherSnapshot {
    pub temperature_celsius: i32,
    pub condition: String,
    pub humidity_percent: u8,
    pub wind_speed_kmh: u32,
}

impl Default for WeatherSnapshot {
    fn default() -> Self {
        Self {
            temperature_celsius: config::DEFAULT_TEMPERATURE_CELSIUS,
            condition: config::DEFAULT_CONDITION.to_string(),
            humidity_percent: config::DEFAULT_HUMIDITY_PERCENT,
            wind_speed_kmh: config::DEFAULT_WIND_SPEED_KMH,
        }
    }
}

impl WeatherSnapshot {
    fn with_temperature(temperature_celsius: i32) -> Self {
        Self {
            temperature_celsius,
            ..Self::default()
        }
    }
}

pub fn draw_temperature<R: Rng + ?Sized>(rng: &mut R) -> i32 {
    rng.gen_range(config::TEMPERATURE_RANGE)
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RefreshPhase {
    /// Default snapshot is live, the refresh has not fired yet.
    Pending,
    Refreshed,
    /// Torn down before the refresh fired.
    Cancelled,
}

/// Owns the live snapshot and makes sure it is replaced at most once.
#[derive(Debug, Clone, PartialEq)]
pub struct WeatherLoader {
    snapshot: WeatherSnapshot,
    phase: RefreshPhase,
}

pub enum LoaderAction {
    Refresh { temperature_celsius: i32 },
    TearDown,
}

impl WeatherLoader {
    pub fn initialize() -> Self {
        Self {
            snapshot: WeatherSnapshot::default(),
            phase: RefreshPhase::Pending,
        }
    }

    pub fn snapshot(&self) -> &WeatherSnapshot {
        &self.snapshot
    }

    pub fn phase(&self) -> RefreshPhase {
        self.phase
    }

    /// Swaps in a new snapshot. Returns false if the refresh already happened
    /// or the loader was torn down.
    pub fn refresh(&mut self, temperature_celsius: i32) -> bool {
        if self.phase != RefreshPhase::Pending {
            return false;
        }
        self.snapshot = WeatherSnapshot::with_temperature(temperature_celsius);
        self.phase = RefreshPhase::Refreshed;
        true
    }

    pub fn teardown(&mut self) {
        if self.phase == RefreshPhase::Pending {
            self.phase = RefreshPhase::Cancelled;
        }
    }
}

impl Reducible for WeatherLoader {
    type Action = LoaderAction;

    fn reduce(self: Rc<Self>, action: Self::Action) -> Rc<Self> {
        let mut next = (*self).clone();
        match action {
            LoaderAction::Refresh { temperature_celsius } => {
                if next.refresh(temperature_celsius) {
                    debug!("Weather snapshot refreshed: {}°C", temperature_celsius);
                } else {
                    return self;
                }
            }
            LoaderAction::TearDown => {
                if next.phase() == RefreshPhase::Pending {
                    debug!("Weather refresh cancelled");
                }
                next.teardown();
            }
        }
        Rc::new(next)
    }
}

/// Live weather snapshot for the mounting component. Shows the default
/// values first and swaps in a randomized temperature once the refresh delay
/// has elapsed. Unmounting cancels the pending refresh.
#[hook]
pub fn use_weather_snapshot() -> WeatherSnapshot {
    let loader = use_reducer(WeatherLoader::initialize);

    {
        let loader = loader.clone();
        use_effect_with_deps(
            move |_| {
                debug!(
                    "Scheduling weather refresh in {} ms",
                    config::WEATHER_REFRESH_DELAY_MS
                );
                let refresh_loader = loader.clone();
                let timeout = Timeout::new(config::WEATHER_REFRESH_DELAY_MS, move || {
                    let temperature_celsius = draw_temperature(&mut rand::thread_rng());
                    refresh_loader.dispatch(LoaderAction::Refresh { temperature_celsius });
                });

                move || {
                    drop(timeout);
                    loader.dispatch(LoaderAction::TearDown);
                }
            },
            (),
        );
    }

    loader.snapshot().clone()
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    fn rng() -> StdRng {
        StdRng::seed_from_u64(7)
    }

    // Stands in for the timer: fires once the virtual clock reaches the delay.
    fn advance_to(loader: &mut WeatherLoader, elapsed_ms: u64, rng: &mut StdRng) -> bool {
        if elapsed_ms < u64::from(config::WEATHER_REFRESH_DELAY_MS) {
            return false;
        }
        loader.phase() == RefreshPhase::Pending && loader.refresh(draw_temperature(rng))
    }

    #[test]
    fn test_initial_snapshot_is_default() {
        let loader = WeatherLoader::initialize();
        let snapshot = loader.snapshot();
        assert_eq!(snapshot.temperature_celsius, 22);
        assert_eq!(snapshot.condition, "Partly Cloudy");
        assert_eq!(snapshot.humidity_percent, 60);
        assert_eq!(snapshot.wind_speed_kmh, 10);
        assert_eq!(loader.phase(), RefreshPhase::Pending);
    }

    #[test]
    fn test_default_visible_for_full_delay() {
        let mut loader = WeatherLoader::initialize();
        let mut rng = rng();
        for elapsed in [0, 1, 1_500, 2_999] {
            assert!(!advance_to(&mut loader, elapsed, &mut rng));
            assert_eq!(loader.snapshot(), &WeatherSnapshot::default());
        }
    }

    #[test]
    fn test_refresh_fires_exactly_once() {
        let mut loader = WeatherLoader::initialize();
        let mut rng = rng();
        assert!(advance_to(&mut loader, 3_000, &mut rng));
        let refreshed = loader.snapshot().clone();

        assert!(!advance_to(&mut loader, 5_000, &mut rng));
        assert!(!advance_to(&mut loader, 60_000, &mut rng));
        assert_eq!(loader.snapshot(), &refreshed);
        assert_eq!(loader.phase(), RefreshPhase::Refreshed);
    }

    #[test]
    fn test_refresh_only_changes_temperature() {
        for seed in 0..200 {
            let mut loader = WeatherLoader::initialize();
            advance_to(&mut loader, 3_000, &mut StdRng::seed_from_u64(seed));
            let snapshot = loader.snapshot();
            assert!((10..=39).contains(&snapshot.temperature_celsius));
            assert_eq!(
                WeatherSnapshot {
                    temperature_celsius: 22,
                    ..snapshot.clone()
                },
                WeatherSnapshot::default()
            );
        }
    }

    #[test]
    fn test_teardown_before_delay_prevents_refresh() {
        let mut loader = WeatherLoader::initialize();
        let mut rng = rng();
        advance_to(&mut loader, 1_000, &mut rng);
        loader.teardown();

        assert!(!advance_to(&mut loader, 5_000, &mut rng));
        assert!(!loader.refresh(30));
        assert_eq!(loader.snapshot(), &WeatherSnapshot::default());
        assert_eq!(loader.phase(), RefreshPhase::Cancelled);
    }

    #[test]
    fn test_teardown_after_refresh_keeps_snapshot() {
        let mut loader = WeatherLoader::initialize();
        assert!(loader.refresh(31));
        loader.teardown();
        assert_eq!(loader.phase(), RefreshPhase::Refreshed);
        assert_eq!(loader.snapshot().temperature_celsius, 31);
    }

    #[test]
    fn test_reducer_ignores_late_refresh() {
        let loader = Rc::new(WeatherLoader::initialize());
        let loader = loader.reduce(LoaderAction::TearDown);
        let loader = loader.reduce(LoaderAction::Refresh {
            temperature_celsius: 35,
        });
        assert_eq!(loader.snapshot(), &WeatherSnapshot::default());
    }

    #[test]
    fn test_reducer_applies_first_refresh_only() {
        let loader = Rc::new(WeatherLoader::initialize());
        let loader = loader.reduce(LoaderAction::Refresh {
            temperature_celsius: 12,
        });
        let loader = loader.reduce(LoaderAction::Refresh {
            temperature_celsius: 38,
        });
        assert_eq!(loader.snapshot().temperature_celsius, 12);
    }

    #[test]
    fn test_draw_temperature_covers_range_bounds() {
        let mut rng = rng();
        let draws: Vec<i32> = (0..5_000).map(|_| draw_temperature(&mut rng)).collect();
        assert!(draws.iter().all(|t| (10..=39).contains(t)));
        assert!(draws.contains(&10));
        assert!(draws.contains(&39));
    }
}
