use yew::prelude::*;
use yew_hooks::prelude::*;

use crate::config;
use crate::content::NAV_ITEMS;
use crate::theme::DisplayMode;

#[derive(Properties, PartialEq)]
pub struct HeaderProps {
    pub mode: DisplayMode,
    pub on_toggle_mode: Callback<()>,
}

#[function_component(Header)]
pub fn header(props: &HeaderProps) -> Html {
    let HeaderProps { mode, on_toggle_mode } = props;
    let (_, scroll_y) = use_window_scroll();

    let toggle_mode = {
        let on_toggle_mode = on_toggle_mode.clone();
        Callback::from(move |e: MouseEvent| {
            e.prevent_default();
            on_toggle_mode.emit(());
        })
    };

    html! {
        <header class={classes!("top-nav", (scroll_y > 0.0).then(|| "scrolled"))}>
            <nav class="nav-content">
                <div class="nav-logo fade-in-left">{config::BRAND_NAME}</div>
                <ul class="nav-links fade-in-right">
                    { for NAV_ITEMS.iter().map(|item| html! {
                        <li key={item.label} class="nav-item">
                            <a href={item.anchor} class="nav-link">{item.label}</a>
                        </li>
                    }) }
                    <li class="nav-item">
                        <button
                            class="theme-toggle"
                            title={mode.toggle_label()}
                            aria-label={mode.toggle_label()}
                            onclick={toggle_mode}
                        >
                            {mode.toggle_icon()}
                        </button>
                    </li>
                </ul>
            </nav>
        </header>
    }
}
