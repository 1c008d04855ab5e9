use yew::prelude::*;

use super::SiteProps;
use crate::dom;
use crate::state::theme::Theme;
use crate::state::Intent;

/// Intent for a click on `chosen` while `current` is shown. Picking the theme
/// already on screen changes nothing.
fn intent_for(current: Theme, chosen: Theme) -> Option<Intent> {
    (current != chosen).then_some(Intent::ToggleTheme)
}

#[function_component(ThemeToggle)]
pub fn theme_toggle(props: &SiteProps) -> Html {
    let option = |theme: Theme, label: &'static str| {
        let current = props.site.theme;
        let active = current == theme;
        let onclick = {
            let site = props.site.clone();
            Callback::from(move |_: MouseEvent| {
                dom::store_theme(theme);
                if let Some(intent) = intent_for(current, theme) {
                    site.dispatch(intent);
                }
            })
        };
        html! {
            <button
                type="button"
                class={classes!(
                    "theme-toggle__option",
                    format!("theme-toggle__option--{}", theme.as_str()),
                    active.then_some("theme-toggle__option--active"),
                )}
                aria-pressed={if active { "true" } else { "false" }}
                {onclick}
            >
                {label}
            </button>
        }
    };

    html! {
        <div id="themeToggle" class="theme-toggle" role="group" aria-label="Color theme">
            {option(Theme::Dark, "Dark")}
            <span class="theme-toggle__divider">{"/"}</span>
            {option(Theme::Light, "Light")}
        </div>
    }
}
