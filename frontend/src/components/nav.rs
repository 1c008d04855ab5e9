use yew::prelude::*;

use super::theme_toggle::ThemeToggle;
use super::SiteProps;
use crate::state::nav::Section;
use crate::state::Intent;

#[function_component(Nav)]
pub fn nav(props: &SiteProps) -> Html {
    let site = &props.site;
    let on_hamburger = {
        let site = site.clone();
        Callback::from(move |_: MouseEvent| site.dispatch(Intent::ToggleMenu))
    };

    html! {
        <header class="header">
            <nav id="mainNav" class={classes!("nav", site.nav.menu_open.then_some("nav--open"))}>
                <a href={format!("#{}", Section::Hero.id())} class="nav__logo">{"Callwright"}</a>
                <ul class="nav__links">
                    { for Section::NAV.into_iter().map(|section| {
                        let onclick = {
                            let site = site.clone();
                            Callback::from(move |_: MouseEvent| site.dispatch(Intent::CloseMenu))
                        };
                        html! {
                            <li>
                                <a
                                    href={format!("#{}", section.id())}
                                    class={classes!(
                                        "nav__link",
                                        site.nav.is_link_active(section).then_some("nav__link--active"),
                                    )}
                                    data-section={section.id()}
                                    {onclick}
                                >
                                    {section.nav_label()}
                                </a>
                            </li>
                        }
                    }) }
                </ul>
                <ThemeToggle site={site.clone()} />
                <button
                    id="navHamburger"
                    type="button"
                    class="nav__hamburger"
                    aria-label="Toggle navigation"
                    aria-controls="mainNav"
                    aria-expanded={site.nav.aria_expanded()}
                    onclick={on_hamburger}
                >
                    <span></span>
                    <span></span>
                    <span></span>
                </button>
            </nav>
        </header>
    }
}
