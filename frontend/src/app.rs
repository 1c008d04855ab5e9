use wasm_bindgen::prelude::Closure;
use wasm_bindgen::JsCast;
use yew::prelude::*;

use crate::components::nav::Nav;
use crate::config;
use crate::dom;
use crate::pages::landing::Landing;
use crate::state::nav::Section;
use crate::state::theme::Theme;
use crate::state::{Intent, SiteState};

#[function_component(App)]
pub fn app() -> Html {
    let site = use_reducer(|| SiteState::new(dom::initial_theme(), config::demo_backend_ready()));

    use_effect_with_deps(
        |theme: &Theme| {
            dom::apply_theme(*theme);
            || ()
        },
        site.theme,
    );

    use_effect_with_deps(
        |open: &bool| {
            dom::lock_body_scroll(*open);
            || ()
        },
        site.nav.menu_open,
    );

    // Same-page anchors scroll smoothly; Escape closes the mobile menu.
    {
        let site = site.clone();
        use_effect_with_deps(
            move |_| {
                let destructor: Box<dyn FnOnce()> =
                    if let Some(document) = web_sys::window().and_then(|w| w.document()) {
                        let on_click = {
                            let site = site.clone();
                            Closure::<dyn Fn(web_sys::Event)>::new(move |e: web_sys::Event| {
                                if let Some(id) = dom::anchor_target(&e) {
                                    if dom::scroll_to_id(&id) {
                                        e.prevent_default();
                                        site.dispatch(Intent::CloseMenu);
                                    }
                                }
                            })
                        };
                        let on_keydown = Closure::<dyn Fn(web_sys::KeyboardEvent)>::new(
                            move |e: web_sys::KeyboardEvent| {
                                if e.key() == "Escape" {
                                    site.dispatch(Intent::CloseMenu);
                                }
                            },
                        );
                        let _ = document
                            .add_event_listener_with_callback("click", on_click.as_ref().unchecked_ref());
                        let _ = document.add_event_listener_with_callback(
                            "keydown",
                            on_keydown.as_ref().unchecked_ref(),
                        );
                        Box::new(move || {
                            let _ = document.remove_event_listener_with_callback(
                                "click",
                                on_click.as_ref().unchecked_ref(),
                            );
                            let _ = document.remove_event_listener_with_callback(
                                "keydown",
                                on_keydown.as_ref().unchecked_ref(),
                            );
                        })
                    } else {
                        Box::new(|| ())
                    };
                move || destructor()
            },
            (),
        );
    }

    // Reveal-on-scroll and nav highlighting.
    {
        let site = site.clone();
        use_effect_with_deps(
            move |_| {
                let reveals = {
                    let site = site.clone();
                    dom::observe_reveals(move |key| site.dispatch(Intent::Revealed(key)))
                };
                let sections = dom::observe_sections(move |id| {
                    if let Some(section) = Section::from_id(&id) {
                        site.dispatch(Intent::SectionVisible(section));
                    }
                });
                move || drop((reveals, sections))
            },
            (),
        );
    }

    html! {
        <>
            <Nav site={site.clone()} />
            <Landing site={site} />
        </>
    }
}
