use web_sys::Element;
use yew::prelude::*;

use crate::dom;
use crate::state::nav::Section;
use crate::state::parallax::ParallaxOffset;

#[function_component(Hero)]
pub fn hero() -> Html {
    let hero_ref = use_node_ref();
    let coarse_pointer = use_state(dom::coarse_pointer);
    // Local so pointer moves only re-render the hero.
    let parallax = use_state_eq(ParallaxOffset::default);

    let (onmousemove, onmouseleave) = if *coarse_pointer {
        (None, None)
    } else {
        let onmousemove = {
            let parallax = parallax.clone();
            let hero_ref = hero_ref.clone();
            Callback::from(move |e: MouseEvent| {
                if let Some(hero) = hero_ref.cast::<Element>() {
                    let rect = hero.get_bounding_client_rect();
                    parallax.set(ParallaxOffset::from_pointer(
                        f64::from(e.client_x()) - rect.left(),
                        f64::from(e.client_y()) - rect.top(),
                        rect.width(),
                        rect.height(),
                    ));
                }
            })
        };
        let onmouseleave = {
            let parallax = parallax.clone();
            Callback::from(move |_: MouseEvent| parallax.set(ParallaxOffset::default()))
        };
        (Some(onmousemove), Some(onmouseleave))
    };

    html! {
        <section
            id={Section::Hero.id()}
            class="section section--hero"
            ref={hero_ref}
            {onmousemove}
            {onmouseleave}
        >
            <div
                class="hero__decoration"
                aria-hidden="true"
                style={format!("transform: {};", parallax.transform())}
            ></div>
            <div class="hero__content">
                <p class="hero__eyebrow">{"Voice AI agents, built to ship"}</p>
                <h1 class="hero__title">{"Phone calls your customers actually enjoy."}</h1>
                <p class="hero__subtitle">
                    {"I design and deploy AI voice agents that answer, qualify and book around the clock, in a voice that sounds like your business."}
                </p>
                <div class="hero__actions">
                    <a href={format!("#{}", Section::Demo.id())} class="btn btn--primary">{"Get a demo call"}</a>
                    <a href={format!("#{}", Section::Services.id())} class="btn btn--ghost">{"See what it does"}</a>
                </div>
            </div>
        </section>
    }
}
