pub mod demo;
pub mod hero;
pub mod nav;
pub mod theme_toggle;

use yew::prelude::*;

use crate::state::SiteState;

#[derive(Properties, PartialEq)]
pub struct SiteProps {
    pub site: UseReducerHandle<SiteState>,
}

/// Classes for an element that fades in the first time it is scrolled to.
/// The element also needs `data-reveal-key={key}` so the observer can report it.
pub fn reveal_classes(site: &SiteState, key: &str) -> Classes {
    classes!("reveal-up", site.is_revealed(key).then_some("revealed"))
}
