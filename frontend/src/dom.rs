//! Browser glue: storage, media queries, observers and scrolling.
//! Nothing here holds state; results are fed back as intents.

use wasm_bindgen::prelude::Closure;
use wasm_bindgen::{JsCast, JsValue};
use web_sys::{
    Element, IntersectionObserver, IntersectionObserverEntry, IntersectionObserverInit,
    ScrollBehavior, ScrollIntoViewOptions,
};

use crate::state::theme::{Theme, THEME_STORAGE_KEY};

pub const REVEAL_SELECTOR: &str = ".section:not(.section--hero) .reveal-up";
pub const REVEAL_KEY_ATTR: &str = "data-reveal-key";
pub const TRACKED_SECTION_SELECTOR: &str = ".section[id]";

fn document() -> Option<web_sys::Document> {
    web_sys::window().and_then(|w| w.document())
}

fn media_matches(query: &str) -> bool {
    web_sys::window()
        .and_then(|w| w.match_media(query).ok().flatten())
        .map(|mql| mql.matches())
        .unwrap_or(false)
}

pub fn stored_theme() -> Option<String> {
    web_sys::window()
        .and_then(|w| w.local_storage().ok())
        .flatten()
        .and_then(|storage| storage.get_item(THEME_STORAGE_KEY).ok())
        .flatten()
}

pub fn store_theme(theme: Theme) {
    let storage = web_sys::window().and_then(|w| w.local_storage().ok()).flatten();
    if let Some(storage) = storage {
        if storage.set_item(THEME_STORAGE_KEY, theme.as_str()).is_err() {
            log::warn!("Could not persist theme preference");
        }
    }
}

pub fn initial_theme() -> Theme {
    Theme::resolve(stored_theme().as_deref(), media_matches("(prefers-color-scheme: dark)"))
}

pub fn apply_theme(theme: Theme) {
    if let Some(root) = document().and_then(|d| d.document_element()) {
        let _ = root.set_attribute("data-theme", theme.as_str());
    }
}

/// Touch-first devices skip the hero parallax.
pub fn coarse_pointer() -> bool {
    media_matches("(pointer: coarse)")
}

pub fn lock_body_scroll(locked: bool) {
    if let Some(body) = document().and_then(|d| d.body()) {
        let style = body.style();
        let _ = if locked {
            style.set_property("overflow", "hidden")
        } else {
            style.remove_property("overflow").map(|_| ())
        };
    }
}

/// Smoothly scrolls to the element with `id`. Returns false when the page has
/// no such element.
pub fn scroll_to_id(id: &str) -> bool {
    match document().and_then(|d| d.get_element_by_id(id)) {
        Some(target) => {
            let options = ScrollIntoViewOptions::new();
            options.set_behavior(ScrollBehavior::Smooth);
            target.scroll_into_view_with_scroll_into_view_options(&options);
            true
        }
        None => false,
    }
}

/// Same-page anchor target for a click, if any: `#id` but not a bare `#`.
pub fn anchor_target(event: &web_sys::Event) -> Option<String> {
    let element = event.target()?.dyn_into::<Element>().ok()?;
    let link = element.closest("a[href^=\"#\"]").ok()??;
    let href = link.get_attribute("href")?;
    let id = href.strip_prefix('#')?;
    (!id.is_empty()).then(|| id.to_string())
}

fn select_all(selector: &str) -> Vec<Element> {
    let Some(list) = document().and_then(|d| d.query_selector_all(selector).ok()) else {
        return Vec::new();
    };
    (0..list.length())
        .filter_map(|i| list.get(i))
        .filter_map(|node| node.dyn_into::<Element>().ok())
        .collect()
}

/// Keeps an observer and its JS callback alive; disconnects on drop.
pub struct ObserverHandle {
    observer: IntersectionObserver,
    _callback: Closure<dyn FnMut(js_sys::Array, IntersectionObserver)>,
}

impl Drop for ObserverHandle {
    fn drop(&mut self) {
        self.observer.disconnect();
    }
}

fn observe<F>(
    selector: &str,
    threshold: f64,
    root_margin: &str,
    mut on_visible: F,
) -> Option<ObserverHandle>
where
    F: FnMut(&Element, &IntersectionObserver) + 'static,
{
    let elements = select_all(selector);
    if elements.is_empty() {
        return None;
    }

    let callback = Closure::<dyn FnMut(js_sys::Array, IntersectionObserver)>::new(
        move |entries: js_sys::Array, observer: IntersectionObserver| {
            for entry in entries.iter() {
                let entry: IntersectionObserverEntry = entry.unchecked_into();
                if entry.is_intersecting() {
                    on_visible(&entry.target(), &observer);
                }
            }
        },
    );

    let options = IntersectionObserverInit::new();
    options.set_threshold(&JsValue::from_f64(threshold));
    options.set_root_margin(root_margin);
    let observer =
        match IntersectionObserver::new_with_options(callback.as_ref().unchecked_ref(), &options) {
            Ok(observer) => observer,
            Err(e) => {
                log::warn!("IntersectionObserver unavailable: {:?}", e);
                return None;
            }
        };
    for element in &elements {
        observer.observe(element);
    }
    Some(ObserverHandle {
        observer,
        _callback: callback,
    })
}

/// Reports each reveal element once, the first time it scrolls into view.
pub fn observe_reveals<F>(mut on_reveal: F) -> Option<ObserverHandle>
where
    F: FnMut(String) + 'static,
{
    observe(REVEAL_SELECTOR, 0.1, "0px 0px -40px 0px", move |element, observer| {
        if let Some(key) = element.get_attribute(REVEAL_KEY_ATTR) {
            on_reveal(key);
        }
        observer.unobserve(element);
    })
}

/// Reports the id of whichever tracked section is entering view.
pub fn observe_sections<F>(mut on_visible: F) -> Option<ObserverHandle>
where
    F: FnMut(String) + 'static,
{
    observe(TRACKED_SECTION_SELECTOR, 0.3, "-10% 0px -10% 0px", move |element, _| {
        on_visible(element.id());
    })
}
