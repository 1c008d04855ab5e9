//! View-model for the whole page.
//!
//! Every user action and browser observation becomes an [`Intent`]; the
//! reducer is the only place state changes, and components render from the
//! resulting [`SiteState`]. Pointer tracking for the hero parallax is the
//! one exception: it stays inside the hero so mouse moves re-render nothing else.

pub mod demo;
pub mod nav;
pub mod parallax;
pub mod theme;
pub mod validation;

use std::collections::HashSet;
use std::rc::Rc;

use yew::Reducible;

use demo::{DemoIntent, DemoState};
use nav::{NavState, Section};
use theme::Theme;

#[derive(Debug, Clone, PartialEq)]
pub enum Intent {
    ToggleTheme,
    ToggleMenu,
    CloseMenu,
    SectionVisible(Section),
    /// One-shot: a revealed element never goes back.
    Revealed(String),
    Demo(DemoIntent),
}

#[derive(Debug, Clone, PartialEq)]
pub struct SiteState {
    pub theme: Theme,
    pub nav: NavState,
    pub revealed: HashSet<String>,
    pub demo: DemoState,
}

impl SiteState {
    pub fn new(theme: Theme, backend_ready: bool) -> Self {
        Self {
            theme,
            nav: NavState::default(),
            revealed: HashSet::new(),
            demo: DemoState::new(backend_ready),
        }
    }

    pub fn apply(&mut self, intent: Intent) {
        match intent {
            Intent::ToggleTheme => self.theme = self.theme.toggled(),
            Intent::ToggleMenu => self.nav.toggle_menu(),
            Intent::CloseMenu => self.nav.close_menu(),
            Intent::SectionVisible(section) => self.nav.section_visible(section),
            Intent::Revealed(key) => {
                self.revealed.insert(key);
            }
            Intent::Demo(intent) => self.demo.apply(intent),
        }
    }

    pub fn is_revealed(&self, key: &str) -> bool {
        self.revealed.contains(key)
    }
}

impl Reducible for SiteState {
    type Action = Intent;

    fn reduce(self: Rc<Self>, action: Self::Action) -> Rc<Self> {
        let mut next = (*self).clone();
        next.apply(action);
        Rc::new(next)
    }
}
