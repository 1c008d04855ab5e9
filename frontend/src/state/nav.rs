/// Page sections that carry an id and can be scrolled to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Section {
    Hero,
    Services,
    Process,
    Demo,
    Contact,
}

impl Section {
    pub const ALL: [Section; 5] = [
        Section::Hero,
        Section::Services,
        Section::Process,
        Section::Demo,
        Section::Contact,
    ];

    /// Sections linked from the navigation bar, in display order.
    pub const NAV: [Section; 4] = [
        Section::Services,
        Section::Process,
        Section::Demo,
        Section::Contact,
    ];

    pub fn id(&self) -> &'static str {
        match self {
            Section::Hero => "home",
            Section::Services => "services",
            Section::Process => "process",
            Section::Demo => "demo",
            Section::Contact => "contact",
        }
    }

    pub fn from_id(id: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|s| s.id() == id)
    }

    pub fn nav_label(&self) -> &'static str {
        match self {
            Section::Hero => "Home",
            Section::Services => "Services",
            Section::Process => "Process",
            Section::Demo => "Demo",
            Section::Contact => "Contact",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Default)]
pub struct NavState {
    pub menu_open: bool,
    /// Section most recently reported as visible.
    pub active: Option<Section>,
}

impl NavState {
    pub fn toggle_menu(&mut self) {
        self.menu_open = !self.menu_open;
    }

    pub fn close_menu(&mut self) {
        self.menu_open = false;
    }

    pub fn section_visible(&mut self, section: Section) {
        self.active = Some(section);
    }

    /// At most one link is active at a time.
    pub fn is_link_active(&self, section: Section) -> bool {
        self.active == Some(section)
    }

    pub fn aria_expanded(&self) -> &'static str {
        if self.menu_open {
            "true"
        } else {
            "false"
        }
    }
}
