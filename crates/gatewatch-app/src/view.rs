//! View selection state machine
//!
//! Three base views plus a detail overlay. The detail overlay wins whenever
//! a gate is selected, regardless of the base view.

/// Base view chosen from the sidebar
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum ActiveView {
    #[default]
    Overview,
    List,
    Settings,
}

impl ActiveView {
    /// Tab order
    pub const ALL: [ActiveView; 3] = [ActiveView::Overview, ActiveView::List, ActiveView::Settings];

    pub fn next(self) -> Self {
        match self {
            ActiveView::Overview => ActiveView::List,
            ActiveView::List => ActiveView::Settings,
            ActiveView::Settings => ActiveView::Overview,
        }
    }

    pub fn previous(self) -> Self {
        match self {
            ActiveView::Overview => ActiveView::Settings,
            ActiveView::List => ActiveView::Overview,
            ActiveView::Settings => ActiveView::List,
        }
    }
}

/// What the content area shows
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Screen {
    Overview,
    List,
    Settings,
    Detail(String),
}

/// Process-wide navigation state
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ViewState {
    active_view: ActiveView,
    selected_gate_id: Option<String>,
}

impl ViewState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn active_view(&self) -> ActiveView {
        self.active_view
    }

    pub fn selected_gate_id(&self) -> Option<&str> {
        self.selected_gate_id.as_deref()
    }

    /// Open the detail overlay for `id`. The base view is untouched.
    pub fn select_gate(&mut self, id: impl Into<String>) {
        self.selected_gate_id = Some(id.into());
    }

    /// Change the base view. An open detail overlay stays open.
    pub fn navigate(&mut self, view: ActiveView) {
        self.active_view = view;
    }

    /// Close the detail overlay and return to the overview.
    ///
    /// Always lands on `Overview`, whatever the base view was.
    pub fn back(&mut self) {
        self.selected_gate_id = None;
        self.active_view = ActiveView::Overview;
    }

    /// Screen to render for this state
    pub fn render_target(&self) -> Screen {
        match (&self.selected_gate_id, self.active_view) {
            (Some(id), _) => Screen::Detail(id.clone()),
            (None, ActiveView::Settings) => Screen::Settings,
            (None, ActiveView::List) => Screen::List,
            (None, ActiveView::Overview) => Screen::Overview,
        }
    }
}

/// Sidebar entry
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MenuEntry {
    pub label: &'static str,
    pub target: ActiveView,
}

/// Sidebar entries in display order. "Map View" is an alias of the overview.
pub const MENU_ENTRIES: [MenuEntry; 4] = [
    MenuEntry {
        label: "Dashboard",
        target: ActiveView::Overview,
    },
    MenuEntry {
        label: "Map View",
        target: ActiveView::Overview,
    },
    MenuEntry {
        label: "Gate List",
        target: ActiveView::List,
    },
    MenuEntry {
        label: "Settings",
        target: ActiveView::Settings,
    },
];

impl MenuEntry {
    pub fn is_active(&self, view: &ViewState) -> bool {
        self.target == view.active_view()
    }
}
