//! Local UI chrome state for the dashboard shell.
//!
//! DESIGN
//! ======
//! Transient presentation state (the mobile sidebar drawer, the highlighted
//! link) lives here, apart from crop state.

#[cfg(test)]
#[path = "ui_test.rs"]
mod ui_test;

/// Sidebar navigation destinations.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum NavItem {
    #[default]
    Dashboard,
    Analytics,
    Customers,
    Orders,
    Finance,
}

impl NavItem {
    pub const ALL: [NavItem; 5] = [
        NavItem::Dashboard,
        NavItem::Analytics,
        NavItem::Customers,
        NavItem::Orders,
        NavItem::Finance,
    ];

    pub fn label(self) -> &'static str {
        match self {
            Self::Dashboard => "Dashboard",
            Self::Analytics => "Analytics",
            Self::Customers => "Customers",
            Self::Orders => "Orders",
            Self::Finance => "Finance",
        }
    }

    pub fn icon(self) -> &'static str {
        match self {
            Self::Dashboard => "⌂",
            Self::Analytics => "▥",
            Self::Customers => "☺",
            Self::Orders => "🛒",
            Self::Finance => "₹",
        }
    }
}

/// UI state for the sidebar drawer.
#[derive(Clone, Debug, Default)]
pub struct UiState {
    /// Drawer visibility on narrow screens; wide layouts always show it.
    pub sidebar_open: bool,
    pub active_nav: NavItem,
}

impl UiState {
    pub fn toggle_sidebar(&mut self) {
        self.sidebar_open = !self.sidebar_open;
    }

    pub fn close_sidebar(&mut self) {
        self.sidebar_open = false;
    }
}
