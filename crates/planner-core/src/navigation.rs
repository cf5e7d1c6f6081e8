//! Navigation Shell State
//!
//! Which page is showing. Local UI state only; never persisted.

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Page {
    #[default]
    Dashboard,
    Budget,
    Guests,
    Vendors,
    Tasks,
    Venues,
    Analytics,
}

impl Page {
    /// Sidebar order
    pub const ALL: &'static [Page] = &[
        Page::Dashboard,
        Page::Budget,
        Page::Guests,
        Page::Vendors,
        Page::Tasks,
        Page::Venues,
        Page::Analytics,
    ];

    pub fn id(&self) -> &'static str {
        match self {
            Page::Dashboard => "dashboard",
            Page::Budget => "budget",
            Page::Guests => "guests",
            Page::Vendors => "vendors",
            Page::Tasks => "tasks",
            Page::Venues => "venues",
            Page::Analytics => "analytics",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            Page::Dashboard => "Dashboard",
            Page::Budget => "Budget",
            Page::Guests => "Guests",
            Page::Vendors => "Vendors",
            Page::Tasks => "Tasks",
            Page::Venues => "Venues",
            Page::Analytics => "Analytics",
        }
    }

    pub fn icon(&self) -> &'static str {
        match self {
            Page::Dashboard => "🏠",
            Page::Budget => "💰",
            Page::Guests => "👥",
            Page::Vendors => "🏪",
            Page::Tasks => "✅",
            Page::Venues => "🏛️",
            Page::Analytics => "📊",
        }
    }
}

/// Current page. Transitions only happen on explicit selection.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Navigation {
    current: Page,
}

impl Navigation {
    pub fn current(&self) -> Page {
        self.current
    }

    pub fn select(&mut self, page: Page) {
        self.current = page;
    }

    /// Back to the initial page (used on logout)
    pub fn reset(&mut self) {
        self.current = Page::default();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_starts_on_dashboard() {
        assert_eq!(Navigation::default().current(), Page::Dashboard);
    }

    #[test]
    fn test_select_and_reset() {
        let mut nav = Navigation::default();
        nav.select(Page::Tasks);
        assert_eq!(nav.current(), Page::Tasks);
        nav.reset();
        assert_eq!(nav.current(), Page::Dashboard);
    }

    #[test]
    fn test_page_ids_are_unique() {
        let mut ids: Vec<_> = Page::ALL.iter().map(|p| p.id()).collect();
        ids.sort();
        ids.dedup();
        assert_eq!(ids.len(), Page::ALL.len());
    }
}
