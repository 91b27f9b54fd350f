use crate::{
    dom::{ids, UiBinding},
    storage::Storage,
    utils::any::Any,
};

/// The desktop sidebar, whose open state is remembered across page loads.
pub struct DesktopSidebar<S> {
    storage: S,
}

impl<S: Storage> DesktopSidebar<S> {
    const STORAGE_KEY: &'static str = "sidebarOpen";

    pub fn new(storage: S) -> Self {
        Self { storage }
    }

    pub fn is_persisted_open(&self) -> bool {
        self.storage.get(Self::STORAGE_KEY).as_deref() == Some("true")
    }

    fn show<U: UiBinding>(ui: &mut U, open: bool) {
        ui.set_class(ids::DESKTOP_SIDEBAR, ids::class::ACTIVE, open);
        ui.set_class(ids::BODY, ids::class::SIDEBAR_OPEN, open);
    }

    pub fn restore<U: UiBinding>(&self, ui: &mut U) {
        if self.is_persisted_open() && ui.exists(ids::DESKTOP_SIDEBAR) {
            Self::show(ui, true);

            tracing::debug!("desktop sidebar restored open");
        }
    }

    /// Flips the sidebar and persists the new state; `None` when the page has no sidebar.
    pub fn toggle<U: UiBinding>(&mut self, ui: &mut U) -> Option<bool> {
        if !ui.exists(ids::DESKTOP_SIDEBAR) {
            return None;
        }

        let open = !ui.has_class(ids::DESKTOP_SIDEBAR, ids::class::ACTIVE);

        Self::show(ui, open);

        // NOTE: a failed write still leaves the sidebar toggled for this page
        self.storage.set(Self::STORAGE_KEY, &open.to_string()).warn();

        tracing::debug!(open, "desktop sidebar toggled");

        open.some()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{dom::document::Document, storage::MemoryStorage};

    #[test]
    fn toggling_persists_each_state() {
        let mut ui = Document::site();
        let mut sidebar = DesktopSidebar::new(MemoryStorage::default());

        assert_eq!(sidebar.toggle(&mut ui), Some(true));
        assert!(ui.has_class(ids::DESKTOP_SIDEBAR, ids::class::ACTIVE));
        assert!(ui.has_class(ids::BODY, ids::class::SIDEBAR_OPEN));
        assert_eq!(sidebar.storage.get("sidebarOpen").as_deref(), Some("true"));

        assert_eq!(sidebar.toggle(&mut ui), Some(false));
        assert!(!ui.has_class(ids::DESKTOP_SIDEBAR, ids::class::ACTIVE));
        assert!(!ui.has_class(ids::BODY, ids::class::SIDEBAR_OPEN));
        assert_eq!(sidebar.storage.get("sidebarOpen").as_deref(), Some("false"));
    }

    #[test]
    fn restore_only_opens_on_true() {
        let mut storage = MemoryStorage::default();

        storage.set("sidebarOpen", "yes").unwrap();

        let mut ui = Document::site();

        DesktopSidebar::new(storage).restore(&mut ui);

        assert!(!ui.has_class(ids::DESKTOP_SIDEBAR, ids::class::ACTIVE));
    }

    #[test]
    fn pages_without_a_sidebar_are_untouched() {
        let mut ui = Document::new();
        let mut sidebar = DesktopSidebar::new(MemoryStorage::default());

        assert_eq!(sidebar.toggle(&mut ui), None);
        assert_eq!(sidebar.storage.get("sidebarOpen"), None);
    }
}
