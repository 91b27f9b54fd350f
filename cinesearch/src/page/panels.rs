use crate::{
    api::{CommentBackend, SearchBackend},
    dom::{ids, UiBinding},
    page::Page,
    search::session::SearchField,
    storage::Storage,
    utils::any::Any,
};

/// Clickable elements with their own handlers.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum Control {
    MobileMenuToggle,
    SidebarClose,
    SidebarOverlay,
    MobileSearchToggle,
    MobileSearchClose,
    MobileMoreToggle,
    SidebarToggle,
    SidebarDropdownToggle,
    GuestAvatar,
    CommentDropdownIcon,
}

impl Control {
    pub const ALL: [Self; 10] = [
        Self::MobileMenuToggle,
        Self::SidebarClose,
        Self::SidebarOverlay,
        Self::MobileSearchToggle,
        Self::MobileSearchClose,
        Self::MobileMoreToggle,
        Self::SidebarToggle,
        Self::SidebarDropdownToggle,
        Self::GuestAvatar,
        Self::CommentDropdownIcon,
    ];

    pub fn selector(self) -> &'static str {
        match self {
            Self::MobileMenuToggle => ids::MOBILE_MENU_TOGGLE,
            Self::SidebarClose => ids::SIDEBAR_CLOSE,
            Self::SidebarOverlay => ids::SIDEBAR_OVERLAY,
            Self::MobileSearchToggle => ids::MOBILE_SEARCH_TOGGLE,
            Self::MobileSearchClose => ids::MOBILE_SEARCH_CLOSE,
            Self::MobileMoreToggle => ids::MOBILE_MORE_TOGGLE,
            Self::SidebarToggle => ids::SIDEBAR_TOGGLE,
            Self::SidebarDropdownToggle => ids::SIDEBAR_DROPDOWN_TOGGLE,
            Self::GuestAvatar => ids::GUEST_AVATAR,
            Self::CommentDropdownIcon => ids::COMMENT_DROPDOWN_ICON,
        }
    }

    // NOTE: a control whose partner element is missing has no handler and the click reaches the document
    fn partner(self) -> Option<&'static str> {
        match self {
            Self::SidebarToggle => ids::DESKTOP_SIDEBAR.some(),
            Self::SidebarDropdownToggle => ids::SIDEBAR_NAV_DROPDOWN.some(),
            Self::GuestAvatar => ids::USER_MENU.some(),
            Self::CommentDropdownIcon => ids::COMMENTS_LIST.some(),
            _ => None,
        }
    }

    pub fn is_bound<U: UiBinding>(self, ui: &U) -> bool {
        match self.partner() {
            Some(partner) => ui.exists(partner),
            None => true,
        }
    }

    /// Whether a click handled here is kept from the document-level outside-click handlers.
    pub fn stops_propagation(self) -> bool {
        !matches!(self, Self::SidebarOverlay | Self::CommentDropdownIcon)
    }
}

impl<U, A, S> Page<U, A, S>
where
    U: UiBinding,
    A: SearchBackend + CommentBackend,
    S: Storage,
{
    pub(super) fn on_control(&mut self, control: Control) {
        tracing::debug!(?control, "control clicked");

        match control {
            Control::MobileMenuToggle => self.toggle_mobile_menu(),
            Control::SidebarClose | Control::SidebarOverlay => self.close_mobile_menu(),
            Control::MobileSearchToggle => self.toggle_mobile_search(),
            Control::MobileSearchClose => self.close_mobile_search(),
            Control::MobileMoreToggle => self.toggle_more_menu(),
            Control::SidebarToggle => {
                self.sidebar.toggle(&mut *self.ui.lock());
            }
            Control::SidebarDropdownToggle => {
                let mut ui = self.ui.lock();

                ui.toggle_class(ids::SIDEBAR_NAV_DROPDOWN, ids::class::ACTIVE);
            }
            Control::GuestAvatar => {
                let mut ui = self.ui.lock();

                ui.toggle_class(ids::USER_MENU, ids::class::ACTIVE);
            }
            Control::CommentDropdownIcon => {
                let mut ui = self.ui.lock();

                ui.toggle_class(ids::COMMENTS_LIST, ids::class::COLLAPSED);
                ui.toggle_class(ids::COMMENT_DROPDOWN_ICON, ids::class::ACTIVE);
            }
        }
    }

    fn lock_scroll(ui: &mut U, locked: bool) {
        ui.set_style(ids::BODY, "overflow", if locked { "hidden" } else { "" });
    }

    fn toggle_mobile_menu(&mut self) {
        let mut ui = self.ui.lock();

        if !ui.exists(ids::MOBILE_SIDEBAR) {
            tracing::warn!(selector = ids::MOBILE_SIDEBAR, "element not found");

            return;
        }

        let open = ui.toggle_class(ids::MOBILE_SIDEBAR, ids::class::ACTIVE);

        ui.set_class(ids::SIDEBAR_OVERLAY, ids::class::ACTIVE, open);
        Self::lock_scroll(&mut ui, open);

        tracing::debug!(open, "mobile menu toggled");
    }

    fn close_mobile_menu(&mut self) {
        let mut ui = self.ui.lock();

        ui.remove_class(ids::MOBILE_SIDEBAR, ids::class::ACTIVE);
        ui.remove_class(ids::SIDEBAR_OVERLAY, ids::class::ACTIVE);
        Self::lock_scroll(&mut ui, false);
    }

    fn toggle_mobile_search(&mut self) {
        let opened = {
            let mut ui = self.ui.lock();

            if !ui.exists(ids::MOBILE_SEARCH) {
                tracing::warn!(selector = ids::MOBILE_SEARCH, "element not found");

                return;
            }

            let was_open = ui.has_class(ids::MOBILE_SEARCH, ids::class::ACTIVE);
            let open = ui.toggle_class(ids::MOBILE_SEARCH, ids::class::ACTIVE);

            ui.set_class(ids::BODY, ids::class::MOBILE_SEARCH_ACTIVE, open);
            ui.remove_class(ids::MOBILE_MORE_DROPDOWN, ids::class::ACTIVE);

            open && !was_open
        };

        if opened {
            let ui = self.ui.clone();
            let delay = self.config.search_focus_delay();

            tokio::spawn(async move {
                tokio::time::sleep(delay).await;
                ui.lock().focus(ids::MOBILE_SEARCH_INPUT);
            });
        }
    }

    fn close_mobile_search(&mut self) {
        {
            let mut ui = self.ui.lock();

            if !ui.exists(ids::MOBILE_SEARCH) {
                return;
            }

            ui.remove_class(ids::MOBILE_SEARCH, ids::class::ACTIVE);
            ui.remove_class(ids::BODY, ids::class::MOBILE_SEARCH_ACTIVE);
        }

        self.clear_results(SearchField::MOBILE);
    }

    fn toggle_more_menu(&mut self) {
        let mut ui = self.ui.lock();

        if ui.exists(ids::MOBILE_MORE_DROPDOWN) {
            ui.toggle_class(ids::MOBILE_MORE_DROPDOWN, ids::class::ACTIVE);
            ui.remove_class(ids::MOBILE_SEARCH, ids::class::ACTIVE);
        }
    }

    /// Closes every open overlay the click landed outside of.
    pub(super) fn on_document_click(&mut self, target: &str) {
        let (clear_desktop, close_mobile_search) = {
            let mut ui = self.ui.lock();
            let clear_desktop = self.desktop_search.is_some()
                && ui.exists(ids::DESKTOP_SEARCH)
                && !ui.contains(ids::DESKTOP_SEARCH, target);
            let close_mobile_search = ui.has_class(ids::MOBILE_SEARCH, ids::class::ACTIVE)
                && !ui.contains(ids::MOBILE_SEARCH, target)
                && ui.exists(ids::MOBILE_SEARCH_TOGGLE)
                && !ui.contains(ids::MOBILE_SEARCH_TOGGLE, target);

            if close_mobile_search {
                ui.remove_class(ids::MOBILE_SEARCH, ids::class::ACTIVE);

                tracing::debug!("mobile search closed by outside click");
            }

            if ui.has_class(ids::MOBILE_MORE_DROPDOWN, ids::class::ACTIVE)
                && !ui.contains(ids::MOBILE_MORE_DROPDOWN, target)
                && ui.exists(ids::MOBILE_MORE_TOGGLE)
                && !ui.contains(ids::MOBILE_MORE_TOGGLE, target)
            {
                ui.remove_class(ids::MOBILE_MORE_DROPDOWN, ids::class::ACTIVE);
            }

            if ui.exists(ids::GUEST_AVATAR) && ui.exists(ids::USER_MENU) && !ui.contains(ids::USER_MENU, target) {
                ui.remove_class(ids::USER_MENU, ids::class::ACTIVE);
            }

            (clear_desktop, close_mobile_search)
        };

        if clear_desktop {
            self.clear_results(SearchField::DESKTOP);
        }

        if close_mobile_search {
            self.clear_results(SearchField::MOBILE);
        }
    }
}
