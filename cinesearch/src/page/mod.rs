pub mod comments;
pub mod flash;
pub mod panels;
pub mod sidebar;

use crate::{
    api::{CommentBackend, SearchBackend},
    config::Config,
    dom::{ids, UiBinding},
    page::{comments::CommentForm, panels::Control, sidebar::DesktopSidebar},
    search::{
        query::SearchQuery,
        render::{Renderer, Variant},
        session::{SearchField, SearchSession},
    },
    storage::Storage,
    utils::any::Any,
};
use cinesearch_macros::expand;
use parking_lot::Mutex;
use std::sync::Arc;

#[expand]
#[derive(Clone, Debug, Eq, PartialEq)]
pub enum PageEvent {
    Input { target: String, value: String },
    Focus { target: String },
    Click { target: String },
    TouchEnd { target: String },
    Submit { target: String },
}

/// One loaded page: the search sessions and collaborators bound to whatever elements it has.
pub struct Page<U, A, S> {
    ui: Arc<Mutex<U>>,
    config: Arc<Config>,
    mobile_search: Option<SearchSession<U, A>>,
    desktop_search: Option<SearchSession<U, A>>,
    sidebar: DesktopSidebar<S>,
    comment_form: Option<CommentForm<U, A>>,
}

impl<U, A, S> Page<U, A, S>
where
    U: UiBinding,
    A: SearchBackend + CommentBackend,
    S: Storage,
{
    const WATCHED_ELEMENTS: [&'static str; 9] = [
        ids::MOBILE_MENU_TOGGLE,
        ids::MOBILE_SIDEBAR,
        ids::SIDEBAR_CLOSE,
        ids::SIDEBAR_OVERLAY,
        ids::MOBILE_SEARCH_TOGGLE,
        ids::MOBILE_SEARCH,
        ids::MOBILE_SEARCH_CLOSE,
        ids::MOBILE_MORE_TOGGLE,
        ids::MOBILE_MORE_DROPDOWN,
    ];

    pub fn load(ui: Arc<Mutex<U>>, api: A, storage: S, config: Arc<Config>) -> Self {
        let renderer = Renderer::new(&config).arc();
        let bind_search = |field: SearchField| {
            let bound = {
                let ui = ui.lock();

                ui.exists(field.input) && ui.exists(field.container)
            };

            if !bound {
                tracing::debug!(input = field.input, "search box not on page");

                return None;
            }

            SearchSession::new(field, ui.clone(), api.clone(), renderer.clone(), &config).some()
        };
        let mobile_search = bind_search(SearchField::MOBILE);
        let desktop_search = bind_search(SearchField::DESKTOP);
        let sidebar = DesktopSidebar::new(storage);
        let has_comment_form = ui.lock().exists(ids::COMMENT_FORM);
        let comment_form = has_comment_form
            .then(|| CommentForm::new(ui.clone(), api.clone(), config.labels.clone().arc(), config.movie_id));

        {
            let mut ui = ui.lock();

            for selector in Self::WATCHED_ELEMENTS {
                tracing::debug!(selector, found = ui.exists(selector), "element lookup");
            }

            sidebar.restore(&mut *ui);
        }

        let num_flash_messages = flash::schedule_dismissal(&ui, config.flash_dismiss());

        tracing::info!(
            mobile_search = mobile_search.is_some(),
            desktop_search = desktop_search.is_some(),
            comment_form = comment_form.is_some(),
            num_flash_messages,
            "page loaded"
        );

        Self {
            ui,
            config,
            mobile_search,
            desktop_search,
            sidebar,
            comment_form,
        }
    }

    pub fn ui(&self) -> &Arc<Mutex<U>> {
        &self.ui
    }

    fn session_mut(&mut self, input: &str) -> Option<&mut SearchSession<U, A>> {
        [self.mobile_search.as_mut(), self.desktop_search.as_mut()]
            .into_iter()
            .flatten()
            .find(|session| session.field().input == input)
    }

    pub fn handle(&mut self, event: PageEvent) {
        tracing::trace!(?event);

        match event {
            PageEvent::Input(Input { target, value }) => self.on_input(&target, value),
            PageEvent::Focus(Focus { target }) => self.on_focus(&target),
            PageEvent::Click(Click { target }) => self.on_click(&target),
            PageEvent::TouchEnd(TouchEnd { target }) => self.on_touch_end(&target),
            PageEvent::Submit(Submit { target }) => self.on_submit(&target),
        }
    }

    fn on_input(&mut self, target: &str, value: String) {
        self.ui.lock().set_value(target, value.clone());

        match self.session_mut(target) {
            Some(session) => session.on_input(&value),
            None => tracing::trace!(target, "input on unbound element"),
        }
    }

    fn on_focus(&mut self, target: &str) {
        let Some(session) = &self.desktop_search else {
            return;
        };

        if target != session.field().input {
            return;
        }

        let value = self.ui.lock().value(target).unwrap_or_default();

        if SearchQuery::parse(&value, self.config.min_query_len).is_some() {
            session.search_now(&value);
        }
    }

    fn on_click(&mut self, target: &str) {
        let control = {
            let ui = self.ui.lock();

            Control::ALL
                .into_iter()
                .find(|control| ui.contains(control.selector(), target) && control.is_bound(&*ui))
        };

        if let Some(control) = control {
            self.on_control(control);

            if control.stops_propagation() {
                return;
            }
        }

        self.on_document_click(target);
    }

    fn on_touch_end(&mut self, target: &str) {
        let toggle = [ids::MOBILE_MENU_TOGGLE, ids::MOBILE_SEARCH_TOGGLE]
            .into_iter()
            .find(|toggle| self.ui.lock().contains(toggle, target));

        if let Some(toggle) = toggle {
            self.on_click(toggle);
        }
    }

    fn on_submit(&mut self, target: &str) {
        match &self.comment_form {
            Some(comment_form) if target == ids::COMMENT_FORM => comment_form.submit(),
            _ => tracing::trace!(target, "submit on unbound form"),
        }
    }

    fn clear_results(&self, field: SearchField) {
        let session = match field.variant {
            Variant::Mobile => &self.mobile_search,
            Variant::Desktop => &self.desktop_search,
        };

        match session {
            Some(session) => session.clear(),
            None => self.ui.lock().clear(field.container),
        }
    }
}
