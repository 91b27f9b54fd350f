use crate::{
    api::SearchBackend,
    config::Config,
    dom::{ids, UiBinding},
    search::{
        query::SearchQuery,
        render::{Renderer, ResultsView, Variant},
    },
    utils::any::Any,
};
use parking_lot::Mutex;
use serde::Deserialize;
use std::{
    sync::{
        atomic::{AtomicU64, Ordering},
        Arc,
    },
    time::Duration,
};
use tokio::task::JoinHandle;
use ulid::Ulid;

/// How a session treats responses that arrive after a newer request was issued.
#[derive(Clone, Copy, Debug, Default, Deserialize, Eq, PartialEq)]
#[serde(rename_all = "snake_case")]
pub enum ResponseOrdering {
    /// Only the response to the most recently issued request may render.
    #[default]
    LatestOnly,

    /// Every response renders when it arrives, so a slow earlier response can overwrite newer results.
    AsReceived,
}

/// An input box and the container its results render into.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub struct SearchField {
    pub input: &'static str,
    pub container: &'static str,
    pub variant: Variant,
}

impl SearchField {
    pub const MOBILE: Self = Self {
        input: ids::MOBILE_SEARCH_INPUT,
        container: ids::MOBILE_SEARCH_RESULTS,
        variant: Variant::Mobile,
    };
    pub const DESKTOP: Self = Self {
        input: ids::DESKTOP_SEARCH_INPUT,
        container: ids::DESKTOP_SEARCH_RESULTS,
        variant: Variant::Desktop,
    };
}

struct Searcher<U, B> {
    session_id: Ulid,
    field: SearchField,
    ui: Arc<Mutex<U>>,
    backend: B,
    renderer: Arc<Renderer>,
    min_query_len: usize,
    ordering: ResponseOrdering,
    latest_request: AtomicU64,
}

impl<U: UiBinding, B: SearchBackend> Searcher<U, B> {
    fn next_request(&self) -> u64 {
        self.latest_request.fetch_add(1, Ordering::SeqCst) + 1
    }

    fn is_current(&self, request: u64) -> bool {
        match self.ordering {
            ResponseOrdering::LatestOnly => self.latest_request.load(Ordering::SeqCst) == request,
            ResponseOrdering::AsReceived => true,
        }
    }

    fn clear(&self) {
        // NOTE: advancing the counter keeps in-flight responses from repopulating a cleared container
        self.next_request();
        self.ui.lock().clear(self.field.container);
    }

    fn perform(self: &Arc<Self>, raw: &str) {
        let Some(query) = SearchQuery::parse(raw, self.min_query_len) else {
            return self.clear();
        };
        let request = self.next_request();
        let loading = self.renderer.render(ResultsView::Loading, self.field.variant);

        self.ui.lock().show_results(self.field.container, loading);

        tracing::debug!(session.id = %self.session_id, %query, request, "search issued");

        let searcher = self.clone();

        tokio::spawn(async move { searcher.complete(query, request).await });
    }

    async fn complete(&self, query: SearchQuery, request: u64) {
        let view = match self.backend.search(query.as_str()).await {
            Ok(results) => self.renderer.view(&results),
            Err(error) => {
                tracing::warn!(session.id = %self.session_id, %query, %error, "search failed");

                ResultsView::Failed
            }
        };
        let mut ui = self.ui.lock();

        if !self.is_current(request) {
            tracing::debug!(session.id = %self.session_id, %query, request, "stale search response discarded");

            return;
        }

        ui.show_results(self.field.container, self.renderer.render(view, self.field.variant));
    }
}

/// Debounced live search bound to one input box.
pub struct SearchSession<U, B> {
    debounce: Duration,
    pending: Option<JoinHandle<()>>,
    searcher: Arc<Searcher<U, B>>,
}

impl<U: UiBinding, B: SearchBackend> SearchSession<U, B> {
    pub fn new(field: SearchField, ui: Arc<Mutex<U>>, backend: B, renderer: Arc<Renderer>, config: &Config) -> Self {
        let searcher = Searcher {
            session_id: Ulid::new(),
            field,
            ui,
            backend,
            renderer,
            min_query_len: config.min_query_len,
            ordering: config.response_ordering,
            latest_request: AtomicU64::new(0),
        };

        tracing::debug!(session.id = %searcher.session_id, input = field.input, "search session bound");

        Self {
            debounce: config.debounce(),
            pending: None,
            searcher: searcher.arc(),
        }
    }

    pub fn field(&self) -> SearchField {
        self.searcher.field
    }

    #[cfg(test)]
    pub fn has_pending(&self) -> bool {
        self.pending.as_ref().is_some_and(|pending| !pending.is_finished())
    }

    /// Schedules a search for `value` once input has been quiet for the debounce window.
    pub fn on_input(&mut self, value: &str) {
        if let Some(pending) = self.pending.take() {
            pending.abort();
        }

        let searcher = self.searcher.clone();
        let debounce = self.debounce;
        let value = value.trim().to_owned();
        let pending = tokio::spawn(async move {
            tokio::time::sleep(debounce).await;
            searcher.perform(&value);
        });

        self.pending = pending.some();
    }

    /// Searches immediately, bypassing the debounce window.
    pub fn search_now(&self, value: &str) {
        self.searcher.perform(value.trim());
    }

    pub fn clear(&self) {
        self.searcher.clear();
    }
}

impl<U, B> Drop for SearchSession<U, B> {
    fn drop(&mut self) {
        if let Some(pending) = self.pending.take() {
            pending.abort();
        }
    }
}
