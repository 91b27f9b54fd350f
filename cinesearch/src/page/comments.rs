use crate::{
    api::{models::CommentRequest, CommentBackend},
    config::Labels,
    dom::{ids, UiBinding},
    error::Error,
};
use parking_lot::Mutex;
use std::sync::Arc;

pub struct CommentForm<U, A> {
    ui: Arc<Mutex<U>>,
    api: A,
    labels: Arc<Labels>,
    movie_id: Option<u64>,
}

impl<U: UiBinding, A: CommentBackend> CommentForm<U, A> {
    const MOVIE_ID_KEY: &'static str = "movieId";

    pub fn new(ui: Arc<Mutex<U>>, api: A, labels: Arc<Labels>, movie_id: Option<u64>) -> Self {
        Self {
            ui,
            api,
            labels,
            movie_id,
        }
    }

    fn movie_id(&self, ui: &U) -> Option<u64> {
        self.movie_id.or_else(|| {
            ui.data(ids::COMMENT_FORM, Self::MOVIE_ID_KEY)?
                .trim()
                .parse()
                .ok()
        })
    }

    /// Posts the textarea's content in the background and alerts the outcome.
    pub fn submit(&self) {
        let (content, movie_id) = {
            let ui = self.ui.lock();
            let content = ui.value(ids::COMMENT_CONTENT).unwrap_or_default().trim().to_owned();

            (content, self.movie_id(&ui))
        };

        if content.is_empty() {
            return;
        }

        let Some(movie_id) = movie_id else {
            let error = Error::MissingMovieId(ids::COMMENT_FORM.into());

            tracing::warn!(%error);
            self.ui.lock().alert(&self.labels.comment_failed);

            return;
        };
        let ui = self.ui.clone();
        let api = self.api.clone();
        let labels = self.labels.clone();
        let request = CommentRequest { movie_id, content };

        tokio::spawn(async move {
            let response = api.post_comment(request).await;
            let mut ui = ui.lock();

            match response {
                Ok(response) if response.success => {
                    ui.set_value(ids::COMMENT_CONTENT, String::new());
                    ui.alert(&labels.comment_sent);
                }
                Ok(response) => {
                    tracing::info!(movie_id, error = ?response.error, "comment rejected");
                    ui.alert(response.error.as_deref().unwrap_or(&labels.comment_failed));
                }
                Err(error) => {
                    tracing::warn!(movie_id, %error, "comment submission failed");
                    ui.alert(&labels.comment_failed);
                }
            }
        });
    }
}
