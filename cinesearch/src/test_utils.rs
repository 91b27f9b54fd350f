use crate::{
    api::{
        models::{CommentRequest, CommentResponse, SearchResult},
        CommentBackend, SearchBackend,
    },
    error::Error,
    utils::any::Any,
};
use parking_lot::Mutex;
use std::{collections::HashMap, io::Error as IoError, sync::Arc, time::Duration};

type Canned<T> = (Duration, Result<T, String>);

#[derive(Default)]
struct State {
    searches: Vec<String>,
    search_responses: HashMap<String, Canned<Vec<SearchResult>>>,
    comments: Vec<CommentRequest>,
    comment_response: Option<Canned<CommentResponse>>,
}

/// Scriptable stand-in for the site's endpoints that records every call.
#[derive(Clone, Default)]
pub struct FakeApi {
    state: Arc<Mutex<State>>,
}

impl FakeApi {
    pub fn respond(&self, query: &str, delay: Duration, response: Result<Vec<SearchResult>, String>) {
        self.state
            .lock()
            .search_responses
            .insert(query.into(), (delay, response));
    }

    pub fn fail(&self, query: &str, delay: Duration) {
        self.respond(query, delay, "connection refused".to_owned().err());
    }

    pub fn respond_to_comments(&self, delay: Duration, response: Result<CommentResponse, String>) {
        self.state.lock().comment_response = (delay, response).some();
    }

    pub fn searches(&self) -> Vec<String> {
        self.state.lock().searches.clone()
    }

    pub fn comments(&self) -> Vec<CommentRequest> {
        self.state.lock().comments.clone()
    }

    fn failure(message: String) -> Error {
        IoError::other(message).into()
    }
}

impl SearchBackend for FakeApi {
    async fn search(&self, query: &str) -> Result<Vec<SearchResult>, Error> {
        let (delay, response) = {
            let mut state = self.state.lock();

            state.searches.push(query.into());
            state
                .search_responses
                .get(query)
                .cloned()
                .unwrap_or((Duration::ZERO, Ok(std::vec![])))
        };

        tokio::time::sleep(delay).await;

        response.map_err(Self::failure)
    }
}

impl CommentBackend for FakeApi {
    async fn post_comment(&self, request: CommentRequest) -> Result<CommentResponse, Error> {
        let (delay, response) = {
            let mut state = self.state.lock();

            state.comments.push(request);
            state.comment_response.clone().unwrap_or((
                Duration::ZERO,
                Ok(CommentResponse {
                    success: true,
                    error: None,
                }),
            ))
        };

        tokio::time::sleep(delay).await;

        response.map_err(Self::failure)
    }
}

pub fn movie(title: &str, url_key: &str) -> SearchResult {
    SearchResult {
        id: 1_u64.some(),
        title: title.into(),
        url_key: url_key.into(),
        poster_url: None,
        subtitle: None,
        category: None,
        views: 0_u64.some(),
    }
}
