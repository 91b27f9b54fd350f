pub mod client;
pub mod models;

use crate::{
    api::models::{CommentRequest, CommentResponse, SearchResult},
    error::Error,
};
use std::future::Future;

pub trait SearchBackend: Clone + Send + Sync + 'static {
    fn search(&self, query: &str) -> impl Future<Output = Result<Vec<SearchResult>, Error>> + Send;
}

pub trait CommentBackend: Clone + Send + Sync + 'static {
    fn post_comment(&self, request: CommentRequest) -> impl Future<Output = Result<CommentResponse, Error>> + Send;
}
