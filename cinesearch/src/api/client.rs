use crate::{
    api::{
        models::{CommentRequest, CommentResponse, SearchResult},
        CommentBackend, SearchBackend,
    },
    error::Error,
    utils::any::Any,
};
use http::header::CONTENT_TYPE;
use reqwest::Client as ReqwestClient;
use url::Url;

/// HTTP access to the movie site's JSON endpoints.
#[derive(Clone)]
pub struct ApiClient {
    http: ReqwestClient,
    base_url: Url,
}

impl ApiClient {
    const SEARCH_PATH: &'static str = "/api/search";
    const SEARCH_PARAM: &'static str = "q";
    const COMMENTS_PATH: &'static str = "/comments";
    const JSON_CONTENT_TYPE: &'static str = "application/json";

    pub fn new(base_url: &str) -> Result<Self, Error> {
        let base_url = Url::parse(base_url)?;
        let http = ReqwestClient::new();

        Self { http, base_url }.ok()
    }

    pub fn search_url(&self, query: &str) -> Result<Url, Error> {
        let mut url = self.base_url.join(Self::SEARCH_PATH)?;

        url.query_pairs_mut().append_pair(Self::SEARCH_PARAM, query);

        url.ok()
    }

    pub fn comments_url(&self) -> Result<Url, Error> {
        self.base_url.join(Self::COMMENTS_PATH)?.ok()
    }
}

impl SearchBackend for ApiClient {
    async fn search(&self, query: &str) -> Result<Vec<SearchResult>, Error> {
        let url = self.search_url(query)?;

        tracing::debug!(%url, "searching");

        // NOTE: the status code is not inspected; anything that is not a JSON array is a parse failure
        let body = self.http.get(url).send().await?.text().await?;
        let results = body.deserialize_from_json::<Vec<SearchResult>>()?;

        tracing::debug!(query, num_results = results.len());

        results.ok()
    }
}

impl CommentBackend for ApiClient {
    async fn post_comment(&self, request: CommentRequest) -> Result<CommentResponse, Error> {
        let url = self.comments_url()?;
        let body = request.serialize()?;

        tracing::debug!(%url, movie_id = request.movie_id, "posting comment");

        let response = self
            .http
            .post(url)
            .header(CONTENT_TYPE, Self::JSON_CONTENT_TYPE)
            .body(body)
            .send()
            .await?
            .text()
            .await?;

        response.deserialize_from_json::<CommentResponse>()?.ok()
    }
}
