use serde::{Deserialize, Serialize};

/// One movie as returned by `GET /api/search`.
#[derive(Clone, Debug, Deserialize, PartialEq, Serialize)]
pub struct SearchResult {
    #[serde(default)]
    pub id: Option<u64>,

    pub title: String,
    pub url_key: String,

    #[serde(default)]
    pub poster_url: Option<String>,

    #[serde(default)]
    pub subtitle: Option<String>,

    #[serde(default)]
    pub category: Option<String>,

    // NOTE: null and missing both render as zero views
    #[serde(default)]
    pub views: Option<u64>,
}

impl SearchResult {
    pub fn href(&self) -> String {
        std::format!("/movie/{url_key}", url_key = self.url_key)
    }
}

#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct CommentRequest {
    pub movie_id: u64,
    pub content: String,
}

#[derive(Clone, Debug, Default, Deserialize, PartialEq)]
pub struct CommentResponse {
    #[serde(default)]
    pub success: bool,

    #[serde(default)]
    pub error: Option<String>,
}
