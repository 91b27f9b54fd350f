use crate::{error::Error, search::session::ResponseOrdering, utils::any::Any};
use serde::Deserialize;
use std::{
    path::{Path, PathBuf},
    time::Duration,
};

#[derive(Clone, Debug, Deserialize, PartialEq)]
#[serde(default)]
pub struct Labels {
    pub loading: String,
    pub no_results: String,
    pub error: String,
    pub default_category: String,
    pub views_suffix: String,
    pub comment_sent: String,
    pub comment_failed: String,
}

impl Default for Labels {
    fn default() -> Self {
        Self {
            loading: "Đang tìm...".into(),
            no_results: "Không tìm thấy phim nào".into(),
            error: "Có lỗi xảy ra".into(),
            default_category: "Chưa phân loại".into(),
            views_suffix: "lượt xem".into(),
            comment_sent: "Bình luận đã được gửi!".into(),
            comment_failed: "Lỗi gửi bình luận".into(),
        }
    }
}

#[derive(Clone, Debug, Deserialize, PartialEq)]
#[serde(default)]
pub struct Config {
    pub base_url: String,
    pub debounce_ms: u64,
    pub min_query_len: usize,
    pub response_ordering: ResponseOrdering,
    pub flash_dismiss_ms: u64,
    pub search_focus_delay_ms: u64,
    pub storage_path: Option<PathBuf>,
    pub movie_id: Option<u64>,
    pub poster_fallback: String,
    pub labels: Labels,
}

impl Config {
    const DEFAULT_BASE_URL: &'static str = "http://127.0.0.1:5000/";

    pub fn from_filepath(filepath: &Path) -> Result<Self, Error> {
        let config = filepath.read_to_string()?.deserialize_from_yaml::<Self>()?;

        tracing::info!(filepath = %filepath.display(), base_url = %config.base_url, "loaded config");

        config.ok()
    }

    pub fn debounce(&self) -> Duration {
        Duration::from_millis(self.debounce_ms)
    }

    pub fn flash_dismiss(&self) -> Duration {
        Duration::from_millis(self.flash_dismiss_ms)
    }

    pub fn search_focus_delay(&self) -> Duration {
        Duration::from_millis(self.search_focus_delay_ms)
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            base_url: Self::DEFAULT_BASE_URL.into(),
            debounce_ms: 300,
            min_query_len: 2,
            response_ordering: ResponseOrdering::default(),
            flash_dismiss_ms: 5_000,
            search_focus_delay_ms: 150,
            storage_path: None,
            movie_id: None,
            poster_fallback: "/static/images/no-poster.png".into(),
            labels: Labels::default(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_match_the_site_script() {
        let config = Config::default();

        assert_eq!(config.debounce(), Duration::from_millis(300));
        assert_eq!(config.min_query_len, 2);
        assert_eq!(config.response_ordering, ResponseOrdering::LatestOnly);
        assert_eq!(config.flash_dismiss(), Duration::from_secs(5));
        assert_eq!(config.poster_fallback, "/static/images/no-poster.png");
        assert_eq!(config.labels.default_category, "Chưa phân loại");
    }

    #[test]
    fn partial_yaml_keeps_remaining_defaults() {
        let yaml = "base_url: https://phim.example.com/\ndebounce_ms: 150\nresponse_ordering: as_received\nlabels:\n  no_results: Nothing found\n";
        let config = yaml.deserialize_from_yaml::<Config>().unwrap();

        assert_eq!(config.base_url, "https://phim.example.com/");
        assert_eq!(config.debounce(), Duration::from_millis(150));
        assert_eq!(config.response_ordering, ResponseOrdering::AsReceived);
        assert_eq!(config.labels.no_results, "Nothing found");
        assert_eq!(config.labels.loading, Labels::default().loading);
        assert_eq!(config.min_query_len, 2);
    }

    #[test]
    fn reads_config_file() {
        let dir = tempfile::tempdir().unwrap();
        let filepath = dir.path().join("cinesearch.yaml");

        std::fs::write(&filepath, "movie_id: 42\nstorage_path: /tmp/state.json\n").unwrap();

        let config = Config::from_filepath(&filepath).unwrap();

        assert_eq!(config.movie_id, Some(42));
        assert_eq!(config.storage_path.as_deref(), Some(Path::new("/tmp/state.json")));
    }
}
