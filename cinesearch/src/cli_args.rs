use crate::{
    api::{client::ApiClient, models::CommentRequest, CommentBackend, SearchBackend},
    config::Config,
    dom::document::Document,
    error::Error,
    page::Page,
    search::{
        query::SearchQuery,
        render::{Renderer, ResultsView, Variant},
    },
    storage::{FileStorage, MemoryStorage, Storage},
    terminal::{render::plain_lines, Terminal},
    utils::any::Any,
};
use clap::{Parser, Subcommand};
use std::path::PathBuf;

#[derive(Clone, Subcommand)]
pub enum Command {
    /// Run one search and print the rendered results
    Search {
        query: String,

        #[arg(long)]
        mobile: bool,

        #[arg(long)]
        html: bool,
    },

    /// Post a comment on a movie
    Comment { movie_id: u64, content: String },
}

#[derive(Clone, Parser)]
pub struct CliArgs {
    #[command(subcommand)]
    pub command: Option<Command>,

    #[arg(long)]
    pub base_url: Option<String>,

    #[arg(long = "config")]
    pub config_filepath: Option<PathBuf>,

    #[arg(long = "storage")]
    pub storage_filepath: Option<PathBuf>,

    #[arg(long = "logs")]
    pub log_filepath: Option<PathBuf>,
}

impl CliArgs {
    fn init_tracing(&self) -> Result<(), Error> {
        let Some(log_filepath) = &self.log_filepath else {
            return ().ok();
        };
        let log_file = log_filepath.create()?;

        tracing_subscriber::fmt().with_writer(log_file).json().init();

        ().ok()
    }

    fn config(&self) -> Result<Config, Error> {
        let mut config = match &self.config_filepath {
            Some(config_filepath) => Config::from_filepath(config_filepath)?,
            None => Config::default(),
        };

        if let Some(base_url) = &self.base_url {
            config.base_url.clone_from(base_url);
        }

        if let Some(storage_filepath) = &self.storage_filepath {
            config.storage_path = storage_filepath.clone().some();
        }

        config.ok()
    }

    async fn search(api: &ApiClient, config: &Config, query: &str, variant: Variant, html: bool) -> Result<(), Error> {
        let Some(query) = SearchQuery::parse(query, config.min_query_len) else {
            tracing::info!(query, "query too short, not searching");

            return ().ok();
        };
        let renderer = Renderer::new(config);
        let view = match api.search(query.as_str()).await {
            Ok(results) => renderer.view(&results),
            Err(error) => tracing::warn!(%query, %error, "search failed").with(ResultsView::Failed),
        };
        let output = if html {
            renderer.render(view, variant).html
        } else {
            plain_lines(&view, &config.labels).join("\n")
        };

        std::io::stdout().lock().write_all_and_flush(std::format!("{output}\n").as_bytes())?.ok()
    }

    async fn comment(api: &ApiClient, config: &Config, movie_id: u64, content: String) -> Result<(), Error> {
        let content = content.trim().to_owned();

        if content.is_empty() {
            return ().ok();
        }

        let response = api.post_comment(CommentRequest { movie_id, content }).await;
        let message = match response {
            Ok(response) if response.success => config.labels.comment_sent.clone(),
            Ok(response) => response.error.unwrap_or_else(|| config.labels.comment_failed.clone()),
            Err(error) => tracing::warn!(movie_id, %error).with(config.labels.comment_failed.clone()),
        };

        std::io::stdout().lock().write_all_and_flush(std::format!("{message}\n").as_bytes())?.ok()
    }

    async fn interactive<S: Storage>(api: ApiClient, storage: S, config: Config) -> Result<(), Error> {
        let config = config.arc();
        let ui = Document::site().shared();
        let page = Page::load(ui, api, storage, config.clone());

        Terminal::run(page, &config).await
    }

    pub async fn run(self) -> Result<(), Error> {
        self.init_tracing()?;

        let config = self.config()?;
        let api = ApiClient::new(&config.base_url)?;

        match self.command {
            Some(Command::Search { query, mobile, html }) => {
                let variant = if mobile { Variant::Mobile } else { Variant::Desktop };

                Self::search(&api, &config, &query, variant, html).await?;
            }
            Some(Command::Comment { movie_id, content }) => Self::comment(&api, &config, movie_id, content).await?,
            None => match config.storage_path.clone() {
                Some(storage_path) => {
                    let storage = FileStorage::open(&storage_path)?;

                    Self::interactive(api, storage, config).await?;
                }
                None => Self::interactive(api, MemoryStorage::default(), config).await?,
            },
        }

        ().ok()
    }
}
