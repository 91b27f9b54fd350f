use crate::{
    api::models::SearchResult,
    config::{Config, Labels},
};

/// Which copy of the search box a container belongs to; selects the markup's class prefix.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum Variant {
    Mobile,
    Desktop,
}

impl Variant {
    pub fn prefix(self) -> &'static str {
        match self {
            Self::Mobile => "mobile",
            Self::Desktop => "desktop",
        }
    }

    // NOTE: the desktop stylesheet has no loading class, so the desktop box reuses its no-results class
    fn loading_class(self) -> &'static str {
        match self {
            Self::Mobile => "mobile-search-loading",
            Self::Desktop => "desktop-search-no-results",
        }
    }

    fn no_results_class(self) -> &'static str {
        match self {
            Self::Mobile => "mobile-search-no-results",
            Self::Desktop => "desktop-search-no-results",
        }
    }
}

#[derive(Clone, Debug, PartialEq)]
pub struct ResultEntry {
    pub href: String,
    pub poster: String,
    pub title: String,
    pub subtitle: Option<String>,
    pub meta: String,
}

/// What a results container currently shows.
#[derive(Clone, Debug, PartialEq)]
pub enum ResultsView {
    Loading,
    NoResults,
    Failed,
    Results(Vec<ResultEntry>),
}

#[derive(Clone, Debug, PartialEq)]
pub struct Rendered {
    pub view: ResultsView,
    pub html: String,
}

pub struct Renderer {
    labels: Labels,
    poster_fallback: String,
}

impl Renderer {
    pub fn new(config: &Config) -> Self {
        Self {
            labels: config.labels.clone(),
            poster_fallback: config.poster_fallback.clone(),
        }
    }

    fn non_empty(value: Option<&String>) -> Option<&str> {
        value.map(String::as_str).filter(|value| !value.is_empty())
    }

    pub fn entry(&self, result: &SearchResult) -> ResultEntry {
        let poster = Self::non_empty(result.poster_url.as_ref()).unwrap_or(&self.poster_fallback);
        let category = Self::non_empty(result.category.as_ref()).unwrap_or(&self.labels.default_category);
        let meta = std::format!(
            "{category} • {views} {suffix}",
            views = result.views.unwrap_or_default(),
            suffix = self.labels.views_suffix
        );

        ResultEntry {
            href: result.href(),
            poster: poster.to_owned(),
            title: result.title.clone(),
            subtitle: Self::non_empty(result.subtitle.as_ref()).map(str::to_owned),
            meta,
        }
    }

    pub fn view(&self, results: &[SearchResult]) -> ResultsView {
        if results.is_empty() {
            return ResultsView::NoResults;
        }

        ResultsView::Results(results.iter().map(|result| self.entry(result)).collect())
    }

    pub fn render(&self, view: ResultsView, variant: Variant) -> Rendered {
        let html = self.html(&view, variant);

        Rendered { view, html }
    }

    fn placeholder(class: &str, body: &str) -> String {
        std::format!(r#"<div class="{class}">{body}</div>"#)
    }

    fn html(&self, view: &ResultsView, variant: Variant) -> String {
        match view {
            ResultsView::Loading => Self::placeholder(
                variant.loading_class(),
                &std::format!(
                    r#"<i class="fas fa-spinner fa-spin"></i> {loading}"#,
                    loading = escape(&self.labels.loading)
                ),
            ),
            ResultsView::NoResults => Self::placeholder(variant.no_results_class(), &escape(&self.labels.no_results)),
            ResultsView::Failed => Self::placeholder(variant.no_results_class(), &escape(&self.labels.error)),
            ResultsView::Results(entries) => entries
                .iter()
                .map(|entry| self.entry_html(entry, variant.prefix()))
                .collect(),
        }
    }

    fn entry_html(&self, entry: &ResultEntry, prefix: &str) -> String {
        let title = escape(&entry.title);
        let subtitle = entry.subtitle.as_deref().map_or_else(String::new, |subtitle| {
            std::format!(
                r#"<div class="{prefix}-search-result-subtitle">{subtitle}</div>"#,
                subtitle = escape(subtitle)
            )
        });

        std::format!(
            concat!(
                r#"<a href="{href}" class="{prefix}-search-result-item">"#,
                r#"<img src="{poster}" alt="{title}" class="{prefix}-search-result-poster" onerror="this.src='{fallback}'">"#,
                r#"<div class="{prefix}-search-result-info">"#,
                r#"<div class="{prefix}-search-result-title">{title}</div>"#,
                "{subtitle}",
                r#"<div class="{prefix}-search-result-meta">{meta}</div>"#,
                "</div></a>",
            ),
            prefix = prefix,
            title = title,
            subtitle = subtitle,
            href = escape(&entry.href),
            poster = escape(&entry.poster),
            fallback = escape(&self.poster_fallback),
            meta = escape(&entry.meta),
        )
    }
}

pub fn escape(text: &str) -> String {
    let mut escaped = String::with_capacity(text.len());

    for chr in text.chars() {
        match chr {
            '&' => escaped.push_str("&amp;"),
            '<' => escaped.push_str("&lt;"),
            '>' => escaped.push_str("&gt;"),
            '"' => escaped.push_str("&quot;"),
            '\'' => escaped.push_str("&#39;"),
            _ => escaped.push(chr),
        }
    }

    escaped
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::utils::any::Any;

    fn movie_a() -> SearchResult {
        r#"{"title": "Movie A", "url_key": "movie-a", "views": 10}"#
            .deserialize_from_json::<SearchResult>()
            .unwrap()
    }

    fn renderer() -> Renderer {
        Renderer::new(&Config::default())
    }

    #[test]
    fn bare_result_uses_defaults() {
        let renderer = renderer();
        let rendered = renderer.render(renderer.view(&[movie_a()]), Variant::Desktop);

        assert!(rendered.html.contains(r#"<a href="/movie/movie-a" class="desktop-search-result-item">"#));
        assert!(rendered.html.contains(r#"<img src="/static/images/no-poster.png""#));
        assert!(rendered.html.contains("onerror=\"this.src='/static/images/no-poster.png'\""));
        assert!(!rendered.html.contains("search-result-subtitle"));
        assert!(rendered.html.contains("Chưa phân loại • 10 lượt xem"));

        let ResultsView::Results(entries) = rendered.view else {
            panic!("expected results");
        };

        assert_eq!(entries.len(), 1);
        assert_eq!(entries[0].subtitle, None);
        assert_eq!(entries[0].meta, "Chưa phân loại • 10 lượt xem");
    }

    #[test]
    fn null_views_render_as_zero() {
        let renderer = renderer();
        let results = r#"[{"id": 4, "title": "Movie C", "url_key": "movie-c", "views": null}]"#
            .deserialize_from_json::<Vec<SearchResult>>()
            .unwrap();
        let ResultsView::Results(entries) = renderer.view(&results) else {
            panic!("expected results");
        };

        assert_eq!(entries[0].meta, "Chưa phân loại • 0 lượt xem");
    }

    #[test]
    fn full_result_uses_its_own_fields() {
        let renderer = renderer();
        let result = SearchResult {
            poster_url: "/static/posters/b.jpg".to_owned().some(),
            subtitle: "Phần 2".to_owned().some(),
            category: "Hành động".to_owned().some(),
            ..movie_a()
        };
        let html = renderer.render(renderer.view(&[result]), Variant::Mobile).html;

        assert!(html.contains(r#"class="mobile-search-result-item""#));
        assert!(html.contains(r#"<img src="/static/posters/b.jpg""#));
        assert!(html.contains(r#"<div class="mobile-search-result-subtitle">Phần 2</div>"#));
        assert!(html.contains("Hành động • 10 lượt xem"));
    }

    #[test]
    fn empty_strings_count_as_missing() {
        let result = SearchResult {
            poster_url: String::new().some(),
            subtitle: String::new().some(),
            category: String::new().some(),
            ..movie_a()
        };

        assert_eq!(renderer().entry(&result), renderer().entry(&movie_a()));
    }

    #[test]
    fn results_keep_server_order() {
        let renderer = renderer();
        let first = movie_a();
        let second = SearchResult {
            title: "Movie B".into(),
            url_key: "movie-b".into(),
            ..movie_a()
        };
        let html = renderer.render(renderer.view(&[second, first]), Variant::Desktop).html;

        assert!(html.find("movie-b").unwrap() < html.find("movie-a").unwrap());
    }

    #[test]
    fn empty_response_has_no_links() {
        let renderer = renderer();
        let rendered = renderer.render(renderer.view(&[]), Variant::Mobile);

        assert_eq!(rendered.view, ResultsView::NoResults);
        assert_eq!(
            rendered.html,
            r#"<div class="mobile-search-no-results">Không tìm thấy phim nào</div>"#
        );
        assert!(!rendered.html.contains("<a "));
    }

    #[test]
    fn placeholders_per_variant() {
        let renderer = renderer();

        assert!(renderer
            .render(ResultsView::Loading, Variant::Mobile)
            .html
            .starts_with(r#"<div class="mobile-search-loading"><i class="fas fa-spinner fa-spin"></i>"#));
        assert!(renderer
            .render(ResultsView::Loading, Variant::Desktop)
            .html
            .starts_with(r#"<div class="desktop-search-no-results">"#));
        assert_eq!(
            renderer.render(ResultsView::Failed, Variant::Desktop).html,
            r#"<div class="desktop-search-no-results">Có lỗi xảy ra</div>"#
        );
    }

    #[test]
    fn titles_are_escaped() {
        let renderer = renderer();
        let result = SearchResult {
            title: r#"<b>"Tom" & Jerry</b>"#.into(),
            ..movie_a()
        };
        let html = renderer.render(renderer.view(&[result]), Variant::Desktop).html;

        assert!(html.contains("&lt;b&gt;&quot;Tom&quot; &amp; Jerry&lt;/b&gt;"));
        assert!(!html.contains("<b>"));
    }
}
