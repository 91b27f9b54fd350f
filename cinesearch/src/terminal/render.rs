use crate::{
    config::Labels,
    dom::{document::Document, ids, UiBinding},
    search::render::{ResultEntry, ResultsView},
};
use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::Stylize,
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};

/// Plain-text lines for a results container, one block of lines per entry.
pub fn plain_lines(view: &ResultsView, labels: &Labels) -> Vec<String> {
    match view {
        ResultsView::Loading => std::vec![labels.loading.clone()],
        ResultsView::NoResults => std::vec![labels.no_results.clone()],
        ResultsView::Failed => std::vec![labels.error.clone()],
        ResultsView::Results(entries) => entries.iter().flat_map(entry_lines).collect(),
    }
}

fn entry_lines(entry: &ResultEntry) -> Vec<String> {
    let mut lines = std::vec![std::format!("{title}  {href}", title = entry.title, href = entry.href)];

    if let Some(subtitle) = &entry.subtitle {
        lines.push(std::format!("  {subtitle}"));
    }

    lines.push(std::format!("  {meta}", meta = entry.meta));

    lines
}

pub struct Render<'a> {
    document: &'a Document,
    labels: &'a Labels,
}

impl<'a> Render<'a> {
    const TITLE: &'static str = " cinesearch ";
    const HELP: &'static str = "type to search · enter: search now · esc: dismiss · tab: sidebar · ctrl-c: quit";

    pub fn new(document: &'a Document, labels: &'a Labels) -> Self {
        Self { document, labels }
    }

    fn areas(area: Rect) -> (Rect, Rect, Rect) {
        let areas = Layout::default()
            .direction(Direction::Vertical)
            .constraints([Constraint::Length(3), Constraint::Length(1), Constraint::Min(0)])
            .split(area);

        (areas[0], areas[1], areas[2])
    }

    fn input(&self) -> Paragraph<'a> {
        let value = self.document.value(ids::DESKTOP_SEARCH_INPUT).unwrap_or_default();
        let block = Block::default().borders(Borders::ALL).title(Self::TITLE);

        Paragraph::new(value).block(block)
    }

    fn status(&self) -> Paragraph<'a> {
        let sidebar = if self.document.has_class(ids::DESKTOP_SIDEBAR, ids::class::ACTIVE) {
            "sidebar: open"
        } else {
            "sidebar: closed"
        };
        let mut spans = std::vec![Span::raw(sidebar).bold(), Span::raw("  ")];

        match self.document.alerts().last() {
            Some(alert) => spans.push(Span::raw(alert.clone()).italic()),
            None => spans.push(Span::raw(Self::HELP).dim()),
        }

        let line = Line::from(spans);

        Paragraph::new(line)
    }

    fn results(&self) -> Paragraph<'a> {
        let lines = match self.document.view(ids::DESKTOP_SEARCH_RESULTS) {
            Some(ResultsView::Results(entries)) => entries
                .iter()
                .flat_map(|entry| {
                    let mut lines = entry_lines(entry).into_iter();
                    let title = lines.next().map(|title| Line::from(Span::raw(title).bold()));

                    title.into_iter().chain(lines.map(Line::from)).collect::<Vec<_>>()
                })
                .collect(),
            Some(view) => plain_lines(view, self.labels).into_iter().map(Line::from).collect(),
            None => std::vec![],
        };

        Paragraph::new(lines)
    }

    pub fn render(&self, frame: &mut Frame) {
        let (input_area, status_area, results_area) = Self::areas(frame.size());

        frame.render_widget(self.input(), input_area);
        frame.render_widget(self.status(), status_area);
        frame.render_widget(self.results(), results_area);
    }
}
