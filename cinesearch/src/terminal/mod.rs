pub mod render;

use crate::{
    api::{CommentBackend, SearchBackend},
    config::Config,
    dom::{document::Document, ids},
    error::Error,
    page::{Click, Focus, Input, Page, PageEvent},
    storage::Storage,
    terminal::render::Render,
    utils::any::Any,
};
use crossterm::{
    cursor::{Hide, Show},
    event::{Event, EventStream, KeyCode, KeyEvent, KeyEventKind, KeyModifiers},
    terminal::{Clear, ClearType, EnterAlternateScreen, LeaveAlternateScreen},
    QueueableCommand,
};
use futures::StreamExt;
use ratatui::{backend::CrosstermBackend, Terminal as RatatuiTerminal};
use std::{
    io::{Stdout, Write},
    time::Duration,
};

/// What a key press does on the page.
#[derive(Debug, PartialEq)]
enum Action {
    Dispatch(PageEvent),
    Quit,
    Ignore,
}

/// Full-screen front-end that drives a [`Page`] from the keyboard through its desktop search box.
pub struct Terminal {
    terminal: RatatuiTerminal<CrosstermBackend<Stdout>>,
}

impl Terminal {
    const REDRAW_INTERVAL: Duration = Duration::from_millis(50);
    const OUTSIDE_TARGET: &'static str = ids::BODY;

    fn new() -> Result<Self, Error> {
        let backend = CrosstermBackend::new(std::io::stdout());
        let mut terminal = Self {
            terminal: RatatuiTerminal::new(backend)?,
        };

        terminal.on_init()?;

        terminal.ok()
    }

    fn on_init(&mut self) -> Result<(), Error> {
        crossterm::terminal::enable_raw_mode()?;
        self.terminal
            .backend_mut()
            .queue(EnterAlternateScreen)?
            .queue(Hide)?
            .queue(Clear(ClearType::All))?
            .flush()?;

        ().ok()
    }

    fn on_drop(&mut self) -> Result<(), Error> {
        crossterm::terminal::disable_raw_mode()?;
        self.terminal
            .backend_mut()
            .queue(LeaveAlternateScreen)?
            .queue(Show)?
            .flush()?;

        ().ok()
    }

    fn action(value: &mut String, key_event: KeyEvent) -> Action {
        let input = |value: &String| {
            Input {
                target: ids::DESKTOP_SEARCH_INPUT.into(),
                value: value.clone(),
            }
            .convert::<PageEvent>()
        };

        if key_event.kind != KeyEventKind::Press {
            return Action::Ignore;
        }

        match (key_event.code, key_event.modifiers) {
            (KeyCode::Char('c' | 'q'), KeyModifiers::CONTROL) => Action::Quit,
            (KeyCode::Char(chr), KeyModifiers::NONE | KeyModifiers::SHIFT) => {
                value.push(chr);

                Action::Dispatch(input(value))
            }
            (KeyCode::Backspace, _) => {
                value.pop();

                Action::Dispatch(input(value))
            }
            (KeyCode::Enter, _) => Action::Dispatch(
                Focus {
                    target: ids::DESKTOP_SEARCH_INPUT.into(),
                }
                .into(),
            ),
            (KeyCode::Esc, _) => Action::Dispatch(
                Click {
                    target: Self::OUTSIDE_TARGET.into(),
                }
                .into(),
            ),
            (KeyCode::Tab, _) => Action::Dispatch(
                Click {
                    target: ids::SIDEBAR_TOGGLE.into(),
                }
                .into(),
            ),
            _ => Action::Ignore,
        }
    }

    fn draw<A, S>(&mut self, page: &Page<Document, A, S>, config: &Config) -> Result<(), Error>
    where
        A: SearchBackend + CommentBackend,
        S: Storage,
    {
        let document = page.ui().lock();
        let render = Render::new(&document, &config.labels);

        self.terminal.draw(|frame| render.render(frame))?.unit();

        ().ok()
    }

    pub async fn run<A, S>(mut page: Page<Document, A, S>, config: &Config) -> Result<(), Error>
    where
        A: SearchBackend + CommentBackend,
        S: Storage,
    {
        let mut terminal = Self::new()?;
        let mut events = EventStream::new();
        let mut redraw = tokio::time::interval(Self::REDRAW_INTERVAL);
        let mut value = String::new();

        loop {
            tokio::select! {
                event_res_opt = events.next() => {
                    let Some(event_res) = event_res_opt else { break };
                    let Event::Key(key_event) = event_res? else { continue };

                    match Self::action(&mut value, key_event) {
                        Action::Dispatch(event) => page.handle(event),
                        Action::Quit => break,
                        Action::Ignore => {}
                    }
                }
                _instant = redraw.tick() => {}
            }

            terminal.draw(&page, config)?;
        }

        ().ok()
    }
}

impl Drop for Terminal {
    fn drop(&mut self) {
        self.on_drop().error();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn press(code: KeyCode, modifiers: KeyModifiers) -> KeyEvent {
        KeyEvent::new(code, modifiers)
    }

    #[test]
    fn typing_dispatches_the_whole_value() {
        let mut value = String::new();

        Terminal::action(&mut value, press(KeyCode::Char('u'), KeyModifiers::NONE));

        let action = Terminal::action(&mut value, press(KeyCode::Char('P'), KeyModifiers::SHIFT));
        let expected = Input {
            target: ids::DESKTOP_SEARCH_INPUT.into(),
            value: "uP".into(),
        };

        assert_eq!(action, Action::Dispatch(expected.into()));

        let action = Terminal::action(&mut value, press(KeyCode::Backspace, KeyModifiers::NONE));

        assert_eq!(value, "u");
        assert!(matches!(action, Action::Dispatch(PageEvent::Input(_))));
    }

    #[test]
    fn control_keys_map_to_page_controls() {
        let mut value = String::new();

        assert_eq!(
            Terminal::action(&mut value, press(KeyCode::Char('c'), KeyModifiers::CONTROL)),
            Action::Quit
        );
        assert_eq!(
            Terminal::action(&mut value, press(KeyCode::Tab, KeyModifiers::NONE)),
            Action::Dispatch(
                Click {
                    target: ids::SIDEBAR_TOGGLE.into()
                }
                .into()
            )
        );
        assert!(matches!(
            Terminal::action(&mut value, press(KeyCode::Esc, KeyModifiers::NONE)),
            Action::Dispatch(PageEvent::Click(_))
        ));
        assert_eq!(
            Terminal::action(&mut value, press(KeyCode::F(5), KeyModifiers::NONE)),
            Action::Ignore
        );
        assert!(value.is_empty());
    }
}
