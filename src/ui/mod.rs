//! Terminal dashboard
//!
//! Sidebar with the query form on the left, ranking table and per-keyword
//! news sections on the right, status line at the bottom. A triggered
//! query runs on a background task and reports back over a channel, so
//! the UI stays responsive; only one query can be in flight at a time.
//!
//! Keys: Tab/Shift-Tab move focus, Left/Right cycle choice fields, Enter
//! runs the query, Up/Down scroll the news pane, Esc quits.

pub mod form;
mod render;

use crate::api::ApiClient;
use crate::config::Config;
use crate::credentials::Credentials;
use crate::error::Error;
use crate::models::NewsSort;
use crate::pipeline::{self, QueryOutcome};
use anyhow::Result;
use crossterm::event::{self, Event, KeyCode, KeyEventKind, KeyModifiers};
use form::QueryForm;
use std::sync::Arc;
use std::time::Duration;
use tokio::sync::mpsc;

/// What the main pane currently shows
enum Phase {
    /// Nothing run yet
    Idle,
    /// A query is in flight
    Loading,
    /// A query completed (possibly with an empty ranking)
    Ready(QueryOutcome),
    /// The query failed; holds the user-facing message
    Failed(String),
}

struct App {
    api: Arc<ApiClient>,
    /// Credentials from the secrets file / environment; session entries
    /// from the form are merged in per query and never stored back
    resolved: Credentials,
    form: QueryForm,
    phase: Phase,
    status: String,
    news_scroll: u16,
    news_display: u32,
    should_quit: bool,
    tx: mpsc::Sender<Result<QueryOutcome, Error>>,
    rx: mpsc::Receiver<Result<QueryOutcome, Error>>,
}

impl App {
    fn new(api: ApiClient, resolved: Credentials, news_display: u32) -> Self {
        let (tx, rx) = mpsc::channel(1);
        let status = if resolved.is_complete() {
            String::from("Credentials configured. Enter to run, Esc to quit.")
        } else {
            Error::MissingCredentials.user_message()
        };

        Self {
            api: Arc::new(api),
            resolved,
            form: QueryForm::default(),
            phase: Phase::Idle,
            status,
            news_scroll: 0,
            news_display,
            should_quit: false,
            tx,
            rx,
        }
    }

    /// Credentials for the next query: configured sources first, then
    /// whatever the user typed into the sidebar this session
    fn session_credentials(&self) -> Credentials {
        self.resolved
            .clone()
            .or_session(&self.form.client_id, &self.form.client_secret)
    }

    fn handle_key(&mut self, code: KeyCode, modifiers: KeyModifiers) {
        match code {
            KeyCode::Esc => self.should_quit = true,
            KeyCode::Char('c') if modifiers.contains(KeyModifiers::CONTROL) => {
                self.should_quit = true;
            }
            KeyCode::Tab => self.form.focus_next(),
            KeyCode::BackTab => self.form.focus_prev(),
            KeyCode::Left => self.form.cycle(false),
            KeyCode::Right => self.form.cycle(true),
            KeyCode::Up => self.news_scroll = self.news_scroll.saturating_sub(1),
            KeyCode::Down => self.news_scroll = self.news_scroll.saturating_add(1),
            KeyCode::Enter => self.trigger(),
            KeyCode::Backspace => self.form.backspace(),
            KeyCode::Char(c) => self.form.input_char(c),
            _ => {}
        }
    }

    /// Start a query on a background task, unless one is already running
    fn trigger(&mut self) {
        if matches!(self.phase, Phase::Loading) {
            return;
        }

        let credentials = self.session_credentials();
        if !credentials.is_complete() {
            // Refused before any network call.
            self.status = Error::MissingCredentials.user_message();
            return;
        }

        let query = match self.form.build_query() {
            Ok(query) => query,
            Err(e) => {
                self.status = e.user_message();
                return;
            }
        };

        self.phase = Phase::Loading;
        self.news_scroll = 0;
        self.status = String::from("Fetching search trend...");

        let api = Arc::clone(&self.api);
        let tx = self.tx.clone();
        let display = self.news_display;
        tokio::spawn(async move {
            let outcome = pipeline::execute(&api, &credentials, &query, display, NewsSort::Date).await;
            // The receiver only disappears when the app is shutting down.
            let _ = tx.send(outcome).await;
        });
    }

    fn apply(&mut self, outcome: Result<QueryOutcome, Error>) {
        match outcome {
            Ok(outcome) => {
                self.status = if outcome.ranking.is_empty() {
                    String::from("No data for this period/keywords.")
                } else {
                    format!("Ranked {} keywords.", outcome.ranking.len())
                };
                self.phase = Phase::Ready(outcome);
            }
            Err(e) => {
                self.status = e.user_message();
                self.phase = Phase::Failed(e.user_message());
            }
        }
    }

    async fn run(&mut self, terminal: &mut ratatui::DefaultTerminal) -> Result<()> {
        while !self.should_quit {
            terminal.draw(|frame| render::draw(frame, self))?;

            if event::poll(Duration::from_millis(100))? {
                if let Event::Key(key) = event::read()? {
                    if key.kind == KeyEventKind::Press {
                        self.handle_key(key.code, key.modifiers);
                    }
                }
            }

            while let Ok(outcome) = self.rx.try_recv() {
                self.apply(outcome);
            }
        }
        Ok(())
    }
}

/// Run the dashboard until the user quits
pub async fn run(config: Config) -> Result<()> {
    let api = ApiClient::new(&config.api)?;
    let resolved = Credentials::resolve(&config.secrets.path);

    let mut terminal = ratatui::init();
    let result = App::new(api, resolved, config.api.news_display)
        .run(&mut terminal)
        .await;
    ratatui::restore();
    result
}
