use std::io::{self, BufRead, Write};
use std::path::PathBuf;
use std::sync::mpsc;
use std::thread;

use anyhow::Context;
use jobdesk_core::{update, AppState, BookmarkBackend, BookmarkStore, Msg, SearchParams};
use jobdesk_engine::{ensure_data_dir, JsonBookmarkFile};
use jobdesk_logging::{jobdesk_info, jobdesk_warn};

use super::config::{load_config, AppConfig, CONFIG_FILENAME};
use super::effects::EffectRunner;
use super::persistence;
use super::ui::commands::{parse_line, UiCommand, HELP};
use super::ui::render::render;

/// Everything the event thread reacts to.
enum Input {
    Msg(Msg),
    Command(UiCommand),
    Closed,
}

impl From<Msg> for Input {
    fn from(msg: Msg) -> Self {
        Input::Msg(msg)
    }
}

pub fn run_app() -> anyhow::Result<()> {
    let config_path = std::env::args()
        .nth(1)
        .map(PathBuf::from)
        .unwrap_or_else(|| PathBuf::from(CONFIG_FILENAME));
    let (config, config_error) = match load_config(&config_path) {
        Ok(config) => (config, None),
        Err(err) => (AppConfig::default(), Some(err)),
    };

    ensure_data_dir(&config.data_dir).context("preparing data directory")?;
    jobdesk_logging::initialize(&config.log_settings());
    if let Some(err) = config_error {
        jobdesk_warn!("{:#}; using defaults", err);
    }
    jobdesk_info!("Starting with api {}", config.api_base_url);

    let (input_tx, input_rx) = mpsc::channel::<Input>();
    let mut session = Session::new(&config, input_tx.clone());
    spawn_stdin_reader(input_tx);

    if let Some(params) = persistence::load_params(&config.data_dir) {
        session.dispatch(Msg::ParamsRestored(params));
    }
    session.notice = Some(HELP.to_string());
    session.render_if_dirty(true)?;

    while let Ok(input) = input_rx.recv() {
        let forced = match input {
            Input::Msg(msg) => {
                session.dispatch(msg);
                false
            }
            Input::Command(UiCommand::Quit) | Input::Closed => break,
            Input::Command(command) => {
                session.handle_command(command);
                true
            }
        };
        session.render_if_dirty(forced)?;
    }

    persistence::save_params(&config.data_dir, &session.state.params());
    jobdesk_info!("Session saved; exiting");
    Ok(())
}

struct Session {
    state: AppState,
    bookmarks: BookmarkStore<JsonBookmarkFile>,
    runner: EffectRunner,
    show_bookmarks: bool,
    notice: Option<String>,
}

impl Session {
    fn new(config: &AppConfig, inbox: mpsc::Sender<Input>) -> Self {
        let backend = JsonBookmarkFile::new(config.data_dir.clone());
        let bookmarks = match BookmarkStore::open(backend) {
            Ok(store) => store,
            Err(err) => {
                jobdesk_warn!("{}; bookmarks are read-only until the file can be read", err);
                BookmarkStore::unloaded(JsonBookmarkFile::new(config.data_dir.clone()))
            }
        };

        Self {
            state: AppState::with_debounce_delay(config.debounce_delay()),
            bookmarks,
            runner: EffectRunner::new(config.source_settings(), inbox),
            show_bookmarks: false,
            notice: None,
        }
    }

    fn dispatch(&mut self, msg: Msg) {
        let state = std::mem::take(&mut self.state);
        let (state, effects) = update(state, msg);
        self.state = state;
        self.runner.enqueue(effects);
    }

    fn handle_command(&mut self, command: UiCommand) {
        self.notice = None;
        match command {
            UiCommand::Search(text) => self.dispatch(Msg::SearchTextChanged(text)),
            UiCommand::Sort(key) => self.dispatch(Msg::SortChanged(key)),
            UiCommand::Page(page) => self.dispatch(Msg::PageChanged(page)),
            UiCommand::NextPage => self.dispatch(Msg::NextPage),
            UiCommand::PreviousPage => self.dispatch(Msg::PreviousPage),
            UiCommand::Open(id) => self.dispatch(Msg::JobSelected(Some(id))),
            UiCommand::Close => self.dispatch(Msg::JobSelected(None)),
            UiCommand::ToggleBookmark(id) => {
                self.notice = Some(match self.bookmarks.toggle(id) {
                    Ok(true) => format!("Bookmarked #{id}"),
                    Ok(false) => format!("Removed bookmark #{id}"),
                    Err(err) if self.bookmarks.is_loaded() => {
                        format!("{err}; change kept for this session only")
                    }
                    Err(err) => err.to_string(),
                });
                if let Some(msg) = bookmarks_view_refresh(self.show_bookmarks, &self.bookmarks) {
                    self.dispatch(msg);
                }
            }
            UiCommand::ToggleBookmarksView => {
                self.show_bookmarks = !self.show_bookmarks;
                if let Some(msg) = bookmarks_view_refresh(self.show_bookmarks, &self.bookmarks) {
                    self.dispatch(msg);
                }
            }
            UiCommand::Retry => self.dispatch(Msg::RetryClicked),
            UiCommand::Params(query) => {
                self.dispatch(Msg::ParamsRestored(SearchParams::parse(&query)));
            }
            UiCommand::Help => self.notice = Some(HELP.to_string()),
            UiCommand::Invalid(message) => self.notice = Some(message),
            UiCommand::Quit => {}
        }
    }

    fn render_if_dirty(&mut self, forced: bool) -> io::Result<()> {
        if !self.state.consume_dirty() && !forced {
            return Ok(());
        }
        let view = self.state.view(self.bookmarks.ids());
        let mut stdout = io::stdout().lock();
        for line in render(&view, self.show_bookmarks, self.notice.as_deref()) {
            writeln!(stdout, "{line}")?;
        }
        stdout.flush()
    }
}

/// The open bookmarks view needs details for every listed id.
fn bookmarks_view_refresh<B: BookmarkBackend>(
    show_bookmarks: bool,
    bookmarks: &BookmarkStore<B>,
) -> Option<Msg> {
    show_bookmarks.then(|| Msg::BookmarksOpened(bookmarks.list().collect()))
}

fn spawn_stdin_reader(inbox: mpsc::Sender<Input>) {
    thread::spawn(move || {
        for line in io::stdin().lock().lines() {
            let input = match line {
                Ok(line) => Input::Command(parse_line(&line)),
                Err(err) => {
                    jobdesk_warn!("stdin closed: {}", err);
                    break;
                }
            };
            if inbox.send(input).is_err() {
                return;
            }
        }
        let _ = inbox.send(Input::Closed);
    });
}
