use std::cell::Cell;
use std::fs;
use std::io;
use std::path::Path;
use std::rc::Rc;
use std::time::Duration;

use crossterm::event::{self, DisableBracketedPaste, EnableBracketedPaste, Event, KeyEventKind};
use crossterm::execute;
use crossterm::terminal::{
    EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode,
};
use ratatui::Terminal;
use ratatui::backend::CrosstermBackend;
use tracing::{info, warn};

use crate::io::state::{UiState, read_ui_state, write_ui_state};
use crate::io::storage::FileStorage;
use crate::io::watcher::StoreWatcher;
use crate::model::{Config, Filter, Todo, UiConfig};
use crate::store::TodoStore;

use super::input;
use super::line::LineBuffer;
use super::render;
use super::theme::Theme;

/// Current interaction mode
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Mode {
    Navigate,
    /// Typing into the new-todo field
    Insert,
    /// Editing an existing todo's title
    Edit,
}

/// An in-progress title edit
#[derive(Debug, Clone)]
pub struct EditState {
    pub id: String,
    pub buffer: LineBuffer,
}

/// Main application state. Owns the store; re-renders from it whenever
/// the store reports a change.
pub struct App {
    pub store: TodoStore,
    pub filter: Filter,
    pub mode: Mode,
    pub should_quit: bool,
    pub theme: Theme,
    pub show_key_hints: bool,
    pub show_help: bool,
    /// Cursor index into the filtered list
    pub cursor: usize,
    /// First visible row of the list
    pub scroll_offset: usize,
    /// New-todo input field
    pub input: LineBuffer,
    pub editing: Option<EditState>,
    /// Bumped by the store subscription on every change
    revision: Rc<Cell<u64>>,
    seen_revision: u64,
}

impl App {
    pub fn new(mut store: TodoStore, filter: Filter, ui: &UiConfig) -> Self {
        let revision = Rc::new(Cell::new(0u64));
        let counter = Rc::clone(&revision);
        store.subscribe(move |_| counter.set(counter.get() + 1));

        App {
            store,
            filter,
            mode: Mode::Navigate,
            should_quit: false,
            theme: Theme::from_config(ui),
            show_key_hints: ui.show_key_hints,
            show_help: false,
            cursor: 0,
            scroll_offset: 0,
            input: LineBuffer::new(),
            editing: None,
            revision,
            seen_revision: 0,
        }
    }

    /// Todos shown under the current filter
    pub fn visible(&self) -> Vec<&Todo> {
        self.store.all(self.filter)
    }

    /// The todo under the cursor
    pub fn selected(&self) -> Option<&Todo> {
        self.visible().get(self.cursor).copied()
    }

    pub fn selected_id(&self) -> Option<String> {
        self.selected().map(|t| t.id.clone())
    }

    /// True once per store change; also re-clamps the cursor.
    pub fn take_changed(&mut self) -> bool {
        let current = self.revision.get();
        if current == self.seen_revision {
            return false;
        }
        self.seen_revision = current;
        if let Some(edit) = &self.editing
            && self.store.get(&edit.id).is_none()
        {
            // Edited todo vanished (e.g. removed from another process)
            self.editing = None;
            self.mode = Mode::Navigate;
        }
        self.clamp_cursor();
        true
    }

    pub fn clamp_cursor(&mut self) {
        let len = self.visible().len();
        if len == 0 {
            self.cursor = 0;
        } else if self.cursor >= len {
            self.cursor = len - 1;
        }
    }

    /// Move the cursor onto `id` if it is visible
    pub fn focus(&mut self, id: &str) {
        if let Some(idx) = self.visible().iter().position(|t| t.id == id) {
            self.cursor = idx;
        }
    }

    /// Switch filter (the route), resetting the cursor
    pub fn set_filter(&mut self, filter: Filter) {
        if self.filter != filter {
            self.filter = filter;
            self.cursor = 0;
            self.scroll_offset = 0;
        }
    }

    /// Start editing the selected todo
    pub fn begin_edit(&mut self) {
        if let Some(todo) = self.selected() {
            let edit = EditState {
                id: todo.id.clone(),
                buffer: LineBuffer::with_text(&todo.title),
            };
            self.editing = Some(edit);
            self.mode = Mode::Edit;
        }
    }

    /// Save the edit. A blank title removes the todo.
    pub fn commit_edit(&mut self) {
        if let Some(edit) = self.editing.take() {
            self.store.update(&edit.id, edit.buffer.text());
        }
        self.mode = Mode::Navigate;
        self.take_changed();
    }

    /// Abandon the edit, keeping the original title
    pub fn cancel_edit(&mut self) {
        self.editing = None;
        self.mode = Mode::Navigate;
    }

    /// Add the new-todo field's contents; the field is cleared either way
    pub fn submit_new(&mut self) {
        let title = self.input.take();
        if let Some(id) = self.store.add(&title) {
            self.take_changed();
            self.focus(&id);
        }
    }

    pub fn ui_state(&self) -> UiState {
        UiState {
            route: self.filter.fragment().to_string(),
            cursor: self.cursor,
        }
    }
}

/// Pick the starting filter: explicit route, then the saved one
pub fn initial_filter(route: Option<&str>, saved: Option<&UiState>) -> Filter {
    match (route, saved) {
        (Some(route), _) => Filter::from_fragment(route),
        (None, Some(state)) => Filter::from_fragment(&state.route),
        (None, None) => Filter::All,
    }
}

/// Run the TUI application
pub fn run(
    data_dir: &Path,
    config: &Config,
    route: Option<&str>,
) -> Result<(), Box<dyn std::error::Error>> {
    if let Err(e) = fs::create_dir_all(data_dir) {
        warn!(dir = %data_dir.display(), error = %e, "could not create data directory");
    }

    let store = TodoStore::open(Box::new(FileStorage::new(data_dir)), &config.storage.key);
    let saved = read_ui_state(data_dir);
    let filter = initial_filter(route, saved.as_ref());
    let mut app = App::new(store, filter, &config.ui);
    if route.is_none()
        && let Some(state) = &saved
    {
        app.cursor = state.cursor;
        app.clamp_cursor();
    }
    info!(filter = %app.filter, todos = app.store.len(), "starting tui");

    let watcher = app.store.location().and_then(|path| {
        StoreWatcher::start(&path)
            .map_err(|e| warn!(error = %e, "file watching disabled"))
            .ok()
    });

    // Setup terminal
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen, EnableBracketedPaste)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;
    terminal.clear()?;

    // Install panic hook to restore terminal on panic
    let original_hook = std::panic::take_hook();
    std::panic::set_hook(Box::new(move |panic_info| {
        let _ = disable_raw_mode();
        let _ = execute!(io::stdout(), DisableBracketedPaste, LeaveAlternateScreen);
        original_hook(panic_info);
    }));

    let result = run_event_loop(&mut terminal, &mut app, watcher.as_ref());

    if let Err(e) = write_ui_state(data_dir, &app.ui_state()) {
        warn!(error = %e, "could not save ui state");
    }

    // Restore terminal
    disable_raw_mode()?;
    execute!(
        terminal.backend_mut(),
        DisableBracketedPaste,
        LeaveAlternateScreen
    )?;
    terminal.show_cursor()?;

    result
}

fn run_event_loop(
    terminal: &mut Terminal<CrosstermBackend<io::Stdout>>,
    app: &mut App,
    watcher: Option<&StoreWatcher>,
) -> Result<(), Box<dyn std::error::Error>> {
    let mut needs_draw = true;
    loop {
        if needs_draw {
            terminal.draw(|frame| render::render(frame, app))?;
            needs_draw = false;
        }

        if event::poll(Duration::from_millis(250))? {
            match event::read()? {
                Event::Key(key) if key.kind == KeyEventKind::Press => {
                    input::handle_key(app, key);
                    needs_draw = true;
                }
                Event::Paste(text) => {
                    input::handle_paste(app, &text);
                    needs_draw = true;
                }
                Event::Resize(_, _) => needs_draw = true,
                _ => {}
            }
        }

        if watcher.is_some_and(StoreWatcher::poll) {
            app.store.reload();
        }

        if app.take_changed() {
            needs_draw = true;
        }

        if app.should_quit {
            break;
        }
    }
    Ok(())
}
