use std::io;
use std::time::Duration;

use chrono::{Local, NaiveDate};
use crossterm::event::{
    self, DisableMouseCapture, EnableMouseCapture, Event, KeyEventKind,
};
use crossterm::execute;
use crossterm::terminal::{
    EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode,
};
use ratatui::Terminal;
use ratatui::backend::CrosstermBackend;
use ratatui::layout::Rect;

use crate::io::config_io;
use crate::io::storage::Storage;
use crate::model::config::WeekStart;
use crate::model::filters::Filters;
use crate::model::task::Task;
use crate::ops::resize::ResizeSession;
use crate::ops::select::Selection;
use crate::ops::store::TaskStore;
use crate::ops::{filter, grid};
use crate::util::dates;

use super::form::TaskForm;
use super::input;
use super::render;
use super::theme::Theme;

/// Current interaction mode
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Mode {
    Navigate,
    /// Typing into the search filter
    Search,
    /// The create/edit form is open (modal)
    Form,
}

/// An armed task-bar drag: relocates on release over a day, opens the edit
/// form when released without ever hovering one.
#[derive(Debug, Clone)]
pub struct DragState {
    pub task_id: String,
    pub hover: Option<NaiveDate>,
}

/// Main application state
pub struct App {
    pub store: TaskStore,
    pub filters: Filters,
    pub storage: Storage,
    pub week_start: WeekStart,
    pub theme: Theme,
    /// First day of the displayed month
    pub month: NaiveDate,
    pub mode: Mode,
    pub selection: Selection,
    pub resize: Option<ResizeSession>,
    pub drag: Option<DragState>,
    pub form: Option<TaskForm>,
    pub should_quit: bool,
    /// Hit map: day cell rects, rebuilt every frame by the grid renderer
    pub day_rects: Vec<(Rect, NaiveDate)>,
    /// Hit map: task bar rects (first/last column act as resize handles)
    pub bar_rects: Vec<(Rect, String)>,
}

impl App {
    pub fn new(storage: Storage) -> App {
        let config = config_io::read_config(storage.dir());
        let store = TaskStore::load(storage.clone());
        let filters = storage.load_filters();
        let theme = Theme::from_config(&config.ui);

        App {
            store,
            filters,
            storage,
            week_start: config.week_start,
            theme,
            month: grid::first_of_month(dates::day_floor(Local::now())),
            mode: Mode::Navigate,
            selection: Selection::default(),
            resize: None,
            drag: None,
            form: None,
            should_quit: false,
            day_rects: Vec::new(),
            bar_rects: Vec::new(),
        }
    }

    /// The task list the grid renders from: the live resize preview when a
    /// session exists, otherwise the committed store reduced by the filters.
    pub fn render_tasks(&self) -> Vec<Task> {
        match &self.resize {
            Some(session) => session.preview().to_vec(),
            None => filter::visible_tasks(self.store.all(), &self.filters, Local::now())
                .into_iter()
                .cloned()
                .collect(),
        }
    }

    /// Persist the filters slot (fire-and-forget, like every slot write).
    pub fn save_filters(&self) {
        let _ = self.storage.save_filters(&self.filters);
    }

    /// Resolve a terminal position to the day cell under it.
    pub fn day_at(&self, column: u16, row: u16) -> Option<NaiveDate> {
        self.day_rects
            .iter()
            .find(|(rect, _)| hit(*rect, column, row))
            .map(|(_, day)| *day)
    }

    /// Resolve a terminal position to the task bar under it.
    pub fn bar_at(&self, column: u16, row: u16) -> Option<(Rect, String)> {
        self.bar_rects
            .iter()
            .find(|(rect, _)| hit(*rect, column, row))
            .map(|(rect, id)| (*rect, id.clone()))
    }

    pub fn open_create_form(&mut self, start: NaiveDate, end: NaiveDate) {
        self.form = Some(TaskForm::create(start, end));
        self.mode = Mode::Form;
    }

    pub fn open_edit_form(&mut self, task: &Task) {
        let form = TaskForm::edit(task, dates::day_floor(task.start), dates::day_floor(task.end));
        self.form = Some(form);
        self.mode = Mode::Form;
    }

    pub fn close_form(&mut self) {
        self.form = None;
        self.mode = Mode::Navigate;
    }
}

fn hit(rect: Rect, column: u16, row: u16) -> bool {
    column >= rect.x
        && column < rect.x + rect.width
        && row >= rect.y
        && row < rect.y + rect.height
}

/// Run the TUI application
pub fn run(data_dir: Option<&str>) -> Result<(), Box<dyn std::error::Error>> {
    let dir = crate::cli::handlers::resolve_data_dir(data_dir)?;
    let storage = Storage::open(dir)?;
    let mut app = App::new(storage);

    // Setup terminal
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen, EnableMouseCapture)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;
    terminal.clear()?;

    // Install panic hook to restore terminal on panic
    let original_hook = std::panic::take_hook();
    std::panic::set_hook(Box::new(move |panic_info| {
        let _ = disable_raw_mode();
        let _ = execute!(io::stdout(), LeaveAlternateScreen, DisableMouseCapture);
        original_hook(panic_info);
    }));

    let result = run_event_loop(&mut terminal, &mut app);

    // Restore terminal
    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen, DisableMouseCapture)?;
    terminal.show_cursor()?;

    result
}

fn run_event_loop(
    terminal: &mut Terminal<CrosstermBackend<io::Stdout>>,
    app: &mut App,
) -> Result<(), Box<dyn std::error::Error>> {
    loop {
        terminal.draw(|frame| render::render(frame, app))?;

        if event::poll(Duration::from_millis(250))? {
            match event::read()? {
                Event::Key(key) if key.kind == KeyEventKind::Press => {
                    input::handle_key(app, key);
                }
                Event::Mouse(mouse) => {
                    input::handle_mouse(app, mouse);
                }
                _ => {}
            }
        }

        if app.should_quit {
            break;
        }
    }
    Ok(())
}
