use std::path::PathBuf;

use chrono::{Local, NaiveDate};

use crate::cli::commands::*;
use crate::io::storage::Storage;
use crate::model::filters::{Filters, Horizon};
use crate::model::task::{Task, TaskStatus, fresh_task_id};
use crate::ops::resize::{Edge, ResizeSession};
use crate::ops::store::TaskStore;
use crate::ops::{drag, filter};
use crate::util::dates;

/// Error type for CLI commands
#[derive(Debug, thiserror::Error)]
pub enum CliError {
    #[error("task not found: {0}")]
    TaskNotFound(String),
    #[error("task name cannot be empty")]
    EmptyName,
    #[error("invalid day '{0}' (expected YYYY-MM-DD)")]
    InvalidDay(String),
    #[error("invalid status '{0}' (use todo, in-progress, review, or completed)")]
    InvalidStatus(String),
    #[error("invalid edge '{0}' (use start or end)")]
    InvalidEdge(String),
    #[error("invalid weeks '{0}' (use 1, 2, or 3)")]
    InvalidWeeks(u8),
    #[error("cannot locate a data directory (set --dir, $MONTHPLAN_DIR, or $HOME)")]
    NoDataDir,
}

/// Resolve the data directory: -C flag, then $MONTHPLAN_DIR, then ~/.monthplan.
pub fn resolve_data_dir(flag: Option<&str>) -> Result<PathBuf, CliError> {
    if let Some(dir) = flag {
        return Ok(PathBuf::from(dir));
    }
    if let Ok(dir) = std::env::var("MONTHPLAN_DIR") {
        return Ok(PathBuf::from(dir));
    }
    std::env::var("HOME")
        .map(|home| PathBuf::from(home).join(".monthplan"))
        .map_err(|_| CliError::NoDataDir)
}

pub fn dispatch(cli: Cli) -> Result<(), Box<dyn std::error::Error>> {
    let dir = resolve_data_dir(cli.dir.as_deref())?;
    let storage = Storage::open(dir)?;
    let json = cli.json;

    match cli.command {
        None => {
            // Handled in main.rs (no subcommand launches the TUI)
            Ok(())
        }
        Some(cmd) => match cmd {
            Commands::Add(args) => cmd_add(storage, args),
            Commands::List(args) => cmd_list(storage, args, json),
            Commands::Rm(args) => cmd_rm(storage, args),
            Commands::Move(args) => cmd_move(storage, args),
            Commands::Resize(args) => cmd_resize(storage, args),
            Commands::Filters(args) => cmd_filters(storage, args, json),
        },
    }
}

// ---------------------------------------------------------------------------
// Argument parsing helpers
// ---------------------------------------------------------------------------

fn parse_day(s: &str) -> Result<NaiveDate, CliError> {
    dates::parse_day(s).ok_or_else(|| CliError::InvalidDay(s.to_string()))
}

fn parse_status(s: &str) -> Result<TaskStatus, CliError> {
    TaskStatus::from_label(s).ok_or_else(|| CliError::InvalidStatus(s.to_string()))
}

fn parse_edge(s: &str) -> Result<Edge, CliError> {
    match s.trim().to_lowercase().as_str() {
        "start" => Ok(Edge::Start),
        "end" => Ok(Edge::End),
        _ => Err(CliError::InvalidEdge(s.to_string())),
    }
}

fn parse_weeks(n: u8) -> Result<Horizon, CliError> {
    match n {
        1 => Ok(Horizon::OneWeek),
        2 => Ok(Horizon::TwoWeeks),
        3 => Ok(Horizon::ThreeWeeks),
        _ => Err(CliError::InvalidWeeks(n)),
    }
}

// ---------------------------------------------------------------------------
// Commands
// ---------------------------------------------------------------------------

fn cmd_add(storage: Storage, args: AddArgs) -> Result<(), Box<dyn std::error::Error>> {
    let name = args.name.trim();
    if name.is_empty() {
        return Err(CliError::EmptyName.into());
    }
    let status = parse_status(&args.status)?;
    let start = match &args.start {
        Some(s) => parse_day(s)?,
        None => dates::day_floor(Local::now()),
    };
    let end = match &args.end {
        Some(s) => parse_day(s)?,
        None => start,
    };

    let id = fresh_task_id();
    let task = Task::new(
        id.clone(),
        name,
        status,
        dates::at_local_midnight(start),
        dates::at_local_midnight(end),
    );

    let mut store = TaskStore::load(storage);
    store.add_or_update(task);
    println!("added {} {}", id, name);
    Ok(())
}

fn cmd_list(storage: Storage, args: ListArgs, json: bool) -> Result<(), Box<dyn std::error::Error>> {
    let filters = Filters {
        categories: args
            .status
            .iter()
            .map(|s| parse_status(s))
            .collect::<Result<Vec<_>, _>>()?,
        time: args.weeks.map(parse_weeks).transpose()?,
        search: args.search.unwrap_or_default(),
    };

    let store = TaskStore::load(storage);
    let tasks = store.snapshot();
    let visible = filter::visible_tasks(tasks.iter(), &filters, Local::now());

    if json {
        println!("{}", serde_json::to_string_pretty(&visible)?);
        return Ok(());
    }

    for task in visible {
        println!(
            "{}  {}..{}  [{}]  {}",
            task.id,
            dates::day_floor(task.start),
            dates::day_floor(task.end),
            task.status.label(),
            task.name
        );
    }
    Ok(())
}

fn cmd_rm(storage: Storage, args: RmArgs) -> Result<(), Box<dyn std::error::Error>> {
    let mut store = TaskStore::load(storage);
    match store.remove(&args.id) {
        Some(task) => {
            println!("removed {} {}", task.id, task.name);
            Ok(())
        }
        None => Err(CliError::TaskNotFound(args.id).into()),
    }
}

fn cmd_move(storage: Storage, args: MoveArgs) -> Result<(), Box<dyn std::error::Error>> {
    let day = parse_day(&args.day)?;
    let mut store = TaskStore::load(storage);
    if store.get(&args.id).is_none() {
        return Err(CliError::TaskNotFound(args.id).into());
    }
    drag::relocate(&mut store, &args.id, day);
    let task = store.get(&args.id).ok_or(CliError::TaskNotFound(args.id))?;
    println!(
        "moved {} to {}..{}",
        task.id,
        dates::day_floor(task.start),
        dates::day_floor(task.end)
    );
    Ok(())
}

fn cmd_resize(storage: Storage, args: ResizeArgs) -> Result<(), Box<dyn std::error::Error>> {
    let day = parse_day(&args.day)?;
    let edge = parse_edge(&args.edge)?;
    let mut store = TaskStore::load(storage);
    if store.get(&args.id).is_none() {
        return Err(CliError::TaskNotFound(args.id).into());
    }

    let mut session = ResizeSession::begin(&store, args.id.as_str(), edge);
    session.pointer_over(day);
    session.commit(&mut store);

    let task = store.get(&args.id).ok_or(CliError::TaskNotFound(args.id))?;
    println!(
        "resized {} to {}..{}",
        task.id,
        dates::day_floor(task.start),
        dates::day_floor(task.end)
    );
    Ok(())
}

fn cmd_filters(
    storage: Storage,
    args: FiltersArgs,
    json: bool,
) -> Result<(), Box<dyn std::error::Error>> {
    if args.clear {
        storage.save_filters(&Filters::default())?;
    }
    let filters = storage.load_filters();
    if json {
        println!("{}", serde_json::to_string_pretty(&filters)?);
        return Ok(());
    }
    if filters.is_empty() {
        println!("no active filters");
        return Ok(());
    }
    let categories: Vec<&str> = filters.categories.iter().map(|s| s.label()).collect();
    println!(
        "categories: {}",
        if categories.is_empty() { "(none)".into() } else { categories.join(", ") }
    );
    println!(
        "time: {}",
        filters.time.map_or("(none)", |h| h.label())
    );
    println!(
        "search: {}",
        if filters.search.is_empty() { "(none)" } else { &filters.search }
    );
    Ok(())
}
