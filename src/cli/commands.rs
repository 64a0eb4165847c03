use clap::{Args, Parser, Subcommand};

#[derive(Parser)]
#[command(name = "mp", about = concat!("[#] monthplan v", env!("CARGO_PKG_VERSION"), " - your month at a glance"), version)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<Commands>,

    /// Output as JSON
    #[arg(long, global = true)]
    pub json: bool,

    /// Run against a different data directory
    #[arg(short = 'C', long = "dir", global = true)]
    pub dir: Option<String>,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Add a task
    Add(AddArgs),
    /// List tasks, reduced by the same filter engine the TUI uses
    List(ListArgs),
    /// Remove a task by id
    Rm(RmArgs),
    /// Move a task to start on a new day, keeping its length
    Move(MoveArgs),
    /// Drag one edge of a task to a new day
    Resize(ResizeArgs),
    /// Show or clear the persisted filters
    Filters(FiltersArgs),
}

#[derive(Args)]
pub struct AddArgs {
    /// Task name
    pub name: String,

    /// Status: todo | in-progress | review | completed
    #[arg(long, default_value = "todo")]
    pub status: String,

    /// Start day (YYYY-MM-DD), default today
    #[arg(long)]
    pub start: Option<String>,

    /// End day (YYYY-MM-DD), default same as start
    #[arg(long)]
    pub end: Option<String>,
}

#[derive(Args)]
pub struct ListArgs {
    /// Keep only these statuses (repeatable)
    #[arg(long)]
    pub status: Vec<String>,

    /// Keep only names containing this text (case-insensitive)
    #[arg(long)]
    pub search: Option<String>,

    /// Keep only tasks open now or starting within N weeks (1-3)
    #[arg(long)]
    pub weeks: Option<u8>,
}

#[derive(Args)]
pub struct RmArgs {
    /// Task id
    pub id: String,
}

#[derive(Args)]
pub struct MoveArgs {
    /// Task id
    pub id: String,
    /// Destination start day (YYYY-MM-DD)
    pub day: String,
}

#[derive(Args)]
pub struct ResizeArgs {
    /// Task id
    pub id: String,
    /// Which edge to drag: start | end
    #[arg(long)]
    pub edge: String,
    /// Day to drag the edge to (YYYY-MM-DD)
    pub day: String,
}

#[derive(Args)]
pub struct FiltersArgs {
    /// Reset the persisted filters to defaults
    #[arg(long)]
    pub clear: bool,
}
