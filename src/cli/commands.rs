use clap::{Args, Parser, Subcommand};

#[derive(Parser)]
#[command(name = "td", about = concat!("[x] todos v", env!("CARGO_PKG_VERSION"), " - a todo list for the terminal"), version)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<Commands>,

    /// Output as JSON
    #[arg(long, global = true)]
    pub json: bool,

    /// Use a different data directory
    #[arg(short = 'C', long = "data-dir", global = true)]
    pub data_dir: Option<String>,

    /// Route to open the TUI on: #/, #/active or #/completed.
    /// Rejected when a subcommand is given.
    #[arg(long)]
    pub route: Option<String>,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Add a todo (words are joined with spaces)
    Add(AddArgs),
    /// List todos, optionally filtered by route
    List(ListArgs),
    /// Flip a todo between active and completed
    Toggle(IdArgs),
    /// Complete everything, or reopen everything if all are complete
    ToggleAll,
    /// Change a todo's title (a blank title deletes it)
    Edit(EditArgs),
    /// Delete a todo
    Rm(IdArgs),
    /// Delete every completed todo
    ClearCompleted,
    /// Show how many todos are left
    Count,
}

#[derive(Args)]
pub struct AddArgs {
    /// Todo title
    #[arg(required = true, num_args = 1..)]
    pub title: Vec<String>,
}

#[derive(Args)]
pub struct ListArgs {
    /// Route: #/, #/active or #/completed (also accepts active, completed)
    pub route: Option<String>,
}

#[derive(Args)]
pub struct IdArgs {
    /// Todo ID
    pub id: String,
}

#[derive(Args)]
pub struct EditArgs {
    /// Todo ID
    pub id: String,
    /// New title
    #[arg(num_args = 0..)]
    pub title: Vec<String>,
}
