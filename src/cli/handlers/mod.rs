use std::path::{Path, PathBuf};

use tracing::info;

use crate::cli::commands::*;
use crate::cli::output::*;
use crate::io::config_io::read_config;
use crate::io::paths::resolve_data_dir;
use crate::io::storage::FileStorage;
use crate::model::{Config, Filter, items_left};
use crate::store::TodoStore;

/// Error type for CLI commands
#[derive(Debug, thiserror::Error)]
pub enum CliError {
    #[error("no todo with id {0}")]
    NotFound(String),
    #[error("title must not be empty")]
    EmptyTitle,
    #[error("--route only applies when launching the TUI; use `td list <route>`")]
    RouteWithSubcommand,
}

/// Everything a command needs: where data lives and how it is configured
pub struct Context {
    pub data_dir: PathBuf,
    pub config: Config,
}

impl Context {
    /// Resolve the data directory and read its config
    pub fn load(data_dir: Option<&str>) -> Result<Self, Box<dyn std::error::Error>> {
        let data_dir = resolve_data_dir(data_dir.map(Path::new));
        let config = read_config(&data_dir)?;
        Ok(Context { data_dir, config })
    }

    pub fn open_store(&self) -> TodoStore {
        TodoStore::open(
            Box::new(FileStorage::new(&self.data_dir)),
            &self.config.storage.key,
        )
    }
}

/// Run a subcommand. `cli.command` must be `Some`.
pub fn dispatch(cli: Cli, ctx: &Context) -> Result<(), Box<dyn std::error::Error>> {
    let json = cli.json;
    let Some(command) = cli.command else {
        return Ok(());
    };
    if cli.route.is_some() {
        return Err(CliError::RouteWithSubcommand.into());
    }
    let mut store = ctx.open_store();

    match command {
        Commands::Add(args) => cmd_add(&mut store, args, json)?,
        Commands::List(args) => cmd_list(&store, args, json)?,
        Commands::Toggle(args) => cmd_toggle(&mut store, args, json)?,
        Commands::ToggleAll => cmd_toggle_all(&mut store, json)?,
        Commands::Edit(args) => cmd_edit(&mut store, args, json)?,
        Commands::Rm(args) => cmd_rm(&mut store, args, json)?,
        Commands::ClearCompleted => cmd_clear_completed(&mut store, json)?,
        Commands::Count => cmd_count(&store, json)?,
    }

    if !store.is_persistent() {
        eprintln!("warning: changes could not be saved to {}", ctx.data_dir.display());
    }
    Ok(())
}

fn print_json<T: serde::Serialize>(value: &T) -> Result<(), Box<dyn std::error::Error>> {
    println!("{}", serde_json::to_string_pretty(value)?);
    Ok(())
}

fn cmd_add(store: &mut TodoStore, args: AddArgs, json: bool) -> Result<(), Box<dyn std::error::Error>> {
    let title = args.title.join(" ");
    let id = store.add(&title).ok_or(CliError::EmptyTitle)?;
    info!(id = %id, "added via cli");
    if json {
        if let Some(todo) = store.get(&id) {
            print_json(todo)?;
        }
    } else {
        println!("{}", id);
    }
    Ok(())
}

fn cmd_list(store: &TodoStore, args: ListArgs, json: bool) -> Result<(), Box<dyn std::error::Error>> {
    let filter = args
        .route
        .as_deref()
        .map(Filter::from_fragment)
        .unwrap_or_default();
    let todos = store.all(filter);
    if json {
        print_json(&todos)?;
    } else {
        print!("{}", format_todo_list(&todos));
    }
    Ok(())
}

fn cmd_toggle(store: &mut TodoStore, args: IdArgs, json: bool) -> Result<(), Box<dyn std::error::Error>> {
    if !store.toggle(&args.id) {
        return Err(CliError::NotFound(args.id).into());
    }
    print_todo(store, &args.id, json)
}

fn cmd_toggle_all(store: &mut TodoStore, json: bool) -> Result<(), Box<dyn std::error::Error>> {
    store.toggle_all();
    cmd_count(store, json)
}

fn cmd_edit(store: &mut TodoStore, args: EditArgs, json: bool) -> Result<(), Box<dyn std::error::Error>> {
    let title = args.title.join(" ");
    if !store.update(&args.id, &title) {
        return Err(CliError::NotFound(args.id).into());
    }
    if store.get(&args.id).is_some() {
        print_todo(store, &args.id, json)
    } else if json {
        print_json(&RemovedJson {
            id: &args.id,
            removed: true,
        })
    } else {
        println!("removed {}", args.id);
        Ok(())
    }
}

fn cmd_rm(store: &mut TodoStore, args: IdArgs, json: bool) -> Result<(), Box<dyn std::error::Error>> {
    if !store.remove(&args.id) {
        return Err(CliError::NotFound(args.id).into());
    }
    if json {
        print_json(&RemovedJson {
            id: &args.id,
            removed: true,
        })
    } else {
        println!("removed {}", args.id);
        Ok(())
    }
}

fn cmd_clear_completed(store: &mut TodoStore, json: bool) -> Result<(), Box<dyn std::error::Error>> {
    let removed = store.clear_completed();
    if json {
        print_json(&ClearedJson { removed })
    } else {
        println!("cleared {}", removed);
        Ok(())
    }
}

fn cmd_count(store: &TodoStore, json: bool) -> Result<(), Box<dyn std::error::Error>> {
    if json {
        print_json(&count_json(store))
    } else {
        println!("{}", items_left(store.active_count()));
        Ok(())
    }
}

fn print_todo(store: &TodoStore, id: &str, json: bool) -> Result<(), Box<dyn std::error::Error>> {
    let Some(todo) = store.get(id) else {
        return Err(CliError::NotFound(id.to_string()).into());
    };
    if json {
        print_json(todo)
    } else {
        println!("{}", format_todo_line(todo));
        Ok(())
    }
}
