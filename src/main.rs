use clap::Parser;
use todos::cli::commands::Cli;
use todos::cli::handlers::{self, Context};

fn main() {
    let cli = Cli::parse();

    let ctx = match Context::load(cli.data_dir.as_deref()) {
        Ok(ctx) => ctx,
        Err(e) => {
            eprintln!("error: {}", e);
            std::process::exit(1);
        }
    };
    todos::logging::init(&ctx.data_dir, &ctx.config.log);

    let result = if cli.command.is_none() {
        // No subcommand → launch TUI
        todos::tui::run(&ctx.data_dir, &ctx.config, cli.route.as_deref())
    } else {
        handlers::dispatch(cli, &ctx)
    };

    if let Err(e) = result {
        eprintln!("error: {}", e);
        std::process::exit(1);
    }
}
