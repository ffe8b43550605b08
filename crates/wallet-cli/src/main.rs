mod app;
mod cli;
mod commands;
mod config;
mod constants;
mod errors;
mod helpers;
mod logging;
mod options;
mod output;
mod ui;

use clap::Parser;

use app::{load_file_config, resolve_options, SessionContext};
use cli::{Cli, Commands};
use constants::option_keys;
use errors::classify;
use ui::{print_error, UiContext};

fn main() {
    let cli = Cli::parse();
    logging::init_tracing(&cli.log_level);

    let mut ctx = SessionContext::new();
    let result = run(&mut ctx, &cli);

    if let Err(err) = result {
        let output = ctx
            .option(option_keys::OUTPUT)
            .map(str::to_string)
            .or_else(|| cli.output.map(|o| o.as_str().to_string()));
        let ui = UiContext::from_env(output.as_deref());
        let (code, hint) = classify(&err);
        tracing::debug!(error = ?err, code, "command failed");
        print_error(&ui, &err.to_string(), hint.as_deref());
        ctx.logout();
        std::process::exit(code);
    }
    ctx.logout();
}

fn run(ctx: &mut SessionContext, cli: &Cli) -> anyhow::Result<()> {
    let file_config = load_file_config(cli)?;
    let options = resolve_options(cli, &file_config)?;
    ctx.configure_from_map(options)?;
    tracing::debug!(state = ctx.state().as_str(), "session configured");

    let ui = UiContext::from_env(ctx.option(option_keys::OUTPUT));
    match &cli.command {
        Commands::Create(args) => commands::handle_create(ctx, &ui, cli, args),
        Commands::Open(args) => commands::handle_open(ctx, &ui, args),
        Commands::Status => commands::handle_status(ctx, &ui),
        Commands::Options => commands::handle_options(ctx, &ui),
        Commands::Forget { name } => commands::handle_forget(ctx, &ui, cli, name),
    }
}
