//! taskbump CLI entry point

use clap::{CommandFactory, Parser};
use std::process;
use taskbump::cli::common::EXIT_USAGE;
use taskbump::cli::{BumpOptions, Cli};
use tracing_subscriber::{EnvFilter, layer::SubscriberExt, util::SubscriberInitExt};

fn init_tracing() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));
    tracing_subscriber::registry()
        .with(filter)
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();
}

fn main() {
    let cli = Cli::parse();
    init_tracing();

    let Some(requested) = cli.requested_version().map(str::to_string) else {
        // Missing version prints the same usage as --help, but fails
        println!("{}", Cli::command().render_help());
        process::exit(EXIT_USAGE);
    };

    let options = BumpOptions {
        requested,
        root: cli.root,
        manifest: cli.manifest,
        tasks_dir: cli.tasks_dir,
        dry_run: cli.dry_run,
    };

    let exit_code = taskbump::cli::bump::run_bump(&options, cli.color);
    process::exit(exit_code);
}
