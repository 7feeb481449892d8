//! zodgen generates Zod validators and a typed API client from an
//! OpenAPI document.

use clap::{CommandFactory, Parser, Subcommand};
use tracing_subscriber::EnvFilter;
use tracing_subscriber::prelude::*;

mod cli;
mod common;
mod loader;
mod openapi;

pub use loader::{LoadError, load_spec};
pub use openapi::{CircularDependencyError, GeneratedFiles, OpenApiSpec, generate};

#[derive(Parser)]
#[command(
    name = "zodgen",
    version,
    about = "\x1b[33mzodgen\x1b[0m generates Zod validators and typed API clients from OpenAPI documents ⚡"
)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// ⚡ Generate Zod validators and a typed client from an OpenAPI document
    Generate(cli::generate::GenerateArgs),
}

pub fn run_cli(args: Vec<String>) -> i32 {
    let runtime = match tokio::runtime::Builder::new_multi_thread()
        .enable_all()
        .build()
    {
        Ok(runtime) => runtime,
        Err(err) => {
            eprintln!("Failed to create tokio runtime: {err}");
            return 1;
        }
    };

    runtime.block_on(run_cli_async(args))
}

async fn run_cli_async(args: Vec<String>) -> i32 {
    match Cli::try_parse_from(args) {
        Ok(cli) => match cli.command {
            Some(Commands::Generate(generate_args)) => cli::generate::run(generate_args).await,
            None => {
                let mut cmd = Cli::command();
                let _ = cmd.print_help();
                println!();
                0
            }
        },
        Err(e) => {
            let code = e.exit_code();
            let _ = e.print();
            code
        }
    }
}

pub fn init_tracing() {
    let crate_root = module_path!().to_string();

    // ZODGEN_LOG controls log level: "trace", "debug", "info", "warn", "error"
    // or a full tracing filter directive like "zodgen=debug"
    let filter = match std::env::var("ZODGEN_LOG") {
        Ok(level) if is_plain_level(&level) => {
            format!("{crate_root}={level}")
        }
        Ok(directive) => directive,
        Err(_) => format!("{crate_root}=info"),
    };

    let fmt_layer = tracing_subscriber::fmt::layer()
        .with_writer(std::io::stderr)
        .with_target(true)
        .with_line_number(true)
        .with_file(true)
        .with_filter(EnvFilter::new(&filter));

    if tracing_subscriber::registry()
        .with(fmt_layer)
        .try_init()
        .is_err()
    {
        eprintln!("Warning: tracing subscriber already initialized");
    }
}

fn is_plain_level(s: &str) -> bool {
    matches!(
        s.to_ascii_lowercase().as_str(),
        "trace" | "debug" | "info" | "warn" | "error"
    )
}
