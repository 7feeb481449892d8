use clap::Args;
use console::style;
use std::fs;
use std::path::{Path, PathBuf};
use std::time::Instant;
use tracing::debug;

use crate::cli::run_cli_async;
use crate::common::{format_elapsed_ms, spinner};
use crate::loader::load_spec;
use crate::openapi::generate;

/// File names of the generated modules. Fixed so consuming code can
/// import them by path.
pub const SCHEMAS_FILE: &str = "schemas.api.ts";
pub const CLIENT_FILE: &str = "client.api.ts";
pub const ENDPOINTS_FILE: &str = "endpoints.api.ts";

#[derive(Args, Debug, Clone)]
pub struct GenerateArgs {
    #[arg(
        long,
        short = 'i',
        value_name = "SPEC",
        help = "URL or file path of the OpenAPI document"
    )]
    pub input: String,
    #[arg(
        long,
        short = 'o',
        value_name = "DIR",
        default_value = "./__generated__",
        help = "Directory to write the generated modules to"
    )]
    pub output: PathBuf,
}

pub async fn run(args: GenerateArgs) -> i32 {
    run_cli_async(|| run_inner(args)).await
}

async fn run_inner(args: GenerateArgs) -> Result<(), String> {
    let start = Instant::now();

    let sp = spinner("Loading OpenAPI document...");
    let spec = load_spec(&args.input).await.map_err(|err| err.to_string())?;
    sp.finish_and_clear();
    debug!("loaded OpenAPI document from {}", args.input);

    let files = generate(&spec).map_err(|err| err.to_string())?;

    fs::create_dir_all(&args.output)
        .map_err(|err| format!("Failed to create output directory: {err}"))?;

    println!("{}", style("Generating schemas...").dim());
    write_module(&args.output, SCHEMAS_FILE, &files.schemas)?;
    println!("{}", style("✔ Schemas generated").green());

    println!("{}", style("Generating API client...").dim());
    write_module(&args.output, CLIENT_FILE, &files.client)?;
    println!("{}", style("✔ API client generated").green());

    println!("{}", style("Generating API routes...").dim());
    write_module(&args.output, ENDPOINTS_FILE, &files.endpoints)?;
    println!("{}", style("✔ API routes generated").green());

    println!();
    println!(
        "{} ({})",
        style("Generation complete!").green().bold(),
        format_elapsed_ms(start)
    );
    println!(
        "Files generated in: {}",
        style(args.output.display()).yellow()
    );

    Ok(())
}

fn write_module(dir: &Path, name: &str, contents: &str) -> Result<(), String> {
    let path = dir.join(name);
    debug!("writing {}", path.display());
    fs::write(&path, contents).map_err(|err| format!("Failed to write {}: {err}", path.display()))
}
