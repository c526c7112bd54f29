//! nautilus-context - Print the context a Nautilus script was started with
//!
//! Useful as a first script while writing new ones, or from a terminal to
//! see how arguments are classified.

use anyhow::Result;
use clap::Parser;
use tracing_subscriber::EnvFilter;

use nautilus::ScriptContext;

#[derive(Parser)]
#[command(name = "nautilus-context")]
#[command(about = "Print the folder and selection a Nautilus script receives")]
#[command(version)]
struct Cli {
    /// Print one line per item instead of JSON
    #[arg(long)]
    plain: bool,

    /// Files and folders to treat as the selection when run outside Nautilus
    paths: Vec<String>,
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();
    let cwd = std::env::current_dir()?;
    let context = ScriptContext::from_sources(
        std::env::var(nautilus::CURRENT_URI_VAR).ok(),
        std::env::var(nautilus::SELECTED_URIS_VAR).ok(),
        &cli.paths,
        &cwd,
    );

    if !cli.plain {
        println!("{}", serde_json::to_string_pretty(&context)?);
        return Ok(());
    }

    println!(
        "mode: {}",
        if context.is_standalone() { "standalone" } else { "nautilus" }
    );
    println!("current: {}", context.current_directory().unwrap_or("-"));
    for folder in context.selected_folders() {
        println!("folder: {}", folder);
    }
    for file in context.selected_files() {
        println!("file: {}", file);
    }
    Ok(())
}
