use std::path::{Path, PathBuf};
use std::process;

use anyhow::{Context, Result};
use clap::Parser;
use tracing::debug;
use tracing_subscriber::EnvFilter;

use component_size_lib::report::render_table;
use component_size_lib::size::SizeMode;
use component_size_lib::stats::{package_sizes, sorted_by_size};

mod output;

use output::print_error;

/// Report the size of a component's local files and all of its dependencies.
#[derive(Parser)]
#[command(name = "component-size")]
#[command(author, version, about, long_about = None)]
struct Cli {
  /// Path to the component manifest
  #[arg(default_value = "component.json")]
  manifest: PathBuf,

  /// Count the styles filesize
  #[arg(short, long)]
  styles: bool,

  /// Include static files in the count
  #[arg(short, long)]
  all: bool,
}

fn main() -> Result<()> {
  tracing_subscriber::fmt()
    .with_env_filter(EnvFilter::from_default_env())
    .without_time()
    .init();

  let cli = Cli::parse();

  if !cli.manifest.exists() {
    print_error(&format!("missing {}", cli.manifest.display()));
    process::exit(1);
  }

  let manifest_path = dunce::canonicalize(&cli.manifest)
    .with_context(|| format!("failed to resolve manifest path: {}", cli.manifest.display()))?;
  let base = manifest_path
    .parent()
    .map(Path::to_path_buf)
    .unwrap_or_else(|| PathBuf::from("."));

  let mode = SizeMode {
    styles: cli.styles,
    include_static: cli.all,
  };
  debug!(path = %manifest_path.display(), ?mode, "sizing component");

  let entries = package_sizes(&manifest_path, &base, mode).context("failed to size component")?;
  let root_name = entries
    .first()
    .map(|entry| entry.name.clone())
    .unwrap_or_default();

  println!("{}", render_table(&root_name, &sorted_by_size(entries)));

  Ok(())
}
