//! Velum CLI
//!
//! Renders the component catalog to a directory of static HTML pages, one
//! per component, plus an index. Useful for eyeballing table changes and as
//! a living reference of the markup each component emits.

mod gallery;

use std::path::PathBuf;

use anyhow::Context;
use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;
use velum_theme::ThemePreset;

#[derive(Parser)]
#[command(name = "velum", version, about = "Velum component gallery")]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Render the gallery to a directory of static HTML pages.
    Gallery {
        /// Output directory; created if missing.
        #[arg(long, default_value = "gallery")]
        out: PathBuf,
        /// Page chrome preset (default, dawn, mono).
        #[arg(long, default_value = "default")]
        preset: String,
        /// Comma-separated component names; everything when omitted.
        #[arg(long)]
        components: Option<String>,
    },
    /// Print the component catalog.
    List,
}

fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .init();

    let cli = Cli::parse();
    match cli.command {
        Command::Gallery { out, preset, components } => {
            let preset: ThemePreset = preset
                .parse()
                .with_context(|| "invalid --preset value")?;
            let only: Option<Vec<String>> = components.map(|list| {
                list.split(',')
                    .map(|name| name.trim().to_string())
                    .filter(|name| !name.is_empty())
                    .collect()
            });
            let written = gallery::write(&out, preset, only.as_deref())
                .with_context(|| format!("could not write gallery to {}", out.display()))?;
            tracing::info!(pages = written, out = %out.display(), "gallery written");
        }
        Command::List => {
            for name in gallery::COMPONENTS {
                println!("{name}");
            }
        }
    }
    Ok(())
}
