//! readme-gen - README generator entry point

use std::path::PathBuf;

use anyhow::Result;
use clap::{Parser, Subcommand};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

mod commands;

#[derive(Parser)]
#[command(name = "readme-gen")]
#[command(version)]
#[command(about = "Generate the awesome-claude-code READMEs", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Generate every README style, the flat lists and the root README
    Generate {
        /// Repository root (defaults to the nearest directory with a resource table)
        #[arg(long)]
        repo_root: Option<PathBuf>,

        /// Style to use for README.md, overriding acc-config.yaml
        #[arg(long)]
        root_style: Option<String>,
    },

    /// Generate a single style
    Style {
        /// Style id (extra, classic, awesome, flat)
        style: String,

        /// Repository root
        #[arg(long)]
        repo_root: Option<PathBuf>,

        /// Output file, relative to the repository root
        #[arg(short = 'o', long)]
        output: Option<PathBuf>,

        /// Flat list category filter (flat only)
        #[arg(long)]
        category: Option<String>,

        /// Flat list sort mode: az, updated, created, releases (flat only)
        #[arg(long)]
        sort: Option<String>,
    },

    /// Regenerate table-of-contents and header SVGs from the taxonomy
    TocAssets {
        /// Repository root
        #[arg(long)]
        repo_root: Option<PathBuf>,
    },

    /// Print the anchors a style's table of contents links to
    Anchors {
        /// Repository root
        #[arg(long)]
        repo_root: Option<PathBuf>,

        /// Style id
        #[arg(long, default_value = "extra")]
        style: String,
    },
}

fn main() -> Result<()> {
    // Initialize logging
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "readme_gen=info,readme_render=info,readme_catalog=info".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    let cli = Cli::parse();

    match cli.command {
        Commands::Generate {
            repo_root,
            root_style,
        } => commands::generate::execute(commands::generate::GenerateArgs {
            repo_root,
            root_style,
        }),
        Commands::Style {
            style,
            repo_root,
            output,
            category,
            sort,
        } => commands::style::execute(commands::style::StyleArgs {
            style,
            repo_root,
            output,
            category,
            sort,
        }),
        Commands::TocAssets { repo_root } => commands::toc_assets::execute(repo_root),
        Commands::Anchors { repo_root, style } => commands::anchors::execute(repo_root, &style),
    }
}
