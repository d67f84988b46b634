use std::path::PathBuf;

use anyhow::Context;
use clap::{Parser, Subcommand};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use scoresite::models::RenderContext;
use scoresite::plugins::PluginRegistry;
use scoresite::render;

#[derive(Parser)]
#[command(name = "scoresite")]
#[command(about = "Site branding and notation plugin descriptors for the open music scanner")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Render the site header markup
    Header {
        /// Path prefix for relative links (e.g. "../" for a page one level down)
        #[arg(short, long, default_value = "")]
        root: String,

        /// Label of the active navigation tab
        #[arg(short, long, default_value = "")]
        page: String,

        /// Write to a file instead of stdout
        #[arg(short, long)]
        output: Option<PathBuf>,
    },
    /// Inspect notation plugin descriptors
    Plugins {
        #[command(subcommand)]
        command: PluginCommands,
    },
}

#[derive(Subcommand)]
enum PluginCommands {
    /// List the loaded plugin descriptors
    List {
        /// Plugin directory (defaults to the per-user data directory)
        #[arg(short, long)]
        dir: Option<PathBuf>,
    },
    /// Print the argument vector for one plugin and an export file
    Args {
        /// Plugin title, matched exactly
        title: String,

        /// Exported score file to hand to the program
        export_file: String,

        /// Plugin directory (defaults to the per-user data directory)
        #[arg(short, long)]
        dir: Option<PathBuf>,
    },
}

/// Initialize tracing to stderr so stdout stays clean for rendered markup.
fn init_tracing() {
    let filter = tracing_subscriber::EnvFilter::new(
        std::env::var("RUST_LOG").unwrap_or_else(|_| "scoresite=info".into()),
    );

    tracing_subscriber::registry()
        .with(filter)
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();
}

fn open_registry(dir: Option<PathBuf>) -> anyhow::Result<PluginRegistry> {
    let dir = match dir {
        Some(dir) => dir,
        None => PluginRegistry::default_dir()
            .context("Could not determine the default plugin directory")?,
    };
    tracing::debug!("Loading plugins from {}", dir.display());
    Ok(PluginRegistry::load_dir(&dir)?)
}

fn main() -> anyhow::Result<()> {
    init_tracing();

    let cli = Cli::parse();

    match cli.command {
        Commands::Header { root, page, output } => {
            let html = render::render(&RenderContext::new(root, page));
            match output {
                Some(path) => {
                    std::fs::write(&path, &html)
                        .with_context(|| format!("Could not write {}", path.display()))?;
                    tracing::info!("Wrote header to {}", path.display());
                }
                None => println!("{}", html),
            }
        }
        Commands::Plugins { command } => match command {
            PluginCommands::List { dir } => {
                let registry = open_registry(dir)?;
                if registry.is_empty() {
                    println!("No plugins found");
                } else {
                    for plugin in registry.iter() {
                        println!("{}\t{}\t{}", plugin.title, plugin.tip, plugin.executable);
                    }
                }
            }
            PluginCommands::Args {
                title,
                export_file,
                dir,
            } => {
                let registry = open_registry(dir)?;
                let plugin = registry
                    .get(&title)
                    .with_context(|| format!("No plugin titled '{}'", title))?;
                for arg in plugin.command_line(&export_file) {
                    println!("{}", arg);
                }
            }
        },
    }

    Ok(())
}
