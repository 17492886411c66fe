//! Category tree CLI
//!
//! Builds the storefront display tree from the category API or a JSON dump.

use std::path::PathBuf;

use category_tree::{
    category_tree_with,
    error::{AppError, Result},
    models::Config,
    report::Reporter,
    services::HomePolicy,
    source::{CategorySource, FileSource, HttpSource},
};
use clap::{Args, Parser, Subcommand};

/// Storefront category tree builder
#[derive(Parser, Debug)]
#[command(
    name = "category-tree",
    version,
    about = "Builds the display-ready storefront category tree"
)]
struct Cli {
    /// Path to the configuration file
    #[arg(short, long, default_value = "category-tree.toml")]
    config: PathBuf,

    /// Enable verbose logging
    #[arg(short, long)]
    verbose: bool,

    #[command(subcommand)]
    command: Command,
}

/// Where to read categories from (defaults to `source.url` in config)
#[derive(Args, Debug)]
struct SourceArgs {
    /// Category API endpoint
    #[arg(long, conflicts_with = "file")]
    url: Option<String>,

    /// JSON file holding an API response
    #[arg(long)]
    file: Option<PathBuf>,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Build the display tree and write it as JSON
    Build {
        #[command(flatten)]
        source: SourceArgs,

        /// Output file (default: stdout)
        #[arg(short, long)]
        output: Option<PathBuf>,

        /// Write compact JSON instead of pretty-printed
        #[arg(long)]
        compact: bool,
    },

    /// Build the display tree and print it with a summary
    Show {
        #[command(flatten)]
        source: SourceArgs,
    },

    /// Validate the configuration file
    Validate,
}

/// Initialize logging based on verbosity flag.
fn init_logging(verbose: bool) {
    let level = if verbose { "debug" } else { "warn" };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(level))
        .format_timestamp_secs()
        .init();
}

/// Pick the category source from flags, falling back to the config.
fn resolve_source(args: &SourceArgs, config: &Config) -> Result<Box<dyn CategorySource>> {
    if let Some(path) = &args.file {
        return Ok(Box::new(FileSource::new(path)));
    }
    if let Some(url) = &args.url {
        return Ok(Box::new(HttpSource::new(url, &config.source)?));
    }
    if config.source.url.is_some() {
        return Ok(Box::new(HttpSource::from_config(&config.source)?));
    }
    Err(AppError::config(
        "No category source: pass --url or --file, or set source.url",
    ))
}

/// Main entry point for the CLI application.
#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    let config = Config::load_or_default(&cli.config);
    let reporter = Reporter::from_level_name(&config.logging.level);
    let policy = HomePolicy::from(&config.home);

    match cli.command {
        Command::Build {
            source,
            output,
            compact,
        } => {
            let source = resolve_source(&source, &config)?;
            let categories = category_tree_with(source.as_ref(), &policy).await?;

            let json = if compact {
                serde_json::to_string(&categories)?
            } else {
                serde_json::to_string_pretty(&categories)?
            };

            match output {
                Some(path) => {
                    tokio::fs::write(&path, json).await?;
                    log::info!("Category tree saved to {}", path.display());
                }
                None => println!("{json}"),
            }
        }

        Command::Show { source } => {
            let source = resolve_source(&source, &config)?;
            let categories = category_tree_with(source.as_ref(), &policy).await?;
            reporter.print_tree(source.name(), &categories);
        }

        Command::Validate => {
            let result = config.validate();
            reporter.print_validation(&cli.config.display().to_string(), &result);
            result?;
        }
    }

    Ok(())
}
