use std::path::PathBuf;

use anyhow::Context;
use clap::{Parser, Subcommand};
use tracing::debug;
use tracing_subscriber::EnvFilter;

use icon_manifest::{generate, BundlerConfig, BundlerEnv, GeneratorConfig, Layout, Outcome};

#[derive(Parser, Debug)]
#[command(name = "icon-manifest")]
#[command(about = "Generate public/icon/custom/icons.json before the frontend build")]
#[command(version)]
struct Args {
    /// Project root containing `public/icon/custom/` (defaults to the current directory)
    #[arg(long, global = true, value_name = "DIR")]
    root: Option<PathBuf>,

    /// Log debug output to stderr
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Option<Command>,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Rescan the icon directory and rewrite the manifest (default)
    Generate {
        /// `flat` for a single array, `grouped` for one array per subfolder
        #[arg(long, default_value = "flat")]
        layout: Layout,
    },
    /// Print the dev-server and build options for the bundler as JSON
    BundlerConfig,
}

fn init_tracing(verbose: bool) {
    let default_level = if verbose { "debug" } else { "warn" };
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();
}

fn main() -> anyhow::Result<()> {
    let args = Args::parse();
    init_tracing(args.verbose);

    let command = args.command.unwrap_or(Command::Generate {
        layout: Layout::default(),
    });

    match command {
        Command::Generate { layout } => {
            let root = match args.root {
                Some(root) => root,
                None => std::env::current_dir().context("failed to resolve current directory")?,
            };
            let config = GeneratorConfig::new(root).with_layout(layout);

            let outcome = generate(&config).context("failed to generate icon manifest")?;
            match outcome {
                // Not an error: the build goes on without custom icons.
                Outcome::SourceMissing { .. } => eprintln!("warning: {}", outcome),
                Outcome::Written { .. } => println!("{}", outcome),
            }
        }
        Command::BundlerConfig => {
            let config = BundlerConfig::resolve(&BundlerEnv::from_env());
            for (name, _) in std::env::vars_os() {
                if let Some(name) = name.to_str().filter(|name| config.exposes(name)) {
                    debug!("Exposed to application code: {}", name);
                }
            }
            println!("{}", serde_json::to_string_pretty(&config)?);
        }
    }

    Ok(())
}
