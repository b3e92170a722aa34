mod commands;

use clap::{CommandFactory, Parser};
use clap_complete::{Shell, generate};
use seo_site_generator::RouteFamily;
use std::io;
use std::path::PathBuf;
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(name = "seo-site")]
#[command(version, about = "Programmatic local-SEO site generator", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Parser)]
enum Command {
    /// Initialize a new site project
    Init {
        /// Path to create the project in
        path: PathBuf,

        /// Site name shown in titles and structured data
        #[arg(long)]
        name: Option<String>,

        /// Base URL of the deployed site (e.g., https://www.example.co.uk)
        #[arg(long)]
        url: Option<String>,
    },

    /// Validate site.toml and every generated route
    Validate {
        /// Path to site project
        path: PathBuf,
    },

    /// Preview site locally with hot reload
    Preview {
        /// Path to site project
        path: PathBuf,

        /// Port to serve on
        #[arg(short, long, default_value = "8080")]
        port: u16,
    },

    /// Build the static site
    Build {
        /// Path to site project
        path: PathBuf,

        /// Output directory for generated site
        #[arg(short, long)]
        output: PathBuf,
    },

    /// List every path the site would generate
    Routes {
        /// Path to site project
        path: PathBuf,

        /// Only list one route family (e.g., service-location)
        #[arg(long)]
        family: Option<RouteFamily>,

        /// Print JSON instead of one path per line
        #[arg(long)]
        json: bool,
    },

    /// Generate shell completion scripts
    Completions {
        /// Shell to generate completions for
        #[arg(value_enum)]
        shell: Shell,
    },
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(io::stderr)
        .init();

    let cli = Cli::parse();

    match cli.command {
        Command::Init { path, name, url } => commands::init::run(path, name, url).await,
        Command::Validate { path } => commands::validate::run(path).await,
        Command::Preview { path, port } => commands::preview::run(path, port).await,
        Command::Build { path, output } => commands::build::run(path, output).await,
        Command::Routes { path, family, json } => {
            commands::routes::run(path, family, json).await
        }
        Command::Completions { shell } => {
            let mut cmd = Cli::command();
            generate(shell, &mut cmd, "seo-site", &mut io::stdout());
            Ok(())
        }
    }
}
