mod search;
mod serve;
mod show;
mod view;

use clap::{Parser, Subcommand};
use codata_core::config::CodataConfig;
use codata_core::search::SearchMode;
use std::net::SocketAddr;
use std::path::PathBuf;

#[derive(Parser)]
#[command(
    name = "codata",
    version,
    about = "Search and serve the CODATA fundamental physical constants",
    long_about = "Loads a CODATA constants document (definitions, instances and their \
                  version history) and exposes it through a read-only HTTP API and search \
                  page, or queries it directly from the terminal."
)]
pub struct Cli {
    /// JSON config file. Flags given on the command line take precedence.
    #[arg(long, global = true, value_name = "FILE")]
    pub config: Option<PathBuf>,

    /// Constants document to load
    #[arg(long, global = true, value_name = "PATH")]
    pub catalog: Option<PathBuf>,

    /// Treat queries as regular expressions instead of literal terms
    #[arg(long, global = true)]
    pub pattern_search: bool,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Start the HTTP server
    #[command(
        long_about = "Serves the JSON API under /api and the search page at /. \
                      Stops gracefully on Ctrl-C."
    )]
    Serve {
        /// Address to listen on, e.g. 127.0.0.1:3000
        #[arg(long, value_name = "ADDR")]
        bind: Option<SocketAddr>,
    },
    /// Search instances by name
    Search {
        /// Whitespace-separated terms; all must occur in the name
        #[arg(value_name = "QUERY", default_value = "")]
        query: String,
        #[arg(long, default_value_t = 1, allow_negative_numbers = true)]
        page: i64,
        #[arg(long)]
        per_page: Option<usize>,
        /// Print the raw JSON response instead of a table
        #[arg(long)]
        json: bool,
    },
    /// Print the HTML results fragment for a search
    Render {
        #[arg(value_name = "QUERY", default_value = "")]
        query: String,
        #[arg(long, default_value_t = 1, allow_negative_numbers = true)]
        page: i64,
        #[arg(long)]
        per_page: Option<usize>,
    },
    /// Print one record as JSON
    Show {
        #[command(subcommand)]
        target: ShowTarget,
    },
    /// Print catalog statistics
    Stats,
}

#[derive(Subcommand, Clone, Debug, PartialEq, Eq)]
pub enum ShowTarget {
    /// A constant definition with all its instances
    Definition { id: String },
    /// A single constant instance
    Instance { id: String },
}

impl Cli {
    /// Config file (or defaults) with command-line overrides applied.
    pub fn resolve_config(&self) -> codata_core::Result<CodataConfig> {
        let mut config = CodataConfig::load_or_default(self.config.as_deref())?;
        if let Some(catalog) = &self.catalog {
            config.catalog_path = catalog.clone();
        }
        if self.pattern_search {
            config.search.mode = SearchMode::Pattern;
        }
        if let Commands::Serve { bind: Some(bind) } = &self.command {
            config.bind = *bind;
        }
        config.validate()?;
        Ok(config)
    }
}

pub fn run() -> Result<(), Box<dyn std::error::Error>> {
    let cli = Cli::parse();

    let component = match &cli.command {
        Commands::Serve { .. } => "serve",
        _ => "cli",
    };
    let _guard = codata_runtime::init_logging(component, true);

    let config = cli.resolve_config()?;

    match cli.command {
        Commands::Serve { .. } => serve::run(config),
        Commands::Search {
            query,
            page,
            per_page,
            json,
        } => search::run(&config, &query, page, per_page, json),
        Commands::Render {
            query,
            page,
            per_page,
        } => search::render(&config, &query, page, per_page),
        Commands::Show { target } => show::run(&config, &target),
        Commands::Stats => show::stats(&config),
    }
}
