//! cinemateca CLI - Queries over a movie catalog
//!
//! Command-line interface for the catalog queries.

use std::{path::PathBuf, process::ExitCode};

use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;

mod queries;

/// cinemateca - Analytical queries over a movie catalog
#[derive(Parser)]
#[command(name = "cinemateca")]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Catalog JSON file (defaults to the embedded sample catalog)
    #[arg(long, global = true)]
    catalog: Option<PathBuf>,
    /// Print results as JSON instead of tables
    #[arg(long, global = true)]
    json: bool,
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Display catalog collection sizes
    Info,
    /// Average release year of all movies
    AverageYear,
    /// Movies whose average critic score is above a threshold
    Above {
        /// Exclusive lower bound for the average score
        threshold: f64,
    },
    /// Movies by a director
    Director {
        /// Exact director name
        name: String,
    },
    /// Average critic score of one movie
    MovieRating {
        /// Movie id
        id: u32,
    },
    /// One movie per excellent rating
    Excellent {
        /// Inclusive score for a rating to count as excellent
        #[arg(long, default_value_t = crate::EXCELLENT_SCORE)]
        min_score: f64,
    },
    /// Movie with its directors, genres and reviews
    Expand {
        /// Exact movie name
        name: String,
    },
}

fn init_tracing() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));
    // A subscriber may already be installed when run() is called in-process.
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .try_init();
}

/// Run the cinemateca CLI.
pub fn run() -> ExitCode {
    init_tracing();
    let cli = Cli::parse();

    let result = queries::load_catalog(cli.catalog.as_deref()).and_then(|catalog| {
        let json = cli.json;
        match cli.command {
            Commands::Info => queries::cmd_info(&catalog, json),
            Commands::AverageYear => queries::cmd_average_year(&catalog, json),
            Commands::Above { threshold } => queries::cmd_above(&catalog, threshold, json),
            Commands::Director { name } => queries::cmd_director(&catalog, &name, json),
            Commands::MovieRating { id } => queries::cmd_movie_rating(&catalog, id, json),
            Commands::Excellent { min_score } => {
                queries::cmd_excellent(&catalog, min_score, json)
            }
            Commands::Expand { name } => queries::cmd_expand(&catalog, &name, json),
        }
    });

    match result {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("Error: {}", e);
            ExitCode::FAILURE
        }
    }
}
