//! netviz_client - command line front end for the graph service
//!
//! # Usage
//!
//! ```bash
//! # Upload an edge list (CSV with source,target header)
//! netviz_client upload --file edges.csv --degree-threshold 1 -o results.html
//!
//! # Without -o the results page lands in ./netviz-results.html
//!
//! # Generate a random graph
//! netviz_client generate --nodes 40 --p-edge 0.1
//!
//! # Filter the service's own default graph
//! netviz_client filter --degree-threshold 3 --hide-labels
//! ```

use std::path::PathBuf;
use std::process::ExitCode;

use clap::{Parser, Subcommand, ValueEnum};
use colored::Colorize;
use tracing::debug;

use netviz::api_types::{GenerateQuery, SeedQuery};
use netviz::client::{stats_json, GraphClient, LoadRequest, DEFAULT_API_URL, DEFAULT_RESULTS_PATH};
use netviz::graph::GraphOptions;
use netviz::{ClientError, GraphResponse};

#[derive(Parser)]
#[command(name = "netviz_client")]
#[command(version)]
#[command(about = "Simple network visualization: upload or generate a graph and view its stats")]
#[command(long_about = None)]
struct Cli {
    #[command(subcommand)]
    mode: Mode,

    /// Filter nodes by minimum degree
    #[arg(long, global = true, default_value_t = 0, value_parser = clap::value_parser!(u64).range(0..=10))]
    degree_threshold: u64,

    /// Hide node labels
    #[arg(long, global = true)]
    hide_labels: bool,

    /// Do not highlight the highest-degree nodes
    #[arg(long, global = true)]
    no_highlight_hubs: bool,

    /// Graph service base URL
    #[arg(long, global = true, env = "NETVIZ_API_URL", default_value = DEFAULT_API_URL)]
    api_url: String,

    /// Where to write the results page (stats + embedded network)
    #[arg(long, short = 'o', global = true, default_value = DEFAULT_RESULTS_PATH)]
    output: PathBuf,

    /// Output format: pretty (default) or json
    #[arg(long, global = true, default_value = "pretty", value_enum)]
    format: OutputFormat,
}

#[derive(Clone, Copy, PartialEq, Eq, ValueEnum)]
enum OutputFormat {
    Pretty,
    Json,
}

#[derive(Subcommand)]
enum Mode {
    /// Upload a CSV edge list with 'source','target' columns
    Upload {
        #[arg(short, long)]
        file: Option<PathBuf>,
    },

    /// Generate a random graph
    Generate {
        /// Number of nodes
        #[arg(long, default_value_t = 20, value_parser = clap::value_parser!(u64).range(5..=100))]
        nodes: u64,

        /// Probability of edge (0-1)
        #[arg(long, default_value_t = 0.2, value_parser = parse_probability)]
        p_edge: f64,

        /// Seed for reproducible generation
        #[arg(long)]
        seed: Option<u64>,
    },

    /// Filter and style the service's default random graph
    Filter {
        #[arg(long)]
        seed: Option<u64>,
    },
}

fn parse_probability(raw: &str) -> Result<f64, String> {
    let p: f64 = raw.parse().map_err(|e| format!("{}", e))?;
    if (0.0..=1.0).contains(&p) {
        Ok(p)
    } else {
        Err(format!("{} is not within 0-1", p))
    }
}

impl Cli {
    fn options(&self) -> GraphOptions {
        GraphOptions {
            degree_threshold: self.degree_threshold as usize,
            show_labels: !self.hide_labels,
            highlight_hubs: !self.no_highlight_hubs,
        }
    }

    fn request(&self) -> LoadRequest {
        match &self.mode {
            Mode::Upload { file } => LoadRequest::Upload(file.clone()),
            Mode::Generate {
                nodes,
                p_edge,
                seed,
            } => LoadRequest::Generate(GenerateQuery {
                n_nodes: *nodes as usize,
                p_edge: *p_edge,
                seed: *seed,
            }),
            Mode::Filter { seed } => LoadRequest::Filter(SeedQuery { seed: *seed }),
        }
    }
}

#[tokio::main]
async fn main() -> ExitCode {
    dotenvy::dotenv().ok();
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "warn".into()),
        )
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();

    match run(&cli).await {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) if err.is_missing_input() => {
            eprintln!("{} {}", "warning:".yellow().bold(), err);
            ExitCode::from(2)
        }
        Err(err) if err.is_backend_failure() => {
            debug!(error = %err, "load failed");
            eprintln!("{}", "Error loading network from backend.".red());
            ExitCode::FAILURE
        }
        Err(err) => {
            eprintln!("{} {}", "error:".red().bold(), err);
            ExitCode::FAILURE
        }
    }
}

async fn run(cli: &Cli) -> Result<(), ClientError> {
    let client = GraphClient::new(&cli.api_url)?;
    let response = client
        .load_into(&cli.request(), &cli.options(), &cli.output)
        .await?;

    match cli.format {
        OutputFormat::Pretty => {
            print_stats(&response);
            println!(
                "\n{} {}",
                "Network view written to".green(),
                cli.output.display()
            );
        }
        OutputFormat::Json => println!("{}", stats_json(&response.stats)?),
    }

    Ok(())
}

fn print_stats(response: &GraphResponse) {
    let stats = &response.stats;
    println!("{}", "Network stats:".bold());
    println!("Number of nodes: {}", stats.num_nodes);
    println!("Number of edges: {}", stats.num_edges);
    println!("Degree distribution (node: degree):");
    if stats.degree_distribution.is_empty() {
        println!("  {}", "{}".dimmed());
    }
    for (id, degree) in stats.degree_distribution.iter() {
        println!("  {}: {}", id.cyan(), degree);
    }
}
