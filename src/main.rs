use anyhow::Context;
use clap::{Parser, Subcommand};
use palate_core::{parse_date, DEFAULT_DECAY_LAMBDA};
use palate_similarity::{EngineConfig, Estimate, RankedResult};
use palate_storage::StorageManager;
use std::path::PathBuf;
use tracing::{info, Level};
use tracing_subscriber::FmtSubscriber;

/// Rank items against a learned preference profile
#[derive(Parser, Debug)]
#[command(name = "palate")]
#[command(about = "Preference-profile ranking engine", long_about = None)]
struct Args {
    /// Directory holding catalog.json, profile.json and history.json
    #[arg(short, long, default_value = "./data")]
    data_dir: PathBuf,

    /// History decay rate, per day
    #[arg(long, default_value_t = DEFAULT_DECAY_LAMBDA)]
    decay_lambda: f64,

    /// Log level
    #[arg(long, default_value = "info")]
    log_level: String,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Rank candidates against the current profile
    Rank {
        /// Comma-separated item names
        names: Option<String>,

        /// Comma-separated keywords matched against names and descriptions
        #[arg(short, long, conflicts_with = "names")]
        query: Option<String>,
    },
    /// Show how one item matches the profile, dimension by dimension
    Explain {
        name: String,
    },
    /// Record an order and relearn the profile
    Order {
        name: String,

        /// Order date (YYYY-MM-DD), defaults to today
        #[arg(long)]
        date: Option<String>,
    },
    /// Relearn the profile from the stored history
    Refresh,
    /// Print the current profile
    Profile,
}

fn main() -> anyhow::Result<()> {
    let args = Args::parse();

    let log_level = match args.log_level.as_str() {
        "trace" => Level::TRACE,
        "debug" => Level::DEBUG,
        "info" => Level::INFO,
        "warn" => Level::WARN,
        "error" => Level::ERROR,
        _ => Level::INFO,
    };

    let subscriber = FmtSubscriber::builder()
        .with_max_level(log_level)
        .with_writer(std::io::stderr)
        .finish();
    tracing::subscriber::set_global_default(subscriber)?;

    info!("Starting Palate v{}", env!("CARGO_PKG_VERSION"));
    info!("Data directory: {:?}", args.data_dir);

    let config = EngineConfig::with_decay_lambda(args.decay_lambda);
    let manager = StorageManager::open(&args.data_dir, config)
        .with_context(|| format!("failed to open data directory {:?}", args.data_dir))?;

    match args.command {
        Command::Rank { names, query } => {
            let ranked = match (names, query) {
                (_, Some(query)) => manager.rank_query(&query),
                (Some(names), None) => {
                    let candidates: Vec<&str> = names.split(',').filter(|n| !n.is_empty()).collect();
                    manager.rank(candidates.as_slice())
                }
                (None, None) => manager.rank_query(""),
            };
            print_ranking(&ranked);
        }
        Command::Explain { name } => {
            let explained = manager.explain(&name)?;
            println!("{}", explained.name);
            if !explained.description.is_empty() {
                println!("  {}", explained.description);
            }
            println!("  Similarity: {:.4}", explained.score);
            for m in &explained.dimensions {
                println!("  {:<10} {:+.4}", m.dimension.as_str(), m.similarity);
            }
        }
        Command::Order { name, date } => {
            let date = match date {
                Some(text) => parse_date(&text)?,
                None => chrono::Local::now().date_naive(),
            };
            let estimate = manager.record_order(&name, date)?;
            println!("Your order for {} has been recorded in history.", name);
            print_estimate(&estimate);
        }
        Command::Refresh => {
            let estimate = manager.refresh_profile()?;
            print_estimate(&estimate);
        }
        Command::Profile => {
            println!("{}", serde_json::to_string_pretty(&manager.profile())?);
        }
    }

    Ok(())
}

fn print_ranking(ranked: &[RankedResult<'_>]) {
    if ranked.is_empty() {
        println!("No items found matching your criteria.");
        return;
    }
    println!("--- Ranked Items ---");
    for (i, result) in ranked.iter().enumerate() {
        println!("{}. {} (Similarity: {:.4})", i + 1, result.name(), result.score);
    }
}

fn print_estimate(estimate: &Estimate) {
    if estimate.is_default() {
        println!("No usable history; profile reset to defaults.");
    } else {
        println!(
            "Profile recalculated from {} record(s) ({} skipped).",
            estimate.accepted, estimate.skipped
        );
    }
    for (dim, value) in estimate.profile.weights().iter() {
        println!("  {:<10} {:.4}", dim.as_str(), value);
    }
}
