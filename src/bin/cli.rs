use clap::{Parser, Subcommand};
use episode_matcher::{
    levenshtein, normalize, parse_file_name,
    providers::{DirectoryEpisodeSource, StaticCatalogProvider},
    EpisodeMatcher, MatcherConfig, TrackedShow,
};
use std::path::PathBuf;
use std::sync::Arc;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[derive(Parser)]
#[command(name = "episode-matcher")]
#[command(about = "Episode name matching diagnostics", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// YAML config overriding cutoffs and weights
    #[arg(short, long, global = true)]
    config: Option<PathBuf>,
}

#[derive(Subcommand)]
enum Commands {
    /// Clean a release or file name
    Normalize {
        name: String,

        /// Also drop the trailing episode segment
        #[arg(long)]
        strip_episode: bool,
    },

    /// Levenshtein distance between two strings
    Distance { a: String, b: String },

    /// Find the local files of a show in a directory
    Scan {
        dir: PathBuf,

        /// Tracked show name
        #[arg(short, long)]
        show: String,
    },

    /// Rank catalog entries from a JSON file against a show name
    Rank {
        /// Tracked show name
        #[arg(short, long)]
        show: String,

        /// JSON array of catalog entries
        #[arg(short, long)]
        entries: PathBuf,
    },
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "episode_matcher=info".into()),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    let cli = Cli::parse();

    let config = match &cli.config {
        Some(path) => MatcherConfig::from_yaml_file(path)?,
        None => MatcherConfig::default(),
    };

    match cli.command {
        Commands::Normalize { name, strip_episode } => {
            println!("{}", normalize(&name, strip_episode));
            if let Some(episode) = parse_file_name(&name).episode {
                println!("episode: {}", episode);
            }
        }

        Commands::Distance { a, b } => {
            println!("{}", levenshtein(&a, &b));
        }

        Commands::Scan { dir, show } => {
            let mut matcher = EpisodeMatcher::new(config);
            matcher.add_episode_source(Arc::new(DirectoryEpisodeSource::new(&dir)));

            let show = TrackedShow::new(show, "");
            match matcher.find_local_episodes(&show).await? {
                Some(found) => {
                    println!("✅ {} (score {:.2})", found.candidate.key, found.score);
                    for file in &found.candidate.files {
                        let episode = file
                            .episode
                            .map(|e| e.to_string())
                            .unwrap_or_else(|| "?".to_string());
                        println!("   [{}] {}", episode, file.file_name);
                    }
                    if !found.alternatives.is_empty() {
                        println!("\n📋 Alternatives:");
                        for (i, alt) in found.alternatives.iter().enumerate() {
                            println!("   {}. {}", i + 1, alt.key);
                        }
                    }
                }
                None => println!("❌ No files for {} in {}", show.name, dir.display()),
            }
        }

        Commands::Rank { show, entries } => {
            let provider = StaticCatalogProvider::from_json_file(&entries)?;
            let mut matcher = EpisodeMatcher::new(config);
            matcher.add_catalog_provider(Arc::new(provider));

            let show = TrackedShow::new(show, "");
            match matcher.find_catalog_entry(&show).await? {
                Some(found) => {
                    println!("✅ {} (score {:.2})", found.candidate.display_name(), found.score);
                    println!("   Provider: {}", found.candidate.provider);
                    println!("   ID: {}", found.candidate.id);
                    println!("   Latency: {:.2}ms", found.latency_ms);
                    for (i, alt) in found.alternatives.iter().enumerate() {
                        println!("   {}. {}", i + 1, alt.display_name());
                    }
                }
                None => println!("❌ No catalog entries for {}", show.name),
            }
        }
    }

    Ok(())
}
