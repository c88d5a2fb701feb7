use anyhow::Result;
use clap::{Parser, Subcommand};
use kwscout_core::{config, engine, registry};
use tracing::info;

#[derive(Parser)]
#[command(name = "kwscout", about = "Keyword suggestion expansion service")]
struct Cli {
    /// Path to a config file (defaults to config/default when present).
    #[arg(long)]
    config: Option<String>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Run the HTTP server.
    Serve,
    /// Expand a seed query once and print the collected keywords.
    Expand {
        query: String,
        /// Suggest engine: google, bing, or yahoo. Defaults to the
        /// configured default source.
        #[arg(long)]
        engine: Option<String>,
        /// Print a JSON document instead of one keyword per line.
        #[arg(long)]
        json: bool,
    },
}

#[tokio::main]
async fn main() -> Result<()> {
    tracing_subscriber::fmt::init();

    let cli = Cli::parse();
    let cfg = config::load(cli.config.as_deref())?;
    let registry = registry::build_registry(&cfg);

    match cli.command {
        Commands::Serve => server::start_server(cfg, registry).await,
        Commands::Expand {
            query,
            engine,
            json,
        } => run_expand(&registry, &query, engine.as_deref(), json).await,
    }
}

async fn run_expand(
    registry: &sources::SourceRegistry,
    query: &str,
    engine_name: Option<&str>,
    json: bool,
) -> Result<()> {
    if query.is_empty() {
        anyhow::bail!("query must not be empty");
    }

    let source = registry.get(engine_name)?;
    info!(engine = source.name(), query, "starting keyword scrape");

    let keywords = engine::expand(query, source.as_ref()).await;
    if keywords.is_empty() {
        anyhow::bail!("No keywords found");
    }

    if json {
        println!("{}", serde_json::json!({ "keywords": keywords }));
    } else {
        for keyword in &keywords {
            println!("{keyword}");
        }
    }
    Ok(())
}
