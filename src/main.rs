use anyhow::{Context, bail};
use clap::Parser;
use lantern::{Session, SnapshotStore, config::Config, console};
use std::path::PathBuf;

// cargo run -- --lang en
// cargo run -- --state slot1

#[derive(Debug, Parser)]
#[command(name = "lantern", version, about = "A small text adventure engine")]
struct Args {
    /// Language of the world definition to start (eg: "en")
    #[arg(long)]
    lang: Option<String>,

    /// Resume from a save slot instead of starting a new game
    #[arg(long)]
    state: Option<String>,

    /// TOML config file (if omitted, use env)
    #[arg(long)]
    config: Option<PathBuf>,

    /// Print the available languages and exit
    #[arg(long)]
    list_languages: bool,
}

fn main() -> anyhow::Result<()> {
    init_tracing()?;
    let args = Args::parse();

    let mut cfg = match &args.config {
        Some(path) => Config::load(path)?,
        None => Config::from_env()?,
    };
    if let Some(lang) = args.lang {
        cfg.lang = lang;
    }

    let store = SnapshotStore::from_config(&cfg);
    let languages = store
        .languages()
        .with_context(|| format!("listing languages in {}", cfg.conf_dir.display()))?;

    if args.list_languages {
        for lang in &languages {
            println!("{lang}");
        }
        return Ok(());
    }

    let world = match &args.state {
        Some(slot) => store
            .load_slot(slot)
            .with_context(|| format!("loading save slot '{slot}'"))?,
        None => {
            if !languages.contains(&cfg.lang) {
                bail!("unknown language '{}', available: {}", cfg.lang, languages.join(", "));
            }
            store
                .load_language(&cfg.lang)
                .with_context(|| format!("loading world for language '{}'", cfg.lang))?
        }
    };
    tracing::info!(world = %world.name, lang = %cfg.lang, "starting game");

    let mut session = Session::new(world, store);
    let stdin = std::io::stdin();
    console::run(&mut session, stdin.lock(), std::io::stdout().lock())?;

    Ok(())
}

fn init_tracing() -> anyhow::Result<()> {
    use tracing_subscriber::{EnvFilter, prelude::*};

    color_eyre::install().map_err(|e| anyhow::anyhow!("installing error hooks: {e}"))?;

    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));

    tracing_subscriber::registry()
        .with(filter)
        .with(
            tracing_subscriber::fmt::layer()
                .with_target(false)
                .with_writer(std::io::stderr)
                .with_timer(tracing_subscriber::fmt::time::uptime()),
        )
        .with(tracing_error::ErrorLayer::default())
        .init();

    Ok(())
}
