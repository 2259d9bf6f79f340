mod i18n;
mod layout;
mod runtime;

use clap::{Parser, Subcommand};
use critter_catalog::source_for;
use critter_core::{
    config::{self, CritterConfig},
    lang::Lang,
    page::FilterTarget,
    shellexpand,
};
use critter_memory::Store;
use std::path::PathBuf;
use tokio::sync::mpsc;
use tracing::warn;
use tracing_appender::non_blocking::WorkerGuard;
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

use crate::i18n::Translator;
use crate::runtime::{PageEvent, PageRuntime};

#[derive(Parser)]
#[command(
    name = "critter",
    version,
    about = "Headless page runtime for A Curious Critter"
)]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// Path to config file.
    #[arg(short, long, default_value = "config.toml")]
    config: String,
}

#[derive(Subcommand)]
enum Commands {
    /// Show or change the persisted interface language.
    Lang {
        #[command(subcommand)]
        action: Option<LangAction>,
    },
    /// Load a page, replay clicks, and print the resulting HTML.
    Page {
        /// Page location, e.g. `/essays.html` or `/essays/on-moss.html`.
        location: String,
        /// Click the filter control for this target (`all` or a language code).
        #[arg(long = "click")]
        clicks: Vec<String>,
        /// Click the language toggle once after load.
        #[arg(long)]
        toggle: bool,
    },
    /// Check the configured site and stored preference.
    Status,
}

#[derive(Subcommand)]
enum LangAction {
    /// Persist a specific language.
    Set { lang: Lang },
    /// Switch between English and Chinese.
    Toggle,
}

#[tokio::main(flavor = "current_thread")]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    let cfg = config::load(&cli.config)?;
    let _guard = init_logging(&cfg.critter);

    match cli.command {
        Commands::Lang { action } => {
            let store = open_store(&cfg).await?;
            let lang = match action {
                None => store.preferred_language().await,
                Some(LangAction::Set { lang }) => {
                    store.set_preferred_language(lang).await;
                    lang
                }
                Some(LangAction::Toggle) => {
                    let next = store.preferred_language().await.toggled();
                    store.set_preferred_language(next).await;
                    next
                }
            };
            println!("{lang}");
            store.close().await;
        }
        Commands::Page {
            location,
            clicks,
            toggle,
        } => {
            let store = open_store(&cfg).await?;
            let translator = Translator::from_store(store.clone()).await;
            let page = layout::page_for(&location, &cfg.site);

            // Resolve click targets against the page before anything runs.
            let mut events = vec![PageEvent::Ready];
            if toggle {
                events.push(PageEvent::ToggleLanguage);
            }
            for raw in &clicks {
                let target = FilterTarget::parse(raw);
                let index = page
                    .filter
                    .as_ref()
                    .and_then(|bar| bar.position(&target))
                    .ok_or_else(|| anyhow::anyhow!("{location} has no '{target}' filter"))?;
                events.push(PageEvent::FilterClicked(index));
            }

            let rt = PageRuntime::new(page, translator, source_for(&cfg.site), cfg.site.clone());
            let (tx, rx) = mpsc::channel(events.len().max(1));
            for event in events {
                tx.send(event).await?;
            }
            drop(tx);

            let page = rt.run(rx).await;
            print!("{}", page.to_html());
            store.close().await;
        }
        Commands::Status => {
            println!("{} — Status Check\n", cfg.critter.name);
            println!("Config: {}", cli.config);
            println!("Site root: {}", cfg.site.root);
            println!("Dictionary: {} keys", i18n::KEYS.len());

            let store = open_store(&cfg).await?;
            println!("Language: {}", store.preferred_language().await);
            store.close().await;

            let source = source_for(&cfg.site);
            match source.fetch_manifest(&cfg.site.list_manifest).await {
                Ok(entries) => println!(
                    "  {} ({}): {} essay(s)",
                    cfg.site.list_manifest,
                    source.name(),
                    entries.len()
                ),
                Err(e) => println!("  {} ({}): {e}", cfg.site.list_manifest, source.name()),
            }
        }
    }

    Ok(())
}

/// Open the preference store, falling back to a session-only store.
async fn open_store(cfg: &config::Config) -> anyhow::Result<Store> {
    match Store::new(&cfg.storage).await {
        Ok(store) => Ok(store),
        Err(e) => {
            warn!("preferences will not persist: {e}");
            Ok(Store::in_memory().await?)
        }
    }
}

/// Log to stderr and to a daily file under `<data_dir>/logs`.
fn init_logging(cfg: &CritterConfig) -> Option<WorkerGuard> {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(&cfg.log_level));

    let log_dir = PathBuf::from(shellexpand(&cfg.data_dir)).join("logs");
    let (file_layer, guard) = match std::fs::create_dir_all(&log_dir) {
        Ok(()) => {
            let appender = tracing_appender::rolling::daily(&log_dir, "critter.log");
            let (writer, guard) = tracing_appender::non_blocking(appender);
            (
                Some(fmt::layer().with_writer(writer).with_ansi(false)),
                Some(guard),
            )
        }
        Err(e) => {
            eprintln!("critter: file logging disabled ({}): {e}", log_dir.display());
            (None, None)
        }
    };

    tracing_subscriber::registry()
        .with(filter)
        .with(fmt::layer().with_writer(std::io::stderr))
        .with(file_layer)
        .init();

    guard
}
