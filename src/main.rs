//! Capsule - conversation hand-off between AI chat platforms.
//!
//! Main entry point for the Capsule CLI.

use std::sync::Arc;
use std::time::Duration;

use anyhow::Context;
use clap::Parser;
use tokio::sync::mpsc;
use tracing::{info, warn};
use tracing_subscriber::EnvFilter;

use capsule_browser_cdp::CdpBrowserDriver;
use capsule_classifier_gemini::GeminiClassifier;
use capsule_config::{Config, ConfigLoader};
use capsule_core::pending::HandoffState;
use capsule_core::resolver;
use capsule_core::{FileHistoryStore, Orchestrator};
use capsule_protocols::{BrowserDriver, HistoryStore, OrchestratorMessage, PanelEvent};

mod cli;

use cli::{Cli, Commands, HistoryAction};

fn init_tracing() {
    let env_filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));

    tracing_subscriber::fmt()
        .with_env_filter(env_filter)
        .with_target(false)
        .init();
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    init_tracing();

    let cli = Cli::parse();

    let config_path = cli.config.unwrap_or_else(ConfigLoader::default_path);
    let config = ConfigLoader::load(&config_path)
        .with_context(|| format!("failed to load config from {}", config_path.display()))?;

    match cli.command {
        Commands::Handoff { platform, url } => run_handoff(config, platform, url).await,
        Commands::History { action } => run_history(config, action).await,
    }
}

/// Scrape, summarize, and drive one hand-off end to end.
async fn run_handoff(
    config: Config,
    platform_override: Option<String>,
    url_fragment: Option<String>,
) -> anyhow::Result<()> {
    if config.gemini.api_key.is_empty() {
        anyhow::bail!(
            "no Gemini API key configured; set [gemini].api_key in the config \
             (environment variables expand via ${{VAR}})"
        );
    }

    let classifier = Arc::new(
        GeminiClassifier::new(config.gemini.api_key.clone(), config.gemini.model.clone())
            .with_base_url(config.gemini.api_url.clone()),
    );
    let driver = Arc::new(
        CdpBrowserDriver::connect(
            &config.chrome.endpoint,
            Duration::from_secs(config.chrome.connect_timeout_secs),
            config.handoff.settle_delay_ms,
        )
        .await
        .context("could not connect to Chrome")?,
    );
    let history = Arc::new(FileHistoryStore::with_cap(
        config.history.expanded_path(),
        config.history.capacity,
    ));

    let fallback_window = Duration::from_secs(config.handoff.fallback_window_secs);
    let (event_tx, mut panel_events) = mpsc::unbounded_channel();
    let mut orchestrator = Orchestrator::new(
        classifier,
        driver.clone(),
        history,
        event_tx,
    )
    .with_fallback_window(fallback_window);

    // Subscribe before opening anything so no lifecycle event is missed.
    let mut tab_events = driver.subscribe();

    let page = driver
        .source_page(url_fragment.as_deref())
        .await
        .context("could not find the source conversation tab")?;
    info!("Scraping \"{}\" ({})", page.title, page.url);

    let context = driver.scrape(&page.id).await.context("scrape failed")?;
    info!("Scraped {} characters of context", context.len());

    orchestrator
        .handle_message(OrchestratorMessage::SummarizeContext {
            context,
            source_url: page.url.clone(),
        })
        .await;

    let (base_summary, intent) = match panel_events.try_recv() {
        Ok(PanelEvent::DisplaySummary {
            summary_text,
            llm_options,
            base_summary,
            intent,
        }) => {
            println!("{summary_text}\n");
            println!("Available platforms:");
            for (name, url) in &llm_options {
                println!("  {name}: {url}");
            }
            println!();
            (base_summary, intent)
        }
        Ok(PanelEvent::DisplayError { error }) => anyhow::bail!("{error}"),
        Err(_) => anyhow::bail!("summarization produced no result"),
    };

    let target_platform = platform_override
        .unwrap_or_else(|| resolver::suggested_platform(intent).to_string());
    println!("Handing off to {target_platform}...");

    orchestrator
        .handle_message(OrchestratorMessage::ReHandOff {
            summary: base_summary,
            target_platform: target_platform.clone(),
            intent,
        })
        .await;

    if let Ok(PanelEvent::DisplayError { error }) = panel_events.try_recv() {
        anyhow::bail!("{error}");
    }

    if orchestrator.state() == HandoffState::AwaitingTab {
        // Feed tab lifecycle events until the destination is ready and the
        // injection dispatches, or the window closes.
        let deadline = tokio::time::Instant::now() + fallback_window + Duration::from_secs(10);
        while orchestrator.state() == HandoffState::AwaitingTab {
            match tokio::time::timeout_at(deadline, tab_events.recv()).await {
                Ok(Some(event)) => orchestrator.handle_tab_event(event).await,
                Ok(None) => break,
                Err(_) => {
                    warn!("destination tab never became ready");
                    break;
                }
            }
        }
        println!("Hand-off to {target_platform} dispatched.");
    } else {
        // Pre-filled URL platforms complete the hand-off with the tab itself.
        println!("Opened {target_platform} with the prompt pre-filled.");
    }

    Ok(())
}

/// Render and manage the hand-off history log.
async fn run_history(config: Config, action: HistoryAction) -> anyhow::Result<()> {
    let store = FileHistoryStore::with_cap(config.history.expanded_path(), config.history.capacity);

    match action {
        HistoryAction::List => {
            let entries = store.list().await?;
            if entries.is_empty() {
                println!("No saved hand-offs.");
                return Ok(());
            }
            for entry in entries {
                println!(
                    "{}  {}  {} -> {}  {}",
                    entry.id,
                    entry.date_formatted,
                    entry.intent.label(),
                    entry.platform_suggested,
                    truncate(&entry.summary, 60)
                );
            }
        }
        HistoryAction::Show { id } => {
            let entries = store.list().await?;
            let entry = entries
                .into_iter()
                .find(|e| e.id == id)
                .with_context(|| format!("no history entry with id {id}"))?;
            println!("Id:        {}", entry.id);
            println!("Date:      {}", entry.date_formatted);
            println!("Intent:    {}", entry.intent.label());
            println!("Platform:  {}", entry.platform_suggested);
            println!("Source:    {}", entry.source_url);
            println!("\nSummary:\n{}", entry.summary);
            println!("\nPrompt:\n{}", entry.full_prompt);
        }
        HistoryAction::Delete { id } => {
            store.delete(id).await?;
            println!("Deleted {id}.");
        }
        HistoryAction::Clear => {
            store.clear().await?;
            println!("History cleared.");
        }
    }

    Ok(())
}

fn truncate(s: &str, max_chars: usize) -> String {
    if s.chars().count() <= max_chars {
        s.to_string()
    } else {
        let cut: String = s.chars().take(max_chars).collect();
        format!("{cut}...")
    }
}
