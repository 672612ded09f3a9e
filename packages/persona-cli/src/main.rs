//! Terminal front end: import personas, list them, chat with one.

mod adapters;
mod config;
mod progress;

use anyhow::{bail, Context, Result};
use colored::Colorize;
use console::style;
use dialoguer::Input;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use adapters::{FarcasterTimeline, FireflyLinks, TwitterIdentity, TwitterTimeline};
use config::Config;
use firefly_client::FireflyClient;
use persona_engine::{
    import_persona, respond, EngineError, FsVectorStore, ImportConfig, ImportDeps, ImportLocks,
    ImportProgress, ImportStatus, OpenAI, PersonaRegistry, PostgresRegistry, RespondConfig,
};
use progress::TerminalProgress;
use rapidapi_client::RapidApiClient;

#[tokio::main]
async fn main() -> Result<()> {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "warn,persona_engine=info".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    let mut args = std::env::args().skip(1);
    let command = args.next().unwrap_or_default();

    match command.as_str() {
        "import" => {
            let handle = args.next().context("usage: persona-cli import <handle>")?;
            run_import(&handle).await
        }
        "chat" => {
            let name = args.next().context("usage: persona-cli chat <name>")?;
            run_chat(&name).await
        }
        "list" => run_list().await,
        _ => {
            print_usage();
            Ok(())
        }
    }
}

async fn run_import(handle: &str) -> Result<()> {
    let config = Config::from_env()?;
    tracing::info!(handle, "starting persona import");

    let registry = PostgresRegistry::new(&config.database_url)
        .await
        .context("failed to open the persona registry")?;
    let store = FsVectorStore::new();
    let model = OpenAI::new(config.openai_api_key.expose());

    let rapidapi = RapidApiClient::new(config.rapidapi_key.expose().to_string());
    let firefly = FireflyClient::new(config.firefly_token.expose().to_string());

    let identity = TwitterIdentity::new(rapidapi.clone());
    let twitter = TwitterTimeline::new(rapidapi);
    let links = FireflyLinks::new(firefly.clone());
    let farcaster = FarcasterTimeline::new(firefly);

    let deps = ImportDeps {
        identity: &identity,
        twitter: &twitter,
        links: &links,
        farcaster: &farcaster,
        embedder: &model,
        store: &store,
        registry: &registry,
    };
    let locks = ImportLocks::new();
    let import_config = ImportConfig::new(&config.store_root);

    let twitter_progress = TerminalProgress::new("twitter");
    let farcaster_progress = TerminalProgress::new("farcaster");
    let progress = ImportProgress {
        twitter: &twitter_progress,
        farcaster: &farcaster_progress,
    };

    match import_persona(&deps, &locks, handle, &import_config, &progress).await {
        Ok(outcome) => {
            println!("{}", style(outcome.to_string()).green());
            Ok(())
        }
        Err(e @ EngineError::AccountNotFound { .. }) => {
            println!("{}", style(e.to_string()).red());
            std::process::exit(1);
        }
        Err(e) => {
            println!("{}", style(format!("Import failed: {e}")).red());
            std::process::exit(1);
        }
    }
}

async fn run_chat(name: &str) -> Result<()> {
    let config = Config::from_env()?;
    let registry = PostgresRegistry::new(&config.database_url)
        .await
        .context("failed to open the persona registry")?;

    let Some(persona) = registry.find(name).await? else {
        bail!("no persona named {name:?}; run `persona-cli import {name}` first");
    };
    if persona.status != ImportStatus::FullyImported {
        bail!("persona {name:?} is not fully imported yet; re-run the import");
    }

    let store = FsVectorStore::new();
    let model = OpenAI::new(config.openai_api_key.expose());
    let respond_config = RespondConfig::default();

    println!(
        "{}",
        style(format!(
            "Chatting with {} - submit an empty line to quit",
            persona.name
        ))
        .bold()
    );
    loop {
        let question: String = Input::new()
            .with_prompt("you")
            .allow_empty(true)
            .interact_text()?;
        if question.trim().is_empty() {
            break;
        }

        let reply = respond(&model, &model, &store, &persona, &question, &respond_config).await?;
        println!("{} {}", style(format!("{}:", persona.name)).cyan().bold(), reply);
    }
    Ok(())
}

async fn run_list() -> Result<()> {
    let config = Config::from_env()?;
    let registry = PostgresRegistry::new(&config.database_url)
        .await
        .context("failed to open the persona registry")?;

    let personas = registry.list_ready().await?;
    if personas.is_empty() {
        println!("No personas imported yet.");
        return Ok(());
    }

    for persona in personas {
        let farcaster = persona.farcaster_id.as_deref().unwrap_or("-");
        println!(
            "{:<20} twitter:{:<22} farcaster:{}",
            style(&persona.name).bold(),
            persona.twitter_id,
            farcaster
        );
    }
    Ok(())
}

fn print_usage() {
    println!("{}", "persona-cli".bold());
    println!("  import <handle>   Crawl a Twitter account (and any linked Farcaster");
    println!("                    account) into the persona store");
    println!("  chat <name>       Chat with an imported persona");
    println!("  list              Show fully imported personas");
}
