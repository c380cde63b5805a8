//! Limner - Into the Odd character portraits. Main entry point.

use std::sync::Arc;

use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

mod app;
mod infrastructure;
mod use_cases;

use app::App;
use infrastructure::ports::PortraitGenPort;
use infrastructure::{ArtInstituteClient, GeminiClient, PollinationsClient, PollinationsModel};
use limner_domain::{generate, Character, GenderChoice, Mood, PortraitBatch};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Load environment from repo root (the binary may run from `crates/engine`).
    load_dotenv_from_repo_root();

    // Initialize logging
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "limner=info".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    let options = CliOptions::parse(std::env::args().skip(1))?;

    tracing::info!("Consulting the tables of the Odd");
    let character = generate(options.gender, &mut rand::thread_rng());
    print_sheet(&character);

    if options.no_portraits {
        return Ok(());
    }

    let provider = build_provider(&options.provider)?;
    match provider.check_health().await {
        Ok(true) => {}
        Ok(false) | Err(_) => {
            tracing::warn!(
                provider = %options.provider,
                "Provider health check failed, attempting plates anyway"
            );
        }
    }
    let app = App::new(provider, &options.provider);

    let batch = app
        .use_cases
        .portraits
        .generate
        .execute(&character, &options.moods)
        .await;
    print_batch(&batch);

    Ok(())
}

fn load_dotenv_from_repo_root() {
    let repo_root = std::path::Path::new(env!("CARGO_MANIFEST_DIR"))
        .join("..")
        .join("..");

    // Prefer local overrides.
    for filename in [".env.local", ".env"] {
        let path = repo_root.join(filename);
        if path.exists() {
            let _ = dotenvy::from_path(path);
        }
    }
}

/// Command-line options, parsed by hand.
struct CliOptions {
    gender: GenderChoice,
    provider: String,
    moods: Vec<Mood>,
    no_portraits: bool,
}

impl CliOptions {
    fn parse(mut args: impl Iterator<Item = String>) -> anyhow::Result<Self> {
        let mut options = Self {
            gender: GenderChoice::Random,
            provider: std::env::var("LIMNER_PROVIDER").unwrap_or_else(|_| "flux".into()),
            moods: Mood::STANDARD.to_vec(),
            no_portraits: false,
        };

        while let Some(arg) = args.next() {
            match arg.as_str() {
                "--gender" => {
                    let value = args
                        .next()
                        .ok_or_else(|| anyhow::anyhow!("--gender needs a value"))?;
                    options.gender = value.parse()?;
                }
                "--provider" => {
                    options.provider = args
                        .next()
                        .ok_or_else(|| anyhow::anyhow!("--provider needs a value"))?;
                }
                "--moods" => {
                    let value = args
                        .next()
                        .ok_or_else(|| anyhow::anyhow!("--moods needs a value"))?;
                    options.moods = value
                        .split(',')
                        .map(|s| s.parse().unwrap_or(Mood::Unknown))
                        .collect();
                }
                "--no-portraits" => options.no_portraits = true,
                "--help" | "-h" => {
                    print_usage();
                    std::process::exit(0);
                }
                other => {
                    print_usage();
                    anyhow::bail!("unrecognized argument: {other}");
                }
            }
        }

        if options.moods.is_empty() {
            anyhow::bail!("--moods must name at least one mood");
        }
        Ok(options)
    }
}

fn print_usage() {
    eprintln!(
        "Usage: limner [--gender male|female|random] \
         [--provider flux|turbo|gemini|archive] \
         [--moods <comma-separated>] [--no-portraits]"
    );
}

/// Build the requested portrait provider from the environment.
fn build_provider(name: &str) -> anyhow::Result<Arc<dyn PortraitGenPort>> {
    match name {
        "flux" | "turbo" => {
            let base_url = std::env::var("POLLINATIONS_URL")
                .unwrap_or_else(|_| "https://image.pollinations.ai".into());
            let model = if name == "turbo" {
                PollinationsModel::Turbo
            } else {
                PollinationsModel::Flux
            };
            Ok(Arc::new(PollinationsClient::new(&base_url, model)))
        }
        "gemini" => {
            let base_url = std::env::var("GEMINI_URL")
                .unwrap_or_else(|_| "https://generativelanguage.googleapis.com".into());
            let api_key = std::env::var("GEMINI_API_KEY")
                .map_err(|_| anyhow::anyhow!("GEMINI_API_KEY is required for --provider gemini"))?;
            let mut client = GeminiClient::new(&base_url, api_key);
            if let Ok(model) = std::env::var("GEMINI_MODEL") {
                client = client.with_model(model);
            }
            Ok(Arc::new(client))
        }
        "archive" => {
            let base_url =
                std::env::var("ARTIC_URL").unwrap_or_else(|_| "https://api.artic.edu".into());
            let iiif_url = std::env::var("ARTIC_IIIF_URL")
                .unwrap_or_else(|_| "https://www.artic.edu/iiif/2".into());
            Ok(Arc::new(ArtInstituteClient::new(&base_url, &iiif_url)))
        }
        other => anyhow::bail!(
            "unknown provider {other:?} (expected flux, turbo, gemini, or archive)"
        ),
    }
}

fn print_sheet(character: &Character) {
    println!();
    println!("  {}", character.name);
    println!("  {}", character.description);
    println!();
    println!(
        "  STR {:>2}  DEX {:>2}  WIL {:>2}  HP {}  {}G",
        character.abilities.strength,
        character.abilities.dexterity,
        character.abilities.willpower,
        character.hp,
        character.wealth
    );
    println!();
    for item in &character.equipment {
        println!("  - {item}");
    }
    if let Some(arcanum) = &character.arcanum {
        println!("  Arcanum: {} ({})", arcanum.name, arcanum.description);
    }
    if let Some(oddity) = &character.oddity {
        println!("  Distinction: {oddity}");
    }
    println!();
}

fn print_batch(batch: &PortraitBatch) {
    match &batch.status {
        limner_domain::BatchStatus::Failed { error } => {
            eprintln!("  No plates could be developed: {error}");
        }
        _ => {
            println!("  Plates ({} of {}):", batch.images.len(), batch.moods.len());
            for image in &batch.images {
                println!("  [{}] {}", image.mood, image.url);
            }
        }
    }
}
