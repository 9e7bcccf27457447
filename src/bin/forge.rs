//! Interactive prompt form
//!
//! Collects a style mode and fragments, sends them to the hosted model and
//! prints the finished image prompt for copy-paste.
//!
//! Usage: cargo run --features form --bin forge

use anyhow::Result;
use dialoguer::{Confirm, Input, Select};
use dotenvy::dotenv;
use log::{error, info};
use std::sync::Arc;

use prompt_forge::core::Config;
use prompt_forge::features::completion::{CompletionClient, GenerationProfiles, OpenAiTransport};
use prompt_forge::features::composer::PromptFragments;
use prompt_forge::features::forge::{Forge, Submission};
use prompt_forge::features::styles::{BaseCharacter, Slot, StyleMode};

#[tokio::main]
async fn main() -> Result<()> {
    // Load environment variables from .env file
    dotenv().ok();

    // No credential, no form
    let config = Config::from_env()?;

    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(&config.log_level))
        .init();

    info!("Starting prompt forge...");

    let profiles = match GenerationProfiles::load(&config.profiles_path) {
        Ok(profiles) => {
            info!("📄 Loaded generation profiles from {}", config.profiles_path);
            profiles
        }
        Err(e) => {
            if std::path::Path::new(&config.profiles_path).exists() {
                error!(
                    "❌ Failed to load profiles from {}: {e} - using built-in settings",
                    config.profiles_path
                );
            } else {
                info!(
                    "📄 No profiles file at {} - using built-in settings",
                    config.profiles_path
                );
            }
            GenerationProfiles::empty()
        }
    }
    .with_model_override(config.model.clone());

    let transport = Arc::new(OpenAiTransport::from_config(&config));
    let client = CompletionClient::new(transport, config.request_timeout);
    let forge = Forge::new(client, profiles);

    println!("Smart Prompt Generator");
    println!("======================\n");

    loop {
        let labels: Vec<&str> = StyleMode::ALL.iter().map(|m| m.label()).collect();
        let mode_index = Select::new()
            .with_prompt("Mode")
            .items(&labels)
            .default(0)
            .interact()?;
        let mode = StyleMode::ALL[mode_index];

        let fragments = collect_fragments(mode)?;

        println!("\nGenerating prompt...");
        match forge.submit(mode, &fragments).await {
            Submission::Rejected { warning } => {
                println!("⚠️  {warning}");
            }
            Submission::Generated {
                enhanced,
                final_prompt,
                ..
            } => {
                println!("\nDone! Prompt ready to copy:\n");
                println!("{final_prompt}\n");
                println!("Model output: {enhanced}");
            }
            Submission::Failed { message, .. } => {
                println!("Error: {message}");
            }
        }

        let again = Confirm::new()
            .with_prompt("Generate another?")
            .default(true)
            .interact()?;
        if !again {
            break;
        }
        println!();
    }

    Ok(())
}

/// Ask for every slot of the mode, offering base characters for avatars
fn collect_fragments(mode: StyleMode) -> Result<PromptFragments> {
    let mut fragments = PromptFragments::new();

    for slot in mode.slots() {
        if mode == StyleMode::Avatar && *slot == Slot::Subject {
            if let Some(character) = pick_base_character()? {
                fragments.set(Slot::Subject, character.subject());
                continue;
            }
        }

        let mut input = Input::<String>::new()
            .with_prompt(slot_prompt(mode, *slot))
            .allow_empty(true);
        if *slot == Slot::Title {
            input = input.default("BIG SALE".to_string());
        }
        fragments.set(*slot, input.interact_text()?);
    }

    Ok(fragments)
}

fn pick_base_character() -> Result<Option<BaseCharacter>> {
    let mut items: Vec<&str> = BaseCharacter::ALL.iter().map(|c| c.label()).collect();
    items.push("Custom subject");

    let index = Select::new()
        .with_prompt("Base model face")
        .items(&items)
        .default(0)
        .interact()?;
    Ok(BaseCharacter::ALL.get(index).copied())
}

fn slot_prompt(mode: StyleMode, slot: Slot) -> &'static str {
    match slot {
        Slot::RawIdea if mode == StyleMode::Avatar => "What is the character doing? (any language)",
        Slot::Subject => "Subject (who or what is in the picture)",
        Slot::Outfit => "Outfit (optional)",
        Slot::Background => "Background (optional)",
        Slot::Title => "Poster title",
        Slot::RawIdea => "Rough idea (any language)",
    }
}
