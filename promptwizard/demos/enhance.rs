//! Enhance a prompt idea from the command line.
//!
//! ```text
//! GEMINI_API_KEY=... cargo run --example enhance -- "a cat on a skateboard"
//! ```
//!
//! Results are printed in the plain-text export format and saved to a
//! local archive file.

use promptwizard::export;
use promptwizard::prelude::*;
use std::sync::Arc;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .init();

    let input = std::env::args().skip(1).collect::<Vec<_>>().join(" ");
    let input = if input.trim().is_empty() {
        "a cat on a skateboard".to_string()
    } else {
        input
    };

    let store: Arc<dyn KeyValueStore> =
        Arc::new(promptwizard::JsonFileStore::open("promptwizard_store.json")?);
    let user_credential = CredentialStore::new(store.clone()).load()?;

    let executor = RequestExecutor::builder(GeminiProvider::new())
        .layer(LoggingLayer::new())
        .credentials(CredentialSource::from_env())
        .finish();

    let settings = Settings::builder()
        .mode(PromptMode::ImageGeneration)
        .image_model(Some(ImageModel::Midjourney))
        .tone(PromptTone::Creative)
        .include_negatives(true)
        .complexity(Complexity::Intermediate)
        .quantity(3)
        .build()?;

    println!("Enhancing: {}\n", input);

    let results = match executor
        .enhance(
            &input,
            &settings,
            user_credential.as_ref().map(|c| c.expose()),
        )
        .await
    {
        Ok(results) => results,
        Err(e) => {
            eprintln!("{}", e.user_message());
            if e.requires_credential() {
                eprintln!("Set GEMINI_API_KEY or save a key to promptwizard_store.json.");
            }
            return Err(e.into());
        }
    };

    println!("{}", export::to_text(&results));

    let archive = SavedResults::new(store);
    if let Some(first) = results.first() {
        if archive.save(first)? {
            println!("Saved the first variation ({} in archive).", archive.list()?.len());
        }
    }

    Ok(())
}
