use std::error::Error;

use tracing_subscriber::EnvFilter;
use wardrobe_link::{Linker, SuggestionConfig, demo_closet};

fn main() -> Result<(), Box<dyn Error>> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .with_target(false)
        .init();

    let linker = Linker::new(demo_closet()?).with_suggestions(SuggestionConfig {
        min_score: 0.5,
        ..Default::default()
    });
    tracing::info!("Annotating against {} demo closet items", linker.closet().len());

    let reply = "Pair the Navy Blazer with your White Tee, then finish the look with \
                 Black Boots. A silk scarf works too!";
    let segments = linker.annotate(reply);

    println!("{}", serde_json::to_string_pretty(&segments)?);

    for suggestion in linker.suggest("Whte Tee") {
        println!("did you mean {:?}? (score {:.2})", suggestion.name, suggestion.score);
    }

    Ok(())
}
