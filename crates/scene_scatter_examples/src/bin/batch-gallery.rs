use anyhow::Result;
use scene_scatter::prelude::*;
use scene_scatter_examples::init_tracing;
use tracing::{info, warn};

fn main() -> Result<()> {
    init_tracing();

    let prompts: Vec<String> = [
        "a sunny mountain with a river",
        "birds over a cloudy forest",
        "stars above the hills at night",
        "cows and goats by the stream",
        "a lonely tree",
    ]
    .into_iter()
    .map(String::from)
    .collect();

    let config = GenerationConfig::default()
        .with_output_dir("outputs/gallery")
        .with_seed(7)
        .with_parallel(true);

    let mut composer = SceneComposer::new(config)?;
    let results = composer.generate_batch(&prompts)?;

    for (prompt, result) in prompts.iter().zip(results) {
        match result {
            Ok(path) => info!(prompt, path = %path.display(), "wrote scene"),
            Err(error) => warn!(prompt, %error, "generation failed"),
        }
    }

    Ok(())
}
