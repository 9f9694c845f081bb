use anyhow::Result;
use scene_scatter::prelude::*;
use scene_scatter_examples::init_tracing;
use tracing::info;

fn main() -> Result<()> {
    init_tracing();

    let args: Vec<String> = std::env::args().skip(1).collect();
    let prompt = if args.is_empty() {
        "a sunny mountain with a river and trees".to_owned()
    } else {
        args.join(" ")
    };

    let config = GenerationConfig::default()
        .with_output_dir("outputs")
        .with_seed(42);

    let mut composer = SceneComposer::new(config)?;
    let path = composer.generate(&prompt, None)?;
    info!(path = %path.display(), "wrote scene");

    Ok(())
}
