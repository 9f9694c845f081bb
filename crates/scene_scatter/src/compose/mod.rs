//! Scene composition: configuration surface and the top-level composer that
//! turns prompts into rendered, persisted images.
pub mod composer;
pub mod config;

pub use composer::{seed_for_prompt, SceneComposer};
pub use config::{load_config, save_config, GenerationConfig};
