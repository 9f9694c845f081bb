//! Configuration surface for scene generation.
//!
//! Loaded from JSON or built in code; validated once before any generation
//! begins. Validation failures are fatal for the whole composer, unlike
//! per-prompt errors during batch generation.
use std::collections::HashMap;
use std::fs;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::canvas::ImageFormat;
use crate::color::Color;
use crate::error::{Error, Result};

/// Configuration for the scene composer.
#[non_exhaustive]
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct GenerationConfig {
    /// Canvas width in pixels, in [100, 4000].
    pub width: u32,
    /// Canvas height in pixels, in [100, 4000].
    pub height: u32,
    /// Directory default output paths are rooted in.
    pub output_dir: PathBuf,
    pub output_format: ImageFormat,
    /// JPEG quality in [1, 100]; ignored for lossless formats.
    pub output_quality: u8,
    /// Background color, hex or named.
    pub background_color: String,
    /// Per-type color overrides, hex or named. Types without an entry fall
    /// back to black, matching the factory default.
    pub element_colors: HashMap<String, String>,
    /// Lower bound for the per-type element count.
    pub min_elements: u32,
    /// Upper bound for the per-type element count.
    pub max_elements: u32,
    /// Seed for reproducible generation; `None` seeds from OS entropy.
    pub seed: Option<u64>,
    /// Run batch generation on a worker pool instead of sequentially.
    pub parallel: bool,
    /// Worker pool size for parallel batches, in [1, 16].
    pub batch_size: u32,
}

impl Default for GenerationConfig {
    fn default() -> Self {
        let element_colors = [
            ("sun", "yellow"),
            ("tree", "forestgreen"),
            ("bird", "black"),
            ("mountain", "#a0c4ff"),
            ("river", "blue"),
            ("cloud", "white"),
            ("star", "white"),
            ("cow", "black"),
            ("goat", "black"),
        ]
        .into_iter()
        .map(|(k, v)| (k.to_owned(), v.to_owned()))
        .collect();

        Self {
            width: 800,
            height: 600,
            output_dir: PathBuf::from("outputs"),
            output_format: ImageFormat::Png,
            output_quality: 95,
            background_color: "#87CEEB".to_owned(),
            element_colors,
            min_elements: 5,
            max_elements: 20,
            seed: None,
            parallel: false,
            batch_size: 4,
        }
    }
}

impl GenerationConfig {
    pub fn with_size(mut self, width: u32, height: u32) -> Self {
        self.width = width;
        self.height = height;
        self
    }

    pub fn with_output_dir(mut self, output_dir: impl Into<PathBuf>) -> Self {
        self.output_dir = output_dir.into();
        self
    }

    pub fn with_format(mut self, format: ImageFormat) -> Self {
        self.output_format = format;
        self
    }

    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    pub fn with_parallel(mut self, parallel: bool) -> Self {
        self.parallel = parallel;
        self
    }

    pub fn with_element_counts(mut self, min_elements: u32, max_elements: u32) -> Self {
        self.min_elements = min_elements;
        self.max_elements = max_elements;
        self
    }

    /// Validates the configuration, returning an error if invalid.
    ///
    /// Element colors are validated lazily when a type is first used, so an
    /// invalid color for a type no prompt mentions never surfaces.
    pub fn validate(&self) -> Result<()> {
        if !(100..=4000).contains(&self.width) || !(100..=4000).contains(&self.height) {
            return Err(Error::InvalidConfig(format!(
                "dimensions {}x{} must be within [100, 4000]",
                self.width, self.height
            )));
        }
        if !(1..=100).contains(&self.output_quality) {
            return Err(Error::InvalidConfig(format!(
                "output_quality {} must be within [1, 100]",
                self.output_quality
            )));
        }
        if self.min_elements == 0 || self.min_elements > self.max_elements {
            return Err(Error::InvalidConfig(format!(
                "element count range [{}, {}] is invalid",
                self.min_elements, self.max_elements
            )));
        }
        if !(1..=16).contains(&self.batch_size) {
            return Err(Error::InvalidConfig(format!(
                "batch_size {} must be within [1, 16]",
                self.batch_size
            )));
        }
        Color::parse(&self.background_color)?;
        Ok(())
    }
}

/// Load a configuration from a JSON file.
pub fn load_config(path: &Path) -> Result<GenerationConfig> {
    let data = fs::read_to_string(path)?;
    let config: GenerationConfig =
        serde_json::from_str(&data).map_err(|e| Error::InvalidConfig(e.to_string()))?;
    Ok(config)
}

/// Save a configuration to a JSON file.
pub fn save_config(config: &GenerationConfig, path: &Path) -> Result<()> {
    let data = serde_json::to_string_pretty(config)
        .map_err(|e| Error::InvalidConfig(e.to_string()))?;
    fs::write(path, data)?;
    Ok(())
}
