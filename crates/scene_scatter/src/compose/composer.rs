//! Top-level scene composer: prompt in, persisted raster image out.
//!
//! One composer owns one random stream, one element cache, and one validated
//! configuration. Batch generation either reuses those sequentially or fans
//! out to a bounded worker pool where every prompt gets its own derived
//! random stream and worker-local cache; the factory and vocabulary are
//! shared read-only.
use std::collections::HashMap;
use std::fs;
use std::path::{Path, PathBuf};
use std::sync::atomic::{AtomicUsize, Ordering};
use std::thread;

use glam::Vec2;
use rand::rngs::StdRng;
use rand::{RngCore, SeedableRng};
use tracing::{info, warn};

use crate::canvas::raster::RasterCanvas;
use crate::canvas::ImageFormat;
use crate::color::Color;
use crate::compose::config::GenerationConfig;
use crate::element::factory::ElementFactory;
use crate::element::style::ElementStyle;
use crate::element::SceneElement;
use crate::error::{Error, Result};
use crate::plan::{rand_range_i32, Placement, PlacementPlanner};
use crate::prompt::{Vocabulary, DEFAULT_ELEMENT_TYPES};

type ElementCache = HashMap<String, Box<dyn SceneElement>>;

/// Orchestrates parsing, planning, caching, drawing, and persistence.
pub struct SceneComposer {
    config: GenerationConfig,
    factory: ElementFactory,
    vocabulary: Vocabulary,
    planner: PlacementPlanner,
    cache: ElementCache,
    rng: StdRng,
    base_seed: u64,
}

impl SceneComposer {
    /// Create a composer for the given configuration.
    ///
    /// The configuration is validated here; validation failure is fatal
    /// before any generation begins.
    pub fn new(config: GenerationConfig) -> Result<Self> {
        config.validate()?;
        let base_seed = match config.seed {
            Some(seed) => seed,
            None => rand::rng().next_u64(),
        };
        Ok(Self {
            config,
            factory: ElementFactory::default(),
            vocabulary: Vocabulary::default(),
            planner: PlacementPlanner::new(),
            cache: ElementCache::new(),
            rng: StdRng::seed_from_u64(base_seed),
            base_seed,
        })
    }

    pub fn config(&self) -> &GenerationConfig {
        &self.config
    }

    /// Mutable access to the element registry, for runtime-registered
    /// variants.
    pub fn factory_mut(&mut self) -> &mut ElementFactory {
        &mut self.factory
    }

    /// Mutable access to the keyword vocabulary, so registered variants can
    /// be made reachable from prompts.
    pub fn vocabulary_mut(&mut self) -> &mut Vocabulary {
        &mut self.vocabulary
    }

    /// Generate one image for `prompt` and persist it.
    ///
    /// Without an explicit `output_path` the image lands in the configured
    /// output directory, named after the prompt.
    pub fn generate(&mut self, prompt: &str, output_path: Option<&Path>) -> Result<PathBuf> {
        generate_one(
            &self.config,
            &self.factory,
            &self.vocabulary,
            &self.planner,
            &mut self.cache,
            &mut self.rng,
            prompt,
            output_path,
        )
    }

    /// Generate one image per prompt, returning per-prompt outcomes in input
    /// order. One prompt's failure never aborts its siblings; only the
    /// up-front output-directory creation is fatal for the whole batch.
    pub fn generate_batch(&mut self, prompts: &[String]) -> Result<Vec<Result<PathBuf>>> {
        fs::create_dir_all(&self.config.output_dir)?;

        if self.config.parallel {
            Ok(self.generate_batch_parallel(prompts))
        } else {
            let mut results = Vec::with_capacity(prompts.len());
            for prompt in prompts {
                let path = self
                    .config
                    .output_dir
                    .join(output_file_name(prompt, self.config.output_format));
                results.push(self.generate(prompt, Some(&path)));
            }
            Ok(results)
        }
    }

    fn generate_batch_parallel(&self, prompts: &[String]) -> Vec<Result<PathBuf>> {
        let workers = (self.config.batch_size as usize).min(prompts.len()).max(1);
        let next = AtomicUsize::new(0);

        let config = &self.config;
        let factory = &self.factory;
        let vocabulary = &self.vocabulary;
        let planner = &self.planner;
        let base_seed = self.base_seed;
        let next_ref = &next;

        let mut results: Vec<Option<Result<PathBuf>>> =
            (0..prompts.len()).map(|_| None).collect();

        thread::scope(|scope| {
            let handles: Vec<_> = (0..workers)
                .map(|_| {
                    scope.spawn(move || {
                        let mut local: Vec<(usize, Result<PathBuf>)> = Vec::new();
                        // Workers are isolated: own cache, own derived rng.
                        loop {
                            let index = next_ref.fetch_add(1, Ordering::Relaxed);
                            if index >= prompts.len() {
                                break;
                            }
                            let prompt = &prompts[index];
                            let mut rng =
                                StdRng::seed_from_u64(seed_for_prompt(base_seed, index as u64));
                            let mut cache = ElementCache::new();
                            let path = config
                                .output_dir
                                .join(output_file_name(prompt, config.output_format));
                            let outcome = generate_one(
                                config,
                                factory,
                                vocabulary,
                                planner,
                                &mut cache,
                                &mut rng,
                                prompt,
                                Some(&path),
                            );
                            local.push((index, outcome));
                        }
                        local
                    })
                })
                .collect();

            for handle in handles {
                for (index, outcome) in handle.join().expect("generation worker panicked") {
                    results[index] = Some(outcome);
                }
            }
        });

        results
            .into_iter()
            .map(|slot| slot.expect("every prompt index was claimed by a worker"))
            .collect()
    }
}

/// Derive an independent per-prompt seed from the configured base seed, so
/// parallel workers never share a random stream regardless of scheduling.
pub fn seed_for_prompt(base_seed: u64, index: u64) -> u64 {
    mix_u64(base_seed ^ index.wrapping_mul(0x9E3779B97F4A7C15))
}

#[inline]
fn mix_u64(mut x: u64) -> u64 {
    x ^= x >> 30;
    x = x.wrapping_mul(0xBF58476D1CE4E5B9);
    x ^= x >> 27;
    x = x.wrapping_mul(0x94D049BB133111EB);
    x ^ (x >> 31)
}

fn output_file_name(prompt: &str, format: ImageFormat) -> String {
    let stem = prompt.trim().replace(' ', "_");
    let stem = if stem.is_empty() {
        "scene".to_owned()
    } else {
        stem
    };
    format!("{stem}.{}", format.extension())
}

/// Resolve a styled element for `element_type` into the cache, creating it on
/// first use with the configured color (black when unconfigured).
fn resolve_element<'a>(
    config: &GenerationConfig,
    factory: &ElementFactory,
    cache: &'a mut ElementCache,
    element_type: &str,
) -> Result<&'a dyn SceneElement> {
    if !cache.contains_key(element_type) {
        let color = match config.element_colors.get(element_type) {
            Some(value) => Color::parse(value)?,
            None => Color::BLACK,
        };
        let element = factory.create_with_style(element_type, ElementStyle::new(color))?;
        cache.insert(element_type.to_owned(), element);
    }
    Ok(cache
        .get(element_type)
        .expect("element cached above")
        .as_ref())
}

#[allow(clippy::too_many_arguments)]
fn generate_one(
    config: &GenerationConfig,
    factory: &ElementFactory,
    vocabulary: &Vocabulary,
    planner: &PlacementPlanner,
    cache: &mut ElementCache,
    rng: &mut StdRng,
    prompt: &str,
    output_path: Option<&Path>,
) -> Result<PathBuf> {
    info!(prompt, "generating image");

    let background = Color::parse(&config.background_color)?;
    let mut canvas = RasterCanvas::new(config.width, config.height, background);
    let extent = Vec2::new(config.width as f32, config.height as f32);

    let mut element_types = vocabulary.parse(prompt);
    if element_types.is_empty() {
        warn!(prompt, "no elements found in prompt, using default set");
        element_types = DEFAULT_ELEMENT_TYPES.iter().map(|s| s.to_string()).collect();
    }

    // Count ceiling grows with scene variety but never drops below the floor.
    let ceiling = config
        .min_elements
        .max(config.max_elements.min(3 * element_types.len() as u32));

    let mut placements: Vec<Placement> = Vec::new();
    for element_type in &element_types {
        let count = rand_range_i32(rng, config.min_elements as i32, ceiling as i32) as usize;
        let element = resolve_element(config, factory, cache, element_type)?;
        let positions = planner.plan(element, element_type, count, extent, rng);
        placements.extend(
            positions
                .into_iter()
                .map(|position| Placement::new(element_type.clone(), position)),
        );
    }

    // Paint order: types in parse order, positions in planner order.
    for placement in &placements {
        let element = cache
            .get(&placement.element_type)
            .expect("cached during planning");
        element.draw(&mut canvas, placement.position, rng);
    }

    let path = match output_path {
        Some(path) => path.to_owned(),
        None => {
            fs::create_dir_all(&config.output_dir)?;
            config
                .output_dir
                .join(output_file_name(prompt, config.output_format))
        }
    };
    canvas.save(&path, config.output_format, config.output_quality)?;
    info!(path = %path.display(), placements = placements.len(), "image saved");

    Ok(path)
}

#[cfg(test)]
mod tests {
    use std::collections::HashSet;

    use tempfile::tempdir;

    use super::*;
    use crate::geometry::Rect;

    fn test_config(dir: &Path, seed: u64) -> GenerationConfig {
        GenerationConfig::default()
            .with_output_dir(dir)
            .with_seed(seed)
    }

    #[test]
    fn generate_writes_an_image_with_configured_dimensions() {
        let dir = tempdir().unwrap();
        let mut composer = SceneComposer::new(test_config(dir.path(), 1)).unwrap();

        let path = composer
            .generate("a sunny mountain with a river", None)
            .unwrap();
        assert!(path.exists());
        assert_eq!(path.extension().unwrap(), "png");

        let (width, height) = image::image_dimensions(&path).unwrap();
        assert_eq!((width, height), (800, 600));
    }

    #[test]
    fn same_seed_and_prompt_give_pixel_identical_output() {
        let dir = tempdir().unwrap();
        let prompt = "a sunny mountain with a river";

        let mut first = SceneComposer::new(test_config(dir.path(), 7)).unwrap();
        let path_a = first.generate(prompt, Some(&dir.path().join("a.png"))).unwrap();

        let mut second = SceneComposer::new(test_config(dir.path(), 7)).unwrap();
        let path_b = second.generate(prompt, Some(&dir.path().join("b.png"))).unwrap();

        assert_eq!(fs::read(path_a).unwrap(), fs::read(path_b).unwrap());
    }

    #[test]
    fn different_seeds_differ() {
        let dir = tempdir().unwrap();
        let prompt = "stars at night";

        let mut first = SceneComposer::new(test_config(dir.path(), 7)).unwrap();
        let path_a = first.generate(prompt, Some(&dir.path().join("a.png"))).unwrap();

        let mut second = SceneComposer::new(test_config(dir.path(), 8)).unwrap();
        let path_b = second.generate(prompt, Some(&dir.path().join("b.png"))).unwrap();

        assert_ne!(fs::read(path_a).unwrap(), fs::read(path_b).unwrap());
    }

    #[test]
    fn empty_prompt_falls_back_to_default_elements() {
        let dir = tempdir().unwrap();
        let mut composer = SceneComposer::new(test_config(dir.path(), 3)).unwrap();

        let path = composer
            .generate("", Some(&dir.path().join("fallback.png")))
            .unwrap();
        assert!(path.exists());
    }

    #[test]
    fn default_path_creates_a_missing_output_directory() {
        let dir = tempdir().unwrap();
        let output_dir = dir.path().join("nested").join("outputs");
        let config = GenerationConfig::default()
            .with_output_dir(&output_dir)
            .with_seed(2);
        let mut composer = SceneComposer::new(config).unwrap();

        let path = composer.generate("a tree", None).unwrap();
        assert!(path.exists());
        assert_eq!(path.parent().unwrap(), output_dir);
    }

    #[test]
    fn default_file_name_derives_from_prompt() {
        assert_eq!(
            output_file_name("a sunny day", ImageFormat::Png),
            "a_sunny_day.png"
        );
        assert_eq!(output_file_name("", ImageFormat::Jpeg), "scene.jpeg");
    }

    #[test]
    fn invalid_element_color_fails_that_generation_only() {
        let dir = tempdir().unwrap();
        let mut config = test_config(dir.path(), 5);
        config
            .element_colors
            .insert("cow".to_owned(), "notacolor".to_owned());
        let mut composer = SceneComposer::new(config).unwrap();

        let err = composer
            .generate("a cow", Some(&dir.path().join("cow.png")))
            .unwrap_err();
        assert!(matches!(err, Error::InvalidConfig(_)));

        // The cache is not poisoned; other prompts still work.
        composer
            .generate("a tree", Some(&dir.path().join("tree.png")))
            .unwrap();
    }

    #[test]
    fn invalid_config_is_fatal_before_generation() {
        let config = GenerationConfig::default().with_size(10, 10);
        assert!(matches!(
            SceneComposer::new(config),
            Err(Error::InvalidConfig(_))
        ));
    }

    #[test]
    fn batch_results_preserve_input_order_sequentially() {
        let dir = tempdir().unwrap();
        let mut composer = SceneComposer::new(test_config(dir.path(), 9)).unwrap();

        let prompts: Vec<String> = ["a tree", "a sunny hill", "stars at night"]
            .into_iter()
            .map(String::from)
            .collect();
        let results = composer.generate_batch(&prompts).unwrap();

        assert_eq!(results.len(), 3);
        let names: Vec<String> = results
            .iter()
            .map(|r| {
                r.as_ref()
                    .unwrap()
                    .file_name()
                    .unwrap()
                    .to_string_lossy()
                    .into_owned()
            })
            .collect();
        assert_eq!(
            names,
            vec!["a_tree.png", "a_sunny_hill.png", "stars_at_night.png"]
        );
    }

    #[test]
    fn parallel_batch_preserves_input_order_and_reproducibility() {
        let prompts: Vec<String> = ["a tree", "a sunny hill", "stars at night", "a cow", "goats"]
            .into_iter()
            .map(String::from)
            .collect();

        let run = |dir: &Path| {
            let config = test_config(dir, 21).with_parallel(true);
            let mut composer = SceneComposer::new(config).unwrap();
            composer.generate_batch(&prompts).unwrap()
        };

        let dir_a = tempdir().unwrap();
        let dir_b = tempdir().unwrap();
        let results_a = run(dir_a.path());
        let results_b = run(dir_b.path());

        for (prompt, (a, b)) in prompts.iter().zip(results_a.iter().zip(results_b.iter())) {
            let path_a = a.as_ref().unwrap();
            let path_b = b.as_ref().unwrap();
            assert_eq!(
                path_a.file_name(),
                path_b.file_name(),
                "order broke at '{prompt}'"
            );
            assert_eq!(
                fs::read(path_a).unwrap(),
                fs::read(path_b).unwrap(),
                "parallel output not reproducible for '{prompt}'"
            );
        }
    }

    #[test]
    fn one_failing_prompt_does_not_abort_the_batch() {
        let dir = tempdir().unwrap();
        let mut composer = SceneComposer::new(test_config(dir.path(), 13)).unwrap();

        // The second prompt's derived file name contains path separators
        // pointing into a directory that does not exist.
        let prompts: Vec<String> = ["a tree", "bad/dir tree", "a sunny hill"]
            .into_iter()
            .map(String::from)
            .collect();
        let results = composer.generate_batch(&prompts).unwrap();

        assert!(results[0].is_ok());
        assert!(matches!(results[1], Err(Error::Persistence { .. })));
        assert!(results[2].is_ok());
    }

    #[test]
    fn registered_variant_is_reachable_end_to_end() {
        struct Castle {
            style: ElementStyle,
        }

        impl SceneElement for Castle {
            fn draw(
                &self,
                surface: &mut dyn crate::canvas::DrawSurface,
                position: Vec2,
                _rng: &mut dyn RngCore,
            ) {
                surface.fill_rect(self.bounds(position), self.style.fill());
            }

            fn bounds(&self, position: Vec2) -> Rect {
                Rect::new(position, position + Vec2::new(80.0, 60.0))
            }

            fn style(&self) -> &ElementStyle {
                &self.style
            }
        }

        let dir = tempdir().unwrap();
        let mut composer = SceneComposer::new(test_config(dir.path(), 17)).unwrap();
        composer
            .factory_mut()
            .register("castle", Box::new(|style| Box::new(Castle { style })))
            .unwrap();
        composer
            .vocabulary_mut()
            .add_entry("castle", ["castle", "fortress"]);

        let path = composer
            .generate("a castle", Some(&dir.path().join("castle.png")))
            .unwrap();
        assert!(path.exists());
    }

    #[test]
    fn derived_seeds_are_distinct_per_prompt() {
        let mut seen = HashSet::new();
        for index in 0..100 {
            assert!(seen.insert(seed_for_prompt(42, index)));
        }
        assert_ne!(seed_for_prompt(1, 0), seed_for_prompt(2, 0));
    }
}
