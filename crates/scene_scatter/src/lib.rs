#![forbid(unsafe_code)]
//! scene_scatter: prompt-driven procedural scene composition and raster rendering.
//!
//! Modules:
//! - prompt: keyword vocabulary mapping prompt text to element types
//! - element: drawable scene elements, styles, and the runtime factory
//! - plan: non-overlapping position planning via bounded rejection sampling
//! - compose: configuration and the top-level scene composer (single + batch)
//! - canvas: the drawing-surface abstraction and its raster backend
//!
//! For examples, see the `scene_scatter_examples` crate.
pub mod canvas;
pub mod color;
pub mod compose;
pub mod element;
pub mod error;
pub mod geometry;
pub mod plan;
pub mod prompt;

/// Convenient re-exports for common types. Import with `use scene_scatter::prelude::*;`.
pub mod prelude {
    pub use crate::canvas::raster::RasterCanvas;
    pub use crate::canvas::{DrawSurface, ImageFormat};
    pub use crate::color::Color;
    pub use crate::compose::composer::{seed_for_prompt, SceneComposer};
    pub use crate::compose::config::{load_config, save_config, GenerationConfig};
    pub use crate::element::factory::ElementFactory;
    pub use crate::element::style::ElementStyle;
    pub use crate::element::{
        Bird, Cloud, Cow, Goat, Mountain, River, SceneElement, Star, Sun, Tree,
    };
    pub use crate::error::{Error, Result};
    pub use crate::geometry::Rect;
    pub use crate::plan::{vertical_band, Placement, PlacementPlanner};
    pub use crate::prompt::{Vocabulary, DEFAULT_ELEMENT_TYPES};
}
