use anyhow::Result;
use glam::Vec2;
use rand::RngCore;
use scene_scatter::prelude::*;
use scene_scatter_examples::init_tracing;
use tracing::info;

/// A striped tower with a light on top, registered at runtime.
struct Lighthouse {
    style: ElementStyle,
}

const TOWER_WIDTH: f32 = 24.0;
const TOWER_HEIGHT: f32 = 90.0;
const STRIPES: u32 = 4;
const LAMP_RADIUS: f32 = 8.0;

impl SceneElement for Lighthouse {
    fn draw(&self, surface: &mut dyn DrawSurface, position: Vec2, _rng: &mut dyn RngCore) {
        let width = TOWER_WIDTH * self.style.size;
        let height = TOWER_HEIGHT * self.style.size;
        let stripe = height / STRIPES as f32;

        for i in 0..STRIPES {
            let color = if i % 2 == 0 {
                self.style.fill()
            } else {
                self.style.tint(Color::rgb(255, 255, 255))
            };
            let top = position + Vec2::new(0.0, i as f32 * stripe);
            surface.fill_rect(Rect::new(top, top + Vec2::new(width, stripe)), color);
        }

        let lamp = position + Vec2::new(width / 2.0, -LAMP_RADIUS);
        surface.fill_ellipse(
            lamp,
            LAMP_RADIUS * self.style.size,
            LAMP_RADIUS * self.style.size,
            self.style.tint(Color::rgb(255, 220, 80)),
        );
    }

    fn bounds(&self, position: Vec2) -> Rect {
        let width = TOWER_WIDTH * self.style.size;
        let height = TOWER_HEIGHT * self.style.size;
        Rect::new(
            position - Vec2::new(0.0, 2.0 * LAMP_RADIUS),
            position + Vec2::new(width, height),
        )
    }

    fn style(&self) -> &ElementStyle {
        &self.style
    }
}

fn main() -> Result<()> {
    init_tracing();

    let config = GenerationConfig::default()
        .with_output_dir("outputs")
        .with_seed(1234);

    let mut composer = SceneComposer::new(config)?;
    composer
        .factory_mut()
        .register("lighthouse", Box::new(|style| Box::new(Lighthouse { style })))?;
    composer
        .vocabulary_mut()
        .add_entry("lighthouse", ["lighthouse", "beacon"]);

    let path = composer.generate("a lighthouse by the water under clouds", None)?;
    info!(path = %path.display(), "wrote scene");

    Ok(())
}
