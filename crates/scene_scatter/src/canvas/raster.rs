//! Raster backend for [`DrawSurface`] built on `image` and `imageproc`.
use std::fs::File;
use std::io::BufWriter;
use std::path::Path;

use glam::Vec2;
use image::codecs::jpeg::JpegEncoder;
use image::{DynamicImage, Rgba, RgbaImage};
use imageproc::drawing::{
    draw_filled_ellipse_mut, draw_filled_rect_mut, draw_line_segment_mut, draw_polygon_mut, Blend,
};
use imageproc::point::Point;

use crate::canvas::{DrawSurface, ImageFormat};
use crate::color::Color;
use crate::error::{Error, Result};
use crate::geometry::Rect;

/// Angular step used when flattening arcs into line segments.
const ARC_STEP_DEG: f32 = 5.0;

/// Mutable RGBA pixel buffer with alpha blending, exclusively owned by one
/// generation call.
pub struct RasterCanvas {
    inner: Blend<RgbaImage>,
}

impl RasterCanvas {
    /// Create a canvas of the given size filled with a background color.
    pub fn new(width: u32, height: u32, background: Color) -> Self {
        let image = RgbaImage::from_pixel(width, height, background.into());
        Self {
            inner: Blend(image),
        }
    }

    pub fn image(&self) -> &RgbaImage {
        &self.inner.0
    }

    pub fn into_image(self) -> RgbaImage {
        self.inner.0
    }

    /// Persist the canvas at `path` in the given format. `quality` applies to
    /// JPEG only and must be in [1, 100]; lossless formats ignore it.
    pub fn save(&self, path: &Path, format: ImageFormat, quality: u8) -> Result<()> {
        let persistence = |source: image::ImageError| Error::Persistence {
            path: path.to_owned(),
            source,
        };

        match format {
            ImageFormat::Png => self
                .image()
                .save_with_format(path, image::ImageFormat::Png)
                .map_err(persistence),
            ImageFormat::Bmp => {
                // BMP has no alpha channel worth keeping; flatten to RGB.
                let rgb = DynamicImage::ImageRgba8(self.image().clone()).to_rgb8();
                rgb.save_with_format(path, image::ImageFormat::Bmp)
                    .map_err(persistence)
            }
            ImageFormat::Jpeg => {
                let rgb = DynamicImage::ImageRgba8(self.image().clone()).to_rgb8();
                let file = File::create(path)
                    .map_err(|e| persistence(image::ImageError::IoError(e)))?;
                let writer = BufWriter::new(file);
                let mut encoder = JpegEncoder::new_with_quality(writer, quality.clamp(1, 100));
                encoder.encode_image(&rgb).map_err(persistence)
            }
        }
    }
}

impl DrawSurface for RasterCanvas {
    fn width(&self) -> u32 {
        self.inner.0.width()
    }

    fn height(&self) -> u32 {
        self.inner.0.height()
    }

    fn line(&mut self, from: Vec2, to: Vec2, color: Color, stroke_width: u32) {
        let pixel: Rgba<u8> = color.into();
        if stroke_width <= 1 {
            draw_line_segment_mut(&mut self.inner, (from.x, from.y), (to.x, to.y), pixel);
            return;
        }

        // Thicker strokes are drawn as parallel 1px lines offset along the
        // segment's normal.
        let direction = to - from;
        let normal = if direction.length_squared() > 0.0 {
            Vec2::new(-direction.y, direction.x).normalize()
        } else {
            Vec2::new(0.0, 1.0)
        };
        let half = (stroke_width - 1) as f32 * 0.5;
        for i in 0..stroke_width {
            let offset = normal * (i as f32 - half);
            let a = from + offset;
            let b = to + offset;
            draw_line_segment_mut(&mut self.inner, (a.x, a.y), (b.x, b.y), pixel);
        }
    }

    fn fill_ellipse(&mut self, center: Vec2, rx: f32, ry: f32, color: Color) {
        let cx = center.x.round() as i32;
        let cy = center.y.round() as i32;
        let rx = (rx.round() as i32).max(1);
        let ry = (ry.round() as i32).max(1);
        draw_filled_ellipse_mut(&mut self.inner, (cx, cy), rx, ry, color.into());
    }

    fn fill_polygon(&mut self, points: &[Vec2], color: Color) {
        if points.len() < 3 {
            return;
        }
        let mut poly: Vec<Point<i32>> = points
            .iter()
            .map(|p| Point::new(p.x.round() as i32, p.y.round() as i32))
            .collect();
        // draw_polygon_mut requires an open ring.
        if poly.len() > 1 && poly.first() == poly.last() {
            poly.pop();
        }
        poly.dedup();
        if poly.len() < 3 {
            return;
        }
        draw_polygon_mut(&mut self.inner, &poly, color.into());
    }

    fn fill_rect(&mut self, rect: Rect, color: Color) {
        let x = rect.min.x.round() as i32;
        let y = rect.min.y.round() as i32;
        let w = rect.width().round() as i64;
        let h = rect.height().round() as i64;
        if w < 1 || h < 1 {
            return;
        }
        draw_filled_rect_mut(
            &mut self.inner,
            imageproc::rect::Rect::at(x, y).of_size(w as u32, h as u32),
            color.into(),
        );
    }

    fn arc(
        &mut self,
        center: Vec2,
        rx: f32,
        ry: f32,
        start_deg: f32,
        end_deg: f32,
        color: Color,
        stroke_width: u32,
    ) {
        let sweep = end_deg - start_deg;
        if sweep == 0.0 || rx <= 0.0 || ry <= 0.0 {
            return;
        }
        let steps = ((sweep.abs() / ARC_STEP_DEG).ceil() as usize).max(1);
        let point_at = |deg: f32| {
            let rad = deg.to_radians();
            center + Vec2::new(rx * rad.cos(), ry * rad.sin())
        };
        let mut prev = point_at(start_deg);
        for i in 1..=steps {
            let t = start_deg + sweep * (i as f32 / steps as f32);
            let next = point_at(t);
            self.line(prev, next, color, stroke_width);
            prev = next;
        }
    }
}
