//! Painting scenes into a framebuffer.
//!
//! Rasterized coordinates have y growing upward with the origin at the
//! bottom-left pixel. The framebuffer is stored top row first, so pixel
//! `(x, y)` lands in row `height - 1 - y`.

use log::debug;

use crate::color::Rgba;
use crate::error::Result;
use crate::framebuffer::Framebuffer;
use crate::geometry::Point;
use crate::raster::DEFAULT_SAMPLES_PER_SEGMENT;
use crate::scene::Scene;

/// Drawing surface in raster coordinates.
#[derive(Debug, Clone)]
pub struct Canvas {
    framebuffer: Framebuffer,
    background: Rgba,
    samples_per_segment: usize,
}

impl Canvas {
    /// Create a canvas cleared to `background`.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidDimensions`](crate::Error::InvalidDimensions)
    /// if either dimension is zero.
    pub fn new(width: u32, height: u32, background: Rgba) -> Result<Self> {
        let mut framebuffer = Framebuffer::new(width, height)?;
        framebuffer.clear(background);
        Ok(Self {
            framebuffer,
            background,
            samples_per_segment: DEFAULT_SAMPLES_PER_SEGMENT,
        })
    }

    /// Use `samples` per segment when painting curves.
    #[must_use]
    pub fn with_samples_per_segment(mut self, samples: usize) -> Self {
        self.samples_per_segment = samples;
        self
    }

    /// Width in pixels.
    #[must_use]
    pub const fn width(&self) -> u32 {
        self.framebuffer.width()
    }

    /// Height in pixels.
    #[must_use]
    pub const fn height(&self) -> u32 {
        self.framebuffer.height()
    }

    /// The underlying framebuffer.
    #[must_use]
    pub const fn framebuffer(&self) -> &Framebuffer {
        &self.framebuffer
    }

    /// Reset every pixel to the background color.
    pub fn clear(&mut self) {
        self.framebuffer.clear(self.background);
    }

    /// Set one pixel. Points outside the canvas are ignored.
    pub fn plot(&mut self, point: Point, color: Rgba) {
        let (Ok(x), Ok(y)) = (u32::try_from(point.x), u32::try_from(point.y)) else {
            return;
        };
        if x >= self.width() || y >= self.height() {
            return;
        }
        self.framebuffer.set_pixel(x, self.height() - 1 - y, color);
    }

    /// Color at a raster coordinate, `None` off-canvas.
    #[must_use]
    pub fn pixel(&self, point: Point) -> Option<Rgba> {
        let x = u32::try_from(point.x).ok()?;
        let y = u32::try_from(point.y).ok()?;
        if y >= self.height() {
            return None;
        }
        self.framebuffer.get_pixel(x, self.height() - 1 - y)
    }

    /// Clear, then paint every scene item in order.
    ///
    /// # Errors
    ///
    /// Propagates rasterization failures.
    pub fn paint(&mut self, scene: &Scene) -> Result<()> {
        self.clear();
        for (id, item) in scene.iter() {
            let pixels = item.primitive.rasterize_with_samples(self.samples_per_segment)?;
            debug!("paint {} '{id}': {} pixels", item.primitive.kind(), pixels.len());
            for point in pixels {
                self.plot(point, item.color);
            }
        }
        Ok(())
    }
}
