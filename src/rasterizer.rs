use crate::canvas::Canvas;
use crate::error::{Error, Result};
use crate::interpolator::Interpolator;

use tracing::{debug, trace};

/// Grid spacing, in pixels, between interpolator evaluations.
pub const DEFAULT_STEP: u32 = 5;

/// Largest canvas `render` will allocate, in pixels (about 200 MB of RGB).
pub const MAX_CANVAS_PIXELS: u64 = 1 << 26;

/// Renders an interpolator onto a canvas one `step × step` block at a time.
///
/// Each block takes the color sampled at its center, trading fidelity for a
/// `step²` reduction in evaluations. Rows and columns at the far edges that
/// cannot hold a whole block keep the canvas background.
#[derive(Debug, Clone, Copy)]
pub struct Rasterizer<'a> {
    interpolator: &'a Interpolator,
    step: u32,
}

impl<'a> Rasterizer<'a> {
    pub fn new(interpolator: &'a Interpolator) -> Rasterizer<'a> {
        Rasterizer {
            interpolator,
            step: DEFAULT_STEP,
        }
    }

    pub fn with_step(mut self, step: u32) -> Result<Rasterizer<'a>> {
        if step == 0 {
            return Err(Error::InvalidStep(step));
        }
        self.step = step;
        Ok(self)
    }

    pub fn step(&self) -> u32 {
        self.step
    }

    /// Offset from a block's top left corner to its sample point.
    pub fn half_window(&self) -> u32 {
        (self.step - 1) / 2
    }

    #[tracing::instrument(skip(self), fields(step = self.step))]
    pub fn render(&self, width: u32, height: u32) -> Result<Canvas> {
        let pixels = u64::from(width) * u64::from(height);
        if pixels == 0 || pixels > MAX_CANVAS_PIXELS {
            return Err(Error::InvalidCanvas { width, height });
        }

        let mut canvas = Canvas::new(width, height);

        for anchor in self.interpolator.anchors().anchors() {
            let (x, y) = canvas.locate(anchor.position);
            if !canvas.mark(x, y, anchor.color) {
                trace!(anchor = %anchor.name, x, y, "anchor marker off canvas");
            }
        }

        let win = self.half_window();
        let step = self.step as usize;
        let mut blocks = 0usize;

        for y in (win..height.saturating_sub(win)).step_by(step) {
            for x in (win..width.saturating_sub(win)).step_by(step) {
                let color = self.interpolator.rgb_at(canvas.point_at(x, y));
                let (x0, y0) = (x - win, y - win);
                canvas.fill_rect(x0, y0, x0 + self.step, y0 + self.step, color);
                blocks += 1;
            }
        }

        debug!(blocks, "colormap rendered");

        Ok(canvas)
    }
}
