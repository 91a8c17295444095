use crate::math::Point;

use image::{Rgb, RgbImage};
use palette::Srgb;

// Half the side of the window `pick` reads back.
const PICK_RADIUS: i64 = 2;

/// An RGB image laid over the emotion plane.
///
/// Row 0 is the top (highest energy), column 0 the left (lowest valence) and
/// the center pixel is the origin. Fresh canvases are black.
#[derive(Debug, Clone)]
pub struct Canvas {
    image: RgbImage,
}

impl Canvas {
    pub fn new(width: u32, height: u32) -> Canvas {
        Canvas {
            image: RgbImage::new(width, height),
        }
    }

    pub fn width(&self) -> u32 {
        self.image.width()
    }

    pub fn height(&self) -> u32 {
        self.image.height()
    }

    pub fn center(&self) -> (u32, u32) {
        (self.width() / 2, self.height() / 2)
    }

    pub fn contains(&self, x: i64, y: i64) -> bool {
        x >= 0 && y >= 0 && x < i64::from(self.width()) && y < i64::from(self.height())
    }

    pub fn pixel(&self, x: u32, y: u32) -> Option<Srgb<u8>> {
        self.image
            .get_pixel_checked(x, y)
            .map(|&Rgb([r, g, b])| Srgb::new(r, g, b))
    }

    /// Sets a single pixel, returning `false` when it lies off the canvas.
    pub fn mark(&mut self, x: i64, y: i64, color: Srgb<u8>) -> bool {
        if !self.contains(x, y) {
            return false;
        }
        self.image.put_pixel(x as u32, y as u32, to_pixel(color));
        true
    }

    /// Paints the half-open rectangle `[x0, x1) × [y0, y1)`, clipped to the canvas.
    pub fn fill_rect(&mut self, x0: u32, y0: u32, x1: u32, y1: u32, color: Srgb<u8>) {
        let pixel = to_pixel(color);
        for y in y0..y1.min(self.height()) {
            for x in x0..x1.min(self.width()) {
                self.image.put_pixel(x, y, pixel);
            }
        }
    }

    /// Pixel a point lands on. Coordinates are truncated towards the center
    /// and may fall outside the canvas.
    pub fn locate(&self, point: Point) -> (i64, i64) {
        let (cx, cy) = self.center();
        let x = i64::from(cx) + (point.x * f64::from(self.width()) / 2.0) as i64;
        let y = i64::from(cy) - (point.y * f64::from(self.height()) / 2.0) as i64;
        (x, y)
    }

    /// Point in the plane that pixel `(x, y)` samples. The y axis is flipped.
    pub fn point_at(&self, x: u32, y: u32) -> Point {
        let half_width = f64::from(self.width()) / 2.0;
        let half_height = f64::from(self.height()) / 2.0;
        Point::new(
            (f64::from(x) - half_width) / half_width,
            (half_height - f64::from(y)) / half_height,
        )
    }

    /// Reads back the color around a point: the per-column median of a 4x4
    /// window, averaged across columns.
    pub fn pick(&self, point: Point) -> Option<Srgb<u8>> {
        let (x, y) = self.locate(point);
        if !self.contains(x, y) {
            return None;
        }

        let top = (y - PICK_RADIUS).max(0);
        let bottom = (y + PICK_RADIUS).min(i64::from(self.height()));
        let left = (x - PICK_RADIUS).max(0);
        let right = (x + PICK_RADIUS).min(i64::from(self.width()));

        let mut sums = [0.0f64; 3];
        let mut column = Vec::with_capacity((bottom - top) as usize);
        for col in left..right {
            for (channel, sum) in sums.iter_mut().enumerate() {
                column.clear();
                column.extend(
                    (top..bottom).map(|row| self.image.get_pixel(col as u32, row as u32).0[channel]),
                );
                *sum += median(&mut column);
            }
        }

        let columns = (right - left) as f64;
        let [r, g, b] = sums.map(|sum| (sum / columns) as u8);
        Some(Srgb::new(r, g, b))
    }

    /// Draws a one pixel crosshair through the center.
    pub fn draw_axes(&mut self, color: Srgb<u8>) {
        let (cx, cy) = self.center();
        let (width, height) = (self.width(), self.height());
        if cx < width {
            self.fill_rect(cx, 0, cx + 1, height, color);
        }
        if cy < height {
            self.fill_rect(0, cy, width, cy + 1, color);
        }
    }

    pub fn as_image(&self) -> &RgbImage {
        &self.image
    }

    pub fn into_image(self) -> RgbImage {
        self.image
    }
}

fn to_pixel(color: Srgb<u8>) -> Rgb<u8> {
    Rgb([color.red, color.green, color.blue])
}

fn median(values: &mut [u8]) -> f64 {
    values.sort_unstable();
    let mid = values.len() / 2;
    if values.len() % 2 == 0 {
        (f64::from(values[mid - 1]) + f64::from(values[mid])) / 2.0
    } else {
        f64::from(values[mid])
    }
}
