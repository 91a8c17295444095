use palette::Srgb;
use std::ops::{AddAssign, Mul};

/// Brightest value a display channel can take.
pub const CHANNEL_MAX: f64 = 255.0;

/// A coordinate in the emotion plane: `x` is valence, `y` is energy.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

impl Point {
    pub const ORIGIN: Point = Point { x: 0.0, y: 0.0 };

    pub const fn new(x: f64, y: f64) -> Point {
        Point { x, y }
    }

    /// Maps a valence/energy pair given in `[0, 1]` onto the `[-1, 1]` plane.
    pub fn from_unit(valence: f64, energy: f64) -> Point {
        Point::new(2.0 * valence - 1.0, 2.0 * energy - 1.0)
    }

    pub fn distance(&self, other: &Point) -> f64 {
        (self.x - other.x).hypot(self.y - other.y)
    }
}

/// Color before quantization, channels on the `0..=255` scale.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct ColorSample {
    pub r: f64,
    pub g: f64,
    pub b: f64,
}

impl ColorSample {
    pub const fn new(r: f64, g: f64, b: f64) -> ColorSample {
        ColorSample { r, g, b }
    }

    pub fn sum(&self) -> f64 {
        self.r + self.g + self.b
    }

    pub fn max(&self) -> f64 {
        self.r.max(self.g).max(self.b)
    }

    pub fn distance(&self, other: &ColorSample) -> f64 {
        let (dr, dg, db) = (self.r - other.r, self.g - other.g, self.b - other.b);
        (dr * dr + dg * dg + db * db).sqrt()
    }

    /// Rounds to the nearest 8-bit sRGB value, clamping to the display range.
    pub fn quantize(self) -> Srgb<u8> {
        Srgb::new(
            self.r / CHANNEL_MAX,
            self.g / CHANNEL_MAX,
            self.b / CHANNEL_MAX,
        )
        .into_format()
    }
}

impl From<Srgb<u8>> for ColorSample {
    fn from(color: Srgb<u8>) -> Self {
        ColorSample::new(
            f64::from(color.red),
            f64::from(color.green),
            f64::from(color.blue),
        )
    }
}

impl AddAssign for ColorSample {
    fn add_assign(&mut self, rhs: ColorSample) {
        self.r += rhs.r;
        self.g += rhs.g;
        self.b += rhs.b;
    }
}

impl Mul<f64> for ColorSample {
    type Output = ColorSample;

    fn mul(self, k: f64) -> ColorSample {
        ColorSample::new(self.r * k, self.g * k, self.b * k)
    }
}

/// Rescales a blend so its channels sum to `target_sum`, or, if that would
/// push any channel past 255, so the largest channel lands exactly on 255.
///
/// Both branches agree where `max * target_sum / sum == 255`. A black or
/// non-finite blend has no hue to scale and comes back black.
pub fn saturate(color: ColorSample, target_sum: f64) -> ColorSample {
    let sum = color.sum();
    if !sum.is_finite() || sum <= 0.0 {
        return ColorSample::default();
    }

    let push = target_sum / sum;
    if color.max() * push <= CHANNEL_MAX {
        return color * push;
    }

    let clipped = color * (CHANNEL_MAX / color.max());
    ColorSample::new(
        clipped.r.min(CHANNEL_MAX),
        clipped.g.min(CHANNEL_MAX),
        clipped.b.min(CHANNEL_MAX),
    )
}
