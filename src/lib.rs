//! Emotion color space.
//!
//! Maps a (valence, energy) coordinate in `[-1, 1]²` to a vivid RGB color by
//! inverse-distance weighting a fixed set of colored anchors, and renders the
//! whole plane into a reusable colormap image.
//!
//! ```no_run
//! use moodcolor::{Interpolator, Point, Rasterizer};
//!
//! let interpolator = Interpolator::default();
//! let color = interpolator.rgb_at(Point::new(0.4, -0.2));
//! println!("{},{},{}", color.red, color.green, color.blue);
//!
//! let canvas = Rasterizer::new(&interpolator).render(400, 400)?;
//! # Ok::<(), moodcolor::Error>(())
//! ```

pub mod canvas;
pub mod colors;
pub mod config;
pub mod error;
pub mod interpolator;
pub mod math;
pub mod rasterizer;

pub use canvas::Canvas;
pub use colors::{Anchor, AnchorRegistry};
pub use config::Settings;
pub use error::{Error, Result};
pub use interpolator::{Interpolator, DEFAULT_EPSILON, DEFAULT_TARGET_SUM};
pub use math::{saturate, ColorSample, Point};
pub use rasterizer::{Rasterizer, DEFAULT_STEP, MAX_CANVAS_PIXELS};
