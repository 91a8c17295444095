use crate::colors::{Anchor, AnchorRegistry};
use crate::error::{Error, Result};
use crate::math::{saturate, ColorSample, Point};

use palette::Srgb;

/// Added to every distance so an anchor's weight stays finite on top of it.
pub const DEFAULT_EPSILON: f64 = 0.1;

/// Channel sum a blend is pushed towards before the 255 ceiling kicks in.
pub const DEFAULT_TARGET_SUM: f64 = 600.0;

/// Inverse-distance weighted color field over an anchor set.
#[derive(Debug, Clone)]
pub struct Interpolator {
    anchors: AnchorRegistry,
    epsilon: f64,
    target_sum: f64,
}

impl Interpolator {
    pub fn new(anchors: AnchorRegistry) -> Interpolator {
        Interpolator {
            anchors,
            epsilon: DEFAULT_EPSILON,
            target_sum: DEFAULT_TARGET_SUM,
        }
    }

    pub fn with_epsilon(mut self, epsilon: f64) -> Result<Interpolator> {
        self.epsilon = positive("epsilon", epsilon)?;
        Ok(self)
    }

    pub fn with_target_sum(mut self, target_sum: f64) -> Result<Interpolator> {
        self.target_sum = positive("target sum", target_sum)?;
        Ok(self)
    }

    pub fn anchors(&self) -> &AnchorRegistry {
        &self.anchors
    }

    pub fn epsilon(&self) -> f64 {
        self.epsilon
    }

    pub fn target_sum(&self) -> f64 {
        self.target_sum
    }

    fn weight(&self, point: Point, anchor: &Anchor) -> f64 {
        1.0 / (point.distance(&anchor.position) + self.epsilon)
    }

    /// Raw weights, one per anchor in registry order.
    pub fn weights(&self, point: Point) -> Vec<f64> {
        self.anchors
            .anchors()
            .iter()
            .map(|anchor| self.weight(point, anchor))
            .collect()
    }

    /// Weighted average of the anchor colors, before saturation.
    pub fn blend(&self, point: Point) -> ColorSample {
        let mut color = ColorSample::default();
        let mut total = 0.0;

        for anchor in self.anchors.anchors() {
            let weight = self.weight(point, anchor);
            color += ColorSample::from(anchor.color) * weight;
            total += weight;
        }

        ColorSample::new(color.r / total, color.g / total, color.b / total)
    }

    pub fn color_at(&self, point: Point) -> ColorSample {
        saturate(self.blend(point), self.target_sum)
    }

    pub fn rgb_at(&self, point: Point) -> Srgb<u8> {
        self.color_at(point).quantize()
    }
}

impl Default for Interpolator {
    fn default() -> Self {
        Interpolator::new(AnchorRegistry::emotions())
    }
}

fn positive(name: &str, value: f64) -> Result<f64> {
    if value.is_finite() && value > 0.0 {
        Ok(value)
    } else {
        Err(Error::invalid_parameter(format!(
            "{name} must be positive and finite, got {value}"
        )))
    }
}
