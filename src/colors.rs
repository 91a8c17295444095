use crate::error::{Error, Result};
use crate::math::Point;

use palette::Srgb;
use std::collections::HashSet;
use tracing::debug;

// Joy sits in the upper right quadrant, anger and gloom in the lower left.
const EMOTIONS: [(&str, [f64; 2], [u8; 3]); 8] = [
    ("orange", [0.6, 0.6], [255, 165, 0]),
    ("blue", [-0.6, 0.6], [0, 0, 255]),
    ("bluegreen", [0.5, 0.4], [0, 165, 255]),
    ("green", [0.4, 0.5], [0, 205, 0]),
    ("red", [-0.6, -0.6], [255, 0, 0]),
    ("yellow", [0.3, 0.3], [255, 255, 0]),
    ("purple", [-0.5, -0.4], [128, 0, 128]),
    ("neutral", [0.0, 0.0], [255, 241, 224]),
];

/// A named control point of the color field.
#[derive(Debug, Clone, PartialEq)]
pub struct Anchor {
    pub name: String,
    pub position: Point,
    pub color: Srgb<u8>,
}

impl Anchor {
    pub fn new(name: impl Into<String>, position: Point, color: Srgb<u8>) -> Anchor {
        Anchor {
            name: name.into(),
            position,
            color,
        }
    }
}

/// Immutable, validated set of anchors.
///
/// Each anchor carries its own position and color, so iteration always sees
/// them paired in one consistent order.
#[derive(Debug, Clone)]
pub struct AnchorRegistry {
    anchors: Vec<Anchor>,
}

impl AnchorRegistry {
    pub fn new(anchors: Vec<Anchor>) -> Result<AnchorRegistry> {
        validate(&anchors)?;

        debug!(count = anchors.len(), "anchor registry built");

        Ok(AnchorRegistry { anchors })
    }

    /// The built-in emotion table.
    pub fn emotions() -> AnchorRegistry {
        let anchors = EMOTIONS
            .iter()
            .map(|&(name, [x, y], [r, g, b])| {
                Anchor::new(name, Point::new(x, y), Srgb::new(r, g, b))
            })
            .collect();

        AnchorRegistry { anchors }
    }

    pub fn anchors(&self) -> &[Anchor] {
        &self.anchors
    }

    pub fn get(&self, name: &str) -> Option<&Anchor> {
        self.anchors.iter().find(|anchor| anchor.name == name)
    }

    pub fn len(&self) -> usize {
        self.anchors.len()
    }

    pub fn is_empty(&self) -> bool {
        self.anchors.is_empty()
    }
}

fn validate(anchors: &[Anchor]) -> Result<()> {
    if anchors.is_empty() {
        return Err(Error::EmptyAnchors);
    }

    let mut names = HashSet::new();
    for anchor in anchors {
        if !names.insert(anchor.name.as_str()) {
            return Err(Error::DuplicateAnchor(anchor.name.clone()));
        }

        let Point { x, y } = anchor.position;
        if !(-1.0..=1.0).contains(&x) || !(-1.0..=1.0).contains(&y) {
            return Err(Error::AnchorOutOfRange {
                name: anchor.name.clone(),
                x,
                y,
            });
        }
    }

    Ok(())
}

impl Default for AnchorRegistry {
    fn default() -> Self {
        AnchorRegistry::emotions()
    }
}
