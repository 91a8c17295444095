use config::Config;
use palette::Srgb;
use serde_derive::Deserialize;

use crate::colors::{Anchor, AnchorRegistry};
use crate::error::Result;
use crate::interpolator::Interpolator;
use crate::math::Point;

pub const DEFAULT_CONFIG_PATH: &str = "./moodcolor";

#[derive(Debug, Deserialize, Clone)]
pub struct AnchorSettings {
    pub name: String,
    pub position: [f64; 2],
    pub color: [u8; 3],
}

impl From<&AnchorSettings> for Anchor {
    fn from(settings: &AnchorSettings) -> Self {
        let [x, y] = settings.position;
        let [r, g, b] = settings.color;
        Anchor::new(settings.name.clone(), Point::new(x, y), Srgb::new(r, g, b))
    }
}

#[derive(Debug, Deserialize, Clone, Default)]
pub struct Settings {
    // None means the built-in emotion table
    pub anchors: Option<Vec<AnchorSettings>>,
    pub step: Option<u32>,
    pub width: Option<u32>,
    pub height: Option<u32>,
    pub epsilon: Option<f64>,
    #[serde(rename = "target-sum")]
    pub target_sum: Option<f64>,
}

impl Settings {
    pub fn anchor_registry(&self) -> Result<AnchorRegistry> {
        match &self.anchors {
            Some(anchors) => AnchorRegistry::new(anchors.iter().map(Anchor::from).collect()),
            None => Ok(AnchorRegistry::emotions()),
        }
    }

    pub fn interpolator(&self) -> Result<Interpolator> {
        let mut interpolator = Interpolator::new(self.anchor_registry()?);

        if let Some(epsilon) = self.epsilon {
            interpolator = interpolator.with_epsilon(epsilon)?;
        }
        if let Some(target_sum) = self.target_sum {
            interpolator = interpolator.with_target_sum(target_sum)?;
        }

        Ok(interpolator)
    }
}

/// Reads settings from an optional JSON file at `path` (extension may be
/// omitted), overridden by `MOODCOLOR_*` environment variables.
pub fn get_config(path: &str) -> Result<Settings> {
    load(path, environment())
}

// MOODCOLOR_TARGET_SUM lands on the same `target-sum` key the file uses
fn environment() -> config::Environment {
    config::Environment::with_prefix("MOODCOLOR").convert_case(config::Case::Kebab)
}

fn load(path: &str, environment: config::Environment) -> Result<Settings> {
    let settings = Config::builder()
        .add_source(config::File::with_name(path).required(false))
        .add_source(environment)
        .build()?;

    Ok(settings.try_deserialize::<Settings>()?)
}
