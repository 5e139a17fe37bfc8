//! Floating panel configuration.

use serde::{Deserialize, Serialize};

use crate::error::{ConfigError, Result};
use crate::geometry::Rectangle;

/// Default width of the edge hit-test band, in pixels.
pub const DEFAULT_HIT_THRESHOLD: f32 = 6.0;

/// Size limits and hit-test band for a floating panel.
///
/// Built through [`PanelConfig::new`], which rejects non-positive values
/// instead of clamping them.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PanelConfig {
    min_width: f32,
    min_height: f32,
    hit_threshold: f32,
}

fn positive(value: f32) -> bool {
    value.is_finite() && value > 0.0
}

impl PanelConfig {
    /// Minimums used by the column chooser panel.
    pub const CHOOSER_MIN_WIDTH: f32 = 444.0;
    pub const CHOOSER_MIN_HEIGHT: f32 = 406.0;

    pub fn new(min_width: f32, min_height: f32) -> Result<Self> {
        if !positive(min_width) {
            return Err(ConfigError::MinWidth(min_width));
        }
        if !positive(min_height) {
            return Err(ConfigError::MinHeight(min_height));
        }
        Ok(Self {
            min_width,
            min_height,
            hit_threshold: DEFAULT_HIT_THRESHOLD,
        })
    }

    /// Configuration of the column chooser panel.
    pub fn column_chooser() -> Self {
        Self {
            min_width: Self::CHOOSER_MIN_WIDTH,
            min_height: Self::CHOOSER_MIN_HEIGHT,
            hit_threshold: DEFAULT_HIT_THRESHOLD,
        }
    }

    pub fn with_hit_threshold(self, hit_threshold: f32) -> Result<Self> {
        if !positive(hit_threshold) {
            return Err(ConfigError::HitThreshold(hit_threshold));
        }
        Ok(Self { hit_threshold, ..self })
    }

    /// Re-checks a configuration that came from deserialization.
    pub fn validated(self) -> Result<Self> {
        Self::new(self.min_width, self.min_height)?.with_hit_threshold(self.hit_threshold)
    }

    pub fn min_width(&self) -> f32 {
        self.min_width
    }

    pub fn min_height(&self) -> f32 {
        self.min_height
    }

    pub fn hit_threshold(&self) -> f32 {
        self.hit_threshold
    }

    /// Grows `rect` to the configured minimum size.
    pub fn settle(&self, rect: Rectangle) -> Rectangle {
        rect.at_least(self.min_width, self.min_height)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_rejects_non_positive_minimums() {
        assert_eq!(PanelConfig::new(0.0, 10.0), Err(ConfigError::MinWidth(0.0)));
        assert_eq!(PanelConfig::new(10.0, -1.0), Err(ConfigError::MinHeight(-1.0)));
        assert!(PanelConfig::new(f32::NAN, 10.0).is_err());
        assert!(PanelConfig::new(f32::INFINITY, 10.0).is_err());
    }

    #[test]
    fn test_hit_threshold_validation() {
        let config = PanelConfig::new(100.0, 100.0).unwrap();
        assert_eq!(config.hit_threshold(), DEFAULT_HIT_THRESHOLD);
        assert_eq!(config.with_hit_threshold(0.0), Err(ConfigError::HitThreshold(0.0)));
        assert_eq!(config.with_hit_threshold(8.0).unwrap().hit_threshold(), 8.0);
    }

    #[test]
    fn test_validated_catches_bad_deserialized_values() {
        let json = r#"{"min_width": -5.0, "min_height": 100.0, "hit_threshold": 6.0}"#;
        let config: PanelConfig = serde_json::from_str(json).unwrap();
        assert_eq!(config.validated(), Err(ConfigError::MinWidth(-5.0)));
    }

    #[test]
    fn test_settle_grows_to_minimum() {
        let config = PanelConfig::column_chooser();
        let settled = config.settle(Rectangle::new(10.0, 20.0, 300.0, 500.0));
        assert_eq!(settled, Rectangle::new(10.0, 20.0, 444.0, 500.0));
    }
}
