use serde::{Deserialize, Serialize};

use crate::collision::DEFAULT_SEED;
use crate::core::{PhysicsError, Result};

/// Rectangle that bodies with `collide_world_bounds` are kept inside
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct Bounds {
    pub x: f32,
    pub y: f32,
    pub width: f32,
    pub height: f32,
}

impl Bounds {
    pub fn new(x: f32, y: f32, width: f32, height: f32) -> Result<Self> {
        let bounds = Self { x, y, width, height };
        bounds.validate()?;
        Ok(bounds)
    }

    #[inline]
    pub fn right(&self) -> f32 {
        self.x + self.width
    }

    #[inline]
    pub fn bottom(&self) -> f32 {
        self.y + self.height
    }

    fn validate(&self) -> Result<()> {
        let origin_ok = self.x.is_finite() && self.y.is_finite();
        let size_ok = self.width.is_finite() && self.height.is_finite() && self.width > 0.0 && self.height > 0.0;
        if origin_ok && size_ok {
            Ok(())
        } else {
            Err(PhysicsError::InvalidConfig(format!(
                "bounds must be finite with positive size, got {}x{} at ({}, {})",
                self.width, self.height, self.x, self.y
            )))
        }
    }
}

/// World settings, loadable from JSON (camelCase keys, every field optional).
///
/// ```
/// use verf_physics::simulation::WorldConfig;
///
/// let cfg = WorldConfig::from_json(r#"{ "gravityY": 600, "bounds": { "x": 0, "y": 0, "width": 320, "height": 180 } }"#).unwrap();
/// assert_eq!(cfg.gravity_y, 600.0);
/// assert_eq!(cfg.world_bounds_restitution, 1.0);
/// ```
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct WorldConfig {
    pub gravity_x: f32,
    pub gravity_y: f32,
    pub world_bounds_restitution: f32,
    pub bounds: Option<Bounds>,
    pub seed: u32,
    pub step_stats: bool,
}

impl Default for WorldConfig {
    fn default() -> Self {
        Self {
            gravity_x: 0.0,
            gravity_y: 0.0,
            world_bounds_restitution: 1.0,
            bounds: None,
            seed: DEFAULT_SEED,
            step_stats: false,
        }
    }
}

impl WorldConfig {
    pub fn from_json(json: &str) -> Result<Self> {
        let cfg: WorldConfig = serde_json::from_str(json)?;
        cfg.validate()?;
        Ok(cfg)
    }

    pub fn validate(&self) -> Result<()> {
        if !self.gravity_x.is_finite() || !self.gravity_y.is_finite() {
            return Err(PhysicsError::InvalidConfig("gravity must be finite".to_string()));
        }
        if !(0.0..=1.0).contains(&self.world_bounds_restitution) {
            return Err(PhysicsError::InvalidConfig(format!(
                "worldBoundsRestitution must be within [0, 1], got {}",
                self.world_bounds_restitution
            )));
        }
        if let Some(bounds) = &self.bounds {
            bounds.validate()?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_object_gives_defaults() {
        let cfg = WorldConfig::from_json("{}").unwrap();
        assert_eq!(cfg, WorldConfig::default());
    }

    #[test]
    fn parses_every_field() {
        let cfg = WorldConfig::from_json(
            r#"{
                "gravityX": -10,
                "gravityY": 980,
                "worldBoundsRestitution": 0.5,
                "bounds": { "x": 0, "y": 0, "width": 320, "height": 180 },
                "seed": 99,
                "stepStats": true
            }"#,
        )
        .unwrap();
        assert_eq!(cfg.gravity_x, -10.0);
        assert_eq!(cfg.gravity_y, 980.0);
        assert_eq!(cfg.world_bounds_restitution, 0.5);
        assert_eq!(cfg.bounds, Some(Bounds { x: 0.0, y: 0.0, width: 320.0, height: 180.0 }));
        assert_eq!(cfg.seed, 99);
        assert!(cfg.step_stats);
    }

    #[test]
    fn rejects_out_of_range_values() {
        assert!(matches!(
            WorldConfig::from_json(r#"{ "worldBoundsRestitution": 1.5 }"#),
            Err(PhysicsError::InvalidConfig(_))
        ));
        assert!(matches!(
            WorldConfig::from_json(r#"{ "bounds": { "x": 0, "y": 0, "width": 0, "height": 10 } }"#),
            Err(PhysicsError::InvalidConfig(_))
        ));
        assert!(matches!(
            WorldConfig::from_json(r#"{ "gravityY": "down" }"#),
            Err(PhysicsError::ConfigParse(_))
        ));
    }
}
