//! Game configuration loaded from RON.
//!
//! Every field has a default, so a partial file (or no file at all) yields
//! the stock game: 60° view, 120 columns, 20-unit draw distance.

use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("could not read config {path}: {source}")]
    Io {
        path: String,
        #[source]
        source: std::io::Error,
    },
    #[error("config parse error: {0}")]
    Parse(#[from] ron::error::SpannedError),
    #[error("invalid config: {0}")]
    Invalid(String),
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct GameConfig {
    pub screen_width: u32,
    pub screen_height: u32,
    pub raycast: RaycastConfig,
    pub player: PlayerConfig,
    pub weapon: WeaponConfig,
    pub enemies: EnemyConfig,
    pub touch: TouchConfig,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            screen_width: 800,
            screen_height: 600,
            raycast: RaycastConfig::default(),
            player: PlayerConfig::default(),
            weapon: WeaponConfig::default(),
            enemies: EnemyConfig::default(),
            touch: TouchConfig::default(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct RaycastConfig {
    /// Horizontal field of view in radians.
    pub fov: f32,
    pub num_rays: usize,
    pub max_depth: f32,
    pub step_size: f32,
}

impl Default for RaycastConfig {
    fn default() -> Self {
        Self {
            fov: std::f32::consts::FRAC_PI_3,
            num_rays: 120,
            max_depth: 20.0,
            step_size: 0.1,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PlayerConfig {
    pub start_x: f32,
    pub start_y: f32,
    pub start_angle: f32,
    /// Grid units per frame.
    pub speed: f32,
    /// Radians per frame.
    pub rotation_speed: f32,
    pub health: i32,
    pub armor: i32,
    pub ammo: u32,
}

impl Default for PlayerConfig {
    fn default() -> Self {
        Self {
            start_x: 1.5,
            start_y: 1.5,
            start_angle: 0.0,
            speed: 0.05,
            rotation_speed: 0.05,
            health: 100,
            armor: 0,
            ammo: 50,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct WeaponConfig {
    pub damage: i32,
    /// Half-width of the hit cone in radians (about 5°).
    pub cone: f32,
    pub range: f32,
    pub flash_secs: f32,
}

impl Default for WeaponConfig {
    fn default() -> Self {
        Self {
            damage: 34,
            cone: 0.09,
            range: 8.0,
            flash_secs: 0.15,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EnemySpawn {
    pub x: f32,
    pub y: f32,
    pub angle: f32,
    pub health: i32,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct EnemyConfig {
    pub spawns: Vec<EnemySpawn>,
    pub contact_radius: f32,
    /// Damage dealt per frame while an enemy touches the player.
    pub contact_damage: i32,
}

impl Default for EnemyConfig {
    fn default() -> Self {
        use std::f32::consts::{FRAC_PI_2, PI};
        let spawn = |x, y, angle| EnemySpawn { x, y, angle, health: 100 };
        Self {
            spawns: vec![spawn(7.0, 2.0, 0.0), spawn(3.0, 7.0, PI), spawn(8.0, 8.0, FRAC_PI_2)],
            contact_radius: 0.5,
            contact_damage: 1,
        }
    }
}

/// On-screen button rectangles `[x, y, w, h]` in window pixels.
/// A `None` entry means the control does not exist and is never bound.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct TouchConfig {
    pub forward: Option<[f32; 4]>,
    pub back: Option<[f32; 4]>,
    pub left: Option<[f32; 4]>,
    pub right: Option<[f32; 4]>,
    pub fire: Option<[f32; 4]>,
    pub action: Option<[f32; 4]>,
}

/// Largest window side accepted; keeps `width * height` inside `u32`.
pub const MAX_SCREEN_SIDE: u32 = 8192;
/// Upper bound on marching samples per ray (`max_depth / step_size`).
pub const MAX_RAY_STEPS: f32 = 10_000.0;

impl GameConfig {
    pub fn from_ron_str(s: &str) -> Result<Self, ConfigError> {
        let config: GameConfig = ron::from_str(s)?;
        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        let rc = &self.raycast;
        if rc.num_rays == 0 {
            return Err(ConfigError::Invalid("num_rays must be at least 1".into()));
        }
        if !(rc.step_size > 0.0) || !(rc.max_depth > 0.0) {
            return Err(ConfigError::Invalid(format!(
                "step_size ({}) and max_depth ({}) must be positive",
                rc.step_size, rc.max_depth
            )));
        }
        if rc.max_depth / rc.step_size > MAX_RAY_STEPS {
            return Err(ConfigError::Invalid(format!(
                "max_depth / step_size = {} exceeds {} samples per ray",
                rc.max_depth / rc.step_size,
                MAX_RAY_STEPS
            )));
        }
        if !(rc.fov > 0.0 && rc.fov < std::f32::consts::PI) {
            return Err(ConfigError::Invalid(format!("fov {} outside (0, pi)", rc.fov)));
        }
        if self.screen_width == 0 || self.screen_height == 0 {
            return Err(ConfigError::Invalid("screen size must be non-zero".into()));
        }
        if self.screen_width > MAX_SCREEN_SIDE || self.screen_height > MAX_SCREEN_SIDE {
            return Err(ConfigError::Invalid(format!(
                "screen {}x{} exceeds {MAX_SCREEN_SIDE} per side",
                self.screen_width, self.screen_height
            )));
        }
        Ok(())
    }
}

/// Load a config from a RON file
pub fn load_config<P: AsRef<Path>>(path: P) -> Result<GameConfig, ConfigError> {
    let path = path.as_ref();
    let contents = fs::read_to_string(path).map_err(|source| ConfigError::Io {
        path: path.display().to_string(),
        source,
    })?;
    GameConfig::from_ron_str(&contents)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_struct_yields_defaults() {
        let config = GameConfig::from_ron_str("()").unwrap();
        assert_eq!(config, GameConfig::default());
        assert_eq!(config.raycast.num_rays, 120);
        assert_eq!(config.player.ammo, 50);
        assert_eq!(config.enemies.spawns.len(), 3);
    }

    #[test]
    fn partial_override_keeps_other_defaults() {
        let config =
            GameConfig::from_ron_str("(raycast: (num_rays: 64), player: (ammo: 5))").unwrap();
        assert_eq!(config.raycast.num_rays, 64);
        assert_eq!(config.raycast.max_depth, 20.0);
        assert_eq!(config.player.ammo, 5);
        assert_eq!(config.player.speed, 0.05);
    }

    #[test]
    fn touch_controls_are_optional() {
        let config = GameConfig::from_ron_str("(touch: (fire: Some((10.0, 10.0, 40.0, 40.0))))")
            .unwrap();
        assert_eq!(config.touch.fire, Some([10.0, 10.0, 40.0, 40.0]));
        assert!(config.touch.forward.is_none());
    }

    #[test]
    fn rejects_zero_step() {
        let err = GameConfig::from_ron_str("(raycast: (step_size: 0.0))").unwrap_err();
        assert!(matches!(err, ConfigError::Invalid(_)));
    }

    #[test]
    fn rejects_step_too_fine_for_the_depth() {
        let err = GameConfig::from_ron_str("(raycast: (step_size: 0.000000001))").unwrap_err();
        assert!(matches!(err, ConfigError::Invalid(_)));
        assert!(GameConfig::from_ron_str("(raycast: (step_size: 0.01))").is_ok());
    }

    #[test]
    fn rejects_oversized_screen() {
        let mut config = GameConfig { screen_width: 65536, ..Default::default() };
        assert!(matches!(config.validate(), Err(ConfigError::Invalid(_))));
        config.screen_width = MAX_SCREEN_SIDE;
        config.screen_height = MAX_SCREEN_SIDE;
        assert!(config.validate().is_ok());
    }

    #[test]
    fn rejects_malformed_ron() {
        let err = GameConfig::from_ron_str("(raycast: (").unwrap_err();
        assert!(matches!(err, ConfigError::Parse(_)));
    }

    #[test]
    fn missing_file_is_io_error() {
        let err = load_config("/definitely/not/here.ron").unwrap_err();
        assert!(matches!(err, ConfigError::Io { .. }));
    }
}
