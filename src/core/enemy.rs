//! Decorative enemies: they stand still, hurt on contact and die to gunfire.
use crate::config::EnemySpawn;

/// Wrap an angle into [-pi, pi].
#[inline]
pub fn normalize_angle(mut a: f32) -> f32 {
    while a > std::f32::consts::PI {
        a -= 2.0 * std::f32::consts::PI;
    }
    while a < -std::f32::consts::PI {
        a += 2.0 * std::f32::consts::PI;
    }
    a
}

#[derive(Clone, Debug, PartialEq)]
pub struct Enemy {
    pub x: f32,
    pub y: f32,
    pub angle: f32,
    pub health: i32,
}

impl Enemy {
    pub fn new(x: f32, y: f32, angle: f32) -> Self {
        Self { x, y, angle, health: 100 }
    }

    pub fn from_spawn(spawn: &EnemySpawn) -> Self {
        Self { x: spawn.x, y: spawn.y, angle: spawn.angle, health: spawn.health }
    }

    pub fn distance_to(&self, px: f32, py: f32) -> f32 {
        let dx = self.x - px;
        let dy = self.y - py;
        (dx * dx + dy * dy).sqrt()
    }

    /// Angle of this enemy as seen from `(px, py)`, relative to `heading`.
    pub fn relative_bearing(&self, px: f32, py: f32, heading: f32) -> f32 {
        let world = (self.y - py).atan2(self.x - px);
        normalize_angle(world - heading)
    }

    /// Returns true when the hit killed it.
    pub fn apply_hit(&mut self, damage: i32) -> bool {
        self.health -= damage;
        self.health <= 0
    }
}
