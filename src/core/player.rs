use crate::config::PlayerConfig;
use crate::core::grid::Grid;

pub struct Player {
    pub x: f32,
    pub y: f32,
    pub angle: f32,          // heading (radians, 0 = +x)
    pub speed: f32,          // grid units per frame
    pub rotation_speed: f32, // radians per frame
    pub health: i32,
    pub armor: i32,
    pub ammo: u32,
    pub kills: u32,
}

impl Player {
    pub fn new(x: f32, y: f32, angle: f32) -> Self {
        Self::from_config(&PlayerConfig { start_x: x, start_y: y, start_angle: angle, ..PlayerConfig::default() })
    }

    pub fn from_config(cfg: &PlayerConfig) -> Self {
        Self {
            x: cfg.start_x,
            y: cfg.start_y,
            angle: cfg.start_angle,
            speed: cfg.speed,
            rotation_speed: cfg.rotation_speed,
            health: cfg.health,
            armor: cfg.armor,
            ammo: cfg.ammo,
            kills: 0,
        }
    }

    #[inline]
    pub fn forward(&self) -> (f32, f32) {
        (self.angle.cos() * self.speed, self.angle.sin() * self.speed)
    }

    /// Move along the heading (`dir` = 1 forward, -1 back). The whole step
    /// is rejected if it would end inside a wall; there is no sliding.
    pub fn try_move(&mut self, grid: &Grid, dir: f32) -> bool {
        let (mx, my) = self.forward();
        let nx = self.x + mx * dir;
        let ny = self.y + my * dir;
        if grid.is_wall(nx, ny) {
            return false;
        }
        self.x = nx;
        self.y = ny;
        true
    }

    /// `dir` = -1 turns left, 1 turns right.
    #[inline]
    pub fn rotate(&mut self, dir: f32) {
        self.angle += self.rotation_speed * dir;
    }

    /// Armor soaks damage first. Returns true when this hit was fatal.
    pub fn take_damage(&mut self, mut amount: i32) -> bool {
        if self.armor > 0 {
            let absorbed = self.armor.min(amount);
            self.armor -= absorbed;
            amount -= absorbed;
        }
        self.health -= amount;
        if self.health <= 0 {
            self.health = 0;
            return true;
        }
        false
    }

    pub fn is_dead(&self) -> bool {
        self.health <= 0
    }
}
