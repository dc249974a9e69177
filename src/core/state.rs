//! Whole-game state and the per-frame update.
use log::{debug, info};
use thiserror::Error;

use crate::config::GameConfig;
use crate::core::enemy::Enemy;
use crate::core::grid::Grid;
use crate::core::input::{FrameInput, HeldActions, InputEvent};
use crate::core::player::Player;
use crate::render::casters::cast_ray;

#[derive(Debug, Error)]
pub enum StateError {
    #[error("player start ({x}, {y}) is inside a wall")]
    BlockedStart { x: f32, y: f32 },
}

#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum ViewMode {
    FirstPerson,
    Map,
}

#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum ShotOutcome {
    /// Paused, dead or out of ammo: nothing happened.
    Ignored,
    Miss,
    Hit,
    Kill,
}

pub struct GameState {
    pub grid: Grid,
    pub player: Player,
    pub enemies: Vec<Enemy>,
    pub config: GameConfig,
    pub paused: bool,
    pub game_over: bool,
    pub view: ViewMode,
    flash_timer: f32,
}

impl GameState {
    pub fn new(grid: Grid, config: GameConfig) -> Result<Self, StateError> {
        let player = Player::from_config(&config.player);
        if grid.is_wall(player.x, player.y) {
            return Err(StateError::BlockedStart { x: player.x, y: player.y });
        }
        let enemies = config.enemies.spawns.iter().map(Enemy::from_spawn).collect();
        Ok(Self {
            grid,
            player,
            enemies,
            config,
            paused: false,
            game_over: false,
            view: ViewMode::FirstPerson,
            flash_timer: 0.0,
        })
    }

    /// Sample map, stock settings.
    pub fn sample() -> Self {
        let config = GameConfig::default();
        let player = Player::from_config(&config.player);
        let enemies = config.enemies.spawns.iter().map(Enemy::from_spawn).collect();
        Self {
            grid: Grid::sample(),
            player,
            enemies,
            config,
            paused: false,
            game_over: false,
            view: ViewMode::FirstPerson,
            flash_timer: 0.0,
        }
    }

    /// Distance from the player to the first wall along `angle`, capped at
    /// `max_depth`.
    pub fn cast_ray(&self, angle: f32) -> f32 {
        let rc = &self.config.raycast;
        cast_ray(&self.grid, self.player.x, self.player.y, angle, rc.step_size, rc.max_depth)
    }

    pub fn is_frozen(&self) -> bool {
        self.paused || self.game_over
    }

    pub fn is_shooting(&self) -> bool {
        self.flash_timer > 0.0
    }

    /// One frame of simulation: triggers, then held movement, then timers.
    pub fn step(&mut self, input: &FrameInput) {
        for event in &input.events {
            match event {
                InputEvent::Fire => {
                    self.shoot();
                }
                InputEvent::Pause => self.toggle_pause(),
                InputEvent::Use => self.use_action(),
                InputEvent::ToggleMap => self.toggle_view(),
            }
        }
        self.handle_input(&input.held);
        self.flash_timer = (self.flash_timer - input.dt).max(0.0);
    }

    pub fn handle_input(&mut self, held: &HeldActions) {
        if self.is_frozen() {
            return;
        }
        if held.forward && !self.player.try_move(&self.grid, 1.0) {
            debug!("forward move blocked at ({:.2}, {:.2})", self.player.x, self.player.y);
        }
        if held.back && !self.player.try_move(&self.grid, -1.0) {
            debug!("backward move blocked at ({:.2}, {:.2})", self.player.x, self.player.y);
        }
        if held.turn_left {
            self.player.rotate(-1.0);
        }
        if held.turn_right {
            self.player.rotate(1.0);
        }
        self.apply_contact_damage();
    }

    fn apply_contact_damage(&mut self) {
        let radius = self.config.enemies.contact_radius;
        let damage = self.config.enemies.contact_damage;
        let touching = self
            .enemies
            .iter()
            .filter(|e| e.distance_to(self.player.x, self.player.y) < radius)
            .count();
        for _ in 0..touching {
            self.take_damage(damage);
        }
    }

    pub fn take_damage(&mut self, amount: i32) {
        self.player.take_damage(amount);
        if self.player.is_dead() && !self.game_over {
            info!("player died with {} kills", self.player.kills);
            self.game_over = true;
        }
    }

    /// Hit-scan along the view centre: the nearest enemy inside the cone
    /// and range takes the hit. Walls do not block shots.
    pub fn shoot(&mut self) -> ShotOutcome {
        if self.is_frozen() || self.player.ammo == 0 {
            return ShotOutcome::Ignored;
        }
        self.player.ammo -= 1;
        self.flash_timer = self.config.weapon.flash_secs;

        let weapon = &self.config.weapon;
        let (px, py, heading) = (self.player.x, self.player.y, self.player.angle);
        let target = self
            .enemies
            .iter()
            .enumerate()
            .map(|(i, e)| (i, e.distance_to(px, py)))
            .filter(|&(i, dist)| {
                dist < weapon.range
                    && self.enemies[i].relative_bearing(px, py, heading).abs() < weapon.cone
            })
            .min_by(|a, b| a.1.total_cmp(&b.1))
            .map(|(i, _)| i);
        let Some(idx) = target else {
            return ShotOutcome::Miss;
        };
        if self.enemies[idx].apply_hit(weapon.damage) {
            self.enemies.remove(idx);
            self.player.kills += 1;
            info!("enemy down, {} left, kills = {}", self.enemies.len(), self.player.kills);
            ShotOutcome::Kill
        } else {
            ShotOutcome::Hit
        }
    }

    pub fn toggle_pause(&mut self) {
        self.paused = !self.paused;
        debug!("paused = {}", self.paused);
    }

    /// Doors and switches would hook in here; the arena has none.
    pub fn use_action(&mut self) {
        debug!("use at ({:.2}, {:.2}): nothing to interact with", self.player.x, self.player.y);
    }

    pub fn toggle_view(&mut self) {
        self.view = match self.view {
            ViewMode::FirstPerson => ViewMode::Map,
            ViewMode::Map => ViewMode::FirstPerson,
        };
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::PlayerConfig;

    fn aim_at(state: &mut GameState, idx: usize) {
        let e = &state.enemies[idx];
        state.player.angle = (e.y - state.player.y).atan2(e.x - state.player.x);
    }

    #[test]
    fn blocked_start_is_rejected() {
        let config = GameConfig {
            player: PlayerConfig { start_x: 4.5, start_y: 4.5, ..Default::default() },
            ..Default::default()
        };
        assert!(matches!(GameState::new(Grid::sample(), config), Err(StateError::BlockedStart { .. })));
    }

    #[test]
    fn three_hits_remove_enemy_and_count_kill() {
        let mut state = GameState::sample();
        aim_at(&mut state, 0);
        assert_eq!(state.shoot(), ShotOutcome::Hit);
        assert_eq!(state.shoot(), ShotOutcome::Hit);
        assert_eq!(state.enemies[0].health, 100 - 68);
        assert_eq!(state.shoot(), ShotOutcome::Kill);
        assert_eq!(state.enemies.len(), 2);
        assert_eq!(state.player.kills, 1);
        assert_eq!(state.player.ammo, 47);
    }

    #[test]
    fn nearest_enemy_in_cone_takes_the_hit() {
        let mut state = GameState::sample();
        state.enemies = vec![Enemy::new(3.5, 1.5, 0.0), Enemy::new(7.5, 1.5, 0.0)];
        state.player.angle = 0.0;
        assert_eq!(state.shoot(), ShotOutcome::Hit);
        assert_eq!(state.enemies[0].health, 66);
        assert_eq!(state.enemies[1].health, 100);
    }

    #[test]
    fn held_input_is_ignored_while_paused() {
        let mut state = GameState::sample();
        state.toggle_pause();
        let held = HeldActions { forward: true, turn_left: true, ..Default::default() };
        state.handle_input(&held);
        assert_eq!((state.player.x, state.player.y, state.player.angle), (1.5, 1.5, 0.0));
        state.toggle_pause();
        state.handle_input(&held);
        assert!(state.player.x > 1.5);
    }

    #[test]
    fn out_of_range_enemy_is_missed() {
        let mut state = GameState::sample();
        // (8, 8) is ~9.2 units away
        aim_at(&mut state, 2);
        assert_eq!(state.shoot(), ShotOutcome::Miss);
        assert_eq!(state.enemies[2].health, 100);
    }

    #[test]
    fn shooting_while_paused_is_ignored() {
        let mut state = GameState::sample();
        state.toggle_pause();
        assert_eq!(state.shoot(), ShotOutcome::Ignored);
        assert_eq!(state.player.ammo, 50);
    }

    #[test]
    fn flash_timer_runs_down_with_frame_time() {
        let mut state = GameState::sample();
        state.player.angle = std::f32::consts::PI;
        state.step(&FrameInput { events: vec![InputEvent::Fire], dt: 0.1, ..Default::default() });
        assert!(state.is_shooting());
        state.step(&FrameInput { dt: 0.1, ..Default::default() });
        assert!(!state.is_shooting());
    }

    #[test]
    fn contact_damage_applies_per_frame() {
        let mut state = GameState::sample();
        state.enemies.push(Enemy::new(1.7, 1.5, 0.0));
        state.handle_input(&HeldActions::default());
        state.handle_input(&HeldActions::default());
        assert_eq!(state.player.health, 98);
    }

    #[test]
    fn dying_ends_the_game_and_freezes_movement() {
        let mut state = GameState::sample();
        state.take_damage(100);
        assert!(state.game_over);
        let before = (state.player.x, state.player.y);
        state.handle_input(&HeldActions { forward: true, ..Default::default() });
        assert_eq!((state.player.x, state.player.y), before);
    }

    #[test]
    fn events_toggle_pause_and_view() {
        let mut state = GameState::sample();
        state.step(&FrameInput {
            events: vec![InputEvent::Pause, InputEvent::ToggleMap, InputEvent::Use],
            ..Default::default()
        });
        assert!(state.paused);
        assert_eq!(state.view, ViewMode::Map);
    }
}
