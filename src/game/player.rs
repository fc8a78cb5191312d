//! file: player.rs
//! author: Jacob Xie
//! date: 2026/10/18 14:34:51 Sunday
//! brief: player controller

use std::time::Duration;

use serde::{Deserialize, Serialize};

use super::{JumpStep, Vec3};

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PlayerConfig {
    pub jump_time_ms: u64,
    pub jump_height: f32,
}

impl Default for PlayerConfig {
    fn default() -> Self {
        Self {
            jump_time_ms: 100,
            jump_height: 0.5,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PlayerEvent {
    JumpEnd { move_index: usize },
}

#[derive(Debug, Clone, Copy)]
struct Jump {
    from: Vec3,
    to: Vec3,
    step: JumpStep,
    elapsed: Duration,
}

pub struct PlayerController {
    config: PlayerConfig,
    input_active: bool,
    position: Vec3,
    move_index: usize,
    jump: Option<Jump>,
}

impl PlayerController {
    pub fn new(config: PlayerConfig) -> Self {
        Self {
            config,
            input_active: false,
            position: Vec3::ZERO,
            move_index: 0,
            jump: None,
        }
    }

    pub fn set_input_active(&mut self, active: bool) {
        self.input_active = active;
    }

    pub fn input_active(&self) -> bool {
        self.input_active
    }

    pub fn position(&self) -> Vec3 {
        self.position
    }

    pub fn set_position(&mut self, position: Vec3) {
        self.position = position;
    }

    pub fn move_index(&self) -> usize {
        self.move_index
    }

    pub fn is_jumping(&self) -> bool {
        self.jump.is_some()
    }

    /// Forgets every step taken so far, including a jump still in the air.
    pub fn reset(&mut self) {
        self.move_index = 0;
        self.jump = None;
    }

    /// Returns whether the jump was accepted.
    pub fn jump_by_step(&mut self, step: JumpStep) -> bool {
        if !self.input_active || self.jump.is_some() {
            return false;
        }
        let from = self.position;
        self.jump = Some(Jump {
            from,
            to: from.offset(step),
            step,
            elapsed: Duration::ZERO,
        });
        true
    }

    pub fn tick(&mut self, dt: Duration) -> Option<PlayerEvent> {
        let jump = self.jump.as_mut()?;
        let total = self.config.jump_time().max(Duration::from_millis(1));
        jump.elapsed = jump.elapsed.saturating_add(dt);

        if jump.elapsed >= total {
            let landed = *jump;
            self.jump = None;
            self.position = landed.to;
            self.move_index += landed.step.distance();
            return Some(PlayerEvent::JumpEnd {
                move_index: self.move_index,
            });
        }

        let t = jump.elapsed.as_secs_f32() / total.as_secs_f32();
        let mut position = jump.from.lerp(jump.to, t);
        position.y += (t * std::f32::consts::PI).sin() * self.config.jump_height;
        self.position = position;
        None
    }
}

impl PlayerConfig {
    pub fn jump_time(&self) -> Duration {
        Duration::from_millis(self.jump_time_ms)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn active_player() -> PlayerController {
        let mut player = PlayerController::new(PlayerConfig::default());
        player.set_input_active(true);
        player
    }

    fn land(player: &mut PlayerController) -> Option<PlayerEvent> {
        player.tick(Duration::from_millis(1_000))
    }

    #[test]
    fn inactive_player_ignores_jumps() {
        let mut player = PlayerController::new(PlayerConfig::default());
        assert!(!player.jump_by_step(JumpStep::One));
        assert_eq!(land(&mut player), None);
        assert_eq!(player.move_index(), 0);
    }

    #[test]
    fn jump_end_reports_accumulated_index() {
        let mut player = active_player();
        assert!(player.jump_by_step(JumpStep::One));
        assert_eq!(land(&mut player), Some(PlayerEvent::JumpEnd { move_index: 1 }));
        assert!(player.jump_by_step(JumpStep::Two));
        assert_eq!(land(&mut player), Some(PlayerEvent::JumpEnd { move_index: 3 }));
        assert_eq!(player.position(), Vec3::new(3.0, 0.0, 0.0));
    }

    #[test]
    fn no_second_jump_mid_air() {
        let mut player = active_player();
        assert!(player.jump_by_step(JumpStep::Two));
        assert!(!player.jump_by_step(JumpStep::One));

        assert_eq!(player.tick(Duration::from_millis(50)), None);
        let mid = player.position();
        assert!(mid.x > 0.0 && mid.x < 2.0);
        assert!(mid.y > 0.0);

        assert_eq!(
            player.tick(Duration::from_millis(50)),
            Some(PlayerEvent::JumpEnd { move_index: 2 })
        );
    }

    #[test]
    fn reset_cancels_jump_and_steps() {
        let mut player = active_player();
        player.jump_by_step(JumpStep::One);
        land(&mut player);
        player.jump_by_step(JumpStep::One);
        player.reset();

        assert!(!player.is_jumping());
        assert_eq!(player.move_index(), 0);
        assert_eq!(player.tick(Duration::from_millis(16)), None);
    }
}
