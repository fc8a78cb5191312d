//! file: manager.rs
//! author: Jacob Xie
//! date: 2026/10/18 15:02:17 Sunday
//! brief: owns the round and applies state effects

use std::time::Duration;

use rand::{SeedableRng, rngs::StdRng};
use tracing::{debug, info};

use super::machine::{self, Effect};
use super::{
    BlockNode, BlockTemplate, GameState, JumpStep, PlayerController, PlayerEvent, Road, Vec3,
};
use crate::config::GameConfig;

/// Work that must wait until the current input dispatch has finished.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DeferredTask {
    ArmInput,
}

pub struct GameManager {
    road_length: usize,
    block_template: Option<BlockTemplate>,
    player: Option<PlayerController>,
    start_menu_visible: Option<bool>,
    steps_label: Option<String>,
    camera_x: f32,
    road: Road,
    blocks: Vec<BlockNode>,
    state: GameState,
    deferred: Vec<DeferredTask>,
    rng: StdRng,
}

impl GameManager {
    /// Builds the manager and enters `Init`, like the host's startup callback.
    pub fn new(config: &GameConfig) -> Self {
        let rng = match config.seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_entropy(),
        };
        let mut manager = Self {
            road_length: config.road_length,
            block_template: config.block,
            player: config.player.map(PlayerController::new),
            start_menu_visible: config.start_menu.then_some(false),
            steps_label: config.steps_label.then(String::new),
            camera_x: 0.0,
            road: Road::default(),
            blocks: Vec::new(),
            state: GameState::Init,
            deferred: Vec::new(),
            rng,
        };
        manager.set_state(GameState::Init);
        manager
    }

    pub fn state(&self) -> GameState {
        self.state
    }

    pub fn road(&self) -> &Road {
        &self.road
    }

    pub fn road_length(&self) -> usize {
        self.road_length
    }

    pub fn blocks(&self) -> &[BlockNode] {
        &self.blocks
    }

    pub fn player(&self) -> Option<&PlayerController> {
        self.player.as_ref()
    }

    pub fn start_menu_visible(&self) -> Option<bool> {
        self.start_menu_visible
    }

    pub fn steps_label(&self) -> Option<&str> {
        self.steps_label.as_deref()
    }

    pub fn camera_x(&self) -> f32 {
        self.camera_x
    }

    pub fn has_deferred(&self) -> bool {
        !self.deferred.is_empty()
    }

    pub fn set_state(&mut self, new_state: GameState) {
        let (state, effects) = machine::enter(new_state);
        info!(from = ?self.state, to = ?state, "state_changed");
        self.state = state;
        for effect in effects {
            self.apply(effect);
        }
    }

    fn apply(&mut self, effect: Effect) {
        match effect {
            Effect::ShowStartMenu(visible) => {
                if let Some(menu) = self.start_menu_visible.as_mut() {
                    *menu = visible;
                }
            }
            Effect::GenerateRoad => self.generate_road(),
            Effect::SetInputActive(active) => {
                if let Some(player) = self.player.as_mut() {
                    player.set_input_active(active);
                }
            }
            Effect::ResetPlayerPosition => {
                if let Some(player) = self.player.as_mut() {
                    player.set_position(Vec3::ZERO);
                }
            }
            Effect::ResetPlayerSteps => {
                if let Some(player) = self.player.as_mut() {
                    player.reset();
                }
            }
            Effect::ResetCamera => self.camera_x = 0.0,
            Effect::SetStepsLabel(text) => self.set_steps_label(text),
            Effect::ArmInputDeferred => self.deferred.push(DeferredTask::ArmInput),
        }
    }

    /// Runs the tasks queued during the last dispatch cycle.
    pub fn run_deferred(&mut self) {
        for task in std::mem::take(&mut self.deferred) {
            match task {
                DeferredTask::ArmInput => {
                    // A restart may have happened since this was queued.
                    if self.state != GameState::Playing {
                        continue;
                    }
                    if let Some(player) = self.player.as_mut() {
                        player.set_input_active(true);
                        debug!("input_armed");
                    }
                }
            }
        }
    }

    pub fn generate_road(&mut self) {
        self.blocks.clear();
        self.road = Road::generate(self.road_length, &mut self.rng);
        self.blocks = self.road.spawn_blocks(self.block_template.as_ref());
        info!(
            length = self.road.len(),
            gaps = self.road.gap_count(),
            blocks = self.blocks.len(),
            "road_generated"
        );
    }

    pub fn on_start_button_clicked(&mut self) {
        self.set_state(GameState::Playing);
    }

    pub fn jump(&mut self, step: JumpStep) -> bool {
        if self.state != GameState::Playing {
            return false;
        }
        self.player
            .as_mut()
            .is_some_and(|player| player.jump_by_step(step))
    }

    /// Advances the player by one frame and consumes the event it emits.
    pub fn tick(&mut self, dt: Duration) {
        let Some(player) = self.player.as_mut() else {
            return;
        };
        let event = player.tick(dt);
        self.camera_x = player.position().x;
        if let Some(PlayerEvent::JumpEnd { move_index }) = event {
            self.on_player_jump_end(move_index);
        }
    }

    pub fn on_player_jump_end(&mut self, move_index: usize) {
        debug!(move_index, "jump_end");
        self.check_result(move_index);
    }

    pub fn check_result(&mut self, landed_index: usize) {
        self.set_steps_label(landed_index.to_string());
        if let Some(next) = machine::check_result(&self.road, self.road_length, landed_index) {
            info!(
                landed_index,
                road_length = self.road_length,
                "result_lost"
            );
            self.set_state(next);
        }
    }

    fn set_steps_label(&mut self, text: String) {
        if let Some(label) = self.steps_label.as_mut() {
            *label = text;
        }
    }

    #[cfg(test)]
    pub(crate) fn replace_road(&mut self, road: Road) {
        self.road_length = road.len();
        self.blocks = road.spawn_blocks(self.block_template.as_ref());
        self.road = road;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::game::BlockType::{Gap, Solid};

    fn config() -> GameConfig {
        GameConfig {
            road_length: 5,
            seed: Some(3),
            ..GameConfig::default()
        }
    }

    fn playing_manager() -> GameManager {
        let mut manager = GameManager::new(&config());
        manager.replace_road(Road::from_cells(vec![Solid, Solid, Gap, Solid, Solid]));
        manager.on_start_button_clicked();
        manager.run_deferred();
        manager
    }

    fn land(manager: &mut GameManager) {
        manager.tick(Duration::from_secs(1));
    }

    #[test]
    fn startup_enters_init() {
        let manager = GameManager::new(&config());
        assert_eq!(manager.state(), GameState::Init);
        assert_eq!(manager.start_menu_visible(), Some(true));
        assert_eq!(manager.road().len(), 5);
        assert_eq!(manager.road().cell_at(0), Some(Solid));
        let player = manager.player().expect("player");
        assert!(!player.input_active());
        assert_eq!(player.position(), Vec3::ZERO);
    }

    #[test]
    fn entering_playing_hides_menu_and_zeroes_steps() {
        let mut manager = GameManager::new(&config());
        manager.check_result(0);
        assert_eq!(manager.steps_label(), Some("0"));
        manager.set_steps_label("7".into());

        manager.on_start_button_clicked();
        assert_eq!(manager.state(), GameState::Playing);
        assert_eq!(manager.start_menu_visible(), Some(false));
        assert_eq!(manager.steps_label(), Some("0"));
    }

    #[test]
    fn input_is_armed_only_after_deferred_tasks_run() {
        let mut manager = GameManager::new(&config());
        manager.on_start_button_clicked();
        assert!(!manager.player().expect("player").input_active());
        assert!(!manager.jump(JumpStep::One));
        assert!(manager.has_deferred());

        manager.run_deferred();
        assert!(manager.player().expect("player").input_active());
        assert!(!manager.has_deferred());
    }

    #[test]
    fn stale_arm_is_dropped_after_restart() {
        let mut manager = GameManager::new(&config());
        manager.on_start_button_clicked();
        manager.set_state(GameState::Init);
        manager.run_deferred();
        assert!(!manager.player().expect("player").input_active());
    }

    #[test]
    fn landing_on_solid_keeps_playing() {
        let mut manager = playing_manager();
        assert!(manager.jump(JumpStep::One));
        land(&mut manager);
        assert_eq!(manager.state(), GameState::Playing);
        assert_eq!(manager.steps_label(), Some("1"));
    }

    #[test]
    fn landing_in_gap_restarts() {
        let mut manager = playing_manager();
        manager.jump(JumpStep::Two);
        land(&mut manager);
        assert_eq!(manager.state(), GameState::Init);
        assert_eq!(manager.steps_label(), Some("2"));
        assert_eq!(manager.start_menu_visible(), Some(true));
        let player = manager.player().expect("player");
        assert_eq!(player.move_index(), 0);
        assert_eq!(player.position(), Vec3::ZERO);
        assert!(!player.input_active());
    }

    #[test]
    fn check_result_matches_sample_track() {
        let mut manager = playing_manager();
        manager.check_result(1);
        assert_eq!(manager.state(), GameState::Playing);
        manager.check_result(6);
        assert_eq!(manager.state(), GameState::Init);

        let mut manager = playing_manager();
        manager.check_result(2);
        assert_eq!(manager.state(), GameState::Init);
    }

    #[test]
    fn regenerating_replaces_blocks_and_cells() {
        let mut manager = GameManager::new(&GameConfig {
            road_length: 40,
            seed: Some(11),
            ..GameConfig::default()
        });
        manager.generate_road();
        let first = manager.road().clone();
        manager.generate_road();

        assert_eq!(manager.road().len(), 40);
        let solid = manager
            .road()
            .cells()
            .iter()
            .filter(|cell| !cell.is_gap())
            .count();
        assert_eq!(manager.blocks().len(), solid);
        assert!(
            manager
                .blocks()
                .iter()
                .all(|block| manager.road().cell_at(block.index) == Some(Solid))
        );
        assert_ne!(&first, manager.road());
    }

    #[test]
    fn missing_collaborators_are_skipped() {
        let mut manager = GameManager::new(&GameConfig {
            road_length: 6,
            block: None,
            player: None,
            start_menu: false,
            steps_label: false,
            ..GameConfig::default()
        });
        assert_eq!(manager.road().len(), 6);
        assert!(manager.blocks().is_empty());

        manager.on_start_button_clicked();
        manager.run_deferred();
        assert!(!manager.jump(JumpStep::One));
        manager.tick(Duration::from_millis(16));
        assert_eq!(manager.start_menu_visible(), None);
        assert_eq!(manager.steps_label(), None);
        assert_eq!(manager.state(), GameState::Playing);
    }

    #[test]
    fn end_is_terminal() {
        let mut manager = playing_manager();
        manager.set_state(GameState::End);
        assert_eq!(manager.state(), GameState::End);
        assert!(!manager.jump(JumpStep::One));
        assert_eq!(manager.start_menu_visible(), Some(false));
    }
}
