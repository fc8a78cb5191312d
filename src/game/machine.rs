//! file: machine.rs
//! author: Jacob Xie
//! date: 2026/10/18 14:20:09 Sunday
//! brief: state transitions and result checking, free of side effects

use super::{GameState, Road};

/// Side effect requested by a state transition. Applied by the manager.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Effect {
    ShowStartMenu(bool),
    GenerateRoad,
    SetInputActive(bool),
    ResetPlayerPosition,
    ResetPlayerSteps,
    ResetCamera,
    SetStepsLabel(String),
    /// Enable input once the current dispatch cycle has finished.
    ArmInputDeferred,
}

/// Effects of entering `state`. The order is the order they must run in.
pub fn enter(state: GameState) -> (GameState, Vec<Effect>) {
    let effects = match state {
        GameState::Init => vec![
            Effect::ShowStartMenu(true),
            Effect::GenerateRoad,
            Effect::SetInputActive(false),
            Effect::ResetPlayerPosition,
            Effect::ResetPlayerSteps,
            Effect::ResetCamera,
        ],
        GameState::Playing => vec![
            Effect::ShowStartMenu(false),
            Effect::SetStepsLabel("0".to_string()),
            Effect::ArmInputDeferred,
        ],
        GameState::End => Vec::new(),
    };
    (state, effects)
}

/// Decides whether landing on `landed_index` loses the round.
///
/// Running past `road_length` counts as a loss, same as falling into a gap.
/// `landed_index == road_length` has no cell behind it and is not a loss.
pub fn check_result(road: &Road, road_length: usize, landed_index: usize) -> Option<GameState> {
    if landed_index <= road_length {
        match road.cell_at(landed_index) {
            Some(cell) if cell.is_gap() => Some(GameState::Init),
            _ => None,
        }
    } else {
        Some(GameState::Init)
    }
}
