//! file: status.rs
//! author: Jacob Xie
//! date: 2025/12/14 23:44:54 Sunday
//! brief:

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameState {
    Init,
    Playing,
    End,
}

impl GameState {
    pub fn label(self) -> (&'static str, u32) {
        match self {
            GameState::Init => ("Ready", 0x93c5fd),
            GameState::Playing => ("Playing", 0x34d399),
            GameState::End => ("Finished", 0xf87171),
        }
    }
}
