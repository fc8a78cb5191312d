//! file: step.rs
//! author: Jacob Xie
//! date: 2026/10/18 14:06:02 Sunday
//! brief: jump lengths

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum JumpStep {
    One,
    Two,
}

impl JumpStep {
    pub fn distance(self) -> usize {
        match self {
            JumpStep::One => 1,
            JumpStep::Two => 2,
        }
    }
}
