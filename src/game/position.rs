//! file: position.rs
//! author: Jacob Xie
//! date: 2026/10/18 14:05:40 Sunday
//! brief: world position

use super::JumpStep;

#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct Vec3 {
    pub x: f32,
    pub y: f32,
    pub z: f32,
}

impl Vec3 {
    pub const ZERO: Vec3 = Vec3 {
        x: 0.0,
        y: 0.0,
        z: 0.0,
    };

    pub fn new(x: f32, y: f32, z: f32) -> Self {
        Self { x, y, z }
    }

    pub fn offset(self, step: JumpStep) -> Self {
        Self {
            x: self.x + step.distance() as f32,
            ..self
        }
    }

    pub fn lerp(self, to: Vec3, t: f32) -> Self {
        let t = t.clamp(0.0, 1.0);
        Self {
            x: self.x + (to.x - self.x) * t,
            y: self.y + (to.y - self.y) * t,
            z: self.z + (to.z - self.z) * t,
        }
    }
}
