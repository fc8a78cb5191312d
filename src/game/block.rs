//! file: block.rs
//! author: Jacob Xie
//! date: 2026/10/18 14:02:11 Sunday
//! brief: track cell types and spawned block nodes

use serde::{Deserialize, Serialize};

use super::Vec3;

/// Kind of a single track cell.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum BlockType {
    Gap,
    Solid,
}

impl BlockType {
    pub fn is_gap(self) -> bool {
        matches!(self, BlockType::Gap)
    }
}

/// Template a visual block is instantiated from.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct BlockTemplate {
    pub color: u32,
    pub size: f32,
}

impl Default for BlockTemplate {
    fn default() -> Self {
        Self {
            color: 0x64748b,
            size: 0.9,
        }
    }
}

impl BlockTemplate {
    pub fn instantiate(&self, index: usize, position: Vec3) -> BlockNode {
        BlockNode {
            index,
            position,
            template: *self,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BlockNode {
    pub index: usize,
    pub position: Vec3,
    pub template: BlockTemplate,
}
