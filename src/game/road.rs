//! file: road.rs
//! author: Jacob Xie
//! date: 2026/10/18 14:11:27 Sunday
//! brief: track generation

use rand::Rng;

use super::{BlockNode, BlockTemplate, BlockType, Vec3};

/// Height the blocks sit at, below the player's feet.
pub const BLOCK_Y: f32 = -1.5;

#[derive(Debug, Clone, Default, PartialEq)]
pub struct Road {
    cells: Vec<BlockType>,
}

impl Road {
    /// Cell 0 is always solid and a gap is always followed by a solid cell.
    pub fn generate<R: Rng + ?Sized>(length: usize, rng: &mut R) -> Self {
        let mut cells = Vec::with_capacity(length);
        if length == 0 {
            return Self { cells };
        }

        cells.push(BlockType::Solid);
        for i in 1..length {
            let next = if cells[i - 1].is_gap() || rng.gen_bool(0.5) {
                BlockType::Solid
            } else {
                BlockType::Gap
            };
            cells.push(next);
        }

        Self { cells }
    }

    pub fn from_cells(cells: Vec<BlockType>) -> Self {
        Self { cells }
    }

    pub fn len(&self) -> usize {
        self.cells.len()
    }

    pub fn is_empty(&self) -> bool {
        self.cells.is_empty()
    }

    pub fn cells(&self) -> &[BlockType] {
        &self.cells
    }

    pub fn cell_at(&self, index: usize) -> Option<BlockType> {
        self.cells.get(index).copied()
    }

    pub fn gap_count(&self) -> usize {
        self.cells.iter().filter(|cell| cell.is_gap()).count()
    }

    /// One block per solid cell; nothing at all without a template.
    pub fn spawn_blocks(&self, template: Option<&BlockTemplate>) -> Vec<BlockNode> {
        self.cells
            .iter()
            .enumerate()
            .filter_map(|(index, &kind)| spawn_block_by_type(template, kind, index))
            .collect()
    }
}

pub fn block_position(index: usize) -> Vec3 {
    Vec3::new(index as f32, BLOCK_Y, 0.0)
}

fn spawn_block_by_type(
    template: Option<&BlockTemplate>,
    kind: BlockType,
    index: usize,
) -> Option<BlockNode> {
    let template = template?;
    match kind {
        BlockType::Solid => Some(template.instantiate(index, block_position(index))),
        BlockType::Gap => None,
    }
}
