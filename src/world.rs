use crate::block_state::BlockState;
use crate::chunk::{chunk_key, world_to_chunk, Chunk};
use rustc_hash::{FxHashMap, FxHashSet};

/// The world/level collaborator the engine borrows during enumeration and
/// chunk snapshotting. The engine never owns or stores a world; each call
/// takes it as a parameter.
pub trait World {
    /// Block at a world position; air where nothing was placed.
    fn block_at(&self, x: i32, y: i32, z: i32) -> BlockState;

    /// Fetches a chunk, generating it on demand. `None` means the host could
    /// not load or generate it; callers tolerate the gap.
    fn chunk_or_generate(&mut self, chunk_x: i32, chunk_z: i32) -> Option<&Chunk>;

    /// Lowest valid block y.
    fn min_y(&self) -> i32;

    /// Highest valid block y.
    fn max_y(&self) -> i32;
}

/// In-memory world backed by sparse chunks, generated on first touch.
#[derive(Debug, Clone)]
pub struct GridWorld {
    chunks: FxHashMap<i64, Chunk>,
    ungenerable: FxHashSet<i64>,
    min_y: i32,
    max_y: i32,
}

impl GridWorld {
    pub fn new() -> Self {
        Self::with_y_range(-64, 319)
    }

    pub fn with_y_range(min_y: i32, max_y: i32) -> Self {
        Self {
            chunks: FxHashMap::default(),
            ungenerable: FxHashSet::default(),
            min_y,
            max_y,
        }
    }

    pub fn set_block(&mut self, x: i32, y: i32, z: i32, block: BlockState) {
        let (cx, cz) = (world_to_chunk(x), world_to_chunk(z));
        self.chunks
            .entry(chunk_key(cx, cz))
            .or_insert_with(|| Chunk::new(cx, cz))
            .set_block(x, y, z, block);
    }

    /// Marks a chunk as impossible to load or generate, so that
    /// `chunk_or_generate` reports it absent. Mirrors hosts that refuse to
    /// create chunks outside their loaded area.
    pub fn mark_ungenerable(&mut self, chunk_x: i32, chunk_z: i32) {
        self.ungenerable.insert(chunk_key(chunk_x, chunk_z));
    }

    pub fn chunk_count(&self) -> usize {
        self.chunks.len()
    }
}

impl Default for GridWorld {
    fn default() -> Self {
        Self::new()
    }
}

impl World for GridWorld {
    fn block_at(&self, x: i32, y: i32, z: i32) -> BlockState {
        let key = chunk_key(world_to_chunk(x), world_to_chunk(z));
        self.chunks
            .get(&key)
            .and_then(|chunk| chunk.block_at(x, y, z))
            .cloned()
            .unwrap_or_else(BlockState::air)
    }

    fn chunk_or_generate(&mut self, chunk_x: i32, chunk_z: i32) -> Option<&Chunk> {
        let key = chunk_key(chunk_x, chunk_z);
        if self.ungenerable.contains(&key) {
            return None;
        }
        Some(
            self.chunks
                .entry(key)
                .or_insert_with(|| Chunk::new(chunk_x, chunk_z)),
        )
    }

    fn min_y(&self) -> i32 {
        self.min_y
    }

    fn max_y(&self) -> i32 {
        self.max_y
    }
}
