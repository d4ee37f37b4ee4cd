use crate::block_state::BlockState;
use crate::error::SnapshotError;
use rustc_hash::FxHashMap;
use serde::{Deserialize, Serialize};

const MAGIC: &[u8; 4] = b"BBCS";
const VERSION: u32 = 1;

/// Horizontal side length of a chunk column.
pub const CHUNK_SIZE: i32 = 16;

/// Converts a world coordinate to its chunk coordinate.
///
/// Arithmetic shift, so negative world coordinates land in negative chunks
/// (`-1 >> 4 == -1`), matching the host world's partitioning.
pub fn world_to_chunk(coord: i32) -> i32 {
    coord >> 4
}

/// Packs a pair of chunk coordinates into a single map key.
pub fn chunk_key(chunk_x: i32, chunk_z: i32) -> i64 {
    ((chunk_x as i64) << 32) | (chunk_z as u32 as i64)
}

/// Unpacks a key produced by [`chunk_key`].
pub fn split_chunk_key(key: i64) -> (i32, i32) {
    ((key >> 32) as i32, key as i32)
}

/// A 16×16 column of the world, the unit of loading and rollback.
///
/// Block storage is sparse and keyed by world coordinates; unset positions
/// read as air.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Chunk {
    pub chunk_x: i32,
    pub chunk_z: i32,
    blocks: FxHashMap<(i32, i32, i32), BlockState>,
}

impl Chunk {
    pub fn new(chunk_x: i32, chunk_z: i32) -> Self {
        Self {
            chunk_x,
            chunk_z,
            blocks: FxHashMap::default(),
        }
    }

    pub fn set_block(&mut self, x: i32, y: i32, z: i32, block: BlockState) {
        debug_assert_eq!(world_to_chunk(x), self.chunk_x);
        debug_assert_eq!(world_to_chunk(z), self.chunk_z);
        self.blocks.insert((x, y, z), block);
    }

    pub fn block_at(&self, x: i32, y: i32, z: i32) -> Option<&BlockState> {
        self.blocks.get(&(x, y, z))
    }

    pub fn block_count(&self) -> usize {
        self.blocks.len()
    }

    /// Shallow snapshot of this chunk's block contents, framed as magic +
    /// version + bincode payload. This is the rollback format, not the
    /// world's persisted chunk encoding.
    pub fn fast_serialize(&self) -> Result<Vec<u8>, SnapshotError> {
        let payload = bincode::serialize(self)?;
        let mut buf = Vec::with_capacity(8 + payload.len());
        buf.extend_from_slice(MAGIC);
        buf.extend_from_slice(&VERSION.to_le_bytes());
        buf.extend_from_slice(&payload);
        Ok(buf)
    }

    pub fn from_snapshot(data: &[u8]) -> Result<Chunk, SnapshotError> {
        if data.len() < 8 {
            return Err(SnapshotError::TooShort);
        }
        if &data[0..4] != MAGIC {
            return Err(SnapshotError::BadMagic);
        }
        let version = u32::from_le_bytes([data[4], data[5], data[6], data[7]]);
        if version != VERSION {
            return Err(SnapshotError::UnsupportedVersion(version));
        }
        Ok(bincode::deserialize(&data[8..])?)
    }
}
