/// Error type for shape construction.
///
/// A fully constructed shape never fails during enumeration; every invalid
/// parameter combination is rejected here, before any voxel is classified.
#[derive(Debug, thiserror::Error)]
pub enum ShapeError {
    #[error("{name} must be strictly positive, got {value}")]
    NonPositiveDimension { name: &'static str, value: i32 },
    #[error("shape spans y {min_y}..={max_y}, entirely outside world range {world_min}..={world_max}")]
    OutsideWorldBounds {
        min_y: i32,
        max_y: i32,
        world_min: i32,
        world_max: i32,
    },
}

/// Error type for chunk snapshot encoding and decoding.
#[derive(Debug, thiserror::Error)]
pub enum SnapshotError {
    #[error("snapshot data too short")]
    TooShort,
    #[error("invalid snapshot magic bytes")]
    BadMagic,
    #[error("unsupported snapshot version: {0}")]
    UnsupportedVersion(u32),
    #[error(transparent)]
    Encoding(#[from] bincode::Error),
}

pub type Result<T, E = ShapeError> = std::result::Result<T, E>;
