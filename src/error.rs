use crate::game_data::{AbilityId, UnitTypeId};
use crate::layer::Layer;

#[derive(Debug, thiserror::Error, PartialEq)]
pub enum MapError {
    #[error("{layer:?} bitmap holds {actual} tiles, expected {expected}")]
    DimensionMismatch {
        layer: Layer,
        expected: usize,
        actual: usize,
    },

    #[error("invalid map dimensions {width}x{height}")]
    InvalidDimensions { width: u32, height: u32 },

    #[error("unsupported image bit depth: {0}")]
    UnsupportedBitDepth(u32),

    #[error("footprint radius {radius} is smaller than one tile")]
    EmptyFootprint { radius: f32 },

    #[error("unknown unit type {0:?}")]
    UnknownUnitType(UnitTypeId),

    #[error("no footprint known for ability {0:?}")]
    UnknownAbility(AbilityId),
}
