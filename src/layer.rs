//! The named overlays kept for a map and the set that owns them.
//!
//! `MapLayers` is built once from the static map data. Every overlay shares
//! the placement grid's dimensions; none of them is ever resized.

use crate::error::MapError;
use crate::grid::*;
use serde::{Deserialize, Serialize};

/// Identifies one overlay.
#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug, Serialize, Deserialize)]
pub enum Layer {
    /// Buildable terrain. Static.
    Placement,
    /// Tiles that block ground movement. Static.
    NonPathable,
    /// Elevation per tile. Static.
    TerrainHeight,
    /// Tiles covered by a structure footprint or a reservation.
    Blocked,
    /// Buffer zones around natural expansions.
    Natural,
    /// Tiles inside a power field.
    Power,
    /// Tiles covered by creep.
    Creep,
    /// Tiles that have been seen.
    Explored,
}

impl Layer {
    pub const ALL: [Layer; 8] = [
        Layer::Placement,
        Layer::NonPathable,
        Layer::TerrainHeight,
        Layer::Blocked,
        Layer::Natural,
        Layer::Power,
        Layer::Creep,
        Layer::Explored,
    ];
}

#[derive(Clone, Debug)]
pub struct MapLayers {
    pub placement: GridLayer,
    pub non_pathable: GridLayer,
    pub terrain_height: GridLayer,
    pub blocked: GridLayer,
    pub natural: GridLayer,
    pub power: GridLayer,
    pub creep: GridLayer,
    pub explored: GridLayer,
}

impl MapLayers {
    /// Allocate every overlay from the static rasters. The placement grid
    /// decides the dimensions; the other static rasters must match it.
    pub fn new(
        placement: &ImageData,
        pathing: &ImageData,
        terrain_height: &ImageData,
    ) -> Result<MapLayers, MapError> {
        let (width, height) = (placement.width, placement.height);
        if width == 0 || height == 0 {
            return Err(MapError::InvalidDimensions { width, height });
        }
        for image in [pathing, terrain_height] {
            if image.width != width || image.height != height {
                return Err(MapError::InvalidDimensions {
                    width: image.width,
                    height: image.height,
                });
            }
        }

        Ok(MapLayers {
            placement: GridLayer::from_image(Layer::Placement, placement)?,
            non_pathable: GridLayer::from_image(Layer::NonPathable, pathing)?,
            terrain_height: GridLayer::from_image(Layer::TerrainHeight, terrain_height)?,
            blocked: GridLayer::new(Layer::Blocked, width, height),
            natural: GridLayer::new(Layer::Natural, width, height),
            power: GridLayer::new(Layer::Power, width, height),
            creep: GridLayer::new(Layer::Creep, width, height),
            explored: GridLayer::new(Layer::Explored, width, height),
        })
    }

    pub fn width(&self) -> u32 {
        self.placement.width()
    }

    pub fn height(&self) -> u32 {
        self.placement.height()
    }

    pub fn get(&self, layer: Layer) -> &GridLayer {
        match layer {
            Layer::Placement => &self.placement,
            Layer::NonPathable => &self.non_pathable,
            Layer::TerrainHeight => &self.terrain_height,
            Layer::Blocked => &self.blocked,
            Layer::Natural => &self.natural,
            Layer::Power => &self.power,
            Layer::Creep => &self.creep,
            Layer::Explored => &self.explored,
        }
    }

    pub fn get_mut(&mut self, layer: Layer) -> &mut GridLayer {
        match layer {
            Layer::Placement => &mut self.placement,
            Layer::NonPathable => &mut self.non_pathable,
            Layer::TerrainHeight => &mut self.terrain_height,
            Layer::Blocked => &mut self.blocked,
            Layer::Natural => &mut self.natural,
            Layer::Power => &mut self.power,
            Layer::Creep => &mut self.creep,
            Layer::Explored => &mut self.explored,
        }
    }
}
