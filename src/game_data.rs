//! Data handed to the map by the surrounding bot.
//!
//! The map does not talk to the game itself. Static rasters, per-frame
//! snapshots and unit events are delivered here, and footprint sizes come
//! from a `StructureCatalog` supplied by the caller.

use crate::error::MapError;
use crate::grid::ImageData;
use crate::location::Point2;
use fnv::FnvHashMap;
use serde::{Deserialize, Serialize};

#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug, Serialize, Deserialize)]
pub struct UnitTypeId(pub u32);

#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug, Serialize, Deserialize)]
pub struct AbilityId(pub u32);

#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug, Serialize, Deserialize)]
pub enum Race {
    NoRace,
    Terran,
    Zerg,
    Protoss,
    Random,
}

/// Static description of a structure type.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct UnitTypeData {
    pub unit_id: UnitTypeId,
    pub race: Race,
    /// The build ability, used to look up the footprint.
    pub ability_id: AbilityId,
}

impl UnitTypeData {
    pub fn new(unit_id: UnitTypeId, race: Race, ability_id: AbilityId) -> Self {
        UnitTypeData {
            unit_id,
            race,
            ability_id,
        }
    }
}

/// Lookup of unit type data and build footprints.
pub trait StructureCatalog {
    fn unit_type(&self, unit_type: UnitTypeId) -> Option<UnitTypeData>;

    fn footprint_radius(&self, ability: AbilityId) -> Option<f32>;

    fn require_unit_type(&self, unit_type: UnitTypeId) -> Result<UnitTypeData, MapError> {
        self.unit_type(unit_type)
            .ok_or(MapError::UnknownUnitType(unit_type))
    }

    fn structure_radius(&self, structure: &UnitTypeData) -> Result<f32, MapError> {
        self.footprint_radius(structure.ability_id)
            .ok_or(MapError::UnknownAbility(structure.ability_id))
    }
}

/// In-memory catalog for offline runs and tests.
#[derive(Clone, Debug, Default)]
pub struct StaticCatalog {
    unit_types: FnvHashMap<UnitTypeId, UnitTypeData>,
    footprints: FnvHashMap<AbilityId, f32>,
}

impl StaticCatalog {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a structure type together with its footprint radius.
    pub fn insert(&mut self, structure: UnitTypeData, footprint_radius: f32) {
        self.footprints.insert(structure.ability_id, footprint_radius);
        self.unit_types.insert(structure.unit_id, structure);
    }

    pub fn with(mut self, structure: UnitTypeData, footprint_radius: f32) -> Self {
        self.insert(structure, footprint_radius);
        self
    }
}

impl StructureCatalog for StaticCatalog {
    fn unit_type(&self, unit_type: UnitTypeId) -> Option<UnitTypeData> {
        self.unit_types.get(&unit_type).cloned()
    }

    fn footprint_radius(&self, ability: AbilityId) -> Option<f32> {
        self.footprints.get(&ability).copied()
    }
}

/// Static map rasters received once at game start.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct StartRaw {
    pub placement_grid: ImageData,
    pub pathing_grid: ImageData,
    pub terrain_height: ImageData,
}

#[derive(Copy, Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct PowerSource {
    pub position: Point2,
    pub radius: f32,
}

/// Per-frame observation data.
#[derive(Copy, Clone, Debug)]
pub struct FrameSnapshot<'a> {
    pub visibility: &'a ImageData,
    pub creep: &'a ImageData,
    pub power_sources: &'a [PowerSource],
}

#[derive(Copy, Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Unit {
    pub unit_type: UnitTypeId,
    pub position: Point2,
}

#[derive(Copy, Clone, Debug, PartialEq, Serialize, Deserialize)]
pub enum UnitEvent {
    StructureAdded(Unit),
    StructureDestroyed(Unit),
}
