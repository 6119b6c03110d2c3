//! Legality of a square footprint against the overlays.

use crate::constants::*;
use crate::game_data::{Race, UnitTypeData};
use crate::layer::MapLayers;
use crate::location::Point2;
use bitflags::*;
use itertools::iproduct;

bitflags! {
    /// Optional checks applied on top of "buildable and not blocked".
    #[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
    pub struct PlacementRules: u8 {
        const REQUIRE_CREEP = 1;
        const REQUIRE_POWER = 2;
        const AVOID_CREEP = 4;
        const AVOID_NATURAL = 8;
    }
}

impl Default for PlacementRules {
    fn default() -> Self {
        PlacementRules::AVOID_CREEP
    }
}

impl PlacementRules {
    /// Race policy for a structure type.
    ///
    /// Zerg builds on creep except for the hatchery, which makes its own.
    /// Protoss needs power except for the nexus and the pylon. Everything but
    /// Zerg stays off creep, and headquarters stay out of natural buffers.
    pub fn for_structure(structure: &UnitTypeData) -> PlacementRules {
        let mut rules = PlacementRules::empty();
        rules.set(
            PlacementRules::REQUIRE_CREEP,
            structure.race == Race::Zerg && structure.unit_id != unit::HATCHERY,
        );
        rules.set(
            PlacementRules::REQUIRE_POWER,
            structure.race == Race::Protoss
                && structure.unit_id != unit::NEXUS
                && structure.unit_id != unit::PYLON,
        );
        rules.set(PlacementRules::AVOID_CREEP, structure.race != Race::Zerg);
        rules.set(
            PlacementRules::AVOID_NATURAL,
            is_headquarter(structure.unit_id),
        );
        rules
    }
}

/// A square tile region: top-left tile and side length.
#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug)]
pub struct Footprint {
    pub x: i32,
    pub y: i32,
    pub size: i32,
}

impl Footprint {
    pub fn new(x: i32, y: i32, size: i32) -> Self {
        Footprint { x, y, size }
    }

    /// The footprint of `diameter` tiles centered on `center`, whose
    /// corner is `center - radius` truncated.
    pub fn centered(center: Point2, radius: f32, diameter: i32) -> Self {
        let (x, y) = center.footprint_origin(radius);
        Footprint::new(x, y, diameter)
    }

    pub fn tiles(self) -> impl Iterator<Item = (i32, i32)> {
        iproduct!(self.x..self.x + self.size, self.y..self.y + self.size)
    }
}

impl MapLayers {
    /// True when every tile of `footprint` is buildable, unblocked, and
    /// passes each active rule.
    pub fn is_valid_footprint(&self, footprint: Footprint, rules: PlacementRules) -> bool {
        footprint.tiles().all(|(x, y)| self.is_valid_tile(x, y, rules))
    }

    pub fn is_valid_tile(&self, x: i32, y: i32, rules: PlacementRules) -> bool {
        if self.blocked.is_set(x, y) || !self.placement.is_set(x, y) {
            return false;
        }
        let creep = self.creep.is_set(x, y);
        if rules.contains(PlacementRules::REQUIRE_CREEP) && !creep {
            return false;
        }
        if rules.contains(PlacementRules::AVOID_CREEP) && creep {
            return false;
        }
        if rules.contains(PlacementRules::REQUIRE_POWER) && !self.power.is_set(x, y) {
            return false;
        }
        if rules.contains(PlacementRules::AVOID_NATURAL) && self.natural.is_set(x, y) {
            return false;
        }
        true
    }
}
