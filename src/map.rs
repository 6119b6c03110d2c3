//! The live map: overlay updates from game events and placement queries.
//!
//! A `GameMap` is created from the static map rasters and then owned by a
//! single caller. Event handlers and the per-frame refresh mutate the
//! overlays in place; the placement queries only read them.

use crate::config::*;
use crate::constants::*;
use crate::error::MapError;
use crate::game_data::*;
use crate::grid::GridLayer;
use crate::layer::*;
use crate::location::Point2;
use crate::placement::*;
use crate::search::spiral_search;
use crate::stamps::*;
use log::*;

#[derive(Clone, Debug)]
pub struct GameMap {
    layers: MapLayers,
    config: MapConfig,
}

impl GameMap {
    pub fn new(start: &StartRaw) -> Result<GameMap, MapError> {
        Self::with_config(start, MapConfig::default())
    }

    pub fn with_config(start: &StartRaw, config: MapConfig) -> Result<GameMap, MapError> {
        let layers = MapLayers::new(
            &start.placement_grid,
            &start.pathing_grid,
            &start.terrain_height,
        )?;
        debug!(
            "GameMap: initialized {}x{} overlays",
            layers.width(),
            layers.height()
        );
        Ok(GameMap { layers, config })
    }

    pub fn config(&self) -> &MapConfig {
        &self.config
    }

    pub fn width(&self) -> u32 {
        self.layers.width()
    }

    pub fn height(&self) -> u32 {
        self.layers.height()
    }

    pub fn layers(&self) -> &MapLayers {
        &self.layers
    }

    pub fn layer(&self, layer: Layer) -> &GridLayer {
        self.layers.get(layer)
    }

    //
    // Updates
    //

    /// Apply a structure event from the dispatcher.
    ///
    /// Unknown unit types or abilities leave the overlays untouched and are
    /// reported back to the caller.
    pub fn handle_event(
        &mut self,
        event: &UnitEvent,
        catalog: &dyn StructureCatalog,
    ) -> Result<(), MapError> {
        match event {
            UnitEvent::StructureAdded(unit) => self.stamp_unit(unit, catalog, 1),
            UnitEvent::StructureDestroyed(unit) => self.stamp_unit(unit, catalog, 0),
        }
    }

    pub fn on_structure_added(
        &mut self,
        unit: &Unit,
        catalog: &dyn StructureCatalog,
    ) -> Result<(), MapError> {
        self.stamp_unit(unit, catalog, 1)
    }

    pub fn on_structure_destroyed(
        &mut self,
        unit: &Unit,
        catalog: &dyn StructureCatalog,
    ) -> Result<(), MapError> {
        self.stamp_unit(unit, catalog, 0)
    }

    fn stamp_unit(
        &mut self,
        unit: &Unit,
        catalog: &dyn StructureCatalog,
        value: u8,
    ) -> Result<(), MapError> {
        let radius = catalog
            .require_unit_type(unit.unit_type)
            .and_then(|structure| catalog.structure_radius(&structure))
            .inspect_err(|err| warn!("GameMap: ignoring structure event: {}", err))?;
        square_stamp(&mut self.layers.blocked, unit.position, radius, value);
        Ok(())
    }

    /// Reserve the buffer zone around a natural expansion's resource cluster.
    pub fn register_natural(&mut self, center: Point2, radius: f32) {
        let radius = radius + self.config.natural_buffer;
        let tiles = circle_stamp(&mut self.layers.natural, center, radius, 1);
        debug!(
            "GameMap: registered natural at ({}, {}) covering {} tiles",
            center.x, center.y, tiles
        );
    }

    /// Block a square footprint before any structure exists there.
    pub fn register_structure(&mut self, center: Point2, radius: f32) {
        square_stamp(&mut self.layers.blocked, center, radius, 1);
    }

    /// Block the footprint `structure` would occupy at `position`.
    pub fn reserve(
        &mut self,
        structure: &UnitTypeData,
        position: Point2,
        catalog: &dyn StructureCatalog,
    ) -> Result<(), MapError> {
        let radius = catalog.structure_radius(structure)?;
        debug!(
            "GameMap: reserving {:?} at ({}, {})",
            structure.unit_id, position.x, position.y
        );
        square_stamp(&mut self.layers.blocked, position, radius, 1);
        Ok(())
    }

    /// Load this frame's visibility and creep and re-stamp the power fields.
    pub fn refresh_frame(&mut self, frame: &FrameSnapshot) -> Result<(), MapError> {
        // Both images are checked before either overlay changes.
        let visibility = self.layers.explored.decode_compatible(frame.visibility)?;
        let creep = self.layers.creep.decode_compatible(frame.creep)?;
        self.layers.get_mut(Layer::Explored).load(&visibility)?;
        self.layers.get_mut(Layer::Creep).load(&creep)?;

        let power = self.layers.get_mut(Layer::Power);
        if self.config.power_refresh == PowerRefresh::Rebuild {
            power.clear();
        }
        for source in frame.power_sources {
            circle_stamp(power, source.position, source.radius, 1);
        }
        trace!(
            "GameMap: frame refresh stamped {} power sources",
            frame.power_sources.len()
        );
        Ok(())
    }

    //
    // Placement
    //

    /// Nearest legal anchor for `structure` around `anchor`, or `None` when
    /// the spiral search runs out of rings.
    pub fn find_placement(
        &self,
        structure: &UnitTypeData,
        anchor: Point2,
        spacing: f32,
        catalog: &dyn StructureCatalog,
    ) -> Result<Option<Point2>, MapError> {
        let (radius, diameter) = footprint_size(structure, spacing, catalog)?;
        let rules = PlacementRules::for_structure(structure);

        let found = spiral_search(anchor.aligned(diameter), self.config.spiral_rings, |p| {
            self.layers
                .is_valid_footprint(Footprint::centered(p, radius, diameter), rules)
        });
        if found.is_none() {
            debug!(
                "GameMap: no placement for {:?} near ({}, {})",
                structure.unit_id, anchor.x, anchor.y
            );
        }
        Ok(found)
    }

    /// Nearest anchor where a 3x3 production structure and its 2x2 add-on
    /// both fit.
    pub fn find_placement_with_addon(&self, anchor: Point2) -> Option<Point2> {
        let rules = PlacementRules::default();
        let anchor = anchor.aligned(ADDON_PARENT_DIAMETER);

        let found = spiral_search(anchor, self.config.spiral_rings, |p| {
            self.layers.is_valid_footprint(
                Footprint::centered(p, ADDON_PARENT_RADIUS, ADDON_PARENT_DIAMETER),
                rules,
            ) && self
                .layers
                .is_valid_footprint(addon_footprint(p), rules)
        });
        if found.is_none() {
            debug!(
                "GameMap: no add-on placement near ({}, {})",
                anchor.x, anchor.y
            );
        }
        found
    }

    pub fn is_valid_placement(
        &self,
        structure: &UnitTypeData,
        anchor: Point2,
        spacing: f32,
        catalog: &dyn StructureCatalog,
    ) -> Result<bool, MapError> {
        let (radius, diameter) = footprint_size(structure, spacing, catalog)?;
        let footprint = Footprint::centered(anchor.aligned(diameter), radius, diameter);
        Ok(self
            .layers
            .is_valid_footprint(footprint, PlacementRules::for_structure(structure)))
    }

    //
    // Point queries
    //

    pub fn is_creep(&self, x: i32, y: i32) -> bool {
        self.layers.creep.is_set(x, y)
    }

    pub fn is_powered(&self, x: i32, y: i32) -> bool {
        self.layers.power.is_set(x, y)
    }

    pub fn is_blocked(&self, x: i32, y: i32) -> bool {
        self.layers.blocked.is_set(x, y)
    }

    pub fn is_explored(&self, x: i32, y: i32) -> bool {
        self.layers.explored.is_set(x, y)
    }

    pub fn is_buildable(&self, x: i32, y: i32) -> bool {
        self.layers.placement.is_set(x, y)
    }

    pub fn is_non_pathable(&self, x: i32, y: i32) -> bool {
        self.layers.non_pathable.is_set(x, y)
    }

    pub fn is_natural(&self, x: i32, y: i32) -> bool {
        self.layers.natural.is_set(x, y)
    }

    pub fn terrain_height(&self, x: i32, y: i32) -> u8 {
        self.layers.terrain_height.get(x, y)
    }
}

/// Radius and tile diameter of `structure` grown by `spacing`.
///
/// A diameter below one tile would make every anchor trivially legal, so it
/// is rejected.
fn footprint_size(
    structure: &UnitTypeData,
    spacing: f32,
    catalog: &dyn StructureCatalog,
) -> Result<(f32, i32), MapError> {
    let radius = catalog.structure_radius(structure)? + spacing;
    let diameter = (radius * 2.0) as i32;
    if diameter < 1 {
        return Err(MapError::EmptyFootprint { radius });
    }
    Ok((radius, diameter))
}

/// The add-on's footprint for a parent anchored at `parent`.
pub fn addon_footprint(parent: Point2) -> Footprint {
    Footprint::new(
        (parent.x + ADDON_OFFSET_X - ADDON_RADIUS) as i32,
        (parent.y + ADDON_OFFSET_Y - ADDON_RADIUS) as i32,
        ADDON_DIAMETER,
    )
}
