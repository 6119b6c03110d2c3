use crate::game_data::UnitTypeId;

/// Extra radius reserved around a natural expansion's resource cluster.
pub const NATURAL_BUFFER: f32 = 3.5;

/// Number of rings walked by the spiral searches before giving up.
pub const SPIRAL_RINGS: u32 = 49;

/// Footprint of a production structure that can carry an add-on.
pub const ADDON_PARENT_RADIUS: f32 = 1.5;
pub const ADDON_PARENT_DIAMETER: i32 = 3;

/// Footprint of the add-on itself.
pub const ADDON_RADIUS: f32 = 1.0;
pub const ADDON_DIAMETER: i32 = 2;

/// Offset from the parent's anchor to the add-on's anchor.
pub const ADDON_OFFSET_X: f32 = 2.5;
pub const ADDON_OFFSET_Y: f32 = -0.5;

/// Unit type ids used by the placement rules.
pub mod unit {
    use super::UnitTypeId;

    pub const COMMAND_CENTER: UnitTypeId = UnitTypeId(18);
    pub const SUPPLY_DEPOT: UnitTypeId = UnitTypeId(19);
    pub const BARRACKS: UnitTypeId = UnitTypeId(21);
    pub const FACTORY: UnitTypeId = UnitTypeId(27);
    pub const STARPORT: UnitTypeId = UnitTypeId(28);
    pub const NEXUS: UnitTypeId = UnitTypeId(59);
    pub const PYLON: UnitTypeId = UnitTypeId(60);
    pub const GATEWAY: UnitTypeId = UnitTypeId(62);
    pub const HATCHERY: UnitTypeId = UnitTypeId(86);
    pub const SPAWNING_POOL: UnitTypeId = UnitTypeId(89);
    pub const LAIR: UnitTypeId = UnitTypeId(100);
    pub const HIVE: UnitTypeId = UnitTypeId(101);
    pub const PLANETARY_FORTRESS: UnitTypeId = UnitTypeId(130);
    pub const ORBITAL_COMMAND: UnitTypeId = UnitTypeId(132);
}

/// Returns true for the town-hall structures of every race.
///
/// Headquarters keep clear of natural expansion buffers so they do not
/// end up on top of another base's mining area.
pub fn is_headquarter(unit_type: UnitTypeId) -> bool {
    matches!(
        unit_type,
        unit::COMMAND_CENTER
            | unit::ORBITAL_COMMAND
            | unit::PLANETARY_FORTRESS
            | unit::NEXUS
            | unit::HATCHERY
            | unit::LAIR
            | unit::HIVE
    )
}
