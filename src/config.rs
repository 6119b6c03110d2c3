use crate::constants::*;
use serde::{Deserialize, Serialize};

/// How the power overlay is refreshed each frame.
#[derive(Copy, Clone, Eq, PartialEq, Debug, Default, Serialize, Deserialize)]
pub enum PowerRefresh {
    /// Clear the overlay, then stamp the current power sources.
    #[default]
    Rebuild,
    /// Stamp the current power sources over whatever is already there.
    /// Fields of destroyed pylons stay marked.
    Accumulate,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct MapConfig {
    /// Added to a natural's resource radius when reserving its buffer.
    #[serde(default = "default_natural_buffer")]
    pub natural_buffer: f32,
    /// Rings walked by the spiral searches before reporting no placement.
    #[serde(default = "default_spiral_rings")]
    pub spiral_rings: u32,
    #[serde(default)]
    pub power_refresh: PowerRefresh,
}

fn default_natural_buffer() -> f32 {
    NATURAL_BUFFER
}

fn default_spiral_rings() -> u32 {
    SPIRAL_RINGS
}

impl Default for MapConfig {
    fn default() -> Self {
        MapConfig {
            natural_buffer: NATURAL_BUFFER,
            spiral_rings: SPIRAL_RINGS,
            power_refresh: PowerRefresh::default(),
        }
    }
}

impl MapConfig {
    pub fn with_natural_buffer(mut self, buffer: f32) -> Self {
        self.natural_buffer = buffer;
        self
    }

    pub fn with_spiral_rings(mut self, rings: u32) -> Self {
        self.spiral_rings = rings;
        self
    }

    pub fn with_power_refresh(mut self, refresh: PowerRefresh) -> Self {
        self.power_refresh = refresh;
        self
    }
}
