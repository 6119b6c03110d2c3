pub mod config;
pub mod constants;
pub mod error;
pub mod game_data;
pub mod grid;
pub mod layer;
pub mod location;
pub mod map;
pub mod placement;
pub mod search;
pub mod stamps;

pub use config::{MapConfig, PowerRefresh};
pub use error::MapError;
pub use game_data::*;
pub use grid::{GridLayer, ImageData};
pub use layer::{Layer, MapLayers};
pub use location::Point2;
pub use map::GameMap;
pub use placement::{Footprint, PlacementRules};
